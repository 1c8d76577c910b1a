use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "compradores-etl")]
#[command(about = "Consolidates Metabase customer exports into a single buyer base report")]
pub struct CliConfig {
    /// Input CSV exports, in merge order. Prompts interactively when omitted.
    pub files: Vec<String>,

    /// Report file to write (default: base_compradores_final.csv)
    #[arg(short, long)]
    pub output: Option<String>,

    /// TOML file with [input] files and [output] path
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}
