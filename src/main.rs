use anyhow::Context;
use clap::Parser;
use compradores_etl::config::collector::collect_input_files;
use compradores_etl::utils::{logger, validation::Validate};
use compradores_etl::{
    BuyerBasePipeline, CliConfig, EtlEngine, EtlError, LocalStorage, RunConfig, TomlConfig,
};
use std::io::Write;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::debug!("CLI args: {:?}", args);

    let file_config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path).and_then(|c| c.validate().map(|_| c)) {
                Ok(config) => Some(config),
                Err(e) => exit_with(&e),
            }
        }
        None => None,
    };

    let mut config = RunConfig::resolve(args.files, args.output, file_config.as_ref());

    if config.needs_prompt() {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        match collect_input_files(stdin.lock(), &mut stdout) {
            Ok(files) => config.input_files = files,
            Err(e) => exit_with(&e),
        }
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let storage = LocalStorage::default();
    let pipeline = BuyerBasePipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "Arquivo final salvo em: {}", output_path)
                .and_then(|_| stdout.flush())
                .context("failed to print the output path")?;
        }
        Err(e) => {
            tracing::error!(
                "❌ ETL process failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            exit_with(&e);
        }
    }

    Ok(())
}

fn exit_with(e: &EtlError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    tracing::info!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code())
}
