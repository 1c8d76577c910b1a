#[cfg(feature = "cli")]
pub mod args;
pub mod cli;
pub mod collector;
pub mod toml_config;

use crate::core::report::DEFAULT_OUTPUT_FILE;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_input_files, validate_output_file, Validate};
use toml_config::TomlConfig;

/// Settings for one run after merging command line, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_files: Vec<String>,
    pub output_file: String,
}

impl RunConfig {
    /// Command-line values win over the config file; the output falls back to
    /// `base_compradores_final.csv`.
    pub fn resolve(
        cli_files: Vec<String>,
        cli_output: Option<String>,
        file_config: Option<&TomlConfig>,
    ) -> Self {
        let input_files = if cli_files.is_empty() {
            file_config
                .map(|c| c.input_files().to_vec())
                .unwrap_or_default()
        } else {
            cli_files
        };

        let output_file = cli_output
            .or_else(|| file_config.and_then(|c| c.output_path().map(String::from)))
            .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string());

        Self {
            input_files,
            output_file,
        }
    }

    pub fn needs_prompt(&self) -> bool {
        self.input_files.is_empty()
    }
}

impl ConfigProvider for RunConfig {
    fn input_files(&self) -> &[String] {
        &self.input_files
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_input_files("input_files", &self.input_files)?;
        validate_output_file("output_file", &self.output_file)
    }
}
