pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::args::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, RunConfig};
pub use core::{etl::EtlEngine, pipeline::BuyerBasePipeline};
pub use utils::error::{EtlError, Result};
