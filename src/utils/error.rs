use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cannot read input file '{path}': {source}")]
    InputFileError {
        path: String,
        source: std::io::Error,
    },

    #[error("Missing required column(s) in '{file}': {}", .missing.join(", "))]
    SchemaError { file: String, missing: Vec<String> },

    #[error("No input files were provided")]
    NoInputFiles,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Schema,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a run that failed with this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::NoInputFiles
            | EtlError::InputFileError { .. }
            | EtlError::CsvError(_) => ErrorCategory::Input,
            EtlError::SchemaError { .. } => ErrorCategory::Schema,
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            EtlError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::System => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::NoInputFiles => "Nenhum arquivo informado. Encerrando.".to_string(),
            EtlError::SchemaError { file, missing } => format!(
                "O arquivo '{}' não possui a(s) coluna(s) obrigatória(s): {}",
                file,
                missing.join(", ")
            ),
            EtlError::InputFileError { path, source } => {
                format!("Não foi possível ler o arquivo '{}': {}", path, source)
            }
            EtlError::CsvError(e) => format!("Falha ao ler o CSV: {}", e),
            EtlError::IoError(e) => format!("Falha de leitura/escrita: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::NoInputFiles => "Provide at least one CSV file path",
            EtlError::SchemaError { .. } => {
                "Export the report again with all customer columns included"
            }
            EtlError::InputFileError { .. } => {
                "Check the file name; relative paths are resolved from the working directory"
            }
            EtlError::CsvError(_) => {
                "Check that the file is a comma-delimited CSV with a header row"
            }
            EtlError::IoError(_) => "Check that the paths exist and are readable/writable",
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command-line arguments"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
