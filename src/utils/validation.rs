use crate::utils::error::{EtlError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_input_files(field_name: &str, files: &[String]) -> Result<()> {
    if files.is_empty() {
        return Err(EtlError::NoInputFiles);
    }

    for file in files {
        validate_path(field_name, file)?;
    }

    Ok(())
}

/// The report is written as a plain file, so the output path must not name a directory.
pub fn validate_output_file(field_name: &str, path: &str) -> Result<()> {
    validate_path(field_name, path)?;

    if path.ends_with('/') || path.ends_with('\\') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Output path must name a file, not a directory".to_string(),
        });
    }

    Ok(())
}
