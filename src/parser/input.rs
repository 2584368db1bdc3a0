//! Reading trace text from disk or standard input.

use crate::utils::error::InputError;
use log::debug;
use std::io::Read;
use std::path::Path;

/// Read a whole stack trace
///
/// **Public** - used by the CLI commands
///
/// # Arguments
/// * `path` - File to read, or `None` for stdin
///
/// # Errors
/// * `InputError::InvalidPath` - Path is empty or a directory
/// * `InputError::ReadFailed` - I/O error while reading
pub fn read_trace(path: Option<&Path>) -> Result<String, InputError> {
    match path {
        Some(path) => {
            validate_input_path(path)?;
            debug!("Reading trace from: {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            debug!("Reading trace from stdin");
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Validate that an input path points to a readable file
///
/// **Public** - shared with argument validation
pub fn validate_input_path(path: &Path) -> Result<(), InputError> {
    if path.as_os_str().is_empty() {
        return Err(InputError::InvalidPath("Path is empty".to_string()));
    }

    if !path.exists() {
        return Err(InputError::InvalidPath(format!(
            "File not found: {}",
            path.display()
        )));
    }

    if path.is_dir() {
        return Err(InputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
