use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;

/// Errors raised while reading a configuration file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Invalid(#[from] GeneratorError),
}

/// Reads and validates a generator configuration from a JSON file.
pub fn load_config_from_json<P: AsRef<Path>>(path: P) -> Result<GeneratorConfig, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config: GeneratorConfig =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    config.validate()?;
    info!(path = %path.display(), "Loaded generator configuration");

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_config(r#"{ "max_decoy_attempts": 50 }"#);
        let config = load_config_from_json(file.path()).unwrap();
        assert_eq!(config.max_decoy_attempts, 50);
        assert_eq!(config.division, GeneratorConfig::default().division);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config_from_json("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let file = write_config("{ not json");
        let err = load_config_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_invalid_ranges_are_reported() {
        let file = write_config(
            r#"{ "subtraction": { "operand_a": {"min": 1, "max": 10}, "operand_b": {"min": 1, "max": 10}, "decoy_spread": 5 } }"#,
        );
        let err = load_config_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Invalid(GeneratorError::Configuration(_))));
    }
}
