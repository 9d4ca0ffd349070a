//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::QuoteProxyConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<QuoteProxyConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: QuoteProxyConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let path = write_temp(
            "quote-proxy-loader-valid.toml",
            r#"
            [listener]
            bind_address = "127.0.0.1:8088"

            [upstream]
            url = "http://127.0.0.1:9000/quotes"
            timeout_secs = 5
            "#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8088");
        assert_eq!(config.upstream.timeout_secs, 5);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let path = write_temp(
            "quote-proxy-loader-invalid.toml",
            r#"
            [upstream]
            url = "not a url"
            "#,
        );
        assert!(matches!(
            load_config(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("quote-proxy-does-not-exist.toml");
        assert!(matches!(load_config(&path), Err(ConfigError::Io(_))));
    }
}
