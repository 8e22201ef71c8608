use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::Validation("ui.tick_rate_ms must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "invalid config: ui.tick_rate_ms must be > 0"
        );
    }

    #[test]
    fn test_read_error_display() {
        let err = ConfigError::Read {
            path: PathBuf::from("missing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read config file missing.toml: not found"
        );
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let source = toml::from_str::<toml::Value>("not [ valid").unwrap_err();
        let err = ConfigError::Parse {
            path: PathBuf::from("broken.toml"),
            source,
        };
        assert!(err.to_string().starts_with("failed to parse broken.toml:"));
    }
}
