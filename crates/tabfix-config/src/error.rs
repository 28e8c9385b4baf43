//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `${VAR}` reference to a variable missing from the environment.
    #[error("Environment variable {0} is not set")]
    UnsetVariable(String),

    #[error("Bad substitution pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// First error reported by the validator.
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_shows_path() {
        let err = ConfigError::NotFound(PathBuf::from("/etc/tabfix/config.toml"));
        assert_eq!(
            err.to_string(),
            "Config file not found: /etc/tabfix/config.toml"
        );
    }

    #[test]
    fn test_read_error_keeps_source() {
        let err = ConfigError::Read {
            path: PathBuf::from("config.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("config.toml"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_value_names_field() {
        let err = ConfigError::InvalidValue {
            field: "tools.default".to_string(),
            message: "unknown tool".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for tools.default: unknown tool");
    }

    #[test]
    fn test_unset_variable() {
        let err = ConfigError::UnsetVariable("TABFIX_ENDPOINT".to_string());
        assert_eq!(err.to_string(), "Environment variable TABFIX_ENDPOINT is not set");
    }
}
