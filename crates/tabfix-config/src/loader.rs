//! Configuration loader.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => Ok(Config::default()),
            other => other,
        }
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = regex::Regex::new(r"\$\{([^}]+)\}")?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::UnsetVariable(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.tabfix`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ToolSpec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.tools.default, "css_fixer");
        assert_eq!(config.tools.catalog.len(), 1);
    }

    #[test]
    fn test_load_storage_section() {
        let content = r#"
            [storage]
            path = "/var/lib/tabfix/storage.json"
            namespace = "enhancer_data"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.storage.path, "/var/lib/tabfix/storage.json");
        assert_eq!(config.storage.namespace, "enhancer_data");
        assert_eq!(config.storage.active_key, "active_tool");
    }

    #[test]
    fn test_load_catalog() {
        let content = r#"
            [tools]
            default = "wide_cards"

            [[tools.catalog]]
            kind = "class_swap"
            id = "wide_cards"
            name = "Wide Cards"
            marker = "max-w-sm"
            target_class = "w-full"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.tools.default, "wide_cards");
        assert_eq!(config.tools.catalog.len(), 1);

        let ToolSpec::ClassSwap(spec) = &config.tools.catalog[0];
        assert_eq!(spec.element, "div");
        assert_eq!(spec.noun, "element");
        assert!(spec.icon.is_none());
    }

    #[test]
    fn test_load_unknown_kind_rejected() {
        let content = r#"
            [[tools.catalog]]
            kind = "dark_mode"
            id = "dark"
            name = "Dark"
        "#;
        assert!(ConfigLoader::load_str(content).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[browser]").unwrap();
        writeln!(file, "endpoint = \"http://localhost:9333\"").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.browser.endpoint, "http://localhost:9333");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/config.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_or_default_nonexistent_file() {
        let config =
            ConfigLoader::load_or_default(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config.shortcuts.run, "trigger-update");
    }

    #[test]
    fn test_load_or_default_propagates_parse_errors() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "invalid = [unclosed").unwrap();
        assert!(ConfigLoader::load_or_default(file.path()).is_err());
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: This test runs in isolation and sets a unique test-only env var
        unsafe {
            std::env::set_var("TABFIX_TEST_CONFIG_VAR", "9444");
        }
        let content = "endpoint = \"http://127.0.0.1:${TABFIX_TEST_CONFIG_VAR}\"";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert!(expanded.contains("127.0.0.1:9444"));
        unsafe {
            std::env::remove_var("TABFIX_TEST_CONFIG_VAR");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "value = \"${TABFIX_NONEXISTENT_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(
            matches!(result, Err(ConfigError::UnsetVariable(name)) if name == "TABFIX_NONEXISTENT_VAR_12345")
        );
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = ConfigLoader::expand_path("~/test");
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("/test"));
    }

    #[test]
    fn test_expand_path_no_tilde() {
        let path = "/usr/local/share/tabfix";
        assert_eq!(ConfigLoader::expand_path(path), path);
    }
}
