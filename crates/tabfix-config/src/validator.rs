//! Configuration validation.

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::schema::{ClassSwapSpec, Config, ToolSpec};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error into a [`ConfigError`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_storage(config, &mut result);
        Self::validate_browser(config, &mut result);
        Self::validate_tools(config, &mut result);
        Self::validate_shortcuts(config, &mut result);

        Ok(result)
    }

    fn validate_storage(config: &Config, result: &mut ValidationResult) {
        if config.storage.path.trim().is_empty() {
            result.add_error(ValidationError::new("storage.path", "Path cannot be empty"));
        }

        if config.storage.namespace.is_empty() {
            result.add_error(ValidationError::new(
                "storage.namespace",
                "Namespace cannot be empty",
            ));
        }

        if config.storage.active_key.is_empty() {
            result.add_error(ValidationError::new(
                "storage.active_key",
                "Active tool key cannot be empty",
            ));
        }

        if config.storage.namespace == config.storage.active_key {
            result.add_error(ValidationError::new(
                "storage.active_key",
                "Active tool key must differ from the namespace",
            ));
        }
    }

    fn validate_browser(config: &Config, result: &mut ValidationResult) {
        let endpoint = &config.browser.endpoint;
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            result.add_error(ValidationError::new(
                "browser.endpoint",
                "endpoint must start with http:// or https://",
            ));
        }

        if config.browser.call_timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "browser.call_timeout_seconds",
                "call_timeout_seconds must be greater than 0",
            ));
        }
    }

    fn validate_tools(config: &Config, result: &mut ValidationResult) {
        if config.tools.catalog.is_empty() {
            result.add_error(ValidationError::new(
                "tools.catalog",
                "At least one tool must be configured",
            ));
            return;
        }

        let mut seen = HashSet::new();
        for (i, spec) in config.tools.catalog.iter().enumerate() {
            let path = format!("tools.catalog[{}]", i);
            if spec.id().is_empty() {
                result.add_error(ValidationError::new(
                    format!("{}.id", path),
                    "Tool id cannot be empty",
                ));
            } else if !seen.insert(spec.id()) {
                result.add_error(ValidationError::new(
                    format!("{}.id", path),
                    format!("Duplicate tool id '{}'", spec.id()),
                ));
            }

            match spec {
                ToolSpec::ClassSwap(swap) => Self::validate_class_swap(&path, swap, result),
            }
        }

        if config.tools.find(&config.tools.default).is_none() {
            result.add_error(ValidationError::new(
                "tools.default",
                format!("Default tool '{}' is not in the catalog", config.tools.default),
            ));
        }
    }

    fn validate_class_swap(path: &str, spec: &ClassSwapSpec, result: &mut ValidationResult) {
        if spec.marker.is_empty() || spec.marker.split_whitespace().count() != 1 {
            result.add_error(ValidationError::new(
                format!("{}.marker", path),
                "marker must be a single class token",
            ));
        }

        if spec.target_class.trim().is_empty() {
            result.add_error(ValidationError::new(
                format!("{}.target_class", path),
                "target_class cannot be empty",
            ));
        }

        let valid_tag = spec
            .element
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
        if spec.element.is_empty() || !valid_tag {
            result.add_error(ValidationError::new(
                format!("{}.element", path),
                format!("Invalid element tag '{}'", spec.element),
            ));
        }

        // A target that keeps the marker is re-matched by every apply.
        if spec.target_class.split_whitespace().any(|t| t == spec.marker) {
            result.add_warning(ValidationWarning::new(
                format!("{}.target_class", path),
                "target_class contains the marker; repeated applies will keep matching",
            ));
        }
    }

    fn validate_shortcuts(config: &Config, result: &mut ValidationResult) {
        if config.shortcuts.run.is_empty() {
            result.add_error(ValidationError::new(
                "shortcuts.run",
                "Run command cannot be empty",
            ));
        }

        if config.shortcuts.undo.as_deref() == Some(config.shortcuts.run.as_str()) {
            result.add_error(ValidationError::new(
                "shortcuts.undo",
                "Undo command must differ from the run command",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
