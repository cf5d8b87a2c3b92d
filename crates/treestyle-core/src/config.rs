//! Configuration types for treestyle.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for treestyle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Per-check enable toggles.
    #[serde(default)]
    pub checks: HashMap<String, CheckToggle>,

    /// Options of the alignment check.
    #[serde(default)]
    pub alignment: AlignmentConfig,

    /// Options of the binary operator wrap check.
    #[serde(default)]
    pub wrap_binary_operator: WrapBinaryOperatorConfig,

    /// Options of the anonymous class wrap check.
    #[serde(default)]
    pub wrap_anonymous_class: WrapAnonymousClassConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a check is enabled. Checks not mentioned are enabled.
    #[must_use]
    pub fn is_check_enabled(&self, check_name: &str) -> bool {
        self.checks.get(check_name).map_or(true, |c| c.enabled)
    }
}

/// Enable toggle for one check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckToggle {
    /// Whether this check runs.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Which declaration categories the alignment check enforces.
///
/// Each category aligns independently of the others; disabling one stops
/// both its enforcement and its contribution to the expected columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AlignmentConfig {
    /// Align the first declarator name of consecutive field declarations.
    #[serde(default = "default_true")]
    pub field_names: bool,
    /// Align the first initializer `=` of consecutive field declarations.
    #[serde(default = "default_true")]
    pub field_initializers: bool,
    /// Align parameter names within a parameter list.
    #[serde(default = "default_true")]
    pub parameter_names: bool,
    /// Align the first declarator name of consecutive local variable declarations.
    #[serde(default = "default_true")]
    pub local_variable_names: bool,
    /// Align the first initializer `=` of consecutive local variable declarations.
    #[serde(default = "default_true")]
    pub local_variable_initializers: bool,
    /// Align assignment operators of consecutive assignment statements.
    #[serde(default = "default_true")]
    pub assignments: bool,
    /// Align the first statement of consecutive non-empty case groups.
    #[serde(default = "default_true")]
    pub case_group_statements: bool,
    /// Align method and constructor names of consecutive declarations.
    #[serde(default = "default_true")]
    pub method_names: bool,
    /// Align body braces of consecutive method and constructor declarations.
    #[serde(default = "default_true")]
    pub method_bodies: bool,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            field_names: true,
            field_initializers: true,
            parameter_names: true,
            local_variable_names: true,
            local_variable_initializers: true,
            assignments: true,
            case_group_statements: true,
            method_names: true,
            method_bodies: true,
        }
    }
}

/// Line wrapping policy for one optional wrap point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapMode {
    /// The construct must stay on one line.
    Never,
    /// The construct may wrap; if it does, the continuation column is checked.
    #[default]
    Optional,
    /// The construct must wrap.
    Always,
}

/// Options of the binary operator wrap check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WrapBinaryOperatorConfig {
    /// Wrapping before a binary operator.
    #[serde(default)]
    pub before_operator: WrapMode,
    /// Wrapping after a binary operator.
    #[serde(default = "wrap_never")]
    pub after_operator: WrapMode,
}

impl Default for WrapBinaryOperatorConfig {
    fn default() -> Self {
        Self {
            before_operator: WrapMode::Optional,
            after_operator: WrapMode::Never,
        }
    }
}

/// Options of the anonymous class wrap check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WrapAnonymousClassConfig {
    /// Wrapping between the argument list and the class body brace.
    #[serde(default = "wrap_never")]
    pub before_class_body: WrapMode,
}

impl Default for WrapAnonymousClassConfig {
    fn default() -> Self {
        Self {
            before_class_body: WrapMode::Never,
        }
    }
}

fn default_true() -> bool {
    true
}

fn wrap_never() -> WrapMode {
    WrapMode::Never
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
