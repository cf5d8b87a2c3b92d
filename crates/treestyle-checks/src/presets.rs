//! Check presets for common configurations.

use crate::{
    Alignment, InnerAssignment, WrapAnonymousClass, WrapBinaryOperator,
    ZeroParameterSuperconstructor,
};
use treestyle_core::{CheckBox, Config};

/// Preset configurations for treestyle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// All checks with their default options.
    Recommended,
    /// Layout checks only, no redundancy checks.
    Layout,
}

impl Preset {
    /// Returns the checks for this preset.
    #[must_use]
    pub fn checks(self) -> Vec<CheckBox> {
        match self {
            Self::Recommended => all_checks(&Config::default()),
            Self::Layout => layout_checks(&Config::default()),
        }
    }
}

/// Returns all available checks, configured from `config`.
///
/// Includes:
/// - `alignment` (TS001) - Vertical alignment of consecutive declarations
/// - `wrap-binary-operator` (TS002) - Wrapping of binary operations
/// - `wrap-anonymous-class` (TS003) - Wrapping of anonymous class bodies
/// - `inner-assignment` (TS004) - Parenthesization of embedded assignments
/// - `zero-parameter-superconstructor` (TS005) - Redundant `super()` calls
#[must_use]
pub fn all_checks(config: &Config) -> Vec<CheckBox> {
    vec![
        Box::new(Alignment::from_config(config.alignment.clone())),
        Box::new(WrapBinaryOperator::from_config(&config.wrap_binary_operator)),
        Box::new(WrapAnonymousClass::from_config(&config.wrap_anonymous_class)),
        Box::new(InnerAssignment::new()),
        Box::new(ZeroParameterSuperconstructor::new()),
    ]
}

/// Returns the layout checks only.
///
/// Includes `alignment`, `wrap-binary-operator` and `wrap-anonymous-class`.
#[must_use]
pub fn layout_checks(config: &Config) -> Vec<CheckBox> {
    vec![
        Box::new(Alignment::from_config(config.alignment.clone())),
        Box::new(WrapBinaryOperator::from_config(&config.wrap_binary_operator)),
        Box::new(WrapAnonymousClass::from_config(&config.wrap_anonymous_class)),
    ]
}
