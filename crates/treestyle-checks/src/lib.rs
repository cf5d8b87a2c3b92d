//! # treestyle-checks
//!
//! Built-in structural style checks for treestyle.
//!
//! Each check walks a positioned syntax tree and reports layout or
//! redundancy findings as [`treestyle_core::Violation`]s.
//!
//! ## Available Checks
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | TS001 | `alignment` | Vertical alignment of consecutive declarations |
//! | TS002 | `wrap-binary-operator` | Uniform wrapping of binary operations |
//! | TS003 | `wrap-anonymous-class` | Wrapping of anonymous class bodies |
//! | TS004 | `inner-assignment` | Parenthesization of assignments in expressions |
//! | TS005 | `zero-parameter-superconstructor` | Redundant explicit `super()` calls |
//!
//! ## Usage
//!
//! ```
//! use treestyle_checks::{Alignment, InnerAssignment};
//! use treestyle_core::Walker;
//!
//! let mut walker = Walker::builder()
//!     .check(Alignment::new())
//!     .check(InnerAssignment::new())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod alignment;
mod inner_assignment;
mod presets;
pub mod wrap;
mod wrap_anonymous_class;
mod wrap_binary_operator;
mod zero_parameter_superconstructor;

pub use alignment::Alignment;
pub use inner_assignment::InnerAssignment;
pub use presets::{all_checks, layout_checks, Preset};
pub use wrap_anonymous_class::WrapAnonymousClass;
pub use wrap_binary_operator::WrapBinaryOperator;
pub use zero_parameter_superconstructor::ZeroParameterSuperconstructor;
