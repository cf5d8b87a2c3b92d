//! # treestyle-core
//!
//! Core engine for structural style checks over positioned syntax trees.
//!
//! This crate provides the foundational traits and types for building
//! tree-based style checkers. It includes:
//!
//! - [`TokenKind`] and [`TokenMap`] for the closed token model
//! - [`SyntaxTree`] and [`TreeBuilder`] for the positioned tree
//! - [`classify`] for deriving a token's lexical-element category
//! - [`Check`] trait for stateful per-tree checks
//! - [`Walker`] for orchestrating check execution
//! - [`Violation`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use treestyle_core::{Config, Walker};
//!
//! let mut walker = Walker::builder()
//!     .check(MyCheck::new())
//!     .config(Config::default())
//!     .build();
//!
//! let result = walker.walk(&tree)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod check;
mod config;
mod dump;
mod element;
mod token;
mod tree;
mod types;
mod walker;

/// Structural predicates over ancestors and siblings.
pub mod predicates;

pub use check::{Check, CheckBox, Report};
pub use config::{
    AlignmentConfig, CheckToggle, Config, ConfigError, WrapAnonymousClassConfig,
    WrapBinaryOperatorConfig, WrapMode,
};
pub use dump::dump;
pub use element::{classify, SourceElement};
pub use token::{DefaultTokens, TokenKind, TokenMap};
pub use tree::{ConsistencyError, NodeId, SyntaxTree, TreeBuilder};
pub use types::{LintResult, Severity, Violation, ViolationDiagnostic};
pub use walker::{WalkError, Walker, WalkerBuilder};
