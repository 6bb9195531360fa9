//! Substitution rules for i18nize.
//!
//! This module handles:
//! - The `Rule` type and pattern compilation (dot matches newline)
//! - The built-in landing page rule set

pub mod builtin;
pub mod rule;

pub use builtin::{DEFAULT_TARGET, builtin_rules};
pub use rule::{PREVIEW_CHARS, Rule, compile_pattern, validate_rules};
