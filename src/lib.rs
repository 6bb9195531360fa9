//! i18nize - CLI tool for replacing hardcoded UI strings with translation lookups.
//!
//! This library provides the core functionality for i18nize, including:
//! - Substitution rules and the built-in landing page rule set
//! - Loading a document, applying rules in order, and persisting the result
//! - Configuration file parsing and cascade discovery
//!
//! # Example
//!
//! ```no_run
//! use i18nize_cli::rewriter::{Document, SaveOptions};
//! use i18nize_cli::rules::Rule;
//!
//! let rules = vec![Rule::new(r##"<a href="#problem".*?>Problem</a>"##, "{nav.problem}")];
//! let document = Document::load("src/app/page.tsx").unwrap();
//!
//! let rewrite = document
//!     .apply_rules(&rules, |hit| println!("{} x {}", hit.count, hit.preview))
//!     .unwrap();
//!
//! let outcome = document.save(&rewrite, &SaveOptions::default()).unwrap();
//! println!("written: {}", outcome.is_written());
//! ```

pub mod config;
pub mod error;
pub mod rewriter;
pub mod rules;

pub use error::{I18nizeError, Result};
