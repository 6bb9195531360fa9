//! The load, transform, save pipeline.
//!
//! This module handles:
//! - Loading a UTF-8 document
//! - Applying an ordered rule list to produce a `Rewrite`
//! - Persisting a `Rewrite` (direct or atomic, with change detection)
//! - Diff previews of a pending rewrite

pub mod diff;
pub mod document;
pub mod persist;

pub use document::{Document, Rewrite, RuleHit, apply_rules};
pub use persist::{ChangeDetection, SaveOptions, SaveOutcome};
