use crate::error::{I18nizeError, Result};
use crate::rewriter::document::{Document, Rewrite};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// How `save` decides whether the rewritten text differs from the loaded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeDetection {
	/// Compare character counts only. Equal-length substitutions such as
	/// `cat` -> `dog` are reported as unchanged and never written.
	#[default]
	Length,

	/// Compare the full text.
	Content,
}

impl ChangeDetection {
	pub fn changed(self, before: &str, after: &str) -> bool {
		match self {
			ChangeDetection::Length => before.chars().count() != after.chars().count(),
			ChangeDetection::Content => before != after,
		}
	}

	/// The name used in config files.
	pub fn as_str(self) -> &'static str {
		match self {
			ChangeDetection::Length => "length",
			ChangeDetection::Content => "content",
		}
	}
}

impl fmt::Display for ChangeDetection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Options controlling how a rewrite is persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaveOptions {
	pub change_detection: ChangeDetection,

	/// Write to a temporary file next to the target, then rename it into place.
	pub atomic: bool,

	/// Detect changes but never write.
	pub dry_run: bool,
}

/// What `save` did with a rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
	/// The target was overwritten.
	Written,

	/// No change was detected, nothing was written.
	Unchanged,

	/// A change was detected but dry-run suppressed the write.
	DryRun,
}

impl SaveOutcome {
	/// The boolean success indicator: true only when the file was written.
	pub fn is_written(self) -> bool {
		self == SaveOutcome::Written
	}

	/// Whether a change was detected, written or not.
	pub fn has_changes(self) -> bool {
		self != SaveOutcome::Unchanged
	}
}

impl Document {
	/// What [`Document::save`] would do with `rewrite`, without touching the file.
	pub fn planned_outcome(&self, rewrite: &Rewrite, options: &SaveOptions) -> SaveOutcome {
		if !options
			.change_detection
			.changed(self.original(), rewrite.content())
		{
			SaveOutcome::Unchanged
		} else if options.dry_run {
			SaveOutcome::DryRun
		} else {
			SaveOutcome::Written
		}
	}

	/// Persist `rewrite` back to this document's path if a change is detected.
	///
	/// The default mode overwrites the file in place with no backup; a failure
	/// mid-write can leave it truncated. Set [`SaveOptions::atomic`] to replace
	/// it through a temporary file instead.
	pub fn save(&self, rewrite: &Rewrite, options: &SaveOptions) -> Result<SaveOutcome> {
		match self.planned_outcome(rewrite, options) {
			SaveOutcome::Unchanged => {
				warn!(path = %self.path().display(), "no changes detected, nothing written");
				return Ok(SaveOutcome::Unchanged);
			}
			SaveOutcome::DryRun => {
				info!(path = %self.path().display(), "dry run, skipping write");
				return Ok(SaveOutcome::DryRun);
			}
			SaveOutcome::Written => {}
		}

		if options.atomic {
			write_atomic(self.path(), rewrite.content())?;
		} else {
			write_direct(self.path(), rewrite.content())?;
		}

		info!(
			path = %self.path().display(),
			atomic = options.atomic,
			bytes = rewrite.content().len(),
			"wrote document"
		);

		Ok(SaveOutcome::Written)
	}
}

fn write_direct(path: &Path, content: &str) -> Result<()> {
	std::fs::write(path, content).map_err(|source| I18nizeError::Io {
		path: path.to_path_buf(),
		source,
	})
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
	let io_err = |source: std::io::Error| I18nizeError::Io {
		path: path.to_path_buf(),
		source,
	};

	// Replace the file a symlink points at, not the link itself.
	let target = std::fs::canonicalize(path).map_err(io_err)?;
	let permissions = std::fs::metadata(&target).map_err(io_err)?.permissions();

	let dir = match target.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};

	let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
	tmp.write_all(content.as_bytes()).map_err(io_err)?;
	tmp.as_file().set_permissions(permissions).map_err(io_err)?;
	tmp.as_file().sync_all().map_err(io_err)?;
	tmp.persist(&target).map_err(|e| io_err(e.error))?;

	Ok(())
}
