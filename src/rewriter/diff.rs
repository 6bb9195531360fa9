use crate::rewriter::document::{Document, Rewrite};
use similar::TextDiff;

/// Lines of unchanged context around each hunk.
const CONTEXT_LINES: usize = 3;

impl Document {
	/// Unified diff between the loaded text and `rewrite`, empty when they are identical.
	pub fn unified_diff(&self, rewrite: &Rewrite) -> String {
		if self.original() == rewrite.content() {
			return String::new();
		}

		let path = self.path().display().to_string();
		TextDiff::from_lines(self.original(), rewrite.content())
			.unified_diff()
			.context_radius(CONTEXT_LINES)
			.header(&format!("a/{path}"), &format!("b/{path}"))
			.to_string()
	}
}
