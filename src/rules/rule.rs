use crate::error::{I18nizeError, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Number of pattern characters shown in progress output.
pub const PREVIEW_CHARS: usize = 50;

/// A substitution rule: a pattern and the literal text that replaces each match.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rule {
	/// Regex pattern. `.` also matches line terminators.
	pub pattern: String,

	/// Replacement text, inserted verbatim. `$1`, `${name}` and backslashes are not expanded.
	pub replacement: String,
}

impl Rule {
	pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
		Rule {
			pattern: pattern.into(),
			replacement: replacement.into(),
		}
	}

	/// Compile the pattern with dot-matches-newline enabled.
	pub fn compile(&self) -> Result<Regex> {
		compile_pattern(&self.pattern)
	}

	/// The first [`PREVIEW_CHARS`] characters of the pattern.
	pub fn preview(&self) -> String {
		self.pattern.chars().take(PREVIEW_CHARS).collect()
	}
}

/// Compile a pattern string so that matching is not line-restricted.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
	RegexBuilder::new(pattern)
		.dot_matches_new_line(true)
		.build()
		.map_err(|source| I18nizeError::Pattern {
			pattern: pattern.to_string(),
			source,
		})
}

/// Compile every rule up front, failing on the first malformed pattern.
pub fn validate_rules(rules: &[Rule]) -> Result<()> {
	for rule in rules {
		rule.compile()?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_compile_valid_pattern() {
		let rule = Rule::new(r##"<a href="#problem".*?>Problem</a>"##, "{nav.problem}");
		assert!(rule.compile().is_ok());
	}

	#[test]
	fn test_compile_invalid_pattern() {
		let rule = Rule::new(r"[invalid", "x");
		match rule.compile().unwrap_err() {
			I18nizeError::Pattern { pattern, .. } => assert_eq!(pattern, "[invalid"),
			_ => panic!("Expected Pattern error"),
		}
	}

	#[test]
	fn test_dot_matches_newline() {
		let regex = compile_pattern(r"<p>.*?</p>").unwrap();
		assert!(regex.is_match("<p>first\nsecond</p>"));
	}

	#[test]
	fn test_preview_truncates_to_fifty_chars() {
		let rule = Rule::new("a".repeat(80), "b");
		assert_eq!(rule.preview().len(), 50);

		let short = Rule::new("short", "b");
		assert_eq!(short.preview(), "short");
	}

	#[test]
	fn test_preview_counts_characters_not_bytes() {
		let rule = Rule::new("±".repeat(60), "x");
		let preview = rule.preview();
		assert_eq!(preview.chars().count(), 50);
		assert_eq!(preview.len(), 100);
	}

	#[test]
	fn test_validate_rules_stops_at_first_bad_pattern() {
		let rules = vec![
			Rule::new("ok", "fine"),
			Rule::new("(unclosed", "x"),
			Rule::new("[also bad", "y"),
		];
		match validate_rules(&rules).unwrap_err() {
			I18nizeError::Pattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
			_ => panic!("Expected Pattern error"),
		}
	}
}
