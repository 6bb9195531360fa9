use crate::error::{I18nizeError, Result};
use crate::rules::Rule;
use regex::NoExpand;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A document loaded into memory, along with the path it came from.
///
/// The loaded text is never mutated. Transforming it produces a [`Rewrite`],
/// which is handed back to [`Document::save`] to persist.
#[derive(Debug, Clone)]
pub struct Document {
	path: PathBuf,
	original: String,
}

/// Progress record for a rule that matched at least once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
	/// Position of the rule in the rule list.
	pub index: usize,

	/// Number of non-overlapping matches replaced.
	pub count: usize,

	/// Leading characters of the rule's pattern.
	pub preview: String,
}

/// The result of applying a rule list to a document's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
	content: String,
	hits: Vec<RuleHit>,
}

impl Rewrite {
	pub fn content(&self) -> &str {
		&self.content
	}

	pub fn hits(&self) -> &[RuleHit] {
		&self.hits
	}

	/// Total number of replacements across all rules.
	pub fn total_replacements(&self) -> usize {
		self.hits.iter().map(|hit| hit.count).sum()
	}

	pub fn into_content(self) -> String {
		self.content
	}
}

impl Document {
	/// Read the whole file at `path` as UTF-8.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let bytes = std::fs::read(path).map_err(|source| I18nizeError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let original = String::from_utf8(bytes).map_err(|source| I18nizeError::Decode {
			path: path.to_path_buf(),
			source,
		})?;

		debug!(path = %path.display(), bytes = original.len(), "loaded document");

		Ok(Document {
			path: path.to_path_buf(),
			original,
		})
	}

	/// Build a document from text already in memory (useful for testing).
	pub fn from_string(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
		Document {
			path: path.into(),
			original: content.into(),
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// The text as it was loaded.
	pub fn original(&self) -> &str {
		&self.original
	}

	/// Apply `rules` in order to the loaded text. See [`apply_rules`].
	pub fn apply_rules<F>(&self, rules: &[Rule], on_hit: F) -> Result<Rewrite>
	where
		F: FnMut(&RuleHit),
	{
		apply_rules(&self.original, rules, on_hit)
	}
}

/// Apply `rules` in order, each one globally over the output of the previous.
///
/// A rule with no matches is skipped silently. For a rule that matches,
/// `on_hit` is called with its progress record before the matches are
/// replaced. A pattern that fails to compile aborts the whole run at that
/// rule.
pub fn apply_rules<F>(text: &str, rules: &[Rule], mut on_hit: F) -> Result<Rewrite>
where
	F: FnMut(&RuleHit),
{
	let mut content = text.to_string();
	let mut hits = Vec::new();

	for (index, rule) in rules.iter().enumerate() {
		let regex = rule.compile()?;

		let count = regex.find_iter(&content).count();
		if count == 0 {
			debug!(index, pattern = %rule.preview(), "rule did not match");
			continue;
		}

		let hit = RuleHit {
			index,
			count,
			preview: rule.preview(),
		};
		on_hit(&hit);
		hits.push(hit);

		content = regex
			.replace_all(&content, NoExpand(rule.replacement.as_str()))
			.into_owned();
	}

	Ok(Rewrite { content, hits })
}

#[cfg(test)]
mod tests {
	use super::*;

	fn apply(text: &str, rules: &[Rule]) -> Rewrite {
		apply_rules(text, rules, |_| {}).unwrap()
	}

	#[test]
	fn test_no_matches_is_noop() {
		let rules = vec![Rule::new("absent", "present")];
		let rewrite = apply("nothing to see here", &rules);
		assert_eq!(rewrite.content(), "nothing to see here");
		assert!(rewrite.hits().is_empty());
	}

	#[test]
	fn test_single_match_preserves_surrounding_text() {
		let rules = vec![Rule::new(">Live Data</span>", ">{solution.liveData}</span>")];
		let rewrite = apply("<div>\n  <span>Live Data</span>\n</div>\n", &rules);
		assert_eq!(
			rewrite.content(),
			"<div>\n  <span>{solution.liveData}</span>\n</div>\n"
		);
		assert_eq!(rewrite.total_replacements(), 1);
	}

	#[test]
	fn test_rule_order_cascades() {
		let r1 = Rule::new("X", "Y");
		let r2 = Rule::new("Y", "Z");

		assert_eq!(apply("X", &[r1.clone(), r2.clone()]).content(), "Z");
		assert_eq!(apply("X", &[r2, r1]).content(), "Y");
	}

	#[test]
	fn test_replaces_all_occurrences() {
		let rules = vec![Rule::new("cat", "dog")];
		let rewrite = apply("cat cat cat", &rules);
		assert_eq!(rewrite.content(), "dog dog dog");
		assert_eq!(rewrite.hits()[0].count, 3);
	}

	#[test]
	fn test_replacement_is_literal() {
		let rules = vec![Rule::new(r"(\w+) world", r"$1 {greeting.$name} \n")];
		let rewrite = apply("hello world", &rules);
		assert_eq!(rewrite.content(), r"$1 {greeting.$name} \n");
	}

	#[test]
	fn test_pattern_spans_lines() {
		let rules = vec![Rule::new(
			r">A 38-year-old maize farmer.*?</",
			">{story.subtitle}</",
		)];
		let rewrite = apply("<p>A 38-year-old maize farmer\nfrom Kaduna</p>", &rules);
		assert_eq!(rewrite.content(), "<p>{story.subtitle}</p>");
	}

	#[test]
	fn test_hits_report_index_count_and_preview() {
		let long_pattern = format!("{}b", "a".repeat(60));
		let rules = vec![
			Rule::new("missing", "x"),
			Rule::new(long_pattern.clone(), "c"),
		];
		let text = format!("{long_pattern} {long_pattern}");

		let mut seen = Vec::new();
		let rewrite = apply_rules(&text, &rules, |hit| seen.push(hit.clone())).unwrap();

		assert_eq!(rewrite.content(), "c c");
		assert_eq!(seen, rewrite.hits());
		assert_eq!(seen.len(), 1);
		assert_eq!(seen[0].index, 1);
		assert_eq!(seen[0].count, 2);
		assert_eq!(seen[0].preview, "a".repeat(50));
	}

	#[test]
	fn test_invalid_pattern_fails_after_earlier_rules_reported() {
		let rules = vec![Rule::new("X", "Y"), Rule::new("(unclosed", "Z")];

		let mut seen = 0;
		let result = apply_rules("X", &rules, |_| seen += 1);

		assert_eq!(seen, 1);
		match result.unwrap_err() {
			I18nizeError::Pattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
			_ => panic!("Expected Pattern error"),
		}
	}

	#[test]
	fn test_second_pass_is_idempotent() {
		let rules = vec![
			Rule::new(">Meet Amina</h2>", ">{story.title}</h2>"),
			Rule::new(">Yield Loss</p>", ">{problem.stat2Title}</p>"),
		];
		let first = apply("<h2>Meet Amina</h2><p>Yield Loss</p>", &rules);
		let second = apply(first.content(), &rules);

		assert!(second.hits().is_empty());
		assert_eq!(second.content(), first.content());
	}

	#[test]
	fn test_end_to_end_anchor() {
		let rules = vec![Rule::new(
			r##"<a href="#problem".*?>Problem</a>"##,
			r##"<a href="#problem" class="y">{nav.problem}</a>"##,
		)];
		let rewrite = apply(r##"<a href="#problem" class="x">Problem</a>"##, &rules);

		assert_eq!(
			rewrite.content(),
			r##"<a href="#problem" class="y">{nav.problem}</a>"##
		);
		assert_eq!(rewrite.hits()[0].count, 1);
	}

	#[test]
	fn test_document_apply_leaves_original_untouched() {
		let doc = Document::from_string("page.tsx", "cat");
		let rewrite = doc.apply_rules(&[Rule::new("cat", "dog")], |_| {}).unwrap();
		assert_eq!(doc.original(), "cat");
		assert_eq!(rewrite.into_content(), "dog");
	}

	#[test]
	fn test_load_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("missing.tsx");
		match Document::load(&path).unwrap_err() {
			I18nizeError::Io { path: p, .. } => assert_eq!(p, path),
			_ => panic!("Expected Io error"),
		}
	}

	#[test]
	fn test_load_invalid_utf8() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("page.tsx");
		std::fs::write(&path, [0x3c, 0x61, 0xff, 0xfe, 0x3e]).unwrap();
		assert!(matches!(
			Document::load(&path).unwrap_err(),
			I18nizeError::Decode { .. }
		));
	}
}
