use crate::config::types::Config;
use crate::error::{I18nizeError, Result};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content = std::fs::read_to_string(path).map_err(|source| I18nizeError::ConfigRead {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
///
/// Patterns are not compiled here; a malformed pattern surfaces when its rule
/// is applied, or from [`Config::validate`].
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	toml::from_str(content).map_err(|source| I18nizeError::ConfigParse {
		path: path.to_path_buf(),
		source,
	})
}

/// Render a config back to TOML.
pub fn render_config(config: &Config) -> Result<String> {
	toml::to_string(config).map_err(|source| I18nizeError::ConfigRender { source })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rewriter::ChangeDetection;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_config() {
		let content = "";
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert!(!config.root);
		assert!(config.target.is_none());
		assert!(config.atomic.is_none());
		assert!(config.change_detection.is_none());
		assert!(config.root_config_lookup_disable_env_var.is_none());
		assert!(config.rules.is_empty());
	}

	#[test]
	fn test_parse_basic_config() {
		let content = r#"
root = true
target = "frontend/src/app/page.tsx"
atomic = true
change-detection = "content"
root-config-lookup-disable-env-var = "CI"
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert!(config.root);
		assert_eq!(
			config.target,
			Some(PathBuf::from("frontend/src/app/page.tsx"))
		);
		assert_eq!(config.atomic, Some(true));
		assert_eq!(config.change_detection, Some(ChangeDetection::Content));
		assert_eq!(
			config.root_config_lookup_disable_env_var,
			Some("CI".to_string())
		);
	}

	#[test]
	fn test_parse_rules_array_of_tables() {
		let content = r##"
[[rules]]
pattern = '<a href="#problem".*?>Problem</a>'
replacement = '<a href="#problem">{nav.problem}</a>'

[[rules]]
pattern = '>Meet Amina</h2>'
replacement = '>{story.title}</h2>'
"##;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.rules.len(), 2);
		assert_eq!(config.rules[0].pattern, r##"<a href="#problem".*?>Problem</a>"##);
		assert_eq!(config.rules[0].replacement, r##"<a href="#problem">{nav.problem}</a>"##);
		assert_eq!(config.rules[1].pattern, ">Meet Amina</h2>");
	}

	#[test]
	fn test_parse_rules_inline_tables() {
		let content = r#"
rules = [
    { pattern = "X", replacement = "Y" },
    { pattern = "Y", replacement = "Z" },
]
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.rules.len(), 2);
	}

	#[test]
	fn test_rule_missing_replacement_is_rejected() {
		let content = r#"
[[rules]]
pattern = "X"
"#;
		let path = PathBuf::from("test.toml");
		match parse_config_str(content, &path).unwrap_err() {
			I18nizeError::ConfigParse { path: p, .. } => assert_eq!(p, path),
			_ => panic!("Expected ConfigParse error"),
		}
	}

	#[test]
	fn test_unknown_change_detection_is_rejected() {
		let content = r#"change-detection = "hash""#;
		let path = PathBuf::from("test.toml");
		assert!(parse_config_str(content, &path).is_err());
	}

	#[test]
	fn test_invalid_pattern_parses_but_fails_validation() {
		let content = r#"
[[rules]]
pattern = "[unclosed"
replacement = "x"
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		match config.validate().unwrap_err() {
			I18nizeError::Pattern { pattern, .. } => assert_eq!(pattern, "[unclosed"),
			_ => panic!("Expected Pattern error"),
		}
	}

	#[test]
	fn test_rendered_template_parses_back() {
		let template = Config::template();
		let rendered = render_config(&template).unwrap();
		assert!(rendered.contains("root = true"));
		assert!(rendered.contains("[[rules]]"));

		let parsed = parse_config_str(&rendered, &PathBuf::from("test.toml")).unwrap();
		assert_eq!(parsed.rules, template.rules);
		assert_eq!(parsed.target, template.target);
	}
}
