use crate::error::Result;
use crate::rewriter::{ChangeDetection, SaveOptions};
use crate::rules::{DEFAULT_TARGET, Rule, builtin_rules, validate_rules};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration from a `.i18nize.toml` file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// If true, stop the directory cascade and jump directly to ~/.i18nize.toml.
	#[serde(default)]
	pub root: bool,

	/// Document to rewrite. Relative paths resolve against the config's directory.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub target: Option<PathBuf>,

	/// Replace the target through a temporary file instead of overwriting it in place.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub atomic: Option<bool>,

	/// How to decide whether the rewritten text should be written.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub change_detection: Option<ChangeDetection>,

	/// Environment variable name that, if truthy, skips ~/.i18nize.toml lookup.
	/// Useful for CI environments.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub root_config_lookup_disable_env_var: Option<String>,

	/// Substitutions, applied in order.
	#[serde(default)]
	pub rules: Vec<Rule>,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,

	/// Whether this is the user-level `~/.i18nize.toml`.
	pub is_user: bool,
}

/// Merged configuration from multiple config files in the cascade.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
	/// All rules from all configs, in cascade order.
	pub rules: Vec<RuleWithSource>,

	/// Target from the most specific config that sets one, already resolved.
	pub target: Option<PathBuf>,

	pub atomic: bool,

	pub change_detection: ChangeDetection,
}

/// A rule with its source config path for debugging/display.
#[derive(Debug, Clone)]
pub struct RuleWithSource {
	/// The rule itself.
	pub rule: Rule,

	/// The config file this rule came from, `None` for built-in rules.
	pub source: Option<PathBuf>,
}

impl Config {
	/// Compile every rule's pattern.
	pub fn validate(&self) -> Result<()> {
		validate_rules(&self.rules)
	}

	/// A starter config carrying the built-in rule set.
	pub fn template() -> Self {
		Config {
			root: true,
			target: Some(PathBuf::from(DEFAULT_TARGET)),
			atomic: Some(false),
			change_detection: Some(ChangeDetection::Length),
			root_config_lookup_disable_env_var: None,
			rules: builtin_rules(),
		}
	}
}

impl MergedConfig {
	/// The rules to apply: configured rules if any, otherwise the built-in set.
	pub fn effective_rules(&self) -> Vec<RuleWithSource> {
		if self.rules.is_empty() {
			builtin_rules()
				.into_iter()
				.map(|rule| RuleWithSource { rule, source: None })
				.collect()
		} else {
			self.rules.clone()
		}
	}

	/// The document to rewrite, falling back to [`DEFAULT_TARGET`] under `cwd`.
	pub fn target_path(&self, cwd: &Path) -> PathBuf {
		self.target
			.clone()
			.unwrap_or_else(|| cwd.join(DEFAULT_TARGET))
	}

	pub fn save_options(&self) -> SaveOptions {
		SaveOptions {
			change_detection: self.change_detection,
			atomic: self.atomic,
			dry_run: false,
		}
	}
}
