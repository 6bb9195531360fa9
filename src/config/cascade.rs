use crate::config::parser::parse_config_file;
use crate::config::types::{LoadedConfig, MergedConfig, RuleWithSource};
use crate::error::{I18nizeError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name searched for in each directory of the cascade.
pub const CONFIG_FILE_NAME: &str = ".i18nize.toml";

/// Discover and load all config files in the cascade.
///
/// The cascade order is:
/// 1. Start from `start_dir` and look for `.i18nize.toml`
/// 2. If found and `root = true`, skip to user config only
/// 3. Otherwise, continue up the directory tree
/// 4. Finally, check ~/.i18nize.toml (unless disabled)
///
/// Returns configs in cascade order (most specific first).
pub fn discover_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let mut configs = Vec::new();
	let mut current_dir = start_dir.to_path_buf();

	loop {
		let config_path = current_dir.join(CONFIG_FILE_NAME);

		if config_path.exists() {
			let config = parse_config_file(&config_path)?;
			debug!(path = %config_path.display(), rules = config.rules.len(), "loaded config");

			let is_root = config.root;
			configs.push(LoadedConfig {
				config,
				path: config_path,
				is_user: false,
			});

			if is_root {
				break;
			}
		}

		if let Some(parent) = current_dir.parent() {
			current_dir = parent.to_path_buf();
		} else {
			break;
		}
	}

	if let Some(user_config) = load_user_config(&configs)? {
		configs.push(user_config);
	}

	Ok(configs)
}

/// Load a single config file as a one-entry cascade.
pub fn load_explicit_configs(path: &Path) -> Result<Vec<LoadedConfig>> {
	let config = parse_config_file(path)?;
	Ok(vec![LoadedConfig {
		config,
		path: path.to_path_buf(),
		is_user: false,
	}])
}

/// Load and merge a single config file, bypassing the cascade.
pub fn load_explicit_config(path: &Path) -> Result<MergedConfig> {
	Ok(merge_configs(&load_explicit_configs(path)?))
}

/// Load the user's ~/.i18nize.toml if it exists, isn't disabled, and wasn't
/// already picked up by the directory walk.
fn load_user_config(existing_configs: &[LoadedConfig]) -> Result<Option<LoadedConfig>> {
	for loaded in existing_configs {
		if let Some(ref env_var) = loaded.config.root_config_lookup_disable_env_var
			&& is_env_truthy(env_var)
		{
			debug!(env_var = %env_var, "user config lookup disabled");
			return Ok(None);
		}
	}

	let user_config_path = user_config_path()?;

	if existing_configs
		.iter()
		.any(|loaded| loaded.path == user_config_path)
	{
		return Ok(None);
	}

	if user_config_path.exists() {
		let config = parse_config_file(&user_config_path)?;
		Ok(Some(LoadedConfig {
			config,
			path: user_config_path,
			is_user: true,
		}))
	} else {
		Ok(None)
	}
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}

/// Merge multiple configs into a single effective config.
///
/// Rules are concatenated in cascade order. The user config's rules are
/// dropped when a project config sets `root = true`. Scalar settings come
/// from the most specific config that sets them.
pub fn merge_configs(configs: &[LoadedConfig]) -> MergedConfig {
	let mut merged = MergedConfig::default();
	let mut atomic = None;
	let mut change_detection = None;
	let rooted = has_project_root(configs);

	for loaded in configs {
		if loaded.is_user && rooted {
			if !loaded.config.rules.is_empty() {
				debug!(path = %loaded.path.display(), "skipping user rules under root config");
			}
		} else {
			for rule in &loaded.config.rules {
				merged.rules.push(RuleWithSource {
					rule: rule.clone(),
					source: Some(loaded.path.clone()),
				});
			}
		}

		if merged.target.is_none()
			&& let Some(ref target) = loaded.config.target
		{
			merged.target = Some(resolve_target(&loaded.path, target));
		}

		atomic = atomic.or(loaded.config.atomic);
		change_detection = change_detection.or(loaded.config.change_detection);
	}

	merged.atomic = atomic.unwrap_or(false);
	merged.change_detection = change_detection.unwrap_or_default();
	merged
}

/// Whether a project config in the cascade stops it with `root = true`.
pub fn has_project_root(configs: &[LoadedConfig]) -> bool {
	configs
		.iter()
		.any(|loaded| !loaded.is_user && loaded.config.root)
}

/// Resolve a configured target relative to the directory holding its config.
fn resolve_target(config_path: &Path, target: &Path) -> PathBuf {
	if target.is_absolute() {
		return target.to_path_buf();
	}
	match config_path.parent() {
		Some(dir) => dir.join(target),
		None => target.to_path_buf(),
	}
}

/// Convenience function to discover, load, and merge configs from a directory.
pub fn load_merged_config(start_dir: &Path) -> Result<MergedConfig> {
	let configs = discover_configs(start_dir)?;
	Ok(merge_configs(&configs))
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(I18nizeError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}
