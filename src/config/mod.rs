//! Configuration loading and parsing for i18nize.
//!
//! This module handles:
//! - TOML config file parsing and rendering
//! - Directory cascade discovery
//! - Config merging

pub mod cascade;
pub mod parser;
pub mod types;

pub use cascade::{
	CONFIG_FILE_NAME, discover_configs, has_project_root, load_explicit_config,
	load_explicit_configs, load_merged_config, merge_configs, user_config_path,
};
pub use parser::{parse_config_file, parse_config_str, render_config};
pub use types::{Config, LoadedConfig, MergedConfig, RuleWithSource};
