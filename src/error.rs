use std::path::PathBuf;

/// Library-level structured errors for i18nize.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum I18nizeError {
	#[error("Failed to access document: {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Document is not valid UTF-8: {path}")]
	Decode {
		path: PathBuf,
		#[source]
		source: std::string::FromUtf8Error,
	},

	#[error("Invalid regex pattern in rule: {pattern}")]
	Pattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Failed to read config file: {path}")]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to render config")]
	ConfigRender {
		#[source]
		source: toml::ser::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using I18nizeError.
pub type Result<T> = std::result::Result<T, I18nizeError>;
