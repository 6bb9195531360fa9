use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use i18nize_cli::config::{
	CONFIG_FILE_NAME, Config, LoadedConfig, MergedConfig, RuleWithSource, discover_configs,
	has_project_root, load_explicit_config, load_explicit_configs, load_merged_config,
	render_config, user_config_path,
};
use i18nize_cli::rewriter::{ChangeDetection, Document, RuleHit, SaveOptions, SaveOutcome};
use i18nize_cli::rules::Rule;

#[derive(Parser)]
#[command(name = "i18nize")]
#[command(
	author,
	version,
	about = "CLI tool for replacing hardcoded UI strings with translation lookups"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Document to rewrite (overrides the configured target)
	#[arg(long, value_name = "PATH")]
	file: Option<PathBuf>,

	/// Load rules from this file instead of the config cascade
	#[arg(long, value_name = "FILE")]
	rules: Option<PathBuf>,

	/// Report what would change without writing
	#[arg(long)]
	dry_run: bool,

	/// Print a unified diff of the pending change
	#[arg(long)]
	diff: bool,

	/// Replace the document through a temporary file instead of overwriting it
	#[arg(long)]
	atomic: bool,

	/// Write whenever the content differs, not only when its length differs
	#[arg(long)]
	content_check: bool,

	/// Create a template .i18nize.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .i18nize.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Increase log verbosity (-v info, -vv debug)
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
	/// List the effective rule set in application order
	Rules,
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display discovered configuration files with source annotations
	Show,
	/// Check all config files and rule patterns for errors without rewriting anything
	Validate,
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match run(cli) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_tracing(verbose: u8) {
	let default_level = match verbose {
		0 => "warn",
		1 => "info",
		_ => "debug",
	};
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}

fn run(cli: Cli) -> Result<ExitCode> {
	if cli.init {
		return handle_init(cli.force);
	}

	if let Some(ref command) = cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(&cli),
				ConfigAction::Validate => handle_config_validate(&cli),
			},
			Commands::Rules => handle_rules(&cli),
		};
	}

	handle_rewrite(&cli)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	let template = render_config(&Config::template()).context("Failed to render template")?;
	std::fs::write(&config_path, template)
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn load_config(cli: &Cli, cwd: &Path) -> Result<MergedConfig> {
	match cli.rules {
		Some(ref path) => load_explicit_config(path)
			.with_context(|| format!("Failed to load rules file {}", path.display())),
		None => load_merged_config(cwd).context("Failed to load configuration"),
	}
}

fn load_configs(cli: &Cli, cwd: &Path) -> i18nize_cli::Result<Vec<LoadedConfig>> {
	match cli.rules {
		Some(ref path) => load_explicit_configs(path),
		None => discover_configs(cwd),
	}
}

fn save_options(cli: &Cli, config: &MergedConfig) -> SaveOptions {
	let mut options = config.save_options();
	options.atomic |= cli.atomic;
	options.dry_run = cli.dry_run;
	if cli.content_check {
		options.change_detection = ChangeDetection::Content;
	}
	options
}

fn print_hit(hit: &RuleHit) {
	println!(
		"  Replacing {} occurrence(s) of: {}...",
		hit.count, hit.preview
	);
}

fn handle_rewrite(cli: &Cli) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let config = load_config(cli, &cwd)?;

	let target = cli
		.file
		.clone()
		.unwrap_or_else(|| config.target_path(&cwd));
	let rules: Vec<Rule> = config
		.effective_rules()
		.into_iter()
		.map(|r| r.rule)
		.collect();
	let options = save_options(cli, &config);

	println!("Reading {}...", target.display());
	let document = Document::load(&target)
		.with_context(|| format!("Failed to load {}", target.display()))?;

	println!("Applying replacements...");
	let rewrite = document
		.apply_rules(&rules, print_hit)
		.context("Failed to apply rules")?;

	if cli.diff {
		print!("{}", document.unified_diff(&rewrite));
	}

	if document.planned_outcome(&rewrite, &options) == SaveOutcome::Written {
		println!("Writing changes to {}...", target.display());
	}

	let outcome = document
		.save(&rewrite, &options)
		.with_context(|| format!("Failed to write {}", target.display()))?;

	match outcome {
		SaveOutcome::Unchanged => {
			println!("⚠️  No changes made - check regex patterns");
		}
		SaveOutcome::DryRun => {
			println!(
				"Dry run: {} replacement(s) not written to {}",
				rewrite.total_replacements(),
				target.display()
			);
		}
		SaveOutcome::Written => {
			println!("✅ Replacements complete!");
		}
	}

	// Only errors fail the run; "nothing to change" is a normal outcome.
	Ok(ExitCode::SUCCESS)
}

fn handle_rules(cli: &Cli) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let config = load_config(cli, &cwd)?;

	println!("Target: {}", config.target_path(&cwd).display());
	println!();

	for (i, RuleWithSource { rule, source }) in config.effective_rules().iter().enumerate() {
		let origin = match source {
			Some(path) => path.display().to_string(),
			None => "built-in".to_string(),
		};
		println!("{:>3}  {}  ({})", i + 1, rule.preview(), origin);
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_show(cli: &Cli) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let configs = load_configs(cli, &cwd).context("Failed to discover config files")?;
	let rooted = has_project_root(&configs);

	if configs.is_empty() {
		println!("No configuration files found.");
		return Ok(ExitCode::SUCCESS);
	}

	println!("Configuration files (in cascade order):\n");

	for loaded in &configs {
		let config = &loaded.config;
		println!("# Source: {}", loaded.path.display());
		println!("# root: {}", config.root);
		if let Some(ref target) = config.target {
			println!("# target: {}", target.display());
		}
		if let Some(atomic) = config.atomic {
			println!("# atomic: {}", atomic);
		}
		if let Some(detection) = config.change_detection {
			println!("# change-detection: {}", detection);
		}
		if let Some(ref env_var) = config.root_config_lookup_disable_env_var {
			println!("# root-config-lookup-disable-env-var: {}", env_var);
		}
		if loaded.is_user && rooted && !config.rules.is_empty() {
			println!("# rules: {} (skipped, a project config sets root = true)", config.rules.len());
		} else {
			println!("# rules: {}", config.rules.len());
		}
		println!();

		for (i, rule) in config.rules.iter().enumerate() {
			println!("  Rule {}:", i + 1);
			println!("    pattern: {}", rule.pattern);
			println!("    replacement: {}", rule.replacement);
			println!();
		}
	}

	if cli.rules.is_none()
		&& let Ok(user_path) = user_config_path()
	{
		println!("User config path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate(cli: &Cli) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	let configs = match load_configs(cli, &cwd) {
		Ok(configs) => configs,
		Err(e) => {
			eprintln!("Configuration error: {}", e);
			return Ok(ExitCode::FAILURE);
		}
	};

	if configs.is_empty() {
		println!("No configuration files found.");
		return Ok(ExitCode::SUCCESS);
	}

	let mut valid = true;
	for loaded in &configs {
		if let Err(e) = loaded.config.validate() {
			eprintln!("{}: {:?}", loaded.path.display(), anyhow::Error::new(e));
			valid = false;
		}
	}

	if !valid {
		return Ok(ExitCode::FAILURE);
	}

	println!("All configuration files are valid:");
	for loaded in &configs {
		println!(
			"  {} ({} rules)",
			loaded.path.display(),
			loaded.config.rules.len()
		);
	}
	Ok(ExitCode::SUCCESS)
}
