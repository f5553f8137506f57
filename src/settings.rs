use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use config::{Config, ConfigError, File};
use filefind::app_dirs;
use filefind_core::{Catalog, DEFAULT_DELAY, MatchMode, MockProvider};
use serde::Deserialize;

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	provider: ProviderSection,
	search: SearchSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ProviderSection {
	delay_ms: Option<u64>,
	files: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
	initial_query: Option<String>,
	exact: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	title: Option<String>,
}

pub struct ResolvedConfig {
	pub provider: MockProvider,
	pub initial_query: String,
	pub mode: MatchMode,
	pub input_title: Option<String>,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Backend delay: {} ms", self.provider.delay().as_millis());
		println!("  Catalog files: {}", self.provider.catalog().len());
		for file in self.provider.catalog().files() {
			println!("    {file}");
		}
		println!("  Match mode: {}", self.mode.as_str());
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
		if let Some(title) = &self.input_title {
			println!("  Prompt title: {title}");
		}
	}
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("filefind")
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("provider.files"),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".filefind.toml"));
		files.push(current_dir.join("filefind.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(delay) = cli.delay_ms {
			self.provider.delay_ms = Some(delay);
		}
		if let Some(query) = cli.query.clone() {
			self.search.initial_query = Some(query);
		}
		if let Some(exact) = cli.exact {
			self.search.exact = Some(exact);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let catalog = match self.provider.files {
			Some(names) => Catalog::from_names(names).context("invalid provider.files")?,
			None => Catalog::default(),
		};
		let delay = self
			.provider
			.delay_ms
			.map_or(DEFAULT_DELAY, Duration::from_millis);

		Ok(ResolvedConfig {
			provider: MockProvider::new(catalog, delay),
			initial_query: self.search.initial_query.unwrap_or_default(),
			mode: MatchMode::from_exact(self.search.exact.unwrap_or(false)),
			input_title: self.ui.title.filter(|title| !title.trim().is_empty()),
		})
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use filefind_core::CatalogError;
	use tempfile::TempDir;

	use super::*;

	fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
		let path = dir.path().join("filefind.toml");
		fs::write(&path, contents).expect("write config");
		path
	}

	fn cli(args: &[&str]) -> CliArgs {
		let mut argv = vec!["filefind", "--no-config"];
		argv.extend_from_slice(args);
		CliArgs::parse_from(argv)
	}

	#[test]
	fn defaults_match_the_fixed_demo() {
		let resolved = load(&cli(&[])).expect("load");
		assert_eq!(resolved.provider.delay(), Duration::from_millis(1500));
		assert_eq!(resolved.provider.catalog(), &Catalog::default());
		assert_eq!(resolved.mode, MatchMode::Substring);
		assert!(resolved.initial_query.is_empty());
		assert_eq!(resolved.input_title, None);
	}

	#[test]
	fn config_file_sets_provider_and_search() {
		let dir = TempDir::new().expect("tempdir");
		let path = write_config(
			&dir,
			r#"
[provider]
delay_ms = 25
files = ["alpha.md", "beta.pdf"]

[search]
initial_query = "beta"
exact = true

[ui]
title = "Docs"
"#,
		);
		let path = path.to_string_lossy().into_owned();
		let resolved = load(&cli(&["--config", &path])).expect("load");

		assert_eq!(resolved.provider.delay(), Duration::from_millis(25));
		assert_eq!(resolved.provider.catalog().len(), 2);
		assert_eq!(resolved.initial_query, "beta");
		assert_eq!(resolved.mode, MatchMode::Exact);
		assert_eq!(resolved.input_title.as_deref(), Some("Docs"));
	}

	#[test]
	fn cli_flags_override_config_file() {
		let dir = TempDir::new().expect("tempdir");
		let path = write_config(&dir, "[provider]\ndelay_ms = 25\n[search]\nexact = true\n");
		let path = path.to_string_lossy().into_owned();
		let resolved = load(&cli(&[
			"--config",
			&path,
			"--delay-ms",
			"5",
			"--exact=false",
			"-q",
			"md",
		]))
		.expect("load");

		assert_eq!(resolved.provider.delay(), Duration::from_millis(5));
		assert_eq!(resolved.mode, MatchMode::Substring);
		assert_eq!(resolved.initial_query, "md");
	}

	#[test]
	fn blank_catalog_entry_is_rejected() {
		let dir = TempDir::new().expect("tempdir");
		let path = write_config(&dir, "[provider]\nfiles = [\"a.md\", \" \"]\n");
		let path = path.to_string_lossy().into_owned();
		let err = load(&cli(&["--config", &path])).err().expect("error");
		assert_eq!(
			err.downcast_ref::<CatalogError>(),
			Some(&CatalogError::BlankName { index: 1 })
		);
	}

	#[test]
	fn missing_explicit_config_is_an_error() {
		let dir = TempDir::new().expect("tempdir");
		let missing = dir.path().join("missing.toml");
		let missing = missing.to_string_lossy().into_owned();
		assert!(load(&cli(&["--config", &missing])).is_err());
	}
}
