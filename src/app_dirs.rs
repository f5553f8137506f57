//! Where `filefind` looks for its `config.toml`.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const CONFIG_DIR_ENV: &str = "FILEFIND_CONFIG_DIR";

/// Config directory: `FILEFIND_CONFIG_DIR` if set and non-empty, otherwise the
/// platform's local config directory for `filefind`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = override_dir(env::var_os(CONFIG_DIR_ENV)) {
		return Ok(dir);
	}

	let dirs = ProjectDirs::from("io", "albo", "filefind")
		.ok_or_else(|| anyhow!("no home directory to place filefind's config in"))?;
	Ok(dirs.config_local_dir().to_path_buf())
}

fn override_dir(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_override_falls_through() {
		assert_eq!(override_dir(None), None);
		assert_eq!(override_dir(Some(OsString::new())), None);
		assert_eq!(
			override_dir(Some(OsString::from("/tmp/filefind"))),
			Some(PathBuf::from("/tmp/filefind"))
		);
	}
}
