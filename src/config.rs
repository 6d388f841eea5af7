use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, io::ErrorKind, path::Path};
use tracing::{debug, info};

pub const CONFIG_PATH: &str = "randomizer.toml";

/// The seed is the only setting, anything else in the file is rejected.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// A fixed seed.
	/// If not set, the current time in milliseconds is used.
	pub seed: Option<i64>,
}

impl Config {
	/// Reads the config from the given TOML file.
	/// A missing file is not an error and gives the defaults.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();

		let contents = match fs::read_to_string(path) {
			Ok(contents) => contents,
			Err(e) if e.kind() == ErrorKind::NotFound => {
				info!("{} not found, using defaults", path.display());
				return Ok(Self::default());
			}
			Err(e) => {
				return Err(e).with_context(|| format!("reading {}", path.display()));
			}
		};

		let config: Config =
			toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?;

		debug!(?config, "config loaded");

		Ok(config)
	}
}
