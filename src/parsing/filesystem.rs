/* Copyright © 2024-2025 Adam Train <adam@adamtrain.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::config::config_file::Config;
use crate::schedule::person::PersonRecord;
use anyhow::{anyhow, bail, Error};
use dirs::home_dir;
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct Filesystem {
	/// Base for the default config location; None if it can't be found.
	home: Option<PathBuf>,
}

impl Filesystem {
	pub fn new() -> Self {
		Self { home: home_dir() }
	}

	#[cfg(test)]
	pub fn with_home(home: &Path) -> Self {
		Self {
			home: Some(home.to_path_buf()),
		}
	}

	pub fn open(&self, file_path: &str) -> Result<File, Error> {
		let path = Path::new(file_path);
		File::open(path)
			.map_err(|e| anyhow!("cannot open dataset {}: {}", file_path, e))
	}

	/// Reads a schedule dataset: a JSON array of people with their dates.
	pub fn read_dataset(
		&self,
		file_path: &str,
	) -> Result<Vec<PersonRecord>, Error> {
		let file = self.open(file_path)?;
		let records: Vec<PersonRecord> =
			serde_json::from_reader(BufReader::new(file)).map_err(|e| {
				anyhow!("failed to parse dataset {}: {}", file_path, e)
			})?;

		info!(path = file_path, people = records.len(), "loaded dataset");
		Ok(records)
	}

	/// Writes the dataset back out in the same JSON shape, creating parent
	/// directories as needed.
	pub fn write_dataset(
		&self,
		file_path: &str,
		records: &[PersonRecord],
	) -> Result<(), Error> {
		let path = Path::new(file_path);
		if let Some(parent) = path.parent() {
			if !parent.as_os_str().is_empty() {
				fs::create_dir_all(parent)?;
			}
		}

		let content = serde_json::to_string_pretty(records)?;
		fs::write(path, content)?;
		info!(path = file_path, people = records.len(), "wrote dataset");
		Ok(())
	}

	/// Fetches the config from the given path, or default path if none.
	/// The default file is created empty when missing; a custom path must
	/// exist.
	pub fn get_config(
		&self,
		custom_config_path: Option<&String>,
	) -> Result<Config, Error> {
		let config_path = match &custom_config_path {
			None => match &self.home {
				Some(home) => home.join(".config/kvota/config.toml"),
				None => bail!("Unable to determine home directory"),
			},
			Some(p) => PathBuf::from(p),
		};

		// create empty config file if it doesn't exist
		if !config_path.exists() && custom_config_path.is_none() {
			if let Some(parent) = config_path.parent() {
				fs::create_dir_all(parent)?;
			}
			File::create(config_path.clone())?;
		}

		let content = fs::read_to_string(&config_path).map_err(|e| {
			anyhow!("cannot read config {}: {}", config_path.display(), e)
		})?;
		let config: Config = toml::from_str(&content)
			.map_err(|e| anyhow!("failed to parse config: {}", e))?;

		Ok(config)
	}
}
