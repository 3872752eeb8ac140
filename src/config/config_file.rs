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
use crate::schedule::upcoming::DEFAULT_CUTOFF_HOUR;
use anyhow::{bail, Error};
use serde::Deserialize;

/// 24 keeps today's entries for the whole day
pub const MAX_CUTOFF_HOUR: u32 = 24;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	/// Dataset file used when no -f flag is given
	pub dataset: Option<String>,

	/// Local hour from which today's occurrence counts as attended
	pub cutoff_hour: Option<u32>,

	/// One of error, warn, info, debug, trace
	pub log_level: Option<String>,

	pub import: Option<Import>,
}

impl Config {
	/// Cutoff hour for this run: the flag, else the config value, else the
	/// default.
	pub fn cutoff_hour(&self, flag: Option<u32>) -> Result<u32, Error> {
		let cutoff = flag.or(self.cutoff_hour).unwrap_or(DEFAULT_CUTOFF_HOUR);
		if cutoff > MAX_CUTOFF_HOUR {
			bail!("Maximum cutoff hour is {}", MAX_CUTOFF_HOUR);
		}
		Ok(cutoff)
	}
}

#[derive(Debug, Default, Deserialize)]
pub struct Import {
	/// Endpoint serving the schedule dataset as JSON
	pub url: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_config() {
		let config: Config = toml::from_str("").unwrap();
		assert!(config.dataset.is_none());
		assert!(config.cutoff_hour.is_none());
		assert!(config.import.is_none());
	}

	#[test]
	fn test_full_config() {
		let config: Config = toml::from_str(
			r#"
			dataset = "/srv/schedule.json"
			cutoff_hour = 17
			log_level = "debug"

			[import]
			url = "https://example.org/api/schedule"
			"#,
		)
		.unwrap();

		assert_eq!(config.dataset.as_deref(), Some("/srv/schedule.json"));
		assert_eq!(config.cutoff_hour, Some(17));
		assert_eq!(config.log_level.as_deref(), Some("debug"));
		assert_eq!(config.cutoff_hour(None).unwrap(), 17);
		assert_eq!(
			config.import.unwrap_or_default().url.as_deref(),
			Some("https://example.org/api/schedule")
		);
	}

	#[test]
	fn test_cutoff_precedence() {
		let config = Config {
			cutoff_hour: Some(16),
			..Default::default()
		};
		assert_eq!(config.cutoff_hour(Some(12)).unwrap(), 12);
		assert_eq!(config.cutoff_hour(None).unwrap(), 16);
		assert_eq!(
			Config::default().cutoff_hour(None).unwrap(),
			DEFAULT_CUTOFF_HOUR
		);
	}

	#[test]
	fn test_cutoff_out_of_range() {
		let config: Config = toml::from_str("cutoff_hour = 30").unwrap();
		assert!(config.cutoff_hour(None).is_err());
		assert!(Config::default().cutoff_hour(Some(25)).is_err());
		assert_eq!(Config::default().cutoff_hour(Some(24)).unwrap(), 24);
	}
}
