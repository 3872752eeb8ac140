/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
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
use anyhow::{bail, Error};
use chrono::{Local, NaiveDate, NaiveDateTime};

const FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Reference instant for a run: the given override, or the local wall
/// clock. This is the only place the clock is read.
pub fn reference_time(now: Option<&str>) -> Result<NaiveDateTime, Error> {
	match now {
		None => Ok(Local::now().naive_local()),
		Some(raw) => parse(raw),
	}
}

/// Accepts "YYYY-MM-DDTHH:MM" (seconds optional, space allowed instead of
/// T) or a bare "YYYY-MM-DD", which means midnight.
fn parse(raw: &str) -> Result<NaiveDateTime, Error> {
	let raw = raw.trim();
	for format in FORMATS {
		if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
			return Ok(parsed);
		}
	}

	if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
		if let Some(midnight) = day.and_hms_opt(0, 0, 0) {
			return Ok(midnight);
		}
	}

	bail!("Reference time must look like YYYY-MM-DDTHH:MM, got '{}'", raw)
}
