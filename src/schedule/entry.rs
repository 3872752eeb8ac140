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
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static FRAGMENT_REGEX: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^([0-9]{1,2})\.([0-9]{1,2})$").unwrap());

/// A "day.month" schedule header with no year, e.g. "15.09" or "5.9".
///
/// The raw text is kept for display; the numeric fields are parsed once on
/// construction. A fragment that does not parse is still a value: it simply
/// has no fields, and every date policy resolves it to the invalid sentinel.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DateFragment {
	raw: String,
	fields: Option<(u8, u8)>, // (day, month)
}

impl DateFragment {
	pub fn new(raw: &str) -> Self {
		let raw = raw.trim().to_string();
		let fields = FRAGMENT_REGEX.captures(&raw).and_then(|caps| {
			let day = caps[1].parse::<u8>().ok()?;
			let month = caps[2].parse::<u8>().ok()?;
			Some((day, month))
		});

		Self { raw, fields }
	}

	pub fn raw(&self) -> &str {
		&self.raw
	}

	/// Parsed day of month, without any range check
	pub fn day(&self) -> Option<u8> {
		self.fields.map(|(day, _)| day)
	}

	/// Parsed one-based month, without any range check
	pub fn month(&self) -> Option<u8> {
		self.fields.map(|(_, month)| month)
	}
}

impl From<String> for DateFragment {
	fn from(raw: String) -> Self {
		DateFragment::new(&raw)
	}
}

impl From<DateFragment> for String {
	fn from(fragment: DateFragment) -> Self {
		fragment.raw
	}
}

impl fmt::Display for DateFragment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.raw())
	}
}

/// One attendance obligation: a yearless date and the course it belongs to.
/// The subject is an opaque label; nothing but the reports look at it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
	date: DateFragment,
	subject: String,
}

impl ScheduleEntry {
	pub fn new(date: &str, subject: &str) -> Self {
		Self {
			date: DateFragment::new(date),
			subject: subject.to_string(),
		}
	}

	pub fn date(&self) -> &DateFragment {
		&self.date
	}

	pub fn subject(&self) -> &str {
		&self.subject
	}
}
