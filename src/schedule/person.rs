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
use crate::schedule::entry::ScheduleEntry;
use serde::{Deserialize, Serialize};

/// Everything one person has to attend, across all subjects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
	surname: String,
	dates: Vec<ScheduleEntry>,
}

impl PersonRecord {
	pub fn new(surname: &str, dates: Vec<ScheduleEntry>) -> Self {
		Self {
			surname: surname.trim().to_string(),
			dates,
		}
	}

	/// Display form of the surname, case preserved
	pub fn surname(&self) -> &str {
		&self.surname
	}

	/// Entries in academic-year order
	pub fn dates(&self) -> &[ScheduleEntry] {
		&self.dates
	}

	/// Key used for lookups
	pub fn key(&self) -> String {
		normalize_key(&self.surname)
	}

	pub(super) fn trim_surname(&mut self) {
		self.surname = self.surname.trim().to_string();
	}

	pub(super) fn dates_mut(&mut self) -> &mut Vec<ScheduleEntry> {
		&mut self.dates
	}

	pub(super) fn absorb(&mut self, other: PersonRecord) {
		self.dates.extend(other.dates);
	}
}

/// Trims and lowercases; no other folding.
pub fn normalize_key(raw: &str) -> String {
	raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_surname_is_trimmed_not_lowercased() {
		let person = PersonRecord::new("  Иванов ", vec![]);
		assert_eq!(person.surname(), "Иванов");
		assert_eq!(person.key(), "иванов");
	}

	#[test]
	fn test_deserialize() {
		let person: PersonRecord = serde_json::from_str(
			r#"{"surname": "Петрова", "dates": [{"date": "15.09", "subject": "АСОИУ"}]}"#,
		)
		.unwrap();
		assert_eq!(person.surname(), "Петрова");
		assert_eq!(person.dates().len(), 1);
		assert_eq!(person.dates()[0].subject(), "АСОИУ");
	}
}
