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
use crate::reports::table::Table;
use crate::schedule::dataset::Dataset;
use crate::schedule::upcoming::{filter_upcoming, UpcomingFilter};

/// Dataset-wide reports.
pub struct RosterReporter<'a> {
	dataset: &'a Dataset,
}

impl<'a> RosterReporter<'a> {
	pub fn new(dataset: &'a Dataset) -> Self {
		Self { dataset }
	}

	/// Every person with their total and remaining counts.
	pub fn summary(&self, filter: &UpcomingFilter) -> String {
		if self.dataset.is_empty() {
			return "No data\n".to_string();
		}

		let mut table = Table::new(3);
		table.right_align(vec![1, 2]);
		table.add_header(vec!["Surname", "Total", "Remaining"]);
		table.add_separator();

		for person in self.dataset.people() {
			let remaining = filter_upcoming(
				person.dates(),
				filter.now(),
				filter.cutoff_hour(),
			)
			.len();
			table.add_row(vec![
				person.surname(),
				&person.dates().len().to_string(),
				&remaining.to_string(),
			]);
		}

		format!("{}\n{} people\n", table.render(), self.dataset.len())
	}

	/// Entries whose dates cannot be read; "Done" when there are none.
	pub fn check(&self) -> String {
		let invalid = self.dataset.invalid_entries();
		if invalid.is_empty() {
			return "Done\n".to_string();
		}

		let mut table = Table::new(3);
		table.add_header(vec!["Surname", "Date", "Subject"]);
		table.add_separator();
		for (person, entry) in &invalid {
			let raw = format!("'{}'", entry.date());
			table.add_row(vec![person.surname(), &raw, entry.subject()]);
		}

		format!("{}\n{} unreadable dates\n", table.render(), invalid.len())
	}
}
