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
use crate::schedule::entry::ScheduleEntry;
use crate::schedule::person::PersonRecord;
use crate::schedule::policy::AcademicDate;
use crate::schedule::upcoming::{
	filter_upcoming, partition_upcoming, UpcomingFilter,
};
use std::collections::BTreeMap;

/// Reports on a single person's schedule as seen from one reference instant.
pub struct ScheduleReporter {
	filter: UpcomingFilter,
}

impl ScheduleReporter {
	pub fn new(filter: UpcomingFilter) -> Self {
		Self { filter }
	}

	/// Remaining obligations: the count against the whole plan, the dates
	/// still owed with today's marked, how many are left per subject, and
	/// how long until the next one.
	pub fn remaining(&self, person: &PersonRecord) -> String {
		let upcoming = filter_upcoming(
			person.dates(),
			self.filter.now(),
			self.filter.cutoff_hour(),
		);

		let mut out = format!(
			"{}: {} remaining ({} in plan)\n\n",
			person.surname(),
			upcoming.len(),
			person.dates().len()
		);

		if upcoming.is_empty() {
			out.push_str("Nothing left\n");
			return out;
		}

		let mut table = Table::new(4);
		table.add_header(vec!["Date", "Day", "Subject", "Note"]);
		table.add_separator();

		let mut per_subject: BTreeMap<&str, usize> = BTreeMap::new();
		for entry in &upcoming {
			let (when, day) = describe(entry, &self.filter.resolve(entry));
			let note = if self.filter.is_today(entry) { "today" } else { "" };
			table.add_row(vec![&when, &day, entry.subject(), note]);
			*per_subject.entry(entry.subject()).or_insert(0) += 1;
		}
		out.push_str(&table.render());
		out.push('\n');

		let mut totals = Table::new(2);
		totals.right_align(vec![1]);
		for (subject, count) in &per_subject {
			totals.add_row(vec![subject, &count.to_string()]);
		}
		out.push_str(&totals.render());

		// the list keeps dataset order, so look for the earliest explicitly
		let next = upcoming
			.iter()
			.filter_map(|entry| self.filter.resolve(entry).date())
			.min();
		if let Some(next) = next {
			out.push_str(&format!(
				"\nNext: {} ({})\n",
				next,
				self.filter.today().until(&next)
			));
		}

		out
	}

	/// The whole schedule with each entry marked past or upcoming. Past
	/// entries come first; dataset order is chronological, so this keeps it.
	pub fn full(&self, person: &PersonRecord) -> String {
		let (past, upcoming) = partition_upcoming(
			person.dates(),
			self.filter.now(),
			self.filter.cutoff_hour(),
		);

		let mut out = format!(
			"{}: {} total, {} remaining\n\n",
			person.surname(),
			person.dates().len(),
			upcoming.len()
		);

		if person.dates().is_empty() {
			out.push_str("No data\n");
			return out;
		}

		let mut table = Table::new(4);
		table.add_header(vec!["Date", "Day", "Subject", "Status"]);
		table.add_separator();

		let rows = past
			.iter()
			.map(|entry| (entry, "past"))
			.chain(upcoming.iter().map(|entry| (entry, "upcoming")));
		for (entry, status) in rows {
			let date = self.filter.resolve(entry);
			let (when, day) = describe(entry, &date);
			let status = if date.is_valid() { status } else { "invalid" };
			table.add_row(vec![&when, &day, entry.subject(), status]);
		}
		out.push_str(&table.render());

		out
	}
}

/// Date and weekday columns; unreadable fragments are shown as written.
fn describe(entry: &ScheduleEntry, date: &AcademicDate) -> (String, String) {
	match date {
		AcademicDate::Dated(d) => (d.to_string(), d.weekday().to_string()),
		AcademicDate::Invalid => (format!("'{}'", entry.date()), "?".to_string()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{NaiveDate, NaiveDateTime};

	fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
		NaiveDate::from_ymd_opt(year, month, day)
			.unwrap()
			.and_hms_opt(hour, 0, 0)
			.unwrap()
	}

	fn person() -> PersonRecord {
		PersonRecord::new(
			"Иванов",
			vec![
				ScheduleEntry::new("09.11", "АСОИУ"),
				ScheduleEntry::new("10.11", "ТОАУ"),
				ScheduleEntry::new("11.11", "АСОИУ"),
				ScheduleEntry::new("20.01", "АСОИУ"),
			],
		)
	}

	#[test]
	fn test_remaining_before_cutoff() {
		let reporter =
			ScheduleReporter::new(UpcomingFilter::new(at(2024, 11, 10, 17), 18));

		let expected = "\
Иванов: 3 remaining (4 in plan)

   Date    | Day | Subject | Note
----------------------------------
10.11.2024   Sun   ТОАУ      today
11.11.2024   Mon   АСОИУ
20.01.2025   Mon   АСОИУ

АСОИУ   2
ТОАУ    1

Next: 10.11.2024 (today)
";
		assert_eq!(reporter.remaining(&person()), expected);
	}

	#[test]
	fn test_remaining_after_cutoff() {
		let reporter =
			ScheduleReporter::new(UpcomingFilter::new(at(2024, 11, 10, 19), 18));
		let report = reporter.remaining(&person());

		assert!(report.starts_with("Иванов: 2 remaining (4 in plan)\n"));
		assert!(!report.contains("10.11.2024"));
		assert!(!report.contains("today\n"));
		assert!(report.ends_with("Next: 11.11.2024 (1d)\n"));
	}

	#[test]
	fn test_nothing_left() {
		let reporter =
			ScheduleReporter::new(UpcomingFilter::new(at(2025, 6, 1, 9), 18));
		assert_eq!(
			reporter.remaining(&person()),
			"Иванов: 0 remaining (4 in plan)\n\nNothing left\n"
		);
	}

	#[test]
	fn test_full_marks_each_entry() {
		let mut dates = person().dates().to_vec();
		dates.insert(0, ScheduleEntry::new("xx.yy", "ТОАУ"));
		let person = PersonRecord::new("Иванов", dates);

		let reporter =
			ScheduleReporter::new(UpcomingFilter::new(at(2024, 11, 10, 19), 18));

		let expected = "\
Иванов: 5 total, 2 remaining

   Date    | Day | Subject |  Status
-------------------------------------
'xx.yy'      ?     ТОАУ      invalid
09.11.2024   Sat   АСОИУ     past
10.11.2024   Sun   ТОАУ      past
11.11.2024   Mon   АСОИУ     upcoming
20.01.2025   Mon   АСОИУ     upcoming
";
		assert_eq!(reporter.full(&person), expected);
	}

	#[test]
	fn test_full_without_dates() {
		let reporter =
			ScheduleReporter::new(UpcomingFilter::new(at(2024, 11, 10, 19), 18));
		let person = PersonRecord::new("Kim", vec![]);
		assert_eq!(reporter.full(&person), "Kim: 0 total, 0 remaining\n\nNo data\n");
	}
}
