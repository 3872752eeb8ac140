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
use crate::schedule::policy::{AcademicDate, FilterYearPolicy};
use crate::util::date::Date;
use chrono::{NaiveDateTime, Timelike};

/// Local hour after which an occurrence on the current day counts as done.
pub const DEFAULT_CUTOFF_HOUR: u32 = 18;

/// Decides, for a fixed reference instant, whether an entry is still owed.
///
/// An entry is upcoming when its date lies after the reference day, or on
/// the reference day while the clock is still before the cutoff hour. The
/// cutoff hour itself already counts as passed.
pub struct UpcomingFilter {
	policy: FilterYearPolicy,
	now: NaiveDateTime,
	cutoff_hour: u32,
	today: Date,
	before_cutoff: bool,
}

impl UpcomingFilter {
	pub fn new(now: NaiveDateTime, cutoff_hour: u32) -> Self {
		let today = Date::from_naive(now.date());
		Self {
			policy: FilterYearPolicy::anchored(today),
			now,
			cutoff_hour,
			today,
			before_cutoff: now.hour() < cutoff_hour,
		}
	}

	pub fn now(&self) -> NaiveDateTime {
		self.now
	}

	pub fn cutoff_hour(&self) -> u32 {
		self.cutoff_hour
	}

	pub fn today(&self) -> Date {
		self.today
	}

	/// True for a dated entry that falls on the reference day, whether or
	/// not the cutoff has passed.
	pub fn is_today(&self, entry: &ScheduleEntry) -> bool {
		self.resolve(entry).date() == Some(self.today)
	}

	pub fn resolve(&self, entry: &ScheduleEntry) -> AcademicDate {
		self.policy.resolve(entry.date())
	}

	pub fn is_upcoming(&self, entry: &ScheduleEntry) -> bool {
		match self.resolve(entry) {
			AcademicDate::Invalid => false,
			AcademicDate::Dated(date) => {
				date > self.today || (date == self.today && self.before_cutoff)
			},
		}
	}
}

/// Entries still owed as of `now`, in their original order.
pub fn filter_upcoming(
	entries: &[ScheduleEntry],
	now: NaiveDateTime,
	cutoff_hour: u32,
) -> Vec<ScheduleEntry> {
	let filter = UpcomingFilter::new(now, cutoff_hour);
	entries
		.iter()
		.filter(|entry| filter.is_upcoming(entry))
		.cloned()
		.collect()
}

/// Splits entries into (past, upcoming), each keeping the original order.
/// Invalid entries land in the past half.
pub fn partition_upcoming(
	entries: &[ScheduleEntry],
	now: NaiveDateTime,
	cutoff_hour: u32,
) -> (Vec<ScheduleEntry>, Vec<ScheduleEntry>) {
	let filter = UpcomingFilter::new(now, cutoff_hour);
	let (upcoming, past): (Vec<ScheduleEntry>, Vec<ScheduleEntry>) = entries
		.iter()
		.cloned()
		.partition(|entry| filter.is_upcoming(entry));
	(past, upcoming)
}
