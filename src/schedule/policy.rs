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
use crate::schedule::entry::{DateFragment, ScheduleEntry};
use crate::util::date::Date;

/// First month of the academic year; September through the following
/// summer form one year.
pub const FIRST_TERM_MONTH: u8 = 9;

/// Calendar placement of a yearless fragment.
///
/// `Invalid` is the sentinel for fragments that do not parse or fall out of
/// range. It orders before every real date, so it sorts to the front of a
/// schedule and never survives a forward-looking filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AcademicDate {
	Invalid,
	Dated(Date),
}

impl AcademicDate {
	fn place(fragment: &DateFragment, year_for: impl Fn(u8) -> i32) -> Self {
		let (Some(day), Some(month)) = (fragment.day(), fragment.month())
		else {
			return AcademicDate::Invalid;
		};

		match Date::rolled(year_for(month), month, day) {
			Some(date) => AcademicDate::Dated(date),
			None => AcademicDate::Invalid,
		}
	}

	pub fn date(&self) -> Option<Date> {
		match self {
			AcademicDate::Invalid => None,
			AcademicDate::Dated(date) => Some(*date),
		}
	}

	pub fn is_valid(&self) -> bool {
		matches!(self, AcademicDate::Dated(_))
	}
}

/// Year inference used to order a whole dataset once, with no reference to
/// the clock. Autumn months go to the base year and everything else to the
/// year after, which gives one stable key per academic year.
#[derive(Clone, Copy, Debug)]
pub struct SortYearPolicy {
	base_year: i32,
}

impl Default for SortYearPolicy {
	fn default() -> Self {
		Self { base_year: 2024 }
	}
}

impl SortYearPolicy {
	/// 0 for September onwards, 1 for the months of the following year
	pub fn year_offset(month: u8) -> i32 {
		if month >= FIRST_TERM_MONTH {
			0
		} else {
			1
		}
	}

	pub fn resolve(&self, fragment: &DateFragment) -> AcademicDate {
		AcademicDate::place(fragment, |month| {
			self.base_year + SortYearPolicy::year_offset(month)
		})
	}

	/// Stable sort into academic-year order; invalid fragments go first and
	/// keep their relative order.
	pub fn sort(&self, entries: &mut [ScheduleEntry]) {
		entries.sort_by_key(|entry| self.resolve(entry.date()));
	}
}

/// Year inference anchored to a reference day, used when deciding whether an
/// entry has already happened.
///
/// From September on, spring fragments belong to the next calendar year.
/// Before September, autumn fragments belong to the previous one. Everything
/// else stays in the reference year.
#[derive(Clone, Copy, Debug)]
pub struct FilterYearPolicy {
	today: Date,
}

impl FilterYearPolicy {
	pub fn anchored(today: Date) -> Self {
		Self { today }
	}

	pub fn year_for(&self, month: u8) -> i32 {
		let current_year = self.today.year();
		let autumn_now = self.today.month() >= FIRST_TERM_MONTH;
		let autumn_fragment = month >= FIRST_TERM_MONTH;

		if autumn_now && !autumn_fragment {
			current_year + 1
		} else if !autumn_now && autumn_fragment {
			current_year - 1
		} else {
			current_year
		}
	}

	pub fn resolve(&self, fragment: &DateFragment) -> AcademicDate {
		AcademicDate::place(fragment, |month| self.year_for(month))
	}
}
