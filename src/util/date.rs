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

use chrono::{Datelike, NaiveDate, Weekday};
use std::cmp::Ordering;
use std::fmt;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Date {
	year: i32,
	month: u8,
	day: u8,
}

/// Contains the number of days between two dates, always in positive terms.
/// Designed for convenient printing in human-readable terms.
pub struct Duration {
	months: u8,
	days: u8,
	total_days: u32,
}

impl fmt::Display for Duration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.total_days == 0 {
			return write!(f, "today");
		}

		let mut components = Vec::new();
		if self.months > 0 {
			components.push(format!("{}m", self.months));
		}
		if self.days > 0 {
			components.push(format!("{}d", self.days));
		}
		if self.months > 0 {
			components.push(format!("({}d)", self.total_days));
		}

		write!(f, "{}", components.join(" "))
	}
}

impl Date {
	/// Strict constructor; None unless the day exists in that month.
	pub fn new(year: i32, month: u8, day: u8) -> Option<Date> {
		if !Date::is_valid_date(year, month, day) {
			return None;
		}
		Some(Date { year, month, day })
	}

	/// Lenient constructor for schedule headers, which carry no year. Any day
	/// in 1..=31 is accepted, and days past the end of the month carry over
	/// into the next one, so "31.04" becomes May 1 and "29.02" becomes March 1
	/// outside of leap years. Months outside 1..=12 are rejected.
	pub fn rolled(year: i32, month: u8, day: u8) -> Option<Date> {
		if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
			return None;
		}

		let month_len = Date::days_in_month(year, month);
		if day <= month_len {
			return Date::new(year, month, day);
		}

		// December has 31 days, so the carry never crosses a year
		Some(Date {
			year,
			month: month + 1,
			day: day - month_len,
		})
	}

	pub fn from_naive(date: NaiveDate) -> Date {
		Date {
			year: date.year(),
			month: date.month() as u8,
			day: date.day() as u8,
		}
	}

	pub fn year(&self) -> i32 {
		self.year
	}

	pub fn month(&self) -> u8 {
		self.month
	}

	pub fn weekday(&self) -> Weekday {
		// fields are always validated on construction
		NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
			.map(|d| d.weekday())
			.unwrap_or(Weekday::Mon)
	}

	/// Calculate the duration in calendar months and days, and the total
	/// number of days, between two dates
	pub fn until(&self, other: &Date) -> Duration {
		let (earlier, later) = if self < other {
			(self, other)
		} else {
			(other, self)
		};

		let mut year_diff = later.year - earlier.year;
		let mut month_diff = later.month as i32 - earlier.month as i32;
		let mut day_diff = later.day as i32 - earlier.day as i32;

		if day_diff < 0 {
			month_diff -= 1;
			let days_in_prev_month =
				Date::days_in_month(earlier.year, earlier.month);
			day_diff += days_in_prev_month as i32;
		}

		if month_diff < 0 {
			year_diff -= 1;
			month_diff += 12;
		}

		Duration {
			months: (year_diff * 12 + month_diff) as u8,
			days: day_diff as u8,
			total_days: Date::days_between(earlier, later),
		}
	}

	/// Calculate the total number of days between two dates
	fn days_between(start: &Date, end: &Date) -> u32 {
		let days_in_start_year =
			Date::days_since_year_start(start.year, start.month, start.day);
		let days_in_end_year =
			Date::days_since_year_start(end.year, end.month, end.day);

		let days_in_full_years = (start.year..end.year)
			.map(|year| if Date::is_leap_year(year) { 366 } else { 365 })
			.sum::<u32>();

		days_in_full_years + days_in_end_year - days_in_start_year
	}

	/// Calculate the number of days since the start of the given year
	fn days_since_year_start(year: i32, month: u8, day: u8) -> u32 {
		let mut days = 0;
		for m in 1..month {
			days += Date::days_in_month(year, m) as u32;
		}
		days + day as u32
	}

	fn is_leap_year(year: i32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	fn days_in_month(year: i32, month: u8) -> u8 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Date::is_leap_year(year) {
					29
				} else {
					28
				}
			},
			_ => 0, // Invalid month
		}
	}

	fn is_valid_date(year: i32, month: u8, day: u8) -> bool {
		if !(1..=12).contains(&month) {
			return false;
		}
		if day < 1 || day > Date::days_in_month(year, month) {
			return false;
		}
		true
	}
}

impl PartialOrd for Date {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Date {
	fn cmp(&self, other: &Self) -> Ordering {
		(self.year, self.month, self.day).cmp(&(
			other.year,
			other.month,
			other.day,
		))
	}
}

impl fmt::Display for Date {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:02}.{:02}.{:04}", self.day, self.month, self.year)
	}
}
