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
use chrono::{NaiveDate, NaiveDateTime};
use kvota::schedule::dataset::{Dataset, Lookup};
use kvota::schedule::entry::{DateFragment, ScheduleEntry};
use kvota::schedule::person::PersonRecord;
use kvota::schedule::policy::{AcademicDate, FilterYearPolicy};
use kvota::schedule::upcoming::filter_upcoming;
use kvota::util::date::Date;

fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
	NaiveDate::from_ymd_opt(year, month, day)
		.unwrap()
		.and_hms_opt(hour, 0, 0)
		.unwrap()
}

fn raw_dates(entries: &[ScheduleEntry]) -> Vec<&str> {
	entries.iter().map(|e| e.date().raw()).collect()
}

fn dataset() -> Dataset {
	let dates = ["01.01", "xx.yy", "30.06", "", "20.12", "15.09"]
		.iter()
		.map(|d| ScheduleEntry::new(d, "АСОИУ"))
		.collect();
	Dataset::build(vec![PersonRecord::new("Иванов", dates)])
}

#[test]
fn test_lookup_then_filter() {
	let dataset = dataset();
	let Lookup::Found(person) = dataset.lookup("  Иванов ") else {
		panic!("Иванов should be found");
	};

	// unreadable dates sort first, the rest in academic order
	assert_eq!(
		raw_dates(person.dates()),
		vec!["xx.yy", "", "15.09", "20.12", "01.01", "30.06"]
	);

	let upcoming = filter_upcoming(person.dates(), at(2024, 12, 20, 18), 18);
	assert_eq!(raw_dates(&upcoming), vec!["01.01", "30.06"]);

	let upcoming = filter_upcoming(person.dates(), at(2024, 12, 20, 9), 18);
	assert_eq!(raw_dates(&upcoming), vec!["20.12", "01.01", "30.06"]);
}

#[test]
fn test_lookup_outcomes_differ() {
	let dataset = dataset();
	assert_eq!(dataset.lookup(""), Lookup::NoQuery);
	assert_eq!(dataset.lookup("Петров"), Lookup::NotFound);
	assert_eq!(dataset.lookup("иванов"), dataset.lookup("ИВАНОВ "));
}

#[test]
fn test_rollover_both_ways() {
	let autumn = FilterYearPolicy::anchored(Date::new(2024, 9, 15).unwrap());
	assert_eq!(
		autumn.resolve(&DateFragment::new("20.05")).date().map(|d| d.year()),
		Some(2025)
	);

	let spring = FilterYearPolicy::anchored(Date::new(2025, 3, 1).unwrap());
	assert_eq!(
		spring.resolve(&DateFragment::new("20.12")).date().map(|d| d.year()),
		Some(2024)
	);
	assert_eq!(
		spring.resolve(&DateFragment::new("xx.yy")),
		AcademicDate::Invalid
	);
}
