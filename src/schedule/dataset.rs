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
use crate::schedule::person::{normalize_key, PersonRecord};
use crate::schedule::policy::SortYearPolicy;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Outcome of a surname search. An empty query and a query with no match
/// are different answers and are reported differently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Lookup<'a> {
	NoQuery,
	NotFound,
	Found(&'a PersonRecord),
}

/// All known people, keyed by lowercased surname. Built once and never
/// modified afterwards.
#[derive(Debug, Default)]
pub struct Dataset {
	people: BTreeMap<String, PersonRecord>,
}

impl Dataset {
	/// Indexes the given records. Surnames are trimmed, records whose
	/// surnames match case-insensitively are merged into the first one seen,
	/// and each schedule is put into academic-year order. Records without a
	/// surname are skipped.
	pub fn build(records: Vec<PersonRecord>) -> Self {
		let policy = SortYearPolicy::default();
		let mut people: BTreeMap<String, PersonRecord> = BTreeMap::new();

		for mut record in records {
			record.trim_surname();
			if record.surname().is_empty() {
				warn!(
					entries = record.dates().len(),
					"skipping record without a surname"
				);
				continue;
			}

			match people.entry(record.key()) {
				Entry::Occupied(mut existing) => {
					debug!(surname = record.surname(), "merging duplicate surname");
					existing.get_mut().absorb(record);
				},
				Entry::Vacant(slot) => {
					slot.insert(record);
				},
			}
		}

		for person in people.values_mut() {
			policy.sort(person.dates_mut());

			let invalid = person
				.dates()
				.iter()
				.filter(|entry| !policy.resolve(entry.date()).is_valid())
				.count();
			if invalid > 0 {
				warn!(
					surname = person.surname(),
					invalid, "schedule contains unreadable dates"
				);
			}
		}

		Self { people }
	}

	pub fn lookup(&self, query: &str) -> Lookup<'_> {
		let key = normalize_key(query);
		if key.is_empty() {
			return Lookup::NoQuery;
		}

		match self.people.get(&key) {
			Some(person) => Lookup::Found(person),
			None => Lookup::NotFound,
		}
	}

	/// People ordered by lookup key
	pub fn people(&self) -> impl Iterator<Item = &PersonRecord> {
		self.people.values()
	}

	/// Every entry whose date cannot be placed on the calendar, with its
	/// owner, in dataset order.
	pub fn invalid_entries(&self) -> Vec<(&PersonRecord, &ScheduleEntry)> {
		let policy = SortYearPolicy::default();
		self.people()
			.flat_map(|person| {
				person
					.dates()
					.iter()
					.filter(move |entry| !policy.resolve(entry.date()).is_valid())
					.map(move |entry| (person, entry))
			})
			.collect()
	}

	pub fn len(&self) -> usize {
		self.people.len()
	}

	pub fn is_empty(&self) -> bool {
		self.people.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn person(surname: &str, dates: &[(&str, &str)]) -> PersonRecord {
		PersonRecord::new(
			surname,
			dates
				.iter()
				.map(|(date, subject)| ScheduleEntry::new(date, subject))
				.collect(),
		)
	}

	fn sample() -> Dataset {
		Dataset::build(vec![
			person("Иванов", &[("15.09", "АСОИУ"), ("01.01", "АСОИУ")]),
			person("Petrov", &[("20.12", "ТОАУ")]),
		])
	}

	#[test]
	fn test_lookup_ignores_case_and_whitespace() {
		let dataset = sample();
		let padded = dataset.lookup("  Иванов ");
		let lower = dataset.lookup("иванов");
		let upper = dataset.lookup("ИВАНОВ");

		assert!(matches!(padded, Lookup::Found(p) if p.surname() == "Иванов"));
		assert_eq!(padded, lower);
		assert_eq!(lower, upper);
		assert!(matches!(dataset.lookup("pEtRoV"), Lookup::Found(_)));
	}

	#[test]
	fn test_lookup_is_exact() {
		let dataset = sample();
		assert_eq!(dataset.lookup("Иван"), Lookup::NotFound);
		assert_eq!(dataset.lookup("Иванова"), Lookup::NotFound);
		assert_eq!(dataset.lookup("Pet rov"), Lookup::NotFound);
	}

	#[test]
	fn test_empty_query_is_not_a_search() {
		let dataset = sample();
		assert_eq!(dataset.lookup(""), Lookup::NoQuery);
		assert_eq!(dataset.lookup(" \t\n "), Lookup::NoQuery);
	}

	#[test]
	fn test_build_merges_duplicates_and_sorts() {
		let dataset = Dataset::build(vec![
			person(" Сидоров", &[("01.03", "АСОИУ"), ("10.10", "АСОИУ")]),
			person("сидоров ", &[("15.09", "ТОАУ"), ("01.02", "ТОАУ")]),
		]);

		assert_eq!(dataset.len(), 1);
		let Lookup::Found(found) = dataset.lookup("сидоров") else {
			panic!("record missing");
		};
		assert_eq!(found.surname(), "Сидоров");

		let order: Vec<(&str, &str)> = found
			.dates()
			.iter()
			.map(|e| (e.date().raw(), e.subject()))
			.collect();
		assert_eq!(
			order,
			vec![
				("15.09", "ТОАУ"),
				("10.10", "АСОИУ"),
				("01.02", "ТОАУ"),
				("01.03", "АСОИУ"),
			]
		);
	}

	#[test]
	fn test_build_skips_blank_surnames() {
		let dataset = Dataset::build(vec![
			person("   ", &[("15.09", "АСОИУ")]),
			person("Kim", &[]),
		]);
		assert_eq!(dataset.len(), 1);
		assert_eq!(dataset.lookup("   "), Lookup::NoQuery);
	}

	#[test]
	fn test_people_are_ordered_by_key() {
		let dataset = Dataset::build(vec![
			person("beta", &[]),
			person("Alpha", &[]),
		]);
		let names: Vec<&str> = dataset.people().map(|p| p.surname()).collect();
		assert_eq!(names, vec!["Alpha", "beta"]);
	}

	#[test]
	fn test_invalid_entries() {
		let dataset = Dataset::build(vec![
			person("Иванов", &[("15.09", "АСОИУ"), ("xx.yy", "ТОАУ")]),
			person("Petrov", &[("", "ТОАУ"), ("31.13", "ТОАУ")]),
		]);

		let invalid: Vec<(&str, &str)> = dataset
			.invalid_entries()
			.into_iter()
			.map(|(p, e)| (p.surname(), e.date().raw()))
			.collect();
		assert_eq!(
			invalid,
			vec![("Petrov", ""), ("Petrov", "31.13"), ("Иванов", "xx.yy")]
		);
	}

	#[test]
	fn test_empty_dataset() {
		let dataset = Dataset::default();
		assert!(dataset.is_empty());
		assert_eq!(dataset.lookup("anyone"), Lookup::NotFound);
	}
}
