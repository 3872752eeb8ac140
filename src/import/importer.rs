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
use crate::import::http::Client;
use crate::parsing::filesystem::Filesystem;
use crate::schedule::dataset::Dataset;
use crate::schedule::person::PersonRecord;
use anyhow::{bail, Error};

/// Downloads a dataset from the given URL, or the configured one, and stores
/// it at `target`.
pub fn import(
	fs: &Filesystem,
	url: Option<&str>,
	target: &str,
) -> Result<usize, Error> {
	let Some(url) = url else {
		bail!("No import URL given and none configured under [import]");
	};

	let client = Client::new()?;
	let records: Vec<PersonRecord> = client.get(url)?;
	store(fs, records, target)
}

/// Indexes the records once before writing them, so that a document with
/// nobody in it never replaces a working file. Returns the number of people.
pub fn store(
	fs: &Filesystem,
	records: Vec<PersonRecord>,
	target: &str,
) -> Result<usize, Error> {
	let dataset = Dataset::build(records.clone());
	if dataset.is_empty() {
		bail!("Downloaded dataset contains no people");
	}

	fs.write_dataset(target, &records)?;
	Ok(dataset.len())
}
