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
use anyhow::{anyhow, bail, Error};
use clap::{Parser, ValueEnum};
use kvota::config::config_file::Config;
use kvota::import;
use kvota::parsing::filesystem::Filesystem;
use kvota::reports::roster_reporter::RosterReporter;
use kvota::reports::schedule_reporter::ScheduleReporter;
use kvota::schedule::dataset::{Dataset, Lookup};
use kvota::schedule::upcoming::UpcomingFilter;
use kvota::util;
use std::str::FromStr;
use tracing::Level;

#[derive(Parser)]
#[command(
	name = "kvota",
	version,
	about = "Remaining attendance obligations from an academic-year schedule"
)]
struct Cli {
	// ----------------
	// -- POSITIONAL --
	// ----------------
	/// The command to execute
	command: Directive,

	/// The surname for the Find and All commands, or the URL for Import
	#[arg(required = false)]
	term: Option<String>,

	// -----------
	// -- FLAGS --
	// -----------
	/// Specifies the dataset file (default: `dataset` from config)
	#[arg(short)]
	file: Option<String>,

	/// Custom config file location (default: ~/.config/kvota/config.toml)
	#[arg(long)]
	config: Option<String>,

	/// Reference time instead of the clock (YYYY-MM-DDTHH:MM)
	#[arg(long)]
	now: Option<String>,

	/// Hour from which today's entries count as attended (default: 18)
	#[arg(long)]
	cutoff: Option<u32>,
}

#[derive(ValueEnum, Clone, PartialEq)]
enum Directive {
	Find, // remaining dates for one person
	All,  // whole schedule for one person, with status

	List,  // everyone with total and remaining counts
	Check, // find unreadable dates in the dataset

	Import, // download the dataset from a URL
}

fn main() -> Result<(), Error> {
	let args = Cli::parse();

	let fs = Filesystem::new();
	let config = fs.get_config(args.config.as_ref())?;
	init_logging(config.log_level.as_deref())?;

	let file = dataset_path(&args, &config)?;

	match args.command {
		Directive::Import => {
			let url = args.term.as_deref().or(config
				.import
				.as_ref()
				.and_then(|section| section.url.as_deref()));
			let people = import::importer::import(&fs, url, &file)?;
			println!("Imported {} people into {}", people, file);
		},
		Directive::Find | Directive::All => {
			let (dataset, filter) = load(&fs, &args, &config, &file)?;
			let query = args.term.as_deref().unwrap_or_default();
			match dataset.lookup(query) {
				Lookup::NoQuery => println!("Enter a surname to search"),
				Lookup::NotFound => {
					println!("Surname not found: {}", query.trim())
				},
				Lookup::Found(person) => {
					let reporter = ScheduleReporter::new(filter);
					if args.command == Directive::Find {
						print!("{}", reporter.remaining(person));
					} else {
						print!("{}", reporter.full(person));
					}
				},
			}
		},
		Directive::List => {
			let (dataset, filter) = load(&fs, &args, &config, &file)?;
			print!("{}", RosterReporter::new(&dataset).summary(&filter));
		},
		Directive::Check => {
			let (dataset, _) = load(&fs, &args, &config, &file)?;
			print!("{}", RosterReporter::new(&dataset).check());
		},
	}

	Ok(())
}

/// Reads and indexes the dataset, and fixes the reference instant that
/// every report of this run is computed against.
fn load(
	fs: &Filesystem,
	args: &Cli,
	config: &Config,
	file: &str,
) -> Result<(Dataset, UpcomingFilter), Error> {
	let cutoff = config.cutoff_hour(args.cutoff)?;
	let now = util::clock::reference_time(args.now.as_deref())?;
	let dataset = Dataset::build(fs.read_dataset(file)?);
	Ok((dataset, UpcomingFilter::new(now, cutoff)))
}

fn dataset_path(args: &Cli, config: &Config) -> Result<String, Error> {
	match args.file.as_ref().or(config.dataset.as_ref()) {
		Some(path) => Ok(path.clone()),
		None => bail!("No dataset file given; pass -f or set `dataset` in config"),
	}
}

/// Diagnostics go to stderr so reports on stdout stay machine-comparable.
fn init_logging(level: Option<&str>) -> Result<(), Error> {
	let level = match level {
		None => Level::WARN,
		Some(raw) => Level::from_str(raw)
			.map_err(|_| anyhow!("unknown log level: {}", raw))?,
	};

	tracing_subscriber::fmt()
		.with_max_level(level)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
	Ok(())
}
