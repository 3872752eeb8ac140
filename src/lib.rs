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

//! Looks up how many scheduled attendances a person still owes.
//!
//! The dataset maps surnames to yearless "day.month" dates. Those dates are
//! placed on the calendar with an academic-year rule (September through the
//! following summer) and filtered against an explicit reference instant, so
//! every query is a pure function of the dataset, the time and the cutoff
//! hour.

pub mod config;
pub mod import;
pub mod parsing;
pub mod reports;
pub mod schedule;
pub mod util;
