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
/// Plain text table for reports that list many single-line items.
///
/// Widths are measured in characters rather than bytes, since most of the
/// names and subjects it prints are Cyrillic.
pub struct Table {
	column_count: usize,
	rows: Vec<Row>,
	right_align: Vec<bool>, // indicates columns by index
}

pub enum Row {
	Header(Vec<String>),
	Data(Vec<String>),
	Separator,
}

impl Table {
	pub fn new(column_count: usize) -> Self {
		Self {
			column_count,
			rows: Vec::new(),
			right_align: vec![false; column_count],
		}
	}

	/// Adds a header row.
	pub fn add_header(&mut self, row: Vec<&str>) {
		self.rows.push(Row::Header(
			row.into_iter().map(|s| s.to_string()).collect(),
		));
	}

	/// Adds a data row.
	pub fn add_row(&mut self, row: Vec<&str>) {
		self.rows
			.push(Row::Data(row.into_iter().map(|s| s.to_string()).collect()));
	}

	/// Adds a full separator row.
	pub fn add_separator(&mut self) {
		self.rows.push(Row::Separator);
	}

	/// Specifies columns that should be right-aligned by index.
	pub fn right_align(&mut self, cols: Vec<usize>) {
		for col in cols {
			self.right_align[col] = true;
		}
	}

	pub fn render(&self) -> String {
		let mut max_widths = vec![0; self.column_count];

		for row in &self.rows {
			if let Row::Data(data_row) | Row::Header(data_row) = row {
				for (i, value) in data_row.iter().enumerate() {
					max_widths[i] = max_widths[i].max(width(value));
				}
			}
		}

		let mut out = String::new();
		for row in &self.rows {
			let line = match row {
				Row::Header(header_row) => {
					self.centered_row(&max_widths, header_row)
				},
				Row::Data(data_row) => self.data_row(&max_widths, data_row),
				Row::Separator => self.separator(&max_widths),
			};
			// trailing padding is never useful in a terminal
			out.push_str(line.trim_end());
			out.push('\n');
		}
		out
	}

	fn data_row(&self, max_widths: &[usize], data_row: &[String]) -> String {
		let cells: Vec<String> = data_row
			.iter()
			.enumerate()
			.map(|(i, value)| {
				if self.right_align[i] {
					pad_left(value, max_widths[i])
				} else {
					pad_right(value, max_widths[i])
				}
			})
			.collect();
		cells.join("   ")
	}

	fn centered_row(&self, max_widths: &[usize], data_row: &[String]) -> String {
		let cells: Vec<String> = data_row
			.iter()
			.enumerate()
			.map(|(i, value)| Table::center_align(value, max_widths[i]))
			.collect();
		cells.join(" | ")
	}

	fn separator(&self, max_widths: &[usize]) -> String {
		let total_width: usize =
			max_widths.iter().sum::<usize>() + (3 * (self.column_count - 1));
		"-".repeat(total_width)
	}

	fn center_align(value: &str, target: usize) -> String {
		let len = width(value);
		if len >= target {
			return value.to_string();
		}
		let total_padding = target - len;
		let left_padding = total_padding / 2;
		let right_padding = total_padding - left_padding;

		format!(
			"{}{}{}",
			" ".repeat(left_padding),
			value,
			" ".repeat(right_padding)
		)
	}
}

fn width(value: &str) -> usize {
	value.chars().count()
}

fn pad_right(value: &str, target: usize) -> String {
	format!("{}{}", value, " ".repeat(target.saturating_sub(width(value))))
}

fn pad_left(value: &str, target: usize) -> String {
	format!("{}{}", " ".repeat(target.saturating_sub(width(value))), value)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_cyrillic_columns_line_up() {
		let mut table = Table::new(2);
		table.add_row(vec!["Иванов", "1"]);
		table.add_row(vec!["Li", "12"]);
		table.right_align(vec![1]);

		assert_eq!(table.render(), "Иванов    1\nLi       12\n");
	}

	#[test]
	fn test_header_and_separator() {
		let mut table = Table::new(2);
		table.add_header(vec!["Date", "Subject"]);
		table.add_separator();
		table.add_row(vec!["11.11.2024", "АСОИУ"]);

		assert_eq!(
			table.render(),
			"   Date    | Subject\n--------------------\n11.11.2024   АСОИУ\n"
		);
	}
}
