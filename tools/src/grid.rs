use jalali::{Cell, DayCell, MonthGrid, WEEK};
use yansi::{Color, Paint, Style};

use crate::CalendarConfig;

/// Width of a single column in the month grid, including the separating space.
const COLUMN_WIDTH: usize = 4;

/// The header line of a month grid: month name and year.
pub fn title(grid: &MonthGrid, config: &CalendarConfig) -> String {
	let month = grid.month();
	format!("{} {}",
		config.localization.month_name(month.month()),
		config.number(month.year()),
	)
}

/// The abbreviated weekday names, using the first letter of each name.
pub fn weekday_header(config: &CalendarConfig) -> String {
	let mut line = String::new();
	for weekday in WEEK {
		let name = config.localization.weekday_name(weekday);
		let abbreviation: String = name.chars().take(1).collect();
		line.push_str(&pad(&abbreviation));
	}
	line.trim_end().to_string()
}

pub fn style_day(day: &DayCell, config: &CalendarConfig) -> Style {
	let mut style = Color::Unset.style();
	if day.is_friday() && config.display.highlight_fridays {
		style = style.fg(Color::Red);
	}
	if day.is_selected {
		style = style.underline();
	}
	if day.is_today {
		style = style.invert();
	}
	style
}

/// Print a month grid with today, the selected day and Fridays marked by color.
pub fn print_colored(grid: &MonthGrid, config: &CalendarConfig) {
	println!("{}", Paint::new(title(grid, config)).bold());
	println!("{}", Paint::cyan(weekday_header(config)));
	for row in grid.rows() {
		if row.iter().all(|x| *x == Cell::Empty) {
			continue;
		}
		let mut line = String::new();
		for cell in row {
			match cell {
				Cell::Empty => line.push_str(&pad("")),
				Cell::Day(day) => {
					let number = config.number(day.date.day());
					let padding = (COLUMN_WIDTH - 1).saturating_sub(number.chars().count());
					line.extend(std::iter::repeat(' ').take(padding));
					line.push_str(&style_day(day, config).paint(number).to_string());
					line.push(' ');
				},
			}
		}
		println!("{}", line.trim_end());
	}
}

/// Write a month grid as plain text.
///
/// Today is marked with `*` and the selected day with `<`.
pub fn write_plain(out: &mut impl std::io::Write, grid: &MonthGrid, config: &CalendarConfig) -> std::io::Result<()> {
	writeln!(out, "{}", title(grid, config))?;
	writeln!(out, "{}", weekday_header(config))?;
	for row in grid.rows() {
		if row.iter().all(|x| *x == Cell::Empty) {
			continue;
		}
		let mut line = String::new();
		for cell in row {
			match cell {
				Cell::Empty => line.push_str(&pad("")),
				Cell::Day(day) => {
					let marker = if day.is_today {
						"*"
					} else if day.is_selected {
						"<"
					} else {
						""
					};
					line.push_str(&pad(&format!("{}{}", config.number(day.date.day()), marker)));
				},
			}
		}
		writeln!(out, "{}", line.trim_end())?;
	}
	Ok(())
}

/// Right-align a cell in its column, counting characters rather than bytes.
fn pad(text: &str) -> String {
	format!("{:>width$} ", text, width = COLUMN_WIDTH - 1)
}

#[cfg(test)]
mod test {
	use super::*;
	use assert2::assert;
	use jalali::{JalaliDate, YearMonth};

	fn plain_config() -> CalendarConfig {
		let mut config = CalendarConfig::default();
		config.display.persian_digits = false;
		config
	}

	#[test]
	fn test_write_plain() {
		let today = JalaliDate::new(1403, 1, 15).unwrap();
		let grid = MonthGrid::new(YearMonth::new(1403, 1).unwrap(), Some(today), None);
		let mut output = Vec::new();
		write_plain(&mut output, &grid, &plain_config()).unwrap();
		let output = String::from_utf8(output).unwrap();
		let lines: Vec<_> = output.lines().collect();

		assert!(lines[0] == "فروردین 1403");
		assert!(lines[1] == "  ش   ی   د   س   چ   پ   ج");
		assert!(lines[2] == "                  1   2   3");
		assert!(lines[4] == " 11  12  13  14 15*  16  17");
		assert!(lines[6] == " 25  26  27  28  29  30  31");
		assert!(lines.len() == 7);
	}

	#[test]
	fn test_title_persian_digits() {
		let grid = MonthGrid::new(YearMonth::new(1403, 12).unwrap(), None, None);
		assert!(title(&grid, &CalendarConfig::default()) == "اسفند ۱۴۰۳");
	}
}
