use crate::date::{check_year, InvalidDate};
use crate::jalali::{jalali_month_length, JalaliDate};
use crate::weekday::Weekday;

/// Number of cells in a month grid: six weeks of seven days.
pub const GRID_CELLS: usize = 42;

/// A month of a specific year in the Jalali calendar.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct YearMonth {
	year: i32,
	month: i32,
}

impl YearMonth {
	pub fn new(year: i32, month: i32) -> Result<Self, InvalidDate> {
		check_year(year)?;
		if (1..=12).contains(&month) {
			Ok(Self { year, month })
		} else {
			Err(InvalidDate::Month { month })
		}
	}

	/// Get the month containing a date.
	pub fn of(date: JalaliDate) -> Self {
		Self { year: date.year(), month: date.month() }
	}

	pub fn year(self) -> i32 {
		self.year
	}

	pub fn month(self) -> i32 {
		self.month
	}

	/// The number of days in the month.
	pub fn days(self) -> i32 {
		jalali_month_length(self.year, self.month)
	}

	pub fn first_day(self) -> JalaliDate {
		JalaliDate::from_parts_unchecked(self.year, self.month, 1)
	}

	pub fn last_day(self) -> JalaliDate {
		JalaliDate::from_parts_unchecked(self.year, self.month, self.days())
	}

	/// Get a day of the month, clamped to the last day of the month.
	pub fn day_clamped(self, day: i32) -> JalaliDate {
		JalaliDate::from_parts_unchecked(self.year, self.month, day.clamp(1, self.days()))
	}

	/// The weekday of the first day of the month.
	pub fn first_weekday(self) -> Weekday {
		self.first_day().weekday()
	}

	pub fn contains(self, date: JalaliDate) -> bool {
		Self::of(date) == self
	}

	pub fn next(self) -> Self {
		self.add_months(1)
	}

	pub fn prev(self) -> Self {
		self.add_months(-1)
	}

	/// Move a number of months forward, or backward for negative numbers.
	pub fn add_months(self, months: i32) -> Self {
		// An i32 month count moves the year by less than 2^28, so the year fits in an i32 again.
		let index = i64::from(self.year) * 12 + i64::from(self.month - 1) + i64::from(months);
		Self {
			year: index.div_euclid(12) as i32,
			month: index.rem_euclid(12) as i32 + 1,
		}
	}
}

impl std::fmt::Display for YearMonth {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{:04}-{:02}", self.year, self.month)
	}
}

/// A step in month navigation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Navigation {
	Previous,
	Next,
}

/// Get the month shown after navigating from `current`.
pub fn navigate(current: YearMonth, direction: Navigation) -> YearMonth {
	match direction {
		Navigation::Previous => current.prev(),
		Navigation::Next => current.next(),
	}
}

/// A single day in a month grid.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DayCell {
	pub date: JalaliDate,
	pub weekday: Weekday,
	pub is_today: bool,
	pub is_selected: bool,
}

impl DayCell {
	pub fn is_friday(&self) -> bool {
		self.weekday.is_friday()
	}
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Cell {
	/// Padding before the first or after the last day of the month.
	Empty,
	Day(DayCell),
}

impl Cell {
	pub fn day(&self) -> Option<&DayCell> {
		match self {
			Self::Empty => None,
			Self::Day(x) => Some(x),
		}
	}
}

/// The days of a month laid out in weeks starting on Saturday.
///
/// The grid always holds [`GRID_CELLS`] cells.
/// Cells before the first day and after the last day of the month are empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonthGrid {
	month: YearMonth,
	cells: Vec<Cell>,
}

impl MonthGrid {
	/// Lay out a month, marking today and the selected date if they fall in the month.
	pub fn new(month: YearMonth, today: Option<JalaliDate>, selected: Option<JalaliDate>) -> Self {
		let leading = month.first_weekday().number() as usize;
		let mut cells = Vec::with_capacity(GRID_CELLS);
		cells.resize(leading, Cell::Empty);

		let mut weekday = month.first_weekday();
		for day in 1..=month.days() {
			let date = JalaliDate::from_parts_unchecked(month.year, month.month, day);
			cells.push(Cell::Day(DayCell {
				date,
				weekday,
				is_today: today == Some(date),
				is_selected: selected == Some(date),
			}));
			weekday = weekday.next();
		}

		cells.resize(GRID_CELLS, Cell::Empty);
		Self { month, cells }
	}

	pub fn month(&self) -> YearMonth {
		self.month
	}

	pub fn cells(&self) -> &[Cell] {
		&self.cells
	}

	/// Iterate over the weeks of the grid.
	pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
		self.cells.chunks(7)
	}

	pub fn days(&self) -> impl Iterator<Item = &DayCell> {
		self.cells.iter().filter_map(Cell::day)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use assert2::assert;

	fn year_month(year: i32, month: i32) -> YearMonth {
		YearMonth::new(year, month).unwrap()
	}

	#[test]
	fn test_navigation() {
		assert!(navigate(year_month(1403, 12), Navigation::Next) == year_month(1404, 1));
		assert!(navigate(year_month(1403, 1), Navigation::Previous) == year_month(1402, 12));
		assert!(navigate(year_month(1403, 5), Navigation::Next) == year_month(1403, 6));
		assert!(navigate(year_month(1403, 5), Navigation::Previous) == year_month(1403, 4));
		assert!(year_month(1403, 1).add_months(-25) == year_month(1400, 12));
		assert!(year_month(1403, 1).add_months(24) == year_month(1405, 1));
		assert!(let Err(InvalidDate::Month { month: 0 }) = YearMonth::new(1403, 0));
	}

	#[test]
	fn test_year_out_of_range() {
		assert!(let Err(InvalidDate::Year { year: 2_000_000 }) = YearMonth::new(2_000_000, 1));
		assert!(YearMonth::new(crate::MAX_YEAR, 12).is_ok());
		assert!(YearMonth::new(crate::MIN_YEAR, 1).is_ok());
	}

	#[test]
	fn test_add_months_extreme() {
		let month = year_month(1403, 1).add_months(i32::MAX);
		assert!((month.year(), month.month()) == (178_958_373, 8));
		let month = year_month(1403, 1).add_months(i32::MIN);
		assert!((month.year(), month.month()) == (-178_955_568, 5));
	}

	#[test]
	fn test_days() {
		assert!(year_month(1403, 12).days() == 30);
		assert!(year_month(1402, 12).days() == 29);
		assert!(year_month(1403, 12).day_clamped(31) == JalaliDate::new(1403, 12, 30).unwrap());
		assert!(year_month(1402, 12).day_clamped(30) == JalaliDate::new(1402, 12, 29).unwrap());
	}

	#[test]
	fn test_grid_farvardin_1403() {
		let today = JalaliDate::new(1403, 1, 15).unwrap();
		let selected = JalaliDate::new(1403, 1, 20).unwrap();
		let grid = MonthGrid::new(year_month(1403, 1), Some(today), Some(selected));

		assert!(grid.cells().len() == GRID_CELLS);
		// 1403-01-01 was a Wednesday, the fifth day of the Persian week.
		assert!(grid.cells()[..4].iter().all(|x| *x == Cell::Empty));
		let first = grid.cells()[4].day().unwrap();
		assert!(first.date == JalaliDate::new(1403, 1, 1).unwrap());
		assert!(first.weekday == Weekday::Wednesday);
		assert!(grid.cells()[4 + 31..].iter().all(|x| *x == Cell::Empty));
		assert!(grid.days().count() == 31);

		let marked_today: Vec<_> = grid.days().filter(|x| x.is_today).map(|x| x.date).collect();
		let marked_selected: Vec<_> = grid.days().filter(|x| x.is_selected).map(|x| x.date).collect();
		assert!(marked_today == [today]);
		assert!(marked_selected == [selected]);

		let fridays: Vec<_> = grid.days().filter(|x| x.is_friday()).map(|x| x.date.day()).collect();
		assert!(fridays == [3, 10, 17, 24, 31]);
		for row in grid.rows() {
			assert!(row.len() == 7);
			if let Cell::Day(day) = row[6] {
				assert!(day.is_friday());
			}
		}
	}

	#[test]
	fn test_grid_other_month() {
		let today = JalaliDate::new(1403, 2, 1).unwrap();
		let grid = MonthGrid::new(year_month(1403, 1), Some(today), None);
		assert!(grid.days().all(|x| !x.is_today && !x.is_selected));
	}

	#[test]
	fn test_grid_weekdays_consistent() {
		let mut month = year_month(1399, 1);
		for _ in 0..60 {
			let grid = MonthGrid::new(month, None, None);
			assert!(grid.cells().len() == GRID_CELLS);
			assert!(grid.days().count() as i32 == month.days());
			for (i, cell) in grid.cells().iter().enumerate() {
				if let Cell::Day(day) = cell {
					assert!(day.weekday.number() as usize == i % 7);
					assert!(day.weekday == day.date.weekday());
				}
			}
			month = month.next();
		}
	}
}
