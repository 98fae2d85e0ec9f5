//! Conversion between the Gregorian and the Jalali (Solar Hijri) calendar.
//!
//! Leap years follow the arithmetic 33 year cycle:
//! each cycle of 12053 days holds 8 leap years, spaced four years apart
//! with one five year gap at the end of the cycle.
//! The same rule drives leap year detection, month lengths and the conversion itself,
//! so converting a date back and forth always gives the original date.

use crate::date::{check_year, parse_ymd, GregorianDate, InvalidDate, ParseDateError};
use crate::weekday::Weekday;

/// Offset from a Jalali year number to its position in the 33 year cycles counted by the algorithm.
const CYCLE_YEAR_OFFSET: i32 = 1595;

/// Day number of 0000-01-01 (Gregorian) counted from the start of the first 33 year cycle.
const CYCLE_DAY_OFFSET: i32 = 355_667;

const DAYS_PER_33_YEARS: i32 = 12_053;
const DAYS_PER_4_YEARS: i32 = 1_461;

/// Days in the first six months of the year, which all have 31 days.
const DAYS_IN_FIRST_HALF: i32 = 186;

/// A date in the Jalali calendar.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct JalaliDate {
	year: i32,
	month: i32,
	day: i32,
}

impl JalaliDate {
	/// Create a new date from a year, month and day.
	///
	/// The year must be in the range [`MIN_YEAR`](crate::MIN_YEAR)..=[`MAX_YEAR`](crate::MAX_YEAR),
	/// the month in the range 1..=12 and the day must exist in that month.
	/// The last day of Esfand only exists in leap years.
	pub fn new(year: i32, month: i32, day: i32) -> Result<Self, InvalidDate> {
		check_year(year)?;
		if !(1..=12).contains(&month) {
			Err(InvalidDate::Month { month })
		} else if day < 1 || day > jalali_month_length(year, month) {
			Err(InvalidDate::DayOfMonth { year, month, day })
		} else {
			Ok(Self { year, month, day })
		}
	}

	pub(crate) fn from_parts_unchecked(year: i32, month: i32, day: i32) -> Self {
		debug_assert!((1..=12).contains(&month) && day >= 1 && day <= jalali_month_length(year, month), "invalid Jalali date: {}-{}-{}", year, month, day);
		Self { year, month, day }
	}

	/// Get the current date from the system clock.
	pub fn today() -> Self {
		GregorianDate::today().into()
	}

	pub fn year(self) -> i32 {
		self.year
	}

	pub fn month(self) -> i32 {
		self.month
	}

	pub fn day(self) -> i32 {
		self.day
	}

	pub fn is_leap_year(self) -> bool {
		is_jalali_leap_year(self.year)
	}

	pub fn days_in_month(self) -> i32 {
		jalali_month_length(self.year, self.month)
	}

	/// The number of days since 0000-01-01 in the proleptic Gregorian calendar.
	pub fn days_since_year_zero(self) -> i32 {
		let year = self.year + CYCLE_YEAR_OFFSET;
		let day_of_year = if self.month <= 6 {
			(self.month - 1) * 31
		} else {
			(self.month - 7) * 30 + DAYS_IN_FIRST_HALF
		};

		365 * year
			+ 8 * year.div_euclid(33)
			+ (year.rem_euclid(33) + 3) / 4
			+ day_of_year
			+ self.day - 1
			- CYCLE_DAY_OFFSET
	}

	/// Get the date for a number of days since 0000-01-01 (Gregorian).
	pub fn from_days_since_year_zero(days: i32) -> Self {
		let days = days + CYCLE_DAY_OFFSET;
		let mut year = 33 * days.div_euclid(DAYS_PER_33_YEARS) - CYCLE_YEAR_OFFSET;
		let mut days = days.rem_euclid(DAYS_PER_33_YEARS);

		year += 4 * (days / DAYS_PER_4_YEARS);
		days %= DAYS_PER_4_YEARS;

		// The first year of each 4 year block is the leap year.
		if days > 365 {
			year += (days - 1) / 365;
			days = (days - 1) % 365;
		}

		if days < DAYS_IN_FIRST_HALF {
			Self::from_parts_unchecked(year, 1 + days / 31, 1 + days % 31)
		} else {
			let days = days - DAYS_IN_FIRST_HALF;
			Self::from_parts_unchecked(year, 7 + days / 30, 1 + days % 30)
		}
	}

	pub fn from_gregorian(date: GregorianDate) -> Self {
		Self::from_days_since_year_zero(date.days_since_year_zero())
	}

	pub fn to_gregorian(self) -> GregorianDate {
		GregorianDate::from_days_since_year_zero(self.days_since_year_zero())
	}

	/// Get the day of the week, with Saturday as the first day of the week.
	pub fn weekday(self) -> Weekday {
		Weekday::from_sunday_based(self.to_gregorian().weekday_sunday_based())
	}

	pub fn first_day_of_month(self) -> Self {
		Self { day: 1, ..self }
	}

	pub fn last_day_of_month(self) -> Self {
		Self { day: self.days_in_month(), ..self }
	}

	pub fn next(self) -> Self {
		if self.day < self.days_in_month() {
			Self { day: self.day + 1, ..self }
		} else if self.month < 12 {
			Self { month: self.month + 1, day: 1, ..self }
		} else {
			Self { year: self.year + 1, month: 1, day: 1 }
		}
	}

	pub fn prev(self) -> Self {
		if self.day > 1 {
			Self { day: self.day - 1, ..self }
		} else if self.month > 1 {
			let month = self.month - 1;
			Self { month, day: jalali_month_length(self.year, month), ..self }
		} else {
			let year = self.year - 1;
			Self { year, month: 12, day: jalali_month_length(year, 12) }
		}
	}
}

/// Convert a Gregorian date to a Jalali date.
///
/// The input must be a valid Gregorian date.
pub fn gregorian_to_jalali(year: i32, month: i32, day: i32) -> JalaliDate {
	JalaliDate::from_gregorian(GregorianDate::from_parts_unchecked(year, month, day))
}

/// Convert a Jalali date to a Gregorian date.
///
/// The input must be a valid Jalali date.
pub fn jalali_to_gregorian(year: i32, month: i32, day: i32) -> GregorianDate {
	JalaliDate::from_parts_unchecked(year, month, day).to_gregorian()
}

/// Get the number of days in a Jalali month.
///
/// # Panics
/// Panics if the month is not in the range 1..=12.
pub fn jalali_month_length(year: i32, month: i32) -> i32 {
	match month {
		1..=6 => 31,
		7..=11 => 30,
		12 if is_jalali_leap_year(year) => 30,
		12 => 29,
		_ => panic!("invalid month: {}", month),
	}
}

/// Get the day of the week of a Jalali date, with Saturday as the first day of the week.
///
/// The input must be a valid Jalali date.
pub fn jalali_weekday(year: i32, month: i32, day: i32) -> Weekday {
	JalaliDate::from_parts_unchecked(year, month, day).weekday()
}

/// Check if a year is a leap year in the Jalali calendar.
///
/// Defined for every `i32` year, also outside the range accepted by [`JalaliDate::new`].
pub fn is_jalali_leap_year(year: i32) -> bool {
	let position = (year.rem_euclid(33) + CYCLE_YEAR_OFFSET % 33) % 33;
	position % 4 == 0 && position != 32
}

/// Get the number of days in a Jalali year.
pub fn jalali_year_length(year: i32) -> i32 {
	if is_jalali_leap_year(year) {
		366
	} else {
		365
	}
}

impl std::str::FromStr for JalaliDate {
	type Err = ParseDateError;

	fn from_str(data: &str) -> Result<Self, Self::Err> {
		let (year, month, day) = parse_ymd(data)?;
		Ok(Self::new(year, month, day)?)
	}
}

impl std::fmt::Display for JalaliDate {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
	}
}

impl From<GregorianDate> for JalaliDate {
	fn from(other: GregorianDate) -> Self {
		Self::from_gregorian(other)
	}
}

impl From<JalaliDate> for GregorianDate {
	fn from(other: JalaliDate) -> Self {
		other.to_gregorian()
	}
}
