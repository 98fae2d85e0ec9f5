/// Cumulative number of days before the first of each month in a common year.
const DAYS_BEFORE_MONTH: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// The earliest year accepted by the checked date constructors.
pub const MIN_YEAR: i32 = -1_000_000;

/// The latest year accepted by the checked date constructors.
///
/// Day numbers for years this far out still fit comfortably in an `i32`.
pub const MAX_YEAR: i32 = 1_000_000;

const DAYS_PER_400_YEARS: i32 = 146_097;
const DAYS_PER_100_YEARS: i32 = 36_524;
const DAYS_PER_4_YEARS: i32 = 1_461;

/// A date in the proleptic Gregorian calendar.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GregorianDate {
	year: i32,
	month: i32,
	day: i32,
}

impl GregorianDate {
	/// Create a new date from a year, month and day.
	///
	/// The year must be in the range [`MIN_YEAR`]..=[`MAX_YEAR`],
	/// the month in the range 1..=12 and the day must exist in that month.
	pub fn new(year: i32, month: i32, day: i32) -> Result<Self, InvalidDate> {
		check_year(year)?;
		if !(1..=12).contains(&month) {
			Err(InvalidDate::Month { month })
		} else if day < 1 || day > gregorian_month_length(year, month) {
			Err(InvalidDate::DayOfMonth { year, month, day })
		} else {
			Ok(Self { year, month, day })
		}
	}

	/// Create a date without checking the components.
	///
	/// The caller guarantees the month and day are valid for the year.
	/// Conversions near the ends of the supported range may produce a year just outside it.
	pub(crate) fn from_parts_unchecked(year: i32, month: i32, day: i32) -> Self {
		debug_assert!((1..=12).contains(&month) && day >= 1 && day <= gregorian_month_length(year, month), "invalid Gregorian date: {}-{}-{}", year, month, day);
		Self { year, month, day }
	}

	/// Get the current date from the system clock.
	pub fn today() -> Self {
		gregorian::Date::today().into()
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
		is_gregorian_leap_year(self.year)
	}

	/// The number of days since 0000-01-01 in the proleptic Gregorian calendar.
	///
	/// Dates before 0000-01-01 give a negative number.
	pub fn days_since_year_zero(self) -> i32 {
		// Leap days are counted up to and including the current year once February has passed.
		let leap_year = if self.month > 2 { self.year + 1 } else { self.year };
		365 * self.year
			+ (leap_year + 3).div_euclid(4)
			- (leap_year + 99).div_euclid(100)
			+ (leap_year + 399).div_euclid(400)
			+ DAYS_BEFORE_MONTH[(self.month - 1) as usize]
			+ self.day - 1
	}

	/// Get the date for a number of days since 0000-01-01.
	///
	/// This is the inverse of [`Self::days_since_year_zero`].
	pub fn from_days_since_year_zero(days: i32) -> Self {
		let mut year = 400 * days.div_euclid(DAYS_PER_400_YEARS);
		let mut days = days.rem_euclid(DAYS_PER_400_YEARS);

		// The first century of each 400 year cycle has one more leap day than the others.
		if days > DAYS_PER_100_YEARS {
			days -= 1;
			year += 100 * (days / DAYS_PER_100_YEARS);
			days %= DAYS_PER_100_YEARS;
			// The first year of the other centuries is not a leap year.
			if days >= 365 {
				days += 1;
			}
		}

		year += 4 * (days / DAYS_PER_4_YEARS);
		days %= DAYS_PER_4_YEARS;

		// The first year of each 4 year block is the leap year.
		if days > 365 {
			year += (days - 1) / 365;
			days = (days - 1) % 365;
		}

		let mut month = 1;
		let mut day = days + 1;
		while day > gregorian_month_length(year, month) {
			day -= gregorian_month_length(year, month);
			month += 1;
		}

		Self::from_parts_unchecked(year, month, day)
	}

	/// Get the day of the week with 0 for Sunday and 6 for Saturday.
	pub fn weekday_sunday_based(self) -> i32 {
		// 0000-01-01 was a Saturday.
		(self.days_since_year_zero() + 6).rem_euclid(7)
	}

	pub fn next(self) -> Self {
		if self.day < gregorian_month_length(self.year, self.month) {
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
			Self { month, day: gregorian_month_length(self.year, month), ..self }
		} else {
			Self { year: self.year - 1, month: 12, day: 31 }
		}
	}
}

/// Check that a year is in the supported range.
pub(crate) fn check_year(year: i32) -> Result<(), InvalidDate> {
	if (MIN_YEAR..=MAX_YEAR).contains(&year) {
		Ok(())
	} else {
		Err(InvalidDate::Year { year })
	}
}

/// Check if a year is a leap year in the proleptic Gregorian calendar.
pub fn is_gregorian_leap_year(year: i32) -> bool {
	if year % 400 == 0 {
		true
	} else if year % 100 == 0 {
		false
	} else {
		year % 4 == 0
	}
}

/// Get the number of days in a Gregorian month.
///
/// # Panics
/// Panics if the month is not in the range 1..=12.
pub fn gregorian_month_length(year: i32, month: i32) -> i32 {
	match month {
		1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
		4 | 6 | 9 | 11 => 30,
		2 if is_gregorian_leap_year(year) => 29,
		2 => 28,
		_ => panic!("invalid month: {}", month),
	}
}

impl std::str::FromStr for GregorianDate {
	type Err = ParseDateError;

	fn from_str(data: &str) -> Result<Self, Self::Err> {
		let (year, month, day) = parse_ymd(data)?;
		Ok(Self::new(year, month, day)?)
	}
}

impl std::fmt::Display for GregorianDate {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
	}
}

impl From<gregorian::Date> for GregorianDate {
	fn from(other: gregorian::Date) -> Self {
		Self {
			year: other.year().to_number().into(),
			month: other.month().to_number().into(),
			day: other.day().into(),
		}
	}
}

impl TryFrom<GregorianDate> for gregorian::Date {
	type Error = OutOfRange;

	fn try_from(other: GregorianDate) -> Result<Self, Self::Error> {
		let year: i16 = other.year.try_into().map_err(|_| OutOfRange { date: other })?;
		let month = gregorian::Month::new(other.month as u8).map_err(|_| OutOfRange { date: other })?;
		gregorian::Date::new(year, month, other.day as u8).map_err(|_| OutOfRange { date: other })
	}
}

/// Split `YYYY-MM-DD` into its numeric components.
pub(crate) fn parse_ymd(data: &str) -> Result<(i32, i32, i32), InvalidSyntax> {
	match parse_fields(data)? {
		(year, Some(month), Some(day)) => Ok((year, month, day)),
		_ => Err(InvalidSyntax::new(data)),
	}
}

/// Split `YYYY[-MM[-DD]]` into its numeric components.
///
/// The year may have a leading `-` for years before year zero, as written by `Display`.
pub(crate) fn parse_fields(data: &str) -> Result<(i32, Option<i32>, Option<i32>), InvalidSyntax> {
	let trimmed = data.trim();
	let (negative, unsigned) = match trimmed.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, trimmed),
	};

	let number = |field: &str| -> Result<i32, InvalidSyntax> {
		if field.is_empty() || !field.bytes().all(|c| c.is_ascii_digit()) {
			return Err(InvalidSyntax::new(data));
		}
		field.parse().map_err(|_| InvalidSyntax::new(data))
	};

	let mut fields = unsigned.splitn(3, '-');
	let year = number(fields.next().unwrap_or(""))?;
	let year = if negative { -year } else { year };
	let month = fields.next().map(number).transpose()?;
	let day = fields.next().map(number).transpose()?;
	Ok((year, month, day))
}

/// A year, month and day that do not form a valid date.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InvalidDate {
	Year { year: i32 },
	Month { month: i32 },
	DayOfMonth { year: i32, month: i32, day: i32 },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidSyntax {
	data: String,
}

impl InvalidSyntax {
	pub(crate) fn new(data: impl Into<String>) -> Self {
		Self { data: data.into() }
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseDateError {
	InvalidSyntax(InvalidSyntax),
	InvalidDate(InvalidDate),
}

/// A Gregorian date outside the range of [`gregorian::Date`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OutOfRange {
	date: GregorianDate,
}

impl std::error::Error for InvalidDate {}
impl std::error::Error for InvalidSyntax {}
impl std::error::Error for ParseDateError {}
impl std::error::Error for OutOfRange {}

impl From<InvalidSyntax> for ParseDateError {
	fn from(other: InvalidSyntax) -> Self {
		Self::InvalidSyntax(other)
	}
}

impl From<InvalidDate> for ParseDateError {
	fn from(other: InvalidDate) -> Self {
		Self::InvalidDate(other)
	}
}

impl std::fmt::Display for InvalidDate {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Year { year } => write!(f, "year {} is outside the supported range {} to {}", year, MIN_YEAR, MAX_YEAR),
			Self::Month { month } => write!(f, "invalid month number: {}, expected a value from 1 to 12", month),
			Self::DayOfMonth { year, month, day } => write!(f, "invalid day {} for month {:02} of year {}", day, month, year),
		}
	}
}

impl std::fmt::Display for InvalidSyntax {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "invalid date syntax: expected YYYY-MM-DD, got {:?}", self.data)
	}
}

impl std::fmt::Display for ParseDateError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::InvalidSyntax(e) => write!(f, "{}", e),
			Self::InvalidDate(e) => write!(f, "{}", e),
		}
	}
}

impl std::fmt::Display for OutOfRange {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "date {} is out of the supported range", self.date)
	}
}
