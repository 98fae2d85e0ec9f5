use crate::date::{check_year, parse_fields, InvalidDate, InvalidSyntax};
use crate::jalali::{jalali_month_length, JalaliDate};
use crate::month::YearMonth;
use std::ops::Range;

/// A Jalali year, month of a year, or a full date.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PartialDate {
	Year(i32),
	YearMonth(YearMonth),
	YearMonthDay(JalaliDate),
}

impl PartialDate {
	/// The half-open range of dates covered by the partial date.
	pub fn as_range(self) -> Range<JalaliDate> {
		Range {
			start: self.as_start_date(),
			end: self.as_end_date().next(),
		}
	}

	pub fn as_start_date(self) -> JalaliDate {
		match self {
			Self::Year(x) => JalaliDate::from_parts_unchecked(x, 1, 1),
			Self::YearMonth(x) => x.first_day(),
			Self::YearMonthDay(x) => x,
		}
	}

	pub fn as_end_date(self) -> JalaliDate {
		match self {
			Self::Year(x) => JalaliDate::from_parts_unchecked(x, 12, jalali_month_length(x, 12)),
			Self::YearMonth(x) => x.last_day(),
			Self::YearMonthDay(x) => x,
		}
	}

	/// The month containing the start of the partial date.
	pub fn year_month(self) -> YearMonth {
		YearMonth::of(self.as_start_date())
	}
}

impl std::str::FromStr for PartialDate {
	type Err = ParsePartialDateError;

	fn from_str(data: &str) -> Result<Self, Self::Err> {
		match parse_fields(data)? {
			(year, Some(month), Some(day)) => Ok(Self::YearMonthDay(JalaliDate::new(year, month, day)?)),
			(year, Some(month), None) => Ok(Self::YearMonth(YearMonth::new(year, month)?)),
			(year, None, _) => {
				check_year(year)?;
				Ok(Self::Year(year))
			},
		}
	}
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParsePartialDateError {
	InvalidSyntax(InvalidSyntax),
	InvalidDate(InvalidDate),
}

impl std::error::Error for ParsePartialDateError {}

impl From<InvalidSyntax> for ParsePartialDateError {
	fn from(other: InvalidSyntax) -> Self {
		Self::InvalidSyntax(other)
	}
}

impl From<InvalidDate> for ParsePartialDateError {
	fn from(other: InvalidDate) -> Self {
		Self::InvalidDate(other)
	}
}

impl std::fmt::Display for ParsePartialDateError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::InvalidSyntax(e) => write!(f, "{}", e),
			Self::InvalidDate(e) => write!(f, "{}", e),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use assert2::assert;

	fn jalali(year: i32, month: i32, day: i32) -> JalaliDate {
		JalaliDate::new(year, month, day).unwrap()
	}

	#[test]
	fn test_parse() {
		assert!("1403".parse() == Ok(PartialDate::Year(1403)));
		assert!("1403-07".parse() == Ok(PartialDate::YearMonth(YearMonth::new(1403, 7).unwrap())));
		assert!("1403-12-30".parse() == Ok(PartialDate::YearMonthDay(jalali(1403, 12, 30))));
		assert!(let Err(ParsePartialDateError::InvalidSyntax(_)) = "".parse::<PartialDate>());
		assert!(let Err(ParsePartialDateError::InvalidSyntax(_)) = "1403-x".parse::<PartialDate>());
		assert!(let Err(ParsePartialDateError::InvalidDate(_)) = "1403-13".parse::<PartialDate>());
		assert!(let Err(ParsePartialDateError::InvalidDate(_)) = "1402-12-30".parse::<PartialDate>());
	}

	#[test]
	fn test_parse_negative_year() {
		assert!("-5".parse() == Ok(PartialDate::Year(-5)));
		assert!("-005-06".parse() == Ok(PartialDate::YearMonth(YearMonth::new(-5, 6).unwrap())));
		assert!("-005-06-15".parse() == Ok(PartialDate::YearMonthDay(jalali(-5, 6, 15))));
		assert!(let Err(ParsePartialDateError::InvalidSyntax(_)) = "-".parse::<PartialDate>());
		assert!(let Err(ParsePartialDateError::InvalidSyntax(_)) = "1403--1".parse::<PartialDate>());
	}

	#[test]
	fn test_year_out_of_range() {
		assert!("2147483000".parse::<PartialDate>() == Err(ParsePartialDateError::InvalidDate(InvalidDate::Year { year: 2_147_483_000 })));
		assert!(let Err(ParsePartialDateError::InvalidDate(InvalidDate::Year { .. })) = "2147483000-12".parse::<PartialDate>());
		assert!(let Err(ParsePartialDateError::InvalidDate(InvalidDate::Year { .. })) = "2147483000-12-01".parse::<PartialDate>());
	}

	#[test]
	fn test_range() {
		assert!(PartialDate::Year(1403).as_range() == (jalali(1403, 1, 1)..jalali(1404, 1, 1)));
		assert!(PartialDate::Year(1402).as_end_date() == jalali(1402, 12, 29));

		let month = PartialDate::YearMonth(YearMonth::new(1403, 6).unwrap());
		assert!(month.as_range() == (jalali(1403, 6, 1)..jalali(1403, 7, 1)));

		let day = PartialDate::YearMonthDay(jalali(1403, 12, 30));
		assert!(day.as_range() == (jalali(1403, 12, 30)..jalali(1404, 1, 1)));
		assert!(day.year_month() == YearMonth::new(1403, 12).unwrap());
	}
}
