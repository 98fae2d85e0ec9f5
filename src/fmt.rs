//! Persian display strings for dates.

use crate::jalali::JalaliDate;

/// Persian digits, indexed by their value.
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Persian names of the Jalali months, starting with Farvardin.
pub const MONTH_NAMES: [&str; 12] = [
	"فروردین",
	"اردیبهشت",
	"خرداد",
	"تیر",
	"مرداد",
	"شهریور",
	"مهر",
	"آبان",
	"آذر",
	"دی",
	"بهمن",
	"اسفند",
];

/// Display adapter that writes ASCII digits as Persian digits.
///
/// All other characters are written unchanged.
///
/// ```
/// use jalali::fmt::PersianDigits;
///
/// assert_eq!(PersianDigits(1403).to_string(), "۱۴۰۳");
/// assert_eq!(PersianDigits("12:30").to_string(), "۱۲:۳۰");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct PersianDigits<T>(pub T);

impl<T: std::fmt::Display> std::fmt::Display for PersianDigits<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		use std::fmt::Write;
		let mut writer = DigitWriter { inner: f };
		write!(writer, "{}", self.0)
	}
}

struct DigitWriter<'a, 'b> {
	inner: &'a mut std::fmt::Formatter<'b>,
}

impl std::fmt::Write for DigitWriter<'_, '_> {
	fn write_str(&mut self, data: &str) -> std::fmt::Result {
		for c in data.chars() {
			match c.to_digit(10) {
				Some(digit) if c.is_ascii_digit() => self.inner.write_char(PERSIAN_DIGITS[digit as usize])?,
				_ => self.inner.write_char(c)?,
			}
		}
		Ok(())
	}
}

/// Convert the ASCII digits in the display form of `value` to Persian digits.
pub fn to_persian_digits(value: impl std::fmt::Display) -> String {
	PersianDigits(value).to_string()
}

/// Get the Persian name of a Jalali month.
///
/// # Panics
/// Panics if the month is not in the range 1..=12.
pub fn month_name(month: i32) -> &'static str {
	match month {
		1..=12 => MONTH_NAMES[(month - 1) as usize],
		_ => panic!("month {} not in 1..=12", month),
	}
}

/// Format a Jalali date as day, month name and year with Persian digits.
///
/// ```
/// use jalali::JalaliDate;
///
/// let date = JalaliDate::new(1403, 1, 1).unwrap();
/// assert_eq!(jalali::fmt::format_jalali_date(date), "۱ فروردین ۱۴۰۳");
/// ```
pub fn format_jalali_date(date: JalaliDate) -> String {
	format!("{} {} {}", PersianDigits(date.day()), month_name(date.month()), PersianDigits(date.year()))
}
