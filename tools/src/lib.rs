use dynfmt::{Format, SimpleCurlyFormat};
use jalali::fmt::PersianDigits;
use jalali::{JalaliDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub mod grid;

/// Name of the configuration file searched for by [`CalendarConfig::find`].
pub const CONFIG_FILE_NAME: &str = "jalali.toml";

/// Main configuration file for the calendar tools.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "PascalCase")]
pub struct CalendarConfig {
	/// How dates and month grids are shown.
	#[serde(default)]
	pub display: DisplayConfig,

	/// Names for months and days of the week.
	#[serde(default)]
	pub localization: Localization,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct DisplayConfig {
	/// Show numbers with Persian digits.
	pub persian_digits: bool,

	/// Template for a single date.
	///
	/// Available fields are `{year}`, `{month}` and `{day}` (two digits, zero padded),
	/// `{month_number}` and `{day_number}` (without padding), `{month_name}` and `{weekday}`.
	pub date_format: String,

	/// Mark Fridays in the month grid.
	pub highlight_fridays: bool,

	/// Use colors in terminal output.
	pub color: bool,
}

/// Localizaton details for generated content.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Localization {
	/// Names of the twelve months, starting with Farvardin.
	pub month_names: Vec<String>,

	/// Names of the seven days of the week, starting with Saturday.
	pub weekday_names: Vec<String>,
}

impl Default for DisplayConfig {
	fn default() -> Self {
		Self {
			persian_digits: true,
			date_format: String::from("{weekday} {day_number} {month_name} {year}"),
			highlight_fridays: true,
			color: true,
		}
	}
}

impl Default for Localization {
	fn default() -> Self {
		Self {
			month_names: jalali::fmt::MONTH_NAMES.iter().map(|x| x.to_string()).collect(),
			weekday_names: jalali::WEEKDAY_NAMES.iter().map(|x| x.to_string()).collect(),
		}
	}
}

impl Localization {
	/// The configured name of a month.
	///
	/// # Panics
	/// Panics if the month is not in the range 1..=12.
	pub fn month_name(&self, month: i32) -> &str {
		&self.month_names[(month - 1) as usize]
	}

	pub fn weekday_name(&self, weekday: Weekday) -> &str {
		&self.weekday_names[weekday.number() as usize]
	}

	fn check(&self) -> Result<(), String> {
		if self.month_names.len() != 12 {
			return Err(format!("expected 12 month names, got {}", self.month_names.len()));
		}
		if self.weekday_names.len() != 7 {
			return Err(format!("expected 7 weekday names, got {}", self.weekday_names.len()));
		}
		Ok(())
	}
}

impl CalendarConfig {
	/// Find the configuration file by searching the filesystem.
	///
	/// This looks for `jalali.toml` in the start dir and each parent dir until it is found,
	/// or until the search leaves the `root_dir`.
	pub fn find(root_dir: impl AsRef<Path>, start_dir: impl AsRef<Path>) -> Option<PathBuf> {
		let root_dir = root_dir.as_ref();
		let mut dir = start_dir.as_ref();
		loop {
			if !dir.starts_with(root_dir) {
				return None;
			}
			let candidate = dir.join(CONFIG_FILE_NAME);
			if candidate.is_file() {
				return Some(candidate);
			}
			dir = dir.parent()?;
		}
	}

	/// Parse a configuration from a byte slice.
	pub fn parse(bytes: &[u8]) -> Result<Self, ParseError> {
		let config: Self = toml::from_slice(bytes).map_err(ParseError::Toml)?;
		config.localization.check().map_err(ParseError::Invalid)?;
		Ok(config)
	}

	/// Parse a file as configuration.
	pub fn read_file(path: impl AsRef<Path>) -> Result<Self, ReadFileError> {
		let path = path.as_ref();
		let bytes = std::fs::read(path)
			.map_err(|e| ReadFileError::Io(path.into(), e))?;
		Self::parse(&bytes)
			.map_err(|e| ReadFileError::Parse(path.into(), e))
	}

	/// Format a number according to the digit setting.
	pub fn number(&self, value: i32) -> String {
		if self.display.persian_digits {
			PersianDigits(value).to_string()
		} else {
			value.to_string()
		}
	}

	/// Format a date using the configured template.
	pub fn format_date(&self, date: JalaliDate) -> Result<String, String> {
		let args: BTreeMap<_, _> = [
			("year", self.number(date.year())),
			("month", self.number_padded(date.month())),
			("day", self.number_padded(date.day())),
			("month_number", self.number(date.month())),
			("day_number", self.number(date.day())),
			("month_name", self.localization.month_name(date.month()).to_string()),
			("weekday", self.localization.weekday_name(date.weekday()).to_string()),
		].into_iter().collect();

		SimpleCurlyFormat.format(&self.display.date_format, &args)
			.map(|x| x.into_owned())
			.map_err(|e| format!("failed to format date with template {:?}: {}", self.display.date_format, e))
	}

	fn number_padded(&self, value: i32) -> String {
		let value = format!("{:02}", value);
		if self.display.persian_digits {
			PersianDigits(value).to_string()
		} else {
			value
		}
	}
}

#[derive(Debug)]
pub enum ParseError {
	Toml(toml::de::Error),
	Invalid(String),
}

#[derive(Debug)]
pub enum ReadFileError {
	Io(PathBuf, std::io::Error),
	Parse(PathBuf, ParseError),
}

impl std::error::Error for ParseError {}
impl std::fmt::Display for ParseError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Toml(error) => write!(f, "{}", error),
			Self::Invalid(message) => write!(f, "{}", message),
		}
	}
}

impl std::error::Error for ReadFileError {}
impl std::fmt::Display for ReadFileError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Io(path, error) => write!(f, "failed to read {}: {}", path.display(), error),
			Self::Parse(path, error) => write!(f, "failed to parse {}: {}", path.display(), error),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use assert2::assert;

	#[test]
	fn test_empty_config() {
		let config = CalendarConfig::parse(b"").unwrap();
		assert!(config.display.persian_digits);
		assert!(config.localization.month_name(1) == "فروردین");
	}

	#[test]
	fn test_parse_config() {
		let config = CalendarConfig::parse(br#"
			[Display]
			persian_digits = false
			date_format = "{year}/{month}/{day}"
			color = false
		"#).unwrap();
		assert!(!config.display.persian_digits);
		assert!(config.display.highlight_fridays);
		assert!(!config.display.color);

		let date = JalaliDate::new(1403, 1, 1).unwrap();
		assert!(config.format_date(date).as_deref() == Ok("1403/01/01"));
	}

	#[test]
	fn test_padded_fields() {
		let mut config = CalendarConfig::default();
		config.display.date_format = String::from("{year}/{month}/{day} {day_number}.{month_number}");
		let date = JalaliDate::new(1403, 2, 7).unwrap();
		assert!(config.format_date(date).as_deref() == Ok("۱۴۰۳/۰۲/۰۷ ۷.۲"));

		config.display.persian_digits = false;
		let date = JalaliDate::new(1403, 11, 25).unwrap();
		assert!(config.format_date(date).as_deref() == Ok("1403/11/25 25.11"));
	}

	#[test]
	fn test_default_format() {
		let config = CalendarConfig::default();
		let date = JalaliDate::new(1403, 1, 1).unwrap();
		assert!(config.format_date(date).as_deref() == Ok("چهارشنبه ۱ فروردین ۱۴۰۳"));
	}

	#[test]
	fn test_reject_unknown_fields() {
		assert!(let Err(ParseError::Toml(_)) = CalendarConfig::parse(b"[Display]\nfoo = 1\n"));
		assert!(let Err(ParseError::Toml(_)) = CalendarConfig::parse(b"[Bar]\n"));
	}

	#[test]
	fn test_reject_incomplete_localization() {
		let result = CalendarConfig::parse(br#"
			[Localization]
			weekday_names = ["Sat", "Sun"]
		"#);
		assert!(let Err(ParseError::Invalid(_)) = result);
	}

	#[test]
	fn test_custom_localization() {
		let config = CalendarConfig::parse(br#"
			[Display]
			persian_digits = false
			date_format = "{weekday}, {day_number} {month_name} {year}"

			[Localization]
			month_names = ["Farvardin", "Ordibehesht", "Khordad", "Tir", "Mordad", "Shahrivar", "Mehr", "Aban", "Azar", "Dey", "Bahman", "Esfand"]
			weekday_names = ["Shanbe", "Yekshanbe", "Doshanbe", "Seshanbe", "Chaharshanbe", "Panjshanbe", "Jome"]
		"#).unwrap();
		let date = JalaliDate::new(1403, 12, 30).unwrap();
		assert!(config.format_date(date).as_deref() == Ok("Panjshanbe, 30 Esfand 1403"));
	}
}
