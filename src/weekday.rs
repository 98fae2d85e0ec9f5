/// A day of the week, in the order of the Persian week.
///
/// The week starts on Saturday and ends on Friday, the weekend.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Weekday {
	Saturday = 0,
	Sunday = 1,
	Monday = 2,
	Tuesday = 3,
	Wednesday = 4,
	Thursday = 5,
	Friday = 6,
}

pub use Weekday::*;

/// All days of the week, starting with Saturday.
pub const WEEK: [Weekday; 7] = [Saturday, Sunday, Monday, Tuesday, Wednesday, Thursday, Friday];

/// Persian names of the days of the week, starting with Saturday.
pub const WEEKDAY_NAMES: [&str; 7] = [
	"شنبه",
	"یکشنبه",
	"دوشنبه",
	"سه‌شنبه",
	"چهارشنبه",
	"پنج‌شنبه",
	"جمعه",
];

impl Weekday {
	/// Get the weekday for a number in the range 0..=6, with 0 for Saturday.
	pub fn from_number(number: i32) -> Option<Self> {
		WEEK.get(usize::try_from(number).ok()?).copied()
	}

	/// Get the weekday for a number with 0 for Sunday and 6 for Saturday.
	///
	/// # Panics
	/// Panics if the number is not in the range 0..=6.
	pub fn from_sunday_based(number: i32) -> Self {
		assert!((0..7).contains(&number), "invalid weekday number: {}", number);
		WEEK[((number + 1) % 7) as usize]
	}

	/// The position in the Persian week, with 0 for Saturday and 6 for Friday.
	pub fn number(self) -> i32 {
		self as i32
	}

	/// The weekday number with 0 for Sunday and 6 for Saturday.
	pub fn sunday_based(self) -> i32 {
		(self.number() + 6) % 7
	}

	pub fn next(self) -> Self {
		WEEK[((self.number() + 1) % 7) as usize]
	}

	pub fn prev(self) -> Self {
		WEEK[((self.number() + 6) % 7) as usize]
	}

	pub fn is_friday(self) -> bool {
		self == Friday
	}

	pub fn persian_name(self) -> &'static str {
		WEEKDAY_NAMES[self as usize]
	}
}

impl std::fmt::Display for Weekday {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.pad(self.persian_name())
	}
}
