//! Conversion between Gregorian and Jalali (Solar Hijri) calendar dates.
//!
//! The Jalali calendar starts the year near the northward equinox.
//! The first six months have 31 days, the next five have 30 days,
//! and Esfand has 29 days, or 30 in a leap year.
//!
//! All conversions are pure arithmetic on day numbers.
//! Leap years follow the arithmetic 33 year cycle (see [`is_jalali_leap_year`]).
//!
//! ```
//! use jalali::{gregorian_to_jalali, jalali_to_gregorian, jalali_weekday, Weekday};
//!
//! let nowruz = gregorian_to_jalali(2024, 3, 20);
//! assert_eq!((nowruz.year(), nowruz.month(), nowruz.day()), (1403, 1, 1));
//! assert_eq!(jalali_to_gregorian(1403, 1, 1).to_string(), "2024-03-20");
//! assert_eq!(jalali_weekday(1403, 1, 1), Weekday::Wednesday);
//! ```

mod date;
mod jalali;
mod month;
mod view;
mod weekday;

pub mod fmt;
pub mod partial_date;

pub use date::*;
pub use jalali::*;
pub use month::*;
pub use view::*;
pub use weekday::{Weekday, WEEK, WEEKDAY_NAMES};

pub use gregorian;
