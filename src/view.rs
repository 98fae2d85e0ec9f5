use crate::jalali::JalaliDate;
use crate::month::{navigate, MonthGrid, Navigation, YearMonth};
use crate::weekday::Weekday;

/// The state of a month calendar: today, the displayed month and the selected date.
///
/// All transitions return a new state.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CalendarView {
	today: JalaliDate,
	displayed: YearMonth,
	selected: JalaliDate,
}

impl CalendarView {
	/// Show the month of today with today selected.
	pub fn new(today: JalaliDate) -> Self {
		Self {
			today,
			displayed: YearMonth::of(today),
			selected: today,
		}
	}

	pub fn today(&self) -> JalaliDate {
		self.today
	}

	pub fn displayed(&self) -> YearMonth {
		self.displayed
	}

	pub fn selected(&self) -> JalaliDate {
		self.selected
	}

	/// Show the previous or next month, keeping the selection.
	#[must_use]
	pub fn navigate(self, direction: Navigation) -> Self {
		Self { displayed: navigate(self.displayed, direction), ..self }
	}

	/// Select a date and show its month.
	#[must_use]
	pub fn select(self, date: JalaliDate) -> Self {
		Self { displayed: YearMonth::of(date), selected: date, ..self }
	}

	/// Show a specific month, keeping the selection.
	#[must_use]
	pub fn go_to(self, month: YearMonth) -> Self {
		Self { displayed: month, ..self }
	}

	/// Show and select today.
	#[must_use]
	pub fn go_to_today(self) -> Self {
		Self::new(self.today)
	}

	/// Move today to a new date, for example when the clock passes midnight.
	#[must_use]
	pub fn with_today(self, today: JalaliDate) -> Self {
		Self { today, ..self }
	}

	pub fn selected_weekday(&self) -> Weekday {
		self.selected.weekday()
	}

	pub fn grid(&self) -> MonthGrid {
		MonthGrid::new(self.displayed, Some(self.today), Some(self.selected))
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
	fn test_navigation_keeps_selection() {
		let view = CalendarView::new(jalali(1403, 12, 15));
		let next = view.navigate(Navigation::Next);
		assert!(next.displayed() == YearMonth::new(1404, 1).unwrap());
		assert!(next.selected() == jalali(1403, 12, 15));
		assert!(view.displayed() == YearMonth::new(1403, 12).unwrap());

		let back = next.navigate(Navigation::Previous).navigate(Navigation::Previous);
		assert!(back.displayed() == YearMonth::new(1403, 11).unwrap());
		assert!(back.go_to_today() == view);
	}

	#[test]
	fn test_select() {
		let view = CalendarView::new(jalali(1403, 1, 1)).select(jalali(1402, 12, 29));
		assert!(view.displayed() == YearMonth::new(1402, 12).unwrap());
		assert!(view.selected_weekday() == Weekday::Tuesday);

		let grid = view.grid();
		let selected: Vec<_> = grid.days().filter(|x| x.is_selected).map(|x| x.date).collect();
		assert!(selected == [jalali(1402, 12, 29)]);
		assert!(grid.days().all(|x| !x.is_today));
	}

	#[test]
	fn test_go_to() {
		let view = CalendarView::new(jalali(1403, 5, 5)).go_to(YearMonth::new(1300, 7).unwrap());
		assert!(view.displayed() == YearMonth::new(1300, 7).unwrap());
		assert!(view.selected() == jalali(1403, 5, 5));
		assert!(view.with_today(jalali(1403, 5, 6)).today() == jalali(1403, 5, 6));
	}
}
