// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Month grids.
//!
//! A month is always shown as 6 week rows of 7 days (42 cells), starting on the week-start
//! day on or before the 1st. The grid size does not depend on the month's length.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::DaySpan;

pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_GRID: usize = 6;
pub const GRID_CELLS: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

/// Which weekday occupies day-index 0 of every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }

    /// Position of `date` within its week row (0..=6).
    pub fn day_index(self, date: NaiveDate) -> usize {
        let weekday = date.weekday();
        let index = match self {
            Self::Sunday => weekday.num_days_from_sunday(),
            Self::Monday => weekday.num_days_from_monday(),
        };
        index as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid week start `{0}` (expected sunday or monday)")]
pub struct ParseWeekStartError(String);

impl FromStr for WeekStart {
    type Err = ParseWeekStartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(Self::Sunday),
            "monday" | "mon" => Ok(Self::Monday),
            _ => Err(ParseWeekStartError(s.to_owned())),
        }
    }
}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayCell {
    date: NaiveDate,
    in_current_month: bool,
    weekday_index: usize,
}

impl DayCell {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// `false` for the leading/trailing days borrowed from neighbouring months.
    pub fn in_current_month(&self) -> bool {
        self.in_current_month
    }

    pub fn weekday_index(&self) -> usize {
        self.weekday_index
    }

    pub fn is_row_start(&self) -> bool {
        self.weekday_index == 0
    }

    pub fn is_row_end(&self) -> bool {
        self.weekday_index == DAYS_PER_WEEK - 1
    }
}

/// A borrowed week row of a [`MonthGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week<'a> {
    index: usize,
    cells: &'a [DayCell],
}

impl<'a> Week<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn cells(&self) -> &'a [DayCell] {
        self.cells
    }

    pub fn first_day(&self) -> NaiveDate {
        self.cells[0].date
    }

    pub fn last_day(&self) -> NaiveDate {
        self.cells[DAYS_PER_WEEK - 1].date
    }

    pub fn span(&self) -> DaySpan {
        let (first, last) = (self.first_day(), self.last_day());
        // Cells are consecutive days, so first <= last.
        DaySpan::new(first, last).unwrap_or(DaySpan::single(first))
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + 'a {
        self.cells.iter().map(|cell| cell.date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("the month grid around {reference} falls outside the supported calendar range")]
    OutOfRange { reference: NaiveDate },
}

/// The 42 day cells shown for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    month_start: NaiveDate,
    week_start: WeekStart,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Builds the grid for the month containing `reference`.
    ///
    /// Only fails for months whose grid would step outside chrono's date range.
    pub fn build(reference: NaiveDate, week_start: WeekStart) -> Result<Self, GridError> {
        let out_of_range = || GridError::OutOfRange { reference };

        let month_start = reference.with_day(1).ok_or_else(out_of_range)?;
        let lead = week_start.day_index(month_start) as u64;
        let grid_start =
            month_start.checked_sub_days(Days::new(lead)).ok_or_else(out_of_range)?;

        let mut cells = Vec::with_capacity(GRID_CELLS);
        let mut date = grid_start;
        for idx in 0..GRID_CELLS {
            if idx > 0 {
                date = date.succ_opt().ok_or_else(out_of_range)?;
            }
            cells.push(DayCell {
                date,
                in_current_month: date.year() == month_start.year()
                    && date.month() == month_start.month(),
                weekday_index: idx % DAYS_PER_WEEK,
            });
        }

        Ok(Self { month_start, week_start, cells })
    }

    pub fn month_start(&self) -> NaiveDate {
        self.month_start
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn first_day(&self) -> NaiveDate {
        self.cells[0].date
    }

    pub fn last_day(&self) -> NaiveDate {
        self.cells[GRID_CELLS - 1].date
    }

    pub fn span(&self) -> DaySpan {
        let (first, last) = (self.first_day(), self.last_day());
        // Cells are consecutive days, so first <= last.
        DaySpan::new(first, last).unwrap_or(DaySpan::single(first))
    }

    pub fn weeks(&self) -> impl Iterator<Item = Week<'_>> + '_ {
        self.cells
            .chunks_exact(DAYS_PER_WEEK)
            .enumerate()
            .map(|(index, cells)| Week { index, cells })
    }

    pub fn week(&self, index: usize) -> Option<Week<'_>> {
        let start = index.checked_mul(DAYS_PER_WEEK)?;
        let cells = self.cells.get(start..start.checked_add(DAYS_PER_WEEK)?)?;
        Some(Week { index, cells })
    }

    /// Cell lookup by date; `None` outside the grid.
    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        let offset = (date - self.first_day()).num_days();
        usize::try_from(offset).ok().and_then(|idx| self.cells.get(idx))
    }

    /// `"April 2024"`.
    pub fn title(&self) -> String {
        self.month_start.format("%B %Y").to_string()
    }
}

/// First day of the month `delta` months away from `reference`.
///
/// Backs previous/next navigation. `None` only beyond chrono's calendar range.
pub fn shift_month(reference: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let month_start = reference.with_day(1)?;
    let months = Months::new(delta.unsigned_abs());
    if delta >= 0 {
        month_start.checked_add_months(months)
    } else {
        month_start.checked_sub_months(months)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, Weekday};
    use rstest::rstest;

    use super::{shift_month, MonthGrid, WeekStart, DAYS_PER_WEEK, GRID_CELLS, WEEKS_PER_GRID};
    use crate::model::fixtures::day;

    #[rstest]
    #[case(day(2024, 2, 14))]
    #[case(day(2024, 4, 30))]
    #[case(day(2026, 2, 1))]
    #[case(day(2023, 12, 31))]
    #[case(day(2021, 8, 1))]
    fn grid_is_always_six_by_seven(#[case] reference: NaiveDate) {
        for week_start in [WeekStart::Sunday, WeekStart::Monday] {
            let grid = MonthGrid::build(reference, week_start).expect("grid");
            assert_eq!(grid.cells().len(), GRID_CELLS);
            assert_eq!(grid.weeks().count(), WEEKS_PER_GRID);
            for week in grid.weeks() {
                assert_eq!(week.cells().len(), DAYS_PER_WEEK);
                assert_eq!(week.cells()[0].date().weekday(), week_start.weekday());
                for (idx, cell) in week.cells().iter().enumerate() {
                    assert_eq!(cell.weekday_index(), idx);
                }
            }
            let contiguous =
                grid.cells().windows(2).all(|w| w[0].date().succ_opt() == Some(w[1].date()));
            assert!(contiguous);
        }
    }

    #[test]
    fn grid_pads_with_neighbouring_months() {
        // April 2024 starts on a Monday.
        let grid = MonthGrid::build(day(2024, 4, 17), WeekStart::Sunday).expect("grid");
        assert_eq!(grid.first_day(), day(2024, 3, 31));
        assert_eq!(grid.last_day(), day(2024, 5, 11));
        assert!(!grid.cells()[0].in_current_month());
        assert!(grid.cells()[1].in_current_month());
        assert_eq!(grid.cells().iter().filter(|c| c.in_current_month()).count(), 30);
        assert_eq!(grid.title(), "April 2024");
    }

    #[test]
    fn grid_without_leading_days_starts_on_the_first() {
        // September 2024 starts on a Sunday.
        let grid = MonthGrid::build(day(2024, 9, 9), WeekStart::Sunday).expect("grid");
        assert_eq!(grid.first_day(), day(2024, 9, 1));
        assert_eq!(grid.first_day().weekday(), Weekday::Sun);

        let monday = MonthGrid::build(day(2024, 9, 9), WeekStart::Monday).expect("grid");
        assert_eq!(monday.first_day(), day(2024, 8, 26));
    }

    #[test]
    fn grid_build_is_deterministic() {
        let a = MonthGrid::build(day(2024, 4, 1), WeekStart::Sunday).expect("grid");
        let b = MonthGrid::build(day(2024, 4, 28), WeekStart::Sunday).expect("grid");
        assert_eq!(a, b);
    }

    #[test]
    fn cell_and_week_lookup() {
        let grid = MonthGrid::build(day(2024, 4, 1), WeekStart::Sunday).expect("grid");
        let cell = grid.cell(day(2024, 4, 6)).expect("cell");
        assert!(cell.is_row_end());
        assert!(grid.cell(day(2024, 3, 30)).is_none());
        assert!(grid.cell(day(2024, 5, 12)).is_none());

        let last = grid.week(5).expect("week");
        assert_eq!(last.first_day(), day(2024, 5, 5));
        assert_eq!(last.last_day(), day(2024, 5, 11));
        assert!(grid.week(6).is_none());
    }

    #[rstest]
    #[case(usize::MAX / DAYS_PER_WEEK)]
    #[case(usize::MAX / DAYS_PER_WEEK + 1)]
    #[case(usize::MAX)]
    fn huge_week_index_is_none(#[case] index: usize) {
        let grid = MonthGrid::build(day(2024, 4, 1), WeekStart::Sunday).expect("grid");
        assert!(grid.week(index).is_none());
    }

    #[test]
    fn grid_reports_out_of_range_months() {
        assert!(MonthGrid::build(NaiveDate::MAX, WeekStart::Sunday).is_err());
        assert!(MonthGrid::build(NaiveDate::MAX, WeekStart::Monday).is_err());
    }

    #[rstest]
    #[case(day(2024, 1, 31), 1, day(2024, 2, 1))]
    #[case(day(2024, 1, 31), -1, day(2023, 12, 1))]
    #[case(day(2024, 12, 5), 1, day(2025, 1, 1))]
    #[case(day(2024, 6, 15), 0, day(2024, 6, 1))]
    #[case(day(2024, 6, 15), -18, day(2022, 12, 1))]
    fn shift_month_lands_on_the_first(
        #[case] reference: NaiveDate,
        #[case] delta: i32,
        #[case] expected: NaiveDate,
    ) {
        assert_eq!(shift_month(reference, delta), Some(expected));
    }

    #[test]
    fn week_start_parses() {
        assert_eq!("Monday".parse::<WeekStart>(), Ok(WeekStart::Monday));
        assert_eq!("sun".parse::<WeekStart>(), Ok(WeekStart::Sunday));
        assert!("friday".parse::<WeekStart>().is_err());
    }
}
