// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Day-granularity values.
//!
//! Everything downstream of this module compares plain `NaiveDate`s. Timestamps with a
//! time-of-day or an offset are collapsed to a calendar day here, once, so the layout
//! never sees partial days.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use serde::Serialize;
use thiserror::Error;

/// An inclusive, contiguous run of days `first..=last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DaySpan {
    first: NaiveDate,
    last: NaiveDate,
}

impl DaySpan {
    /// Returns `None` when `last` precedes `first`.
    pub fn new(first: NaiveDate, last: NaiveDate) -> Option<Self> {
        (first <= last).then_some(Self { first, last })
    }

    pub fn single(day: NaiveDate) -> Self {
        Self { first: day, last: day }
    }

    pub fn first(&self) -> NaiveDate {
        self.first
    }

    pub fn last(&self) -> NaiveDate {
        self.last
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.first <= day && day <= self.last
    }

    /// Inclusive intersection; spans that share a single boundary day intersect.
    pub fn intersect(&self, other: &DaySpan) -> Option<DaySpan> {
        DaySpan::new(self.first.max(other.first), self.last.min(other.last))
    }

    pub fn overlaps(&self, other: &DaySpan) -> bool {
        self.first <= other.last && other.first <= self.last
    }

    /// Number of days covered, always at least 1.
    pub fn len_days(&self) -> u32 {
        // first <= last by construction, and chrono dates span far less than u32::MAX days.
        (self.last - self.first).num_days() as u32 + 1
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let last = self.last;
        self.first.iter_days().take_while(move |day| *day <= last)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "cannot read `{value}` as a date (expected YYYY-MM-DD, a local date-time or an RFC 3339 timestamp)"
)]
pub struct DayParseError {
    value: String,
}

impl DayParseError {
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Collapses timestamps to calendar days.
///
/// Without an offset, a timestamp keeps the calendar date it was written with (the
/// date in its own offset). With an offset, instants are first moved into that offset,
/// which is how a viewer in that zone would see the booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayNormalizer {
    offset: Option<FixedOffset>,
}

impl DayNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    pub fn day_of_instant<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> NaiveDate {
        match self.offset {
            Some(offset) => instant.with_timezone(&offset).date_naive(),
            None => instant.date_naive(),
        }
    }

    pub fn day_of_local(&self, local: &NaiveDateTime) -> NaiveDate {
        local.date()
    }

    pub fn parse_day(&self, raw: &str) -> Result<NaiveDate, DayParseError> {
        let value = raw.trim();

        if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return Ok(day);
        }
        if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
            return Ok(self.day_of_instant(&instant));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(local) = NaiveDateTime::parse_from_str(value, format) {
                return Ok(self.day_of_local(&local));
            }
        }

        Err(DayParseError { value: raw.to_owned() })
    }
}
