// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{DaySpan, Order};

/// Where a visible day sits within an order's range.
///
/// `is_range_start`/`is_range_end` refer to the order's true range; the
/// `*_visible_day` flags refer to the range as clipped to the displayed grid and differ
/// when the order extends past the grid on either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayClass {
    pub is_range_start: bool,
    pub is_range_end: bool,
    pub is_interior: bool,
    pub is_first_visible_day: bool,
    pub is_last_visible_day: bool,
}

/// Single-tag view of [`DayClass`] for renderers that draw bar caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarSegment {
    Single,
    Start,
    Middle,
    End,
}

impl DayClass {
    pub fn segment(&self) -> BarSegment {
        match (self.is_range_start, self.is_range_end) {
            (true, true) => BarSegment::Single,
            (true, false) => BarSegment::Start,
            (false, true) => BarSegment::End,
            (false, false) => BarSegment::Middle,
        }
    }
}

/// Classifies `day` for `order`.
///
/// `visible` is the order's range clipped to the grid (see
/// [`super::visibility::visible_span`]). Returns `None` when `day` is not a visible day
/// of the order, so callers never get a classification for an invisible pair.
pub fn classify_day(order: &Order, day: NaiveDate, visible: DaySpan) -> Option<DayClass> {
    if !visible.contains(day) || !order.is_active_on(day) {
        return None;
    }

    let is_range_start = day == order.start();
    let is_range_end = day == order.end();
    Some(DayClass {
        is_range_start,
        is_range_end,
        is_interior: !is_range_start && !is_range_end,
        is_first_visible_day: day == visible.first(),
        is_last_visible_day: day == visible.last(),
    })
}
