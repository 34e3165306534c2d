// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::NaiveDate;

use crate::grid::Week;
use crate::model::{DaySpan, Order};

/// Orders whose inclusive range covers `day`, in input order.
pub fn visible_on<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    day: NaiveDate,
) -> Vec<&'a Order> {
    orders.into_iter().filter(|order| order.is_active_on(day)).collect()
}

/// Orders visible on at least one day of `window`, in input order.
pub fn visible_in_span<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    window: DaySpan,
) -> Vec<&'a Order> {
    orders.into_iter().filter(|order| order.span().overlaps(&window)).collect()
}

/// Union of [`visible_on`] over the seven days of `week`.
pub fn visible_in_week<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    week: &Week<'_>,
) -> Vec<&'a Order> {
    visible_in_span(orders, week.span())
}

/// The part of `order`'s range that falls inside `window`.
///
/// Ranges are contiguous, so the visible days of an order inside any window form a
/// single span (or nothing).
pub fn visible_span(order: &Order, window: DaySpan) -> Option<DaySpan> {
    order.span().intersect(&window)
}
