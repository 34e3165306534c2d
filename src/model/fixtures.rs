// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::NaiveDate;

use super::ids::OrderId;
use super::order::{Order, OrderSet};
use super::status::OrderStatus;

pub(crate) fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub(crate) fn order(id: &str, start: NaiveDate, end: NaiveDate) -> Order {
    order_with_status(id, start, end, OrderStatus::Approved)
}

pub(crate) fn order_with_status(
    id: &str,
    start: NaiveDate,
    end: NaiveDate,
    status: OrderStatus,
) -> Order {
    Order::new(OrderId::new(id).expect("order id"), start, end, status).expect("order")
}

/// A handful of bookings around April 2024 (30 days, grid starts Sunday 2024-03-31).
pub(crate) fn april_2024_bookings() -> OrderSet {
    OrderSet::new([
        order("van-long", day(2024, 4, 1), day(2024, 5, 5)),
        order_with_status("van-short", day(2024, 4, 5), day(2024, 4, 10), OrderStatus::Pending),
        order_with_status("trailer", day(2024, 4, 13), day(2024, 4, 14), OrderStatus::Completed),
        order_with_status("tent", day(2024, 4, 10), day(2024, 4, 10), OrderStatus::Rejected),
    ])
}
