// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::{Datelike, Days, NaiveDate};

use super::{OrderSource, SourceError};
use crate::model::{OrderSet, OrderStatus, RawOrder};

/// In-memory provider. Records are validated on every load, like a feed would be.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticOrders {
    records: Vec<RawOrder>,
}

impl StaticOrders {
    pub fn new(records: impl IntoIterator<Item = RawOrder>) -> Self {
        Self { records: records.into_iter().collect() }
    }

    /// A small rental calendar around the month of `reference`.
    ///
    /// Covers a booking spilling in from the previous month, overlapping bookings,
    /// single-day bookings, a booking crossing into the next month and one malformed record.
    pub fn demo(reference: NaiveDate) -> Self {
        let month_start = reference.with_day(1).unwrap_or(reference);
        let at = |offset: i64| -> Option<NaiveDate> {
            if offset >= 0 {
                month_start.checked_add_days(Days::new(offset.unsigned_abs()))
            } else {
                month_start.checked_sub_days(Days::new(offset.unsigned_abs()))
            }
        };

        let plan: [(&str, i64, i64, OrderStatus); 9] = [
            ("camper-07", -4, 2, OrderStatus::Completed),
            ("camper-12", 3, 9, OrderStatus::Approved),
            ("trailer-02", 5, 5, OrderStatus::Pending),
            ("camper-07b", 6, 12, OrderStatus::Pending),
            ("tent-31", 9, 9, OrderStatus::Rejected),
            ("trailer-02b", 12, 19, OrderStatus::Approved),
            ("camper-12b", 16, 17, OrderStatus::Approved),
            ("van-44", 24, 36, OrderStatus::Pending),
            ("van-45", 20, 18, OrderStatus::Approved),
        ];

        Self::new(
            plan.into_iter()
                .map(|(id, start, end, status)| RawOrder::new(id, at(start), at(end), status)),
        )
    }

    pub fn records(&self) -> &[RawOrder] {
        &self.records
    }
}

impl OrderSource for StaticOrders {
    fn load(&self) -> Result<OrderSet, SourceError> {
        Ok(OrderSet::from_raw(self.records.iter().cloned()))
    }
}
