// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

pub mod orders {
    use chrono::{Days, NaiveDate};

    use calgrid::model::{Order, OrderId, OrderSet, OrderStatus};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub orders: usize,
        /// Days over which order starts are spread, beginning at the fixture epoch.
        pub spread_days: u64,
        pub max_len_days: u64,
    }

    impl Params {
        pub const fn new(orders: usize, spread_days: u64, max_len_days: u64) -> Self {
            Self { orders, spread_days, max_len_days }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        Medium,
        Large,
        DenseMonth,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::Medium => "medium",
                Self::Large => "large",
                Self::DenseMonth => "dense_month",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::Small => Params::new(20, 90, 10),
                Self::Medium => Params::new(200, 180, 21),
                Self::Large => Params::new(2_000, 365, 45),
                Self::DenseMonth => Params::new(400, 30, 14),
            }
        }
    }

    /// First day of every fixture; benches lay out the months that follow it.
    pub fn epoch() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).expect("valid date")
    }

    // Knuth multiplicative hash; spreads consecutive indices without an RNG.
    fn scatter(idx: usize, salt: u64) -> u64 {
        ((idx as u64).wrapping_add(salt)).wrapping_mul(2_654_435_761) >> 7
    }

    fn status(idx: usize) -> OrderStatus {
        OrderStatus::ALL[idx % OrderStatus::ALL.len()]
    }

    fn span(params: Params, idx: usize) -> (NaiveDate, NaiveDate) {
        let start = epoch() + Days::new(scatter(idx, 17) % params.spread_days.max(1));
        let end = start + Days::new(scatter(idx, 4_099) % params.max_len_days.max(1));
        (start, end)
    }

    pub fn order_set(params: Params) -> OrderSet {
        OrderSet::new((0..params.orders).map(|idx| {
            let (start, end) = span(params, idx);
            let id = OrderId::new(format!("order-{idx:05}")).expect("valid order id");
            Order::new(id, start, end, status(idx)).expect("valid order")
        }))
    }

    /// The same orders as a JSON feed, with every third timestamp carrying a time of day.
    pub fn feed_json(params: Params) -> String {
        let records = (0..params.orders)
            .map(|idx| {
                let (start, end) = span(params, idx);
                let (start, end) = if idx % 3 == 0 {
                    (format!("{start}T08:30:00"), format!("{end}T18:00:00+01:00"))
                } else {
                    (start.to_string(), end.to_string())
                };
                serde_json::json!({
                    "id": format!("order-{idx:05}"),
                    "start": start,
                    "end": end,
                    "status": status(idx).as_str(),
                })
            })
            .collect::<Vec<_>>();
        serde_json::Value::Array(records).to_string()
    }

    pub fn fixture(case: Case) -> OrderSet {
        order_set(case.params())
    }
}
