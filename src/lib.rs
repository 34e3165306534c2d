// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Calgrid: month-view layout for date-ranged bookings.
//!
//! Given orders with inclusive day ranges, the engine builds a 6x7 month grid, decides which
//! orders are visible on which day, packs them into per-week lanes and tags every
//! (order, day) pair with what a renderer needs to draw one continuous bar.
//!
//! ```
//! use calgrid::layout::{layout_month, LayoutOptions};
//! use calgrid::model::{OrderSet, OrderStatus, RawOrder};
//! use chrono::NaiveDate;
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 4, d);
//! let orders = OrderSet::from_raw([
//!     RawOrder::new("x", day(7), day(9), OrderStatus::Approved),
//!     RawOrder::new("y", day(8), day(10), OrderStatus::Pending),
//! ]);
//! let reference = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
//! let layout = layout_month(&orders, reference, &LayoutOptions::new()).unwrap();
//! assert_eq!(layout.weeks()[1].lane_count(), 2);
//! ```

pub mod grid;
pub mod layout;
pub mod model;
pub mod render;
pub mod store;
pub mod telemetry;
