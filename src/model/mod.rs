// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Orders are immutable, validated inputs; days are plain `NaiveDate`s after normalization.

pub mod day;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod order;
pub mod status;

pub use day::{DayNormalizer, DayParseError, DaySpan};
pub use ids::{Id, IdError, OrderId};
pub use order::{Order, OrderError, OrderSet, RawOrder, RejectedOrder};
pub use status::{OrderStatus, ParseOrderStatusError, StatusFilter, StatusStyle, StatusTone};
