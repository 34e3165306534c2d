// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Order-data providers.
//!
//! A provider hands the engine an [`OrderSet`](crate::model::OrderSet): validated orders plus
//! the records that were rejected on the way in. The JSON feed is what the CLI reads; the
//! static provider backs tests and the demo calendar.

pub mod order_feed;
pub mod static_orders;

pub use order_feed::{parse_order_feed, FeedOrigin, JsonOrderFeed, SourceError};
pub use static_orders::StaticOrders;

use crate::model::OrderSet;

/// Anything that can produce the orders for a layout pass.
pub trait OrderSource {
    fn load(&self) -> Result<OrderSet, SourceError>;
}
