// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout algorithms for the month view.
//!
//! This module decides which orders show up in a grid, which lane each one takes per week,
//! and how every visible (order, day) pair should be drawn.

pub mod classify;
pub mod continuation;
pub mod lanes;
pub mod month;
pub mod visibility;

pub use classify::{classify_day, BarSegment, DayClass};
pub use continuation::{detect_continuation, Continuation};
pub use lanes::{assign_week_lanes, LaneAssignment};
pub use month::{
    layout_month, layout_months, DayLayout, LayoutError, LayoutOptions, MonthLayout,
    RenderDescriptor, WeekLayout,
};
pub use visibility::{visible_in_span, visible_in_week, visible_on, visible_span};
