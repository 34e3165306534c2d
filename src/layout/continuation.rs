// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use super::classify::DayClass;
use crate::grid::DayCell;

/// Row-wrap flags for a bar at the edge of a week row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Continuation {
    pub continues_to_next_row: bool,
    pub continues_from_prev_row: bool,
}

impl Continuation {
    pub fn any(&self) -> bool {
        self.continues_to_next_row || self.continues_from_prev_row
    }
}

/// A bar continues onto the next row when it is still running on the last day of a row,
/// and resumes from the previous row when it was already running before the first day.
///
/// Only the grid position matters, not clipping: an order that outlives the grid still
/// continues from its last row.
pub fn detect_continuation(class: &DayClass, cell: &DayCell) -> Continuation {
    Continuation {
        continues_to_next_row: cell.is_row_end() && !class.is_range_end,
        continues_from_prev_row: cell.is_row_start() && !class.is_range_start,
    }
}
