// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::Serialize;
use smallvec::SmallVec;

use super::visibility::visible_span;
use crate::grid::Week;
use crate::model::{DaySpan, Order, OrderId};

/// Week-scoped mapping from order to lane index.
///
/// Orders sharing a lane never overlap on any day of the week they were assigned in.
/// Lane indices are dense: `0..lane_count()` are all in use.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LaneAssignment {
    lanes: BTreeMap<OrderId, usize>,
    lane_count: usize,
}

impl LaneAssignment {
    pub fn lane_of(&self, order_id: &OrderId) -> Option<usize> {
        self.lanes.get(order_id).copied()
    }

    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OrderId, usize)> + '_ {
        self.lanes.iter().map(|(id, lane)| (id, *lane))
    }
}

/// Occupied day spans of one lane (week-clipped). Rarely more than a few per week.
type LaneOccupants = SmallVec<[DaySpan; 4]>;

/// Greedy interval partitioning for one week.
///
/// Candidates are processed by `(start, id)` and each takes the lowest lane whose
/// occupants it does not touch. Overlap is tested on the week-clipped spans with an
/// inclusive comparison, so an order ending on the day another starts still needs its
/// own lane. Processing in start order makes the lane count equal to the largest
/// number of orders sharing a single day of the week.
///
/// Candidates with no day inside the week get no lane.
pub fn assign_week_lanes<'a>(
    week: &Week<'_>,
    candidates: impl IntoIterator<Item = &'a Order>,
) -> LaneAssignment {
    let window = week.span();

    let mut queue = candidates
        .into_iter()
        .filter_map(|order| visible_span(order, window).map(|span| (order, span)))
        .collect::<Vec<_>>();
    queue.sort_by(|(a, _), (b, _)| a.start().cmp(&b.start()).then_with(|| a.id().cmp(b.id())));

    let mut occupants = Vec::<LaneOccupants>::new();
    let mut lanes = BTreeMap::<OrderId, usize>::new();

    for (order, span) in queue {
        let free =
            occupants.iter().position(|taken| taken.iter().all(|other| !other.overlaps(&span)));
        let lane = match free {
            Some(lane) => lane,
            None => {
                occupants.push(LaneOccupants::new());
                occupants.len() - 1
            }
        };
        occupants[lane].push(span);
        lanes.insert(order.id().clone(), lane);
    }

    LaneAssignment { lanes, lane_count: occupants.len() }
}
