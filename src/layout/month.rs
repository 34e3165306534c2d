// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, debug_span};

use super::classify::{classify_day, BarSegment, DayClass};
use super::continuation::{detect_continuation, Continuation};
use super::lanes::{assign_week_lanes, LaneAssignment};
use super::visibility::{visible_in_week, visible_on, visible_span};
use crate::grid::{DayCell, GridError, MonthGrid, Week, WeekStart};
use crate::model::{DaySpan, Order, OrderId, OrderSet, OrderStatus, RejectedOrder, StatusFilter};

/// Knobs of a layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutOptions {
    week_start: WeekStart,
    status_filter: Option<StatusFilter>,
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Restricts the pass to orders whose status is in `filter`.
    ///
    /// Filtering happens before lane assignment, so it can change lane numbers.
    pub fn with_status_filter(mut self, filter: StatusFilter) -> Self {
        self.status_filter = Some(filter);
        self
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn status_filter(&self) -> Option<&StatusFilter> {
        self.status_filter.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Everything a renderer needs to draw one order on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderDescriptor {
    order_id: OrderId,
    status: OrderStatus,
    date: NaiveDate,
    lane: usize,
    #[serde(flatten)]
    class: DayClass,
    #[serde(flatten)]
    continuation: Continuation,
}

impl RenderDescriptor {
    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn lane(&self) -> usize {
        self.lane
    }

    pub fn class(&self) -> &DayClass {
        &self.class
    }

    pub fn segment(&self) -> BarSegment {
        self.class.segment()
    }

    pub fn continuation(&self) -> &Continuation {
        &self.continuation
    }

    pub fn is_range_start(&self) -> bool {
        self.class.is_range_start
    }

    pub fn is_range_end(&self) -> bool {
        self.class.is_range_end
    }

    pub fn is_interior(&self) -> bool {
        self.class.is_interior
    }

    pub fn is_first_visible_day(&self) -> bool {
        self.class.is_first_visible_day
    }

    pub fn is_last_visible_day(&self) -> bool {
        self.class.is_last_visible_day
    }

    pub fn continues_to_next_row(&self) -> bool {
        self.continuation.continues_to_next_row
    }

    pub fn continues_from_prev_row(&self) -> bool {
        self.continuation.continues_from_prev_row
    }
}

/// One grid cell with the bars crossing it, ordered by lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayLayout {
    #[serde(flatten)]
    cell: DayCell,
    order_count: usize,
    descriptors: Vec<RenderDescriptor>,
}

impl DayLayout {
    pub fn cell(&self) -> &DayCell {
        &self.cell
    }

    pub fn date(&self) -> NaiveDate {
        self.cell.date()
    }

    pub fn descriptors(&self) -> &[RenderDescriptor] {
        &self.descriptors
    }

    /// Distinct orders touching this day, for badges.
    pub fn order_count(&self) -> usize {
        self.order_count
    }

    pub fn descriptor_in_lane(&self, lane: usize) -> Option<&RenderDescriptor> {
        self.descriptors.iter().find(|descriptor| descriptor.lane == lane)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekLayout {
    index: usize,
    lanes: LaneAssignment,
    days: Vec<DayLayout>,
}

impl WeekLayout {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn lanes(&self) -> &LaneAssignment {
        &self.lanes
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.lane_count()
    }

    pub fn days(&self) -> &[DayLayout] {
        &self.days
    }
}

/// Result of one layout pass over a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthLayout {
    grid: MonthGrid,
    weeks: Vec<WeekLayout>,
    visible_orders: usize,
    rejected: Vec<RejectedOrder>,
}

impl MonthLayout {
    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn weeks(&self) -> &[WeekLayout] {
        &self.weeks
    }

    pub fn days(&self) -> impl Iterator<Item = &DayLayout> + '_ {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayLayout> {
        let offset = usize::try_from((date - self.grid.first_day()).num_days()).ok()?;
        let week = self.weeks.get(offset / crate::grid::DAYS_PER_WEEK)?;
        week.days.get(offset % crate::grid::DAYS_PER_WEEK)
    }

    /// Every descriptor of one order, in date order.
    pub fn descriptors_for<'a>(
        &'a self,
        order_id: &'a str,
    ) -> impl Iterator<Item = &'a RenderDescriptor> + 'a {
        self.days()
            .flat_map(|day| day.descriptors.iter())
            .filter(move |descriptor| descriptor.order_id.as_str() == order_id)
    }

    pub fn descriptor_count(&self) -> usize {
        self.days().map(|day| day.descriptors.len()).sum()
    }

    /// Orders with at least one visible day in this grid (after filtering).
    pub fn visible_order_count(&self) -> usize {
        self.visible_orders
    }

    /// Input records that were excluded as malformed.
    pub fn rejected(&self) -> &[RejectedOrder] {
        &self.rejected
    }
}

/// Lays out the month containing `reference`.
///
/// Every call starts from scratch: status filter, grid, per-order visible spans,
/// per-week lanes and descriptors. Nothing is carried between calls.
pub fn layout_month(
    orders: &OrderSet,
    reference: NaiveDate,
    options: &LayoutOptions,
) -> Result<MonthLayout, LayoutError> {
    let grid = MonthGrid::build(reference, options.week_start())?;
    let _span = debug_span!("layout_month", month = %grid.month_start()).entered();

    let window = grid.span();
    let mut participants = Vec::<&Order>::new();
    let mut visible = BTreeMap::<&OrderId, DaySpan>::new();
    for order in orders.filtered(options.status_filter()) {
        if let Some(span) = visible_span(order, window) {
            participants.push(order);
            visible.insert(order.id(), span);
        }
    }

    let weeks = grid
        .weeks()
        .map(|week| layout_week(&week, &participants, &visible))
        .collect::<Vec<_>>();

    debug!(
        orders = orders.len(),
        visible = participants.len(),
        rejected = orders.rejected().len(),
        max_lanes = weeks.iter().map(WeekLayout::lane_count).max().unwrap_or(0),
        "month laid out"
    );

    Ok(MonthLayout {
        visible_orders: participants.len(),
        rejected: orders.rejected().to_vec(),
        grid,
        weeks,
    })
}

/// Lays out several months independently, in parallel. Output order follows `references`.
pub fn layout_months(
    orders: &OrderSet,
    references: &[NaiveDate],
    options: &LayoutOptions,
) -> Result<Vec<MonthLayout>, LayoutError> {
    references.par_iter().map(|reference| layout_month(orders, *reference, options)).collect()
}

fn layout_week(
    week: &Week<'_>,
    participants: &[&Order],
    visible: &BTreeMap<&OrderId, DaySpan>,
) -> WeekLayout {
    let candidates = visible_in_week(participants.iter().copied(), week);
    let lanes = assign_week_lanes(week, candidates.iter().copied());

    let days = week
        .cells()
        .iter()
        .map(|cell| {
            let on_day = visible_on(candidates.iter().copied(), cell.date());
            let mut descriptors = on_day
                .iter()
                .filter_map(|order| {
                    let span = *visible.get(order.id())?;
                    let lane = lanes.lane_of(order.id())?;
                    let class = classify_day(order, cell.date(), span)?;
                    Some(RenderDescriptor {
                        order_id: order.id().clone(),
                        status: order.status(),
                        date: cell.date(),
                        lane,
                        continuation: detect_continuation(&class, cell),
                        class,
                    })
                })
                .collect::<Vec<_>>();
            descriptors.sort_by_key(|descriptor| descriptor.lane);

            DayLayout { cell: *cell, order_count: on_day.len(), descriptors }
        })
        .collect();

    WeekLayout { index: week.index(), lanes, days }
}
