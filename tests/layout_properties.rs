// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;

use calgrid::grid::{shift_month, MonthGrid, WeekStart, DAYS_PER_WEEK, GRID_CELLS};
use calgrid::layout::{layout_month, LayoutOptions, MonthLayout};
use calgrid::model::{Order, OrderId, OrderSet, OrderStatus, StatusFilter};

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
}

fn week_start_strategy() -> impl Strategy<Value = WeekStart> {
    prop_oneof![Just(WeekStart::Sunday), Just(WeekStart::Monday)]
}

fn status_strategy() -> impl Strategy<Value = OrderStatus> {
    prop::sample::select(OrderStatus::ALL.to_vec())
}

/// Up to 24 orders scattered over the first half of 2024, each up to 3 weeks long.
fn orders_strategy() -> impl Strategy<Value = OrderSet> {
    prop::collection::vec((0u64..180, 0u64..21, status_strategy()), 0..24).prop_map(|specs| {
        OrderSet::new(specs.into_iter().enumerate().map(|(index, (offset, len, status))| {
            let start = base() + Days::new(offset);
            let end = start + Days::new(len);
            let id = OrderId::new(format!("o{index:02}")).expect("id");
            Order::new(id, start, end, status).expect("order")
        }))
    })
}

/// No filter, or a non-empty set of allowed statuses.
fn filter_strategy() -> impl Strategy<Value = Option<StatusFilter>> {
    let all = OrderStatus::ALL.to_vec();
    let len = all.len();
    prop::option::of(prop::sample::subsequence(all, 1..=len).prop_map(StatusFilter::new))
}

/// A layout pass together with the orders that survived its status filter.
fn layout_strategy() -> impl Strategy<Value = (OrderSet, MonthLayout)> {
    (orders_strategy(), 0i32..6, week_start_strategy(), filter_strategy()).prop_map(
        |(orders, delta, week_start, filter)| {
            let reference = shift_month(base(), delta).expect("month");
            let mut options = LayoutOptions::new().with_week_start(week_start);
            if let Some(filter) = &filter {
                options = options.with_status_filter(filter.clone());
            }
            let layout = layout_month(&orders, reference, &options).expect("layout");
            let shown = OrderSet::new(orders.filtered(filter.as_ref()).cloned());
            (shown, layout)
        },
    )
}

proptest! {
    #[test]
    fn prop_grid_is_six_weeks_of_consecutive_days(
        offset in 0u64..40_000,
        week_start in week_start_strategy(),
    ) {
        let epoch = NaiveDate::from_ymd_opt(1950, 1, 1).expect("valid date");
        let reference = epoch + Days::new(offset);
        let grid = MonthGrid::build(reference, week_start).expect("grid");

        prop_assert_eq!(grid.cells().len(), GRID_CELLS);
        prop_assert_eq!(grid.weeks().count(), 6);
        prop_assert_eq!(grid.first_day().weekday(), week_start.weekday());
        for (index, pair) in grid.cells().windows(2).enumerate() {
            let next = pair[0].date().succ_opt();
            prop_assert_eq!(next, Some(pair[1].date()), "gap after cell {}", index);
        }
        for (index, cell) in grid.cells().iter().enumerate() {
            prop_assert_eq!(cell.weekday_index(), index % DAYS_PER_WEEK);
            let same_month = cell.date().year() == reference.year()
                && cell.date().month() == reference.month();
            prop_assert_eq!(cell.in_current_month(), same_month);
        }
        let in_month = grid.cells().iter().filter(|cell| cell.in_current_month()).count();
        let next_month = shift_month(reference, 1).expect("next month");
        let month_len = (next_month - grid.month_start()).num_days() as usize;
        prop_assert_eq!(in_month, month_len);
    }

    #[test]
    fn prop_descriptor_exists_iff_order_is_active((orders, layout) in layout_strategy()) {
        for day in layout.days() {
            let on_day = day
                .descriptors()
                .iter()
                .map(|descriptor| descriptor.order_id().as_str())
                .collect::<BTreeSet<_>>();
            prop_assert_eq!(on_day.len(), day.descriptors().len());
            prop_assert_eq!(day.order_count(), day.descriptors().len());
            for order in orders.orders() {
                let active = order.start() <= day.date() && day.date() <= order.end();
                prop_assert_eq!(on_day.contains(order.id().as_str()), active);
            }
        }
    }

    #[test]
    fn prop_lanes_never_collide_and_are_minimal((_orders, layout) in layout_strategy()) {
        for week in layout.weeks() {
            let mut busiest_day = 0;
            for day in week.days() {
                let lanes = day.descriptors().iter().map(|d| d.lane()).collect::<Vec<_>>();
                prop_assert!(lanes.windows(2).all(|pair| pair[0] < pair[1]), "lanes {:?}", lanes);
                for descriptor in day.descriptors() {
                    prop_assert!(descriptor.lane() < week.lane_count());
                    let assigned = week.lanes().lane_of(descriptor.order_id());
                    prop_assert_eq!(assigned, Some(descriptor.lane()));
                }
                busiest_day = busiest_day.max(day.descriptors().len());
            }
            prop_assert_eq!(week.lane_count(), busiest_day);
        }
    }

    #[test]
    fn prop_day_classes_are_exclusive((orders, layout) in layout_strategy()) {
        for descriptor in layout.days().flat_map(|day| day.descriptors()) {
            let order = orders.get(descriptor.order_id().as_str()).expect("order");
            prop_assert_eq!(descriptor.is_range_start(), descriptor.date() == order.start());
            prop_assert_eq!(descriptor.is_range_end(), descriptor.date() == order.end());
            prop_assert_eq!(
                descriptor.is_interior(),
                !descriptor.is_range_start() && !descriptor.is_range_end()
            );
            if descriptor.is_range_start() && descriptor.is_range_end() {
                prop_assert!(order.is_single_day());
            }
        }
    }

    #[test]
    fn prop_visible_bounds_are_unique_per_order((orders, layout) in layout_strategy()) {
        for order in orders.orders() {
            let descriptors = layout.descriptors_for(order.id().as_str()).collect::<Vec<_>>();
            if descriptors.is_empty() {
                continue;
            }
            prop_assert_eq!(descriptors.iter().filter(|d| d.is_first_visible_day()).count(), 1);
            prop_assert_eq!(descriptors.iter().filter(|d| d.is_last_visible_day()).count(), 1);
            prop_assert!(descriptors[0].is_first_visible_day());
            prop_assert!(descriptors[descriptors.len() - 1].is_last_visible_day());
        }
    }

    #[test]
    fn prop_continuations_match_row_edges((_orders, layout) in layout_strategy()) {
        for day in layout.days() {
            let column = day.cell().weekday_index();
            for descriptor in day.descriptors() {
                prop_assert_eq!(
                    descriptor.continues_to_next_row(),
                    column == DAYS_PER_WEEK - 1 && !descriptor.is_range_end()
                );
                prop_assert_eq!(
                    descriptor.continues_from_prev_row(),
                    column == 0 && !descriptor.is_range_start()
                );
            }
        }
    }

    #[test]
    fn prop_filtered_out_orders_never_reach_the_grid(
        orders in orders_strategy(),
        filter in filter_strategy(),
    ) {
        let mut options = LayoutOptions::new();
        if let Some(filter) = &filter {
            options = options.with_status_filter(filter.clone());
        }
        let layout = layout_month(&orders, base(), &options).expect("layout");
        for order in orders.orders() {
            let allowed = filter.as_ref().map_or(true, |f| f.allows(order.status()));
            if !allowed {
                prop_assert_eq!(layout.descriptors_for(order.id().as_str()).count(), 0);
            }
        }
    }

    // Laying out only the surviving orders unfiltered must give the same lanes, so the
    // filter runs before lane assignment.
    #[test]
    fn prop_layout_is_a_pure_function((orders, layout) in layout_strategy()) {
        let reference = layout.grid().month_start();
        let options = LayoutOptions::new().with_week_start(layout.grid().week_start());
        let again = layout_month(&orders, reference, &options).expect("layout");
        prop_assert_eq!(again, layout);
    }
}
