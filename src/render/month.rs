// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::Datelike;
use thiserror::Error;

use super::text::{canvas_to_string_trimmed, text_len, truncate_with_ellipsis};
use super::{Canvas, CanvasError};
use crate::grid::DAYS_PER_WEEK;
use crate::layout::{DayLayout, MonthLayout, RenderDescriptor, WeekLayout};
use crate::model::OrderStatus;

pub const MIN_CELL_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Characters per day column, separators excluded.
    pub cell_width: usize,
    pub show_badges: bool,
    pub show_legend: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { cell_width: 10, show_badges: true, show_legend: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("cell width {width} is too narrow (minimum {min})", min = MIN_CELL_WIDTH)]
    CellTooNarrow { width: usize },
    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

#[derive(Debug, Clone, Copy)]
struct Geometry {
    cell_width: usize,
}

impl Geometry {
    fn separator_x(self, column: usize) -> usize {
        column * (self.cell_width + 1)
    }

    fn cell_x(self, column: usize) -> usize {
        self.separator_x(column) + 1
    }

    fn width(self) -> usize {
        self.separator_x(DAYS_PER_WEEK) + 1
    }
}

const HEADER_ROWS: usize = 4;

fn lane_rows(week: &WeekLayout) -> usize {
    week.lane_count().max(1)
}

/// Draws a month layout as a boxed 7-column grid.
///
/// Each week row has a line of day numbers (out-of-month days in parentheses, `#n` badges
/// counting the orders of the day) followed by one line per lane. Bars use the status glyph,
/// `[`/`]` where the booking starts/ends and `<`/`>` where it wraps to the previous/next row.
pub fn render_month_text(
    layout: &MonthLayout,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    if options.cell_width < MIN_CELL_WIDTH {
        return Err(RenderError::CellTooNarrow { width: options.cell_width });
    }
    let geometry = Geometry { cell_width: options.cell_width };

    let body_rows = layout.weeks().iter().map(|week| 2 + lane_rows(week)).sum::<usize>();
    let height = HEADER_ROWS + body_rows;
    let mut canvas = Canvas::new(geometry.width(), height)?;

    canvas.write_str(0, 0, &layout.grid().title())?;
    draw_rules(&mut canvas, geometry, layout)?;
    draw_weekday_names(&mut canvas, geometry, layout)?;

    let mut y = HEADER_ROWS;
    for week in layout.weeks() {
        draw_day_numbers(&mut canvas, geometry, week, y, options.show_badges)?;
        for lane in 0..week.lane_count() {
            draw_lane(&mut canvas, geometry, week, lane, y + 1 + lane)?;
        }
        y += 2 + lane_rows(week);
    }

    let mut out = canvas_to_string_trimmed(&canvas);
    if options.show_legend {
        out.push('\n');
        out.push_str(&legend());
    }
    for rejected in layout.rejected() {
        out.push_str("\nrejected ");
        out.push_str(rejected.id());
        out.push_str(": ");
        out.push_str(&rejected.error().to_string());
    }
    Ok(out)
}

fn draw_rules(
    canvas: &mut Canvas,
    geometry: Geometry,
    layout: &MonthLayout,
) -> Result<(), CanvasError> {
    let right = geometry.width() - 1;
    canvas.hrule(0, right, 1)?;
    canvas.hrule(0, right, 3)?;

    let mut y = HEADER_ROWS;
    for week in layout.weeks() {
        y += 1 + lane_rows(week);
        canvas.hrule(0, right, y)?;
        y += 1;
    }

    let bottom = y - 1;
    for column in 0..=DAYS_PER_WEEK {
        canvas.vrule(geometry.separator_x(column), 1, bottom)?;
    }
    Ok(())
}

fn draw_weekday_names(
    canvas: &mut Canvas,
    geometry: Geometry,
    layout: &MonthLayout,
) -> Result<(), CanvasError> {
    let Some(first_week) = layout.grid().week(0) else {
        return Ok(());
    };
    for (column, cell) in first_week.cells().iter().enumerate() {
        let name = cell.date().format("%a").to_string();
        let name = truncate_with_ellipsis(&name, geometry.cell_width);
        canvas.write_str(geometry.cell_x(column), 2, &name)?;
    }
    Ok(())
}

fn draw_day_numbers(
    canvas: &mut Canvas,
    geometry: Geometry,
    week: &WeekLayout,
    y: usize,
    show_badges: bool,
) -> Result<(), CanvasError> {
    let mut digits = itoa::Buffer::new();
    for (column, day) in week.days().iter().enumerate() {
        let x = geometry.cell_x(column);
        let number = digits.format(day.date().day());
        let label = if day.cell().in_current_month() {
            number.to_owned()
        } else {
            format!("({number})")
        };
        canvas.write_str(x, y, &label)?;

        if show_badges && day.order_count() > 0 {
            let badge = badge(day, &mut digits);
            if text_len(&label) + 1 + text_len(&badge) <= geometry.cell_width {
                canvas.write_str(x + geometry.cell_width - text_len(&badge), y, &badge)?;
            }
        }
    }
    Ok(())
}

fn badge(day: &DayLayout, digits: &mut itoa::Buffer) -> String {
    let mut badge = String::from("#");
    badge.push_str(digits.format(day.order_count()));
    badge
}

fn draw_lane(
    canvas: &mut Canvas,
    geometry: Geometry,
    week: &WeekLayout,
    lane: usize,
    y: usize,
) -> Result<(), CanvasError> {
    let days = week.days();
    for (column, day) in days.iter().enumerate() {
        if let Some(descriptor) = day.descriptor_in_lane(lane) {
            draw_bar_cell(canvas, geometry, column, y, descriptor)?;
        }
    }

    // Labels go on top of the bars, once per row segment.
    for (column, day) in days.iter().enumerate() {
        let Some(descriptor) = day.descriptor_in_lane(lane) else {
            continue;
        };
        if !(descriptor.is_range_start() || column == 0) {
            continue;
        }
        let run = days[column..]
            .iter()
            .take_while(|other| {
                other
                    .descriptor_in_lane(lane)
                    .is_some_and(|next| next.order_id() == descriptor.order_id())
            })
            .count();
        let room = run * (geometry.cell_width + 1) - 3;
        let label = truncate_with_ellipsis(descriptor.order_id().as_str(), room);
        canvas.write_str(geometry.cell_x(column) + 1, y, &label)?;
    }
    Ok(())
}

fn bar_glyph(status: OrderStatus) -> char {
    status.style().tone.glyph()
}

fn draw_bar_cell(
    canvas: &mut Canvas,
    geometry: Geometry,
    column: usize,
    y: usize,
    descriptor: &RenderDescriptor,
) -> Result<(), CanvasError> {
    let glyph = bar_glyph(descriptor.status());
    let x0 = geometry.cell_x(column);
    let x1 = x0 + geometry.cell_width - 1;
    for x in x0..=x1 {
        canvas.set(x, y, glyph)?;
    }

    let left = if descriptor.is_range_start() {
        '['
    } else if descriptor.continues_from_prev_row() {
        '<'
    } else {
        glyph
    };
    let right = if descriptor.is_range_end() {
        ']'
    } else if descriptor.continues_to_next_row() {
        '>'
    } else {
        glyph
    };
    canvas.set(x0, y, left)?;
    canvas.set(x1, y, right)?;

    if !descriptor.is_range_end() && column + 1 < DAYS_PER_WEEK {
        canvas.set(geometry.separator_x(column + 1), y, glyph)?;
    }
    Ok(())
}

fn legend() -> String {
    let mut parts = vec!["[ ] start/end".to_owned(), "< > continues".to_owned()];
    for status in OrderStatus::ALL {
        let style = status.style();
        parts.push(format!("{} {}", style.tone.glyph(), style.label));
    }
    parts.join("   ")
}
