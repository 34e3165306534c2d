// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Calgrid CLI entrypoint.
//!
//! Loads orders from a JSON feed (or the built-in demo calendar), lays out one or more months
//! and prints them as text or JSON.

use std::error::Error;
use std::io::Write as _;

use chrono::{FixedOffset, NaiveDate};
use tracing::info;

use calgrid::grid::{shift_month, WeekStart};
use calgrid::layout::{layout_months, LayoutOptions};
use calgrid::model::{DayNormalizer, StatusFilter};
use calgrid::render::{render_month_text, RenderOptions};
use calgrid::store::{JsonOrderFeed, OrderSource, StaticOrders};

const MAX_MONTHS: u32 = 24;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <orders.json> [--month YYYY-MM | --date YYYY-MM-DD] [--months N] [--status s1,s2]\n      [--week-start sunday|monday] [--utc-offset +HH:MM] [--cell-width N] [--json]\n  {program} --demo [--month YYYY-MM | --date YYYY-MM-DD] [...]\n\nWithout --month/--date the current month is shown.\n--months lays out N consecutive months (1..={MAX_MONTHS}).\n--status keeps only orders with one of the listed statuses (pending, approved, rejected, completed).\n--utc-offset moves timestamps of the feed into that offset before taking their date.\n--json prints the layouts instead of drawing them.\n\nSet RUST_LOG (e.g. RUST_LOG=info) for diagnostics on stderr."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    orders_path: Option<String>,
    demo: bool,
    reference: Option<NaiveDate>,
    months: u32,
    status_filter: Option<StatusFilter>,
    week_start: WeekStart,
    utc_offset: Option<FixedOffset>,
    cell_width: Option<usize>,
    json: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            orders_path: None,
            demo: false,
            reference: None,
            months: 1,
            status_filter: None,
            week_start: WeekStart::default(),
            utc_offset: None,
            cell_width: None,
            json: false,
        }
    }
}

fn parse_month(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok()
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();
    let mut months_seen = false;
    let mut week_start_seen = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--json" => {
                if options.json {
                    return Err(());
                }
                options.json = true;
            }
            "--month" | "--date" => {
                if options.reference.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let reference = if arg == "--month" {
                    parse_month(&raw)
                } else {
                    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok()
                };
                options.reference = Some(reference.ok_or(())?);
            }
            "--months" => {
                if months_seen {
                    return Err(());
                }
                months_seen = true;
                let raw = args.next().ok_or(())?;
                let months: u32 = raw.parse().map_err(|_| ())?;
                if !(1..=MAX_MONTHS).contains(&months) {
                    return Err(());
                }
                options.months = months;
            }
            "--status" => {
                if options.status_filter.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.status_filter = Some(raw.parse().map_err(|_| ())?);
            }
            "--week-start" => {
                if week_start_seen {
                    return Err(());
                }
                week_start_seen = true;
                let raw = args.next().ok_or(())?;
                options.week_start = raw.parse().map_err(|_| ())?;
            }
            "--utc-offset" => {
                if options.utc_offset.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.utc_offset = Some(raw.parse().map_err(|_| ())?);
            }
            "--cell-width" => {
                if options.cell_width.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.cell_width = Some(raw.parse().map_err(|_| ())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.orders_path.is_some() {
                    return Err(());
                }
                options.orders_path = Some(arg);
            }
        }
    }

    if options.demo == options.orders_path.is_some() {
        return Err(());
    }

    if options.json && options.cell_width.is_some() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "calgrid".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        calgrid::telemetry::init();

        let reference = options.reference.unwrap_or_else(|| chrono::Local::now().date_naive());

        let orders = match &options.orders_path {
            Some(path) => {
                let normalizer = match options.utc_offset {
                    Some(offset) => DayNormalizer::new().with_offset(offset),
                    None => DayNormalizer::new(),
                };
                JsonOrderFeed::from_path(path).with_normalizer(normalizer).load()?
            }
            None => StaticOrders::demo(reference).load()?,
        };

        let mut layout_options = LayoutOptions::new().with_week_start(options.week_start);
        if let Some(filter) = options.status_filter.clone() {
            layout_options = layout_options.with_status_filter(filter);
        }

        let references = (0..options.months)
            .map(|delta| {
                let delta = i32::try_from(delta).unwrap_or(i32::MAX);
                shift_month(reference, delta)
                    .ok_or_else(|| format!("month {delta} after {reference} is out of range"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let layouts = layout_months(&orders, &references, &layout_options)?;
        info!(
            months = layouts.len(),
            orders = orders.len(),
            rejected = orders.rejected().len(),
            "layout done"
        );

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        if options.json {
            serde_json::to_writer_pretty(&mut out, &layouts)?;
            writeln!(out)?;
            return Ok(());
        }

        let mut render_options = RenderOptions::default();
        if let Some(cell_width) = options.cell_width {
            render_options.cell_width = cell_width;
        }
        for (index, layout) in layouts.iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", render_month_text(layout, &render_options)?)?;
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("calgrid: {err}");
        std::process::exit(1);
    }
}
