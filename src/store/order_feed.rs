// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use super::OrderSource;
use crate::model::{DayNormalizer, OrderError, OrderSet, OrderStatus, RawOrder};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("json error in {origin}: {source}")]
    Json {
        origin: FeedOrigin,
        #[source]
        source: serde_json::Error,
    },
}

/// Where a feed's text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedOrigin {
    File(PathBuf),
    Inline(String),
}

impl fmt::Display for FeedOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Inline(_) => f.write_str("<inline feed>"),
        }
    }
}

/// One record of the feed as it appears on the wire.
///
/// Dates stay strings here: they may carry a time of day or an offset, and are only
/// collapsed to days by [`order_from_json`].
#[derive(Debug, Clone, Deserialize)]
struct OrderJson {
    id: String,
    #[serde(default, alias = "start_date")]
    start: Option<String>,
    #[serde(default, alias = "end_date")]
    end: Option<String>,
    status: String,
}

fn parse_optional_day(
    normalizer: &DayNormalizer,
    id: &str,
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<NaiveDate>, OrderError> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    normalizer
        .parse_day(raw)
        .map(Some)
        .map_err(|source| OrderError::InvalidDate { id: id.to_owned(), field, source })
}

fn order_from_json(
    normalizer: &DayNormalizer,
    order_json: OrderJson,
) -> Result<RawOrder, OrderError> {
    let id = order_json.id;
    let start = parse_optional_day(normalizer, &id, "start", order_json.start.as_deref())?;
    let end = parse_optional_day(normalizer, &id, "end", order_json.end.as_deref())?;
    let status = order_json
        .status
        .parse::<OrderStatus>()
        .map_err(|source| OrderError::InvalidStatus { id: id.clone(), source })?;

    Ok(RawOrder::new(id, start, end, status))
}

/// Parses a JSON array of order records.
///
/// Only malformed JSON fails the feed. A record whose date or status cannot be read
/// comes back as its own `Err`; a missing or empty date is kept as `None` so validation
/// can report it.
pub fn parse_order_feed(
    text: &str,
    origin: &FeedOrigin,
    normalizer: &DayNormalizer,
) -> Result<Vec<Result<RawOrder, OrderError>>, SourceError> {
    let records: Vec<OrderJson> = serde_json::from_str(text)
        .map_err(|source| SourceError::Json { origin: origin.clone(), source })?;

    Ok(records.into_iter().map(|order_json| order_from_json(normalizer, order_json)).collect())
}

/// Order feed stored as JSON, either on disk or already in memory.
#[derive(Debug, Clone)]
pub struct JsonOrderFeed {
    origin: FeedOrigin,
    normalizer: DayNormalizer,
}

impl JsonOrderFeed {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            origin: FeedOrigin::File(path.as_ref().to_path_buf()),
            normalizer: DayNormalizer::new(),
        }
    }

    pub fn inline(text: impl Into<String>) -> Self {
        Self { origin: FeedOrigin::Inline(text.into()), normalizer: DayNormalizer::new() }
    }

    pub fn with_normalizer(mut self, normalizer: DayNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn origin(&self) -> &FeedOrigin {
        &self.origin
    }

    pub fn normalizer(&self) -> &DayNormalizer {
        &self.normalizer
    }

    fn read_text(&self) -> Result<String, SourceError> {
        match &self.origin {
            FeedOrigin::File(path) => fs::read_to_string(path)
                .map_err(|source| SourceError::Io { path: path.clone(), source }),
            FeedOrigin::Inline(text) => Ok(text.clone()),
        }
    }
}

impl OrderSource for JsonOrderFeed {
    fn load(&self) -> Result<OrderSet, SourceError> {
        let text = self.read_text()?;
        let records = parse_order_feed(&text, &self.origin, &self.normalizer)?;
        debug!(origin = %self.origin, records = records.len(), "order feed parsed");

        let orders = OrderSet::from_records(records);
        info!(
            origin = %self.origin,
            orders = orders.len(),
            rejected = orders.rejected().len(),
            "order feed loaded"
        );
        Ok(orders)
    }
}
