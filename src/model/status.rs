// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Workflow state of an order.
///
/// The layout algorithm ignores it; it only drives the optional status filter
/// and the display mapping in [`StatusStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] =
        [Self::Pending, Self::Approved, Self::Rejected, Self::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
        }
    }

    pub fn style(self) -> StatusStyle {
        StatusStyle::of(self)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid order status `{value}` (expected pending, approved, rejected or completed)")]
pub struct ParseOrderStatusError {
    value: String,
}

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseOrderStatusError { value: s.to_owned() }),
        }
    }
}

/// Display tone for a status badge or bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Amber,
    Green,
    Red,
    Slate,
}

impl StatusTone {
    pub fn hex(self) -> &'static str {
        match self {
            Self::Amber => "#f59e0b",
            Self::Green => "#16a34a",
            Self::Red => "#dc2626",
            Self::Slate => "#64748b",
        }
    }

    /// Fill character used by the text renderer.
    pub fn glyph(self) -> char {
        match self {
            Self::Amber => '~',
            Self::Green => '=',
            Self::Red => 'x',
            Self::Slate => '-',
        }
    }
}

/// Display attributes of a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusStyle {
    pub label: &'static str,
    pub tone: StatusTone,
}

impl StatusStyle {
    pub fn of(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => Self { label: "Pending", tone: StatusTone::Amber },
            OrderStatus::Approved => Self { label: "Approved", tone: StatusTone::Green },
            OrderStatus::Rejected => Self { label: "Rejected", tone: StatusTone::Red },
            OrderStatus::Completed => Self { label: "Completed", tone: StatusTone::Slate },
        }
    }
}

/// Set of statuses allowed through to a layout pass.
///
/// An empty filter is never constructed from user input; "no filter" is
/// represented by `Option::None` in [`crate::layout::LayoutOptions`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusFilter {
    allowed: BTreeSet<OrderStatus>,
}

impl StatusFilter {
    pub fn new(allowed: impl IntoIterator<Item = OrderStatus>) -> Self {
        Self { allowed: allowed.into_iter().collect() }
    }

    pub fn allows(&self, status: OrderStatus) -> bool {
        self.allowed.contains(&status)
    }

    pub fn allowed(&self) -> impl Iterator<Item = OrderStatus> + '_ {
        self.allowed.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

impl FromStr for StatusFilter {
    type Err = ParseOrderStatusError;

    /// Parses a comma separated list such as `approved,pending`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let allowed = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(OrderStatus::from_str)
            .collect::<Result<BTreeSet<_>, _>>()?;
        if allowed.is_empty() {
            return Err(ParseOrderStatusError { value: s.to_owned() });
        }
        Ok(Self { allowed })
    }
}
