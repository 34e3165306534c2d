// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::day::{DayParseError, DaySpan};
use super::ids::{IdError, OrderId};
use super::status::{OrderStatus, ParseOrderStatusError, StatusFilter};

/// A booking with an inclusive day range.
///
/// `start <= end` holds for every constructed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Order {
    id: OrderId,
    span: DaySpan,
    status: OrderStatus,
}

impl Order {
    pub fn new(
        id: OrderId,
        start: NaiveDate,
        end: NaiveDate,
        status: OrderStatus,
    ) -> Result<Self, OrderError> {
        let span = DaySpan::new(start, end)
            .ok_or_else(|| OrderError::InvertedRange { id: id.as_str().to_owned(), start, end })?;
        Ok(Self { id, span, status })
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn start(&self) -> NaiveDate {
        self.span.first()
    }

    pub fn end(&self) -> NaiveDate {
        self.span.last()
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn span(&self) -> DaySpan {
        self.span
    }

    pub fn is_single_day(&self) -> bool {
        self.start() == self.end()
    }

    /// Inclusive on both ends.
    pub fn is_active_on(&self, day: NaiveDate) -> bool {
        self.span.contains(day)
    }
}

impl Serialize for Order {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Order", 4)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("start", &self.start())?;
        state.serialize_field("end", &self.end())?;
        state.serialize_field("status", &self.status)?;
        state.end()
    }
}

/// An order record as delivered by a data provider, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawOrder {
    pub id: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub status: OrderStatus,
}

impl RawOrder {
    pub fn new(
        id: impl Into<String>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        status: OrderStatus,
    ) -> Self {
        Self { id: id.into(), start, end, status }
    }

    pub fn validate(self) -> Result<Order, OrderError> {
        let id = OrderId::new(&self.id)
            .map_err(|source| OrderError::InvalidId { id: self.id.clone(), source })?;
        let start = self.start.ok_or_else(|| OrderError::MissingStart { id: self.id.clone() })?;
        let end = self.end.ok_or_else(|| OrderError::MissingEnd { id: self.id.clone() })?;
        Order::new(id, start, end, self.status)
    }
}

/// Data-quality problems that keep an order off the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("order `{id}` has an invalid id: {source}")]
    InvalidId {
        id: String,
        #[source]
        source: IdError,
    },
    #[error("order `{id}` has no start date")]
    MissingStart { id: String },
    #[error("order `{id}` has no end date")]
    MissingEnd { id: String },
    #[error("order `{id}` ends ({end}) before it starts ({start})")]
    InvertedRange { id: String, start: NaiveDate, end: NaiveDate },
    #[error("order id `{id}` appears more than once")]
    DuplicateId { id: String },
    #[error("order `{id}` has an unreadable {field} date: {source}")]
    InvalidDate {
        id: String,
        field: &'static str,
        #[source]
        source: DayParseError,
    },
    #[error("order `{id}` has an unreadable status: {source}")]
    InvalidStatus {
        id: String,
        #[source]
        source: ParseOrderStatusError,
    },
}

impl OrderError {
    /// The provider id of the offending record, as written.
    pub fn id(&self) -> &str {
        match self {
            Self::InvalidId { id, .. }
            | Self::MissingStart { id }
            | Self::MissingEnd { id }
            | Self::InvertedRange { id, .. }
            | Self::DuplicateId { id }
            | Self::InvalidDate { id, .. }
            | Self::InvalidStatus { id, .. } => id,
        }
    }
}

/// An order that was excluded from layout, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOrder {
    id: String,
    error: OrderError,
}

impl RejectedOrder {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn error(&self) -> &OrderError {
        &self.error
    }
}

impl Serialize for RejectedOrder {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("RejectedOrder", 2)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("error", &self.error.to_string())?;
        state.end()
    }
}

/// The validated input of a layout pass.
///
/// Malformed records and duplicate ids are kept aside in [`OrderSet::rejected`]; the first
/// occurrence of an id wins. Nothing in here is ever repaired (dates are never swapped).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderSet {
    orders: Vec<Order>,
    rejected: Vec<RejectedOrder>,
}

impl OrderSet {
    pub fn new(orders: impl IntoIterator<Item = Order>) -> Self {
        let mut set = Self::default();
        let mut seen = BTreeSet::<OrderId>::new();
        for order in orders {
            set.push_unique(order, &mut seen);
        }
        set
    }

    pub fn from_raw(records: impl IntoIterator<Item = RawOrder>) -> Self {
        Self::from_records(records.into_iter().map(Ok))
    }

    /// Like [`OrderSet::from_raw`], for providers that already failed to read some records.
    ///
    /// An `Err` entry is rejected on its own; the other records are validated as usual.
    pub fn from_records(records: impl IntoIterator<Item = Result<RawOrder, OrderError>>) -> Self {
        let mut set = Self::default();
        let mut seen = BTreeSet::<OrderId>::new();
        for record in records {
            match record.and_then(RawOrder::validate) {
                Ok(order) => set.push_unique(order, &mut seen),
                Err(error) => set.reject(error.id().to_owned(), error),
            }
        }
        set
    }

    fn push_unique(&mut self, order: Order, seen: &mut BTreeSet<OrderId>) {
        if seen.insert(order.id().clone()) {
            self.orders.push(order);
        } else {
            let id = order.id().as_str().to_owned();
            self.reject(id.clone(), OrderError::DuplicateId { id });
        }
    }

    fn reject(&mut self, id: String, error: OrderError) {
        warn!(order_id = %id, %error, "order rejected");
        self.rejected.push(RejectedOrder { id, error });
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn rejected(&self) -> &[RejectedOrder] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id().as_str() == id)
    }

    /// Orders that pass `filter`, in input order. `None` lets everything through.
    pub fn filtered<'a>(
        &'a self,
        filter: Option<&'a StatusFilter>,
    ) -> impl Iterator<Item = &'a Order> + 'a {
        self.orders.iter().filter(move |order| filter.map_or(true, |f| f.allows(order.status())))
    }
}
