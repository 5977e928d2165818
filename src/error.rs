// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `percent_scale` library.
//!
//! Numeric range conversions are total over a validated [`Range`](crate::types::Range),
//! so the only failures are construction-time validation ([`ValueError`]) and
//! ordered-list lookups ([`ListError`]).

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while indexing into an ordered list.
    #[error("list error: {0}")]
    List(#[from] ListError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// The lower bound of a range is above its upper bound.
    #[error("invalid range: low {low} is greater than high {high}")]
    InvalidRange {
        /// Requested lower bound.
        low: f64,
        /// Requested upper bound.
        high: f64,
    },

    /// The state count `high - low + 1` of a range is not finite and at
    /// least 1.
    #[error("invalid range: {low}..={high} does not span a representable number of states")]
    InvalidSpan {
        /// Requested lower bound.
        low: f64,
        /// Requested upper bound.
        high: f64,
    },

    /// A range contains no integer value to command.
    #[error("range {low}..={high} contains no integer state")]
    NoIntegerState {
        /// Lower bound of the range.
        low: f64,
        /// Upper bound of the range.
        high: f64,
    },

    /// A bound or percentage is NaN or infinite.
    #[error("value {0} is not finite")]
    NotFinite(f64),

    /// A percentage is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },
}

/// Errors raised by ordered-list operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The ordered list has no items to index into.
    #[error("ordered list is empty")]
    Empty,

    /// The requested item is not a member of the ordered list.
    #[error("item {0} is not in the ordered list")]
    ItemNotFound(String),

    /// The same item appears more than once in the ordered list.
    #[error("item {0} appears more than once in the ordered list")]
    DuplicateItem(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
