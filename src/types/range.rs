// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inclusive device value range.
//!
//! A [`Range`] describes the raw values a device accepts, for example a fan
//! speed of `1..=255` or a zero-based level of `0..=3`. Both kinds convert
//! through the same formula by treating the effective start of every range
//! as `low - 1`.

use std::fmt;

use crate::error::ValueError;

/// Inclusive `(low, high)` range of raw device values.
///
/// Construction validates that both bounds are finite, that `low <= high`,
/// and that the state count `high - low + 1` is finite and at least 1, so
/// every conversion taking a `Range` is total.
///
/// # Examples
///
/// ```
/// use percent_scale::types::Range;
///
/// let speeds = Range::new(1.0, 255.0).unwrap();
/// assert_eq!(speeds.state_count(), 255);
///
/// let levels = Range::try_from((0, 3)).unwrap();
/// assert_eq!(levels.state_count(), 4);
/// assert_eq!(levels.offset(), -1.0);
///
/// assert!(Range::new(10.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct Range {
    low: f64,
    high: f64,
}

impl Range {
    /// The canonical `1..=100` percentage range.
    pub const PERCENTAGE: Self = Self {
        low: 1.0,
        high: 100.0,
    };

    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NotFinite` if either bound is NaN or infinite,
    /// `ValueError::InvalidRange` if `low > high`, and
    /// `ValueError::InvalidSpan` if `high - low + 1` is not a finite value of
    /// at least 1 (bounds too large for the state count to be represented).
    pub fn new(low: f64, high: f64) -> Result<Self, ValueError> {
        if !low.is_finite() {
            return Err(ValueError::NotFinite(low));
        }
        if !high.is_finite() {
            return Err(ValueError::NotFinite(high));
        }
        if low > high {
            return Err(ValueError::InvalidRange { low, high });
        }
        let states = high - (low - 1.0);
        if !states.is_finite() || states < 1.0 {
            return Err(ValueError::InvalidSpan { low, high });
        }
        Ok(Self { low, high })
    }

    /// Returns the lowest valid raw value.
    #[must_use]
    pub const fn low(&self) -> f64 {
        self.low
    }

    /// Returns the highest valid raw value.
    #[must_use]
    pub const fn high(&self) -> f64 {
        self.high
    }

    /// Returns the effective start of the range, `low - 1`.
    ///
    /// A range starting at 1 has no offset; a zero-based range is shifted
    /// up by one slot so it converts like a 1-based range of the same size.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.low - 1.0
    }

    /// Returns the number of states in the range as a float, `high - low + 1`.
    ///
    /// Computed as `high - offset` so that `high` maps onto exactly one full
    /// span.
    #[must_use]
    pub fn states(&self) -> f64 {
        self.high - self.offset()
    }

    /// Returns the number of distinct integer states, `high - low + 1`.
    ///
    /// Fractional spans are truncated.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn state_count(&self) -> u64 {
        // Safe: states() is finite and >= 1 for every validated range; spans
        // beyond u64::MAX saturate
        self.states().trunc() as u64
    }

    /// Returns whether `value` lies within the inclusive bounds.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.low, self.high)
    }
}

impl TryFrom<(f64, f64)> for Range {
    type Error = ValueError;

    fn try_from((low, high): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(low, high)
    }
}

impl TryFrom<(i64, i64)> for Range {
    type Error = ValueError;

    #[allow(clippy::cast_precision_loss)]
    fn try_from((low, high): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(low as f64, high as f64)
    }
}

impl From<Range> for (f64, f64) {
    fn from(range: Range) -> Self {
        (range.low, range.high)
    }
}
