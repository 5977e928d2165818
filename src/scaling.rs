// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Direct rescaling between two arbitrary ranges.
//!
//! [`rescale`] maps a value from a source [`Range`] into a destination
//! [`Range`] while preserving its relative position. Both ranges use the
//! `low - 1` offset convention, so a zero-based range behaves like a
//! 1-based range of the same size and the conversion is its own inverse.
//!
//! The percentage conversions in [`percentage`](crate::percentage) are this
//! same mapping with [`Range::PERCENTAGE`] on one side.
//!
//! # Rounding policies
//!
//! Callers that need a discrete device value pick a [`Rounding`]:
//!
//! | Policy | Used by |
//! |---|---|
//! | [`Rounding::Ceil`] | commands: a requested percentage is never under-served |
//! | [`Rounding::Nearest`] | display values: [`rescale_int`] |
//! | [`Rounding::Floor`] | reported percentages: [`value_to_percentage`](crate::percentage::value_to_percentage) |
//! | [`Rounding::NearestMultiple`] | devices accepting values in fixed steps |
//!
//! # Examples
//!
//! ```
//! use percent_scale::scaling::{rescale, rescale_int};
//! use percent_scale::types::Range;
//!
//! let device = Range::try_from((101, 255)).unwrap();
//! let ui = Range::try_from((1, 100)).unwrap();
//!
//! let shown = rescale(device, ui, 255.0);
//! assert!((shown - 100.0).abs() < 1e-9);
//! assert_eq!(rescale_int(device, ui, 178.0), 50);
//! ```

use crate::types::Range;

/// How a scaled float is turned into a discrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    #[default]
    Ceil,
    /// Round to the nearest integer, halfway cases away from zero.
    Nearest,
    /// Round to the nearest multiple of the given step.
    ///
    /// A step of 0 behaves like [`Rounding::Nearest`].
    NearestMultiple(u32),
}

impl Rounding {
    /// Applies the policy to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use percent_scale::scaling::Rounding;
    ///
    /// assert!((Rounding::Ceil.apply(10.2) - 11.0).abs() < f64::EPSILON);
    /// assert!((Rounding::Nearest.apply(10.2) - 10.0).abs() < f64::EPSILON);
    /// assert!((Rounding::NearestMultiple(10).apply(1246.0) - 1250.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Floor => value.floor(),
            Self::Ceil => value.ceil(),
            Self::Nearest | Self::NearestMultiple(0) => value.round(),
            Self::NearestMultiple(step) => {
                let step = f64::from(step);
                (value / step).round() * step
            }
        }
    }
}

/// Returns the number of states in `range` as a float, `high - low + 1`.
#[must_use]
pub fn states_in_range(range: Range) -> f64 {
    range.states()
}

/// Rescales `value` from `source` into `dest` without rounding.
///
/// Out-of-range input is not rejected; it extrapolates linearly.
#[must_use]
pub fn rescale(source: Range, dest: Range, value: f64) -> f64 {
    (value - source.offset()) * dest.states() / source.states() + dest.offset()
}

/// Rescales `value` from `source` into `dest` and rounds to the nearest
/// integer.
///
/// This is the display-oriented policy. Commands that must never
/// under-serve a request use [`Rounding::Ceil`] through
/// [`rescale_rounded`] instead.
#[must_use]
pub fn rescale_int(source: Range, dest: Range, value: f64) -> i64 {
    rescale_rounded(source, dest, value, Rounding::Nearest)
}

/// Rescales `value` from `source` into `dest` and applies `rounding`.
#[must_use]
pub fn rescale_rounded(source: Range, dest: Range, value: f64, rounding: Rounding) -> i64 {
    to_i64(rounding.apply(rescale(source, dest, value)))
}

/// Converts an already rounded float to an integer, saturating at the
/// `i64` bounds. NaN maps to 0.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn to_i64(value: f64) -> i64 {
    value as i64
}
