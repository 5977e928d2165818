// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversions between percentages and device states.
//!
//! Two kinds of device state are supported:
//!
//! - **Ordered lists** of named states. Each item owns an evenly sized band
//!   of `100 / len` percent, and the last item always maps to 100.
//! - **Numeric ranges** treated as a continuum. The highest raw value maps
//!   to 100 and the lowest to a small positive percentage, since 0% is
//!   reserved for "off", which lies outside the range.
//!
//! All functions are pure. "Off" is handled by the caller before or after
//! calling into this module; see [`speed`](crate::speed) for adapters that
//! do it.
//!
//! # Examples
//!
//! ```
//! use percent_scale::percentage::{percentage_to_value, value_to_percentage};
//! use percent_scale::types::Range;
//!
//! let range = Range::try_from((1, 255)).unwrap();
//! assert_eq!(value_to_percentage(range, 127.0).value(), 49);
//!
//! // Commands round up so a request is never under-served
//! assert!((percentage_to_value(range, 4.0).ceil() - 11.0).abs() < f64::EPSILON);
//! ```

use std::fmt;

use crate::error::ListError;
use crate::scaling::{self, Rounding};
use crate::types::{Percentage, Range};

/// Converts a member of an ordered list to its percentage.
///
/// The item at 1-based position `k` of `N` maps to `k * 100 / N` using
/// integer division.
///
/// # Errors
///
/// Returns `ListError::Empty` if `list` is empty and
/// `ListError::ItemNotFound` if `item` is not in `list`.
///
/// # Examples
///
/// ```
/// use percent_scale::percentage::item_to_percentage;
///
/// let speeds = ["low", "medium", "high"];
/// assert_eq!(item_to_percentage(&speeds, &"low").unwrap().value(), 33);
/// assert_eq!(item_to_percentage(&speeds, &"high").unwrap().value(), 100);
/// assert!(item_to_percentage(&speeds, &"turbo").is_err());
/// ```
pub fn item_to_percentage<T>(list: &[T], item: &T) -> Result<Percentage, ListError>
where
    T: PartialEq + fmt::Debug,
{
    if list.is_empty() {
        return Err(ListError::Empty);
    }
    let index = list
        .iter()
        .position(|i| i == item)
        .ok_or_else(|| ListError::ItemNotFound(format!("{item:?}")))?;
    Ok(position_percentage(index + 1, list.len()))
}

/// Converts a percentage to the ordered-list item whose band contains it.
///
/// Returns the first item whose upper bound is at least `percentage`.
/// Values above 100 resolve to the last item.
///
/// # Errors
///
/// Returns `ListError::Empty` if `list` is empty.
///
/// # Examples
///
/// ```
/// use percent_scale::percentage::percentage_to_item;
///
/// let speeds = ["low", "medium", "high"];
/// assert_eq!(*percentage_to_item(&speeds, 17.0).unwrap(), "low");
/// assert_eq!(*percentage_to_item(&speeds, 40.0).unwrap(), "medium");
/// assert_eq!(*percentage_to_item(&speeds, 101.0).unwrap(), "high");
/// ```
pub fn percentage_to_item<T>(list: &[T], percentage: f64) -> Result<&T, ListError> {
    if list.is_empty() {
        return Err(ListError::Empty);
    }
    Ok(&list[band_index(list.len(), percentage)])
}

/// Converts a raw value inside `range` to a percentage.
///
/// Computes `(value - offset) * 100 / states` truncated to an integer, where
/// `offset = low - 1`. The result is clamped into 0-100; the input is not.
#[must_use]
pub fn value_to_percentage(range: Range, value: f64) -> Percentage {
    if value >= range.high() {
        return Percentage::FULL;
    }
    let scaled = scaling::rescale(range, Range::PERCENTAGE, value);
    Percentage::from_f64_clamped(Rounding::Floor.apply(scaled))
}

/// Converts a percentage to a raw value in `range`, without rounding.
///
/// Computes `states * percentage / 100 + offset`. The caller picks the
/// rounding; commands conventionally take the ceiling. A percentage of 0
/// yields `low - 1`, which is not a valid device value: callers treat 0 as
/// "off" instead.
#[must_use]
pub fn percentage_to_value(range: Range, percentage: f64) -> f64 {
    scaling::rescale(Range::PERCENTAGE, range, percentage)
}

/// Converts a percentage to a raw value in `range` and applies `rounding`.
///
/// # Examples
///
/// ```
/// use percent_scale::percentage::percentage_to_value_rounded;
/// use percent_scale::scaling::Rounding;
/// use percent_scale::types::Range;
///
/// let range = Range::try_from((1, 255)).unwrap();
/// assert_eq!(percentage_to_value_rounded(range, 4.0, Rounding::Ceil), 11);
/// ```
#[must_use]
pub fn percentage_to_value_rounded(range: Range, percentage: f64, rounding: Rounding) -> i64 {
    scaling::rescale_rounded(Range::PERCENTAGE, range, percentage, rounding)
}

/// Returns the number of distinct integer states in `range`.
#[must_use]
pub fn state_count(range: Range) -> u64 {
    range.state_count()
}

/// Returns the width of one speed band, `100 / speed_count`.
///
/// A speed count of 0 is treated as a single speed.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentage_step(speed_count: u64) -> f64 {
    100.0 / speed_count.max(1) as f64
}

/// Percentage for the item at 1-based `position` in a list of `len` items.
pub(crate) fn position_percentage(position: usize, len: usize) -> Percentage {
    Percentage::clamped(u8::try_from(position * 100 / len).unwrap_or(100))
}

/// 0-based index of the first band whose upper bound is `>= percentage`.
///
/// Falls back to the last index when no band qualifies. `len` must be
/// non-zero.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn band_index(len: usize, percentage: f64) -> usize {
    (1..=len)
        .find(|k| (k * 100 / len) as f64 >= percentage)
        .map_or(len.saturating_sub(1), |k| k - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEEDS: [&str; 3] = ["low", "medium", "high"];

    fn range(low: i64, high: i64) -> Range {
        Range::try_from((low, high)).unwrap()
    }

    #[test]
    fn item_to_percentage_three_speeds() {
        assert_eq!(item_to_percentage(&SPEEDS, &"low").unwrap().value(), 33);
        assert_eq!(item_to_percentage(&SPEEDS, &"medium").unwrap().value(), 66);
        assert_eq!(item_to_percentage(&SPEEDS, &"high").unwrap().value(), 100);
    }

    #[test]
    fn item_to_percentage_errors() {
        let empty: [&str; 0] = [];
        assert_eq!(item_to_percentage(&empty, &"x"), Err(ListError::Empty));
        assert_eq!(
            item_to_percentage(&["a", "b"], &"z"),
            Err(ListError::ItemNotFound("\"z\"".to_string()))
        );
    }

    #[test]
    fn item_to_percentage_single_item() {
        assert_eq!(item_to_percentage(&["on"], &"on").unwrap().value(), 100);
    }

    #[test]
    fn percentage_to_item_bands() {
        let item = |p| *percentage_to_item(&SPEEDS, p).unwrap();
        assert_eq!(item(0.0), "low");
        assert_eq!(item(17.0), "low");
        assert_eq!(item(33.0), "low");
        assert_eq!(item(33.5), "medium");
        assert_eq!(item(40.0), "medium");
        assert_eq!(item(50.0), "medium");
        assert_eq!(item(66.0), "medium");
        assert_eq!(item(67.0), "high");
        assert_eq!(item(84.0), "high");
        assert_eq!(item(100.0), "high");
    }

    #[test]
    fn percentage_to_item_overshoot() {
        assert_eq!(*percentage_to_item(&SPEEDS, 100.000_1).unwrap(), "high");
        assert_eq!(*percentage_to_item(&SPEEDS, 250.0).unwrap(), "high");
    }

    #[test]
    fn percentage_to_item_empty() {
        let empty: [u8; 0] = [];
        assert_eq!(percentage_to_item(&empty, 50.0), Err(ListError::Empty));
    }

    #[test]
    fn value_to_percentage_one_based() {
        let r = range(1, 255);
        assert_eq!(value_to_percentage(r, 255.0).value(), 100);
        assert_eq!(value_to_percentage(r, 127.0).value(), 49);
        assert_eq!(value_to_percentage(r, 1.0).value(), 0);

        let r = range(1, 6);
        assert_eq!(value_to_percentage(r, 3.0).value(), 50);
        assert_eq!(value_to_percentage(r, 6.0).value(), 100);
    }

    #[test]
    fn value_to_percentage_zero_based() {
        let r = range(0, 3);
        assert_eq!(value_to_percentage(r, 0.0).value(), 25);
        assert_eq!(value_to_percentage(r, 1.0).value(), 50);
        assert_eq!(value_to_percentage(r, 3.0).value(), 100);
    }

    #[test]
    fn value_to_percentage_clamps_output() {
        let r = range(1, 100);
        assert_eq!(value_to_percentage(r, 500.0).value(), 100);
        assert_eq!(value_to_percentage(r, -20.0).value(), 0);
        assert_eq!(value_to_percentage(r, f64::NAN).value(), 0);
    }

    #[test]
    fn value_to_percentage_single_state() {
        assert_eq!(value_to_percentage(range(7, 7), 7.0).value(), 100);
    }

    #[test]
    fn percentage_to_value_one_based() {
        let r = range(1, 255);
        assert!((percentage_to_value(r, 100.0) - 255.0).abs() < 1e-9);
        assert!((percentage_to_value(r, 50.0) - 127.5).abs() < 1e-9);
        assert!((percentage_to_value(r, 4.0).ceil() - 11.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percentage_to_value_zero_is_below_range() {
        let r = range(1, 255);
        assert!(percentage_to_value(r, 0.0).abs() < f64::EPSILON);

        let r = range(0, 3);
        assert!((percentage_to_value(r, 0.0) + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percentage_to_value_rounded_ceil() {
        let r = range(1, 3);
        assert_eq!(percentage_to_value_rounded(r, 1.0, Rounding::Ceil), 1);
        assert_eq!(percentage_to_value_rounded(r, 34.0, Rounding::Ceil), 2);
        assert_eq!(percentage_to_value_rounded(r, 100.0, Rounding::Ceil), 3);
    }

    #[test]
    fn state_count_is_inclusive() {
        assert_eq!(state_count(range(0, 3)), 4);
        assert_eq!(state_count(range(1, 255)), 255);
        assert_eq!(state_count(range(101, 255)), 155);
    }

    #[test]
    fn percentage_step_widths() {
        assert!((percentage_step(4) - 25.0).abs() < f64::EPSILON);
        assert!((percentage_step(3) - 100.0 / 3.0).abs() < f64::EPSILON);
        assert!((percentage_step(0) - 100.0).abs() < f64::EPSILON);
    }
}
