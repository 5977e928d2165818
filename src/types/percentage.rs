// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Percentage type for normalized control values.

use std::fmt;

use crate::error::ValueError;

/// Normalized control value (0-100).
///
/// 0 always means off and 100 always means maximum output.
///
/// # Examples
///
/// ```
/// use percent_scale::types::Percentage;
///
/// let half = Percentage::new(50).unwrap();
/// assert_eq!(half.value(), 50);
/// assert_eq!(half.to_string(), "50%");
///
/// assert!(Percentage::new(101).is_err());
/// assert_eq!(Percentage::from_f64_clamped(100.4).value(), 100);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    /// Off (0%).
    pub const OFF: Self = Self(0);

    /// Full output (100%).
    pub const FULL: Self = Self(100);

    /// Creates a new percentage.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a percentage, clamping values above 100.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Creates a percentage from a float by truncating toward zero and
    /// clamping into 0-100. NaN maps to 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_f64_clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::OFF;
        }
        // Safe: clamped into [0, 100] before the cast
        Self(value.clamp(0.0, 100.0).trunc() as u8)
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns whether this percentage means off.
    #[must_use]
    pub const fn is_off(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Percentage {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(percentage: Percentage) -> Self {
        percentage.0
    }
}

impl From<Percentage> for f64 {
    fn from(percentage: Percentage) -> Self {
        f64::from(percentage.0)
    }
}
