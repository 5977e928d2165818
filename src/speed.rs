// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Speed adapters for fan-like entities.
//!
//! The conversions in [`percentage`](crate::percentage) assume the device
//! is on. The adapters here add the "0% means off" convention on both
//! directions, so an integration only has to forward the results:
//!
//! - [`RangedSpeed`] for devices with a numeric speed range
//! - [`NamedSpeeds`] for devices with named speed modes
//!
//! # Examples
//!
//! ```
//! use percent_scale::speed::{RangedSpeed, SpeedCommand};
//! use percent_scale::types::Range;
//!
//! let fan = RangedSpeed::new(Range::try_from((1, 3)).unwrap()).unwrap();
//!
//! assert_eq!(fan.command(0.0), SpeedCommand::Off);
//! assert_eq!(fan.command(50.0), SpeedCommand::Set(2));
//! assert_eq!(fan.percentage(Some(2.0)).value(), 66);
//! assert_eq!(fan.percentage(None).value(), 0);
//! ```

use std::fmt;

use crate::error::{Error, Result, ValueError};
use crate::percentage::{percentage_step, percentage_to_value, value_to_percentage};
use crate::scaling::{Rounding, to_i64};
use crate::types::{OrderedList, Percentage, Range};

/// What to send to a device for a requested percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedCommand<T> {
    /// Turn the device off.
    Off,
    /// Run the device at the given speed.
    Set(T),
}

impl<T> SpeedCommand<T> {
    /// Returns the speed, or `None` for [`SpeedCommand::Off`].
    #[must_use]
    pub fn speed(self) -> Option<T> {
        match self {
            Self::Off => None,
            Self::Set(speed) => Some(speed),
        }
    }

    /// Returns whether this command turns the device off.
    #[must_use]
    pub const fn is_off(&self) -> bool {
        matches!(self, Self::Off)
    }
}

/// Speed control for a device with a numeric speed range.
///
/// Commands round with [`Rounding::Ceil`] unless configured otherwise, and
/// are always clamped to the integer speeds inside the device range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangedSpeed {
    range: Range,
    rounding: Rounding,
    min: i64,
    max: i64,
}

impl RangedSpeed {
    /// Creates a speed adapter for `range` that rounds commands up.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NoIntegerState` if no integer lies within
    /// `range`, since there would be no valid speed to command.
    pub fn new(range: Range) -> std::result::Result<Self, ValueError> {
        let min = to_i64(range.low().ceil());
        let max = to_i64(range.high().floor());
        if min > max {
            return Err(ValueError::NoIntegerState {
                low: range.low(),
                high: range.high(),
            });
        }
        Ok(Self {
            range,
            rounding: Rounding::Ceil,
            min,
            max,
        })
    }

    /// Sets the rounding policy used for commands.
    ///
    /// # Examples
    ///
    /// ```
    /// use percent_scale::scaling::Rounding;
    /// use percent_scale::speed::{RangedSpeed, SpeedCommand};
    /// use percent_scale::types::Range;
    ///
    /// // Motor speed in RPM, settable in steps of 10
    /// let motor = RangedSpeed::new(Range::try_from((300, 2200)).unwrap())
    ///     .unwrap()
    ///     .with_rounding(Rounding::NearestMultiple(10));
    /// assert_eq!(motor.command(50.0), SpeedCommand::Set(1250));
    /// ```
    #[must_use]
    pub const fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Returns the device range.
    #[must_use]
    pub const fn range(&self) -> Range {
        self.range
    }

    /// Returns the rounding policy used for commands.
    #[must_use]
    pub const fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Returns the number of discrete speeds.
    #[must_use]
    pub fn speed_count(&self) -> u64 {
        self.range.state_count()
    }

    /// Returns the width of one speed band in percent.
    #[must_use]
    pub fn percentage_step(&self) -> f64 {
        percentage_step(self.speed_count())
    }

    /// Resolves a requested percentage to a device command.
    ///
    /// Percentages at or below 0 (and NaN) turn the device off. Anything
    /// else is scaled, rounded with the configured policy, and clamped into
    /// the integer speeds of the device range.
    #[must_use]
    pub fn command(&self, percentage: f64) -> SpeedCommand<i64> {
        if percentage.is_nan() || percentage <= 0.0 {
            tracing::trace!(percentage, "Speed command resolved to off");
            return SpeedCommand::Off;
        }

        let rounded = to_i64(
            self.rounding
                .apply(percentage_to_value(self.range, percentage.min(100.0))),
        );
        let value = rounded.clamp(self.min, self.max);
        if value != rounded {
            tracing::debug!(
                percentage,
                rounded,
                value,
                range = %self.range,
                "Speed command clamped into device range"
            );
        }

        tracing::trace!(percentage, value, "Speed command resolved");
        SpeedCommand::Set(value)
    }

    /// Converts a reported raw speed to a percentage.
    ///
    /// `None` means the device reports itself off and maps to 0.
    #[must_use]
    pub fn percentage(&self, raw: Option<f64>) -> Percentage {
        let Some(raw) = raw else {
            return Percentage::OFF;
        };
        if !self.range.contains(raw) {
            tracing::debug!(raw, range = %self.range, "Reported speed outside device range");
        }
        value_to_percentage(self.range, raw)
    }
}

/// Speed control for a device with named speed modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSpeeds<T> {
    speeds: OrderedList<T>,
}

impl<T: PartialEq + fmt::Debug> NamedSpeeds<T> {
    /// Creates a speed adapter over `speeds`, lowest first.
    #[must_use]
    pub const fn new(speeds: OrderedList<T>) -> Self {
        Self { speeds }
    }

    /// Creates a speed adapter from a list of speeds, lowest first.
    ///
    /// # Errors
    ///
    /// Returns `ListError::Empty` or `ListError::DuplicateItem` if `speeds`
    /// is not a valid ordered list.
    ///
    /// # Examples
    ///
    /// ```
    /// use percent_scale::speed::{NamedSpeeds, SpeedCommand};
    ///
    /// let fan = NamedSpeeds::from_items(vec!["low", "medium", "high"]).unwrap();
    /// assert_eq!(fan.command(50.0), SpeedCommand::Set(&"medium"));
    /// assert_eq!(fan.percentage(Some(&"high")).unwrap().value(), 100);
    /// ```
    pub fn from_items(speeds: Vec<T>) -> Result<Self> {
        Ok(Self::new(OrderedList::new(speeds)?))
    }

    /// Returns the ordered speeds.
    #[must_use]
    pub const fn speeds(&self) -> &OrderedList<T> {
        &self.speeds
    }

    /// Returns the number of speeds.
    #[must_use]
    pub fn speed_count(&self) -> u64 {
        u64::try_from(self.speeds.len()).unwrap_or(u64::MAX)
    }

    /// Returns the width of one speed band in percent.
    #[must_use]
    pub fn percentage_step(&self) -> f64 {
        percentage_step(self.speed_count())
    }

    /// Resolves a requested percentage to a device command.
    ///
    /// Percentages at or below 0 (and NaN) turn the device off.
    #[must_use]
    pub fn command(&self, percentage: f64) -> SpeedCommand<&T> {
        if percentage.is_nan() || percentage <= 0.0 {
            tracing::trace!(percentage, "Speed command resolved to off");
            return SpeedCommand::Off;
        }
        let speed = self.speeds.percentage_to_item(percentage);
        tracing::trace!(percentage, speed = ?speed, "Speed command resolved");
        SpeedCommand::Set(speed)
    }

    /// Converts a reported speed to a percentage.
    ///
    /// `None` means the device reports itself off and maps to 0.
    ///
    /// # Errors
    ///
    /// Returns `ListError::ItemNotFound` if the reported speed is not one of
    /// the declared speeds.
    pub fn percentage(&self, speed: Option<&T>) -> Result<Percentage> {
        let Some(speed) = speed else {
            return Ok(Percentage::OFF);
        };
        self.speeds.item_to_percentage(speed).map_err(|e| {
            tracing::debug!(speed = ?speed, "Reported speed is not a declared speed");
            Error::from(e)
        })
    }
}
