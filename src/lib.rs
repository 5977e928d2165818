// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `percent_scale` - Percentage scaling for smart-home device states.
//!
//! Fans, covers, valves and similar entities expose a 0-100% control to the
//! user while the hardware speaks in discrete states: named speeds like
//! `low`/`medium`/`high`, an integer range like `1..=255`, or a sub-range
//! like `101..=255`. This library converts between the two, in one
//! consistent way.
//!
//! # Supported Conversions
//!
//! - **Ordered lists**: named state to percentage and back
//! - **Numeric ranges**: raw device value to percentage and back
//! - **Rescaling**: directly between two arbitrary ranges
//! - **Speed adapters**: the above plus "0% means off" handling
//!
//! All conversions are pure, stateless functions and may be called from any
//! thread.
//!
//! # Quick Start
//!
//! ## Named speeds
//!
//! ```
//! use percent_scale::percentage::{item_to_percentage, percentage_to_item};
//!
//! let speeds = ["low", "medium", "high"];
//!
//! assert_eq!(item_to_percentage(&speeds, &"medium")?.value(), 66);
//! assert_eq!(*percentage_to_item(&speeds, 84.0)?, "high");
//! # Ok::<(), percent_scale::error::ListError>(())
//! ```
//!
//! ## Numeric device range
//!
//! ```
//! use percent_scale::percentage::{percentage_to_value, value_to_percentage};
//! use percent_scale::types::Range;
//!
//! let range = Range::new(1.0, 255.0)?;
//!
//! // Reporting state
//! assert_eq!(value_to_percentage(range, 127.0).value(), 49);
//!
//! // Issuing a command: 0% is "off" and handled by the caller
//! let raw = percentage_to_value(range, 4.0).ceil();
//! assert!((raw - 11.0).abs() < f64::EPSILON);
//! # Ok::<(), percent_scale::Error>(())
//! ```
//!
//! ## Speed adapter
//!
//! ```
//! use percent_scale::speed::{RangedSpeed, SpeedCommand};
//! use percent_scale::Range;
//!
//! let fan = RangedSpeed::new(Range::try_from((0, 3))?)?;
//!
//! assert_eq!(fan.command(0.0), SpeedCommand::Off);
//! assert_eq!(fan.command(100.0), SpeedCommand::Set(3));
//! assert_eq!(fan.percentage(Some(3.0)).value(), 100);
//! # Ok::<(), percent_scale::Error>(())
//! ```

pub mod error;
pub mod percentage;
pub mod scaling;
pub mod speed;
pub mod types;

pub use error::{Error, ListError, Result, ValueError};
pub use percentage::{
    item_to_percentage, percentage_step, percentage_to_item, percentage_to_value,
    percentage_to_value_rounded, state_count, value_to_percentage,
};
pub use scaling::{Rounding, rescale, rescale_int, rescale_rounded, states_in_range};
pub use speed::{NamedSpeeds, RangedSpeed, SpeedCommand};
pub use types::{OrderedList, Percentage, Range};
