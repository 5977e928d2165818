// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for percentage scaling.
//!
//! Each type validates its invariants at construction time, so the
//! conversions that consume them do not have to.
//!
//! # Types
//!
//! - [`Range`] - Inclusive raw device range (e.g. 1-255, 0-3)
//! - [`Percentage`] - Normalized control value (0-100)
//! - [`OrderedList`] - Non-empty, duplicate-free list of named states

mod ordered_list;
mod percentage;
mod range;

pub use ordered_list::OrderedList;
pub use percentage::Percentage;
pub use range::Range;
