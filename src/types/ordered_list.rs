// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validated ordered list of named states.
//!
//! Devices that only expose discrete named modes (`low`, `medium`, `high`)
//! describe them as an [`OrderedList`]. Position carries meaning: the first
//! item is the lowest state and the last is the highest. The "off" state is
//! never part of the list.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ListError;
use crate::percentage::{band_index, position_percentage};
use crate::types::Percentage;

/// Non-empty, duplicate-free list of ordered states.
///
/// The free functions in [`percentage`](crate::percentage) accept plain
/// slices; this type moves the emptiness and uniqueness checks to
/// construction time so that [`percentage_to_item`](Self::percentage_to_item)
/// cannot fail.
///
/// # Examples
///
/// ```
/// use percent_scale::types::OrderedList;
///
/// let speeds = OrderedList::new(vec!["low", "medium", "high"]).unwrap();
/// assert_eq!(speeds.item_to_percentage(&"medium").unwrap().value(), 66);
/// assert_eq!(*speeds.percentage_to_item(40.0), "medium");
///
/// assert!(OrderedList::<&str>::new(vec![]).is_err());
/// assert!(OrderedList::new(vec!["low", "low"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderedList<T> {
    items: Vec<T>,
}

impl<T: PartialEq + fmt::Debug> OrderedList<T> {
    /// Creates a new ordered list.
    ///
    /// # Errors
    ///
    /// Returns `ListError::Empty` if `items` is empty and
    /// `ListError::DuplicateItem` if any item appears twice.
    pub fn new(items: Vec<T>) -> Result<Self, ListError> {
        if items.is_empty() {
            return Err(ListError::Empty);
        }
        for (i, item) in items.iter().enumerate() {
            if items[..i].contains(item) {
                return Err(ListError::DuplicateItem(format!("{item:?}")));
            }
        }
        Ok(Self { items })
    }

    /// Returns the 1-based position of `item`, if present.
    #[must_use]
    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|i| i == item).map(|i| i + 1)
    }

    /// Converts a member of the list to its percentage.
    ///
    /// # Errors
    ///
    /// Returns `ListError::ItemNotFound` if `item` is not in the list.
    pub fn item_to_percentage(&self, item: &T) -> Result<Percentage, ListError> {
        let position = self
            .position(item)
            .ok_or_else(|| ListError::ItemNotFound(format!("{item:?}")))?;
        Ok(position_percentage(position, self.items.len()))
    }

    /// Converts a percentage to the item whose band contains it.
    ///
    /// Values above 100 resolve to the last item.
    #[must_use]
    pub fn percentage_to_item(&self, percentage: f64) -> &T {
        &self.items[band_index(self.items.len(), percentage)]
    }
}

impl<T> OrderedList<T> {
    /// Returns the items in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: an ordered list holds at least one item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the lowest item.
    #[must_use]
    pub fn first(&self) -> &T {
        &self.items[0]
    }

    /// Returns the highest item.
    #[must_use]
    pub fn last(&self) -> &T {
        &self.items[self.items.len() - 1]
    }

    /// Consumes the list and returns its items.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: PartialEq + fmt::Debug> TryFrom<Vec<T>> for OrderedList<T> {
    type Error = ListError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl<T> AsRef<[T]> for OrderedList<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T: Serialize> Serialize for OrderedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for OrderedList<T>
where
    T: Deserialize<'de> + PartialEq + fmt::Debug,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::new(items).map_err(serde::de::Error::custom)
    }
}
