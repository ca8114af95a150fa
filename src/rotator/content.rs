// SPDX-License-Identifier: MPL-2.0
//! Immutable content a rotator cycles through.

use crate::content::Link;
use crate::error::{Error, Result};

/// A run of headline text, optionally drawn in the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub text: &'static str,
    pub emphasized: bool,
}

impl Segment {
    #[must_use]
    pub const fn plain(text: &'static str) -> Self {
        Self {
            text,
            emphasized: false,
        }
    }

    #[must_use]
    pub const fn accent(text: &'static str) -> Self {
        Self {
            text,
            emphasized: true,
        }
    }
}

/// Display payload of a headline: ordered styled segments.
pub type RichText = Vec<Segment>;

/// One entry of a content list.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem<T> {
    pub id: u32,
    pub display: T,
    pub target: Option<Link>,
}

impl<T> ContentItem<T> {
    /// Creates an item without an outbound link.
    pub fn new(id: u32, display: T) -> Self {
        Self {
            id,
            display,
            target: None,
        }
    }

    /// Attaches the link opened when the item is activated.
    #[must_use]
    pub fn with_target(mut self, target: Link) -> Self {
        self.target = Some(target);
        self
    }
}

/// Fixed, non-empty, ordered sequence of items.
///
/// The length is fixed at construction; there is no way to insert or remove
/// items afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentList<T> {
    items: Box<[ContentItem<T>]>,
}

impl<T> ContentList<T> {
    /// Builds a list, rejecting an empty item vector.
    pub fn new(items: Vec<ContentItem<T>>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::Content("content list must not be empty".into()));
        }
        Ok(Self {
            items: items.into_boxed_slice(),
        })
    }

    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the item at `index`, wrapping out-of-range indices.
    #[must_use]
    pub fn get(&self, index: usize) -> &ContentItem<T> {
        &self.items[index % self.items.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentItem<T>> {
        self.items.iter()
    }
}
