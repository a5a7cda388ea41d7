// SPDX-License-Identifier: MPL-2.0
//! Navigation state for the gallery.
//!
//! [`GalleryController`] owns the catalog and the index of the artwork on
//! display. Both directions wrap: stepping back from the first artwork lands
//! on the last one, and stepping forward from the last lands on the first.

use super::artwork::ArtworkRecord;
use super::catalog::Catalog;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// How [`GalleryController::next`] wraps at the end of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ForwardWrap {
    /// `index = (index + 1) mod N`; every artwork is reachable going forward.
    #[default]
    Cyclic,
    /// `index = (index + 1) mod (N - 1)`, as in the first release of the app.
    ///
    /// The last artwork is skipped going forward and only reachable by
    /// stepping back from the first one.
    Legacy,
}

/// Owns the catalog and the current position into it.
///
/// The index is always a valid position: it starts at zero and every
/// transition keeps it inside `0..len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryController {
    catalog: Catalog,
    index: usize,
    forward_wrap: ForwardWrap,
}

impl GalleryController {
    /// Creates a controller positioned on the first artwork, wrapping cyclically.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_forward_wrap(catalog, ForwardWrap::Cyclic)
    }

    /// Creates a controller positioned on the first artwork.
    pub fn with_forward_wrap(catalog: Catalog, forward_wrap: ForwardWrap) -> Self {
        Self {
            catalog,
            index: 0,
            forward_wrap,
        }
    }

    /// Returns the artwork on display.
    pub fn current(&self) -> &ArtworkRecord {
        &self.catalog[self.index]
    }

    /// Steps back one artwork, wrapping from the first to the last.
    pub fn previous(&mut self) {
        self.index = match self.index {
            0 => self.catalog.len() - 1,
            index => index - 1,
        };
    }

    /// Steps forward one artwork according to the configured [`ForwardWrap`].
    pub fn next(&mut self) {
        let len = self.catalog.len();
        self.index = match self.forward_wrap {
            ForwardWrap::Cyclic => (self.index + 1) % len,
            // A single-artwork catalog has no modulus to wrap on; index 0 is the only position.
            ForwardWrap::Legacy if len == 1 => 0,
            ForwardWrap::Legacy => (self.index + 1) % (len - 1),
        };
    }

    /// Jumps directly to `index`.
    ///
    /// Leaves the position unchanged and returns [`Error::IndexOutOfRange`]
    /// when `index` is not a valid position.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        let len = self.catalog.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        self.index = index;
        Ok(())
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Always `false`: a controller cannot exist without artworks.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn is_at_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_at_last(&self) -> bool {
        self.index + 1 == self.catalog.len()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn forward_wrap(&self) -> ForwardWrap {
        self.forward_wrap
    }
}
