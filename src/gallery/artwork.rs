// SPDX-License-Identifier: MPL-2.0
//! Typed artwork records.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Reference to the image file backing an artwork.
///
/// Relative references are resolved against the catalog's image directory,
/// absolute ones are used as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(PathBuf);

impl ImageRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Resolves this reference against `base_dir`.
    pub fn resolve(&self, base_dir: &Path) -> PathBuf {
        if self.0.is_absolute() {
            self.0.clone()
        } else {
            base_dir.join(&self.0)
        }
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One artwork of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    pub image: ImageRef,
    pub description: String,
    pub artist: String,
    /// Kept as text: the year is displayed, never computed on.
    pub year: String,
}

impl ArtworkRecord {
    pub fn new(
        image: impl Into<ImageRef>,
        description: impl Into<String>,
        artist: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            description: description.into(),
            artist: artist.into(),
            year: year.into(),
        }
    }

    /// Plain-text "artist (year)" caption.
    pub fn caption(&self) -> String {
        format!("{} ({})", self.artist, self.year)
    }
}
