// SPDX-License-Identifier: MPL-2.0
//! The fixed, ordered list of artworks shown by the viewer.
//!
//! A [`Catalog`] is built once at startup, either from the bundled sample list
//! or from a TOML manifest, and is never mutated afterwards. Construction
//! rejects an empty list so that every later lookup has a valid element.
//!
//! # Manifest format
//!
//! ```toml
//! [[artwork]]
//! image = "i1.jpg"
//! description = "Batman Beyond 1"
//! artist = "Batman"
//! year = "2024"
//! ```
//!
//! Relative `image` paths resolve against the directory holding the manifest.

use super::artwork::ArtworkRecord;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape of a catalog manifest.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Manifest {
    #[serde(default)]
    artwork: Vec<ArtworkRecord>,
}

/// Non-empty ordered sequence of artworks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ArtworkRecord>,
    /// Directory relative image references are resolved against.
    image_dir: PathBuf,
}

impl Catalog {
    /// Builds a catalog from an ordered list of records.
    ///
    /// Returns [`Error::EmptyCatalog`] when `records` is empty.
    pub fn new(records: Vec<ArtworkRecord>, image_dir: impl Into<PathBuf>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        Ok(Self {
            records,
            image_dir: image_dir.into(),
        })
    }

    /// Loads a catalog from a TOML manifest.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let manifest: Manifest = toml::from_str(&content)?;
        let image_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::new(manifest.artwork, image_dir)
    }

    /// Writes this catalog as a TOML manifest.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let manifest = Manifest {
            artwork: self.records.clone(),
        };
        let content = toml::to_string_pretty(&manifest)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The bundled sample catalog: fifteen frames from three animated works.
    pub fn sample(image_dir: impl Into<PathBuf>) -> Self {
        const SAMPLE: [(&str, &str, &str, &str); 15] = [
            ("i1.jpg", "Batman Beyond 1", "Batman", "2024"),
            ("i2.jpg", "Batman Beyond 2", "Batman", "2024"),
            ("i3.jpg", "Batman Beyond 3", "Batman", "2024"),
            ("i4.jpg", "Across the Spider-Verse 1", "Spiderman", "2023"),
            ("i5.jpg", "Across the Spider-Verse 2", "Spiderman", "2023"),
            ("i6.jpg", "Across the Spider-Verse 3", "Spiderman", "2023"),
            ("i7.jpg", "Across the Spider-Verse 4", "Spiderman", "2023"),
            ("i8.jpg", "Across the Spider-Verse 5", "Spiderman", "2023"),
            ("i9.jpg", "Across the Spider-Verse 6", "Spiderman", "2023"),
            ("i10.jpg", "Across the Spider-Verse 7", "Spiderman", "2023"),
            ("i11.jpg", "Across the Spider-Verse 8", "Spiderman", "2023"),
            ("i12.jpg", "The Wolf Among Us 1", "Bigby Wolf", "2013"),
            ("i13.jpg", "The Wolf Among Us 2", "Bigby Wolf", "2013"),
            ("i14.jpg", "The Wolf Among Us 3", "Bigby Wolf", "2013"),
            ("i15.jpg", "The Wolf Among Us 4", "Bigby Wolf", "2013"),
        ];

        Self {
            records: SAMPLE
                .iter()
                .map(|&(image, description, artist, year)| {
                    ArtworkRecord::new(image, description, artist, year)
                })
                .collect(),
            image_dir: image_dir.into(),
        }
    }

    /// Number of artworks. Always at least one.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; provided for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    /// Absolute or base-relative path of the image backing `record`.
    pub fn image_path(&self, record: &ArtworkRecord) -> PathBuf {
        record.image.resolve(&self.image_dir)
    }
}

impl std::ops::Index<usize> for Catalog {
    type Output = ArtworkRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}
