// SPDX-License-Identifier: MPL-2.0
//! Artwork catalog and the navigation state that walks through it.
//!
//! The gallery is the logical core of the viewer: a fixed, non-empty list of
//! [`ArtworkRecord`]s and a [`GalleryController`] holding the position of the
//! artwork currently on display. The presentation layer only reads
//! [`GalleryController::current`] and calls [`GalleryController::next`] /
//! [`GalleryController::previous`].

pub mod artwork;
pub mod catalog;
pub mod controller;

pub use artwork::{ArtworkRecord, ImageRef};
pub use catalog::Catalog;
pub use controller::{ForwardWrap, GalleryController};
