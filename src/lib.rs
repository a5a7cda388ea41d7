// SPDX-License-Identifier: MPL-2.0
//! `art_space` is a single-screen artwork gallery built with the Iced GUI framework.
//!
//! It shows one artwork at a time with its title, artist and year, and steps
//! through a fixed catalog with Previous/Next buttons that wrap at both ends.
//! The navigation core lives in [`gallery`]; [`app`] and [`ui`] present it.

pub mod app;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;

pub use app::config;
