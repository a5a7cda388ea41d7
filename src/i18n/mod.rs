// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Translation files embedded from `assets/i18n/`
//! - Fallback to the default locale when translations are missing

pub mod fluent;
