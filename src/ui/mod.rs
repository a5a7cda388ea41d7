// SPDX-License-Identifier: MPL-2.0
//! User interface components.

pub mod gallery;
pub mod theming;
