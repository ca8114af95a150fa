// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the hero components.

pub mod button;
pub mod container;
pub mod text;
