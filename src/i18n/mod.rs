// SPDX-License-Identifier: MPL-2.0
//! Localization of the UI chrome using the Fluent localization system.
//!
//! Translations are embedded `.ftl` files. The locale is resolved from the
//! `--lang` flag, then the config file, then the OS locale, and falls back
//! to `en-US`.

pub mod fluent;

pub use fluent::I18n;
