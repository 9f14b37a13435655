// SPDX-License-Identifier: MPL-2.0
//! Internationalization support backed by Fluent.
//!
//! Locale resolution order: `--lang` flag, then the config file, then the
//! OS locale, then `en-US`.

pub mod fluent;

pub use fluent::I18n;
