// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Localization support for Verba.
//!
//! This crate resolves human-readable translated strings for a locale,
//! with singular/plural forms and disambiguating context tags, backed by
//! a pluggable catalog source: JSON catalog files loaded into memory
//! ([`JsonProvider`]) or compiled gettext catalogs ([`GettextProvider`]).
//! Both implement [`TranslationProvider`] and are selected by
//! configuration.
//!
//! Translation lookups are total: a missing or malformed translation
//! resolves to the untranslated identifier, never to an error. The only
//! error the library surfaces is an unreadable locales directory at
//! configuration time.
//!
//! # Layout
//!
//! Locale catalogs live under a configured locales location, one
//! directory per POSIX locale:
//!
//! - `<locales>/<locale>/<domain>.json` for [`JsonProvider`]
//! - `<locales>/<locale>/LC_MESSAGES/<domain>.mo` for [`GettextProvider`]
//!
//! [`LocaleRegistry`] discovers those directories once per
//! [`LocaleListCache`] and resolves requested language tags against
//! them, defaulting to the configured default language.
//!
//! # Example
//!
//! ```
//! use verba::{
//!     JsonProvider, L10nConfig, LocaleListCache, LocaleRegistry, TranslationProvider,
//! };
//!
//! let config = L10nConfig::new("/usr/share/app/l10n");
//!
//! let registry = LocaleRegistry::new(config.clone(), LocaleListCache::new());
//! let locale = registry.resolve_locale("de");
//!
//! let provider = JsonProvider::new(locale, "app", config);
//! let greeting = provider.translate("greeting", "");
//! let files = provider.translate_plural("file", "files", 3, "");
//! ```

mod config;
mod gettext;
mod json;
mod loader;
mod locale;
mod provider;
mod registry;

pub use config::{ConfigError, L10nConfig, DEFAULT_LANGUAGE};
pub use gettext::GettextProvider;
pub use json::JsonProvider;
pub use loader::{load_catalog, CatalogLoadError};
pub use locale::{is_valid_locale, normalize_tag, tag_matches};
pub use provider::TranslationProvider;
pub use registry::{LocaleListCache, LocaleRegistry};

pub use verba_core::{Catalog, Node};
