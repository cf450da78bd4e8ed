// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Array-backed provider over JSON catalog files.

use once_cell::sync::OnceCell;
use tracing::warn;
use verba_core::Catalog;

use crate::config::L10nConfig;
use crate::loader::load_catalog;
use crate::provider::TranslationProvider;

/// Provider backed by a JSON catalog file.
///
/// The catalog is loaded on the first lookup for a non-default language
/// and kept for the provider's lifetime. Lookups against the default
/// language bypass the catalog entirely; the file is not even read. A
/// failed load logs a warning and leaves an empty catalog in place, so
/// every lookup degrades to its fallback identifier.
pub struct JsonProvider {
	language: String,
	domain: String,
	config: L10nConfig,
	catalog: OnceCell<Catalog>,
}

impl JsonProvider {
	/// Create a provider translating into `language` for `domain`.
	pub fn new(language: impl Into<String>, domain: impl Into<String>, config: L10nConfig) -> Self {
		Self {
			language: language.into(),
			domain: domain.into(),
			config,
			catalog: OnceCell::new(),
		}
	}

	/// The locale this provider translates into.
	pub fn language(&self) -> &str {
		&self.language
	}

	fn catalog(&self) -> &Catalog {
		self.catalog.get_or_init(|| {
			match load_catalog(self.config.locales_location(), &self.language, &self.domain) {
				Ok(catalog) => catalog,
				Err(error) => {
					warn!(
						language = %self.language,
						domain = %self.domain,
						error = %error,
						"failed to load catalog, falling back to identifiers"
					);
					Catalog::new()
				}
			}
		})
	}
}

impl TranslationProvider for JsonProvider {
	fn translate(&self, identifier: &str, context: &str) -> String {
		if self.language == self.config.default_language() {
			return identifier.to_string();
		}
		self.catalog().lookup(identifier, context).to_string()
	}

	fn translate_plural(&self, singular: &str, plural: &str, amount: u64, context: &str) -> String {
		if self.language == self.config.default_language() {
			return if amount == 1 { singular } else { plural }.to_string();
		}
		self.catalog()
			.lookup_plural(singular, plural, amount, context)
			.to_string()
	}
}
