// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Gettext-backed provider over compiled `.mo` catalogs.

use std::fs::File;
use std::path::PathBuf;

use once_cell::sync::OnceCell;
use tracing::warn;

use crate::config::L10nConfig;
use crate::provider::TranslationProvider;

/// Provider backed by a compiled gettext catalog.
///
/// Shares the [`TranslationProvider`] contract with
/// [`crate::JsonProvider`], but shape detection does not apply here: the
/// gettext catalog resolves each entry point to a single string and
/// already falls back to the passed identifiers on a miss.
///
/// The `.mo` file is parsed on the first lookup for a non-default
/// language; a missing or unreadable catalog logs a warning and every
/// lookup then returns its fallback identifier.
pub struct GettextProvider {
	language: String,
	domain: String,
	config: L10nConfig,
	catalog: OnceCell<Option<::gettext::Catalog>>,
}

impl GettextProvider {
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

	fn catalog_path(&self) -> PathBuf {
		self.config
			.locales_location()
			.join(&self.language)
			.join("LC_MESSAGES")
			.join(format!("{}.mo", self.domain))
	}

	fn catalog(&self) -> Option<&::gettext::Catalog> {
		self.catalog
			.get_or_init(|| {
				let path = self.catalog_path();
				let parsed = File::open(&path)
					.map_err(|error| error.to_string())
					.and_then(|file| {
						::gettext::Catalog::parse(file).map_err(|error| error.to_string())
					});
				match parsed {
					Ok(catalog) => Some(catalog),
					Err(error) => {
						warn!(
							language = %self.language,
							domain = %self.domain,
							path = %path.display(),
							error = %error,
							"failed to load gettext catalog, falling back to identifiers"
						);
						None
					}
				}
			})
			.as_ref()
	}
}

impl TranslationProvider for GettextProvider {
	fn translate(&self, identifier: &str, context: &str) -> String {
		if self.language == self.config.default_language() {
			return identifier.to_string();
		}
		let Some(catalog) = self.catalog() else {
			return identifier.to_string();
		};
		if context.is_empty() {
			catalog.gettext(identifier).to_string()
		} else {
			catalog.pgettext(context, identifier).to_string()
		}
	}

	fn translate_plural(&self, singular: &str, plural: &str, amount: u64, context: &str) -> String {
		if self.language == self.config.default_language() {
			return if amount == 1 { singular } else { plural }.to_string();
		}
		let Some(catalog) = self.catalog() else {
			return if amount == 1 { singular } else { plural }.to_string();
		};
		if context.is_empty() {
			catalog.ngettext(singular, plural, amount).to_string()
		} else {
			catalog
				.npgettext(context, singular, plural, amount)
				.to_string()
		}
	}
}
