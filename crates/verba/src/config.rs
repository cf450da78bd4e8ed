// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared localization configuration.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::locale::is_valid_locale;

/// Default language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en_US";

/// Errors from the configuration surface.
///
/// This is the only error the library surfaces; translation lookups
/// never fail.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The locales location is not a readable directory.
	#[error("failed to open locales directory: {}", .0.display())]
	UnreadableLocalesLocation(PathBuf),
}

/// Localization settings shared by the registry and the providers.
///
/// Both setters keep the previous valid value on rejection. An invalid
/// default language only emits a warning; an unreadable locales
/// location additionally returns an error.
#[derive(Debug, Clone)]
pub struct L10nConfig {
	default_language: String,
	locales_location: PathBuf,
}

impl L10nConfig {
	/// Create a configuration rooted at `locales_location` with the
	/// default language `en_US`.
	pub fn new(locales_location: impl Into<PathBuf>) -> Self {
		Self {
			default_language: DEFAULT_LANGUAGE.to_string(),
			locales_location: locales_location.into(),
		}
	}

	/// The language requiring no translation.
	pub fn default_language(&self) -> &str {
		&self.default_language
	}

	/// Root directory holding one subdirectory per locale.
	pub fn locales_location(&self) -> &Path {
		&self.locales_location
	}

	/// Set the default language.
	pub fn set_default_language(&mut self, language: &str) {
		if is_valid_locale(language) {
			self.default_language = language.to_string();
		} else {
			warn!(language, "invalid default language");
		}
	}

	/// Set the locales location.
	///
	/// The path must be a readable directory; otherwise the previous
	/// value is retained and an error is returned.
	pub fn set_locales_location(&mut self, location: impl Into<PathBuf>) -> Result<(), ConfigError> {
		let location = location.into();
		if fs::read_dir(&location).is_err() {
			warn!(location = %location.display(), "failed to open locales directory");
			return Err(ConfigError::UnreadableLocalesLocation(location));
		}
		self.locales_location = location;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_language_is_en_us() {
		let config = L10nConfig::new("/tmp/l10n");
		assert_eq!(config.default_language(), "en_US");
	}

	#[test]
	fn test_set_valid_default_language() {
		let mut config = L10nConfig::new("/tmp/l10n");
		config.set_default_language("de_DE");
		assert_eq!(config.default_language(), "de_DE");
	}

	#[test]
	fn test_set_invalid_default_language_keeps_previous() {
		let mut config = L10nConfig::new("/tmp/l10n");
		config.set_default_language("nl_NL");
		config.set_default_language("Whatever");
		assert_eq!(config.default_language(), "nl_NL");
	}

	#[test]
	fn test_set_valid_locales_location() {
		let dir = tempfile::tempdir().unwrap();
		let mut config = L10nConfig::new("/tmp/l10n");
		config.set_locales_location(dir.path()).unwrap();
		assert_eq!(config.locales_location(), dir.path());
	}

	#[test]
	fn test_set_unreadable_locales_location_keeps_previous() {
		let mut config = L10nConfig::new("/tmp/l10n");
		let result = config.set_locales_location("/nonexistent/l10n");
		assert!(matches!(
			result,
			Err(ConfigError::UnreadableLocalesLocation(_))
		));
		assert_eq!(config.locales_location(), Path::new("/tmp/l10n"));
	}
}
