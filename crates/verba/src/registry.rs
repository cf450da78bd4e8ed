// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Supported-locale discovery and requested-tag resolution.

use std::fs;
use std::sync::{Arc, OnceLock};

use crate::config::L10nConfig;
use crate::locale::tag_matches;

/// Shared memo for the supported-locale list.
///
/// Discovery walks the filesystem once per cache, not once per registry
/// instance: hand the same cache to every registry to get process-wide
/// memoization, or construct a fresh one to force a re-scan (tests do
/// this between runs). Initialization is guarded, so concurrent first
/// access performs a single scan.
#[derive(Debug, Clone, Default)]
pub struct LocaleListCache {
	inner: Arc<OnceLock<Vec<String>>>,
}

impl LocaleListCache {
	/// Create an empty cache; the first registry use fills it.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a cache already holding `locales`, bypassing discovery.
	///
	/// Useful for hosts that know their locale set up front.
	pub fn preloaded(locales: Vec<String>) -> Self {
		let cache = Self::new();
		let _ = cache.inner.set(locales);
		cache
	}

	fn get_or_init(&self, init: impl FnOnce() -> Vec<String>) -> &[String] {
		self.inner.get_or_init(init)
	}
}

/// Enumerates supported locales and resolves requested language tags.
pub struct LocaleRegistry {
	config: L10nConfig,
	cache: LocaleListCache,
}

impl LocaleRegistry {
	/// Create a registry over `config`, memoizing discovery in `cache`.
	pub fn new(config: L10nConfig, cache: LocaleListCache) -> Self {
		Self { config, cache }
	}

	/// Supported locales: the default language first, then every locale
	/// directory under the locales location in discovery order, each
	/// exactly once.
	///
	/// The filesystem is consulted at most once per cache; later calls
	/// return the memoized list.
	pub fn supported_locales(&self) -> &[String] {
		self.cache.get_or_init(|| self.discover())
	}

	fn discover(&self) -> Vec<String> {
		let default = self.config.default_language();
		let mut locales = vec![default.to_string()];

		let Ok(entries) = fs::read_dir(self.config.locales_location()) else {
			return locales;
		};

		for entry in entries.flatten() {
			if !entry.file_type().map(|kind| kind.is_dir()).unwrap_or(false) {
				continue;
			}
			let Ok(name) = entry.file_name().into_string() else {
				continue;
			};
			if name.starts_with('.') || name == default {
				continue;
			}
			locales.push(name);
		}

		locales
	}

	/// Resolve a requested language tag to a supported locale.
	///
	/// Returns the first supported locale the tag loosely matches, in
	/// list order, or the default language when none match. First match
	/// wins; there is no best-match scoring.
	pub fn resolve_locale(&self, requested: &str) -> String {
		self.supported_locales()
			.iter()
			.find(|supported| tag_matches(supported, requested))
			.cloned()
			.unwrap_or_else(|| self.config.default_language().to_string())
	}

	/// Whether `tag` appears in the supported-locale list.
	pub fn is_supported(&self, tag: &str) -> bool {
		self.supported_locales().iter().any(|locale| locale == tag)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	fn locales_root(locales: &[&str]) -> tempfile::TempDir {
		let dir = tempfile::tempdir().unwrap();
		for locale in locales {
			fs::create_dir(dir.path().join(locale)).unwrap();
		}
		dir
	}

	#[test]
	fn test_default_language_listed_first() {
		let root = locales_root(&["de_DE"]);
		let registry = LocaleRegistry::new(L10nConfig::new(root.path()), LocaleListCache::new());
		let locales = registry.supported_locales();
		assert_eq!(locales[0], "en_US");
		assert!(locales.contains(&"de_DE".to_string()));
	}

	#[test]
	fn test_default_language_not_duplicated() {
		let root = locales_root(&["en_US", "de_DE"]);
		let registry = LocaleRegistry::new(L10nConfig::new(root.path()), LocaleListCache::new());
		let count = registry
			.supported_locales()
			.iter()
			.filter(|locale| *locale == "en_US")
			.count();
		assert_eq!(count, 1);
	}

	#[test]
	fn test_files_and_dot_entries_are_skipped() {
		let root = locales_root(&["de_DE", ".git"]);
		fs::write(root.path().join("notes.txt"), "not a locale").unwrap();
		let registry = LocaleRegistry::new(L10nConfig::new(root.path()), LocaleListCache::new());
		let locales = registry.supported_locales();
		assert_eq!(locales.len(), 2);
		assert!(!locales.contains(&".git".to_string()));
		assert!(!locales.contains(&"notes.txt".to_string()));
	}

	#[test]
	fn test_unreadable_location_yields_default_only() {
		let config = L10nConfig::new("/nonexistent/l10n");
		let registry = LocaleRegistry::new(config, LocaleListCache::new());
		assert_eq!(registry.supported_locales(), ["en_US".to_string()]);
	}

	#[test]
	fn test_discovery_is_memoized() {
		let root = locales_root(&["de_DE"]);
		let registry = LocaleRegistry::new(L10nConfig::new(root.path()), LocaleListCache::new());
		let before = registry.supported_locales().len();

		fs::create_dir(root.path().join("fr_FR")).unwrap();
		assert_eq!(registry.supported_locales().len(), before);
	}

	#[test]
	fn test_cache_is_shared_across_registries() {
		let root = locales_root(&["de_DE"]);
		let cache = LocaleListCache::new();
		let first =
			LocaleRegistry::new(L10nConfig::new(root.path()), cache.clone());
		let scanned = first.supported_locales().to_vec();

		fs::create_dir(root.path().join("fr_FR")).unwrap();
		let second = LocaleRegistry::new(L10nConfig::new(root.path()), cache);
		assert_eq!(second.supported_locales(), scanned.as_slice());
	}

	#[test]
	fn test_resolve_returns_first_match_in_list_order() {
		let cache = LocaleListCache::preloaded(vec![
			"en_US".to_string(),
			"de_DE".to_string(),
			"de_AT".to_string(),
		]);
		let registry = LocaleRegistry::new(L10nConfig::new("/unused"), cache);
		assert_eq!(registry.resolve_locale("de"), "de_DE");
	}

	#[test]
	fn test_resolve_falls_back_to_default() {
		let root = locales_root(&["de_DE"]);
		let registry = LocaleRegistry::new(L10nConfig::new(root.path()), LocaleListCache::new());
		assert_eq!(registry.resolve_locale("fr"), "en_US");
		assert_eq!(registry.resolve_locale("not a tag"), "en_US");
	}

	#[test]
	fn test_resolve_exact_region() {
		let cache = LocaleListCache::preloaded(vec![
			"en_US".to_string(),
			"de_DE".to_string(),
			"de_AT".to_string(),
		]);
		let registry = LocaleRegistry::new(L10nConfig::new("/unused"), cache);
		assert_eq!(registry.resolve_locale("de_AT"), "de_AT");
	}

	#[test]
	fn test_is_supported() {
		let cache = LocaleListCache::preloaded(vec!["en_US".to_string(), "de_DE".to_string()]);
		let registry = LocaleRegistry::new(L10nConfig::new("/unused"), cache);
		assert!(registry.is_supported("de_DE"));
		assert!(!registry.is_supported("de"));
	}
}
