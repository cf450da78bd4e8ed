// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Locale tag helpers: normalization, validity, loose matching.

use std::str::FromStr;

use unic_langid::LanguageIdentifier;

/// Normalize a raw locale tag into a parsed language identifier.
///
/// Strips encoding suffixes (for example `.UTF-8`), removes variant
/// sections (for example `@latin`), and replaces underscores with
/// hyphens, so POSIX-style tags such as `de_DE.UTF-8` parse cleanly.
/// Returns `None` for tags that do not parse.
pub fn normalize_tag(raw: &str) -> Option<LanguageIdentifier> {
	let stripped = raw.trim().split(['.', '@']).next().unwrap_or_default().trim();
	if stripped.is_empty() {
		return None;
	}
	LanguageIdentifier::from_str(&stripped.replace('_', "-")).ok()
}

/// Loose one-shot match between a supported locale and a requested tag.
///
/// The requested side is treated as a range, so a bare language such as
/// `de` matches `de_DE` (and `de_AT`), while `fr` does not. Unparseable
/// tags never match.
pub fn tag_matches(supported: &str, requested: &str) -> bool {
	match (normalize_tag(supported), normalize_tag(requested)) {
		(Some(supported), Some(requested)) => supported.matches(&requested, false, true),
		_ => false,
	}
}

/// Whether a string is a usable locale definition in POSIX form.
///
/// Accepts a 2-3 letter lowercase language, an optional `_` plus
/// two-uppercase-letter region, and an optional encoding suffix:
/// `en`, `en_US`, and `de_DE.UTF-8` pass; `Whatever` does not.
pub fn is_valid_locale(language: &str) -> bool {
	let stripped = language.split('.').next().unwrap_or_default();
	let (lang, region) = match stripped.split_once('_') {
		Some((lang, region)) => (lang, Some(region)),
		None => (stripped, None),
	};

	if !(2..=3).contains(&lang.len()) || !lang.chars().all(|c| c.is_ascii_lowercase()) {
		return false;
	}

	if let Some(region) = region {
		if region.len() != 2 || !region.chars().all(|c| c.is_ascii_uppercase()) {
			return false;
		}
	}

	normalize_tag(language).is_some()
}
