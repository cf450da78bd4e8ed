// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Catalog file loading.

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;
use verba_core::Catalog;

/// Errors from loading a catalog file.
///
/// These are consumed by the providers, which degrade to identifier
/// fallbacks; lookup callers never see them.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
	#[error("failed to read catalog file: {0}")]
	Io(#[from] std::io::Error),

	#[error("failed to parse catalog file: {0}")]
	Parse(#[from] serde_json::Error),

	#[error("catalog root is not an object")]
	NotAnObject,
}

/// Load the catalog for `locale` and `domain` from the locales root.
///
/// Catalogs live at `<root>/<locale>/<domain>.json` and must be a JSON
/// object keyed by identifier.
pub fn load_catalog(root: &Path, locale: &str, domain: &str) -> Result<Catalog, CatalogLoadError> {
	let path = root.join(locale).join(format!("{domain}.json"));
	let raw = fs::read_to_string(path)?;
	match serde_json::from_str(&raw)? {
		Value::Object(entries) => Ok(Catalog::from_entries(entries)),
		_ => Err(CatalogLoadError::NotAnObject),
	}
}
