// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Identifier lookup over a loaded catalog.
//!
//! A catalog entry takes one of four shapes: a flat translation, a map
//! from context to translation, a map from plural identifier to a
//! `[singular, plural]` pair, or a map from plural identifier to a map
//! from context to such a pair. The shape is discriminated per lookup,
//! and anything that does not match the shape the call site needs is a
//! miss, resolved to the untranslated identifier.

use std::collections::HashMap;

use serde_json::Value;

use crate::node::Node;

/// An immutable translation catalog for one locale and domain.
///
/// Construct once, look up many times. An empty catalog is valid: every
/// lookup falls back to its identifier.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	entries: HashMap<String, Node>,
}

impl Catalog {
	/// Create an empty catalog.
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a catalog from identifier/value pairs.
	///
	/// Values that convert to nothing (`null`) are dropped, turning the
	/// identifier into a lookup miss.
	pub fn from_entries(entries: impl IntoIterator<Item = (String, Value)>) -> Self {
		let entries = entries
			.into_iter()
			.filter_map(|(key, value)| Node::from_value(value).map(|node| (key, node)))
			.collect();
		Self { entries }
	}

	/// Number of identifiers in the catalog.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the catalog holds no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Resolve a translation for `identifier`.
	///
	/// An empty `context` means no context is requested. With no context,
	/// a flat translation is returned directly; a context map is scanned
	/// in document order for degenerate `[form, ...]` pairs stored without
	/// a declared plural identifier, and the first such singular form
	/// wins. With a context, only a plain string stored under that exact
	/// context resolves; a nested list or map there is ambiguous and falls
	/// back.
	///
	/// Always returns a usable string; on any miss this is `identifier`
	/// itself.
	pub fn lookup<'a>(&'a self, identifier: &'a str, context: &str) -> &'a str {
		let Some(node) = self.entries.get(identifier) else {
			return identifier;
		};

		if context.is_empty() {
			return match node {
				Node::Text(text) => text,
				Node::Map(entries) => {
					first_pair_singular(entries.iter().map(|(_, value)| value))
						.unwrap_or(identifier)
				}
				Node::List(items) => first_pair_singular(items.iter()).unwrap_or(identifier),
			};
		}

		match node {
			Node::Map(entries) => match find(entries, context) {
				Some(Node::Text(text)) => text,
				_ => identifier,
			},
			_ => identifier,
		}
	}

	/// Resolve a plural-aware translation.
	///
	/// The fallback throughout is `singular` when `amount == 1` and
	/// `plural` otherwise. A flat translation stored under `singular`
	/// overrides plural resolution entirely; this is long-standing
	/// catalog-format behavior that callers rely on. A plain string
	/// stored under `context` with no `plural` key declared
	/// short-circuits plural resolution the same way.
	pub fn lookup_plural<'a>(
		&'a self,
		singular: &'a str,
		plural: &'a str,
		amount: u64,
		context: &str,
	) -> &'a str {
		let fallback = if amount == 1 { singular } else { plural };

		let Some(node) = self.entries.get(singular) else {
			return fallback;
		};

		let entries = match node {
			Node::Text(text) => return text,
			Node::Map(entries) => entries,
			Node::List(_) => return fallback,
		};

		if !context.is_empty() && find(entries, plural).is_none() {
			if let Some(Node::Text(text)) = find(entries, context) {
				return text;
			}
		}

		let Some(pair) = find(entries, plural) else {
			return fallback;
		};

		if context.is_empty() {
			let Node::List(forms) = pair else {
				return fallback;
			};
			if forms.len() < 2 {
				return fallback;
			}
			return if amount == 1 {
				match &forms[0] {
					Node::Text(text) => text,
					_ => singular,
				}
			} else {
				match &forms[1] {
					Node::Text(text) => text,
					_ => plural,
				}
			};
		}

		let Node::Map(contexts) = pair else {
			return fallback;
		};
		let Some(Node::List(forms)) = find(contexts, context) else {
			return fallback;
		};
		let index = usize::from(amount != 1);
		match forms.get(index) {
			Some(Node::Text(text)) => text,
			_ => fallback,
		}
	}
}

/// First singular form among values that are `[form, ...]` pairs.
///
/// Values that are not lists, or whose first element is not plain text,
/// are skipped rather than treated as errors.
fn first_pair_singular<'a>(mut values: impl Iterator<Item = &'a Node>) -> Option<&'a str> {
	values.find_map(|value| match value {
		Node::List(items) => match items.first() {
			Some(Node::Text(text)) => Some(text.as_str()),
			_ => None,
		},
		_ => None,
	})
}

fn find<'a>(entries: &'a [(String, Node)], key: &str) -> Option<&'a Node> {
	entries
		.iter()
		.find(|(entry_key, _)| entry_key == key)
		.map(|(_, node)| node)
}
