// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Typed catalog tree, converted once from JSON at load time.

use serde_json::Value;

/// A single catalog value.
///
/// Catalog files are shape-polymorphic, so the JSON document is converted
/// into this tagged tree up front and the lookup code matches on it
/// exhaustively. Map entries keep document order, which makes lookups that
/// scan entries deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// A direct translation.
	Text(String),
	/// An ordered list, usually a `[singular, plural]` pair.
	List(Vec<Node>),
	/// String-keyed entries in document order: contexts or plural
	/// identifiers.
	Map(Vec<(String, Node)>),
}

impl Node {
	/// Convert a JSON value into a node.
	///
	/// Numbers and booleans become their display text, since legacy export
	/// tools occasionally emit bare scalars. `null` yields `None` and the
	/// surrounding entry or element is discarded, so the affected
	/// identifier degrades to a lookup miss.
	pub fn from_value(value: Value) -> Option<Node> {
		match value {
			Value::String(text) => Some(Node::Text(text)),
			Value::Number(number) => Some(Node::Text(number.to_string())),
			Value::Bool(flag) => Some(Node::Text(flag.to_string())),
			Value::Null => None,
			Value::Array(items) => Some(Node::List(
				items.into_iter().filter_map(Node::from_value).collect(),
			)),
			Value::Object(entries) => Some(Node::Map(
				entries
					.into_iter()
					.filter_map(|(key, value)| Node::from_value(value).map(|node| (key, node)))
					.collect(),
			)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_string_becomes_text() {
		assert_eq!(
			Node::from_value(json!("Katze")),
			Some(Node::Text("Katze".to_string()))
		);
	}

	#[test]
	fn test_scalars_become_display_text() {
		assert_eq!(Node::from_value(json!(3)), Some(Node::Text("3".to_string())));
		assert_eq!(
			Node::from_value(json!(true)),
			Some(Node::Text("true".to_string()))
		);
	}

	#[test]
	fn test_null_is_discarded() {
		assert_eq!(Node::from_value(json!(null)), None);
	}

	#[test]
	fn test_null_map_entries_are_discarded() {
		let node = Node::from_value(json!({"kept": "x", "dropped": null}));
		assert_eq!(
			node,
			Some(Node::Map(vec![(
				"kept".to_string(),
				Node::Text("x".to_string())
			)]))
		);
	}

	#[test]
	fn test_map_keeps_document_order() {
		let node = Node::from_value(json!({"b": "2", "a": "1", "c": "3"}));
		let Some(Node::Map(entries)) = node else {
			panic!("expected a map node");
		};
		let keys: Vec<&str> = entries.iter().map(|(key, _)| key.as_str()).collect();
		assert_eq!(keys, vec!["b", "a", "c"]);
	}

	#[test]
	fn test_nested_pair_under_context() {
		let node = Node::from_value(json!({"ui": ["file", "files"]}));
		assert_eq!(
			node,
			Some(Node::Map(vec![(
				"ui".to_string(),
				Node::List(vec![
					Node::Text("file".to_string()),
					Node::Text("files".to_string()),
				])
			)]))
		);
	}
}
