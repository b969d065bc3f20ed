//! Runtime prop bags.
//!
//! A [`PropBag`] is the per-render prop object a component receives:
//! ordered, shallow, created fresh per render and discarded afterwards.
//! Merging follows the documented precedence: root props are the
//! convenience surface, the `with` bag is authoritative.

use crate::error::PropError;
use crate::target::RenderTarget;
use indexmap::IndexMap;
use petal_view::View;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// A runtime prop value.
#[derive(Clone)]
pub enum PropValue {
	/// A string value.
	Str(String),
	/// A numeric value.
	Num(i64),
	/// A boolean value.
	Bool(bool),
	/// A child view (or fragment of views).
	Node(View),
	/// A render target (the `as` prop).
	Target(RenderTarget),
	/// A nested prop bag (the `with` prop).
	Bag(PropBag),
}

impl PropValue {
	/// Creates a string value.
	pub fn str(value: impl Into<String>) -> Self {
		Self::Str(value.into())
	}

	/// Creates a numeric value.
	pub fn num(value: i64) -> Self {
		Self::Num(value)
	}

	/// Returns the string value, if this is one.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the numeric value, if this is one.
	pub fn as_num(&self) -> Option<i64> {
		match self {
			Self::Num(n) => Some(*n),
			_ => None,
		}
	}

	/// Returns the boolean value, if this is one.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(b) => Some(*b),
			_ => None,
		}
	}

	/// Returns the child view, if this is one.
	pub fn as_node(&self) -> Option<&View> {
		match self {
			Self::Node(view) => Some(view),
			_ => None,
		}
	}

	/// Returns the render target, if this is one.
	pub fn as_target(&self) -> Option<&RenderTarget> {
		match self {
			Self::Target(target) => Some(target),
			_ => None,
		}
	}

	/// Returns the nested bag, if this is one.
	pub fn as_bag(&self) -> Option<&PropBag> {
		match self {
			Self::Bag(bag) => Some(bag),
			_ => None,
		}
	}

	/// Renders the value as an attribute string, for scalar values.
	///
	/// Views, targets and bags have no attribute form and yield `None`.
	pub fn to_attr_string(&self) -> Option<String> {
		match self {
			Self::Str(s) => Some(s.clone()),
			Self::Num(n) => Some(n.to_string()),
			Self::Bool(b) => Some(b.to_string()),
			_ => None,
		}
	}
}

impl std::fmt::Debug for PropValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Str(s) => write!(f, "Str({s:?})"),
			Self::Num(n) => write!(f, "Num({n})"),
			Self::Bool(b) => write!(f, "Bool({b})"),
			Self::Node(_) => write!(f, "Node(..)"),
			Self::Target(t) => write!(f, "Target({t:?})"),
			Self::Bag(bag) => write!(f, "Bag({bag:?})"),
		}
	}
}

/// An ordered, shallow prop object.
#[derive(Debug, Clone, Default)]
pub struct PropBag {
	entries: IndexMap<String, PropValue>,
}

impl PropBag {
	/// Creates an empty bag.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a prop, replacing any existing value for the key.
	pub fn insert(&mut self, key: impl Into<String>, value: PropValue) {
		self.entries.insert(key.into(), value);
	}

	/// Builder-style insert.
	pub fn with(mut self, key: impl Into<String>, value: PropValue) -> Self {
		self.insert(key, value);
		self
	}

	/// Returns the value for a key.
	pub fn get(&self, key: &str) -> Option<&PropValue> {
		self.entries.get(key)
	}

	/// Removes and returns the value for a key.
	pub fn remove(&mut self, key: &str) -> Option<PropValue> {
		self.entries.shift_remove(key)
	}

	/// Removes the value for a key and returns it as a string.
	pub fn take_str(&mut self, key: &str) -> Option<String> {
		match self.remove(key) {
			Some(PropValue::Str(s)) => Some(s),
			_ => None,
		}
	}

	/// Removes the value for a key and returns it as a number.
	pub fn take_num(&mut self, key: &str) -> Option<i64> {
		self.remove(key).and_then(|v| v.as_num())
	}

	/// Removes the value for a key and returns it as a boolean.
	pub fn take_bool(&mut self, key: &str) -> Option<bool> {
		self.remove(key).and_then(|v| v.as_bool())
	}

	/// Returns the string value for a key, failing if absent or not a
	/// string.
	pub fn require_str(&self, key: &str) -> Result<&str, PropError> {
		let value = self.get(key).ok_or_else(|| PropError::missing(key))?;
		value.as_str().ok_or_else(|| PropError::kind(key, "string"))
	}

	/// Returns the numeric value for a key, failing if absent or not a
	/// number.
	pub fn require_num(&self, key: &str) -> Result<i64, PropError> {
		let value = self.get(key).ok_or_else(|| PropError::missing(key))?;
		value.as_num().ok_or_else(|| PropError::kind(key, "number"))
	}

	/// Returns the boolean value for a key, failing if absent or not a
	/// boolean.
	pub fn require_bool(&self, key: &str) -> Result<bool, PropError> {
		let value = self.get(key).ok_or_else(|| PropError::missing(key))?;
		value.as_bool().ok_or_else(|| PropError::kind(key, "boolean"))
	}

	/// Returns whether a key is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Returns the number of props.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns whether the bag is empty.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates the props in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Shallow-merges `overrides` into this bag, overrides winning.
	///
	/// This is the `with`-wins precedence: a key present in both keeps
	/// its original position but takes the override's value.
	pub fn merged_with(mut self, overrides: PropBag) -> PropBag {
		for (key, value) in overrides.entries {
			self.entries.insert(key, value);
		}
		self
	}

	/// Serializes the scalar props to an attribute map.
	///
	/// Views, targets and nested bags are skipped: only values with an
	/// attribute form survive, in the idiom of prop hydration.
	pub fn to_attrs(&self) -> HashMap<String, String> {
		let mut attrs = HashMap::new();
		if let Ok(serde_json::Value::Object(map)) = serde_json::to_value(self) {
			for (key, value) in map {
				let text = match value {
					serde_json::Value::String(s) => s,
					serde_json::Value::Bool(b) => b.to_string(),
					serde_json::Value::Number(n) => n.to_string(),
					_ => continue,
				};
				attrs.insert(key, text);
			}
		}
		attrs
	}

	/// Reconstructs a bag from an attribute map.
	///
	/// Values are coerced back to the narrowest scalar kind: booleans,
	/// then integers, then strings.
	pub fn from_attrs(attrs: &HashMap<String, String>) -> Self {
		let mut bag = PropBag::new();
		for (key, value) in attrs {
			let prop = match value.as_str() {
				"true" => PropValue::Bool(true),
				"false" => PropValue::Bool(false),
				other => match other.parse::<i64>() {
					Ok(n) => PropValue::Num(n),
					Err(_) => PropValue::str(other),
				},
			};
			bag.insert(key.clone(), prop);
		}
		bag
	}
}

impl Serialize for PropBag {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for (key, value) in &self.entries {
			match value {
				PropValue::Str(s) => map.serialize_entry(key, s)?,
				PropValue::Num(n) => map.serialize_entry(key, n)?,
				PropValue::Bool(b) => map.serialize_entry(key, b)?,
				PropValue::Bag(bag) => map.serialize_entry(key, bag)?,
				// No serial form; dropped like a function-valued prop.
				PropValue::Node(_) | PropValue::Target(_) => {}
			}
		}
		map.end()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_insert_and_get() {
		let mut bag = PropBag::new();
		bag.insert("a", PropValue::str("x"));
		bag.insert("b", PropValue::num(2));
		assert_eq!(bag.get("a").and_then(PropValue::as_str), Some("x"));
		assert_eq!(bag.get("b").and_then(PropValue::as_num), Some(2));
		assert_eq!(bag.len(), 2);
	}

	#[test]
	fn test_merge_overrides_win() {
		let base = PropBag::new()
			.with("a", PropValue::str("root"))
			.with("b", PropValue::num(1));
		let overrides = PropBag::new().with("a", PropValue::str("with"));
		let merged = base.merged_with(overrides);
		assert_eq!(merged.get("a").and_then(PropValue::as_str), Some("with"));
		assert_eq!(merged.get("b").and_then(PropValue::as_num), Some(1));
	}

	#[test]
	fn test_merge_keeps_insertion_order_for_overridden_keys() {
		let base = PropBag::new()
			.with("a", PropValue::num(1))
			.with("b", PropValue::num(2));
		let merged = base.merged_with(PropBag::new().with("a", PropValue::num(9)));
		let keys: Vec<&str> = merged.iter().map(|(k, _)| k).collect();
		assert_eq!(keys, ["a", "b"]);
	}

	#[test]
	fn test_merge_empty_is_identity() {
		let base = PropBag::new()
			.with("a", PropValue::str("x"))
			.with("b", PropValue::num(2));
		let merged = base.clone().merged_with(PropBag::new());
		let before: Vec<(String, Option<String>)> = base
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_attr_string()))
			.collect();
		let after: Vec<(String, Option<String>)> = merged
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_attr_string()))
			.collect();
		assert_eq!(before, after);
	}

	#[test]
	fn test_to_attrs_serializes_scalars_only() {
		let mut bag = PropBag::new()
			.with("name", PropValue::str("petal"))
			.with("count", PropValue::num(42))
			.with("enabled", PropValue::Bool(true));
		bag.insert("children", PropValue::Node(petal_view::View::empty()));

		let attrs = bag.to_attrs();
		assert_eq!(attrs.get("name"), Some(&"petal".to_string()));
		assert_eq!(attrs.get("count"), Some(&"42".to_string()));
		assert_eq!(attrs.get("enabled"), Some(&"true".to_string()));
		assert!(!attrs.contains_key("children"));
	}

	#[test]
	fn test_from_attrs_coerces_scalars() {
		let mut attrs = HashMap::new();
		attrs.insert("name".to_string(), "petal".to_string());
		attrs.insert("count".to_string(), "42".to_string());
		attrs.insert("enabled".to_string(), "true".to_string());

		let bag = PropBag::from_attrs(&attrs);
		assert_eq!(bag.get("name").and_then(PropValue::as_str), Some("petal"));
		assert_eq!(bag.get("count").and_then(PropValue::as_num), Some(42));
		assert_eq!(bag.get("enabled").and_then(PropValue::as_bool), Some(true));
	}

	#[test]
	fn test_require_accessors() {
		let bag = PropBag::new()
			.with("s", PropValue::str("x"))
			.with("n", PropValue::num(3));
		assert_eq!(bag.require_str("s"), Ok("x"));
		assert_eq!(bag.require_num("n"), Ok(3));
		assert_eq!(
			bag.require_str("missing"),
			Err(PropError::Missing {
				key: "missing".to_string()
			})
		);
		assert_eq!(
			bag.require_bool("n"),
			Err(PropError::Kind {
				key: "n".to_string(),
				expected: "boolean"
			})
		);
	}

	#[test]
	fn test_take_accessors() {
		let mut bag = PropBag::new()
			.with("s", PropValue::str("x"))
			.with("n", PropValue::num(3))
			.with("b", PropValue::Bool(false));
		assert_eq!(bag.take_str("s"), Some("x".to_string()));
		assert_eq!(bag.take_num("n"), Some(3));
		assert_eq!(bag.take_bool("b"), Some(false));
		assert!(bag.is_empty());
		assert_eq!(bag.take_str("missing"), None);
	}
}
