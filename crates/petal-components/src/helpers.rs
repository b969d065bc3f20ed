//! Class-list assembly and styling helpers shared by the components.

use crate::error::ComponentError;
use petal_core::{PropBag, PropValue, Shape, ValueKind};
use std::str::FromStr;

/// A small/medium/large size modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
	/// Below the default size.
	Small,
	/// Above the default size.
	Medium,
	/// The largest size.
	Large,
}

impl Size {
	/// The size's Bulma name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Small => "small",
			Self::Medium => "medium",
			Self::Large => "large",
		}
	}

	/// The `is-*` class token for this size.
	pub fn class(self) -> String {
		format!("is-{}", self.as_str())
	}
}

impl FromStr for Size {
	type Err = ComponentError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value {
			"small" => Ok(Self::Small),
			"medium" => Ok(Self::Medium),
			"large" => Ok(Self::Large),
			other => Err(ComponentError::UnknownSize(other.to_string())),
		}
	}
}

/// Pops the `size` prop off a bag, dropping unrecognized values.
pub(crate) fn take_size(props: &mut PropBag) -> Option<Size> {
	let raw = props.take_str("size")?;
	match raw.parse::<Size>() {
		Ok(size) => Some(size),
		Err(err) => {
			tracing::debug!(%err, "ignoring unrecognized size");
			None
		}
	}
}

/// An order-stable, deduplicating list of class tokens.
///
/// Tokens keep their first-seen position; pushing a token twice is a
/// no-op. The consumer's incoming `class` string is appended last so
/// component-computed tokens lead the attribute.
#[derive(Debug, Clone, Default)]
pub struct ClassList {
	tokens: Vec<String>,
}

impl ClassList {
	/// Creates a list seeded with a base token.
	pub fn new(base: impl Into<String>) -> Self {
		let mut list = Self::default();
		list.push(base.into());
		list
	}

	/// Creates an empty list.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Appends a token if not already present.
	pub fn push(&mut self, token: impl Into<String>) {
		let token = token.into();
		if !token.is_empty() && !self.tokens.iter().any(|t| *t == token) {
			self.tokens.push(token);
		}
	}

	/// Appends a token when the condition holds.
	pub fn push_if(&mut self, condition: bool, token: &str) {
		if condition {
			self.push(token);
		}
	}

	/// Pops any incoming `class` prop off the bag, appends its tokens,
	/// and writes the assembled attribute back.
	///
	/// Bags with neither computed nor incoming tokens are left without a
	/// `class` entry.
	pub fn apply(mut self, props: &mut PropBag) {
		if let Some(incoming) = props.take_str("class") {
			for token in incoming.split_whitespace() {
				self.push(token);
			}
		}
		if !self.tokens.is_empty() {
			props.insert("class", PropValue::Str(self.tokens.join(" ")));
		}
	}
}

/// The pass-through shape every styled component declares: the
/// consumer's class string and child views reach the target untouched.
pub(crate) fn shared_forwards() -> Shape {
	Shape::new()
		.optional("class", ValueKind::Str)
		.optional("children", ValueKind::Node)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push_deduplicates_keeping_first_position() {
		let mut list = ClassList::new("hero");
		list.push("is-primary");
		list.push("hero");
		let mut props = PropBag::new();
		list.apply(&mut props);
		assert_eq!(props.require_str("class"), Ok("hero is-primary"));
	}

	#[test]
	fn test_apply_appends_incoming_class() {
		let mut props = PropBag::new().with("class", PropValue::str("custom hero"));
		ClassList::new("hero").apply(&mut props);
		assert_eq!(props.require_str("class"), Ok("hero custom"));
	}

	#[test]
	fn test_apply_skips_empty_lists() {
		let mut props = PropBag::new();
		ClassList::empty().apply(&mut props);
		assert!(!props.contains_key("class"));
	}

	#[test]
	fn test_size_parse_rejects_unknown_names() {
		let err = "huge".parse::<Size>().unwrap_err();
		assert_eq!(err, ComponentError::UnknownSize("huge".to_string()));
	}

	#[test]
	fn test_push_if() {
		let mut list = ClassList::empty();
		list.push_if(true, "is-rounded");
		list.push_if(false, "is-bold");
		let mut props = PropBag::new();
		list.apply(&mut props);
		assert_eq!(props.require_str("class"), Ok("is-rounded"));
	}
}
