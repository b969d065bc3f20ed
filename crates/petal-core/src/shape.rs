//! Prop shape schema values.
//!
//! A [`Shape`] is the value-level description of an object-like prop
//! set: named (or numeric) keys with a value kind and an optionality
//! flag, plus optional string/number index signatures covering keys not
//! explicitly enumerated.

use indexmap::IndexMap;
use std::borrow::Cow;
use std::rc::Rc;

/// A key in a shape: an explicit name or a numeric key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropKey {
	/// A named key.
	Name(Cow<'static, str>),
	/// A numeric key.
	Index(u64),
}

impl From<&'static str> for PropKey {
	fn from(name: &'static str) -> Self {
		Self::Name(Cow::Borrowed(name))
	}
}

impl From<String> for PropKey {
	fn from(name: String) -> Self {
		Self::Name(Cow::Owned(name))
	}
}

impl From<u64> for PropKey {
	fn from(index: u64) -> Self {
		Self::Index(index)
	}
}

impl std::fmt::Display for PropKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Name(name) => write!(f, "{name}"),
			Self::Index(index) => write!(f, "{index}"),
		}
	}
}

/// The kind of value a field (or index signature) holds.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueKind {
	/// Any value; compatible with every kind on either side.
	Any,
	/// A string value.
	Str,
	/// A numeric value.
	Num,
	/// A boolean value.
	Bool,
	/// A child view (or fragment of views).
	Node,
	/// A render target.
	Target,
	/// A nested prop bag with its own shape (used for `with`).
	Bag(Rc<Shape>),
}

impl ValueKind {
	/// Creates a bag kind over the given shape.
	pub fn bag(shape: Shape) -> Self {
		Self::Bag(Rc::new(shape))
	}
}

/// A single field declaration inside a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
	/// The kind of value this field holds.
	pub kind: ValueKind,
	/// Whether the field may be omitted.
	pub optional: bool,
}

/// The value-level description of a prop set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shape {
	fields: IndexMap<PropKey, FieldDecl>,
	string_index: Option<ValueKind>,
	number_index: Option<ValueKind>,
}

impl Shape {
	/// Creates an empty shape.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a required field.
	pub fn required(mut self, key: impl Into<PropKey>, kind: ValueKind) -> Self {
		self.fields.insert(
			key.into(),
			FieldDecl {
				kind,
				optional: false,
			},
		);
		self
	}

	/// Adds an optional field.
	pub fn optional(mut self, key: impl Into<PropKey>, kind: ValueKind) -> Self {
		self.fields.insert(
			key.into(),
			FieldDecl {
				kind,
				optional: true,
			},
		);
		self
	}

	/// Declares a string index signature.
	pub fn string_index(mut self, kind: ValueKind) -> Self {
		self.string_index = Some(kind);
		self
	}

	/// Declares a number index signature.
	pub fn number_index(mut self, kind: ValueKind) -> Self {
		self.number_index = Some(kind);
		self
	}

	/// Returns the declaration for a key, if explicitly enumerated.
	pub fn field(&self, key: &PropKey) -> Option<&FieldDecl> {
		self.fields.get(key)
	}

	/// Returns the declaration for a named key.
	pub fn named_field(&self, name: &'static str) -> Option<&FieldDecl> {
		self.fields.get(&PropKey::from(name))
	}

	/// Iterates the explicitly enumerated fields in declaration order.
	pub fn fields(&self) -> impl Iterator<Item = (&PropKey, &FieldDecl)> {
		self.fields.iter()
	}

	/// Returns whether the shape enumerates no fields.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Returns the string index signature, if declared.
	pub fn string_index_kind(&self) -> Option<&ValueKind> {
		self.string_index.as_ref()
	}

	/// Returns the number index signature, if declared.
	pub fn number_index_kind(&self) -> Option<&ValueKind> {
		self.number_index.as_ref()
	}

	/// Inserts a field declaration, replacing any existing one.
	pub(crate) fn insert(&mut self, key: PropKey, decl: FieldDecl) {
		self.fields.insert(key, decl);
	}

	/// Inserts a field declaration only if the key is absent.
	pub(crate) fn insert_if_absent(&mut self, key: PropKey, decl: FieldDecl) {
		self.fields.entry(key).or_insert(decl);
	}

	/// Copies index signatures from `other` where self declares none.
	pub(crate) fn inherit_index_signatures(&mut self, other: &Shape) {
		if self.string_index.is_none() {
			self.string_index = other.string_index.clone();
		}
		if self.number_index.is_none() {
			self.number_index = other.number_index.clone();
		}
	}
}
