//! Key predicates over shapes.
//!
//! These are the value-level counterparts of the conditional-type
//! utilities the composition rule is built from. Index signatures never
//! contribute keys here: a shape with only an index signature has no
//! known keys, and a declared index signature neither hides a required
//! named key nor invents one.

use crate::shape::{PropKey, Shape};

/// Returns whether the shape declares a string or number index signature.
pub fn has_index_signature(shape: &Shape) -> bool {
	shape.string_index_kind().is_some() || shape.number_index_kind().is_some()
}

/// Returns the explicitly enumerated keys, in declaration order.
pub fn known_keys(shape: &Shape) -> Vec<PropKey> {
	shape.fields().map(|(key, _)| key.clone()).collect()
}

/// Returns the explicitly enumerated keys that are required.
pub fn non_optional_keys(shape: &Shape) -> Vec<PropKey> {
	shape
		.fields()
		.filter(|(_, decl)| !decl.optional)
		.map(|(key, _)| key.clone())
		.collect()
}

/// Returns whether the shape has at least one required key.
pub fn has_non_optional_keys(shape: &Shape) -> bool {
	shape.fields().any(|(_, decl)| !decl.optional)
}

/// Returns whether some key is required in **both** shapes.
///
/// The relation only fires when the two sides independently mark the key
/// required: a key required in `b` but optional (or absent) in `a` does
/// not count.
pub fn has_intersecting_non_optional_keys(a: &Shape, b: &Shape) -> bool {
	a.fields().any(|(key, decl)| {
		!decl.optional && b.field(key).is_some_and(|other| !other.optional)
	})
}
