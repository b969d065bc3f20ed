//! Composite prop calculation and forwards compatibility.
//!
//! [`composite_props`] computes the prop set a polymorphic component
//! accepts from its own shape and its render target's shape. The target's
//! required props are promoted to the root only when that is unambiguous;
//! the full target shape is always reachable through the `with` bag.

use crate::WITH_PROP;
use crate::keys::{
	has_index_signature, has_intersecting_non_optional_keys, has_non_optional_keys,
};
use crate::shape::{FieldDecl, PropKey, Shape, ValueKind};

/// How the target's props surface at the root of a composite shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
	/// Root promotion is ambiguous: the target's props are reachable
	/// only through a **required** `with` bag.
	WithRequired,
	/// The target has required props and no ambiguity: the consumer
	/// supplies them either at the root or through `with`.
	RootOrWith,
	/// The target has no required props: everything is optional, at the
	/// root or through `with`.
	OptionalOnly,
}

/// The computed accepted prop set of a polymorphic component.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeProps {
	own: Shape,
	target: Shape,
	promotion: Promotion,
}

/// Computes the composite props of an own shape over a target shape.
///
/// Promotion is withheld entirely when a key is required on both sides,
/// or when the own shape declares an index signature while the target
/// has required keys; in both cases only the `with` bag can satisfy the
/// target, and supplying it becomes mandatory.
pub fn composite_props(own: &Shape, target: &Shape) -> CompositeProps {
	let promotion = if has_intersecting_non_optional_keys(own, target)
		|| (has_index_signature(own) && has_non_optional_keys(target))
	{
		Promotion::WithRequired
	} else if has_non_optional_keys(target) {
		Promotion::RootOrWith
	} else {
		Promotion::OptionalOnly
	};

	CompositeProps {
		own: own.clone(),
		target: target.clone(),
		promotion,
	}
}

impl CompositeProps {
	/// The own shape this composite was computed from.
	pub fn own(&self) -> &Shape {
		&self.own
	}

	/// The target shape this composite was computed from.
	pub fn target(&self) -> &Shape {
		&self.target
	}

	/// How the target's props are promoted.
	pub fn promotion(&self) -> Promotion {
		self.promotion
	}

	/// Returns whether a supplied shape satisfies this composite.
	///
	/// This is the value-level "does the supplied prop set extend the
	/// accepted prop set" check. Extra keys in `supplied` are never an
	/// error.
	pub fn admits(&self, supplied: &Shape) -> bool {
		if !shape_extends(supplied, &self.own) {
			return false;
		}

		let with_covers = supplied_with_covers(supplied, &self.target);
		match self.promotion {
			Promotion::WithRequired => with_covers,
			Promotion::RootOrWith => with_covers || root_covers(supplied, &self.target),
			Promotion::OptionalOnly => root_kinds_agree(supplied, &self.target),
		}
	}

	/// Flattens the composite into a single accepted shape.
	///
	/// Used when this component is itself someone else's render target:
	/// the flattened shape carries the own keys, the promoted target
	/// keys, and the `with` field (required only when promotion is
	/// withheld).
	pub fn to_shape(&self) -> Shape {
		let mut shape = self.own.clone();
		match self.promotion {
			Promotion::WithRequired => {
				shape.insert(
					PropKey::from(WITH_PROP),
					FieldDecl {
						kind: ValueKind::bag(self.target.clone()),
						optional: false,
					},
				);
			}
			Promotion::RootOrWith | Promotion::OptionalOnly => {
				for (key, decl) in self.target.fields() {
					shape.insert_if_absent(key.clone(), decl.clone());
				}
				shape.insert(
					PropKey::from(WITH_PROP),
					FieldDecl {
						kind: ValueKind::bag(self.target.clone()),
						optional: true,
					},
				);
			}
		}
		shape.inherit_index_signatures(&self.target);
		shape
	}
}

/// Returns whether a supplied shape structurally extends a declared one.
///
/// Every required key of `declared` must be present, required, and
/// kind-compatible in `supplied`; keys `supplied` adds beyond `declared`
/// are allowed; optional declared keys constrain only the kind of a
/// matching supplied key.
pub fn shape_extends(supplied: &Shape, declared: &Shape) -> bool {
	declared.fields().all(|(key, decl)| {
		match supplied.field(key) {
			Some(given) => {
				if !decl.optional && given.optional {
					return false;
				}
				kinds_compatible(&given.kind, &decl.kind)
			}
			None => decl.optional,
		}
	})
}

/// True iff the required keys of `receives` are all required (and
/// kind-compatible) in `forwards`.
///
/// This is the static contract a wrapper uses to declare that its
/// pass-through props are sufficient for whatever it renders: optional
/// keys of `receives` impose nothing, an empty `receives` is always
/// compatible, and extra forwarded keys are never an error. The relation
/// is not symmetric.
pub fn compatible_with_forwards_props(forwards: &Shape, receives: &Shape) -> bool {
	receives.fields().all(|(key, decl)| {
		decl.optional
			|| forwards
				.field(key)
				.is_some_and(|f| !f.optional && kinds_compatible(&f.kind, &decl.kind))
	})
}

fn kinds_compatible(supplied: &ValueKind, declared: &ValueKind) -> bool {
	match (supplied, declared) {
		(ValueKind::Any, _) | (_, ValueKind::Any) => true,
		(ValueKind::Bag(sub), ValueKind::Bag(sup)) => shape_extends(sub, sup),
		_ => supplied == declared,
	}
}

/// Whether `supplied` carries a required `with` bag satisfying `target`.
fn supplied_with_covers(supplied: &Shape, target: &Shape) -> bool {
	supplied
		.named_field(WITH_PROP)
		.is_some_and(|decl| match (&decl.kind, decl.optional) {
			(ValueKind::Bag(bag), false) => shape_extends(bag, target),
			_ => false,
		})
}

/// Whether `supplied` satisfies the target's required keys at the root.
fn root_covers(supplied: &Shape, target: &Shape) -> bool {
	target.fields().all(|(key, decl)| {
		decl.optional
			|| supplied
				.field(key)
				.is_some_and(|given| !given.optional && kinds_compatible(&given.kind, &decl.kind))
	})
}

/// Whether target keys present at the root of `supplied` are
/// kind-compatible (nothing is mandatory here).
fn root_kinds_agree(supplied: &Shape, target: &Shape) -> bool {
	target.fields().all(|(key, decl)| match supplied.field(key) {
		Some(given) => kinds_compatible(&given.kind, &decl.kind),
		None => true,
	})
}
