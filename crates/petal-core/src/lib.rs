//! Polymorphic component composition core for Petal.
//!
//! Components built by this crate declare an `as` prop selecting the
//! element or component they render as, and a `with` bag forwarding
//! props to that target. The accepted prop set of such a component is
//! computed from its own prop [`Shape`] and the resolved target's shape
//! ([`composite_props`]); at render time the same rule is applied to
//! concrete prop bags ([`ForwardRefAs::render`]).
//!
//! The schema layer (shapes, key predicates, composite calculation,
//! forwards compatibility) is pure and value-level: it can run at build
//! time to derive typed bindings, or in tests to assert a component's
//! contract. The runtime layer does no validation of its own; a prop the
//! target does not understand simply renders as an absent attribute.

mod component;
mod composite;
mod error;
mod keys;
mod props;
mod shape;
mod target;

pub use component::{
	Component, ComponentSpec, ForwardRefAs, RenderProps, create_element, forward_ref_as,
};
pub use composite::{
	CompositeProps, Promotion, compatible_with_forwards_props, composite_props, shape_extends,
};
pub use error::PropError;
pub use keys::{
	has_index_signature, has_intersecting_non_optional_keys, has_non_optional_keys,
	known_keys, non_optional_keys,
};
pub use props::{PropBag, PropValue};
pub use shape::{FieldDecl, PropKey, Shape, ValueKind};
pub use target::{FnComponent, RefKind, RenderTarget, ResolvedTarget, Resolver};

/// Reserved prop selecting the render target.
pub const AS_PROP: &str = "as";

/// Reserved prop carrying the forwarded target prop bag.
pub const WITH_PROP: &str = "with";

/// Conventional prop carrying child views.
pub const CHILDREN_PROP: &str = "children";
