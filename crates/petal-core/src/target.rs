//! Render targets and their resolution.
//!
//! A render target is what a polymorphic component ultimately renders
//! as: a built-in element tag, a plain function component, or another
//! factory-built component (the recursive case). [`Resolver`] maps a
//! target to its instance kind and accepted prop shape, memoized by
//! target identity so deeply nested trees resolve each target once.

use crate::component::ForwardRefAs;
use crate::composite::composite_props;
use crate::props::PropBag;
use crate::shape::{Shape, ValueKind};
use petal_view::{ElementKind, NodeRef, View};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TARGET_ID: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_target_id() -> u64 {
	NEXT_TARGET_ID.fetch_add(1, Ordering::Relaxed)
}

/// A plain function component.
///
/// Declares its accepted prop shape and renders a view from a prop bag.
/// It has no stable instance kind unless it opts into ref forwarding.
pub struct FnComponent {
	id: u64,
	name: &'static str,
	props: Shape,
	forwards_ref: bool,
	render: Box<dyn Fn(PropBag, NodeRef) -> View>,
}

impl FnComponent {
	/// Creates a function component with the given prop shape.
	pub fn new(
		name: &'static str,
		props: Shape,
		render: impl Fn(PropBag, NodeRef) -> View + 'static,
	) -> Rc<Self> {
		Rc::new(Self {
			id: next_target_id(),
			name,
			props,
			forwards_ref: false,
			render: Box::new(render),
		})
	}

	/// Creates a function component that forwards refs to its output.
	pub fn with_ref_forwarding(
		name: &'static str,
		props: Shape,
		render: impl Fn(PropBag, NodeRef) -> View + 'static,
	) -> Rc<Self> {
		Rc::new(Self {
			id: next_target_id(),
			name,
			props,
			forwards_ref: true,
			render: Box::new(render),
		})
	}

	/// The component's name, for debugging.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// The declared prop shape.
	pub fn props(&self) -> &Shape {
		&self.props
	}

	/// Whether the component forwards refs.
	pub fn forwards_ref(&self) -> bool {
		self.forwards_ref
	}

	/// Calls the component.
	pub fn call(&self, props: PropBag, node_ref: NodeRef) -> View {
		(self.render)(props, node_ref)
	}

	pub(crate) fn id(&self) -> u64 {
		self.id
	}
}

impl std::fmt::Debug for FnComponent {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FnComponent")
			.field("name", &self.name)
			.field("forwards_ref", &self.forwards_ref)
			.finish()
	}
}

/// What a polymorphic component renders as.
#[derive(Clone)]
pub enum RenderTarget {
	/// A built-in element tag.
	Tag(&'static str),
	/// A plain function component.
	Fn(Rc<FnComponent>),
	/// A factory-built polymorphic component.
	Forward(Rc<ForwardRefAs>),
}

impl RenderTarget {
	/// A stable identity for memoization.
	fn key(&self) -> TargetKey {
		match self {
			Self::Tag(tag) => TargetKey::Tag(tag),
			Self::Fn(component) => TargetKey::Node(component.id()),
			Self::Forward(component) => TargetKey::Node(component.id()),
		}
	}
}

impl std::fmt::Debug for RenderTarget {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Tag(tag) => write!(f, "Tag({tag:?})"),
			Self::Fn(component) => write!(f, "Fn({:?})", component.name()),
			Self::Forward(component) => {
				write!(f, "Forward({:?})", component.display_name())
			}
		}
	}
}

impl From<&'static str> for RenderTarget {
	fn from(tag: &'static str) -> Self {
		Self::Tag(tag)
	}
}

impl From<Rc<FnComponent>> for RenderTarget {
	fn from(component: Rc<FnComponent>) -> Self {
		Self::Fn(component)
	}
}

impl From<Rc<ForwardRefAs>> for RenderTarget {
	fn from(component: Rc<ForwardRefAs>) -> Self {
		Self::Forward(component)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum TargetKey {
	Tag(&'static str),
	Node(u64),
}

/// The instance a ref resolves to for a given target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
	/// A built-in element instance.
	Element(ElementKind),
	/// A component instance (a ref-forwarding component).
	Component,
	/// No stable instance (a plain function component).
	None,
}

/// A resolved render target: its instance kind and accepted prop shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTarget {
	/// The instance kind a ref to this target yields.
	pub instance: RefKind,
	/// The full prop shape the target accepts.
	pub props: Shape,
}

/// Resolves render targets to instance kinds and prop shapes.
#[derive(Debug, Default)]
pub struct Resolver {
	cache: RefCell<HashMap<TargetKey, Rc<ResolvedTarget>>>,
}

impl Resolver {
	/// Creates a resolver with an empty cache.
	pub fn new() -> Self {
		Self::default()
	}

	/// Resolves a target, memoized by target identity.
	///
	/// Factory-built components resolve recursively: their accepted
	/// shape is the flattened composite of their own shape over their
	/// default target, so `as` chains compose transitively.
	pub fn resolve(&self, target: &RenderTarget) -> Rc<ResolvedTarget> {
		let key = target.key();
		if let Some(resolved) = self.cache.borrow().get(&key) {
			tracing::trace!(target = ?target, "target cache hit");
			return Rc::clone(resolved);
		}

		let resolved = Rc::new(self.resolve_uncached(target));
		tracing::trace!(target = ?target, instance = ?resolved.instance, "target resolved");
		self.cache.borrow_mut().insert(key, Rc::clone(&resolved));
		resolved
	}

	fn resolve_uncached(&self, target: &RenderTarget) -> ResolvedTarget {
		match target {
			RenderTarget::Tag(tag) => ResolvedTarget {
				instance: RefKind::Element(ElementKind::for_tag(tag)),
				props: intrinsic_shape(tag),
			},
			RenderTarget::Fn(component) => ResolvedTarget {
				instance: if component.forwards_ref() {
					RefKind::Component
				} else {
					RefKind::None
				},
				props: component.props().clone(),
			},
			RenderTarget::Forward(component) => {
				let inner = self.resolve(component.default_as());
				let composite = composite_props(component.own_shape(), &inner.props);
				ResolvedTarget {
					instance: inner.instance,
					props: composite.to_shape(),
				}
			}
		}
	}
}

/// The intrinsic attribute shape of a built-in element.
///
/// Global attributes are optional on every tag; the string index
/// signature stands in for the open-ended `data-*`/`aria-*` space.
fn intrinsic_shape(tag: &str) -> Shape {
	let mut shape = Shape::new()
		.optional("class", ValueKind::Str)
		.optional("id", ValueKind::Str)
		.optional("style", ValueKind::Str)
		.optional("title", ValueKind::Str)
		.optional("role", ValueKind::Str)
		.optional("children", ValueKind::Node)
		.string_index(ValueKind::Any);

	shape = match tag {
		"img" => shape
			.optional("src", ValueKind::Str)
			.optional("alt", ValueKind::Str)
			.optional("width", ValueKind::Num)
			.optional("height", ValueKind::Num),
		"a" => shape
			.optional("href", ValueKind::Str)
			.optional("target", ValueKind::Str),
		"input" => shape
			.optional("type", ValueKind::Str)
			.optional("value", ValueKind::Str)
			.optional("name", ValueKind::Str)
			.optional("checked", ValueKind::Bool)
			.optional("disabled", ValueKind::Bool),
		"label" => shape.optional("for", ValueKind::Str),
		"svg" => shape
			.optional("xmlns", ValueKind::Str)
			.optional("viewBox", ValueKind::Str),
		_ => shape,
	};
	shape
}
