//! The polymorphic component factory.
//!
//! [`forward_ref_as`] builds a component that renders as a configurable
//! target. The consumer overrides the target with the `as` prop and
//! forwards props to it through the `with` bag; the component's own
//! render function sees everything else. Refs thread through every layer
//! untouched and bind at whichever layer produces a built-in element.

use crate::props::{PropBag, PropValue};
use crate::shape::Shape;
use crate::target::{RenderTarget, next_target_id};
use crate::{AS_PROP, CHILDREN_PROP, WITH_PROP};
use petal_view::{ElementKind, ElementView, NodeHandle, NodeRef, View};
use std::cell::RefCell;
use std::rc::Rc;

/// A factory-built polymorphic component.
pub type Component = Rc<ForwardRefAs>;

/// The declared contract of a polymorphic component.
#[derive(Debug, Clone)]
pub struct ComponentSpec {
	/// The initial display name, mirrored into debug output.
	pub display_name: &'static str,
	/// The component's own props, consumed by its render function.
	pub own: Shape,
	/// The props the component passes through to its render target.
	pub forwards: Shape,
	/// The target rendered when the consumer supplies no `as` prop.
	pub default_as: RenderTarget,
}

/// Builds a polymorphic component from a render function and its
/// declared contract.
///
/// The render function receives the effective target, the remaining
/// root props, the `with` bag and the ref bundled as [`RenderProps`];
/// most implementations adjust the root props and call
/// [`RenderProps::finish`].
pub fn forward_ref_as(
	render: impl Fn(RenderProps) -> View + 'static,
	spec: ComponentSpec,
) -> Component {
	Rc::new(ForwardRefAs {
		id: next_target_id(),
		display_name: RefCell::new(spec.display_name.to_string()),
		own: spec.own,
		forwards: spec.forwards,
		default_as: spec.default_as,
		render: Box::new(render),
	})
}

/// A component produced by [`forward_ref_as`].
pub struct ForwardRefAs {
	id: u64,
	display_name: RefCell<String>,
	own: Shape,
	forwards: Shape,
	default_as: RenderTarget,
	render: Box<dyn Fn(RenderProps) -> View>,
}

impl ForwardRefAs {
	/// The component's display name.
	pub fn display_name(&self) -> String {
		self.display_name.borrow().clone()
	}

	/// Replaces the display name, as wrappers do after instantiation.
	pub fn set_display_name(&self, name: impl Into<String>) {
		*self.display_name.borrow_mut() = name.into();
	}

	/// The component's own prop shape.
	pub fn own_shape(&self) -> &Shape {
		&self.own
	}

	/// The shape of the props the component forwards to its target.
	pub fn forwards_shape(&self) -> &Shape {
		&self.forwards
	}

	/// The target rendered when no `as` prop is supplied.
	pub fn default_as(&self) -> &RenderTarget {
		&self.default_as
	}

	/// Renders the component with the given props.
	///
	/// Pops `as` and `with` off the bag, then hands the rest to the
	/// render function. A non-target `as` value (or non-bag `with`) is
	/// dropped like any other prop the component does not understand.
	pub fn render(&self, mut props: PropBag, node_ref: NodeRef) -> View {
		let target = match props.remove(AS_PROP) {
			Some(PropValue::Target(target)) => target,
			_ => self.default_as.clone(),
		};
		let forwarded = match props.remove(WITH_PROP) {
			Some(PropValue::Bag(bag)) => bag,
			_ => PropBag::new(),
		};
		tracing::trace!(
			component = %self.display_name.borrow(),
			target = ?target,
			"rendering"
		);
		(self.render)(RenderProps {
			target,
			props,
			forwarded,
			node_ref,
		})
	}

	pub(crate) fn id(&self) -> u64 {
		self.id
	}
}

impl std::fmt::Debug for ForwardRefAs {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ForwardRefAs")
			.field("display_name", &self.display_name.borrow())
			.field("default_as", &self.default_as)
			.finish()
	}
}

/// The render-time inputs of a polymorphic component.
///
/// Root props and the `with` bag stay separate until [`finish`]: the
/// render function consumes its own props from the root, and only the
/// leftovers are merged with the forwarded bag (`with` wins) when the
/// target element is created.
///
/// [`finish`]: RenderProps::finish
pub struct RenderProps {
	target: RenderTarget,
	props: PropBag,
	forwarded: PropBag,
	node_ref: NodeRef,
}

impl RenderProps {
	/// The effective render target.
	pub fn target(&self) -> &RenderTarget {
		&self.target
	}

	/// The root props, minus `as` and `with`.
	pub fn props(&self) -> &PropBag {
		&self.props
	}

	/// Mutable access to the root props.
	pub fn props_mut(&mut self) -> &mut PropBag {
		&mut self.props
	}

	/// The ref threading through this component.
	pub fn node_ref(&self) -> NodeRef {
		self.node_ref.clone()
	}

	/// Merges the remaining root props with the `with` bag and creates
	/// the target element.
	pub fn finish(self) -> View {
		let merged = self.props.merged_with(self.forwarded);
		create_element(&self.target, merged, self.node_ref)
	}
}

/// Creates a view for a target from a fully merged prop bag.
///
/// Tags become element views: scalar props render as attributes,
/// `children` becomes the child views, and the ref binds to the element.
/// Components recurse with the bag as-is, so a bag carrying its own
/// `as`/`with` drives the next layer of composition.
pub fn create_element(target: &RenderTarget, mut props: PropBag, node_ref: NodeRef) -> View {
	match target {
		RenderTarget::Tag(tag) => {
			let children = match props.remove(CHILDREN_PROP) {
				Some(PropValue::Node(view)) => Some(view),
				Some(PropValue::Str(text)) => Some(View::text(text)),
				_ => None,
			};
			let mut element = ElementView::new(*tag);
			for (key, value) in props.iter() {
				if let Some(text) = value.to_attr_string() {
					element = element.attr(key.to_string(), text);
				}
			}
			if let Some(view) = children {
				element = element.child(view);
			}
			node_ref.bind(NodeHandle {
				kind: ElementKind::for_tag(tag),
				tag: (*tag).to_string(),
			});
			View::Element(element)
		}
		RenderTarget::Fn(component) => component.call(props, node_ref),
		RenderTarget::Forward(component) => component.render(props, node_ref),
	}
}
