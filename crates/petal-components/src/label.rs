//! Form label with control-aware base class.
//!
//! Bulma styles a label wrapping a checkbox or radio differently from a
//! free-standing label, so the base class is discriminated by the
//! children: the first checkbox or radio control found in the child
//! views decides it.

use crate::helpers::{ClassList, shared_forwards, take_size};
use petal_core::{
	CHILDREN_PROP, Component, ComponentSpec, PropValue, RenderTarget, Shape, ValueKind,
	forward_ref_as,
};
use petal_view::View;

/// A form label, rendering a `label` element by default.
///
/// The base class is `checkbox` or `radio` when the children contain
/// the matching control, `label` otherwise. `disabled` adds
/// `is-disabled`; `size` takes `small`, `medium` or `large`.
pub fn label() -> Component {
	forward_ref_as(
		|mut render| {
			let props = render.props_mut();
			let base = props
				.get(CHILDREN_PROP)
				.and_then(PropValue::as_node)
				.and_then(control_discriminant)
				.unwrap_or("label");
			let mut classes = ClassList::new(base);
			classes.push_if(props.take_bool("disabled").unwrap_or(false), "is-disabled");
			if let Some(size) = take_size(props) {
				classes.push(size.class());
			}
			classes.apply(props);
			render.finish()
		},
		ComponentSpec {
			display_name: "Label",
			own: Shape::new()
				.optional("disabled", ValueKind::Bool)
				.optional("size", ValueKind::Str),
			forwards: shared_forwards(),
			default_as: RenderTarget::Tag("label"),
		},
	)
}

/// Finds the base class contributed by the first checkbox or radio
/// control in the view tree.
fn control_discriminant(view: &View) -> Option<&'static str> {
	match view {
		View::Element(el) => {
			if el.tag_name() == "input" {
				match el.attr_value("type") {
					Some("checkbox") => return Some("checkbox"),
					Some("radio") => return Some("radio"),
					_ => {}
				}
			}
			el.child_views().iter().find_map(control_discriminant)
		}
		View::Fragment(children) => children.iter().find_map(control_discriminant),
		View::Text(_) | View::Empty => None,
	}
}
