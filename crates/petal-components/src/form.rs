//! Minimal form controls.

use crate::helpers::{ClassList, shared_forwards};
use petal_core::{
	Component, ComponentSpec, PropValue, RenderTarget, Shape, ValueKind, forward_ref_as,
};

/// A text input with class `input`.
pub fn input() -> Component {
	forward_ref_as(
		|mut render| {
			ClassList::new("input").apply(render.props_mut());
			render.finish()
		},
		ComponentSpec {
			display_name: "Input",
			own: Shape::new(),
			forwards: shared_forwards(),
			default_as: RenderTarget::Tag("input"),
		},
	)
}

/// A checkbox control.
pub fn checkbox() -> Component {
	typed_control("Checkbox", "checkbox")
}

/// A radio control.
pub fn radio() -> Component {
	typed_control("Radio", "radio")
}

fn typed_control(display_name: &'static str, input_type: &'static str) -> Component {
	forward_ref_as(
		move |mut render| {
			render
				.props_mut()
				.insert("type", PropValue::str(input_type));
			render.finish()
		},
		ComponentSpec {
			display_name,
			own: Shape::new(),
			forwards: Shape::new()
				.optional("type", ValueKind::Str)
				.optional("checked", ValueKind::Bool)
				.optional("disabled", ValueKind::Bool),
			default_as: RenderTarget::Tag("input"),
		},
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use petal_core::PropBag;
	use petal_view::NodeRef;

	#[test]
	fn test_input_has_input_class() {
		let view = input().render(PropBag::new(), NodeRef::new());
		let element = view.root_element().unwrap();
		assert_eq!(element.tag_name(), "input");
		assert!(element.has_class("input"));
		assert!(element.is_void());
	}

	#[test]
	fn test_checkbox_sets_type() {
		let view = checkbox().render(PropBag::new(), NodeRef::new());
		assert_eq!(
			view.root_element().unwrap().attr_value("type"),
			Some("checkbox")
		);
	}

	#[test]
	fn test_radio_sets_type() {
		let view = radio().render(PropBag::new(), NodeRef::new());
		assert_eq!(
			view.root_element().unwrap().attr_value("type"),
			Some("radio")
		);
	}

	#[test]
	fn test_checkbox_state_props_render_as_attributes() {
		let props = PropBag::new()
			.with("checked", PropValue::Bool(true))
			.with("disabled", PropValue::Bool(true));
		let view = checkbox().render(props, NodeRef::new());
		let element = view.root_element().unwrap();
		assert_eq!(element.attr_value("checked"), Some("true"));
		assert_eq!(element.attr_value("disabled"), Some("true"));
	}
}
