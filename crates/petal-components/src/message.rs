//! Bulma message block.

use crate::color::take_color;
use crate::helpers::{ClassList, shared_forwards, take_size};
use petal_core::{Component, ComponentSpec, RenderTarget, Shape, ValueKind, forward_ref_as};

/// A colored message block, rendering an `article` by default.
pub fn message() -> Component {
	forward_ref_as(
		|mut render| {
			let props = render.props_mut();
			let mut classes = ClassList::new("message");
			if let Some(color) = take_color(props) {
				classes.push(color.class());
			}
			if let Some(size) = take_size(props) {
				classes.push(size.class());
			}
			classes.apply(props);
			render.finish()
		},
		ComponentSpec {
			display_name: "Message",
			own: Shape::new()
				.optional("color", ValueKind::Str)
				.optional("size", ValueKind::Str),
			forwards: shared_forwards(),
			default_as: RenderTarget::Tag("article"),
		},
	)
}

/// The message's header strip, a `div` with class `message-header`.
pub fn message_header() -> Component {
	message_part("MessageHeader", "message-header")
}

/// The message's body, a `div` with class `message-body`.
pub fn message_body() -> Component {
	message_part("MessageBody", "message-body")
}

fn message_part(display_name: &'static str, class: &'static str) -> Component {
	forward_ref_as(
		move |mut render| {
			ClassList::new(class).apply(render.props_mut());
			render.finish()
		},
		ComponentSpec {
			display_name,
			own: Shape::new(),
			forwards: shared_forwards(),
			default_as: RenderTarget::Tag("div"),
		},
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use petal_core::{PropBag, PropValue};
	use petal_view::NodeRef;
	use rstest::rstest;

	#[test]
	fn test_default_render() {
		let view = message().render(PropBag::new(), NodeRef::new());
		let element = view.root_element().unwrap();
		assert_eq!(element.tag_name(), "article");
		assert_eq!(element.attr_value("class"), Some("message"));
	}

	#[rstest]
	#[case("info", "is-info")]
	#[case("warning", "is-warning")]
	fn test_color(#[case] color: &'static str, #[case] token: &str) {
		let view = message().render(
			PropBag::new().with("color", PropValue::str(color)),
			NodeRef::new(),
		);
		assert!(view.root_element().unwrap().has_class(token));
	}

	#[rstest]
	#[case("small", "is-small")]
	#[case("medium", "is-medium")]
	#[case("large", "is-large")]
	fn test_size(#[case] size: &'static str, #[case] token: &str) {
		let view = message().render(
			PropBag::new().with("size", PropValue::str(size)),
			NodeRef::new(),
		);
		assert!(view.root_element().unwrap().has_class(token));
	}

	#[rstest]
	#[case(message_header(), "message-header")]
	#[case(message_body(), "message-body")]
	fn test_parts(#[case] component: Component, #[case] class: &str) {
		let view = component.render(PropBag::new(), NodeRef::new());
		let element = view.root_element().unwrap();
		assert_eq!(element.tag_name(), "div");
		assert!(element.has_class(class));
	}

	#[test]
	fn test_unknown_size_is_dropped() {
		let view = message().render(
			PropBag::new().with("size", PropValue::str("huge")),
			NodeRef::new(),
		);
		assert_eq!(
			view.root_element().unwrap().attr_value("class"),
			Some("message")
		);
	}
}
