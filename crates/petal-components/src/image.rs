//! Bulma image element and its sized container.

use crate::helpers::{ClassList, shared_forwards};
use petal_core::{Component, ComponentSpec, RenderTarget, Shape, ValueKind, forward_ref_as};

/// An image, rendering an `img` element by default.
///
/// `rounded` adds `is-rounded`; `src` and `alt` pass through as
/// ordinary attributes.
pub fn image() -> Component {
	forward_ref_as(
		|mut render| {
			let props = render.props_mut();
			let mut classes = ClassList::empty();
			classes.push_if(props.take_bool("rounded").unwrap_or(false), "is-rounded");
			classes.apply(props);
			render.finish()
		},
		ComponentSpec {
			display_name: "Image",
			own: Shape::new().optional("rounded", ValueKind::Bool),
			forwards: shared_forwards(),
			default_as: RenderTarget::Tag("img"),
		},
	)
}

/// The sized wrapper around an image, a `figure` with class `image`.
///
/// A numeric `size` yields a fixed square (`is-128x128`); a string
/// `size` is used verbatim as a ratio or named dimension (`16by9` →
/// `is-16by9`).
pub fn image_container() -> Component {
	forward_ref_as(
		|mut render| {
			let props = render.props_mut();
			let mut classes = ClassList::new("image");
			if let Some(value) = props.remove("size") {
				if let Some(n) = value.as_num() {
					classes.push(format!("is-{n}x{n}"));
				} else if let Some(ratio) = value.as_str() {
					classes.push(format!("is-{ratio}"));
				}
			}
			classes.apply(props);
			render.finish()
		},
		ComponentSpec {
			display_name: "ImageContainer",
			own: Shape::new().optional("size", ValueKind::Any),
			forwards: shared_forwards(),
			default_as: RenderTarget::Tag("figure"),
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
		let props = PropBag::new().with("src", PropValue::str("petal.png"));
		let view = image().render(props, NodeRef::new());
		let element = view.root_element().unwrap();
		assert_eq!(element.tag_name(), "img");
		assert_eq!(element.attr_value("src"), Some("petal.png"));
		assert_eq!(element.attr_value("class"), None);
	}

	#[test]
	fn test_rounded() {
		let props = PropBag::new().with("rounded", PropValue::Bool(true));
		let view = image().render(props, NodeRef::new());
		assert!(view.root_element().unwrap().has_class("is-rounded"));
	}

	#[rstest]
	#[case(16)]
	#[case(64)]
	#[case(128)]
	fn test_container_square_sizes(#[case] size: i64) {
		let props = PropBag::new().with("size", PropValue::num(size));
		let view = image_container().render(props, NodeRef::new());
		let element = view.root_element().unwrap();
		assert_eq!(element.tag_name(), "figure");
		assert!(element.has_class("image"));
		assert!(element.has_class(&format!("is-{size}x{size}")));
	}

	#[rstest]
	#[case("16by9", "is-16by9")]
	#[case("4by3", "is-4by3")]
	#[case("square", "is-square")]
	fn test_container_ratios(#[case] ratio: &'static str, #[case] token: &str) {
		let props = PropBag::new().with("size", PropValue::str(ratio));
		let view = image_container().render(props, NodeRef::new());
		assert!(view.root_element().unwrap().has_class(token));
	}
}
