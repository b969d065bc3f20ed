//! Property: forwarding an empty `with` bag changes nothing.

use petal_core::{
	Component, ComponentSpec, PropBag, PropValue, RenderProps, RenderTarget, Shape, WITH_PROP,
	forward_ref_as,
};
use petal_view::NodeRef;
use proptest::prelude::*;

fn passthrough() -> Component {
	forward_ref_as(
		RenderProps::finish,
		ComponentSpec {
			display_name: "Box",
			own: Shape::new(),
			forwards: Shape::new(),
			default_as: RenderTarget::Tag("div"),
		},
	)
}

fn scalar_value() -> impl Strategy<Value = PropValue> {
	prop_oneof![
		"[a-z0-9 ]{0,8}".prop_map(PropValue::str),
		(-1000i64..1000).prop_map(PropValue::Num),
		any::<bool>().prop_map(PropValue::Bool),
	]
}

fn scalar_bag() -> impl Strategy<Value = PropBag> {
	// Prefixed keys keep clear of the reserved `as`/`with`/`children`.
	proptest::collection::vec(("[a-z]{1,6}", scalar_value()), 0..6).prop_map(|entries| {
		let mut bag = PropBag::new();
		for (key, value) in entries {
			bag.insert(format!("x-{key}"), value);
		}
		bag
	})
}

proptest! {
	#[test]
	fn empty_with_bag_renders_identically(bag in scalar_bag()) {
		let component = passthrough();
		let plain = component
			.render(bag.clone(), NodeRef::new())
			.render_to_string();
		let with_empty = component
			.render(
				bag.with(WITH_PROP, PropValue::Bag(PropBag::new())),
				NodeRef::new(),
			)
			.render_to_string();
		prop_assert_eq!(plain, with_empty);
	}

	#[test]
	fn merge_with_empty_bag_preserves_entries(bag in scalar_bag()) {
		let merged = bag.clone().merged_with(PropBag::new());
		prop_assert_eq!(merged.len(), bag.len());
		for (key, value) in bag.iter() {
			let kept = merged.get(key).and_then(PropValue::to_attr_string);
			prop_assert_eq!(kept, value.to_attr_string());
		}
	}
}
