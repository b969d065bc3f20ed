//! Bulma hero banner.

use crate::color::take_color;
use crate::error::ComponentError;
use crate::helpers::{ClassList, shared_forwards};
use petal_core::{Component, ComponentSpec, RenderTarget, Shape, ValueKind, forward_ref_as};
use std::str::FromStr;

/// A hero size modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroSize {
	/// A taller hero.
	Medium,
	/// An even taller hero.
	Large,
	/// A hero filling the viewport height.
	Fullheight,
}

impl HeroSize {
	/// The `is-*` class token for this size.
	pub fn class(self) -> &'static str {
		match self {
			Self::Medium => "is-medium",
			Self::Large => "is-large",
			Self::Fullheight => "is-fullheight",
		}
	}
}

impl FromStr for HeroSize {
	type Err = ComponentError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value {
			"medium" => Ok(Self::Medium),
			"large" => Ok(Self::Large),
			"fullheight" => Ok(Self::Fullheight),
			other => Err(ComponentError::UnknownSize(other.to_string())),
		}
	}
}

/// A hero banner, rendering a `section` by default.
///
/// `color` takes a Bulma color name; `gradient` pairs with a color to
/// produce the bold gradient variant and is ignored on its own; `size`
/// takes `medium`, `large` or `fullheight`.
pub fn hero() -> Component {
	forward_ref_as(
		|mut render| {
			let props = render.props_mut();
			let mut classes = ClassList::new("hero");
			let gradient = props.take_bool("gradient").unwrap_or(false);
			if let Some(color) = take_color(props) {
				classes.push(color.class());
				classes.push_if(gradient, "is-bold");
			}
			if let Some(raw) = props.take_str("size") {
				match raw.parse::<HeroSize>() {
					Ok(size) => classes.push(size.class()),
					Err(err) => tracing::debug!(%err, "ignoring unrecognized hero size"),
				}
			}
			classes.apply(props);
			render.finish()
		},
		ComponentSpec {
			display_name: "Hero",
			own: Shape::new()
				.optional("color", ValueKind::Str)
				.optional("gradient", ValueKind::Bool)
				.optional("size", ValueKind::Str),
			forwards: shared_forwards(),
			default_as: RenderTarget::Tag("section"),
		},
	)
}

/// The hero's top slice, a `div` with class `hero-head`.
pub fn hero_head() -> Component {
	hero_slice("HeroHead", "hero-head")
}

/// The hero's vertically centered body, class `hero-body`.
pub fn hero_body() -> Component {
	hero_slice("HeroBody", "hero-body")
}

/// The hero's bottom slice, class `hero-foot`.
pub fn hero_footer() -> Component {
	hero_slice("HeroFooter", "hero-foot")
}

fn hero_slice(display_name: &'static str, class: &'static str) -> Component {
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
