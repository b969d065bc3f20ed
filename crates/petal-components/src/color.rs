//! Bulma color palette.

use crate::error::ComponentError;
use petal_core::PropBag;
use std::str::FromStr;

/// A Bulma color modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
	/// The primary brand color.
	Primary,
	/// The link color.
	Link,
	/// The informational color.
	Info,
	/// The success color.
	Success,
	/// The warning color.
	Warning,
	/// The danger color.
	Danger,
	/// The light neutral.
	Light,
	/// The dark neutral.
	Dark,
	/// Plain white.
	White,
	/// Plain black.
	Black,
}

impl Color {
	/// The color's Bulma name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Primary => "primary",
			Self::Link => "link",
			Self::Info => "info",
			Self::Success => "success",
			Self::Warning => "warning",
			Self::Danger => "danger",
			Self::Light => "light",
			Self::Dark => "dark",
			Self::White => "white",
			Self::Black => "black",
		}
	}

	/// The `is-*` class token for this color.
	pub fn class(self) -> String {
		format!("is-{}", self.as_str())
	}
}

impl FromStr for Color {
	type Err = ComponentError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value {
			"primary" => Ok(Self::Primary),
			"link" => Ok(Self::Link),
			"info" => Ok(Self::Info),
			"success" => Ok(Self::Success),
			"warning" => Ok(Self::Warning),
			"danger" => Ok(Self::Danger),
			"light" => Ok(Self::Light),
			"dark" => Ok(Self::Dark),
			"white" => Ok(Self::White),
			"black" => Ok(Self::Black),
			other => Err(ComponentError::UnknownColor(other.to_string())),
		}
	}
}

/// Pops the `color` prop off a bag, dropping unrecognized values.
pub(crate) fn take_color(props: &mut PropBag) -> Option<Color> {
	let raw = props.take_str("color")?;
	match raw.parse::<Color>() {
		Ok(color) => Some(color),
		Err(err) => {
			tracing::debug!(%err, "ignoring unrecognized color");
			None
		}
	}
}
