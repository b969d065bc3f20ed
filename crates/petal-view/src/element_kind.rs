//! Instance kinds for built-in elements.

/// The concrete instance kind behind a built-in element tag.
///
/// This is the value-level counterpart of the DOM interface a tag
/// resolves to: `"div"` is backed by [`ElementKind::HtmlDiv`], `"svg"`
/// by [`ElementKind::SvgSvg`], and tags without a dedicated interface
/// fall back to [`ElementKind::HtmlGeneric`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
	/// `<div>` - the generic container element.
	HtmlDiv,
	/// `<span>`.
	HtmlSpan,
	/// `<p>`.
	HtmlParagraph,
	/// `<a>`.
	HtmlAnchor,
	/// `<img>`.
	HtmlImage,
	/// `<input>`.
	HtmlInput,
	/// `<label>`.
	HtmlLabel,
	/// `<button>`.
	HtmlButton,
	/// `<svg>` - the vector-graphics root.
	SvgSvg,
	/// Any tag without a dedicated interface (`section`, `article`, ...).
	HtmlGeneric,
}

impl ElementKind {
	/// Returns the instance kind for a tag name.
	pub fn for_tag(tag: &str) -> Self {
		match tag {
			"div" => Self::HtmlDiv,
			"span" => Self::HtmlSpan,
			"p" => Self::HtmlParagraph,
			"a" => Self::HtmlAnchor,
			"img" => Self::HtmlImage,
			"input" => Self::HtmlInput,
			"label" => Self::HtmlLabel,
			"button" => Self::HtmlButton,
			"svg" => Self::SvgSvg,
			_ => Self::HtmlGeneric,
		}
	}

	/// Returns whether this kind belongs to the SVG namespace.
	pub fn is_svg(&self) -> bool {
		matches!(self, Self::SvgSvg)
	}
}
