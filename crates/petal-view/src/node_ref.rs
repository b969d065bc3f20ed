//! Ref-forwarding cells.

use crate::element_kind::ElementKind;
use std::cell::RefCell;
use std::rc::Rc;

/// A handle to the element an anchored ref resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeHandle {
	/// The instance kind of the rendered element.
	pub kind: ElementKind,
	/// The tag name of the rendered element.
	pub tag: String,
}

/// A shared cell that receives the rendered element handle.
///
/// Refs are created by the consumer, threaded through any number of
/// component layers, and filled in by whichever layer finally produces a
/// built-in element. Cloning a `NodeRef` clones the handle to the same
/// cell, mirroring how a forwarded ref reaches the innermost element.
#[derive(Debug, Clone, Default)]
pub struct NodeRef(Rc<RefCell<Option<NodeHandle>>>);

impl NodeRef {
	/// Creates an empty ref.
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores the handle for the rendered element.
	pub fn bind(&self, handle: NodeHandle) {
		*self.0.borrow_mut() = Some(handle);
	}

	/// Returns the handle, if the ref has been bound during a render.
	pub fn get(&self) -> Option<NodeHandle> {
		self.0.borrow().clone()
	}

	/// Returns whether the ref has been bound.
	pub fn is_bound(&self) -> bool {
		self.0.borrow().is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_ref_is_unbound() {
		let node_ref = NodeRef::new();
		assert!(!node_ref.is_bound());
		assert_eq!(node_ref.get(), None);
	}

	#[test]
	fn test_bind_and_get() {
		let node_ref = NodeRef::new();
		node_ref.bind(NodeHandle {
			kind: ElementKind::HtmlDiv,
			tag: "div".to_string(),
		});
		assert!(node_ref.is_bound());
		assert_eq!(node_ref.get().unwrap().kind, ElementKind::HtmlDiv);
	}

	#[test]
	fn test_clones_share_the_cell() {
		let node_ref = NodeRef::new();
		let forwarded = node_ref.clone();
		forwarded.bind(NodeHandle {
			kind: ElementKind::HtmlSpan,
			tag: "span".to_string(),
		});
		assert_eq!(node_ref.get().unwrap().tag, "span");
	}
}
