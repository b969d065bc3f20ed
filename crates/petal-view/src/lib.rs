//! View-tree rendering runtime for Petal.
//!
//! This crate provides the host-side primitives the composition core
//! builds on: a [`View`] tree (elements, text, fragments), conversion via
//! [`IntoView`], HTML string rendering with escaping, [`NodeRef`] cells
//! for ref forwarding, and the [`ElementKind`] table mapping built-in tag
//! names to their instance kinds.

mod element_kind;
mod node_ref;
mod view;

pub use element_kind::ElementKind;
pub use node_ref::{NodeHandle, NodeRef};
pub use view::{ElementView, IntoView, View};
