//! Petal - Bulma-styled polymorphic component library for Rust view trees.
//!
//! This facade crate re-exports the workspace members:
//!
//! - [`view`] - the view-tree rendering runtime (`View`, `ElementView`,
//!   `NodeRef`, `ElementKind`)
//! - [`core`] - the polymorphic composition core (`Shape`, composite
//!   props, render-target resolution, the `forward_ref_as` factory)
//! - [`components`] - Bulma-styled consumers (Hero, Message, Label,
//!   Image, form controls)
//!
//! # Example
//!
//! ```
//! use petal::components::hero;
//! use petal::core::{PropBag, PropValue};
//! use petal::view::NodeRef;
//!
//! let mut props = PropBag::new();
//! props.insert("color", PropValue::str("primary"));
//! let html = hero().render(props, NodeRef::new()).render_to_string();
//! assert!(html.contains("hero"));
//! ```

pub use petal_components as components;
pub use petal_core as core;
pub use petal_view as view;
