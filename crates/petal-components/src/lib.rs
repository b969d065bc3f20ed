//! Bulma-styled components built on the Petal composition core.
//!
//! Every component here is a [`forward_ref_as`] instantiation: it
//! computes its Bulma class tokens from its own props, merges them with
//! the consumer's `class` string, and renders its default tag unless an
//! `as` prop redirects it. Props the component does not recognize pass
//! through to the rendered element.
//!
//! [`forward_ref_as`]: petal_core::forward_ref_as

mod color;
mod error;
mod form;
mod helpers;
mod hero;
mod image;
mod label;
mod message;

pub use color::Color;
pub use error::ComponentError;
pub use form::{checkbox, input, radio};
pub use helpers::{ClassList, Size};
pub use hero::{HeroSize, hero, hero_body, hero_footer, hero_head};
pub use image::{image, image_container};
pub use label::label;
pub use message::{message, message_body, message_header};
