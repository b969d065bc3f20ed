//! Component styling errors.

use thiserror::Error;

/// Error raised when a styling prop holds an unrecognized value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
	/// The value is not a Bulma color name.
	#[error("unknown color: {0}")]
	UnknownColor(String),

	/// The value is not a size this component supports.
	#[error("unknown size: {0}")]
	UnknownSize(String),
}
