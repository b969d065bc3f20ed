//! Prop conversion errors.
//!
//! Composition itself never fails; these errors only surface when a
//! caller asks a prop bag for a typed value it does not hold.

use thiserror::Error;

/// Error raised when reading a typed prop out of a bag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropError {
	/// The prop is not present in the bag.
	#[error("missing prop: {key}")]
	Missing {
		/// The requested key.
		key: String,
	},

	/// The prop is present but holds a different kind of value.
	#[error("prop {key} is not a {expected}")]
	Kind {
		/// The requested key.
		key: String,
		/// The kind the caller asked for.
		expected: &'static str,
	},
}

impl PropError {
	pub(crate) fn missing(key: &str) -> Self {
		Self::Missing {
			key: key.to_string(),
		}
	}

	pub(crate) fn kind(key: &str, expected: &'static str) -> Self {
		Self::Kind {
			key: key.to_string(),
			expected,
		}
	}
}
