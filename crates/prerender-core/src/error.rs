//! Error types for prerender-core

use thiserror::Error;

/// Failure raised by a component while it is being resolved.
///
/// Render code never inspects these; they travel back to the caller of the
/// render entry point unchanged.
#[derive(Debug, Error)]
pub enum ComponentError {
	/// A component refused to render
	#[error("{0}")]
	Message(String),

	/// A store value could not be converted
	#[error("Store value conversion failed: {0}")]
	Serialization(#[from] serde_json::Error),

	/// Any other host error raised from a lifecycle hook or render step
	#[error(transparent)]
	Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ComponentError {
	/// Creates a message error.
	pub fn msg(message: impl Into<String>) -> Self {
		Self::Message(message.into())
	}
}

/// Result type for component operations
pub type Result<T> = std::result::Result<T, ComponentError>;
