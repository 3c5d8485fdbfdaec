//! Error types for prerender-ssr

use prerender_core::ComponentError;
use thiserror::Error;

/// Error type for render operations
#[derive(Debug, Error)]
pub enum RenderError {
	/// A tag name contains a character that cannot appear in markup.
	///
	/// `fragment` is the opening tag built so far, attributes included.
	#[error("Invalid tag name: {fragment}")]
	InvalidTagName {
		/// The partially built opening tag
		fragment: String,
	},

	/// A component hook or render step failed
	#[error(transparent)]
	Component(#[from] ComponentError),

	/// Render settings could not be parsed
	#[error("Invalid render settings: {0}")]
	Settings(#[from] toml::de::Error),
}

impl RenderError {
	/// Returns the partial opening tag of an invalid-tag-name fault.
	pub fn fragment(&self) -> Option<&str> {
		match self {
			Self::InvalidTagName { fragment } => Some(fragment),
			_ => None,
		}
	}
}

/// Result type for render operations
pub type Result<T> = std::result::Result<T, RenderError>;
