//! Render options and loadable settings.

use crate::error::Result;
use crate::registry::ComponentRegistry;
use prerender_core::{AttrValue, Store};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Attribute hook.
///
/// Called as `hook(name, value, store, options, is_component)` for every
/// attribute that survives filtering. Returning `Some` replaces the default
/// formatting with the returned string verbatim (an empty string suppresses
/// the attribute); `None` falls back to the default.
///
/// The string renderer always passes `false` for `is_component`: a component
/// node emits no attributes of its own, and its output is rendered as a fresh
/// root.
pub type AttributeHook =
	Arc<dyn Fn(&str, &AttrValue, &Store, &RenderOptions, bool) -> Option<String> + Send + Sync>;

/// Pretty-printing mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Pretty {
	/// Compact output.
	#[default]
	Off,
	/// Indent with a tab.
	On,
	/// Indent with a custom unit. An empty unit disables pretty output.
	Indent(String),
}

impl Pretty {
	/// Returns the indentation unit, or `None` when pretty output is off.
	pub fn indent_unit(&self) -> Option<&str> {
		match self {
			Self::Off => None,
			Self::On => Some("\t"),
			Self::Indent(unit) if unit.is_empty() => None,
			Self::Indent(unit) => Some(unit),
		}
	}

	/// Checks whether pretty output is active.
	pub fn is_enabled(&self) -> bool {
		self.indent_unit().is_some()
	}
}

impl From<bool> for Pretty {
	fn from(value: bool) -> Self {
		if value { Self::On } else { Self::Off }
	}
}

impl From<&str> for Pretty {
	fn from(value: &str) -> Self {
		Self::Indent(value.to_string())
	}
}

impl From<String> for Pretty {
	fn from(value: String) -> Self {
		Self::Indent(value)
	}
}

/// Options for rendering a tree to a string.
#[derive(Clone, Default)]
pub struct RenderOptions {
	/// Pretty-printing mode.
	pub pretty: Pretty,
	/// Emit attributes in lexicographic order.
	pub sort_attributes: bool,
	/// Also emit the `key` and `ref` bookkeeping attributes.
	pub all_attributes: bool,
	/// XML mode: self-close empty elements and give boolean attributes values.
	pub xml: bool,
	/// Optional attribute formatting override.
	pub attribute_hook: Option<AttributeHook>,
	/// Components resolvable by tag name.
	pub registry: Arc<ComponentRegistry>,
}

impl std::fmt::Debug for RenderOptions {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RenderOptions")
			.field("pretty", &self.pretty)
			.field("sort_attributes", &self.sort_attributes)
			.field("all_attributes", &self.all_attributes)
			.field("xml", &self.xml)
			.field("attribute_hook", &self.attribute_hook.is_some())
			.field("registry", &self.registry)
			.finish()
	}
}

impl RenderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the pretty-printing mode (`true`, or a custom indent string).
	pub fn pretty(mut self, pretty: impl Into<Pretty>) -> Self {
		self.pretty = pretty.into();
		self
	}

	/// Enables pretty output with a custom indentation unit.
	pub fn indent(self, unit: impl Into<String>) -> Self {
		self.pretty(Pretty::Indent(unit.into()))
	}

	/// Sorts attributes lexicographically.
	pub fn sort_attributes(mut self, enable: bool) -> Self {
		self.sort_attributes = enable;
		self
	}

	/// Emits `key` and `ref` attributes.
	pub fn all_attributes(mut self, enable: bool) -> Self {
		self.all_attributes = enable;
		self
	}

	/// Enables XML mode.
	pub fn xml(mut self, enable: bool) -> Self {
		self.xml = enable;
		self
	}

	/// Sets the attribute hook.
	pub fn attribute_hook<F>(mut self, hook: F) -> Self
	where
		F: Fn(&str, &AttrValue, &Store, &RenderOptions, bool) -> Option<String>
			+ Send
			+ Sync
			+ 'static,
	{
		self.attribute_hook = Some(Arc::new(hook));
		self
	}

	/// Sets the component registry.
	pub fn registry(mut self, registry: impl Into<Arc<ComponentRegistry>>) -> Self {
		self.registry = registry.into();
		self
	}
}

/// Pretty setting as written in a settings file: a flag or an indent string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrettySetting {
	/// `pretty = true`
	Flag(bool),
	/// `pretty = "  "`
	Indent(String),
}

impl Default for PrettySetting {
	fn default() -> Self {
		Self::Flag(false)
	}
}

impl From<PrettySetting> for Pretty {
	fn from(value: PrettySetting) -> Self {
		match value {
			PrettySetting::Flag(flag) => flag.into(),
			PrettySetting::Indent(unit) => Self::Indent(unit),
		}
	}
}

/// Serializable subset of [`RenderOptions`].
///
/// Hooks and registries only exist in code, so they are attached to the
/// options after conversion.
///
/// ```
/// use prerender_ssr::options::{Pretty, RenderOptions, RenderSettings};
///
/// let settings = RenderSettings::from_toml_str("pretty = \"  \"\nxml = true").unwrap();
/// let options = RenderOptions::from(settings);
/// assert_eq!(options.pretty, Pretty::Indent("  ".to_string()));
/// assert!(options.xml);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
	/// Pretty-printing mode.
	pub pretty: PrettySetting,
	/// Emit attributes in lexicographic order.
	pub sort_attributes: bool,
	/// Also emit `key` and `ref`.
	pub all_attributes: bool,
	/// XML mode.
	pub xml: bool,
}

impl RenderSettings {
	/// Parses settings from a TOML document. Missing keys take defaults.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}
}

impl From<RenderSettings> for RenderOptions {
	fn from(settings: RenderSettings) -> Self {
		RenderOptions::new()
			.pretty(settings.pretty)
			.sort_attributes(settings.sort_attributes)
			.all_attributes(settings.all_attributes)
			.xml(settings.xml)
	}
}
