//! Component registry.
//!
//! Maps tag names to components. A registry is built before rendering and
//! shared read-only through [`RenderOptions`](crate::RenderOptions).
//!
//! Components can be registered explicitly, or submitted process-wide with
//! `inventory` and collected once at startup:
//!
//! ```ignore
//! use prerender_ssr::registry::{ComponentRegistration, ComponentRegistry};
//!
//! fn make_card() -> std::sync::Arc<dyn prerender_core::Component> {
//!     std::sync::Arc::new(Card)
//! }
//!
//! inventory::submit! {
//!     ComponentRegistration::new("card", make_card)
//! }
//!
//! let registry = ComponentRegistry::collected();
//! assert!(registry.contains("card"));
//! ```

use prerender_core::Component;
use std::collections::HashMap;
use std::sync::Arc;

/// Factory producing a component for process-wide registration.
pub type ComponentFactory = fn() -> Arc<dyn Component>;

/// Process-wide component registration entry.
///
/// Used with `inventory::submit!` and gathered by
/// [`ComponentRegistry::collected`].
pub struct ComponentRegistration {
	/// The tag name the component is registered under
	pub name: &'static str,
	/// Creates the component
	pub factory: ComponentFactory,
}

impl ComponentRegistration {
	/// Creates a registration entry.
	pub const fn new(name: &'static str, factory: ComponentFactory) -> Self {
		Self { name, factory }
	}
}

inventory::collect!(ComponentRegistration);

/// Tag name to component mapping.
#[derive(Clone, Default)]
pub struct ComponentRegistry {
	components: HashMap<String, Arc<dyn Component>>,
}

impl ComponentRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a registry from every `ComponentRegistration` submitted in the
	/// process. Later submissions under the same name replace earlier ones.
	pub fn collected() -> Self {
		let mut registry = Self::new();
		for entry in inventory::iter::<ComponentRegistration> {
			registry.insert(entry.name, (entry.factory)());
		}
		registry
	}

	/// Registers a component under its own name.
	pub fn register(mut self, component: impl Component) -> Self {
		let component: Arc<dyn Component> = Arc::new(component);
		let name = component.name().to_string();
		self.insert(name, component);
		self
	}

	/// Registers a component under an explicit tag name.
	pub fn register_as(mut self, name: impl Into<String>, component: Arc<dyn Component>) -> Self {
		self.insert(name, component);
		self
	}

	/// Inserts a component, returning the one it replaced.
	pub fn insert(
		&mut self,
		name: impl Into<String>,
		component: Arc<dyn Component>,
	) -> Option<Arc<dyn Component>> {
		self.components.insert(name.into(), component)
	}

	/// Looks up a component by tag name.
	pub fn get(&self, name: &str) -> Option<&Arc<dyn Component>> {
		self.components.get(name)
	}

	/// Checks whether a tag name is registered.
	pub fn contains(&self, name: &str) -> bool {
		self.components.contains_key(name)
	}

	/// Returns the number of registered components.
	pub fn len(&self) -> usize {
		self.components.len()
	}

	/// Checks if the registry is empty.
	pub fn is_empty(&self) -> bool {
		self.components.is_empty()
	}

	/// Returns the registered tag names, sorted.
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.components.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}
}

impl std::fmt::Debug for ComponentRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ComponentRegistry")
			.field("components", &self.names())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use prerender_core::{RenderScope, Result, VNode};

	struct Label;

	impl Component for Label {
		fn name(&self) -> &str {
			"label"
		}

		fn render(&self, _scope: &RenderScope<'_>) -> Result<VNode> {
			Ok(VNode::text("label"))
		}
	}

	fn label() -> Label {
		Label
	}

	#[test]
	fn test_register_uses_component_name() {
		let registry = ComponentRegistry::new().register(label());
		assert!(registry.contains("label"));
		assert_eq!(registry.len(), 1);
	}

	#[test]
	fn test_register_as_alias() {
		let component: Arc<dyn Component> = Arc::new(label());
		let registry = ComponentRegistry::new()
			.register_as("x-label", component.clone())
			.register_as("label", component);
		assert_eq!(registry.names(), vec!["label", "x-label"]);
	}

	#[test]
	fn test_insert_replaces() {
		let mut registry = ComponentRegistry::new();
		assert!(registry.insert("label", Arc::new(label())).is_none());
		assert!(registry.insert("label", Arc::new(label())).is_some());
		assert_eq!(registry.len(), 1);
	}

	#[test]
	fn test_debug_lists_names() {
		let registry = ComponentRegistry::new().register(label());
		assert_eq!(format!("{:?}", registry), "ComponentRegistry { components: [\"label\"] }");
	}
}
