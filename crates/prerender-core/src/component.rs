//! Component contract.
//!
//! A component turns props and the render store into another [`VNode`]. It is
//! resolved once per occurrence in the tree: the renderer computes [`Props`],
//! opens a [`RenderScope`], runs the lifecycle hooks in order
//! (`install`, `before_render`, `render`) and drops the scope. Nothing
//! survives the call, so a component never schedules a re-render.
//!
//! # Example
//!
//! ```
//! use prerender_core::component::{Component, RenderScope};
//! use prerender_core::node::{Element, IntoVNode, VNode};
//! use prerender_core::Result;
//!
//! struct Greeting;
//!
//! impl Component for Greeting {
//!     fn name(&self) -> &str {
//!         "greeting"
//!     }
//!
//!     fn render(&self, scope: &RenderScope<'_>) -> Result<VNode> {
//!         let who = scope.props().get_str("name").unwrap_or("world");
//!         Ok(Element::new("p").child(format!("Hello, {who}!")).into_vnode())
//!     }
//! }
//! ```

use crate::attr::{AttrValue, Attributes};
use crate::error::Result;
use crate::node::{Element, VNode};
use crate::store::Store;

/// Per-resolution data that lifecycle hooks may fill before rendering.
pub type ComponentData = serde_json::Map<String, serde_json::Value>;

/// Trait for components resolvable by the renderer.
pub trait Component: Send + Sync + 'static {
	/// Returns the component's name for registry lookup and diagnostics.
	fn name(&self) -> &str;

	/// Props filled in when the node does not supply them.
	fn default_props(&self) -> Attributes {
		Attributes::new()
	}

	/// Called first, once per resolution.
	fn install(&self, _scope: &mut RenderScope<'_>) -> Result<()> {
		Ok(())
	}

	/// Called after `install`, right before `render`.
	fn before_render(&self, _scope: &mut RenderScope<'_>) -> Result<()> {
		Ok(())
	}

	/// Produces the node rendered in place of the component.
	fn render(&self, scope: &RenderScope<'_>) -> Result<VNode>;
}

/// Props handed to a component.
#[derive(Debug, Clone, Default)]
pub struct Props {
	attrs: Attributes,
	children: Vec<VNode>,
}

impl Props {
	/// Creates props from attributes and children.
	pub fn new(attrs: Attributes, children: Vec<VNode>) -> Self {
		Self { attrs, children }
	}

	/// Computes the props for a component node.
	///
	/// Attributes are copied shallowly, the node's children replace any
	/// `children` attribute, and each default is used only for a key the node
	/// did not set.
	pub fn for_node(element: &Element, defaults: Attributes) -> Self {
		let mut attrs = element.attrs().clone();
		attrs.shift_remove("children");
		for (key, value) in defaults {
			if key != "children" && !attrs.contains_key(&key) {
				attrs.insert(key, value);
			}
		}
		Self {
			attrs,
			children: element.child_nodes().to_vec(),
		}
	}

	/// Returns a prop value.
	pub fn get(&self, key: &str) -> Option<&AttrValue> {
		self.attrs.get(key)
	}

	/// Returns a string prop.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(AttrValue::as_str)
	}

	/// Returns all props except children.
	pub fn attrs(&self) -> &Attributes {
		&self.attrs
	}

	/// Returns the children passed to the component.
	pub fn children(&self) -> &[VNode] {
		&self.children
	}
}

/// Everything a component sees during one resolution.
pub struct RenderScope<'a> {
	props: Props,
	data: ComponentData,
	store: &'a Store,
}

impl<'a> RenderScope<'a> {
	/// Opens a scope with empty component data.
	pub fn new(props: Props, store: &'a Store) -> Self {
		Self {
			props,
			data: ComponentData::new(),
			store,
		}
	}

	/// Returns the props.
	pub fn props(&self) -> &Props {
		&self.props
	}

	/// Returns mutable props.
	pub fn props_mut(&mut self) -> &mut Props {
		&mut self.props
	}

	/// Returns the component data.
	pub fn data(&self) -> &ComponentData {
		&self.data
	}

	/// Returns mutable component data.
	pub fn data_mut(&mut self) -> &mut ComponentData {
		&mut self.data
	}

	/// Returns the render store.
	pub fn store(&self) -> &'a Store {
		self.store
	}
}

/// Runs a component's lifecycle against `props` and returns its output.
pub fn resolve(component: &dyn Component, props: Props, store: &Store) -> Result<VNode> {
	let mut scope = RenderScope::new(props, store);
	component.install(&mut scope)?;
	component.before_render(&mut scope)?;
	component.render(&scope)
}

/// A component backed by a closure.
///
/// ```
/// use prerender_core::component::{Component, FnComponent};
/// use prerender_core::node::{Element, IntoVNode};
///
/// let badge = FnComponent::new("badge", |props, _store| {
///     Ok(Element::new("span").child(props.get_str("label").unwrap_or("").to_string()).into_vnode())
/// })
/// .with_default("label", "new");
///
/// assert_eq!(badge.name(), "badge");
/// ```
pub struct FnComponent<F> {
	name: String,
	defaults: Attributes,
	render: F,
}

impl<F> FnComponent<F>
where
	F: Fn(&Props, &Store) -> Result<VNode> + Send + Sync + 'static,
{
	/// Creates a component from a render closure.
	pub fn new(name: impl Into<String>, render: F) -> Self {
		Self {
			name: name.into(),
			defaults: Attributes::new(),
			render,
		}
	}

	/// Adds a default prop.
	pub fn with_default(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.defaults.insert(key.into(), value.into());
		self
	}
}

impl<F> Component for FnComponent<F>
where
	F: Fn(&Props, &Store) -> Result<VNode> + Send + Sync + 'static,
{
	fn name(&self) -> &str {
		&self.name
	}

	fn default_props(&self) -> Attributes {
		self.defaults.clone()
	}

	fn render(&self, scope: &RenderScope<'_>) -> Result<VNode> {
		(self.render)(scope.props(), scope.store())
	}
}

impl<F> std::fmt::Debug for FnComponent<F> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FnComponent")
			.field("name", &self.name)
			.field("defaults", &self.defaults)
			.finish()
	}
}
