//! Virtual node types.
//!
//! A [`VNode`] is the intermediate representation produced by a component
//! layer before it is turned into markup. Trees are built with [`Element`]'s
//! builder methods and anything implementing [`IntoVNode`].
//!
//! ## Example
//!
//! ```
//! use prerender_core::node::{Element, IntoVNode, VNode};
//!
//! let node = Element::new("div")
//!     .attr("className", "container")
//!     .child("Hello, World!")
//!     .into_vnode();
//!
//! assert!(matches!(node, VNode::Element(_)));
//! ```

use crate::attr::{AttrValue, Attributes, EventHandler, StyleMap};
use crate::component::Component;
use std::borrow::Cow;
use std::sync::Arc;

/// A node of the virtual tree.
#[derive(Debug, Clone)]
pub enum VNode {
	/// Renders nothing.
	Null,
	/// Renders nothing. Used for conditional rendering.
	Bool(bool),
	/// A text node, entity-encoded on output.
	Text(Cow<'static, str>),
	/// A numeric text node.
	Number(f64),
	/// An element or a component reference.
	Element(Element),
}

impl VNode {
	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates an element builder.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> Element {
		Element::new(tag)
	}

	/// Returns `true` for placeholders that render to nothing.
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Null | Self::Bool(_))
	}

	/// Returns the element, if this node is one.
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Self::Element(el) => Some(el),
			_ => None,
		}
	}
}

/// What an element's tag refers to.
#[derive(Clone)]
pub enum Tag {
	/// An intrinsic tag name, or a name registered as a component.
	Name(Cow<'static, str>),
	/// A component handle resolved while the tree was built.
	Component(Arc<dyn Component>),
}

impl Tag {
	/// Returns the tag name, or the component's name for a handle.
	pub fn name(&self) -> &str {
		match self {
			Self::Name(name) => name,
			Self::Component(component) => component.name(),
		}
	}
}

impl std::fmt::Debug for Tag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Name(name) => f.debug_tuple("Name").field(name).finish(),
			Self::Component(component) => f.debug_tuple("Component").field(&component.name()).finish(),
		}
	}
}

/// An element in the virtual tree.
#[derive(Debug, Clone)]
pub struct Element {
	tag: Tag,
	attrs: Attributes,
	children: Vec<VNode>,
}

impl Element {
	/// Creates a new element with a tag name.
	///
	/// The tag name must not be empty. Debug builds panic on an empty name.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		debug_assert!(!tag.is_empty(), "element tag name must not be empty");
		Self::with_tag(Tag::Name(tag))
	}

	/// Creates an element that refers directly to a component.
	pub fn component(component: Arc<dyn Component>) -> Self {
		Self::with_tag(Tag::Component(component))
	}

	fn with_tag(tag: Tag) -> Self {
		Self {
			tag,
			attrs: Attributes::new(),
			children: Vec::new(),
		}
	}

	/// Sets an attribute. A later call with the same name replaces the value
	/// but keeps its original position.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.attrs.insert(name.into(), value.into());
		self
	}

	/// Sets an inline style object.
	pub fn style(self, style: StyleMap) -> Self {
		self.attr("style", AttrValue::Style(style))
	}

	/// Sets raw inner markup. Children are ignored when this is present.
	pub fn inner_html(self, html: impl Into<String>) -> Self {
		self.attr("dangerouslySetInnerHTML", AttrValue::InnerHtml(html.into()))
	}

	/// Attaches an event handler under `name` (e.g. `onClick`).
	pub fn on(self, name: impl Into<String>, handler: EventHandler) -> Self {
		self.attr(name, AttrValue::Handler(handler))
	}

	/// Adds a child node.
	pub fn child(mut self, child: impl IntoVNode) -> Self {
		self.children.push(child.into_vnode());
		self
	}

	/// Adds multiple child nodes.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoVNode>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_vnode()));
		self
	}

	/// Returns the tag.
	pub fn tag(&self) -> &Tag {
		&self.tag
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		self.tag.name()
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &Attributes {
		&self.attrs
	}

	/// Returns the child nodes.
	pub fn child_nodes(&self) -> &[VNode] {
		&self.children
	}

	/// Sets an attribute mutably (for builders that own the element).
	pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
		self.attrs.insert(name.into(), value.into());
	}

	/// Adds a child mutably.
	pub fn push_child(&mut self, child: impl IntoVNode) {
		self.children.push(child.into_vnode());
	}

	/// Consumes the element and returns `(tag, attrs, children)`.
	pub fn into_parts(self) -> (Tag, Attributes, Vec<VNode>) {
		(self.tag, self.attrs, self.children)
	}
}

/// Trait for types that can be converted into a [`VNode`].
pub trait IntoVNode {
	/// Converts self into a node.
	fn into_vnode(self) -> VNode;
}

impl IntoVNode for VNode {
	fn into_vnode(self) -> VNode {
		self
	}
}

impl IntoVNode for Element {
	fn into_vnode(self) -> VNode {
		VNode::Element(self)
	}
}

impl IntoVNode for String {
	fn into_vnode(self) -> VNode {
		VNode::Text(Cow::Owned(self))
	}
}

impl IntoVNode for &String {
	fn into_vnode(self) -> VNode {
		VNode::Text(Cow::Owned(self.clone()))
	}
}

impl IntoVNode for &'static str {
	fn into_vnode(self) -> VNode {
		VNode::Text(Cow::Borrowed(self))
	}
}

impl IntoVNode for bool {
	fn into_vnode(self) -> VNode {
		VNode::Bool(self)
	}
}

impl IntoVNode for () {
	fn into_vnode(self) -> VNode {
		VNode::Null
	}
}

impl<T: IntoVNode> IntoVNode for Option<T> {
	fn into_vnode(self) -> VNode {
		match self {
			Some(v) => v.into_vnode(),
			None => VNode::Null,
		}
	}
}

macro_rules! number_into_vnode {
	($($ty:ty),*) => {
		$(
			impl IntoVNode for $ty {
				fn into_vnode(self) -> VNode {
					VNode::Number(self as f64)
				}
			}
		)*
	};
}

number_into_vnode!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

impl From<Element> for VNode {
	fn from(value: Element) -> Self {
		VNode::Element(value)
	}
}

impl From<String> for VNode {
	fn from(value: String) -> Self {
		VNode::Text(Cow::Owned(value))
	}
}

impl From<&'static str> for VNode {
	fn from(value: &'static str) -> Self {
		VNode::Text(Cow::Borrowed(value))
	}
}
