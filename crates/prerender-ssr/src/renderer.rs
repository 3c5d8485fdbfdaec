//! String renderer for virtual node trees.
//!
//! Rendering is a single synchronous, depth-first pass. Every element is
//! serialized from the inside out: the opening tag with its attributes, then
//! either raw inner markup or the rendered children, then the closing tag.
//! Components are resolved on the way down and their output is serialized in
//! their place.
//!
//! # Example
//!
//! ```
//! use prerender_core::{Element, IntoVNode};
//! use prerender_ssr::render_to_string;
//!
//! let node = Element::new("p")
//!     .attr("className", "lead")
//!     .child("Fish & chips")
//!     .into_vnode();
//!
//! assert_eq!(
//!     render_to_string(&node).unwrap(),
//!     "<p class=\"lead\">Fish &amp; chips</p>"
//! );
//! ```

use crate::attributes::{AttributeContext, emit_attributes};
use crate::error::{RenderError, Result};
use crate::escape::encode_entities;
use crate::indent::{indent_block, is_large, normalize_attribute_newlines};
use crate::options::RenderOptions;
use crate::util::{has_unsafe_chars, is_void_element};
use prerender_core::attr::format_number;
use prerender_core::{Component, Element, Props, Store, Tag, VNode};
use std::sync::Arc;

/// Renders trees with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct StringRenderer {
	options: RenderOptions,
}

impl StringRenderer {
	/// Creates a renderer with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a renderer with custom options.
	pub fn with_options(options: RenderOptions) -> Self {
		Self { options }
	}

	/// Returns the options.
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Renders a tree with a fresh, empty store.
	pub fn render(&self, node: &VNode) -> Result<String> {
		self.render_with_store(node, &Store::new())
	}

	/// Renders a tree, handing `store` to every component and attribute hook.
	pub fn render_with_store(&self, node: &VNode, store: &Store) -> Result<String> {
		let pass = RenderPass {
			options: &self.options,
			store,
			indent_unit: self.options.pretty.indent_unit(),
		};
		pass.render_node(node, false)
	}
}

/// Renders a tree with default options and an empty store.
pub fn render_to_string(node: &VNode) -> Result<String> {
	render(node, &Store::new(), &RenderOptions::default())
}

/// Renders a tree with default options and the given store.
pub fn render_with_store(node: &VNode, store: &Store) -> Result<String> {
	render(node, store, &RenderOptions::default())
}

/// Renders a tree with the given store and options.
pub fn render(node: &VNode, store: &Store, options: &RenderOptions) -> Result<String> {
	let pass = RenderPass {
		options,
		store,
		indent_unit: options.pretty.indent_unit(),
	};
	pass.render_node(node, false)
}

/// State shared by every node of one render call.
struct RenderPass<'a> {
	options: &'a RenderOptions,
	store: &'a Store,
	indent_unit: Option<&'a str>,
}

impl RenderPass<'_> {
	fn render_node(&self, node: &VNode, svg_mode: bool) -> Result<String> {
		match node {
			VNode::Null | VNode::Bool(_) => Ok(String::new()),
			VNode::Text(text) => Ok(encode_entities(text).into_owned()),
			VNode::Number(n) => Ok(encode_entities(&format_number(*n)).into_owned()),
			VNode::Element(element) => match self.component_for(element.tag()) {
				Some(component) => self.render_component(component.as_ref(), element),
				None => self.render_element(element, svg_mode),
			},
		}
	}

	fn component_for<'t>(&'t self, tag: &'t Tag) -> Option<&'t Arc<dyn Component>> {
		match tag {
			Tag::Component(component) => Some(component),
			Tag::Name(name) => self.options.registry.get(name),
		}
	}

	/// Resolves a component and renders its output as a fresh root: the SVG
	/// context does not cross the component boundary.
	fn render_component(&self, component: &dyn Component, element: &Element) -> Result<String> {
		tracing::debug!(
			tag = element.tag_name(),
			component = component.name(),
			"resolving component"
		);
		let props = Props::for_node(element, component.default_props());
		let rendered = prerender_core::resolve(component, props, self.store)?;
		self.render_node(&rendered, false)
	}

	fn render_element(&self, element: &Element, svg_mode: bool) -> Result<String> {
		let name = element.tag_name();
		let emitted = emit_attributes(
			element.attrs(),
			AttributeContext {
				options: self.options,
				store: self.store,
				svg_mode,
				is_component: false,
			},
		);

		let mut attrs = emitted.markup;
		if self.indent_unit.is_some() {
			attrs = normalize_attribute_newlines(attrs);
		}

		let mut s = format!("<{name}{attrs}>");
		if has_unsafe_chars(name) {
			tracing::debug!(fragment = %s, "invalid tag name");
			return Err(RenderError::InvalidTagName { fragment: s });
		}

		if is_void_element(name) {
			s.pop();
			s.push_str(" />");
			return Ok(s);
		}

		let inner_html = emitted.inner_html.filter(|html| !html.is_empty());
		let mut pieces = Vec::new();
		if let Some(html) = &inner_html {
			match self.indent_unit {
				Some(unit) if is_large(html) => s.push_str(&indent_block(html, unit)),
				_ => s.push_str(html),
			}
		} else {
			let child_svg_mode = match name {
				"svg" => true,
				"foreignObject" => false,
				_ => svg_mode,
			};
			let mut has_large = self.indent_unit.is_some() && s.contains('\n');
			for child in element.child_nodes() {
				if matches!(child, VNode::Null | VNode::Bool(false)) {
					continue;
				}
				let rendered = self.render_node(child, child_svg_mode)?;
				if self.indent_unit.is_some() && !has_large && is_large(&rendered) {
					has_large = true;
				}
				if !rendered.is_empty() {
					pieces.push(rendered);
				}
			}
			if let Some(unit) = self.indent_unit
				&& has_large
			{
				for piece in &mut pieces {
					*piece = indent_block(piece, unit);
				}
			}
		}

		if !pieces.is_empty() {
			s.extend(pieces);
		} else if self.options.xml && inner_html.is_none() {
			tracing::trace!(tag = name, "self-closing empty element");
			s.pop();
			s.push_str(" />");
			return Ok(s);
		}

		if self.indent_unit.is_some() && s.contains('\n') {
			s.push('\n');
		}
		s.push_str("</");
		s.push_str(name);
		s.push('>');
		Ok(s)
	}
}
