//! # Prerender SSR
//!
//! Serializes [`VNode`](prerender_core::VNode) trees to HTML or XML strings.
//!
//! ## Features
//!
//! - **Entity encoding**: text and attribute values are escaped, raw markup is
//!   only emitted through `dangerouslySetInnerHTML`
//! - **Component resolution**: component nodes are resolved through the
//!   [`Component`](prerender_core::Component) lifecycle, by handle or by tag
//!   name through a [`ComponentRegistry`]
//! - **Pretty printing**: optional indentation of multi-line or long content
//! - **XML mode**: self-closing empty elements and valued boolean attributes
//! - **Attribute hook**: per-attribute formatting override
//!
//! ## Example
//!
//! ```
//! use prerender_core::{Element, IntoVNode};
//! use prerender_ssr::{RenderOptions, StringRenderer};
//!
//! let tree = Element::new("label")
//!     .attr("for", "name")
//!     .attr("hidden", true)
//!     .child("Name")
//!     .into_vnode();
//!
//! let renderer = StringRenderer::with_options(RenderOptions::new().xml(true));
//! assert_eq!(
//!     renderer.render(&tree).unwrap(),
//!     "<label for=\"name\" hidden=\"hidden\">Name</label>"
//! );
//! ```

pub mod attributes;
pub mod error;
pub mod escape;
pub mod indent;
pub mod options;
pub mod registry;
pub mod renderer;
pub mod style;
pub mod util;

pub use attributes::{AttributeContext, EmittedAttributes, INNER_HTML_ATTR, emit_attributes};
pub use error::{RenderError, Result};
pub use escape::encode_entities;
pub use options::{AttributeHook, Pretty, PrettySetting, RenderOptions, RenderSettings};
pub use registry::{ComponentFactory, ComponentRegistration, ComponentRegistry};
pub use renderer::{StringRenderer, render, render_to_string, render_with_store};
pub use style::style_to_css;
pub use util::{VOID_ELEMENTS, is_void_element};
