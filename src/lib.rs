//! # Prerender
//!
//! Server-side rendering of virtual DOM trees to HTML or XML strings.
//!
//! A tree of [`VNode`]s is serialized in one synchronous pass. Components in
//! the tree are resolved on the way, and their output is serialized in place.
//! Nothing is mounted, diffed or hydrated.
//!
//! ## Feature Flags
//!
//! - `ssr` (default) - the string renderer, component registry and render
//!   settings
//!
//! ## Quick Example
//!
//! ```
//! use prerender::prelude::*;
//!
//! let page = Element::new("main")
//!     .child(Element::new("h1").child("Hello"))
//!     .child(Element::new("img").attr("src", "/logo.png").attr("alt", ""))
//!     .into_vnode();
//!
//! assert_eq!(
//!     render_to_string(&page).unwrap(),
//!     "<main><h1>Hello</h1><img src=\"/logo.png\" alt /></main>"
//! );
//! ```

pub use prerender_core as core;
#[cfg(feature = "ssr")]
pub use prerender_ssr as ssr;

pub use prerender_core::{
	AttrValue, Attributes, Component, ComponentError, Element, FnComponent, IntoVNode, Props,
	RenderScope, Store, StyleMap, StyleValue, Tag, VNode, style,
};

#[cfg(feature = "ssr")]
pub use prerender_ssr::{
	ComponentRegistration, ComponentRegistry, Pretty, RenderError, RenderOptions, RenderSettings,
	StringRenderer, render, render_to_string, render_with_store,
};

/// Common imports for building and rendering trees.
pub mod prelude {
	pub use crate::{
		AttrValue, Component, Element, FnComponent, IntoVNode, Props, RenderScope, Store, VNode,
		style,
	};

	#[cfg(feature = "ssr")]
	pub use crate::{
		ComponentRegistry, Pretty, RenderError, RenderOptions, StringRenderer, render,
		render_to_string, render_with_store,
	};
}
