//! # Prerender Core
//!
//! The virtual node model consumed by the prerender serializer.
//!
//! - [`node`]: [`VNode`], [`Element`] and the [`IntoVNode`] conversion trait
//! - [`attr`]: loosely typed attribute values and inline style maps
//! - [`component`]: the [`Component`] contract, [`Props`] and [`RenderScope`]
//! - [`store`]: the [`Store`] threaded through a render pass
//!
//! Trees are plain data. Nothing here renders markup; see `prerender-ssr`.

pub mod attr;
pub mod component;
pub mod error;
pub mod node;
pub mod store;

pub use attr::{AttrValue, Attributes, EventHandler, StyleMap, StyleValue, style};
pub use component::{Component, ComponentData, FnComponent, Props, RenderScope, resolve};
pub use error::{ComponentError, Result};
pub use node::{Element, IntoVNode, Tag, VNode};
pub use store::Store;
