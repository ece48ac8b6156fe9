//! Reference host pieces: a concrete item, a layout, a text renderer.
//!
//! The engine in [`crate::app`] is rendering-agnostic. This module supplies
//! the minimum a host needs to exercise it without a display surface:
//!
//! - [`item`]: [`ListItem`], a row with grab/delete strips
//! - [`layout`]: [`StackLayout`], vertical reflow and scroll offset
//! - [`renderer`]: text/ANSI rendering of the render order
//! - [`theme`]: color palettes for the renderer
//! - [`viewmodel`]: [`RenderSlot`], the render order the engine exposes

pub mod item;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use item::ListItem;
pub use layout::StackLayout;
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::RenderSlot;
