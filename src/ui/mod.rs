//! User Interface layer
//!
//! This module contains all UI-related code:
//! - Light and dark palettes
//! - Reusable widgets (popups, menu overlay, toast, badges)
//! - Tab views and the main render entry point

pub mod theme;
pub mod render;
pub mod widgets;

pub use theme::Theme;
pub use render::{max_scroll, render};
