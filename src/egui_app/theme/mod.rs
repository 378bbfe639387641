//! Theme Module
//!
//! Color scheme and styling for the route planner:
//!
//! - Color constants for the slate/pine theme
//! - Frame builders for pages and cards
//! - Small widgets (chips, headings) shared by the screens
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_SECONDARY, "Card content");
//! });
//! ```

pub mod colors;
pub mod styles;
