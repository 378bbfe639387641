//! Color Constants
//!
//! Palette for the route planner: slate panels, sand cards and a pine accent.

use eframe::egui::Color32;

/// Main background - Dark slate
pub const BG_DARK: Color32 = Color32::from_rgb(0x1F, 0x2A, 0x2E);

/// Top bar background - Darker slate
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x16, 0x1F, 0x22);

/// Card background - Slate
pub const CARD_BG: Color32 = Color32::from_rgb(0x2B, 0x3A, 0x3F);

/// Card border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0x3E, 0x52, 0x58);

/// Hovered widgets
pub const HOVER_ITEM: Color32 = Color32::from_rgb(0x38, 0x4C, 0x52);

/// Input background
pub const INPUT_BG: Color32 = Color32::from_rgb(0x24, 0x31, 0x35);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xEE, 0xE8, 0xDC);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9B, 0xA8, 0xA6);

/// Accent color - Pine
pub const ACCENT: Color32 = Color32::from_rgb(0x3E, 0x8E, 0x6A);

/// Menu entry of the active screen
pub const MENU_ACTIVE: Color32 = Color32::from_rgb(0x2E, 0x6B, 0x50);

/// Chips for picked categories and places - Sand
pub const CHIP: Color32 = Color32::from_rgb(0xC9, 0xB2, 0x86);

/// Chip text
pub const CHIP_TEXT: Color32 = Color32::from_rgb(0x1F, 0x2A, 0x2E);

/// Favourite star
pub const FAVOURITE: Color32 = Color32::from_rgb(0xF2, 0xC1, 0x4E);

/// Statistic bars
pub const BAR: Color32 = Color32::from_rgb(0x5F, 0xA8, 0x86);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
