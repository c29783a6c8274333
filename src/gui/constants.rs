//! GUI-specific constants for layout, field styling and status colors

use egui;

/// Generator window dimensions
pub const WINDOW_WIDTH: f32 = 520.0;
pub const WINDOW_HEIGHT: f32 = 760.0;
pub const WINDOW_MIN_WIDTH: f32 = 440.0;
pub const WINDOW_MIN_HEIGHT: f32 = 620.0;

/// Layout spacing
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Edge the rendered QR image is displayed at, in points
pub const QR_DISPLAY_SIZE: f32 = 320.0;

/// Field text colors: muted while a field still shows its default value,
/// full-strength once the user has edited it
pub const TEXT_DEFAULT: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);
pub const TEXT_EDITED: egui::Color32 = egui::Color32::WHITE;

/// Status line colors
pub const STATUS_OK: egui::Color32 = egui::Color32::from_rgb(0, 200, 0);
pub const STATUS_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);

/// Accent for the derived-URL preview text
pub const URL_PREVIEW: egui::Color32 = egui::Color32::from_rgb(129, 140, 248);
