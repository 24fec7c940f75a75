//! Colors and sizes shared by the views

use egui::Color32;

use crate::injector::LineKind;

pub const ACCENT: Color32 = Color32::from_rgb(74, 222, 128);
pub const ACCENT_DIM: Color32 = Color32::from_rgba_premultiplied(37, 111, 64, 128);
pub const BUTTON: Color32 = Color32::from_rgb(22, 163, 74);
pub const FROZEN: Color32 = Color32::from_rgb(96, 165, 250);
pub const WARNING: Color32 = Color32::from_rgb(250, 204, 21);
pub const TEXT: Color32 = Color32::from_rgb(209, 213, 219);
pub const MUTED: Color32 = Color32::from_rgb(156, 163, 175);
pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(14, 19, 31, 204);
pub const HEADER_BG: Color32 = Color32::from_rgb(17, 24, 39);
pub const ROW_BG: Color32 = Color32::from_rgb(31, 41, 55);
pub const CONSOLE_BG: Color32 = Color32::BLACK;
pub const BACKDROP_DIM: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 153);

pub const HEADER_HEIGHT: f32 = 30.0;
pub const TAB_HEIGHT: f32 = 36.0;

/// Console color for a log line
pub fn line_color(kind: LineKind) -> Color32 {
    match kind {
        LineKind::Success => ACCENT,
        LineKind::Warning => WARNING,
        LineKind::Plain => TEXT,
    }
}
