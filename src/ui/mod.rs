//! UI module - egui drawing for the shell, panel and tab views
//!
//! All state lives in [`crate::shell`] and below; these functions only read
//! it, draw it, and turn clicks into calls on it.

pub mod injector;
pub mod landing;
pub mod panel;
pub mod scanner;
pub mod theme;

use std::time::Duration;

use crate::shell::Shell;

/// Draw one frame of the whole app
pub fn draw(ctx: &egui::Context, shell: &mut Shell) {
    let viewport = to_vec2(ctx.screen_rect().size().to_pos2());

    if landing::draw(ctx, shell) {
        shell.launch(viewport);
    }

    let mut closed = false;
    if let Some(floating) = shell.panel_mut() {
        closed = panel::draw(ctx, floating);
        track_drag(ctx, floating);
    }
    if closed {
        shell.close();
    }

    if shell.is_busy() {
        ctx.request_repaint_after(Duration::from_millis(50));
    }
}

/// Feed global pointer motion into an in-progress panel drag
fn track_drag(ctx: &egui::Context, floating: &mut crate::panel::FloatingPanel) {
    if !floating.is_dragging() {
        return;
    }

    let (latest, down) = ctx.input(|i| (i.pointer.latest_pos(), i.pointer.primary_down()));
    if let Some(pos) = latest {
        floating.pointer_move(to_vec2(pos));
    }
    if !down {
        floating.pointer_up();
    }
}

pub(crate) fn to_pos(v: glam::Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

pub(crate) fn to_vec2(p: egui::Pos2) -> glam::Vec2 {
    glam::Vec2::new(p.x, p.y)
}
