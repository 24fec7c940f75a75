//! Landing screen shown behind (and instead of) the panel

use egui::{Align, Layout, RichText};

use super::theme;
use crate::shell::{Shell, APP_NAME, TAGLINE};

/// Draw the backdrop; returns true when "Launch Tool" was clicked
pub fn draw(ctx: &egui::Context, shell: &Shell) -> bool {
    let mut launch = false;

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(theme::BACKDROP_DIM))
        .show(ctx, |ui| {
            if shell.is_panel_visible() {
                return;
            }

            let top_space = (ui.available_height() / 2.0 - 90.0).max(0.0);
            ui.add_space(top_space);
            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.label(RichText::new(APP_NAME).size(48.0).strong().color(theme::ACCENT));
                ui.add_space(8.0);
                ui.label(RichText::new(TAGLINE).color(theme::TEXT));
                ui.add_space(24.0);

                let button = egui::Button::new(
                    RichText::new("Launch Tool").strong().color(egui::Color32::BLACK),
                )
                .fill(theme::ACCENT)
                .min_size(egui::vec2(160.0, 40.0));

                if ui.add(button).clicked() {
                    launch = true;
                }
            });
        });

    launch
}
