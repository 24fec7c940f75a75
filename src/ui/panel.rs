//! The floating panel: header, tab strip and active view

use egui::{Align2, FontId, Rect, RichText, Sense};

use super::{theme, to_pos, to_vec2};
use crate::panel::{FloatingPanel, Tab, TabContent, PANEL_TITLE};

/// Draw the panel; returns true when the close button was clicked
pub fn draw(ctx: &egui::Context, panel: &mut FloatingPanel) -> bool {
    let size = panel.size();
    let mut closed = false;
    let mut selected_tab = None;

    egui::Area::new(egui::Id::new("ghx_floating_panel"))
        .fixed_pos(to_pos(panel.position()))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(theme::PANEL_BG)
                .stroke(egui::Stroke::new(1.0, theme::ACCENT_DIM))
                .rounding(8.0)
                .show(ui, |ui| {
                    ui.set_width(size.width);
                    ui.set_height(size.height);
                    ui.spacing_mut().item_spacing.y = 0.0;

                    closed = header(ui, panel);
                    selected_tab = tab_strip(ui, panel.active_tab(), size.width);

                    ui.spacing_mut().item_spacing.y = 4.0;
                    egui::Frame::none().inner_margin(16.0).show(ui, |ui| {
                        match panel.content_mut() {
                            TabContent::Scanner(view) => super::scanner::draw(ui, view),
                            TabContent::Injector(view) => super::injector::draw(ui, view),
                        }
                    });
                });
        });

    if let Some(tab) = selected_tab {
        panel.select_tab(tab);
    }

    closed
}

/// Title bar; pressing anywhere but the close button starts a drag
fn header(ui: &mut egui::Ui, panel: &mut FloatingPanel) -> bool {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), theme::HEADER_HEIGHT),
        Sense::hover(),
    );

    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, theme::HEADER_BG);
    painter.text(
        rect.left_center() + egui::vec2(8.0, 0.0),
        Align2::LEFT_CENTER,
        PANEL_TITLE,
        FontId::monospace(13.0),
        theme::ACCENT,
    );

    let close_rect = Rect::from_center_size(
        rect.right_center() - egui::vec2(16.0, 0.0),
        egui::vec2(22.0, 22.0),
    );

    let drag = ui.interact(rect, ui.id().with("panel_header"), Sense::drag());
    let close = ui.put(
        close_rect,
        egui::Button::new(RichText::new("✕").color(theme::ACCENT)).frame(false),
    );

    if drag.drag_started() {
        if let Some(origin) = ui.input(|i| i.pointer.press_origin()) {
            panel.pointer_down(to_vec2(origin), close_rect.contains(origin));
        }
    }

    close.clicked()
}

/// Row of tab buttons; returns the tab clicked this frame
fn tab_strip(ui: &mut egui::Ui, active: Tab, width: f32) -> Option<Tab> {
    let mut clicked = None;
    let tab_width = width / Tab::ALL.len() as f32;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for tab in Tab::ALL {
            let is_active = tab == active;
            let (fill, text) = if is_active {
                (theme::ACCENT, egui::Color32::BLACK)
            } else {
                (theme::ROW_BG, theme::TEXT)
            };
            let button = egui::Button::new(RichText::new(tab.label()).color(text))
                .fill(fill)
                .rounding(0.0)
                .min_size(egui::vec2(tab_width, theme::TAB_HEIGHT));
            if ui.add(button).clicked() {
                clicked = Some(tab);
            }
        }
    });

    clicked
}
