//! Scanner tab

use std::time::Instant;

use egui::{Align, Layout, RichText, Sense};

use super::theme;
use crate::core::types::{group_thousands, ResultId};
use crate::scanner::{ScanResult, ScannerView};

pub fn draw(ui: &mut egui::Ui, view: &mut ScannerView) {
    let scanning = view.is_scanning();

    ui.horizontal(|ui| {
        let input_width = (ui.available_width() - 100.0).max(80.0);
        ui.add_enabled(
            !scanning,
            egui::TextEdit::singleline(&mut view.search_input)
                .hint_text("Enter value...")
                .desired_width(input_width),
        );

        let label = if scanning { "Scanning..." } else { "Scan" };
        let button = egui::Button::new(label).fill(theme::BUTTON);
        if ui.add_enabled(!scanning, button).clicked() {
            view.scan();
        }
    });

    ui.add_space(12.0);

    if scanning {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.spinner();
            ui.label(RichText::new("Scanning memory...").color(theme::ACCENT));
        });
        return;
    }

    if view.results().is_empty() {
        return;
    }

    ui.label(
        RichText::new(format!("{} results found.", view.results().len()))
            .small()
            .color(theme::MUTED),
    );

    let results = view.results().to_vec();
    egui::ScrollArea::vertical().show(ui, |ui| {
        for result in &results {
            if result_row(ui, result, view.is_frozen(result.id), view.selected() == Some(result.id)) {
                view.select(result.id);
            }
            if view.selected() == Some(result.id) {
                editor(ui, view, result);
            }
            ui.add_space(4.0);
        }
    });
}

/// One result line; returns true when clicked
fn result_row(ui: &mut egui::Ui, result: &ScanResult, frozen: bool, selected: bool) -> bool {
    let stroke = if selected {
        egui::Stroke::new(1.0, theme::ACCENT)
    } else {
        egui::Stroke::NONE
    };

    let value_text = if frozen {
        format!("{} (Frozen)", group_thousands(result.value))
    } else {
        group_thousands(result.value)
    };
    let value_color = if frozen { theme::FROZEN } else { theme::ACCENT };

    let frame = egui::Frame::none()
        .fill(theme::ROW_BG)
        .stroke(stroke)
        .rounding(4.0)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&result.address).monospace().color(theme::MUTED));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(value_text).monospace().strong().color(value_color));
                });
            });
        });

    ui.interact(frame.response.rect, ui.id().with(("row", result.id.0)), Sense::click())
        .clicked()
}

fn editor(ui: &mut egui::Ui, view: &mut ScannerView, result: &ScanResult) {
    let frozen = view.is_frozen(result.id);
    let mut save = false;
    let mut freeze = false;

    egui::Frame::none()
        .fill(theme::ROW_BG)
        .stroke(egui::Stroke::new(1.0, theme::ACCENT_DIM))
        .rounding(4.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!("Address: {}", result.address))
                    .monospace()
                    .small()
                    .color(theme::MUTED),
            );

            ui.horizontal(|ui| {
                if let Some(editor) = view.editor_mut() {
                    let width = (ui.available_width() - 110.0).max(60.0);
                    ui.add(egui::TextEdit::singleline(&mut editor.buffer).desired_width(width));
                }
                if ui.add(egui::Button::new("Save").fill(theme::BUTTON)).clicked() {
                    save = true;
                }
                let freeze_fill = if frozen { theme::FROZEN } else { theme::ROW_BG };
                if ui.add(egui::Button::new("Freeze").fill(freeze_fill)).clicked() {
                    freeze = true;
                }
            });

            if let Some(message) = view.editor().and_then(|e| e.flash(Instant::now())) {
                ui.label(RichText::new(message).small().color(theme::ACCENT));
            }
        });

    if save {
        view.save_editor(Instant::now());
    }
    if freeze {
        toggle(view, result.id);
    }
}

fn toggle(view: &mut ScannerView, id: ResultId) {
    view.toggle_freeze(id);
    tracing::debug!(%id, frozen = view.is_frozen(id), "freeze toggled");
}
