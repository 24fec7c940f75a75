//! Currency tabs

use egui::RichText;

use super::theme;
use crate::injector::{Currency, InjectorView, LineKind};

pub fn draw(ui: &mut egui::Ui, view: &mut InjectorView) {
    let currency = view.currency();
    let generating = view.is_generating();

    ui.vertical_centered(|ui| {
        let icon = match currency {
            Currency::Robux => "📦",
            Currency::Diamonds => "💎",
        };
        ui.label(RichText::new(icon).size(40.0).color(theme::ACCENT));
        ui.label(RichText::new(currency.title()).size(20.0).strong().color(theme::ACCENT));
    });

    ui.add_space(12.0);

    ui.label(RichText::new("Username").small().strong().color(theme::MUTED));
    ui.add_enabled(
        !generating,
        egui::TextEdit::singleline(&mut view.username)
            .hint_text("Enter your game username")
            .desired_width(f32::INFINITY),
    );

    ui.add_space(8.0);

    ui.label(
        RichText::new(format!("Amount of {}", currency.name()))
            .small()
            .strong()
            .color(theme::MUTED),
    );
    ui.add_enabled(
        !generating,
        egui::TextEdit::singleline(&mut view.amount).desired_width(f32::INFINITY),
    );

    ui.add_space(12.0);

    let label = if generating {
        "Generating...".to_string()
    } else {
        format!("Generate {}", currency.name())
    };
    let button = egui::Button::new(RichText::new(label).strong())
        .fill(theme::BUTTON)
        .min_size(egui::vec2(ui.available_width(), 36.0));
    if ui.add_enabled(view.can_generate(), button).clicked() {
        view.generate();
    }

    if view.log().is_empty() {
        return;
    }

    ui.add_space(12.0);
    egui::Frame::none()
        .fill(theme::CONSOLE_BG)
        .rounding(4.0)
        .inner_margin(6.0)
        .show(ui, |ui| {
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for line in view.log() {
                        ui.label(
                            RichText::new(format!("> {line}"))
                                .monospace()
                                .size(11.0)
                                .color(theme::line_color(LineKind::of(line))),
                        );
                    }
                });
        });
}
