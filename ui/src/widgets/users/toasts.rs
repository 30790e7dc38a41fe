//! Toast overlay in the top-right corner.

use chrono::{DateTime, Utc};
use egui::{Align2, Area, Color32, Frame, Id, Margin, RichText, Stroke, Ui};
use roster_business::{ToastKind, Toasts};

fn toast_color(kind: ToastKind) -> Color32 {
    match kind {
        ToastKind::Success => Color32::from_rgb(82, 196, 26),
        ToastKind::Failure => Color32::from_rgb(255, 77, 79),
    }
}

pub fn render_toasts(ui: &mut Ui, toasts: &Toasts, now: DateTime<Utc>) {
    Area::new(Id::new("roster_toasts"))
        .anchor(Align2::RIGHT_TOP, [-16.0, 48.0])
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ui.ctx(), |ui| {
            for toast in toasts.active(now) {
                let color = toast_color(toast.kind);
                Frame::popup(ui.style())
                    .stroke(Stroke::new(1.0, color))
                    .inner_margin(Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        let icon = match toast.kind {
                            ToastKind::Success => "✔",
                            ToastKind::Failure => "✖",
                        };
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(icon).color(color));
                            ui.label(&toast.message);
                        });
                    });
                ui.add_space(4.0);
            }
        });
}
