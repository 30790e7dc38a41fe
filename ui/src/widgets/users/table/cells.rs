//! Cell rendering for each column kind.

use egui::{Color32, CornerRadius, Frame, Margin, RichText, Stroke, Ui};
use roster_business::table::{BadgeStatus, CellValue, ColumnDef, ColumnKind, EnumOption};
use roster_business::table::{sorted_tags, tag_label};

const TAG_COLOR: Color32 = Color32::from_rgb(114, 46, 209);
const TAG_FILL: Color32 = Color32::from_rgb(249, 240, 255);

/// Dot colour of an enum badge.
pub fn badge_color(status: BadgeStatus) -> Color32 {
    match status {
        BadgeStatus::Success => Color32::from_rgb(82, 196, 26),
        BadgeStatus::Error => Color32::from_rgb(255, 77, 79),
        BadgeStatus::Processing => Color32::from_rgb(22, 119, 255),
        BadgeStatus::Warning => Color32::from_rgb(250, 173, 20),
        BadgeStatus::Default => Color32::from_rgb(217, 217, 217),
    }
}

/// Renders one cell of `column` for `row`.
///
/// Action cells are rendered by the row, which owns the click handling.
pub fn render_cell<R>(ui: &mut Ui, column: &ColumnDef<R>, row: &R) {
    match (column.kind, column.cell(row)) {
        (ColumnKind::Enum(options), CellValue::Code(code)) => render_badge(ui, options, code),
        (ColumnKind::Image, CellValue::Image(url)) => render_image_link(ui, url),
        (ColumnKind::Tags { prefix }, CellValue::Tags(list)) => render_tags(ui, prefix, list),
        (ColumnKind::Actions, _) => {}
        _ => {
            ui.label(column.display_text(row));
        }
    }
}

fn render_badge(ui: &mut Ui, options: &[EnumOption], code: u8) {
    match EnumOption::find(options, code) {
        Some(option) => {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;
                ui.label(RichText::new("●").color(badge_color(option.status)));
                ui.label(option.label);
            });
        }
        None => {
            ui.label(code.to_string());
        }
    }
}

fn render_image_link(ui: &mut Ui, url: Option<&str>) {
    match url {
        Some(url) if !url.is_empty() => {
            ui.hyperlink_to("View material", url).on_hover_text(url);
        }
        _ => {
            ui.weak("-");
        }
    }
}

fn render_tags(ui: &mut Ui, prefix: &str, list: Option<&[u32]>) {
    let Some(list) = list else {
        ui.weak("-");
        return;
    };
    ui.horizontal_wrapped(|ui| {
        for n in sorted_tags(list) {
            Frame::NONE
                .fill(TAG_FILL)
                .stroke(Stroke::new(1.0, TAG_COLOR))
                .corner_radius(CornerRadius::same(2))
                .inner_margin(Margin::symmetric(4, 1))
                .show(ui, |ui| {
                    ui.label(RichText::new(tag_label(prefix, n)).color(TAG_COLOR).small());
                });
        }
    });
}
