//! Table header with sort toggles and filter menus.

use egui::{RichText, Ui};
use egui_extras::TableRow;
use roster_business::table::{ColumnDef, SortOrder, TableState};

/// A click in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Sort(&'static str),
    Filter(&'static str, i64),
    ClearFilter(&'static str),
}

fn sort_marker(state: &TableState, key: &str) -> &'static str {
    match state.sort() {
        Some(sort) if sort.key == key => match sort.order {
            SortOrder::Ascend => " ▲",
            SortOrder::Descend => " ▼",
        },
        _ => " ↕",
    }
}

/// Renders the header row. Returns the clicked action, if any.
pub fn render_table_header<R>(
    header: &mut TableRow<'_, '_>,
    columns: &[&ColumnDef<R>],
    state: &TableState,
) -> Option<HeaderAction> {
    let mut action = None;
    for column in columns {
        header.col(|ui| {
            if let Some(clicked) = render_header_cell(ui, column, state) {
                action = Some(clicked);
            }
        });
    }
    action
}

fn render_header_cell<R>(
    ui: &mut Ui,
    column: &ColumnDef<R>,
    state: &TableState,
) -> Option<HeaderAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        if column.is_sortable() {
            let label = format!("{}{}", column.title, sort_marker(state, column.key));
            if ui.button(RichText::new(label).strong()).clicked() {
                action = Some(HeaderAction::Sort(column.key));
            }
        } else {
            ui.strong(column.title);
        }

        let Some(filter) = &column.filter else {
            return;
        };
        let active = !state.selected(column.key).is_empty();
        let icon = if active { "⏷*" } else { "⏷" };
        ui.menu_button(icon, |ui| {
            for option in &filter.options {
                let selected = state.is_selected(column.key, option.value);
                if ui.selectable_label(selected, &option.label).clicked() {
                    action = Some(HeaderAction::Filter(column.key, option.value));
                }
            }
            ui.separator();
            if ui.add_enabled(active, egui::Button::new("Reset")).clicked() {
                action = Some(HeaderAction::ClearFilter(column.key));
                ui.close();
            }
        })
        .response
        .on_hover_text(format!("Filter {}", column.title));
    });
    action
}
