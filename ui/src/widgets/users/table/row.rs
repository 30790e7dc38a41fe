//! Row rendering for the users table.

use egui::{Color32, RichText, Ui};
use egui_extras::TableRow;
use roster_business::models::UserRecord;
use roster_business::table::{ColumnDef, ColumnKind};
use roster_business::user_general::{RowAction, blacklist_action_label};

use super::cells::render_cell;

const INERT_COLOR: Color32 = Color32::from_rgb(128, 128, 128);

/// Renders one user row. Returns the row action clicked, if any.
pub fn render_user_row(
    row: &mut TableRow<'_, '_>,
    columns: &[&ColumnDef<UserRecord>],
    user: &UserRecord,
    delete_enabled: bool,
) -> Option<RowAction> {
    let mut action = None;
    for column in columns {
        row.col(|ui| {
            if column.kind == ColumnKind::Actions {
                action = render_actions(ui, user, delete_enabled);
            } else {
                render_cell(ui, column, user);
            }
        });
    }
    action
}

fn render_actions(ui: &mut Ui, user: &UserRecord, delete_enabled: bool) -> Option<RowAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        let delete = if delete_enabled {
            egui::Button::new("Delete").frame(false)
        } else {
            egui::Button::new(RichText::new("Delete").color(INERT_COLOR)).frame(false)
        };
        let response = ui.add(delete);
        if !delete_enabled {
            response.clone().on_hover_text("Deletion is disabled");
        }
        if response.clicked() {
            action = Some(RowAction::Delete);
        }

        if ui
            .add(egui::Button::new(blacklist_action_label(user.is_black)).frame(false))
            .clicked()
        {
            action = Some(RowAction::ToggleBlacklist);
        }
    });
    action
}
