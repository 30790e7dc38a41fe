//! Search form above the table.

use egui::{ComboBox, Grid, Ui};
use roster_business::models::{BlacklistFlag, Completion, Gender, ReviewStatus, UserType};
use roster_business::user_general::UserSearchForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    Submit,
    Reset,
}

fn text_field(ui: &mut Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).desired_width(140.0));
}

fn enum_field<T>(ui: &mut Ui, label: &str, value: &mut Option<T>, all: &[T])
where
    T: Copy + PartialEq + std::fmt::Display,
{
    ui.label(label);
    let selected = value.map_or_else(|| "Any".to_owned(), |v| v.to_string());
    ComboBox::from_id_salt(label)
        .selected_text(selected)
        .width(140.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(value, None, "Any");
            for option in all {
                ui.selectable_value(value, Some(*option), option.to_string());
            }
        });
}

/// Renders the search form. Returns the button clicked, if any.
pub fn render_search_form(ui: &mut Ui, form: &mut UserSearchForm) -> Option<SearchAction> {
    Grid::new("user_search_form")
        .num_columns(6)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            text_field(ui, "Nickname", &mut form.nickname);
            text_field(ui, "Real name", &mut form.realname);
            text_field(ui, "Student No.", &mut form.student_number);
            ui.end_row();

            text_field(ui, "Phone", &mut form.phone_number);
            enum_field(ui, "Gender", &mut form.gender, Gender::ALL);
            enum_field(ui, "User type", &mut form.user_type, UserType::ALL);
            ui.end_row();

            enum_field(ui, "Review status", &mut form.identified, ReviewStatus::ALL);
            enum_field(ui, "Profile", &mut form.is_complete, Completion::ALL);
            enum_field(ui, "Blacklisted", &mut form.is_black, BlacklistFlag::ALL);
            ui.end_row();
        });

    ui.horizontal(|ui| {
        if ui.button("Search").clicked() {
            return Some(SearchAction::Submit);
        }
        if ui.button("Reset").clicked() {
            return Some(SearchAction::Reset);
        }
        None
    })
    .inner
}
