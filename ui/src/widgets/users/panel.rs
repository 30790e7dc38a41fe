//! The user-general page: search form, table, pagination, dialogs and toasts.

use std::num::NonZeroU32;
use std::sync::Arc;

use chrono::Utc;
use egui::{Color32, ComboBox, Frame, Margin, ScrollArea, Stroke, Ui};
use egui_extras::TableBuilder;
use roster_business::models::PAGE_SIZE_OPTIONS;
use roster_business::user_general::LoadStatus;
use roster_business::{BusinessConfig, UserGeneralState, UsersApi};
use tokio::runtime::Handle;

use super::modals::{ModalChoice, show_confirmation};
use super::search::{SearchAction, render_search_form};
use super::table::columns::{HEADER_HEIGHT, ROW_HEIGHT, display_order, table_column};
use super::table::header::{HeaderAction, render_table_header};
use super::table::row::render_user_row;
use super::toasts::render_toasts;
use crate::tasks::{TaskEvent, TaskRunner};

const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Page state plus the runner executing its calls.
#[derive(Debug)]
pub struct UserGeneralPage {
    pub state: UserGeneralState,
    tasks: TaskRunner,
}

impl UserGeneralPage {
    pub fn new(api: Arc<dyn UsersApi>, runtime: Handle, config: &BusinessConfig) -> Self {
        Self {
            state: UserGeneralState::new(config.enable_delete),
            tasks: TaskRunner::new(api, runtime),
        }
    }

    /// Applies finished tasks and starts the pending load, if any.
    pub fn poll(&mut self, ctx: &egui::Context) {
        let now = Utc::now();
        for event in self.tasks.drain() {
            match event {
                TaskEvent::Loaded { ticket, result } => {
                    self.state.apply_load(ticket, result);
                }
                TaskEvent::Mutated { mutation, result } => {
                    self.state.finish_mutation(&mutation, result, now);
                }
            }
        }

        if let Some(load) = self.state.next_load() {
            log::debug!("Loading users page {}", load.ticket.page.index());
            self.tasks.spawn_load(load, ctx.clone());
        }

        self.state.tick(now);
        if let Some(delay) = self.state.toasts().next_expiry(now)
            && let Ok(delay) = delay.to_std()
        {
            ctx.request_repaint_after(delay);
        }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        self.poll(ui.ctx());

        ui.heading("User information");
        ui.add_space(4.0);

        match render_search_form(ui, &mut self.state.search) {
            Some(SearchAction::Submit) => self.state.submit_search(),
            Some(SearchAction::Reset) => self.state.reset_search(),
            None => {}
        }
        ui.separator();

        self.toolbar(ui);
        ui.add_space(4.0);
        self.table(ui);
        ui.add_space(4.0);
        self.pagination(ui);

        match show_confirmation(ui, self.state.modal()) {
            Some(ModalChoice::Confirm) => {
                if let Some(mutation) = self.state.confirm_modal() {
                    self.tasks.spawn_mutation(mutation, ui.ctx().clone());
                }
            }
            Some(ModalChoice::Cancel) => self.state.cancel_modal(),
            None => {}
        }

        render_toasts(ui, self.state.toasts(), Utc::now());
    }

    fn toolbar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.button("Reload").clicked() {
                self.state.table.reload();
            }
            ui.add_enabled(false, egui::Button::new("Download"));

            match self.state.status() {
                LoadStatus::Loading => {
                    ui.spinner();
                    ui.label("Loading...");
                }
                LoadStatus::Failed(error) => {
                    ui.colored_label(Color32::RED, format!("Error: {error}"));
                }
                LoadStatus::Idle | LoadStatus::Loaded => {}
            }
        });
    }

    fn table(&mut self, ui: &mut Ui) {
        let columns = display_order(&self.state.columns);
        let rows = self.state.visible_rows();
        let delete_enabled = self.state.delete_enabled();

        let mut header_action = None;
        let mut row_action = None;

        Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .inner_margin(Margin::ZERO)
            .show(ui, |ui| {
                ScrollArea::horizontal().show(ui, |ui| {
                    let mut builder = TableBuilder::new(ui)
                        .id_salt("user_general_table")
                        .striped(true)
                        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
                    for column in &columns {
                        builder = builder.column(table_column(column));
                    }

                    builder
                        .header(HEADER_HEIGHT, |mut header| {
                            header_action =
                                render_table_header(&mut header, &columns, &self.state.table);
                        })
                        .body(|mut body| {
                            for user in &rows {
                                body.row(ROW_HEIGHT, |mut row| {
                                    if let Some(action) =
                                        render_user_row(&mut row, &columns, user, delete_enabled)
                                    {
                                        row_action = Some((user.id, action));
                                    }
                                });
                            }
                        });
                });
            });

        if rows.is_empty() && !self.state.is_loading() {
            ui.weak("No data");
        }

        let clicked_row = row_action.and_then(|(id, action)| {
            rows.iter()
                .find(|user| user.id == id)
                .map(|user| ((*user).clone(), action))
        });

        match header_action {
            Some(HeaderAction::Sort(key)) => self.state.table.toggle_sort(key),
            Some(HeaderAction::Filter(key, value)) => self.state.toggle_filter(key, value),
            Some(HeaderAction::ClearFilter(key)) => self.state.table.clear_filter(key),
            None => {}
        }
        if let Some((user, action)) = clicked_row {
            self.state.on_row_action(&user, action);
        }
    }

    fn pagination(&mut self, ui: &mut Ui) {
        let page = self.state.table.page();
        let page_count = self.state.page_count();

        ui.horizontal(|ui| {
            ui.label(format!("Total {}", self.state.total()));

            let prev = page.index().checked_sub(1).and_then(NonZeroU32::new);
            if ui.add_enabled(prev.is_some(), egui::Button::new("‹")).clicked()
                && let Some(prev) = prev
            {
                self.state.table.set_page(prev);
            }

            ui.label(format!("Page {} / {page_count}", page.index()));

            let next = NonZeroU32::new(page.index().saturating_add(1))
                .filter(|next| u64::from(next.get()) <= page_count);
            if ui.add_enabled(next.is_some(), egui::Button::new("›")).clicked()
                && let Some(next) = next
            {
                self.state.table.set_page(next);
            }

            let mut size = page.size();
            ComboBox::from_id_salt("user_general_page_size")
                .selected_text(format!("{size} / page"))
                .show_ui(ui, |ui| {
                    for option in PAGE_SIZE_OPTIONS {
                        ui.selectable_value(&mut size, option, format!("{option} / page"));
                    }
                });
            if let Some(size) = NonZeroU32::new(size) {
                self.state.table.set_page_size(size);
            }
        });
    }
}
