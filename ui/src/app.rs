use std::sync::Arc;

use roster_business::{ApiClient, BusinessConfig};
use tokio::runtime::Handle;

use crate::widgets::UserGeneralPage;

pub struct RosterApp {
    base_url: String,
    page: UserGeneralPage,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(config: &BusinessConfig, runtime: Handle) -> Self {
        let api = Arc::new(ApiClient::from_config(config));
        Self {
            base_url: config.api_base_url.clone(),
            page: UserGeneralPage::new(api, runtime, config),
        }
    }

    pub fn page(&self) -> &UserGeneralPage {
        &self.page
    }

    /// Renders the whole window into `ui`.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        egui::TopBottomPanel::top("top_panel").show_inside(ui, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Roster");
                ui.separator();
                ui.weak(&self.base_url);
            });
        });

        egui::CentralPanel::default().show_inside(ui, |ui| {
            self.page.show(ui);
        });
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.ui(ui));
    }
}
