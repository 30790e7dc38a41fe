use std::time::Duration;

use egui_kittest::Harness;
use roster_business::BusinessConfig;
use roster_ui::RosterApp;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Runs frames while spawned requests finish.
    pub async fn settle(&mut self) {
        for _ in 0..20 {
            self.harness.step();
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
        self.harness.step();
    }
}

pub fn user_json(id: u64, is_black: u8) -> serde_json::Value {
    json!({
        "id": id,
        "nickname": format!("nick{id}"),
        "realname": format!("Name {id}"),
        "studentNumber": format!("2021{id:04}"),
        "gender": 2,
        "phoneNumber": "13800000000",
        "userType": 1,
        "identified": 1,
        "material": null,
        "isComplete": 0,
        "activityList": [3, 1],
        "isBlack": is_black
    })
}

/// Starts a backend that serves `records` for every user list request.
pub async fn setup<'a>(records: Vec<serde_json::Value>, enable_delete: bool) -> TestCtx<'a> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    let total = records.len();
    Mock::given(method("GET"))
        .and(path("/register/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "records": records, "total": total }
        })))
        .mount(&mock_server)
        .await;

    let config = BusinessConfig::new(mock_server.uri()).with_delete_enabled(enable_delete);
    let app = RosterApp::new(&config, tokio::runtime::Handle::current());
    let harness = Harness::builder()
        .with_size(egui::vec2(2400.0, 1200.0))
        .build_ui_state(|ui, app: &mut RosterApp| app.ui(ui), app);

    TestCtx {
        mock_server,
        harness,
    }
}
