//! `roster registrations`: review queue and edits.

use anyhow::{Context as _, Result, bail};
use roster_business::api::registrations::{
    edit_registration, fetch_registrations, review_registration,
};
use roster_business::models::{PageRequest, RegistrationEdit, RegistrationRecord, ReviewStatus};
use roster_business::user_general::UserSearchForm;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::{info, instrument};

use crate::context::CliContext;
use crate::output::Output;

#[derive(Tabled)]
struct RegistrationRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Nickname")]
    nickname: String,
    #[tabled(rename = "Real name")]
    realname: String,
    #[tabled(rename = "Student No.")]
    student_number: String,
    #[tabled(rename = "Gender")]
    gender: String,
    #[tabled(rename = "User type")]
    user_type: String,
    #[tabled(rename = "Review status")]
    identified: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

impl From<&RegistrationRecord> for RegistrationRow {
    fn from(record: &RegistrationRecord) -> Self {
        Self {
            id: record.id,
            nickname: record.nickname.clone(),
            realname: record.realname.clone(),
            student_number: record.student_number.clone(),
            gender: record.gender.to_string(),
            user_type: record.user_type.to_string(),
            identified: record.identified.to_string(),
            reason: record.reason.clone().unwrap_or_else(|| "-".to_owned()),
        }
    }
}

#[instrument(skip_all, name = "registrations_list", fields(page = page.index(), size = page.size()))]
pub async fn run_list(ctx: &CliContext, form: &UserSearchForm, page: PageRequest) -> Result<()> {
    let out = Output::new();

    let result = fetch_registrations(&ctx.client, &form.to_query(), page)
        .await
        .context("Failed to load registrations")?
        .normalized(page);
    info!(total = result.total, shown = result.records.len(), "Loaded registrations");

    if result.records.is_empty() {
        out.dim("No data");
    } else {
        let rows: Vec<RegistrationRow> = result.records.iter().map(RegistrationRow::from).collect();
        let mut table = Table::new(&rows);
        table.with(Style::rounded());
        out.print(table);
    }
    out.page_footer(page.index(), result.page_count(page), result.total);
    Ok(())
}

#[instrument(skip_all, name = "registrations_review", fields(id = id, status = %status))]
pub async fn run_review(
    ctx: &CliContext,
    id: u64,
    status: ReviewStatus,
    reason: Option<String>,
) -> Result<()> {
    let out = Output::new();

    if !ctx.confirm(&format!("Mark registration {id} as {status}?"))? {
        out.dim("Cancelled.");
        return Ok(());
    }

    review_registration(&ctx.client, id, status, reason)
        .await
        .context("Failed to record review")?;
    out.success(format!("Registration {id} marked {status}"));
    Ok(())
}

#[instrument(skip_all, name = "registrations_edit", fields(id = id))]
pub async fn run_edit(ctx: &CliContext, id: u64, edit: &RegistrationEdit) -> Result<()> {
    if edit.is_empty() {
        bail!("Nothing to edit; pass at least one field");
    }

    edit_registration(&ctx.client, id, edit)
        .await
        .context("Failed to edit registration")?;
    Output::new().success(format!("Registration {id} updated"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_business::BusinessConfig;
    use roster_business::models::UserType;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ack() -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": null }))
    }

    fn ctx(server: &MockServer) -> CliContext {
        CliContext::new(BusinessConfig::new(server.uri()), true)
    }

    #[test]
    fn row_shows_labels_and_placeholder_reason() {
        let record: RegistrationRecord = serde_json::from_value(json!({
            "id": 4,
            "nickname": "bo",
            "realname": "Bo Wen",
            "studentNumber": "20200004",
            "gender": 1,
            "phoneNumber": null,
            "userType": 2,
            "identified": 1
        }))
        .unwrap();

        let row = RegistrationRow::from(&record);
        assert_eq!(row.user_type, "Alumni");
        assert_eq!(row.identified, "Pending");
        assert_eq!(row.reason, "-");
    }

    #[tokio::test]
    async fn test_review_posts_decision() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register/check"))
            .and(body_json(json!({ "id": 12, "identified": 2, "reason": "blurry" })))
            .respond_with(ack())
            .expect(1)
            .mount(&server)
            .await;

        run_review(
            &ctx(&server),
            12,
            ReviewStatus::Rejected,
            Some("blurry".to_owned()),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_empty_edit_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register/info"))
            .respond_with(ack())
            .expect(0)
            .mount(&server)
            .await;

        assert!(
            run_edit(&ctx(&server), 40, &RegistrationEdit::default())
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_edit_merges_id_into_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register/info"))
            .and(body_json(json!({ "userType": 2, "id": 40 })))
            .respond_with(ack())
            .expect(1)
            .mount(&server)
            .await;

        let edit = RegistrationEdit {
            user_type: Some(UserType::Alumni),
            ..RegistrationEdit::default()
        };
        run_edit(&ctx(&server), 40, &edit).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_passes_review_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/register/info"))
            .and(query_param("identified", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": { "records": [], "total": 0 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let form = UserSearchForm {
            identified: Some(ReviewStatus::Pending),
            ..UserSearchForm::default()
        };
        run_list(&ctx(&server), &form, PageRequest::default())
            .await
            .unwrap();
    }
}
