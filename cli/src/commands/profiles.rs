//! `roster profiles`: personal profiles and appearance ratings.

use anyhow::{Context as _, Result};
use roster_business::api::profiles::{fetch_profiles, rate_appearance};
use roster_business::models::{PageRequest, ProfileQuery, ProfileRecord};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::{info, instrument};

use crate::context::CliContext;
use crate::output::Output;

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| v.to_string())
}

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Real name")]
    realname: String,
    #[tabled(rename = "Student No.")]
    student_number: String,
    #[tabled(rename = "Gender")]
    gender: String,
    #[tabled(rename = "User type")]
    user_type: String,
    #[tabled(rename = "WeChat")]
    wechat_number: String,
    #[tabled(rename = "Appearance")]
    appearance: String,
}

impl From<&ProfileRecord> for ProfileRow {
    fn from(profile: &ProfileRecord) -> Self {
        Self {
            id: profile.id,
            realname: profile.realname.clone(),
            student_number: profile.student_number.clone(),
            gender: profile.gender.to_string(),
            user_type: profile.user_type.to_string(),
            wechat_number: optional(profile.wechat_number.as_deref()),
            appearance: optional(profile.appearance),
        }
    }
}

#[instrument(skip_all, name = "profiles_list", fields(page = page.index(), size = page.size()))]
pub async fn run_list(ctx: &CliContext, query: &ProfileQuery, page: PageRequest) -> Result<()> {
    let out = Output::new();

    let result = fetch_profiles(&ctx.client, query, page)
        .await
        .context("Failed to load profiles")?
        .normalized(page);
    info!(total = result.total, shown = result.records.len(), "Loaded profiles");

    if result.records.is_empty() {
        out.dim("No data");
    } else {
        let rows: Vec<ProfileRow> = result.records.iter().map(ProfileRow::from).collect();
        let mut table = Table::new(&rows);
        table.with(Style::rounded());
        out.print(table);
    }
    out.page_footer(page.index(), result.page_count(page), result.total);
    Ok(())
}

#[instrument(skip_all, name = "profiles_rate", fields(id = id, appearance = appearance))]
pub async fn run_rate(ctx: &CliContext, id: u64, appearance: u32) -> Result<()> {
    rate_appearance(&ctx.client, id, appearance)
        .await
        .context("Failed to rate appearance")?;
    Output::new().success(format!("User {id} rated {appearance}"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_business::BusinessConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn missing_fields_render_as_dash() {
        let profile: ProfileRecord = serde_json::from_value(json!({
            "id": 5,
            "realname": "Qian",
            "studentNumber": "20190099",
            "gender": 2,
            "userType": 1,
            "appearance": 4
        }))
        .unwrap();

        let row = ProfileRow::from(&profile);
        assert_eq!(row.wechat_number, "-");
        assert_eq!(row.appearance, "4");
        assert_eq!(row.gender, "Female");
    }

    #[tokio::test]
    async fn test_rate_posts_rating() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/appearance"))
            .and(body_json(json!({ "userId": 5, "appearance": 3 })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": null })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let ctx = CliContext::new(BusinessConfig::new(server.uri()), false);
        run_rate(&ctx, 5, 3).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_surfaces_transport_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/info"))
            .and(query_param("appearance", "4"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .expect(1)
            .mount(&server)
            .await;

        let ctx = CliContext::new(BusinessConfig::new(server.uri()), false);
        let query = ProfileQuery {
            appearance: Some(4),
            ..ProfileQuery::default()
        };
        let err = run_list(&ctx, &query, PageRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to load profiles");
    }
}
