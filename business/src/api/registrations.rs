//! Registration review endpoints.

use super::{ApiClient, ApiResult, CallOptions};
use crate::http::Method;
use crate::models::registrations::RegistrationEditBody;
use crate::models::{
    PageRequest, PageResult, RegistrationEdit, RegistrationRecord, ReviewDecision, ReviewStatus,
    UserQuery,
};

pub async fn fetch_registrations(
    client: &ApiClient,
    query: &UserQuery,
    page: PageRequest,
) -> ApiResult<PageResult<RegistrationRecord>> {
    let options = CallOptions::new().params(query)?.params(&page)?;
    client.call("/register/info", Method::Get, options).await
}

/// Records a review decision. `reason` is usually only given on rejection.
pub async fn review_registration(
    client: &ApiClient,
    id: u64,
    status: ReviewStatus,
    reason: Option<String>,
) -> ApiResult<()> {
    let options = CallOptions::new().data(&ReviewDecision {
        id,
        identified: status,
        reason,
    })?;
    client.call_ack("/register/check", Method::Post, options).await
}

pub async fn edit_registration(
    client: &ApiClient,
    id: u64,
    edit: &RegistrationEdit,
) -> ApiResult<()> {
    let options = CallOptions::new().data(&RegistrationEditBody { fields: edit, id })?;
    client.call_ack("/register/info", Method::Post, options).await
}
