//! Personal profile endpoints.

use super::{ApiClient, ApiResult, CallOptions};
use crate::http::Method;
use crate::models::{AppearanceRating, PageRequest, PageResult, ProfileQuery, ProfileRecord};

pub async fn fetch_profiles(
    client: &ApiClient,
    query: &ProfileQuery,
    page: PageRequest,
) -> ApiResult<PageResult<ProfileRecord>> {
    let options = CallOptions::new().params(query)?.params(&page)?;
    client.call("/user/info", Method::Get, options).await
}

pub async fn rate_appearance(client: &ApiClient, id: u64, appearance: u32) -> ApiResult<()> {
    let options = CallOptions::new().data(&AppearanceRating {
        user_id: id,
        appearance,
    })?;
    client.call_ack("/user/appearance", Method::Post, options).await
}
