//! `/register/info`, `/user/delUser` and `/user/blacklist`.

use serde::Serialize;

use super::{ApiClient, ApiResult, CallOptions};
use crate::http::Method;
use crate::models::{BlacklistFlag, PageRequest, PageResult, UserQuery, UserRecord};

#[derive(Debug, Serialize)]
struct DeleteParams {
    id: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BlacklistBody {
    user_id: u64,
    is_black: BlacklistFlag,
}

/// Fetches one page of user accounts matching `query`.
pub async fn fetch_users(
    client: &ApiClient,
    query: &UserQuery,
    page: PageRequest,
) -> ApiResult<PageResult<UserRecord>> {
    let options = CallOptions::new().params(query)?.params(&page)?;
    client.call("/register/info", Method::Get, options).await
}

/// Permanently deletes a user account.
pub async fn delete_user(client: &ApiClient, id: u64) -> ApiResult<()> {
    let options = CallOptions::new().params(&DeleteParams { id })?;
    client.call_ack("/user/delUser", Method::Post, options).await
}

/// Sets the blacklist flag of a user account to `flag`.
pub async fn set_blacklist(client: &ApiClient, id: u64, flag: BlacklistFlag) -> ApiResult<()> {
    let options = CallOptions::new().data(&BlacklistBody {
        user_id: id,
        is_black: flag,
    })?;
    client.call_ack("/user/blacklist", Method::Post, options).await
}
