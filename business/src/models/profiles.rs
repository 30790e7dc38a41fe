//! Personal profile rows used by the appearance-rating view.

use serde::{Deserialize, Serialize};

use super::codes::{Gender, UserType};
use super::users::nullable_string;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: u64,
    #[serde(default, deserialize_with = "nullable_string")]
    pub realname: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub student_number: String,
    pub gender: Gender,
    pub user_type: UserType,
    #[serde(default, deserialize_with = "nullable_string")]
    pub phone_number: String,
    #[serde(default)]
    pub wechat_number: Option<String>,
    #[serde(default)]
    pub faculty: Option<u32>,
    /// Appearance rating given by an administrator.
    #[serde(default)]
    pub appearance: Option<u32>,
    #[serde(default)]
    pub rate: Option<u32>,
}

/// Server-side filters for `/user/info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wechat_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<u32>,
}

/// Body of `/user/appearance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceRating {
    pub user_id: u64,
    pub appearance: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_with_sparse_fields_decodes() {
        let profile: ProfileRecord = serde_json::from_value(serde_json::json!({
            "id": 5,
            "realname": "Qian",
            "studentNumber": "20190099",
            "gender": 1,
            "userType": 1,
            "phoneNumber": null
        }))
        .unwrap();

        assert_eq!(profile.phone_number, "");
        assert!(profile.appearance.is_none());
        assert!(profile.wechat_number.is_none());
    }

    #[test]
    fn rating_body_uses_user_id() {
        let body = serde_json::to_value(AppearanceRating {
            user_id: 5,
            appearance: 4,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "userId": 5, "appearance": 4 }));
    }
}
