//! Registration review rows and edits.

use serde::{Deserialize, Serialize};

use super::codes::{Gender, ReviewStatus, UserType};
use super::users::nullable_string;

/// A registration as seen by the review page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub id: u64,
    #[serde(default, deserialize_with = "nullable_string")]
    pub nickname: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub realname: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub student_number: String,
    pub gender: Gender,
    #[serde(default, deserialize_with = "nullable_string")]
    pub phone_number: String,
    pub user_type: UserType,
    #[serde(default)]
    pub faculty: Option<u32>,
    pub identified: ReviewStatus,
    #[serde(default)]
    pub material: Option<String>,
    /// Reviewer's reason for the last rejection.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Body of `/register/check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewDecision {
    pub id: u64,
    pub identified: ReviewStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Editable registration fields. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationEdit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty: Option<u32>,
}

impl RegistrationEdit {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Body of the edit call: the form fields plus the record id.
#[derive(Debug, Serialize)]
pub(crate) struct RegistrationEditBody<'a> {
    #[serde(flatten)]
    pub fields: &'a RegistrationEdit,
    pub id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_body_merges_id_into_fields() {
        let edit = RegistrationEdit {
            realname: Some("Zhou".to_owned()),
            user_type: Some(UserType::Alumni),
            ..RegistrationEdit::default()
        };
        let body = serde_json::to_value(RegistrationEditBody {
            fields: &edit,
            id: 40,
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({ "realname": "Zhou", "userType": 2, "id": 40 })
        );
    }

    #[test]
    fn review_decision_omits_missing_reason() {
        let body = serde_json::to_value(ReviewDecision {
            id: 8,
            identified: ReviewStatus::Approved,
            reason: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "id": 8, "identified": 3 }));
    }
}
