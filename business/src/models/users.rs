//! User account rows and the filters used to query them.

use serde::{Deserialize, Deserializer, Serialize};

use super::codes::{BlacklistFlag, Completion, Gender, ReviewStatus, UserType};

/// Text fields the backend may send as `null`.
pub(crate) fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A user account as listed on the user-general page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
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
    pub identified: ReviewStatus,
    /// Registration material image reference.
    #[serde(default)]
    pub material: Option<String>,
    pub is_complete: Completion,
    /// Activity periods the user took part in; `None` when never enrolled.
    #[serde(default)]
    pub activity_list: Option<Vec<u32>>,
    pub is_black: BlacklistFlag,
}

impl UserRecord {
    /// Whether the user took part in the given activity period.
    pub fn joined_activity(&self, period: u32) -> bool {
        self.activity_list
            .as_ref()
            .is_some_and(|list| list.contains(&period))
    }
}

/// Server-side filters for `/register/info`.
///
/// Unset fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
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
    pub faculty: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identified: Option<ReviewStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<Completion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_black: Option<BlacklistFlag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
}

impl UserQuery {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::query_pairs;

    #[test]
    fn user_record_decodes_wire_shape() {
        let record: UserRecord = serde_json::from_value(serde_json::json!({
            "id": 12,
            "nickname": null,
            "realname": "Lin",
            "studentNumber": "20210001",
            "gender": 2,
            "phoneNumber": "13800000000",
            "userType": 1,
            "identified": 3,
            "material": "https://cdn.example.com/m/12.png",
            "isComplete": 1,
            "activityList": [3, 1],
            "isBlack": 0
        }))
        .unwrap();

        assert_eq!(record.nickname, "");
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.identified, ReviewStatus::Approved);
        assert!(record.joined_activity(3));
        assert!(!record.joined_activity(2));
        assert_eq!(record.is_black, BlacklistFlag::Clear);
    }

    #[test]
    fn null_activity_list_joins_nothing() {
        let record: UserRecord = serde_json::from_value(serde_json::json!({
            "id": 1, "realname": "A", "studentNumber": "1", "gender": 0,
            "phoneNumber": "", "userType": 2, "identified": 0,
            "isComplete": 0, "activityList": null, "isBlack": 1
        }))
        .unwrap();

        assert!(record.activity_list.is_none());
        assert!(!record.joined_activity(5));
        assert!(record.material.is_none());
    }

    #[test]
    fn unset_filters_stay_out_of_the_query() {
        let query = UserQuery {
            realname: Some("Lin".to_owned()),
            gender: Some(Gender::Male),
            is_black: Some(BlacklistFlag::Listed),
            ..UserQuery::default()
        };

        let mut pairs = query_pairs(&query).unwrap();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("gender".to_owned(), "1".to_owned()),
                ("isBlack".to_owned(), "1".to_owned()),
                ("realname".to_owned(), "Lin".to_owned()),
            ]
        );
        assert!(UserQuery::default().is_empty());
        assert!(!query.is_empty());
    }
}
