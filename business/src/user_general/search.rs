//! Server-side search form of the user-general page.

use crate::models::{BlacklistFlag, Completion, Gender, ReviewStatus, UserQuery, UserType};

/// Form values as typed by the operator.
///
/// Text fields are trimmed and blank ones are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearchForm {
    pub nickname: String,
    pub realname: String,
    pub student_number: String,
    pub phone_number: String,
    pub gender: Option<Gender>,
    pub user_type: Option<UserType>,
    pub identified: Option<ReviewStatus>,
    pub is_complete: Option<Completion>,
    pub is_black: Option<BlacklistFlag>,
}

fn text_filter(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

impl UserSearchForm {
    pub fn to_query(&self) -> UserQuery {
        UserQuery {
            nickname: text_filter(&self.nickname),
            realname: text_filter(&self.realname),
            student_number: text_filter(&self.student_number),
            phone_number: text_filter(&self.phone_number),
            gender: self.gender,
            user_type: self.user_type,
            identified: self.identified,
            is_complete: self.is_complete,
            is_black: self.is_black,
            ..UserQuery::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_query().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
