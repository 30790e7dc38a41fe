//! Confirmation targets and the mutations they produce.
//!
//! Each confirmation captures the identity of the row it was opened for, and
//! confirming it yields a [`Mutation`] carrying its own id and flag. Nothing is
//! read back from shared page state once the mutation exists.

use crate::api::{ApiResult, UsersApi};
use crate::models::{BlacklistFlag, UserRecord};

/// Identity of the row a confirmation was opened for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTarget {
    pub id: u64,
    pub realname: String,
    pub student_number: String,
}

impl From<&UserRecord> for RowTarget {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            realname: user.realname.clone(),
            student_number: user.student_number.clone(),
        }
    }
}

impl RowTarget {
    pub fn delete_title(&self) -> &'static str {
        "Delete user"
    }

    pub fn delete_prompt(&self) -> String {
        format!(
            "Delete this user: name {}, student No. {}?",
            self.realname, self.student_number
        )
    }

    pub fn delete(&self) -> Mutation {
        Mutation::DeleteUser { id: self.id }
    }
}

/// A pending blacklist toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlacklistTarget {
    pub row: RowTarget,
    /// Flag the row had when the confirmation opened.
    pub current: BlacklistFlag,
}

impl From<&UserRecord> for BlacklistTarget {
    fn from(user: &UserRecord) -> Self {
        Self {
            row: RowTarget::from(user),
            current: user.is_black,
        }
    }
}

/// Row action label for a user with the given flag.
pub fn blacklist_action_label(current: BlacklistFlag) -> &'static str {
    if current.is_listed() {
        "Remove from blacklist"
    } else {
        "Add to blacklist"
    }
}

impl BlacklistTarget {
    pub fn title(&self) -> &'static str {
        if self.current.is_listed() {
            "Remove user from blacklist"
        } else {
            "Add user to blacklist"
        }
    }

    pub fn prompt(&self) -> String {
        let verb = if self.current.is_listed() {
            "Remove this user from"
        } else {
            "Add this user to"
        };
        format!(
            "{verb} the blacklist: name {}, student No. {}?",
            self.row.realname, self.row.student_number
        )
    }

    /// The toggle: the opposite of the flag the row had.
    pub fn mutation(&self) -> Mutation {
        Mutation::SetBlacklist {
            id: self.row.id,
            flag: self.current.toggled(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    DeleteUser { id: u64 },
    SetBlacklist { id: u64, flag: BlacklistFlag },
}

impl Mutation {
    pub fn id(&self) -> u64 {
        match self {
            Self::DeleteUser { id } | Self::SetBlacklist { id, .. } => *id,
        }
    }

    pub async fn execute<A: UsersApi + ?Sized>(&self, api: &A) -> ApiResult<()> {
        match *self {
            Self::DeleteUser { id } => api.delete_user(id).await,
            Self::SetBlacklist { id, flag } => api.set_blacklist(id, flag).await,
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Self::DeleteUser { .. } => "User deleted",
            Self::SetBlacklist { .. } => "Blacklist updated",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::DeleteUser { .. } => "Failed to delete user",
            Self::SetBlacklist { .. } => "Failed to update blacklist",
        }
    }
}
