//! The user-general page: columns, search form, confirmations and controller.

pub mod columns;
pub mod mutation;
pub mod search;
pub mod state;

pub use columns::user_columns;
pub use mutation::{BlacklistTarget, Mutation, RowTarget, blacklist_action_label};
pub use search::UserSearchForm;
pub use state::{LoadStatus, PageModal, PendingLoad, RowAction, UserGeneralState};
