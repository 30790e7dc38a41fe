//! Page controller of the user-general table.
//!
//! The controller is synchronous: front ends pull a [`PendingLoad`] or a
//! [`Mutation`] out of it, run the network call wherever they like, and feed the
//! outcome back. Loads are latest-only; mutations carry their own target.

use chrono::{DateTime, Utc};

use super::columns::user_columns;
use super::mutation::{BlacklistTarget, Mutation, RowTarget};
use super::search::UserSearchForm;
use crate::api::{ApiResult, UsersApi};
use crate::models::{PageResult, UserQuery, UserRecord};
use crate::table::{ColumnDef, LoadTicket, TableState};
use crate::toast::Toasts;

/// Which confirmation, if any, is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageModal {
    #[default]
    Idle,
    ConfirmingDelete(RowTarget),
    ConfirmingBlacklist(BlacklistTarget),
}

impl PageModal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::ConfirmingDelete(target) => Some(target.delete_title()),
            Self::ConfirmingBlacklist(target) => Some(target.title()),
        }
    }

    pub fn prompt(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::ConfirmingDelete(target) => Some(target.delete_prompt()),
            Self::ConfirmingBlacklist(target) => Some(target.prompt()),
        }
    }
}

/// Per-row actions of the actions column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Delete,
    ToggleBlacklist,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// A page fetch handed out by [`UserGeneralState::next_load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    pub ticket: LoadTicket,
    pub query: UserQuery,
}

impl PendingLoad {
    pub async fn fetch<A: UsersApi + ?Sized>(&self, api: &A) -> ApiResult<PageResult<UserRecord>> {
        api.fetch_users(&self.query, self.ticket.page).await
    }
}

#[derive(Debug)]
pub struct UserGeneralState {
    pub columns: Vec<ColumnDef<UserRecord>>,
    pub table: TableState,
    /// Form as currently typed; only applied on submit.
    pub search: UserSearchForm,
    applied: UserQuery,
    page: PageResult<UserRecord>,
    status: LoadStatus,
    modal: PageModal,
    toasts: Toasts,
    enable_delete: bool,
}

impl Default for UserGeneralState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl UserGeneralState {
    pub fn new(enable_delete: bool) -> Self {
        Self {
            columns: user_columns(),
            table: TableState::new(),
            search: UserSearchForm::default(),
            applied: UserQuery::default(),
            page: PageResult::empty(),
            status: LoadStatus::Idle,
            modal: PageModal::Idle,
            toasts: Toasts::new(),
            enable_delete,
        }
    }

    pub fn delete_enabled(&self) -> bool {
        self.enable_delete
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.page.records
    }

    pub fn total(&self) -> u64 {
        self.page.total
    }

    pub fn page_count(&self) -> u64 {
        self.page.page_count(self.table.page())
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    /// Query last applied by submitting the search form.
    pub fn applied_query(&self) -> &UserQuery {
        &self.applied
    }

    /// Loaded rows after client-side filters and sort.
    pub fn visible_rows(&self) -> Vec<&UserRecord> {
        self.table.apply(&self.columns, &self.page.records)
    }

    pub fn modal(&self) -> &PageModal {
        &self.modal
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    /// Toggles one client-side filter value of the column with `key`.
    pub fn toggle_filter(&mut self, key: &str, value: i64) {
        if let Some(column) = self.columns.iter().find(|column| column.key == key) {
            self.table.toggle_filter(column, value);
        }
    }

    /// Opens the confirmation for `action` on `row`.
    ///
    /// Returns `false` when the action is inert, which is the case for deletion
    /// unless it has been enabled.
    pub fn on_row_action(&mut self, row: &UserRecord, action: RowAction) -> bool {
        match action {
            RowAction::Delete if !self.enable_delete => {
                log::debug!("Delete requested for user {} while deletion is disabled", row.id);
                false
            }
            RowAction::Delete => {
                self.modal = PageModal::ConfirmingDelete(RowTarget::from(row));
                true
            }
            RowAction::ToggleBlacklist => {
                self.modal = PageModal::ConfirmingBlacklist(BlacklistTarget::from(row));
                true
            }
        }
    }

    /// Dismisses the open confirmation without any call.
    pub fn cancel_modal(&mut self) {
        self.modal = PageModal::Idle;
    }

    /// Closes the open confirmation and returns the mutation it describes.
    pub fn confirm_modal(&mut self) -> Option<Mutation> {
        match std::mem::take(&mut self.modal) {
            PageModal::Idle => None,
            PageModal::ConfirmingDelete(target) => Some(target.delete()),
            PageModal::ConfirmingBlacklist(target) => Some(target.mutation()),
        }
    }

    /// Records the outcome of `mutation` and reloads from page 1.
    ///
    /// Both outcomes reload; rejections and transport failures share one toast.
    pub fn finish_mutation(
        &mut self,
        mutation: &Mutation,
        result: ApiResult<()>,
        now: DateTime<Utc>,
    ) {
        match result {
            Ok(()) => {
                log::info!("{mutation:?} succeeded");
                self.toasts.success(mutation.success_message(), now);
            }
            Err(err) => {
                log::warn!("{mutation:?} failed: {err}");
                self.toasts.failure(mutation.failure_message(), now);
            }
        }
        self.table.reload_and_reset();
    }

    pub fn submit_search(&mut self) {
        self.applied = self.search.to_query();
        self.table.reload_and_reset();
    }

    pub fn reset_search(&mut self) {
        self.search.clear();
        self.applied = UserQuery::default();
        self.table.reload_and_reset();
    }

    /// Takes the pending reload, if any, and marks the table as loading.
    pub fn next_load(&mut self) -> Option<PendingLoad> {
        let ticket = self.table.take_reload()?;
        self.status = LoadStatus::Loading;
        Some(PendingLoad {
            ticket,
            query: self.applied.clone(),
        })
    }

    /// Applies a page result. Results of superseded loads are dropped.
    ///
    /// A failed load empties the table and keeps the error for display.
    ///
    /// Returns whether the result was applied.
    pub fn apply_load(
        &mut self,
        ticket: LoadTicket,
        result: ApiResult<PageResult<UserRecord>>,
    ) -> bool {
        if !self.table.is_current(ticket.seq) {
            log::debug!("Dropping result of superseded load #{}", ticket.seq);
            return false;
        }
        match result {
            Ok(page) => {
                self.page = page.normalized(ticket.page);
                self.status = LoadStatus::Loaded;
            }
            Err(err) => {
                log::warn!("Loading page {} failed: {err}", ticket.page.index());
                self.page = PageResult::empty();
                self.table.rewind();
                self.status = LoadStatus::Failed(err.to_string());
            }
        }
        true
    }

    /// Runs the pending load to completion, if there is one.
    pub async fn load<A: UsersApi + ?Sized>(&mut self, api: &A) -> bool {
        let Some(pending) = self.next_load() else {
            return false;
        };
        let result = pending.fetch(api).await;
        self.apply_load(pending.ticket, result)
    }

    /// Confirms the open modal and runs its mutation to completion.
    pub async fn confirm_and_run<A: UsersApi + ?Sized>(
        &mut self,
        api: &A,
        now: DateTime<Utc>,
    ) -> Option<Mutation> {
        let mutation = self.confirm_modal()?;
        let result = mutation.execute(api).await;
        self.finish_mutation(&mutation, result, now);
        Some(mutation)
    }

    /// Drops expired toasts.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        self.toasts.prune(now);
    }
}
