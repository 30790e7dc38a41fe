//! `roster users`: the user-general table and its two row actions.

use anyhow::{Context as _, Result, bail};
use roster_business::api::users::fetch_users;
use roster_business::models::{PageRequest, UserQuery, UserRecord};
use roster_business::table::{ColumnDef, TableState};
use roster_business::user_general::{
    BlacklistTarget, Mutation, RowTarget, UserSearchForm, user_columns,
};
use tracing::{info, instrument};

use crate::context::CliContext;
use crate::output::Output;
use crate::render::column_table;

const ACTIVITY_KEY: &str = "activityList";

pub struct ListOptions {
    pub form: UserSearchForm,
    pub page: PageRequest,
    pub sort: Option<String>,
    pub desc: bool,
    pub activity: Option<u32>,
}

/// Client-side sort and activity filter over the fetched page.
fn table_state(
    columns: &[ColumnDef<UserRecord>],
    sort: Option<&str>,
    desc: bool,
    activity: Option<u32>,
) -> Result<TableState> {
    let mut table = TableState::new();

    if let Some(key) = sort {
        let column = columns
            .iter()
            .find(|column| column.key == key && column.is_sortable())
            .with_context(|| {
                let sortable: Vec<&str> = columns
                    .iter()
                    .filter(|column| column.is_sortable())
                    .map(|column| column.key)
                    .collect();
                format!("Cannot sort by {key:?}; sortable columns: {}", sortable.join(", "))
            })?;
        table.toggle_sort(column.key);
        if desc {
            table.toggle_sort(column.key);
        }
    }

    if let Some(period) = activity {
        let column = columns
            .iter()
            .find(|column| column.key == ACTIVITY_KEY)
            .context("Activity column is missing")?;
        table.toggle_filter(column, i64::from(period));
    }
    Ok(table)
}

#[instrument(skip_all, name = "users_list", fields(page = options.page.index(), size = options.page.size()))]
pub async fn run_list(ctx: &CliContext, options: ListOptions) -> Result<()> {
    let out = Output::new();
    let columns = user_columns();
    let table = table_state(
        &columns,
        options.sort.as_deref(),
        options.desc,
        options.activity,
    )?;

    let result = fetch_users(&ctx.client, &options.form.to_query(), options.page)
        .await
        .context("Failed to load users")?
        .normalized(options.page);
    info!(total = result.total, shown = result.records.len(), "Loaded users");

    let rows = table.apply(&columns, &result.records);
    if rows.is_empty() {
        out.dim("No data");
    } else {
        out.print(column_table(&columns, &rows));
    }
    out.page_footer(
        options.page.index(),
        result.page_count(options.page),
        result.total,
    );
    Ok(())
}

/// Looks a user up by id so the confirmation can name them.
async fn find_user(ctx: &CliContext, id: u64) -> Result<UserRecord> {
    let query = UserQuery {
        id: Some(id),
        ..UserQuery::default()
    };
    let page = fetch_users(&ctx.client, &query, PageRequest::default())
        .await
        .with_context(|| format!("Failed to look up user {id}"))?;

    page.records
        .into_iter()
        .find(|user| user.id == id)
        .with_context(|| format!("No user with ID {id}"))
}

async fn run_mutation(ctx: &CliContext, mutation: Mutation) -> Result<()> {
    mutation
        .execute(&ctx.client)
        .await
        .context(mutation.failure_message())?;

    info!(id = mutation.id(), ?mutation, "Mutation applied");
    Output::new().success(mutation.success_message());
    Ok(())
}

#[instrument(skip_all, name = "users_delete", fields(id = id))]
pub async fn run_delete(ctx: &CliContext, id: u64) -> Result<()> {
    if !ctx.config.enable_delete {
        bail!("User deletion is disabled; set ROSTER_ENABLE_DELETE=true to enable it");
    }

    let out = Output::new();
    let target = RowTarget::from(&find_user(ctx, id).await?);

    out.header(target.delete_title());
    if !ctx.confirm(&target.delete_prompt())? {
        out.dim("Cancelled.");
        return Ok(());
    }
    run_mutation(ctx, target.delete()).await
}

#[instrument(skip_all, name = "users_blacklist", fields(id = id))]
pub async fn run_blacklist(ctx: &CliContext, id: u64) -> Result<()> {
    let out = Output::new();
    let target = BlacklistTarget::from(&find_user(ctx, id).await?);

    out.header(target.title());
    if !ctx.confirm(&target.prompt())? {
        out.dim("Cancelled.");
        return Ok(());
    }
    run_mutation(ctx, target.mutation()).await
}
