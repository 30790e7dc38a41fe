#![allow(clippy::exit)]

mod cli;
mod commands;
mod context;
mod output;
mod render;
mod timing;

use anyhow::{Context as _, Result};
use clap::{CommandFactory as _, Parser as _};
use roster_business::models::{PageRequest, ProfileQuery};

use crate::cli::{Cli, Commands, PageArgs, ProfilesCommand, RegistrationsCommand, UsersCommand};
use crate::commands::{generate_completions, profiles, registrations, users};
use crate::context::{CliContext, load_config};
use crate::output::Output;

fn page_request(args: PageArgs) -> Result<PageRequest> {
    PageRequest::new(args.page, args.size).context("--page and --size must be at least 1")
}

async fn run_users(ctx: &CliContext, command: UsersCommand) -> Result<()> {
    match command {
        UsersCommand::List {
            filters,
            page,
            sort,
            desc,
            activity,
        } => {
            let options = users::ListOptions {
                form: filters.into_form(),
                page: page_request(page)?,
                sort,
                desc,
                activity,
            };
            users::run_list(ctx, options).await
        }
        UsersCommand::Delete { id } => users::run_delete(ctx, id).await,
        UsersCommand::Blacklist { id } => users::run_blacklist(ctx, id).await,
    }
}

async fn run_registrations(ctx: &CliContext, command: RegistrationsCommand) -> Result<()> {
    match command {
        RegistrationsCommand::List { filters, page } => {
            registrations::run_list(ctx, &filters.into_form(), page_request(page)?).await
        }
        RegistrationsCommand::Review { id, status, reason } => {
            registrations::run_review(ctx, id, status, reason).await
        }
        RegistrationsCommand::Edit { id, fields } => {
            registrations::run_edit(ctx, id, &fields.into()).await
        }
    }
}

async fn run_profiles(ctx: &CliContext, command: ProfilesCommand) -> Result<()> {
    match command {
        ProfilesCommand::List { filters, page } => {
            profiles::run_list(ctx, &ProfileQuery::from(filters), page_request(page)?).await
        }
        ProfilesCommand::Rate { id, appearance } => profiles::run_rate(ctx, id, appearance).await,
    }
}

fn connect(base_url: Option<String>, assume_yes: bool) -> Result<CliContext> {
    let config = load_config(base_url)?;
    tracing::debug!(
        base_url = %config.api_base_url,
        delete = config.enable_delete,
        "Loaded configuration"
    );
    Ok(CliContext::new(config, assume_yes))
}

async fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Users(command) => run_users(&connect(cli.base_url, cli.yes)?, command).await,
        Commands::Registrations(command) => {
            run_registrations(&connect(cli.base_url, cli.yes)?, command).await
        }
        Commands::Profiles(command) => {
            run_profiles(&connect(cli.base_url, cli.yes)?, command).await
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    // a missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    timing::init_tracing(cli.verbose, cli.timing);

    if let Err(e) = run(cli).await {
        Output::new().error(format!("{e:#}"));
        std::process::exit(1);
    }
}
