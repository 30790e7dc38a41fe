use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use roster_business::models::{
    BlacklistFlag, Completion, DEFAULT_PAGE_SIZE, Gender, ProfileQuery, RegistrationEdit,
    ReviewStatus, UserType,
};
use roster_business::user_general::UserSearchForm;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Admin console for Roster user accounts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the admin API
    #[arg(long, global = true, env = "ROSTER_API_BASE_URL")]
    pub base_url: Option<String>,

    /// Answer yes to every confirmation
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List and manage user accounts
    #[command(subcommand)]
    Users(UsersCommand),
    /// Review and edit registrations
    #[command(subcommand)]
    Registrations(RegistrationsCommand),
    /// List personal profiles and rate appearance
    #[command(subcommand)]
    Profiles(ProfilesCommand),
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum UsersCommand {
    /// List one page of users
    List {
        #[command(flatten)]
        filters: UserFilterArgs,

        #[command(flatten)]
        page: PageArgs,

        /// Sort the page by a sortable column key, e.g. studentNumber
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Keep only users who joined this activity period
        #[arg(long, value_name = "PERIOD")]
        activity: Option<u32>,
    },
    /// Delete a user (requires ROSTER_ENABLE_DELETE)
    Delete {
        /// User ID
        id: u64,
    },
    /// Toggle a user's blacklist flag
    Blacklist {
        /// User ID
        id: u64,
    },
}

#[derive(Subcommand)]
pub enum RegistrationsCommand {
    /// List one page of registrations
    List {
        #[command(flatten)]
        filters: UserFilterArgs,

        #[command(flatten)]
        page: PageArgs,
    },
    /// Record a review decision
    Review {
        /// Registration ID
        id: u64,

        /// New review status, by code or label (e.g. approved, 2)
        status: ReviewStatus,

        /// Reason shown to the applicant
        #[arg(long, short = 'r')]
        reason: Option<String>,
    },
    /// Edit registration fields
    Edit {
        /// Registration ID
        id: u64,

        #[command(flatten)]
        fields: RegistrationEditArgs,
    },
}

#[derive(Subcommand)]
pub enum ProfilesCommand {
    /// List one page of personal profiles
    List {
        #[command(flatten)]
        filters: ProfileFilterArgs,

        #[command(flatten)]
        page: PageArgs,
    },
    /// Rate a user's appearance
    Rate {
        /// User ID
        id: u64,

        /// Appearance score
        appearance: u32,
    },
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageArgs {
    /// Page number, starting at 1
    #[arg(long, short = 'p', default_value_t = 1)]
    pub page: u32,

    /// Rows per page
    #[arg(long, short = 's', default_value_t = DEFAULT_PAGE_SIZE)]
    pub size: u32,
}

/// Server-side user filters. Enum values take a code or a label.
#[derive(Args, Debug, Clone, Default)]
pub struct UserFilterArgs {
    #[arg(long)]
    pub nickname: Option<String>,
    #[arg(long)]
    pub realname: Option<String>,
    #[arg(long)]
    pub student_number: Option<String>,
    #[arg(long)]
    pub phone_number: Option<String>,
    #[arg(long)]
    pub gender: Option<Gender>,
    #[arg(long)]
    pub user_type: Option<UserType>,
    /// Review status
    #[arg(long)]
    pub identified: Option<ReviewStatus>,
    /// Profile completion
    #[arg(long)]
    pub complete: Option<Completion>,
    /// Blacklist flag (yes/no)
    #[arg(long)]
    pub blacklisted: Option<BlacklistFlag>,
}

impl UserFilterArgs {
    pub fn into_form(self) -> UserSearchForm {
        UserSearchForm {
            nickname: self.nickname.unwrap_or_default(),
            realname: self.realname.unwrap_or_default(),
            student_number: self.student_number.unwrap_or_default(),
            phone_number: self.phone_number.unwrap_or_default(),
            gender: self.gender,
            user_type: self.user_type,
            identified: self.identified,
            is_complete: self.complete,
            is_black: self.blacklisted,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ProfileFilterArgs {
    #[arg(long)]
    pub realname: Option<String>,
    #[arg(long)]
    pub student_number: Option<String>,
    #[arg(long)]
    pub phone_number: Option<String>,
    #[arg(long)]
    pub gender: Option<Gender>,
    #[arg(long)]
    pub user_type: Option<UserType>,
    #[arg(long)]
    pub appearance: Option<u32>,
}

impl From<ProfileFilterArgs> for ProfileQuery {
    fn from(args: ProfileFilterArgs) -> Self {
        Self {
            realname: args.realname,
            student_number: args.student_number,
            phone_number: args.phone_number,
            gender: args.gender,
            user_type: args.user_type,
            appearance: args.appearance,
            ..Self::default()
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct RegistrationEditArgs {
    #[arg(long)]
    pub nickname: Option<String>,
    #[arg(long)]
    pub realname: Option<String>,
    #[arg(long)]
    pub student_number: Option<String>,
    #[arg(long)]
    pub gender: Option<Gender>,
    #[arg(long)]
    pub phone_number: Option<String>,
    #[arg(long)]
    pub user_type: Option<UserType>,
    #[arg(long)]
    pub faculty: Option<u32>,
}

impl From<RegistrationEditArgs> for RegistrationEdit {
    fn from(args: RegistrationEditArgs) -> Self {
        Self {
            nickname: args.nickname,
            realname: args.realname,
            student_number: args.student_number,
            gender: args.gender,
            phone_number: args.phone_number,
            user_type: args.user_type,
            faculty: args.faculty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn users_list_reads_filters_and_page() {
        let cli = parse(&[
            "roster",
            "users",
            "list",
            "--gender",
            "female",
            "--blacklisted",
            "1",
            "--realname",
            " Li ",
            "--page",
            "3",
            "--sort",
            "studentNumber",
            "--desc",
            "--activity",
            "5",
        ]);

        let Some(Commands::Users(UsersCommand::List {
            filters,
            page,
            sort,
            desc,
            activity,
        })) = cli.command
        else {
            panic!("expected users list");
        };

        assert_eq!(page, PageArgs { page: 3, size: 20 });
        assert_eq!(sort.as_deref(), Some("studentNumber"));
        assert!(desc);
        assert_eq!(activity, Some(5));

        let query = filters.into_form().to_query();
        assert_eq!(query.gender, Some(Gender::Female));
        assert_eq!(query.is_black, Some(BlacklistFlag::Listed));
        assert_eq!(query.realname.as_deref(), Some("Li"));
        assert!(query.nickname.is_none());
    }

    #[test]
    fn activity_filter_takes_one_period() {
        let repeated = Cli::try_parse_from([
            "roster",
            "users",
            "list",
            "--activity",
            "5",
            "--activity",
            "7",
        ]);
        assert!(repeated.is_err());
    }

    #[test]
    fn desc_requires_sort() {
        assert!(Cli::try_parse_from(["roster", "users", "list", "--desc"]).is_err());
    }

    #[test]
    fn unknown_enum_label_is_rejected() {
        assert!(Cli::try_parse_from(["roster", "users", "list", "--gender", "other"]).is_err());
        assert!(Cli::try_parse_from(["roster", "registrations", "review", "4", "9"]).is_err());
    }

    #[test]
    fn review_takes_status_and_reason() {
        let cli = parse(&[
            "roster",
            "registrations",
            "review",
            "12",
            "rejected",
            "-r",
            "blurry photo",
        ]);

        let Some(Commands::Registrations(RegistrationsCommand::Review { id, status, reason })) =
            cli.command
        else {
            panic!("expected registrations review");
        };
        assert_eq!(id, 12);
        assert_eq!(status, ReviewStatus::Rejected);
        assert_eq!(reason.as_deref(), Some("blurry photo"));
    }

    #[test]
    fn edit_without_fields_is_empty() {
        let cli = parse(&["roster", "registrations", "edit", "40"]);
        let Some(Commands::Registrations(RegistrationsCommand::Edit { fields, .. })) = cli.command
        else {
            panic!("expected registrations edit");
        };
        assert!(RegistrationEdit::from(fields).is_empty());
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = parse(&[
            "roster",
            "users",
            "blacklist",
            "7",
            "--yes",
            "--base-url",
            "https://admin.example.com/api",
        ]);
        assert!(cli.yes);
        assert_eq!(
            cli.base_url.as_deref(),
            Some("https://admin.example.com/api")
        );
        assert!(matches!(
            cli.command,
            Some(Commands::Users(UsersCommand::Blacklist { id: 7 }))
        ));
    }

    #[test]
    fn profile_filters_become_a_query() {
        let cli = parse(&["roster", "profiles", "list", "--appearance", "4", "-s", "50"]);
        let Some(Commands::Profiles(ProfilesCommand::List { filters, page })) = cli.command else {
            panic!("expected profiles list");
        };
        assert_eq!(page.size, 50);
        let query = ProfileQuery::from(filters);
        assert_eq!(query.appearance, Some(4));
        assert!(query.gender.is_none());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory as _;
        Cli::command().debug_assert();
    }
}
