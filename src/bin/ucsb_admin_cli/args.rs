//! Command-line surface for `ucsb-admin-cli`.

#![deny(clippy::all, clippy::pedantic)]

use clap::{Args, Parser, Subcommand, ValueEnum, builder::BoolishValueParser};
use ucsb_admin::config::SettingsOverrides;

use crate::io::parse_local_datetime;

#[derive(Parser, Debug)]
#[command(
    name = "ucsb-admin-cli",
    version,
    about = "Manage help requests, reviews, organizations and articles on a UCSB admin backend",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub overrides: SettingsOverrides,

    /// Session cookie from env (CLI flag hidden to avoid shell history leaks)
    #[arg(
        long = "session",
        hide = true,
        env = "UCSB_ADMIN_SESSION",
        hide_env_values = true
    )]
    pub session_env: Option<String>,

    /// Output format for list and read commands
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the signed-in user and roles
    Whoami,
    /// Help requests
    HelpRequests {
        #[command(subcommand)]
        action: HelpRequestsCmd,
    },
    /// Menu item reviews
    MenuItemReviews {
        #[command(subcommand)]
        action: MenuItemReviewsCmd,
    },
    /// Recommendation requests
    RecommendationRequests {
        #[command(subcommand)]
        action: RecommendationRequestsCmd,
    },
    /// Student organizations
    Organizations {
        #[command(subcommand)]
        action: OrganizationsCmd,
    },
    /// Dining commons menu items
    MenuItems {
        #[command(subcommand)]
        action: MenuItemsCmd,
    },
    /// Articles
    Articles {
        #[command(subcommand)]
        action: ArticlesCmd,
    },
}

#[derive(Subcommand, Debug)]
pub enum HelpRequestsCmd {
    /// List all help requests
    List,
    /// Show one help request
    Get {
        #[arg(long)]
        id: String,
    },
    /// Create a help request
    Create {
        #[command(flatten)]
        fields: HelpRequestFields,
    },
    /// Change fields of an existing help request
    Update {
        #[arg(long)]
        id: String,
        #[command(flatten)]
        fields: HelpRequestFields,
    },
    /// Delete a help request
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct HelpRequestFields {
    #[arg(long)]
    pub requester_email: Option<String>,
    #[arg(long)]
    pub team_id: Option<String>,
    #[arg(long)]
    pub table_or_breakout_room: Option<String>,
    /// Local date-time, e.g. 2022-04-20T17:35
    #[arg(long, value_parser = parse_local_datetime)]
    pub request_time: Option<String>,
    #[arg(long)]
    pub explanation: Option<String>,
    #[arg(long, value_parser = BoolishValueParser::new())]
    pub solved: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum MenuItemReviewsCmd {
    /// List all reviews
    List,
    /// Show one review
    Get {
        #[arg(long)]
        id: String,
    },
    /// Create a review
    Create {
        #[command(flatten)]
        fields: MenuItemReviewFields,
    },
    /// Change fields of an existing review
    Update {
        #[arg(long)]
        id: String,
        #[command(flatten)]
        fields: MenuItemReviewFields,
    },
    /// Delete a review
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct MenuItemReviewFields {
    #[arg(long)]
    pub item_id: Option<i64>,
    #[arg(long)]
    pub reviewer_email: Option<String>,
    #[arg(long, value_parser = clap::value_parser!(i32).range(0..=5))]
    pub stars: Option<i32>,
    /// Local date-time, e.g. 2022-01-02T12:00
    #[arg(long, value_parser = parse_local_datetime)]
    pub date_reviewed: Option<String>,
    #[arg(long)]
    pub comments: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum RecommendationRequestsCmd {
    /// List all recommendation requests
    List,
    /// Show one recommendation request
    Get {
        #[arg(long)]
        id: String,
    },
    /// Create a recommendation request
    Create {
        #[command(flatten)]
        fields: RecommendationRequestFields,
    },
    /// Change fields of an existing recommendation request
    Update {
        #[arg(long)]
        id: String,
        #[command(flatten)]
        fields: RecommendationRequestFields,
    },
    /// Delete a recommendation request
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct RecommendationRequestFields {
    #[arg(long)]
    pub requester_email: Option<String>,
    #[arg(long)]
    pub professor_email: Option<String>,
    #[arg(long)]
    pub explanation: Option<String>,
    #[arg(long, value_parser = parse_local_datetime)]
    pub date_requested: Option<String>,
    #[arg(long, value_parser = parse_local_datetime)]
    pub date_needed: Option<String>,
    #[arg(long, value_parser = BoolishValueParser::new())]
    pub done: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum OrganizationsCmd {
    /// List all organizations
    List,
    /// Show one organization
    Get {
        #[arg(long)]
        org_code: String,
    },
    /// Create an organization
    Create {
        #[arg(long)]
        org_code: String,
        #[command(flatten)]
        fields: OrganizationFields,
    },
    /// Change fields of an existing organization
    Update {
        #[arg(long)]
        org_code: String,
        #[command(flatten)]
        fields: OrganizationFields,
    },
    /// Delete an organization
    Delete {
        #[arg(long)]
        org_code: String,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct OrganizationFields {
    #[arg(long)]
    pub org_translation_short: Option<String>,
    #[arg(long)]
    pub org_translation: Option<String>,
    #[arg(long, value_parser = BoolishValueParser::new())]
    pub inactive: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum MenuItemsCmd {
    /// List all menu items
    List,
    /// Show one menu item
    Get {
        #[arg(long)]
        id: String,
    },
    /// Create a menu item
    Create {
        #[command(flatten)]
        fields: MenuItemFields,
    },
    /// Change fields of an existing menu item
    Update {
        #[arg(long)]
        id: String,
        #[command(flatten)]
        fields: MenuItemFields,
    },
    /// Delete a menu item
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct MenuItemFields {
    #[arg(long)]
    pub dining_commons_code: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub station: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ArticlesCmd {
    /// List all articles
    List,
    /// Show one article
    Get {
        #[arg(long)]
        id: String,
    },
    /// Create an article
    Create {
        #[command(flatten)]
        fields: ArticleFields,
    },
    /// Change fields of an existing article
    Update {
        #[arg(long)]
        id: String,
        #[command(flatten)]
        fields: ArticleFields,
    },
    /// Delete an article
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct ArticleFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub explanation: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long, value_parser = parse_local_datetime)]
    pub date_added: Option<String>,
}
