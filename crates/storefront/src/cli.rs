//! Clap derive structures for the `storefront` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use storefront_core::model::{Status, UserRole};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// storefront -- manage the user directory and product catalog
#[derive(Debug, Parser)]
#[command(
    name = "storefront",
    version,
    about = "Browse and manage users and products from the command line",
    long_about = "A CLI over the public user-directory and product-catalog APIs.\n\n\
        Results are normalized into a single domain model and can be\n\
        searched, filtered, and paginated locally.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Path to the config file (defaults to the platform config dir)
    #[arg(long, env = "STOREFRONT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// User-directory base URL
    #[arg(long, env = "STOREFRONT_DIRECTORY_URL", global = true)]
    pub directory_url: Option<String>,

    /// Product-catalog base URL
    #[arg(long, env = "STOREFRONT_CATALOG_URL", global = true)]
    pub catalog_url: Option<String>,

    /// Bearer token for authenticated upstreams
    #[arg(long, env = "STOREFRONT_API_TOKEN", global = true, hide_env = true)]
    pub api_token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "STOREFRONT_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, env = "STOREFRONT_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one identifier per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage directory users
    #[command(alias = "u")]
    Users(UsersArgs),

    /// Manage catalog products
    #[command(alias = "p", alias = "prod")]
    Products(ProductsArgs),

    /// Show the current user profile
    Profile,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared List Arguments ────────────────────────────────────────────

/// Shared search and pagination arguments for list commands.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive substring search
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Page number (1-indexed)
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Results per page
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,

    /// Persist this search/facet combination as the default filter
    #[arg(long)]
    pub save_filters: bool,
}

// ── Users ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List users
    #[command(alias = "ls")]
    List(UserListArgs),

    /// Show one user
    Get {
        /// User identifier
        id: String,
    },

    /// Create a user
    Create {
        /// Email address
        #[arg(long)]
        email: String,

        /// First name
        #[arg(long)]
        first_name: String,

        /// Last name
        #[arg(long, default_value = "")]
        last_name: String,

        /// Role to assign
        #[arg(long, value_enum, default_value = "user")]
        role: RoleArg,
    },

    /// Update a user (only the provided fields change)
    Update {
        /// User identifier
        id: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long, value_enum)]
        role: Option<RoleArg>,

        #[arg(long, value_enum)]
        status: Option<StatusArg>,
    },

    /// Delete a user
    #[command(alias = "rm")]
    Delete {
        /// User identifier
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct UserListArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Only show users with this role
    #[arg(long, value_enum)]
    pub role: Option<RoleArg>,
}

// ── Products ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    /// List products
    #[command(alias = "ls")]
    List(ProductListArgs),

    /// Show one product
    Get {
        /// Product identifier
        id: String,
    },

    /// Create a product
    Create {
        /// Product name
        #[arg(long)]
        name: String,

        /// Description
        #[arg(long, default_value = "")]
        description: String,

        /// Unit price
        #[arg(long)]
        price: f64,

        /// Category
        #[arg(long)]
        category: String,

        /// Image URL
        #[arg(long)]
        image: Option<String>,
    },

    /// Update a product (only the provided fields change)
    Update {
        /// Product identifier
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        image: Option<String>,
    },

    /// Delete a product
    #[command(alias = "rm")]
    Delete {
        /// Product identifier
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct ProductListArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Only show products in this category
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Minimum price
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price
    #[arg(long)]
    pub max_price: Option<f64>,
}

// ── Value-enum bridges ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoleArg {
    Admin,
    User,
    Moderator,
}

impl From<RoleArg> for UserRole {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Admin => Self::Admin,
            RoleArg::User => Self::User,
            RoleArg::Moderator => Self::Moderator,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Active,
    Inactive,
    Pending,
    Deleted,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Active => Self::Active,
            StatusArg::Inactive => Self::Inactive,
            StatusArg::Pending => Self::Pending,
            StatusArg::Deleted => Self::Deleted,
        }
    }
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}
