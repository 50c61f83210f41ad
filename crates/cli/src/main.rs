//! Ledgerline CLI - terminal console for the sales/investor API.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (the session persists to a local file)
//! ledgerline session login -e rep@example.com -p secret123
//!
//! # Inspect the current identity
//! ledgerline session whoami
//!
//! # List branches and investors
//! ledgerline directory branches
//! ledgerline directory investors --all
//!
//! # Log a sale and review the dashboard totals
//! ledgerline sales log -i 64a1f0... -d "premium package" -a 1000
//! ledgerline sales dashboard
//! ```
//!
//! # Commands
//!
//! - `session` - login, admin login, register, password recovery and
//!   change, profile update, logout, whoami
//! - `directory` - branches and investors (list, create)
//! - `sales` - list, log, dashboard totals

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;

use commands::{CommissionTierArg, PaymentMethodArg};

#[derive(Parser)]
#[command(name = "ledgerline")]
#[command(author, version, about = "Ledgerline sales console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the authenticated session
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
    /// Browse and extend the branch/investor directory
    Directory {
        #[command(subcommand)]
        action: DirectoryAction,
    },
    /// List, log, and summarize sales
    Sales {
        #[command(subcommand)]
        action: SalesAction,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Sign in as a staff member
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Sign in against the admin entry point
    AdminLogin {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Register a new account and sign in
    Register {
        /// First name
        #[arg(long)]
        first_name: String,

        /// Last name
        #[arg(long)]
        last_name: String,

        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Request a password-reset link
    ForgotPassword {
        /// Account email address
        #[arg(short, long)]
        email: String,
    },
    /// Set a new password using a reset token
    ResetPassword {
        /// Reset token from the emailed link
        #[arg(short, long)]
        token: String,

        /// New password
        #[arg(short, long)]
        password: String,
    },
    /// Change the signed-in account's password
    ChangePassword {
        /// Current password
        #[arg(short, long)]
        current: String,

        /// New password
        #[arg(short, long)]
        new: String,
    },
    /// Update the signed-in account's name and email
    UpdateProfile {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,
    },
    /// Clear the persisted session
    Logout,
    /// Show the current identity
    Whoami,
}

#[derive(Subcommand)]
enum DirectoryAction {
    /// List branches
    Branches,
    /// Create a branch
    AddBranch {
        /// Branch name
        #[arg(short, long)]
        name: String,

        /// City
        #[arg(short, long)]
        city: String,

        /// State or province
        #[arg(short, long)]
        state: String,

        /// Street address
        #[arg(short, long)]
        address: String,
    },
    /// List investors
    Investors {
        /// Page to fetch
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Fetch the whole collection in one response
        #[arg(long, conflicts_with = "page")]
        all: bool,

        /// Restrict the listing to referrers
        #[arg(long)]
        referrers: bool,
    },
    /// Create an investor
    AddInvestor {
        /// Full name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Phone number
        #[arg(long)]
        phone: String,

        /// Street address
        #[arg(short, long)]
        address: String,

        /// Upline investor id (omit for a direct signup)
        #[arg(short, long)]
        upline: Option<String>,
    },
}

#[derive(Subcommand)]
enum SalesAction {
    /// List sales
    List {
        /// Page to fetch
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Earliest sale date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest sale date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Log a sale
    Log {
        /// Investor id the sale is recorded against
        #[arg(short, long)]
        investor: String,

        /// Sale description
        #[arg(short, long)]
        description: String,

        /// Sale amount
        #[arg(short, long)]
        amount: Decimal,

        /// Commission tier (`standard` 5%, `premium` 8%)
        #[arg(short, long, value_enum, default_value_t = CommissionTierArg::Standard)]
        tier: CommissionTierArg,

        /// Payment method
        #[arg(long, value_enum, default_value_t = PaymentMethodArg::Cash)]
        payment: PaymentMethodArg,

        /// Customer name recorded on the sale
        #[arg(long, default_value = "Walk-in Client")]
        customer: String,

        /// Branch id (defaults to the session's assigned branch)
        #[arg(short, long)]
        branch: Option<String>,
    },
    /// Show amount and commission totals over the latest page
    Dashboard,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Session { action } => match action {
            SessionAction::Login { email, password } => {
                commands::session::login(&email, &password).await?;
            }
            SessionAction::AdminLogin { email, password } => {
                commands::session::admin_login(&email, &password).await?;
            }
            SessionAction::Register {
                first_name,
                last_name,
                email,
                password,
            } => {
                commands::session::register(&first_name, &last_name, &email, &password).await?;
            }
            SessionAction::ForgotPassword { email } => {
                commands::session::forgot_password(&email).await?;
            }
            SessionAction::ResetPassword { token, password } => {
                commands::session::reset_password(&token, &password).await?;
            }
            SessionAction::ChangePassword { current, new } => {
                commands::session::change_password(&current, &new).await?;
            }
            SessionAction::UpdateProfile { name, email } => {
                commands::session::update_profile(&name, &email).await?;
            }
            SessionAction::Logout => commands::session::logout()?,
            SessionAction::Whoami => commands::session::whoami()?,
        },
        Commands::Directory { action } => match action {
            DirectoryAction::Branches => commands::directory::list_branches().await?,
            DirectoryAction::AddBranch {
                name,
                city,
                state,
                address,
            } => {
                commands::directory::add_branch(&name, &city, &state, &address).await?;
            }
            DirectoryAction::Investors {
                page,
                all,
                referrers,
            } => {
                commands::directory::list_investors(page, all, referrers).await?;
            }
            DirectoryAction::AddInvestor {
                name,
                email,
                phone,
                address,
                upline,
            } => {
                commands::directory::add_investor(&name, &email, &phone, &address, upline.as_deref())
                    .await?;
            }
        },
        Commands::Sales { action } => match action {
            SalesAction::List { page, from, to } => {
                commands::sales::list(page, from, to).await?;
            }
            SalesAction::Log {
                investor,
                description,
                amount,
                tier,
                payment,
                customer,
                branch,
            } => {
                commands::sales::log(
                    &investor,
                    &description,
                    amount,
                    tier,
                    payment,
                    &customer,
                    branch.as_deref(),
                )
                .await?;
            }
            SalesAction::Dashboard => commands::sales::dashboard().await?,
        },
    }
    Ok(())
}
