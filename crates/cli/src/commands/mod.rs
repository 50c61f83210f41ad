//! Command implementations.
//!
//! Every command connects its own [`Console`] from environment
//! configuration, so each invocation rehydrates the persisted session.

pub mod directory;
pub mod sales;
pub mod session;

use clap::ValueEnum;
use thiserror::Error;

use ledgerline_client::{ClientConfig, ConfigError, Console, VaultError};
use ledgerline_client::form::CommissionTier;
use ledgerline_core::PaymentMethod;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The persisted session could not be read or cleared.
    #[error(transparent)]
    Vault(#[from] VaultError),

    /// The API rejected the action; the message is user-facing.
    #[error("{0}")]
    Action(String),

    /// No authenticated session where one is required.
    #[error("Not signed in. Run `ledgerline session login` first.")]
    NotSignedIn,
}

impl From<String> for CliError {
    fn from(message: String) -> Self {
        Self::Action(message)
    }
}

/// Commission tier flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CommissionTierArg {
    /// 5%
    Standard,
    /// 8%
    Premium,
}

impl From<CommissionTierArg> for CommissionTier {
    fn from(arg: CommissionTierArg) -> Self {
        match arg {
            CommissionTierArg::Standard => Self::Standard,
            CommissionTierArg::Premium => Self::Premium,
        }
    }
}

/// Payment method flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaymentMethodArg {
    Cash,
    Bank,
}

impl From<PaymentMethodArg> for PaymentMethod {
    fn from(arg: PaymentMethodArg) -> Self {
        match arg {
            PaymentMethodArg::Cash => Self::CashInHand,
            PaymentMethodArg::Bank => Self::BankAccount,
        }
    }
}

/// Connect a console from the environment, hydrating any persisted session.
pub fn console() -> Result<Console, CliError> {
    dotenvy::dotenv().ok();
    let config = ClientConfig::from_env()?;
    Ok(Console::connect(&config)?)
}
