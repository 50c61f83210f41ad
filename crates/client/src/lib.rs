//! Ledgerline client - headless SDK for the sales/investor console API.
//!
//! The SDK owns the asynchronous request/session lifecycle: every
//! user-triggered action (login, fetch, create) walks pending →
//! fulfilled/rejected, updates a client-side store, and leaves the view
//! layer to re-render from a store snapshot.
//!
//! # Architecture
//!
//! - [`api`] - typed reqwest client behind the [`api::AuthApi`] and
//!   [`api::DataApi`] trait seams
//! - [`store`] - session and resource stores with the loading-flag
//!   concurrency gate
//! - [`form`] - sale-form state and the derived-selection rules
//! - [`vault`] - persisted session storage
//! - [`console`] - the owned context wiring it all together
//!
//! # Example
//!
//! ```rust,ignore
//! use ledgerline_client::{ClientConfig, Console, LoginCredentials};
//!
//! let console = Console::connect(&ClientConfig::from_env()?)?;
//! console.login(&LoginCredentials::new("a@b.com", "secret123")).await?;
//! console.sales.fetch(&Default::default()).await;
//! let totals = console.sales.totals();
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod access;
pub mod api;
pub mod config;
pub mod console;
pub mod error;
pub mod form;
pub mod models;
pub mod stats;
pub mod store;
pub mod vault;

pub use access::{Access, Route};
pub use api::{ApiClient, AuthApi, DataApi, InvestorQuery, SalesQuery};
pub use config::{ClientConfig, ConfigError};
pub use console::Console;
pub use error::{ApiError, VaultError};
pub use form::{CommissionTier, FormError, ReferrerSelection, SaleForm};
pub use models::{
    Branch, CreatedSale, Investor, LoginCredentials, NewBranch, NewInvestor, NewSale,
    RegisterCredentials, Sale, SessionUser,
};
pub use stats::{SaleTotals, sale_totals};
pub use store::{
    BranchStore, FetchOutcome, InvestorStore, ResourceSnapshot, SalesStore, SessionSnapshot,
    SessionStore,
};
pub use vault::{FileVault, MemoryVault, SessionVault};
