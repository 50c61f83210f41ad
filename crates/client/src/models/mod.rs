//! Domain records and request payloads exchanged with the remote API.
//!
//! Field names follow the wire contract (camelCase, Mongo-style `_id`).
//! Reference fields use [`ledgerline_core::Ref`] so an id-or-embedded-record
//! shape is resolved once here instead of at every use site.

mod branch;
mod investor;
mod sale;
mod session;
mod user;

pub use branch::{Branch, NewBranch};
pub use investor::{Investor, InvestorRef, NewInvestor};
pub use sale::{CreatedSale, NewSale, Sale};
pub use session::{LoginCredentials, RegisterCredentials, SessionUser};
pub use user::{User, UserRef};

use ledgerline_core::{BranchId, Ref};

/// Reference to a branch, bare id or embedded record.
pub type BranchRef = Ref<BranchId, Branch>;
