//! Core type definitions.
//!
//! Everything here is plain data: newtype IDs, role and status enums, the
//! [`Ref`] union for reference fields that may arrive either as a raw id or
//! as an expanded record, and the pagination envelope returned by list
//! endpoints.

mod id;
mod page;
mod reference;
mod role;

pub use id::{BranchId, InvestorId, SaleId, UserId};
pub use page::{Page, PageInfo, PageLimit};
pub use reference::{HasId, Ref};
pub use role::{
    InvestorRole, InvestorStatus, PaymentMethod, ProductStatus, SaleStatus, UserRole,
};
