//! Sale records and the sale creation payload.

use chrono::{DateTime, Utc};
use ledgerline_core::{BranchId, HasId, InvestorId, PaymentMethod, SaleId, SaleStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::BranchRef;
use super::investor::InvestorRef;
use super::user::UserRef;

/// A recorded sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    #[serde(rename = "_id")]
    pub id: SaleId,
    /// The staff member who logged the sale.
    pub user: UserRef,
    pub branch_id: BranchRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investor_id: Option<InvestorRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer_id: Option<InvestorRef>,
    pub customer_name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub commission: Decimal,
    /// When the sale occurred.
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub status: SaleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

impl HasId for Sale {
    type Id = SaleId;

    fn id(&self) -> &SaleId {
        &self.id
    }
}

/// Payload for logging a sale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSale {
    pub branch: BranchId,
    pub investor: InvestorId,
    /// Absent for a company referral (no human referrer).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<InvestorId>,
    pub customer_name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub commission: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub investor_profit: Decimal,
    pub payment_method: PaymentMethod,
}

/// Response to a sale creation: the record plus an optional generated
/// document path for printing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedSale {
    #[serde(flatten)]
    pub sale: Sale,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_path: Option<String>,
}
