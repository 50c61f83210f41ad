//! Investor/referrer records.
//!
//! Investors and referrers are the same entity distinguished by a role tag.
//! The optional `upline` reference points at whoever introduced this
//! investor, forming a tree (cycles are not checked client-side).

use chrono::{DateTime, Utc};
use ledgerline_core::{HasId, InvestorId, InvestorRole, InvestorStatus, ProductStatus, Ref};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An investor or referrer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
    #[serde(rename = "_id")]
    pub id: InvestorId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub role: InvestorRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upline: Option<InvestorRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InvestorStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_status: Option<ProductStatus>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub profit_rate: Option<Decimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub commission_rate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl HasId for Investor {
    type Id = InvestorId;

    fn id(&self) -> &InvestorId {
        &self.id
    }
}

/// Reference to an investor, bare id or embedded record.
pub type InvestorRef = Ref<InvestorId, Investor>;

/// Payload for onboarding an investor or referrer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestor {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub role: InvestorRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upline: Option<InvestorId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_status: Option<ProductStatus>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub profit_rate: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub commission_rate: Option<Decimal>,
}
