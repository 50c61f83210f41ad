//! Sale-logging form state and its derived-selection rules.
//!
//! Two reactive rules are recomputed whenever their inputs change:
//!
//! 1. **Branch auto-fill** - the session identity's assigned branch fills
//!    the form's branch selection once, and never overrides a manual
//!    selection.
//! 2. **Referrer auto-select** - selecting an investor looks up its
//!    recorded upline in the loaded investor collection: found, the upline
//!    becomes the referrer; absent, the referrer resets to the company
//!    sentinel (a direct sale with no human referrer). The rule is
//!    idempotent per selected investor.

use rust_decimal::Decimal;
use thiserror::Error;

use ledgerline_core::{BranchId, HasId, InvestorId, PaymentMethod, ProductStatus};

use crate::models::{Investor, NewSale, SessionUser};

/// Wire value of the company-referral sentinel.
pub const COMPANY_REFERRER: &str = "company";

/// Referrer selection in the sale form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReferrerSelection {
    /// No human referrer; commission flows to the organization.
    #[default]
    Company,
    Investor(InvestorId),
}

/// Commission rate tiers offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommissionTier {
    /// 5%
    #[default]
    Standard,
    /// 8%
    Premium,
}

impl CommissionTier {
    #[must_use]
    pub fn rate(self) -> Decimal {
        match self {
            Self::Standard => Decimal::new(5, 2),
            Self::Premium => Decimal::new(8, 2),
        }
    }
}

/// Validation failure: the action is never dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Missing required fields, in the order they are checked.
    #[error("Please provide: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// State of the sale-logging form.
///
/// The form is plain client-side state; nothing here performs I/O. A failed
/// submission leaves the form populated so resubmission is possible.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleForm {
    description: String,
    amount: Decimal,
    commission_rate: Decimal,
    investor_profit_rate: Decimal,
    product_status: ProductStatus,
    branch: Option<BranchId>,
    branch_chosen_manually: bool,
    investor: Option<InvestorId>,
    referrer: ReferrerSelection,
    payment_method: Option<PaymentMethod>,
}

impl Default for SaleForm {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: Decimal::ZERO,
            commission_rate: CommissionTier::Standard.rate(),
            investor_profit_rate: Decimal::new(10, 2),
            product_status: ProductStatus::WithProduct,
            branch: None,
            branch_chosen_manually: false,
            investor: None,
            referrer: ReferrerSelection::Company,
            payment_method: Some(PaymentMethod::CashInHand),
        }
    }
}

impl SaleForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_amount(&mut self, amount: Decimal) {
        self.amount = amount;
    }

    /// Choose one of the offered commission tiers.
    ///
    /// The tier selector and the product selector are independent,
    /// non-interacting inputs; only the rate feeds the computed commission.
    pub fn choose_commission_tier(&mut self, tier: CommissionTier) {
        self.commission_rate = tier.rate();
    }

    pub fn set_investor_profit_rate(&mut self, rate: Decimal) {
        self.investor_profit_rate = rate;
    }

    pub fn set_product_status(&mut self, status: ProductStatus) {
        self.product_status = status;
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = Some(method);
    }

    /// Manually select a branch. A manual selection is never overridden by
    /// the session auto-fill.
    pub fn select_branch(&mut self, branch: BranchId) {
        self.branch = Some(branch);
        self.branch_chosen_manually = true;
    }

    /// Rule 1: fill the branch from the session identity's assigned branch,
    /// if no branch is selected yet.
    pub fn apply_session(&mut self, user: &SessionUser) {
        if self.branch.is_some() {
            return;
        }
        if let Some(branch) = &user.branch {
            self.branch = Some(branch.id().clone());
        }
    }

    /// Rule 2: select an investor and derive the referrer selection from
    /// its recorded upline in the loaded collection.
    pub fn select_investor(&mut self, investor: InvestorId, investors: &[Investor]) {
        let upline = investors
            .iter()
            .find(|candidate| candidate.id() == &investor)
            .and_then(|record| record.upline.as_ref())
            .map(|upline| upline.id().clone());

        self.referrer = upline.map_or(ReferrerSelection::Company, ReferrerSelection::Investor);
        self.investor = Some(investor);
    }

    /// Manually override the referrer selection.
    pub fn select_referrer(&mut self, referrer: ReferrerSelection) {
        self.referrer = referrer;
    }

    #[must_use]
    pub const fn branch(&self) -> Option<&BranchId> {
        self.branch.as_ref()
    }

    #[must_use]
    pub const fn investor(&self) -> Option<&InvestorId> {
        self.investor.as_ref()
    }

    #[must_use]
    pub const fn referrer(&self) -> &ReferrerSelection {
        &self.referrer
    }

    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    #[must_use]
    pub const fn commission_rate(&self) -> Decimal {
        self.commission_rate
    }

    /// The commission to submit: `rate × amount`.
    #[must_use]
    pub fn commission(&self) -> Decimal {
        self.amount * self.commission_rate
    }

    /// The investor's profit share: `profit rate × amount`.
    #[must_use]
    pub fn investor_profit(&self) -> Decimal {
        self.amount * self.investor_profit_rate
    }

    /// Required fields still missing, in the order they are checked.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.investor.is_none() {
            missing.push("Investor");
        }
        if self.description.is_empty() {
            missing.push("Description");
        }
        if self.amount == Decimal::ZERO {
            missing.push("Amount");
        }
        if self.payment_method.is_none() {
            missing.push("Payment Method");
        }
        if self.branch.is_none() {
            missing.push("Branch");
        }
        missing
    }

    /// Validate and build the submission payload.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingFields`] listing the missing required
    /// fields; nothing is dispatched in that case.
    pub fn payload(&self, customer_name: impl Into<String>) -> Result<NewSale, FormError> {
        match (
            &self.branch,
            &self.investor,
            self.payment_method,
            self.missing_fields(),
        ) {
            (Some(branch), Some(investor), Some(payment_method), missing)
                if missing.is_empty() =>
            {
                let referrer = match &self.referrer {
                    ReferrerSelection::Company => None,
                    ReferrerSelection::Investor(id) => Some(id.clone()),
                };

                Ok(NewSale {
                    branch: branch.clone(),
                    investor: investor.clone(),
                    referrer,
                    customer_name: customer_name.into(),
                    description: self.description.clone(),
                    amount: self.amount,
                    commission: self.commission(),
                    investor_profit: self.investor_profit(),
                    payment_method,
                })
            }
            (.., missing) => Err(FormError::MissingFields(missing)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerline_core::{InvestorRole, Ref, UserId, UserRole};

    fn investor(id: &str, upline: Option<&str>) -> Investor {
        Investor {
            id: InvestorId::new(id),
            full_name: format!("Investor {id}"),
            email: format!("{id}@example.com"),
            phone: "0300-0000000".to_owned(),
            address: "12 Canal Road".to_owned(),
            role: InvestorRole::Investor,
            upline: upline.map(|u| Ref::Id(InvestorId::new(u))),
            status: None,
            product_status: None,
            profit_rate: None,
            commission_rate: None,
            created_at: None,
        }
    }

    fn session_user_with_branch(branch: Option<&str>) -> SessionUser {
        SessionUser {
            id: UserId::new("u-1"),
            name: "Sana Tariq".to_owned(),
            email: "sana@example.com".to_owned(),
            role: UserRole::SalesRep,
            token: "jwt".to_owned(),
            branch: branch.map(|b| Ref::Id(ledgerline_core::BranchId::new(b))),
            profit_rate: None,
            commission_rate: None,
        }
    }

    #[test]
    fn test_branch_autofill_from_session() {
        let mut form = SaleForm::new();
        form.apply_session(&session_user_with_branch(Some("b-1")));
        assert_eq!(form.branch(), Some(&BranchId::new("b-1")));
    }

    #[test]
    fn test_branch_autofill_never_overrides_manual_selection() {
        let mut form = SaleForm::new();
        form.select_branch(BranchId::new("b-2"));
        form.apply_session(&session_user_with_branch(Some("b-1")));
        assert_eq!(form.branch(), Some(&BranchId::new("b-2")));
    }

    #[test]
    fn test_referrer_auto_selects_upline() {
        let investors = vec![investor("inv-1", Some("U123")), investor("U123", None)];
        let mut form = SaleForm::new();

        form.select_investor(InvestorId::new("inv-1"), &investors);
        assert_eq!(
            form.referrer(),
            &ReferrerSelection::Investor(InvestorId::new("U123"))
        );
    }

    #[test]
    fn test_referrer_resets_to_company_without_upline() {
        let investors = vec![investor("inv-1", Some("U123")), investor("inv-2", None)];
        let mut form = SaleForm::new();

        form.select_investor(InvestorId::new("inv-1"), &investors);
        form.select_investor(InvestorId::new("inv-2"), &investors);
        assert_eq!(form.referrer(), &ReferrerSelection::Company);
    }

    #[test]
    fn test_referrer_selection_is_idempotent() {
        let investors = vec![investor("inv-1", Some("U123"))];
        let mut form = SaleForm::new();

        form.select_investor(InvestorId::new("inv-1"), &investors);
        let first = form.referrer().clone();
        form.select_investor(InvestorId::new("inv-1"), &investors);
        assert_eq!(form.referrer(), &first);
    }

    #[test]
    fn test_commission_is_rate_times_amount() {
        let mut form = SaleForm::new();
        form.set_amount(Decimal::new(1000, 0));
        assert_eq!(form.commission(), Decimal::new(5000, 2)); // 50.00

        form.choose_commission_tier(CommissionTier::Premium);
        assert_eq!(form.commission(), Decimal::new(80_000, 3)); // 80.000
    }

    #[test]
    fn test_missing_fields_listed_in_check_order() {
        let form = SaleForm::new();
        assert_eq!(
            form.missing_fields(),
            vec!["Investor", "Description", "Amount", "Branch"]
        );

        let err = form.payload("Walk-in Client").expect_err("must not build");
        assert_eq!(
            err.to_string(),
            "Please provide: Investor, Description, Amount, Branch"
        );
    }

    #[test]
    fn test_payload_rejects_partially_filled_form() {
        let investors = vec![investor("inv-1", None)];
        let mut form = SaleForm::new();
        form.select_investor(InvestorId::new("inv-1"), &investors);
        form.select_branch(BranchId::new("b-1"));

        let err = form.payload("Walk-in Client").expect_err("must not build");
        assert_eq!(
            err,
            FormError::MissingFields(vec!["Description", "Amount"])
        );
    }

    #[test]
    fn test_payload_maps_company_referral_to_none() {
        let investors = vec![investor("inv-2", None)];
        let mut form = SaleForm::new();
        form.select_investor(InvestorId::new("inv-2"), &investors);
        form.set_description("gold package");
        form.set_amount(Decimal::new(1000, 0));
        form.select_branch(BranchId::new("b-1"));

        let payload = form.payload("Walk-in Client").expect("valid form");
        assert!(payload.referrer.is_none());
        assert_eq!(payload.commission, Decimal::new(5000, 2));
        assert_eq!(payload.investor_profit, Decimal::new(100_000, 3)); // 100.000
    }
}
