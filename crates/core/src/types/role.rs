//! Role and status enums for users, investors, and sales.

use serde::{Deserialize, Serialize};

/// Account role carried by the session identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full access, including the admin entry point.
    SuperAdmin,
    /// Manages a single branch.
    BranchManager,
    /// Logs sales for a branch.
    SalesRep,
    Investor,
    Referrer,
}

impl UserRole {
    /// Whether this role may use the staff console pages.
    #[must_use]
    pub const fn is_staff(self) -> bool {
        matches!(self, Self::SuperAdmin | Self::BranchManager | Self::SalesRep)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SuperAdmin => write!(f, "super_admin"),
            Self::BranchManager => write!(f, "branch_manager"),
            Self::SalesRep => write!(f, "sales_rep"),
            Self::Investor => write!(f, "investor"),
            Self::Referrer => write!(f, "referrer"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Self::SuperAdmin),
            "branch_manager" => Ok(Self::BranchManager),
            "sales_rep" => Ok(Self::SalesRep),
            "investor" => Ok(Self::Investor),
            "referrer" => Ok(Self::Referrer),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

/// Role tag distinguishing investors from referrers (same entity otherwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InvestorRole {
    #[default]
    Investor,
    Referrer,
}

/// Account standing of an investor/referrer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InvestorStatus {
    #[default]
    Active,
    Banned,
}

/// Whether an investor joined with or without a product purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    WithProduct,
    WithoutProduct,
}

/// Settlement status of a sale record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    #[default]
    Pending,
    Completed,
    Rejected,
}

/// Payment method for a sale.
///
/// The wire values are the remote API's display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "Cash in hand")]
    CashInHand,
    #[serde(rename = "Bank account")]
    BankAccount,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CashInHand => write!(f, "Cash in hand"),
            Self::BankAccount => write!(f, "Bank account"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_round_trip() {
        for role in [
            UserRole::SuperAdmin,
            UserRole::BranchManager,
            UserRole::SalesRep,
            UserRole::Investor,
            UserRole::Referrer,
        ] {
            let parsed: UserRole = role.to_string().parse().expect("parse role");
            assert_eq!(parsed, role);
        }
        assert!("branch_admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_staff_roles() {
        assert!(UserRole::SalesRep.is_staff());
        assert!(UserRole::BranchManager.is_staff());
        assert!(UserRole::SuperAdmin.is_staff());
        assert!(!UserRole::Investor.is_staff());
        assert!(!UserRole::Referrer.is_staff());
    }

    #[test]
    fn test_payment_method_wire_values() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CashInHand).expect("serialize"),
            "\"Cash in hand\""
        );
        let method: PaymentMethod =
            serde_json::from_str("\"Bank account\"").expect("deserialize");
        assert_eq!(method, PaymentMethod::BankAccount);
    }
}
