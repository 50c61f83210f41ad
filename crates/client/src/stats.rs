//! Derived totals over the fetched sales page.

use rust_decimal::Decimal;

use crate::models::Sale;

/// Amount and commission sums for a dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SaleTotals {
    pub amount: Decimal,
    pub commission: Decimal,
}

/// Sum amount and commission over a page of sales.
///
/// Operates on whatever page is currently fetched, not the whole ledger.
#[must_use]
pub fn sale_totals(sales: &[Sale]) -> SaleTotals {
    sales.iter().fold(SaleTotals::default(), |acc, sale| SaleTotals {
        amount: acc.amount + sale.amount,
        commission: acc.commission + sale.commission,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ledgerline_core::{BranchId, Ref, SaleId, SaleStatus, UserId};

    fn sale(amount: i64, commission: i64) -> Sale {
        Sale {
            id: SaleId::new(format!("s-{amount}")),
            user: Ref::Id(UserId::new("u-1")),
            branch_id: Ref::Id(BranchId::new("b-1")),
            investor_id: None,
            referrer_id: None,
            customer_name: "Walk-in Client".to_owned(),
            description: "test".to_owned(),
            amount: Decimal::new(amount, 0),
            commission: Decimal::new(commission, 0),
            date: Utc::now(),
            created_at: Utc::now(),
            status: SaleStatus::Pending,
            payment_method: None,
        }
    }

    #[test]
    fn test_totals_sum_the_page() {
        let sales = vec![sale(1000, 50), sale(500, 25)];
        let totals = sale_totals(&sales);
        assert_eq!(totals.amount, Decimal::new(1500, 0));
        assert_eq!(totals.commission, Decimal::new(75, 0));
    }

    #[test]
    fn test_totals_of_empty_page_are_zero() {
        assert_eq!(sale_totals(&[]), SaleTotals::default());
    }
}
