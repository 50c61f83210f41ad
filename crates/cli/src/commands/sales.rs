//! Sales commands: listing, logging, dashboard totals.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use ledgerline_client::api::{InvestorQuery, SalesQuery};
use ledgerline_client::form::SaleForm;
use ledgerline_client::store::FetchOutcome;
use ledgerline_core::{BranchId, InvestorId};

use super::{CliError, CommissionTierArg, PaymentMethodArg, console};

pub async fn list(page: u32, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<(), CliError> {
    let console = console()?;
    let query = SalesQuery {
        page,
        start_date: from,
        end_date: to,
        ..SalesQuery::default()
    };

    match console.sales.fetch(&query).await {
        FetchOutcome::Completed => {}
        FetchOutcome::Suppressed => return Ok(()),
    }

    let snapshot = console.sales.snapshot();
    if let Some(message) = snapshot.error {
        return Err(CliError::Action(message));
    }

    tracing::info!(
        "Page {}/{} ({} total)",
        snapshot.page_info.page,
        snapshot.page_info.pages,
        snapshot.page_info.total
    );
    for sale in &snapshot.items {
        tracing::info!(
            "  {}  {}  {}  amount: {}  commission: {}",
            sale.id,
            sale.date.date_naive(),
            sale.description,
            sale.amount,
            sale.commission
        );
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn log(
    investor: &str,
    description: &str,
    amount: Decimal,
    tier: CommissionTierArg,
    payment: PaymentMethodArg,
    customer: &str,
    branch: Option<&str>,
) -> Result<(), CliError> {
    let console = console()?;
    let user = console.session.current_user().ok_or(CliError::NotSignedIn)?;

    // The referrer derives from the investor's upline, so the collection
    // has to be loaded before selecting.
    let _ = console.investors.fetch(&InvestorQuery::all()).await;
    let investors = console.investors.snapshot();
    if let Some(message) = investors.error {
        return Err(CliError::Action(message));
    }

    let mut form = SaleForm::new();
    form.apply_session(&user);
    if let Some(branch) = branch {
        form.select_branch(BranchId::new(branch));
    }
    form.select_investor(InvestorId::new(investor), &investors.items);
    form.set_description(description);
    form.set_amount(amount);
    form.choose_commission_tier(tier.into());
    form.set_payment_method(payment.into());

    let payload = form
        .payload(customer)
        .map_err(|e| CliError::Action(e.to_string()))?;
    let created = console.sales.create(&payload).await?;

    tracing::info!(
        "Sale logged: {}  amount: {}  commission: {}",
        created.sale.id,
        created.sale.amount,
        created.sale.commission
    );
    if let Some(document) = created.document_path {
        tracing::info!("  Receipt: {document}");
    }
    Ok(())
}

pub async fn dashboard() -> Result<(), CliError> {
    let console = console()?;

    match console.sales.fetch(&SalesQuery::default()).await {
        FetchOutcome::Completed => {}
        FetchOutcome::Suppressed => return Ok(()),
    }

    let snapshot = console.sales.snapshot();
    if let Some(message) = snapshot.error {
        return Err(CliError::Action(message));
    }

    let totals = console.sales.totals();
    tracing::info!("Sales on this page: {}", snapshot.items.len());
    tracing::info!("  Total amount:     {}", totals.amount);
    tracing::info!("  Total commission: {}", totals.commission);
    Ok(())
}
