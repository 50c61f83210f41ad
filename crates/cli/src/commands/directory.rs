//! Branch and investor directory commands.

use ledgerline_client::api::InvestorQuery;
use ledgerline_client::models::{NewBranch, NewInvestor};
use ledgerline_client::store::FetchOutcome;
use ledgerline_core::{InvestorId, InvestorRole, PageLimit, Ref};

use super::{CliError, console};

pub async fn list_branches() -> Result<(), CliError> {
    let console = console()?;
    let _ = console.branches.fetch(Some(PageLimit::All)).await;

    let snapshot = console.branches.snapshot();
    if let Some(message) = snapshot.error {
        return Err(CliError::Action(message));
    }

    tracing::info!("{} branch(es)", snapshot.items.len());
    for branch in &snapshot.items {
        tracing::info!(
            "  {}  {} - {}, {}",
            branch.id,
            branch.name,
            branch.city,
            branch.state
        );
    }
    Ok(())
}

pub async fn add_branch(
    name: &str,
    city: &str,
    state: &str,
    address: &str,
) -> Result<(), CliError> {
    let console = console()?;
    let branch = console
        .branches
        .create(&NewBranch {
            name: name.to_owned(),
            city: city.to_owned(),
            state: state.to_owned(),
            address: address.to_owned(),
        })
        .await?;

    tracing::info!("Branch created: {} ({})", branch.name, branch.id);
    Ok(())
}

pub async fn list_investors(page: u32, all: bool, referrers: bool) -> Result<(), CliError> {
    let console = console()?;
    let query = InvestorQuery {
        page,
        limit: if all { PageLimit::All } else { PageLimit::default() },
        is_referrer: referrers.then_some(true),
    };

    match console.investors.fetch(&query).await {
        FetchOutcome::Completed => {}
        FetchOutcome::Suppressed => return Ok(()),
    }

    let snapshot = console.investors.snapshot();
    if let Some(message) = snapshot.error {
        return Err(CliError::Action(message));
    }

    tracing::info!(
        "Page {}/{} ({} total)",
        snapshot.page_info.page,
        snapshot.page_info.pages,
        snapshot.page_info.total
    );
    for investor in &snapshot.items {
        let upline = match &investor.upline {
            Some(Ref::Id(id)) => id.to_string(),
            Some(Ref::Record(record)) => record.full_name.clone(),
            None => "company".to_owned(),
        };
        tracing::info!(
            "  {}  {} <{}>  upline: {}",
            investor.id,
            investor.full_name,
            investor.email,
            upline
        );
    }
    Ok(())
}

pub async fn add_investor(
    name: &str,
    email: &str,
    phone: &str,
    address: &str,
    upline: Option<&str>,
) -> Result<(), CliError> {
    let console = console()?;
    let investor = console
        .investors
        .create(&NewInvestor {
            full_name: name.to_owned(),
            email: email.to_owned(),
            phone: phone.to_owned(),
            address: address.to_owned(),
            role: InvestorRole::Investor,
            upline: upline.map(InvestorId::new),
            product_status: None,
            profit_rate: None,
            commission_rate: None,
        })
        .await?;

    tracing::info!("Investor created: {} ({})", investor.full_name, investor.id);
    Ok(())
}
