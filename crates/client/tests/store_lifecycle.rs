//! Resource store lifecycle: the loading-flag gate, atomic replacement,
//! stale-but-available failures, and creation placement.

mod support;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use rust_decimal::Decimal;

use ledgerline_client::api::{InvestorQuery, SalesQuery};
use ledgerline_client::models::{CreatedSale, NewInvestor, NewSale};
use ledgerline_client::store::{FetchOutcome, InvestorStore, SalesStore};
use ledgerline_core::{BranchId, InvestorId, InvestorRole, Page, PaymentMethod};

use support::{FakeDataApi, investor, rejected, sale, wait_for};

#[tokio::test]
async fn test_fetch_dispatched_while_in_flight_is_suppressed() {
    let api = Arc::new(FakeDataApi::gated());
    api.script_investors(Ok(Page::unpaged(vec![investor("i-1", None)])));
    let store = InvestorStore::new(api.clone());

    let in_flight = {
        let store = store.clone();
        tokio::spawn(async move { store.fetch(&InvestorQuery::all()).await })
    };
    wait_for(|| api.investor_calls.load(Ordering::SeqCst) == 1).await;
    assert!(store.snapshot().loading);

    // Second dispatch while the first is at the gate: dropped entirely.
    let outcome = store.fetch(&InvestorQuery::all()).await;
    assert_eq!(outcome, FetchOutcome::Suppressed);
    assert_eq!(api.investor_calls.load(Ordering::SeqCst), 1);

    api.release();
    assert_eq!(in_flight.await.expect("fetch task"), FetchOutcome::Completed);

    let snapshot = store.snapshot();
    assert!(!snapshot.loading);
    assert_eq!(snapshot.items.len(), 1);

    // The gate reopens once the first fetch settles.
    api.script_investors(Ok(Page::unpaged(vec![])));
    api.release();
    assert_eq!(store.fetch(&InvestorQuery::all()).await, FetchOutcome::Completed);
}

#[tokio::test]
async fn test_fetch_replaces_items_and_pagination_atomically() {
    let api = Arc::new(FakeDataApi::new());
    api.script_investors(Ok(Page {
        items: vec![investor("i-1", None), investor("i-2", None)],
        page: 1,
        pages: 3,
        total: 25,
    }));
    // Page 2 of a 25-record collection at 10 per page.
    let second_page: Vec<_> = (11..=20)
        .map(|n| investor(&format!("i-{n}"), None))
        .collect();
    api.script_investors(Ok(Page {
        items: second_page,
        page: 2,
        pages: 3,
        total: 25,
    }));
    let store = InvestorStore::new(api);

    let _ = store.fetch(&InvestorQuery::default()).await;
    assert_eq!(store.snapshot().items.len(), 2);

    let _ = store
        .fetch(&InvestorQuery {
            page: 2,
            ..InvestorQuery::default()
        })
        .await;

    // Replaced wholesale, never merged with the previous page.
    let snapshot = store.snapshot();
    assert_eq!(snapshot.items.len(), 10);
    assert_eq!(snapshot.items[0].id, InvestorId::new("i-11"));
    assert_eq!(snapshot.page_info.page, 2);
    assert_eq!(snapshot.page_info.pages, 3);
    assert_eq!(snapshot.page_info.total, 25);
}

#[tokio::test]
async fn test_failed_fetch_keeps_stale_items_and_surfaces_server_message() {
    let api = Arc::new(FakeDataApi::new());
    api.script_sales(Ok(Page::unpaged(vec![sale("s-1", 1000, 5000)])));
    api.script_sales(Err(rejected(500, Some("Database unavailable"))));
    let store = SalesStore::new(api);

    let _ = store.fetch(&SalesQuery::default()).await;
    let _ = store.fetch(&SalesQuery::default()).await;

    let snapshot = store.snapshot();
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.error.as_deref(), Some("Database unavailable"));
    assert!(!snapshot.loading);
}

#[tokio::test]
async fn test_failed_fetch_without_body_uses_fallback_message() {
    let api = Arc::new(FakeDataApi::new());
    api.script_sales(Err(rejected(502, None)));
    let store = SalesStore::new(api);

    let _ = store.fetch(&SalesQuery::default()).await;
    assert_eq!(store.snapshot().error.as_deref(), Some("Failed to fetch sales"));
}

#[tokio::test]
async fn test_created_investor_is_appended() {
    let api = Arc::new(FakeDataApi::new());
    api.script_investors(Ok(Page::unpaged(vec![investor("i-1", None)])));
    api.script_create_investor(Ok(investor("i-2", None)));
    let store = InvestorStore::new(api);

    let _ = store.fetch(&InvestorQuery::all()).await;
    let created = store
        .create(&NewInvestor {
            full_name: "New Investor".to_owned(),
            email: "new@example.com".to_owned(),
            phone: "0300-1111111".to_owned(),
            address: "14 Mall Road".to_owned(),
            role: InvestorRole::Investor,
            upline: None,
            product_status: None,
            profit_rate: None,
            commission_rate: None,
        })
        .await
        .expect("create investor");

    let snapshot = store.snapshot();
    assert_eq!(snapshot.items.len(), 2);
    assert_eq!(snapshot.items[1].id, created.id);
}

#[tokio::test]
async fn test_created_sale_is_prepended_and_counted_in_totals() {
    let api = Arc::new(FakeDataApi::new());
    api.script_sales(Ok(Page::unpaged(vec![sale("s-1", 1000, 5000)])));
    api.script_create_sale(Ok(CreatedSale {
        sale: sale("s-2", 500, 2500),
        document_path: Some("documents/s-2.pdf".to_owned()),
    }));
    let store = SalesStore::new(api);

    let _ = store.fetch(&SalesQuery::default()).await;
    let created = store
        .create(&NewSale {
            branch: BranchId::new("b-1"),
            investor: InvestorId::new("i-1"),
            referrer: None,
            customer_name: "Walk-in Client".to_owned(),
            description: "package".to_owned(),
            amount: Decimal::new(500, 0),
            commission: Decimal::new(2500, 2),
            investor_profit: Decimal::new(50, 0),
            payment_method: PaymentMethod::CashInHand,
        })
        .await
        .expect("create sale");
    assert_eq!(created.document_path.as_deref(), Some("documents/s-2.pdf"));

    let snapshot = store.snapshot();
    assert_eq!(snapshot.items.len(), 2);
    // Newest first.
    assert_eq!(snapshot.items[0].id, created.sale.id);

    let totals = store.totals();
    assert_eq!(totals.amount, Decimal::new(1500, 0));
    assert_eq!(totals.commission, Decimal::new(75, 0));
}

#[tokio::test]
async fn test_failed_creation_keeps_collection_and_records_message() {
    let api = Arc::new(FakeDataApi::new());
    api.script_sales(Ok(Page::unpaged(vec![sale("s-1", 1000, 5000)])));
    api.script_create_sale(Err(rejected(400, Some("Amount must be positive"))));
    let store = SalesStore::new(api);

    let _ = store.fetch(&SalesQuery::default()).await;
    let err = store
        .create(&NewSale {
            branch: BranchId::new("b-1"),
            investor: InvestorId::new("i-1"),
            referrer: None,
            customer_name: "Walk-in Client".to_owned(),
            description: "package".to_owned(),
            amount: Decimal::ZERO,
            commission: Decimal::ZERO,
            investor_profit: Decimal::ZERO,
            payment_method: PaymentMethod::CashInHand,
        })
        .await
        .expect_err("creation should fail");

    assert_eq!(err, "Amount must be positive");
    let snapshot = store.snapshot();
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.error.as_deref(), Some("Amount must be positive"));
}

#[tokio::test]
async fn test_clear_error_resets_only_the_error() {
    let api = Arc::new(FakeDataApi::new());
    api.script_sales(Ok(Page::unpaged(vec![sale("s-1", 1000, 5000)])));
    api.script_sales(Err(rejected(500, None)));
    let store = SalesStore::new(api);

    let _ = store.fetch(&SalesQuery::default()).await;
    let _ = store.fetch(&SalesQuery::default()).await;
    assert!(store.snapshot().error.is_some());

    store.clear_error();
    let snapshot = store.snapshot();
    assert!(snapshot.error.is_none());
    assert_eq!(snapshot.items.len(), 1);
}
