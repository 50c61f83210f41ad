//! Shared fakes and fixtures: scripted API implementations injected behind
//! the `AuthApi`/`DataApi` trait seams, so tests drive the store lifecycle
//! without an HTTP server.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use secrecy::SecretString;
use tokio::sync::Notify;

use ledgerline_client::api::{AuthApi, DataApi, InvestorQuery, SalesQuery};
use ledgerline_client::error::ApiError;
use ledgerline_client::models::{
    Branch, CreatedSale, Investor, LoginCredentials, NewBranch, NewInvestor, NewSale,
    RegisterCredentials, Sale, SessionUser,
};
use ledgerline_core::{
    BranchId, InvestorId, InvestorRole, Page, Ref, SaleId, SaleStatus, UserId, UserRole,
};

/// Poll until the predicate holds, yielding to the runtime between checks.
pub async fn wait_for(predicate: impl Fn() -> bool) {
    for _ in 0..500 {
        if predicate() {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }
    panic!("condition not reached in time");
}

pub fn rejected(status: u16, message: Option<&str>) -> ApiError {
    ApiError::Rejected {
        status: reqwest::StatusCode::from_u16(status).expect("valid status"),
        message: message.map(str::to_owned),
    }
}

pub fn sample_user(branch: Option<&str>) -> SessionUser {
    SessionUser {
        id: UserId::new("u-1"),
        name: "Sana Tariq".to_owned(),
        email: "a@b.com".to_owned(),
        role: UserRole::SalesRep,
        token: "jwt-token".to_owned(),
        branch: branch.map(|b| Ref::Id(BranchId::new(b))),
        profit_rate: None,
        commission_rate: None,
    }
}

pub fn investor(id: &str, upline: Option<&str>) -> Investor {
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

pub fn sale(id: &str, amount: i64, commission_cents: i64) -> Sale {
    Sale {
        id: SaleId::new(id),
        user: Ref::Id(UserId::new("u-1")),
        branch_id: Ref::Id(BranchId::new("b-1")),
        investor_id: None,
        referrer_id: None,
        customer_name: "Walk-in Client".to_owned(),
        description: "package".to_owned(),
        amount: Decimal::new(amount, 0),
        commission: Decimal::new(commission_cents, 2),
        date: Utc::now(),
        created_at: Utc::now(),
        status: SaleStatus::Pending,
        payment_method: None,
    }
}

type Scripted<T> = Mutex<VecDeque<Result<T, ApiError>>>;

fn unscripted<T>() -> Result<T, ApiError> {
    Err(rejected(500, Some("unscripted call")))
}

fn pop<T>(script: &Scripted<T>) -> Result<T, ApiError> {
    script
        .lock()
        .expect("script lock")
        .pop_front()
        .unwrap_or_else(unscripted)
}

fn push<T>(script: &Scripted<T>, result: Result<T, ApiError>) {
    script.lock().expect("script lock").push_back(result);
}

/// Scripted `DataApi`: responses are queued per endpoint, calls counted,
/// and fetches optionally held at a gate to keep a request in flight.
#[derive(Default)]
pub struct FakeDataApi {
    branches: Scripted<Vec<Branch>>,
    created_branches: Scripted<Branch>,
    investors: Scripted<Page<Investor>>,
    created_investors: Scripted<Investor>,
    sales: Scripted<Page<Sale>>,
    created_sales: Scripted<CreatedSale>,
    pub investor_calls: AtomicUsize,
    pub sales_calls: AtomicUsize,
    /// When set, list fetches wait here before answering.
    pub gate: Option<Notify>,
}

impl FakeDataApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Notify::new()),
            ..Self::default()
        }
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    async fn wait_at_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }

    pub fn script_branches(&self, result: Result<Vec<Branch>, ApiError>) {
        push(&self.branches, result);
    }

    pub fn script_investors(&self, result: Result<Page<Investor>, ApiError>) {
        push(&self.investors, result);
    }

    pub fn script_create_investor(&self, result: Result<Investor, ApiError>) {
        push(&self.created_investors, result);
    }

    pub fn script_sales(&self, result: Result<Page<Sale>, ApiError>) {
        push(&self.sales, result);
    }

    pub fn script_create_sale(&self, result: Result<CreatedSale, ApiError>) {
        push(&self.created_sales, result);
    }
}

#[async_trait]
impl DataApi for FakeDataApi {
    async fn branches(&self, _limit: Option<ledgerline_core::PageLimit>) -> Result<Vec<Branch>, ApiError> {
        self.wait_at_gate().await;
        pop(&self.branches)
    }

    async fn create_branch(&self, _payload: &NewBranch) -> Result<Branch, ApiError> {
        pop(&self.created_branches)
    }

    async fn investors(&self, _query: &InvestorQuery) -> Result<Page<Investor>, ApiError> {
        self.investor_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_at_gate().await;
        pop(&self.investors)
    }

    async fn create_investor(&self, _payload: &NewInvestor) -> Result<Investor, ApiError> {
        pop(&self.created_investors)
    }

    async fn sales(&self, _query: &SalesQuery) -> Result<Page<Sale>, ApiError> {
        self.sales_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_at_gate().await;
        pop(&self.sales)
    }

    async fn create_sale(&self, _payload: &NewSale) -> Result<CreatedSale, ApiError> {
        pop(&self.created_sales)
    }
}

/// Scripted `AuthApi`.
#[derive(Default)]
pub struct FakeAuthApi {
    logins: Scripted<SessionUser>,
    admin_logins: Scripted<SessionUser>,
    registrations: Scripted<SessionUser>,
}

impl FakeAuthApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_login(&self, result: Result<SessionUser, ApiError>) {
        push(&self.logins, result);
    }

    pub fn script_admin_login(&self, result: Result<SessionUser, ApiError>) {
        push(&self.admin_logins, result);
    }

    pub fn script_register(&self, result: Result<SessionUser, ApiError>) {
        push(&self.registrations, result);
    }
}

#[async_trait]
impl AuthApi for FakeAuthApi {
    async fn login(&self, _credentials: &LoginCredentials) -> Result<SessionUser, ApiError> {
        pop(&self.logins)
    }

    async fn admin_login(&self, _credentials: &LoginCredentials) -> Result<SessionUser, ApiError> {
        pop(&self.admin_logins)
    }

    async fn register(&self, _credentials: &RegisterCredentials) -> Result<SessionUser, ApiError> {
        pop(&self.registrations)
    }

    async fn forgot_password(&self, _email: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn reset_password(&self, _token: &str, _password: &SecretString) -> Result<(), ApiError> {
        Ok(())
    }

    async fn change_password(
        &self,
        _current: &SecretString,
        _new: &SecretString,
    ) -> Result<(), ApiError> {
        Ok(())
    }

    async fn update_profile(&self, _name: &str, _email: &str) -> Result<(), ApiError> {
        Ok(())
    }
}
