//! Branch, investor, and sale endpoints.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use ledgerline_core::{Page, PageLimit};

use super::{ApiClient, DataApi};
use crate::error::ApiError;
use crate::models::{Branch, CreatedSale, Investor, NewBranch, NewInvestor, NewSale, Sale};

/// Filters for the investor list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestorQuery {
    pub page: u32,
    pub limit: PageLimit,
    /// `Some(true)` restricts to referrers, `Some(false)` to investors.
    pub is_referrer: Option<bool>,
}

impl Default for InvestorQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PageLimit::default(),
            is_referrer: None,
        }
    }
}

impl InvestorQuery {
    /// The whole collection in one response, for selection dropdowns.
    #[must_use]
    pub fn all() -> Self {
        Self {
            limit: PageLimit::All,
            ..Self::default()
        }
    }
}

/// Filters for the sales list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesQuery {
    pub page: u32,
    pub limit: PageLimit,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Default for SalesQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PageLimit::default(),
            start_date: None,
            end_date: None,
        }
    }
}

/// Envelope of the `limit = -1` variant: every record, no page metadata.
#[derive(Debug, Deserialize)]
struct Unpaged<T> {
    items: Vec<T>,
}

#[async_trait]
impl DataApi for ApiClient {
    async fn branches(&self, limit: Option<PageLimit>) -> Result<Vec<Branch>, ApiError> {
        let mut query = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit.query_value().to_string()));
        }
        self.get_json("branches", &query).await
    }

    async fn create_branch(&self, payload: &NewBranch) -> Result<Branch, ApiError> {
        self.post_json("branches", payload).await
    }

    async fn investors(&self, query: &InvestorQuery) -> Result<Page<Investor>, ApiError> {
        let mut params = Vec::new();

        if query.limit == PageLimit::All {
            params.push(("limit", "-1".to_owned()));
            if let Some(is_referrer) = query.is_referrer {
                params.push(("isReferrer", is_referrer.to_string()));
            }
            // The unlimited variant has no page metadata; synthesize a
            // single-page envelope from the item count.
            let unpaged: Unpaged<Investor> = self.get_json("investors", &params).await?;
            return Ok(Page::unpaged(unpaged.items));
        }

        params.push(("page", query.page.to_string()));
        params.push(("limit", query.limit.query_value().to_string()));
        if let Some(is_referrer) = query.is_referrer {
            params.push(("isReferrer", is_referrer.to_string()));
        }
        self.get_json("investors", &params).await
    }

    async fn create_investor(&self, payload: &NewInvestor) -> Result<Investor, ApiError> {
        self.post_json("investors", payload).await
    }

    async fn sales(&self, query: &SalesQuery) -> Result<Page<Sale>, ApiError> {
        let mut params = vec![
            ("page", query.page.to_string()),
            ("limit", query.limit.query_value().to_string()),
        ];
        if let Some(start) = query.start_date {
            params.push(("startDate", start.to_string()));
        }
        if let Some(end) = query.end_date {
            params.push(("endDate", end.to_string()));
        }
        self.get_json("sales", &params).await
    }

    async fn create_sale(&self, payload: &NewSale) -> Result<CreatedSale, ApiError> {
        self.post_json("sales", payload).await
    }
}
