//! Investor/referrer collection store.

use std::sync::{Arc, Mutex};

use tracing::{debug, error, instrument};

use super::{FetchOutcome, ResourceSnapshot, ResourceState, lock};
use crate::api::{DataApi, InvestorQuery};
use crate::models::{Investor, NewInvestor};

const FETCH_FALLBACK: &str = "Failed to fetch investors";
const CREATE_FALLBACK: &str = "Failed to create investor";

/// Store for the investor/referrer collection.
#[derive(Clone)]
pub struct InvestorStore {
    api: Arc<dyn DataApi>,
    state: Arc<Mutex<ResourceState<Investor>>>,
}

impl InvestorStore {
    #[must_use]
    pub fn new(api: Arc<dyn DataApi>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(ResourceState::new())),
        }
    }

    /// A point-in-time copy of the store state.
    #[must_use]
    pub fn snapshot(&self) -> ResourceSnapshot<Investor> {
        lock(&self.state).snapshot()
    }

    pub fn clear_error(&self) {
        lock(&self.state).clear_error();
    }

    /// Fetch a page of investors, replacing items and pagination atomically.
    ///
    /// Dropped entirely when a fetch is already in flight.
    #[instrument(skip(self, query), fields(page = query.page))]
    pub async fn fetch(&self, query: &InvestorQuery) -> FetchOutcome {
        if !lock(&self.state).begin_fetch() {
            debug!("investor fetch suppressed, request already in flight");
            return FetchOutcome::Suppressed;
        }

        match self.api.investors(query).await {
            Ok(page) => lock(&self.state).settle_page(page),
            Err(err) => {
                error!(%err, "investor fetch failed");
                lock(&self.state).settle_error(err.surface_message(FETCH_FALLBACK));
            }
        }
        FetchOutcome::Completed
    }

    /// Create an investor/referrer and append it to the collection.
    ///
    /// The collection is not re-fetched, so pagination totals go stale until
    /// the next fetch.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message, which is also recorded on the store.
    pub async fn create(&self, payload: &NewInvestor) -> Result<Investor, String> {
        lock(&self.state).begin_mutation();

        match self.api.create_investor(payload).await {
            Ok(investor) => {
                lock(&self.state).settle_append(investor.clone());
                Ok(investor)
            }
            Err(err) => {
                error!(%err, "investor creation failed");
                let message = err.surface_message(CREATE_FALLBACK);
                lock(&self.state).settle_error(message.clone());
                Err(message)
            }
        }
    }
}
