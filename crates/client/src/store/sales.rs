//! Sales collection store.

use std::sync::{Arc, Mutex};

use tracing::{debug, error, instrument};

use super::{FetchOutcome, ResourceSnapshot, ResourceState, lock};
use crate::api::{DataApi, SalesQuery};
use crate::models::{CreatedSale, NewSale, Sale};
use crate::stats::{SaleTotals, sale_totals};

const FETCH_FALLBACK: &str = "Failed to fetch sales";
const CREATE_FALLBACK: &str = "Failed to create sale";

/// Store for the sales collection.
#[derive(Clone)]
pub struct SalesStore {
    api: Arc<dyn DataApi>,
    state: Arc<Mutex<ResourceState<Sale>>>,
}

impl SalesStore {
    #[must_use]
    pub fn new(api: Arc<dyn DataApi>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(ResourceState::new())),
        }
    }

    /// A point-in-time copy of the store state.
    #[must_use]
    pub fn snapshot(&self) -> ResourceSnapshot<Sale> {
        lock(&self.state).snapshot()
    }

    pub fn clear_error(&self) {
        lock(&self.state).clear_error();
    }

    /// Amount and commission sums over the currently fetched page.
    #[must_use]
    pub fn totals(&self) -> SaleTotals {
        sale_totals(lock(&self.state).items())
    }

    /// Fetch a page of sales, replacing items and pagination atomically.
    ///
    /// Dropped entirely when a fetch is already in flight.
    #[instrument(skip(self, query), fields(page = query.page))]
    pub async fn fetch(&self, query: &SalesQuery) -> FetchOutcome {
        if !lock(&self.state).begin_fetch() {
            debug!("sales fetch suppressed, request already in flight");
            return FetchOutcome::Suppressed;
        }

        match self.api.sales(query).await {
            Ok(page) => lock(&self.state).settle_page(page),
            Err(err) => {
                error!(%err, "sales fetch failed");
                lock(&self.state).settle_error(err.surface_message(FETCH_FALLBACK));
            }
        }
        FetchOutcome::Completed
    }

    /// Log a sale and prepend the created record to the collection.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message, which is also recorded on the store.
    /// The caller's form state is untouched, so resubmission is possible.
    pub async fn create(&self, payload: &NewSale) -> Result<CreatedSale, String> {
        lock(&self.state).begin_mutation();

        match self.api.create_sale(payload).await {
            Ok(created) => {
                lock(&self.state).settle_prepend(created.sale.clone());
                Ok(created)
            }
            Err(err) => {
                error!(%err, "sale creation failed");
                let message = err.surface_message(CREATE_FALLBACK);
                lock(&self.state).settle_error(message.clone());
                Err(message)
            }
        }
    }
}
