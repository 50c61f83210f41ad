//! Branch collection store.

use std::sync::{Arc, Mutex};

use tracing::{debug, error, instrument};

use ledgerline_core::PageLimit;

use super::{FetchOutcome, ResourceSnapshot, ResourceState, lock};
use crate::api::DataApi;
use crate::models::{Branch, NewBranch};

const FETCH_FALLBACK: &str = "Failed to fetch branches";
const CREATE_FALLBACK: &str = "Failed to create branch";

/// Store for the branch collection. Branch lists are small and replaced
/// wholesale on every fetch; there is no pagination.
#[derive(Clone)]
pub struct BranchStore {
    api: Arc<dyn DataApi>,
    state: Arc<Mutex<ResourceState<Branch>>>,
}

impl BranchStore {
    #[must_use]
    pub fn new(api: Arc<dyn DataApi>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(ResourceState::new())),
        }
    }

    /// A point-in-time copy of the store state.
    #[must_use]
    pub fn snapshot(&self) -> ResourceSnapshot<Branch> {
        lock(&self.state).snapshot()
    }

    pub fn clear_error(&self) {
        lock(&self.state).clear_error();
    }

    /// Fetch the branch collection, replacing the current one.
    ///
    /// Dropped entirely when a fetch is already in flight.
    #[instrument(skip(self))]
    pub async fn fetch(&self, limit: Option<PageLimit>) -> FetchOutcome {
        if !lock(&self.state).begin_fetch() {
            debug!("branch fetch suppressed, request already in flight");
            return FetchOutcome::Suppressed;
        }

        match self.api.branches(limit).await {
            Ok(items) => lock(&self.state).settle_items(items),
            Err(err) => {
                error!(%err, "branch fetch failed");
                lock(&self.state).settle_error(err.surface_message(FETCH_FALLBACK));
            }
        }
        FetchOutcome::Completed
    }

    /// Create a branch and append it to the collection.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message, which is also recorded on the store.
    pub async fn create(&self, payload: &NewBranch) -> Result<Branch, String> {
        lock(&self.state).begin_mutation();

        match self.api.create_branch(payload).await {
            Ok(branch) => {
                lock(&self.state).settle_append(branch.clone());
                Ok(branch)
            }
            Err(err) => {
                error!(%err, "branch creation failed");
                let message = err.surface_message(CREATE_FALLBACK);
                lock(&self.state).settle_error(message.clone());
                Err(message)
            }
        }
    }
}
