//! Client-side stores.
//!
//! Each store holds one fetched collection plus its loading flag, last error,
//! and pagination snapshot, and walks the same lifecycle for every action:
//!
//! ```text
//! idle -> pending (on dispatch) -> idle (fresh data) | idle (error set)
//! ```
//!
//! The loading flag doubles as a concurrency gate: a fetch dispatched while
//! one is already in flight is dropped entirely (no queuing, no
//! cancellation), so at most one fetch per store is ever outstanding.
//! Stores are cheap-to-clone handles; the inner lock is never held across an
//! await.

mod branches;
mod investors;
mod sales;
mod session;

pub use branches::BranchStore;
pub use investors::InvestorStore;
pub use sales::SalesStore;
pub use session::{SessionSnapshot, SessionStore};

use std::sync::{Mutex, MutexGuard};

use ledgerline_core::{Page, PageInfo};

/// Result of dispatching a fetch against a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum FetchOutcome {
    /// The fetch ran to settlement: fresh data, or a recorded error.
    Completed,
    /// Dropped because a fetch was already in flight.
    Suppressed,
}

/// Lock a store mutex, recovering the data if a holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Shared state of one resource collection.
#[derive(Debug)]
pub(crate) struct ResourceState<T> {
    items: Vec<T>,
    page_info: PageInfo,
    loading: bool,
    error: Option<String>,
}

impl<T> ResourceState<T> {
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::new(),
            page_info: PageInfo::default(),
            loading: false,
            error: None,
        }
    }

    /// Enter the pending phase for a fetch.
    ///
    /// Returns `false` without touching any state when a request is already
    /// in flight; the caller must then drop the new request.
    pub(crate) fn begin_fetch(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Enter the pending phase for a creation. Creations are not gated.
    pub(crate) fn begin_mutation(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Settle a fetch: items and pagination replaced atomically.
    pub(crate) fn settle_page(&mut self, page: Page<T>) {
        self.loading = false;
        self.error = None;
        self.page_info = page.info();
        self.items = page.items;
    }

    /// Settle an unpaginated fetch: collection replaced wholesale.
    pub(crate) fn settle_items(&mut self, items: Vec<T>) {
        self.loading = false;
        self.error = None;
        self.items = items;
    }

    /// Settle a failed action: the collection keeps its last known-good
    /// snapshot (stale-but-available).
    pub(crate) fn settle_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Settle a creation by appending the new record. Pagination totals go
    /// stale until the next fetch.
    pub(crate) fn settle_append(&mut self, item: T) {
        self.loading = false;
        self.error = None;
        self.items.push(item);
    }

    /// Settle a creation by prepending the new record.
    pub(crate) fn settle_prepend(&mut self, item: T) {
        self.loading = false;
        self.error = None;
        self.items.insert(0, item);
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }

    pub(crate) fn snapshot(&self) -> ResourceSnapshot<T>
    where
        T: Clone,
    {
        ResourceSnapshot {
            items: self.items.clone(),
            page_info: self.page_info,
            loading: self.loading,
            error: self.error.clone(),
        }
    }

    pub(crate) fn items(&self) -> &[T] {
        &self.items
    }
}

/// A point-in-time copy of a resource store's state.
#[derive(Debug, Clone)]
pub struct ResourceSnapshot<T> {
    pub items: Vec<T>,
    pub page_info: PageInfo,
    pub loading: bool,
    pub error: Option<String>,
}
