//! Loaded product list for one dashboard view.
//!
//! A list is mounted when its view is activated and dropped when the view is
//! left. Every fetch is identified by a [`LoadTicket`]; only the response for
//! the most recent ticket of the current mount is applied.

use crate::catalogue::models::{Product, ProductId, ReviewView};

use super::workflow::ReviewOutcome;

/// Identifies one list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    view: ReviewView,
    mount: u64,
    generation: u64,
}

impl LoadTicket {
    /// Returns the view being fetched.
    #[must_use]
    pub const fn view(self) -> ReviewView {
        self.view
    }

    /// Returns the mount the fetch was issued for.
    #[must_use]
    pub const fn mount(self) -> u64 {
        self.mount
    }

    /// Returns the fetch generation within the mount.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

/// Result of offering a fetch response to a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response matched the latest request and was applied.
    Applied,
    /// The response belonged to an older request or another view.
    Stale,
}

/// Loading, error, and data state for one mounted view.
#[derive(Debug, Clone)]
pub struct ProductListState {
    view: ReviewView,
    mount: u64,
    generation: u64,
    products: Vec<Product>,
    loading: bool,
    error: Option<String>,
}

impl ProductListState {
    /// Creates an empty, idle list for `view`.
    #[must_use]
    pub const fn new(view: ReviewView, mount: u64) -> Self {
        Self {
            view,
            mount,
            generation: 0,
            products: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Marks a new fetch as started and returns its ticket.
    ///
    /// Any response for an earlier ticket becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        LoadTicket {
            view: self.view,
            mount: self.mount,
            generation: self.generation,
        }
    }

    /// Returns whether `ticket` identifies the latest fetch of this list.
    #[must_use]
    pub fn accepts(&self, ticket: LoadTicket) -> bool {
        ticket.view == self.view
            && ticket.mount == self.mount
            && ticket.generation == self.generation
    }

    /// Replaces the list with a successful fetch result.
    ///
    /// Products keep the order the API returned them in.
    pub fn apply_loaded(&mut self, ticket: LoadTicket, products: Vec<Product>) -> LoadOutcome {
        if !self.accepts(ticket) {
            return LoadOutcome::Stale;
        }
        self.products = products;
        self.loading = false;
        self.error = None;
        LoadOutcome::Applied
    }

    /// Records a failed fetch. The previous list is kept.
    pub fn apply_failed(&mut self, ticket: LoadTicket, message: String) -> LoadOutcome {
        if !self.accepts(ticket) {
            return LoadOutcome::Stale;
        }
        self.loading = false;
        self.error = Some(message);
        LoadOutcome::Applied
    }

    /// Removes the reviewed product from a pending list.
    ///
    /// Returns `true` when an entry was removed. Approved lists are never
    /// mutated.
    pub fn reconcile(&mut self, outcome: &ReviewOutcome) -> bool {
        if !self.view.accepts_reviews() {
            return false;
        }
        let before = self.products.len();
        self.products
            .retain(|product| product.id != outcome.product_id);
        self.products.len() != before
    }

    /// Returns the view this list shows.
    #[must_use]
    pub const fn view(&self) -> ReviewView {
        self.view
    }

    /// Returns the mount identifier.
    #[must_use]
    pub const fn mount(&self) -> u64 {
        self.mount
    }

    /// Returns the loaded products.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the number of loaded products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns whether no products are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Returns whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the last fetch error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the index of the product with `id`.
    #[must_use]
    pub fn position_of(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|product| product.id == id)
    }

    /// Returns the product at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }
}
