//! Terminal dashboard for reviewing catalogue products.
//!
//! The dashboard follows the Model-View-Update (MVU) pattern of bubbletea-rs:
//!
//! - **Model**: Application state in [`app::DashboardApp`]
//! - **View**: Rendering logic in the app and its components
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Cursor and reason draft state
//! - [`components`]: Product card, grid, and chrome rendering
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Dashboard Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the gateway and settings are stored at module level. Call
//! [`set_dashboard_context`] before starting the program and
//! `DashboardApp::init()` will pick them up.

use std::fmt;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;

use crate::catalogue::{
    CatalogueError, CatalogueStats, HealthStatus, Product, ProductGateway, ReviewDecision,
    ReviewReceipt, ReviewView,
};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::DashboardApp;

/// Default maximum length of a review reason typed in the dashboard.
pub const DEFAULT_REASON_MAX_LENGTH: usize = 500;

/// Global storage for the dashboard context.
static DASHBOARD_CONTEXT: OnceLock<DashboardContext> = OnceLock::new();

/// Everything the dashboard needs to talk to the catalogue.
#[derive(Clone)]
pub struct DashboardContext {
    gateway: Arc<dyn ProductGateway>,
    telemetry: Arc<dyn TelemetrySink>,
    initial_view: ReviewView,
    reason_max_length: usize,
}

impl DashboardContext {
    /// Creates a context with the default initial view and reason limit.
    #[must_use]
    pub fn new(gateway: Arc<dyn ProductGateway>, telemetry: Arc<dyn TelemetrySink>) -> Self {
        Self {
            gateway,
            telemetry,
            initial_view: ReviewView::default(),
            reason_max_length: DEFAULT_REASON_MAX_LENGTH,
        }
    }

    /// Sets the view shown when the dashboard opens.
    #[must_use]
    pub const fn with_initial_view(mut self, view: ReviewView) -> Self {
        self.initial_view = view;
        self
    }

    /// Sets the maximum reason length; zero is raised to one.
    #[must_use]
    pub fn with_reason_max_length(mut self, max_length: usize) -> Self {
        self.reason_max_length = max_length.max(1);
        self
    }

    /// Returns the catalogue gateway.
    #[must_use]
    pub fn gateway(&self) -> Arc<dyn ProductGateway> {
        Arc::clone(&self.gateway)
    }

    /// Returns the telemetry sink.
    #[must_use]
    pub fn telemetry(&self) -> Arc<dyn TelemetrySink> {
        Arc::clone(&self.telemetry)
    }

    /// Returns the view shown when the dashboard opens.
    #[must_use]
    pub const fn initial_view(&self) -> ReviewView {
        self.initial_view
    }

    /// Returns the maximum reason length in characters.
    #[must_use]
    pub const fn reason_max_length(&self) -> usize {
        self.reason_max_length
    }
}

impl fmt::Debug for DashboardContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardContext")
            .field("initial_view", &self.initial_view)
            .field("reason_max_length", &self.reason_max_length)
            .finish_non_exhaustive()
    }
}

/// Sets the dashboard context.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_dashboard_context(context: DashboardContext) -> bool {
    DASHBOARD_CONTEXT.set(context).is_ok()
}

/// Returns the stored context, or one whose requests all fail with a
/// configuration error when [`set_dashboard_context`] was never called.
pub(crate) fn dashboard_context() -> DashboardContext {
    DASHBOARD_CONTEXT.get().cloned().unwrap_or_else(|| {
        DashboardContext::new(Arc::new(UnconfiguredGateway), Arc::new(NoopTelemetrySink))
    })
}

struct UnconfiguredGateway;

impl UnconfiguredGateway {
    fn error() -> CatalogueError {
        CatalogueError::Configuration {
            message: "dashboard context not configured".to_owned(),
        }
    }
}

#[async_trait]
impl ProductGateway for UnconfiguredGateway {
    async fn list_products(&self, _view: ReviewView) -> Result<Vec<Product>, CatalogueError> {
        Err(Self::error())
    }

    async fn submit_review(
        &self,
        _decision: &ReviewDecision,
    ) -> Result<Option<ReviewReceipt>, CatalogueError> {
        Err(Self::error())
    }

    async fn stats(&self) -> Result<CatalogueStats, CatalogueError> {
        Err(Self::error())
    }

    async fn health(&self) -> Result<HealthStatus, CatalogueError> {
        Err(Self::error())
    }
}
