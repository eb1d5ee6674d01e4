//! Domain models for catalogue products and review decisions.
//!
//! Products are owned by the catalogue API and consumed read-only. The review
//! types describe the decision Curator submits and what the API returns.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::CatalogueError;

/// Stable identifier of a catalogue product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product category tag assigned by the catalogue.
///
/// Values the catalogue does not define yet (and products that have not been
/// categorised) are kept as [`ProductCategory::Unrecognised`] so they still
/// render with the default style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum ProductCategory {
    /// `sales_marketing`
    SalesMarketing,
    /// `devtools`
    Devtools,
    /// `data_analytics`
    DataAnalytics,
    /// `productivity`
    Productivity,
    /// `finance`
    Finance,
    /// `other`
    Other,
    /// Any value not listed above; `None` when the product has no category.
    Unrecognised(Option<String>),
}

impl Default for ProductCategory {
    fn default() -> Self {
        Self::Unrecognised(None)
    }
}

impl ProductCategory {
    /// Returns the wire value for the category, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::SalesMarketing => Some("sales_marketing"),
            Self::Devtools => Some("devtools"),
            Self::DataAnalytics => Some("data_analytics"),
            Self::Productivity => Some("productivity"),
            Self::Finance => Some("finance"),
            Self::Other => Some("other"),
            Self::Unrecognised(raw) => raw.as_deref(),
        }
    }

    /// Returns a human-readable label (`sales marketing`).
    #[must_use]
    pub fn label(&self) -> String {
        self.as_str()
            .filter(|raw| !raw.trim().is_empty())
            .map_or_else(|| "uncategorised".to_owned(), |raw| raw.replace('_', " "))
    }
}

impl From<Option<String>> for ProductCategory {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("sales_marketing") => Self::SalesMarketing,
            Some("devtools") => Self::Devtools,
            Some("data_analytics") => Self::DataAnalytics,
            Some("productivity") => Self::Productivity,
            Some("finance") => Self::Finance,
            Some("other") => Self::Other,
            _ => Self::Unrecognised(value),
        }
    }
}

impl From<ProductCategory> for Option<String> {
    fn from(value: ProductCategory) -> Self {
        match value {
            ProductCategory::Unrecognised(raw) => raw,
            known => known.as_str().map(ToOwned::to_owned),
        }
    }
}

/// Review state of a product as reported by the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Awaiting an approve/reject decision.
    #[default]
    Pending,
    /// Approved by a reviewer.
    Approved,
    /// Rejected by a reviewer.
    Rejected,
    /// A status this client does not know about.
    #[serde(other)]
    Unknown,
}

impl ReviewStatus {
    /// Returns the wire value for the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product listed by the catalogue API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Cleaned description text.
    #[serde(default)]
    pub description: String,
    /// Logo URL, when the catalogue has one.
    #[serde(default)]
    pub logo: Option<String>,
    /// Product website, when known.
    #[serde(default)]
    pub website: Option<String>,
    /// Category tag.
    #[serde(default)]
    pub category: ProductCategory,
    /// Review state.
    #[serde(default)]
    pub status: ReviewStatus,
    /// Ingestion pipeline state (`pending`, `processing`, `completed`, `failed`).
    #[serde(default)]
    pub processing_status: Option<String>,
    /// Creation timestamp.
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Lenient decoding of catalogue timestamps.
///
/// The catalogue stores naive UTC datetimes and emits them without an offset
/// (`2025-01-01T10:20:30.123456`). RFC 3339 values are accepted as well.
/// Anything else decodes as `None` so a single odd value cannot fail a whole
/// product list.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(raw.as_ref().and_then(Value::as_str).and_then(parse))
    }

    /// Parses an RFC 3339 or naive (UTC) timestamp.
    fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
            return Some(value.with_timezone(&Utc));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(|naive| naive.and_utc())
    }
}

/// Which collection of products a dashboard view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReviewView {
    /// Products awaiting review.
    Pending,
    /// Products already approved.
    #[default]
    Approved,
}

impl ReviewView {
    /// Both views in navigation order.
    pub const ALL: [Self; 2] = [Self::Approved, Self::Pending];

    /// Returns the endpoint path serving this view's products.
    #[must_use]
    pub const fn endpoint_path(self) -> &'static str {
        match self {
            Self::Pending => "products/pending",
            Self::Approved => "products/approved",
        }
    }

    /// Returns the review status every product in this view should carry.
    #[must_use]
    pub const fn status(self) -> ReviewStatus {
        match self {
            Self::Pending => ReviewStatus::Pending,
            Self::Approved => ReviewStatus::Approved,
        }
    }

    /// Returns the short tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
        }
    }

    /// Returns the other view.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Approved,
            Self::Approved => Self::Pending,
        }
    }

    /// Returns whether review actions are available in this view.
    #[must_use]
    pub const fn accepts_reviews(self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl FromStr for ReviewView {
    type Err = CatalogueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            _ => Err(CatalogueError::InvalidArgument {
                argument: format!("view '{value}' (expected 'pending' or 'approved')"),
            }),
        }
    }
}

impl fmt::Display for ReviewView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status().as_str())
    }
}

/// Decision submitted for a pending product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    /// Approve the product.
    Approve,
    /// Reject the product.
    Reject,
}

impl ReviewAction {
    /// Returns the wire value for the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }

    /// Returns the status the product carries once the action succeeds.
    #[must_use]
    pub const fn resulting_status(self) -> ReviewStatus {
        match self {
            Self::Approve => ReviewStatus::Approved,
            Self::Reject => ReviewStatus::Rejected,
        }
    }

    /// Returns the progressive verb shown while the action is in flight.
    #[must_use]
    pub const fn progress_label(self) -> &'static str {
        match self {
            Self::Approve => "Approving",
            Self::Reject => "Rejecting",
        }
    }
}

impl fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A review decision for exactly one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDecision {
    product_id: ProductId,
    action: ReviewAction,
    reason: Option<String>,
}

impl ReviewDecision {
    /// Creates a decision.
    ///
    /// Blank reasons are dropped; any other reason is sent exactly as typed.
    #[must_use]
    pub fn new(product_id: ProductId, action: ReviewAction, reason: Option<String>) -> Self {
        let reason = reason.filter(|text| !text.trim().is_empty());
        Self {
            product_id,
            action,
            reason,
        }
    }

    /// Returns the product the decision applies to.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Returns the decision.
    #[must_use]
    pub const fn action(&self) -> ReviewAction {
        self.action
    }

    /// Returns the free-text reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Returns the endpoint path the decision is posted to.
    #[must_use]
    pub fn endpoint_path(&self) -> String {
        format!("products/review/{}", self.product_id)
    }

    /// Returns the request body sent to the API.
    #[must_use]
    pub fn payload(&self) -> ReviewPayload<'_> {
        ReviewPayload {
            clean_product_id: self.product_id,
            action: self.action,
            reason: self.reason.as_deref(),
        }
    }
}

/// JSON body of `POST /products/review/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReviewPayload<'a> {
    /// Identifier of the product under review.
    pub clean_product_id: ProductId,
    /// The decision.
    pub action: ReviewAction,
    /// Optional free-text reason; serialised as `null` when absent.
    pub reason: Option<&'a str>,
}

/// Acknowledgement body returned by a successful review request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReviewReceipt {
    /// Human-readable confirmation (`Product approve`).
    pub message: Option<String>,
    /// Identifier echoed back by the API.
    pub product_id: Option<ProductId>,
}

/// Counts of raw (ingested) products by processing state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawProductCounts {
    /// All ingested products.
    pub total: u64,
    /// Waiting for processing.
    pub pending: u64,
    /// Currently being processed.
    pub processing: u64,
    /// Processing finished.
    pub completed: u64,
    /// Processing failed.
    pub failed: u64,
}

/// Counts of cleaned products by review state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CleanProductCounts {
    /// All cleaned products.
    pub total: u64,
    /// Awaiting review.
    pub pending_review: u64,
    /// Approved.
    pub approved: u64,
    /// Rejected.
    pub rejected: u64,
}

/// Processing and review statistics reported by `GET /products/stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogueStats {
    /// Ingestion counts.
    pub raw_products: RawProductCounts,
    /// Review counts.
    pub clean_products: CleanProductCounts,
}

/// Service health reported by `GET /health`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    /// Overall status (`healthy`).
    pub status: String,
    /// Database connectivity, when reported.
    pub database: Option<String>,
}

impl HealthStatus {
    /// Returns whether the service reports itself healthy.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
