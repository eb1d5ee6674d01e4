//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.curator.toml` in the current directory, home
//!    directory, or XDG config directory (`curator.toml`)
//! 3. **Environment variables** – `CURATOR_API_BASE_URL`, `CURATOR_VIEW`, ...
//! 4. **Command-line arguments** – `--api-base-url`/`-b`, `--view`, ...
//!
//! # Configuration File
//!
//! ```toml
//! api_base_url = "http://catalogue.internal:8000"
//! view = "pending"
//! request_timeout_seconds = 10
//! reason_max_length = 280
//! log_file = "/tmp/curator.log"
//! ```

use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::catalogue::{
    ApiBaseUrl, CatalogueError, DEFAULT_API_BASE_URL, ProductId, ReviewAction, ReviewDecision,
    ReviewView,
};
use crate::logging::LogDestination;
use crate::tui::DEFAULT_REASON_MAX_LENGTH;

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive terminal dashboard.
    Dashboard,
    /// Print the products of one view and exit.
    ListProducts(ReviewView),
    /// Submit a single review decision and exit.
    SubmitReview(ReviewDecision),
    /// Print catalogue statistics and exit.
    Stats,
    /// Print the API health report and exit.
    Health,
}

impl OperationMode {
    /// Returns whether the mode takes over the terminal.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use curator::CuratorConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = CuratorConfig::load().expect("failed to load configuration");
/// let base_url = config.api_base_url().expect("API address should be valid");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "CURATOR",
    discovery(
        dotfile_name = ".curator.toml",
        config_file_name = "curator.toml",
        app_name = "curator"
    )
)]
pub struct CuratorConfig {
    /// Base address of the catalogue API.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base-url <URL>` or `-b <URL>`
    /// - Environment: `CURATOR_API_BASE_URL`
    /// - Config file: `api_base_url = "..."`
    ///
    /// Defaults to `http://localhost:8000`.
    #[ortho_config(cli_short = 'b')]
    pub api_base_url: Option<String>,

    /// View the dashboard opens on (`approved` or `pending`).
    #[ortho_config()]
    pub view: Option<String>,

    /// Prints the products of a view (`pending` or `approved`) and exits.
    #[ortho_config(cli_short = 'l')]
    pub list: Option<String>,

    /// Approves the product with this identifier and exits.
    #[ortho_config(cli_short = 'a')]
    pub approve: Option<u64>,

    /// Rejects the product with this identifier and exits.
    #[ortho_config(cli_short = 'x')]
    pub reject: Option<u64>,

    /// Free-text reason attached to `--approve` or `--reject`.
    #[ortho_config(cli_short = 'm')]
    pub reason: Option<String>,

    /// Prints processing and review statistics and exits.
    ///
    /// Note: `CURATOR_STATS` is not supported because `ortho_config` does not
    /// load boolean values from the environment.
    #[ortho_config(cli_short = 's')]
    pub stats: bool,

    /// Prints the API health report and exits.
    #[ortho_config()]
    pub health: bool,

    /// HTTP request timeout, in seconds. Must be positive.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// Maximum number of characters in a review reason.
    #[ortho_config()]
    pub reason_max_length: usize,

    /// File that receives diagnostic logs while the dashboard runs.
    ///
    /// Without it, dashboard logs are discarded.
    #[ortho_config()]
    pub log_file: Option<String>,

    /// Emits telemetry events as JSON lines on stderr (one-shot modes) or
    /// into the log (dashboard).
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for CuratorConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            view: None,
            list: None,
            approve: None,
            reject: None,
            reason: None,
            stats: false,
            health: false,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            reason_max_length: DEFAULT_REASON_MAX_LENGTH,
            log_file: None,
            telemetry: false,
        }
    }
}

impl CuratorConfig {
    /// Returns the validated API base address.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::InvalidBaseUrl`] when the configured address
    /// is not an absolute HTTP(S) URL.
    pub fn api_base_url(&self) -> Result<ApiBaseUrl, CatalogueError> {
        ApiBaseUrl::parse(self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Returns the view the dashboard starts on.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::InvalidArgument`] for unknown view names.
    pub fn initial_view(&self) -> Result<ReviewView, CatalogueError> {
        self.view
            .as_deref()
            .map_or(Ok(ReviewView::default()), str::parse)
    }

    /// Returns the HTTP request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Returns the maximum review reason length in characters.
    #[must_use]
    pub const fn reason_max_length(&self) -> usize {
        self.reason_max_length
    }

    /// Checks that the supplied options are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Configuration`] when `--approve` and
    /// `--reject` are combined, when `--reason` is given without either, or
    /// when the request timeout is zero.
    pub fn validate(&self) -> Result<(), CatalogueError> {
        if self.approve.is_some() && self.reject.is_some() {
            return Err(CatalogueError::Configuration {
                message: "--approve and --reject cannot be used together".to_owned(),
            });
        }
        if self.reason.is_some() && self.approve.is_none() && self.reject.is_none() {
            return Err(CatalogueError::Configuration {
                message: "--reason requires --approve or --reject".to_owned(),
            });
        }
        if self.request_timeout_seconds == 0 {
            return Err(CatalogueError::Configuration {
                message: "request_timeout_seconds must be greater than zero".to_owned(),
            });
        }
        Ok(())
    }

    /// Determines the operation mode.
    ///
    /// A review decision wins over `--stats`, which wins over `--health`,
    /// which wins over `--list`. Without any of them the dashboard starts.
    ///
    /// # Errors
    ///
    /// Returns the [`validate`](Self::validate) error for inconsistent
    /// options, [`CatalogueError::InvalidArgument`] for an unknown `--list`
    /// view, and [`CatalogueError::Configuration`] when the reason exceeds
    /// the configured maximum length.
    pub fn operation_mode(&self) -> Result<OperationMode, CatalogueError> {
        self.validate()?;

        if let Some(decision) = self.review_decision()? {
            return Ok(OperationMode::SubmitReview(decision));
        }
        if self.stats {
            return Ok(OperationMode::Stats);
        }
        if self.health {
            return Ok(OperationMode::Health);
        }
        if let Some(view) = self.list.as_deref() {
            return Ok(OperationMode::ListProducts(view.parse()?));
        }
        Ok(OperationMode::Dashboard)
    }

    /// Returns where diagnostic logs go for `mode`.
    #[must_use]
    pub fn log_destination(&self, mode: &OperationMode) -> LogDestination {
        if !mode.is_interactive() {
            return LogDestination::Stderr;
        }
        self.log_file
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .map_or(LogDestination::Disabled, |path| {
                LogDestination::File(Utf8PathBuf::from(path))
            })
    }

    fn review_decision(&self) -> Result<Option<ReviewDecision>, CatalogueError> {
        let requested = match (self.approve, self.reject) {
            (Some(id), _) => Some((id, ReviewAction::Approve)),
            (None, Some(id)) => Some((id, ReviewAction::Reject)),
            (None, None) => None,
        };
        let Some((id, action)) = requested else {
            return Ok(None);
        };

        let decision = ReviewDecision::new(ProductId::new(id), action, self.reason.clone());
        let length = decision.reason().map_or(0, |reason| reason.chars().count());
        if length > self.reason_max_length {
            return Err(CatalogueError::Configuration {
                message: format!(
                    "reason is {length} characters; the maximum is {}",
                    self.reason_max_length
                ),
            });
        }
        Ok(Some(decision))
    }
}

#[cfg(test)]
mod tests;
