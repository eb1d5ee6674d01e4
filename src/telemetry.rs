//! Application telemetry events and sinks.
//!
//! Curator records a handful of operational signals (how long list fetches
//! take, whether review decisions were accepted) to support debugging. Events
//! stay local: they are written to stderr as JSON lines or to the tracing log.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by Curator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A product list fetch finished.
    ProductsLoaded {
        /// View that was fetched (`pending` or `approved`).
        view: String,
        /// Number of products returned; zero when the fetch failed.
        count: usize,
        /// Wall-clock time of the request in milliseconds.
        latency_ms: u64,
        /// Whether the fetch succeeded.
        succeeded: bool,
    },
    /// A review decision was submitted.
    ReviewSubmitted {
        /// Identifier of the reviewed product.
        product_id: u64,
        /// Decision (`approve` or `reject`).
        action: String,
        /// Whether the API accepted the decision.
        succeeded: bool,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// Not suitable while the dashboard owns the terminal; use
/// [`TracingTelemetrySink`] there.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

/// Forwards telemetry events to the tracing subscriber at `info` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        tracing::info!(target: "curator::telemetry", event = %serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Telemetry helpers for tests.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::{Mutex, PoisonError};

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the recorded events.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Removes and returns the recorded events.
        #[must_use]
        pub fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .drain(..)
                .collect()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingTelemetrySink;
    use super::{TelemetryEvent, TelemetrySink};

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingTelemetrySink::default();
        sink.record(TelemetryEvent::ReviewSubmitted {
            product_id: 4,
            action: "approve".to_owned(),
            succeeded: true,
        });

        assert_eq!(
            sink.take(),
            vec![TelemetryEvent::ReviewSubmitted {
                product_id: 4,
                action: "approve".to_owned(),
                succeeded: true,
            }]
        );
        assert!(sink.events().is_empty(), "take should drain the sink");
    }

    #[test]
    fn events_serialise_with_snake_case_tag() {
        let event = TelemetryEvent::ProductsLoaded {
            view: "pending".to_owned(),
            count: 2,
            latency_ms: 15,
            succeeded: true,
        };

        let value = serde_json::to_value(&event).expect("event should serialise");

        assert_eq!(
            value,
            serde_json::json!({
                "type": "products_loaded",
                "view": "pending",
                "count": 2,
                "latency_ms": 15,
                "succeeded": true
            })
        );
    }
}
