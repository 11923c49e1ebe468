//! Observability for the admin server
//!
//! - Structured logging via `tracing` (text or JSON lines)
//! - Monotonic admin counters, served at `/admin/metrics.json`

mod logging;
mod metrics;

pub use logging::{env_filter, init_logging};
pub use metrics::{AdminMetrics, AdminMetricsSnapshot};
