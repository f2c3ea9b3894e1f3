pub mod derived;
pub mod snapshot;

pub use derived::{DerivedMetrics, derive_metrics};
pub use snapshot::{InvariantViolation, MetricsSnapshot};
