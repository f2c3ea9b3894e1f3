pub mod config;
pub mod input;
pub mod logging;
pub mod model;
pub mod report;
pub mod session;

pub use input::{ImportError, ImportOptions, Tokenizer, import_bytes, import_snapshot};
pub use model::{DerivedMetrics, MetricsSnapshot, derive_metrics};
pub use session::{Dashboard, StatusKind, UploadStatus};
