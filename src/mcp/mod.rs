pub mod config;
pub mod sync;

pub use config::{McpConfig, McpServerSpec};
pub use sync::{sync_from_catalog, SyncOutcome};
