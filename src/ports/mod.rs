//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and its data sources. Adapters implement these ports.
//!
//! - `CycleDataProvider` - Per-day cycle snapshot, health metrics, hormone levels
//! - `ContentCatalog` - Insight categories, daily tips, tracking options
//! - `ProfileReader` - User profile and preferences

mod content_catalog;
mod cycle_data_provider;
mod profile_reader;

pub use content_catalog::ContentCatalog;
pub use cycle_data_provider::{CycleDataProvider, ProviderError};
pub use profile_reader::ProfileReader;
