//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to data sources:
//! - `fixtures` - Built-in sample data (cycle, content, profile)

pub mod fixtures;

pub use fixtures::{SampleContentCatalog, SampleCycleDataProvider, SampleProfileReader};
