//! Fixture adapters - built-in sample data behind every port.
//!
//! Useful for demos, tests and development before a real data source exists.

mod sample_content;
mod sample_cycle;
mod sample_profile;

pub use sample_content::SampleContentCatalog;
pub use sample_cycle::SampleCycleDataProvider;
pub use sample_profile::SampleProfileReader;
