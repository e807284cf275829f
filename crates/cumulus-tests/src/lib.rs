pub mod fixtures;

// Re-export key testing utilities
pub use cumulus_lib::testing::ProjectFixture;
pub use fixtures::{ProjectTemplate, live_factory};
