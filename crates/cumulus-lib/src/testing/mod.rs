//! Test support for cumulus projects
//!
//! Real on-disk project layouts in temporary directories, cleaned up on drop.

pub mod filesystem;

pub use filesystem::ProjectFixture;
