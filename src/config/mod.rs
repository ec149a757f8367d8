//! Configuration for the finance tracker
//!
//! - Base/data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
