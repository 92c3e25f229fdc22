//! Configuration module for Kakeibo
//!
//! - platform path resolution with an environment override
//! - user settings persistence (`config.json`)

pub mod paths;
pub mod settings;

pub use paths::KakeiboPaths;
pub use settings::Settings;
