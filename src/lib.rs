pub mod commands;
pub mod completions;
pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod outline;
pub mod render;
pub mod tracker;

pub use error::ChecklistError;
