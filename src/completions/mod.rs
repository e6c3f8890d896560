pub mod dynamic;
pub mod generator;

pub use dynamic::{complete_dynamic, complete_step_ids, CompletionContext};
pub use generator::{generate_completions, Shell};
