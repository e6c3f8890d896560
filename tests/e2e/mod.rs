//! End-to-end tests for the mlsteps binary
//!
//! Each test runs the compiled CLI against a private config and progress
//! file inside a temporary directory.

pub mod helpers;
pub mod show;
pub mod tracking;

pub use helpers::*;
