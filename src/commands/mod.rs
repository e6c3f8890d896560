pub mod check;
pub mod common;
pub mod next;
pub mod reset;
pub mod show;
pub mod status;
