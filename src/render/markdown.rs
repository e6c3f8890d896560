//! Markdown layout, readable by [`crate::outline::parse`].

use super::ProgressView;
use crate::outline::Step;
use crate::tracker::StepStatus;

pub(super) fn header(root: &Step, index: usize) -> Option<String> {
    match index {
        0 if root.path().is_root() => Some(format!("# {}", root.title())),
        0 => Some(format!("# {} {}", root.path(), root.title())),
        1 => Some(String::new()),
        _ => None,
    }
}

pub(super) fn step_line(step: &Step, level: usize, progress: Option<ProgressView<'_>>) -> String {
    let checkbox = match progress.map(|view| view.status(step)) {
        Some(StepStatus::Done) => "[x] ",
        Some(_) => "[ ] ",
        None => "",
    };
    format!(
        "{}- {checkbox}{} {}",
        "  ".repeat(level),
        step.path(),
        step.title()
    )
}
