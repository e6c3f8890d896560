//! Plain-text tree layout
//!
//! ```text
//! The 12 Steps of Applied Machine Learning
//! ├── 0  Reality check and setup
//! │   ├── 0.1  Confirm the task cannot be solved well by explicit rules
//! │   └── 0.4  Set up version control, environments and a project layout
//! └── 12  Monitor and maintain
//! ```

use colored::{ColoredString, Colorize};

use super::ProgressView;
use crate::outline::Step;
use crate::tracker::StepStatus;

/// Status glyph with color for display
pub fn status_glyph(status: StepStatus) -> ColoredString {
    match status {
        StepStatus::Done => "✓".green().bold(),
        StepStatus::Partial => "◐".yellow().bold(),
        StepStatus::Open => "○".white().dimmed(),
    }
}

fn label(step: &Step) -> String {
    if step.path().is_root() {
        step.title().to_string()
    } else {
        format!("{}  {}", step.path(), step.title())
    }
}

pub(super) fn header(root: &Step, progress: Option<ProgressView<'_>>) -> String {
    let title = label(root).bold();
    match progress {
        Some(view) => {
            let counts = view.tracker.progress(view.state, root);
            format!(
                "{} {title}  {}",
                status_glyph(view.status(root)),
                format!("({}/{})", counts.done, counts.total).dimmed()
            )
        }
        None => title.to_string(),
    }
}

pub(super) fn step_line(
    step: &Step,
    ancestors_more: &[bool],
    is_last: bool,
    progress: Option<ProgressView<'_>>,
) -> String {
    let mut line = String::new();
    for &more in ancestors_more {
        line.push_str(if more { "│   " } else { "    " });
    }
    line.push_str(if is_last { "└── " } else { "├── " });

    if let Some(view) = progress {
        line.push_str(&format!("{} ", status_glyph(view.status(step))));
    }
    line.push_str(&label(step));
    line
}
