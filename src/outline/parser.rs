//! Outline document parser
//!
//! The document is a single `# ` heading followed by a nested Markdown list:
//!
//! ```text
//! # The 12 Steps of Applied Machine Learning
//!
//! - 0 Reality check and setup
//!   - 0.1 Confirm the task cannot be solved well by explicit rules
//! ```
//!
//! Items are indented two spaces per level and may carry a task checkbox,
//! which is ignored here. A heading whose first token is a step path
//! (`# 5 Prepare your tools`) describes the subtree rooted at that path.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::path::StepPath;
use super::Step;
use crate::error::ChecklistError;

const INDENT_WIDTH: usize = 2;

static ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<indent> *)- (?:\[[ xX]\] )?(?P<path>\S+)(?: +(?P<title>.*?))?\s*$")
        .expect("Invalid list item pattern")
});

/// A step whose children are still being collected.
struct Pending {
    path: StepPath,
    title: String,
    children: Vec<Step>,
}

impl Pending {
    fn finish(self) -> Step {
        Step::new(self.path, self.title, self.children)
    }
}

/// Parse an outline document into its root step.
pub fn parse(content: &str) -> Result<Step, ChecklistError> {
    let mut stack: Vec<Pending> = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;

        if line.trim().is_empty() {
            continue;
        }

        if let Some(heading) = line.strip_prefix("# ") {
            if !stack.is_empty() {
                return Err(ChecklistError::parse(line_no, "duplicate '# ' heading"));
            }
            stack.push(parse_heading(heading, line_no)?);
            continue;
        }

        let Some(caps) = ITEM_RE.captures(line) else {
            return Err(ChecklistError::parse(
                line_no,
                format!("expected a '- <id> <title>' list item, found '{}'", line.trim()),
            ));
        };

        if stack.is_empty() {
            return Err(ChecklistError::parse(line_no, "list item before '# ' heading"));
        }

        let indent = caps["indent"].len();
        if indent % INDENT_WIDTH != 0 {
            return Err(ChecklistError::parse(
                line_no,
                format!("indentation must be a multiple of {INDENT_WIDTH} spaces"),
            ));
        }
        let level = indent / INDENT_WIDTH + 1;
        if level > stack.len() {
            return Err(ChecklistError::parse(line_no, "indentation skips a level"));
        }

        // Close every step nested at or below this item's level
        while stack.len() > level {
            close_top(&mut stack);
        }

        let raw_path = &caps["path"];
        let path: StepPath = raw_path
            .parse()
            .map_err(|_| ChecklistError::parse(line_no, format!("invalid step id '{raw_path}'")))?;

        let title = caps.name("title").map_or("", |m| m.as_str()).trim();
        if title.is_empty() {
            return Err(ChecklistError::parse(line_no, format!("step {path} has no title")));
        }

        let Some(parent) = stack.last() else {
            return Err(ChecklistError::parse(line_no, "list item before '# ' heading"));
        };
        if path.parent().as_ref() != Some(&parent.path) {
            let expected = if parent.path.is_root() {
                "a top-level id".to_string()
            } else {
                format!("an id under {}", parent.path)
            };
            return Err(ChecklistError::parse(
                line_no,
                format!("step {path} is misplaced: expected {expected}"),
            ));
        }
        if let Some(previous) = parent.children.last() {
            if previous.id() == path.id() {
                return Err(ChecklistError::parse(line_no, format!("duplicate step id {path}")));
            }
            if previous.id() > path.id() {
                return Err(ChecklistError::parse(
                    line_no,
                    format!("step {path} is out of order after {}", previous.path()),
                ));
            }
        }

        stack.push(Pending {
            path,
            title: title.to_string(),
            children: Vec::new(),
        });
    }

    while stack.len() > 1 {
        close_top(&mut stack);
    }

    let Some(root) = stack.pop().map(Pending::finish) else {
        return Err(ChecklistError::parse(1, "document has no '# ' heading"));
    };
    debug!(path = %root.path(), steps = root.walk().count(), "parsed outline");
    Ok(root)
}

fn parse_heading(heading: &str, line_no: usize) -> Result<Pending, ChecklistError> {
    let heading = heading.trim();
    let (path, title) = match heading.split_once(' ') {
        Some((first, rest)) => match first.parse::<StepPath>() {
            Ok(path) => (path, rest.trim()),
            Err(_) => (StepPath::root(), heading),
        },
        None => (StepPath::root(), heading),
    };

    if title.is_empty() || heading.parse::<StepPath>().is_ok() {
        return Err(ChecklistError::parse(line_no, "heading has no title"));
    }

    Ok(Pending {
        path,
        title: title.to_string(),
        children: Vec::new(),
    })
}

fn close_top(stack: &mut Vec<Pending>) {
    if let Some(done) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(done.finish());
        }
    }
}
