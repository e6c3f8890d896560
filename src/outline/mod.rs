//! Outline store: the fixed tree of methodology steps.
//!
//! The built-in outline is embedded at compile time and parsed once by
//! [`load`]. A user-supplied document in the same format can replace it via
//! [`load_from`].
//!
//! ## Module Organization
//!
//! - `path`: dotted step paths and their parsing rules
//! - `parser`: Markdown outline parser shared by both loaders

mod parser;
mod path;


use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ChecklistError;

pub use parser::parse;
pub use path::{StepPath, MAX_DEPTH};

/// The 12-step methodology document shipped with the binary.
pub const TWELVE_STEPS: &str = include_str!("twelve_steps.md");

/// One node in the outline: a phase or a sub-task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    path: StepPath,
    title: String,
    children: Vec<Step>,
}

impl Step {
    pub(crate) fn new(path: StepPath, title: String, children: Vec<Step>) -> Self {
        Self {
            path,
            title,
            children,
        }
    }

    /// Ordered position within the parent.
    pub fn id(&self) -> u32 {
        self.path.id()
    }

    pub fn path(&self) -> &StepPath {
        &self.path
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn children(&self) -> &[Step] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Look up a step at or below this one.
    pub fn find(&self, path: &StepPath) -> Option<&Step> {
        if !self.path.is_prefix_of(path) {
            return None;
        }
        let mut current = self;
        for &id in &path.segments()[self.path.depth()..] {
            current = current.children.iter().find(|c| c.id() == id)?;
        }
        Some(current)
    }

    /// All descendants in document order, excluding `self`.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Leaf steps in document order. A leaf yields only itself.
    pub fn leaves(&self) -> impl Iterator<Item = &Step> + '_ {
        std::iter::once(self)
            .chain(self.walk())
            .filter(|s| s.is_leaf())
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }
}

/// Depth-first, pre-order iterator over a step's descendants.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<&'a Step>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Step;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.stack.pop()?;
        self.stack.extend(step.children.iter().rev());
        Some(step)
    }
}

/// Parse the built-in outline and return its root.
pub fn load() -> Result<Step, ChecklistError> {
    let root = parse(TWELVE_STEPS)?;
    if !root.path().is_root() {
        return Err(ChecklistError::parse(1, "built-in outline must not be a subtree"));
    }
    Ok(root)
}

/// Parse an outline document from disk.
pub fn load_from(path: &Path) -> Result<Step, ChecklistError> {
    debug!(path = %path.display(), "loading outline");
    let content =
        fs::read_to_string(path).map_err(|e| ChecklistError::persistence("read", path, e))?;
    let root = parse(&content)?;
    if !root.path().is_root() {
        return Err(ChecklistError::parse(
            1,
            format!("outline heading must not carry a step id (found {})", root.path()),
        ));
    }
    Ok(root)
}
