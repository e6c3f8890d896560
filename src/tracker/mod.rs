//! Progress tracking over the outline.
//!
//! [`ChecklistState`] holds the completion flags; [`Tracker`] validates ids
//! against an outline and derives per-step status from the flags. The state
//! is always passed in by the caller, there is no process-wide tracker.
//!
//! A step counts as done when it, or any of its ancestors, is explicitly
//! marked complete. Branch steps are also done once every leaf below them is.

pub mod store;


use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::ChecklistError;
use crate::outline::{Step, StepPath};

pub use store::ProgressStore;

/// Completion flags keyed by step path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistState {
    entries: BTreeMap<StepPath, bool>,
}

impl ChecklistState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit flag for `path`; false for paths never marked.
    pub fn is_complete(&self, path: &StepPath) -> bool {
        self.entries.get(path).copied().unwrap_or(false)
    }

    /// Every recorded entry, in path order.
    pub fn entries(&self) -> impl Iterator<Item = (&StepPath, bool)> {
        self.entries.iter().map(|(path, &done)| (path, done))
    }

    /// Paths explicitly marked complete, in path order.
    pub fn completed(&self) -> impl Iterator<Item = &StepPath> {
        self.entries.iter().filter(|(_, &done)| done).map(|(path, _)| path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn set(&mut self, path: StepPath, completed: bool) {
        self.entries.insert(path, completed);
    }

    fn remove(&mut self, path: &StepPath) -> bool {
        self.entries.remove(path).is_some()
    }
}

/// Derived status of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Partial,
    Open,
}

/// Leaf completion count under a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

impl Progress {
    pub fn is_complete(&self) -> bool {
        self.done == self.total
    }

    /// Whole-number percentage, rounded down.
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            return 100;
        }
        self.done * 100 / self.total
    }
}

/// Validating view over an outline for reading and changing a
/// [`ChecklistState`].
#[derive(Debug, Clone, Copy)]
pub struct Tracker<'a> {
    outline: &'a Step,
}

impl<'a> Tracker<'a> {
    pub fn new(outline: &'a Step) -> Self {
        Self { outline }
    }

    pub fn outline(&self) -> &'a Step {
        self.outline
    }

    /// Resolve an id string to its step, failing with
    /// [`ChecklistError::UnknownStep`] for malformed or absent ids.
    pub fn resolve(&self, id: &str) -> Result<&'a Step, ChecklistError> {
        let path: StepPath = id.parse()?;
        self.outline
            .find(&path)
            .filter(|step| !step.path().is_root())
            .ok_or_else(|| ChecklistError::UnknownStep(id.to_string()))
    }

    /// Set or clear the completion flag of one step.
    pub fn mark(
        &self,
        state: &mut ChecklistState,
        id: &str,
        completed: bool,
    ) -> Result<(), ChecklistError> {
        let step = self.resolve(id)?;
        self.apply(state, step, completed);
        Ok(())
    }

    /// Mark several steps at once. Every id is resolved before any flag
    /// changes, so an unknown id leaves `state` untouched.
    pub fn mark_all<S: AsRef<str>>(
        &self,
        state: &mut ChecklistState,
        ids: &[S],
        completed: bool,
    ) -> Result<Vec<&'a Step>, ChecklistError> {
        let steps = ids
            .iter()
            .map(|id| self.resolve(id.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        for step in &steps {
            self.apply(state, step, completed);
        }
        Ok(steps)
    }

    /// Set the flag on a resolved step. Clearing a step also clears the
    /// marks below it, and splits any marked ancestor so that only `step`
    /// loses coverage.
    fn apply(&self, state: &mut ChecklistState, step: &Step, completed: bool) {
        debug!(step = %step.path(), completed, "marking step");
        if !completed {
            self.split_ancestor_mark(state, step);
            for below in step.walk() {
                state.remove(below.path());
            }
        }
        state.set(step.path().clone(), completed);
    }

    /// Replace marks on the ancestors of `step` with marks on their other
    /// children, from the outermost marked ancestor down to `step`'s parent.
    fn split_ancestor_mark(&self, state: &mut ChecklistState, step: &Step) {
        let lineage: Vec<StepPath> = step.path().lineage().collect();
        let ancestors = &lineage[..lineage.len().saturating_sub(1)];
        let Some(top) = ancestors.iter().position(|path| state.is_complete(path)) else {
            return;
        };

        for pair in lineage[top..].windows(2) {
            let (ancestor, on_lineage) = (&pair[0], &pair[1]);
            state.remove(ancestor);
            let Some(node) = self.outline.find(ancestor) else {
                continue;
            };
            for child in node.children() {
                if child.path() != on_lineage {
                    state.set(child.path().clone(), true);
                }
            }
        }
    }

    /// Explicit flag for `id`. Unseen, unknown and malformed ids read as
    /// not complete.
    pub fn is_complete(&self, state: &ChecklistState, id: &str) -> bool {
        id.parse::<StepPath>()
            .map(|path| state.is_complete(&path))
            .unwrap_or(false)
    }

    /// Whether `step` or one of its ancestors is explicitly marked.
    fn is_marked(&self, state: &ChecklistState, step: &Step) -> bool {
        step.path().lineage().any(|path| state.is_complete(&path))
    }

    pub fn progress(&self, state: &ChecklistState, step: &Step) -> Progress {
        if self.is_marked(state, step) {
            let total = step.leaf_count();
            return Progress { done: total, total };
        }
        let mut progress = Progress { done: 0, total: 0 };
        for leaf in step.leaves() {
            progress.total += 1;
            if self.is_marked(state, leaf) {
                progress.done += 1;
            }
        }
        progress
    }

    pub fn status(&self, state: &ChecklistState, step: &Step) -> StepStatus {
        let progress = self.progress(state, step);
        if progress.total > 0 && progress.is_complete() {
            StepStatus::Done
        } else if progress.done > 0 {
            StepStatus::Partial
        } else {
            StepStatus::Open
        }
    }

    /// First leaf, in document order, that is not yet done.
    pub fn next_open(&self, state: &ChecklistState) -> Option<&'a Step> {
        self.outline
            .walk()
            .filter(|step| step.is_leaf())
            .find(|leaf| !self.is_marked(state, leaf))
    }

    /// Drop entries whose paths no longer exist in the outline, returning
    /// the removed paths.
    pub fn prune(&self, state: &mut ChecklistState) -> Vec<StepPath> {
        let stale: Vec<StepPath> = state
            .entries()
            .map(|(path, _)| path)
            .filter(|path| path.is_root() || self.outline.find(path).is_none())
            .cloned()
            .collect();

        for path in &stale {
            warn!(step = %path, "dropping progress for step not in outline");
            state.remove(path);
        }
        stale
    }
}
