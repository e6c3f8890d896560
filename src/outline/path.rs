//! Dotted step paths (`5.3.2`)

use std::fmt;
use std::str::FromStr;

use crate::error::ChecklistError;

/// Deepest nesting the outline allows, counted in path segments.
pub const MAX_DEPTH: usize = 3;

/// Position of a step in the outline, one ordered id per level.
///
/// The empty path is the outline root. Paths order lexicographically by
/// numeric segment, so `5.2` sorts before `5.10`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepPath(Vec<u32>);

impl StepPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[u32] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Id of the step within its parent (0 for the root).
    pub fn id(&self) -> u32 {
        self.0.last().copied().unwrap_or(0)
    }

    pub fn child(&self, id: u32) -> Self {
        let mut segments = self.0.clone();
        segments.push(id);
        Self(segments)
    }

    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    /// True when `self` equals `other` or is one of its ancestors.
    pub fn is_prefix_of(&self, other: &StepPath) -> bool {
        other.0.starts_with(&self.0)
    }

    /// Non-root ancestors from the top level down, then `self`.
    pub fn lineage(&self) -> impl Iterator<Item = StepPath> + '_ {
        (1..=self.0.len()).map(|len| Self(self.0[..len].to_vec()))
    }
}

impl fmt::Display for StepPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for StepPath {
    type Err = ChecklistError;

    /// Parse a canonical dotted path. Rejects empty or non-numeric segments,
    /// leading zeros and paths deeper than [`MAX_DEPTH`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ChecklistError::UnknownStep(s.to_string());

        // "5." is accepted as a spelling of "5"
        let trimmed = s.strip_suffix('.').unwrap_or(s);
        if trimmed.is_empty() {
            return Err(unknown());
        }

        let mut segments = Vec::new();
        for part in trimmed.split('.') {
            let canonical = !part.is_empty()
                && part.chars().all(|c| c.is_ascii_digit())
                && (part == "0" || !part.starts_with('0'));
            if !canonical {
                return Err(unknown());
            }
            segments.push(part.parse::<u32>().map_err(|_| unknown())?);
        }

        if segments.len() > MAX_DEPTH {
            return Err(unknown());
        }

        Ok(Self(segments))
    }
}
