//! Outline rendering as plain text, Markdown or JSON.
//!
//! Usage: mlsteps show [--format plain|markdown|json]
//!
//! ## Module Organization
//!
//! - `plain`: tree connectors and status glyphs for terminal output
//! - `markdown`: nested list output the outline parser reads back
//! - `json`: single JSON document view of a subtree

mod json;
mod markdown;
mod plain;


use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::error::ChecklistError;
use crate::outline::Step;
use crate::tracker::{ChecklistState, StepStatus, Tracker};

pub use plain::status_glyph;

/// Render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Plain,
    Markdown,
    Json,
}

impl Format {
    pub const NAMES: [&'static str; 3] = ["plain", "markdown", "json"];
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Plain => write!(f, "plain"),
            Format::Markdown => write!(f, "markdown"),
            Format::Json => write!(f, "json"),
        }
    }
}

impl FromStr for Format {
    type Err = ChecklistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Format::Plain),
            "markdown" | "md" => Ok(Format::Markdown),
            "json" => Ok(Format::Json),
            _ => Err(ChecklistError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Completion state to annotate rendered steps with.
#[derive(Debug, Clone, Copy)]
pub struct ProgressView<'a> {
    pub tracker: Tracker<'a>,
    pub state: &'a ChecklistState,
}

impl<'a> ProgressView<'a> {
    pub fn new(tracker: Tracker<'a>, state: &'a ChecklistState) -> Self {
        Self { tracker, state }
    }

    fn status(&self, step: &Step) -> StepStatus {
        self.tracker.status(self.state, step)
    }
}

/// Output of [`render`].
#[derive(Debug, Clone)]
pub enum Rendered<'a> {
    /// Lazily produced lines (plain, markdown). Clone to iterate again.
    Lines(Lines<'a>),
    /// A complete serialized document (json).
    Document(String),
}

impl Rendered<'_> {
    /// Write the output followed by a trailing newline.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Rendered::Lines(lines) => {
                for line in lines.clone() {
                    writeln!(out, "{line}")?;
                }
            }
            Rendered::Document(doc) => writeln!(out, "{doc}")?,
        }
        Ok(())
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Lines(lines) => {
                for (i, line) in lines.clone().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    f.write_str(&line)?;
                }
                Ok(())
            }
            Rendered::Document(doc) => f.write_str(doc),
        }
    }
}

/// Render `step` and its descendants. Pure: nothing is written anywhere.
pub fn render<'a>(
    step: &'a Step,
    format: Format,
    progress: Option<ProgressView<'a>>,
) -> Rendered<'a> {
    match format {
        Format::Plain => Rendered::Lines(Lines::new(step, LineStyle::Plain, progress)),
        Format::Markdown => Rendered::Lines(Lines::new(step, LineStyle::Markdown, progress)),
        Format::Json => Rendered::Document(json::document(step, progress)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineStyle {
    Plain,
    Markdown,
}

#[derive(Debug, Clone)]
struct Frame<'a> {
    siblings: &'a [Step],
    next: usize,
}

impl Frame<'_> {
    fn has_more(&self) -> bool {
        self.next < self.siblings.len()
    }
}

/// Depth-first line iterator over a subtree.
///
/// Finite, and restartable by cloning before iteration starts.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    root: &'a Step,
    style: LineStyle,
    progress: Option<ProgressView<'a>>,
    header_emitted: usize,
    stack: Vec<Frame<'a>>,
}

impl<'a> Lines<'a> {
    fn new(root: &'a Step, style: LineStyle, progress: Option<ProgressView<'a>>) -> Self {
        Self {
            root,
            style,
            progress,
            header_emitted: 0,
            stack: vec![Frame {
                siblings: root.children(),
                next: 0,
            }],
        }
    }

    fn header_line(&self, index: usize) -> Option<String> {
        match self.style {
            LineStyle::Plain => (index == 0).then(|| plain::header(self.root, self.progress)),
            LineStyle::Markdown => markdown::header(self.root, index),
        }
    }
}

impl Iterator for Lines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if let Some(line) = self.header_line(self.header_emitted) {
            self.header_emitted += 1;
            return Some(line);
        }

        loop {
            let depth = self.stack.len();
            let frame = self.stack.last_mut()?;
            if !frame.has_more() {
                self.stack.pop();
                continue;
            }

            let siblings = frame.siblings;
            let step = &siblings[frame.next];
            frame.next += 1;
            let is_last = !frame.has_more();

            let line = match self.style {
                LineStyle::Plain => {
                    let ancestors_more: Vec<bool> =
                        self.stack[..depth - 1].iter().map(Frame::has_more).collect();
                    plain::step_line(step, &ancestors_more, is_last, self.progress)
                }
                LineStyle::Markdown => markdown::step_line(step, depth - 1, self.progress),
            };

            if !step.is_leaf() {
                self.stack.push(Frame {
                    siblings: step.children(),
                    next: 0,
                });
            }
            return Some(line);
        }
    }
}
