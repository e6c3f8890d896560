//! Error kinds surfaced by the outline, renderer and tracker.
//!
//! Library code returns [`ChecklistError`] directly. Command handlers wrap it
//! in `anyhow` context, and `main` recovers it from the chain to choose an
//! exit code.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit code for failures reported to the caller (unknown ids, I/O, parse).
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for a render format the tool does not support.
pub const EXIT_UNSUPPORTED_FORMAT: i32 = 2;

#[derive(Debug, Error)]
pub enum ChecklistError {
    /// The outline document is malformed.
    #[error("malformed outline at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The requested render target is not one of plain, markdown, json.
    #[error("unsupported format '{0}' (expected one of: plain, markdown, json)")]
    UnsupportedFormat(String),

    /// The step id does not exist in the loaded outline.
    #[error("unknown step '{0}'")]
    UnknownStep(String),

    /// Reading, writing or decoding the progress file failed.
    #[error("failed to {action} {}: {source}", path.display())]
    Persistence {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ChecklistError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        ChecklistError::Parse {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn persistence(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        ChecklistError::Persistence {
            action,
            path: path.into(),
            source,
        }
    }

    /// Process exit code the CLI uses when this error reaches `main`.
    pub fn exit_code(&self) -> i32 {
        match self {
            ChecklistError::UnsupportedFormat(_) => EXIT_UNSUPPORTED_FORMAT,
            _ => EXIT_FAILURE,
        }
    }
}

/// Pick the exit code for an error chain produced by a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ChecklistError>())
        .map_or(EXIT_FAILURE, ChecklistError::exit_code)
}
