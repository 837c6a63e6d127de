//! Error type shared by the parser, matcher and reactor.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    /// A width token whose numeric part does not parse, e.g. `1.2.3px`.
    #[error("malformed width literal `{literal}`")]
    MalformedWidth { literal: String },
    /// A width token without a `px` or `rem` suffix.
    #[error("unknown width unit in `{literal}`")]
    UnknownUnit { literal: String },
    #[error("failed to read stylesheet `{name}`: {source}")]
    ReadStylesheet {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("stylesheet compiler unavailable")]
    CompilerUnavailable,
    #[error("failed to compile generated stylesheet: {0}")]
    Compile(String),
}

pub type Result<T> = std::result::Result<T, MediaError>;

/// Payload-free discriminant of [`MediaError`], for callers that only need
/// to branch on the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaErrorKind {
    MalformedWidth,
    UnknownUnit,
    ReadStylesheet,
    CompilerUnavailable,
    Compile,
}

impl MediaError {
    pub fn kind(&self) -> MediaErrorKind {
        match self {
            MediaError::MalformedWidth { .. } => MediaErrorKind::MalformedWidth,
            MediaError::UnknownUnit { .. } => MediaErrorKind::UnknownUnit,
            MediaError::ReadStylesheet { .. } => MediaErrorKind::ReadStylesheet,
            MediaError::CompilerUnavailable => MediaErrorKind::CompilerUnavailable,
            MediaError::Compile(_) => MediaErrorKind::Compile,
        }
    }
}
