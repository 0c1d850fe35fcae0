use std::fmt;

use crate::interpreter::position::Position;

/// The category of an [`Error`].
///
/// The taxonomy is flat and shared by every stage: the lexer reports
/// `InvalidSyntax` and `Error`, the parser `InvalidSyntax` and
/// `NotImplemented`, and the evaluator any kind but `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic failure, such as empty input or a token stream without end.
    Error,
    /// Malformed literal, unexpected token or inapplicable operator.
    InvalidSyntax,
    /// A statement, atom, node or operator that has no implementation.
    NotImplemented,
    /// Unknown identifier, arity mismatch, duplicate binding, kind mismatch or
    /// illegal override.
    RunTime,
    /// Division with a zero right-hand operand.
    ZeroDivision,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "Error",
            Self::InvalidSyntax => "InvalidSyntaxError",
            Self::NotImplemented => "NotImplementedError",
            Self::RunTime => "RunTimeError",
            Self::ZeroDivision => "ZeroDivisionError",
        };
        f.write_str(name)
    }
}

/// An error raised by the lexer, the parser or the evaluator.
///
/// Every error carries its kind, a human readable message and the source
/// position it originates from. Presentation is left to the caller; the
/// `Display` implementation is a compact default.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message} at {position}")]
pub struct Error {
    /// The category of the failure.
    pub kind:     ErrorKind,
    /// Details about the failure.
    pub message:  String,
    /// Where in the source the failure was detected.
    pub position: Position,
}

impl Error {
    /// Creates an error of any kind.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>, position: Position) -> Self {
        Self { kind,
               message: message.into(),
               position }
    }

    /// Shorthand for [`ErrorKind::Error`].
    #[must_use]
    pub fn generic(message: impl Into<String>, position: Position) -> Self {
        Self::new(ErrorKind::Error, message, position)
    }

    /// Shorthand for [`ErrorKind::InvalidSyntax`].
    #[must_use]
    pub fn invalid_syntax(message: impl Into<String>, position: Position) -> Self {
        Self::new(ErrorKind::InvalidSyntax, message, position)
    }

    /// Shorthand for [`ErrorKind::NotImplemented`].
    #[must_use]
    pub fn not_implemented(message: impl Into<String>, position: Position) -> Self {
        Self::new(ErrorKind::NotImplemented, message, position)
    }

    /// Shorthand for [`ErrorKind::RunTime`].
    #[must_use]
    pub fn runtime(message: impl Into<String>, position: Position) -> Self {
        Self::new(ErrorKind::RunTime, message, position)
    }

    /// Shorthand for [`ErrorKind::ZeroDivision`].
    #[must_use]
    pub fn zero_division(message: impl Into<String>, position: Position) -> Self {
        Self::new(ErrorKind::ZeroDivision, message, position)
    }
}
