/// Parsing errors.
///
/// Defines all error types that can occur while normalizing, tokenizing and
/// parsing an expression: malformed characters, unbalanced parentheses,
/// unknown identifiers and grammar violations.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and domain
/// sampling, such as division by zero, out-of-domain arguments or an invalid
/// sampling range.
pub mod runtime_error;

pub use parse_error::{ParseError, ParenImbalance};
pub use runtime_error::RuntimeError;

/// The category of a failure, independent of the stage that produced it.
///
/// Callers that only need to decide how to react (e.g. a test, or a GUI that
/// colours messages) match on this instead of on the concrete variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    InvalidCharacter,
    UnbalancedParentheses,
    Lex,
    UnknownIdentifier,
    Syntax,
    DivisionByZero,
    Domain,
    UndefinedResult,
    UnboundVariable,
    InvalidRange,
    EmptyDomain,
}

/// Any failure of the public entry points.
///
/// Every variant carries a message fit for direct display to a user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl EvalError {
    /// The category of the underlying failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}
