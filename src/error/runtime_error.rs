use crate::error::ErrorKind;

/// Represents all errors that can occur during evaluation and sampling.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// A `/` whose right operand evaluated to exactly zero, or zero raised to
    /// a negative power.
    #[error("Cannot divide by zero (position {position}).")]
    DivisionByZero {
        /// Position of the operator.
        position: usize,
    },
    /// A function argument outside the function's mathematical domain.
    #[error("Math domain error in '{function}' at position {position}: {details}.")]
    Domain {
        /// The function name.
        function: &'static str,
        /// Why the argument is rejected.
        details:  String,
        /// Position of the call.
        position: usize,
    },
    /// A result, intermediate or final, that is NaN or infinite.
    #[error("Result is undefined (infinity or NaN) at position {position}.")]
    UndefinedResult {
        /// Position of the node that produced the value.
        position: usize,
    },
    /// A variable with no value in the environment.
    #[error("Variable '{name}' has no value here (position {position}).")]
    UnboundVariable {
        /// The variable name.
        name:     String,
        /// Where it is referenced.
        position: usize,
    },
    /// A function that exists but is not available in this environment.
    #[error("Function '{name}' is not available here (position {position}).")]
    UnknownFunction {
        /// The function name.
        name:     &'static str,
        /// Where it is called.
        position: usize,
    },
    /// A call node whose argument count the function does not accept. The
    /// parser rejects these, so only hand-built trees can hit it.
    #[error("'{function}' cannot take {found} arguments (position {position}).")]
    ArgumentCountMismatch {
        /// The function name.
        function: &'static str,
        /// The number of arguments given.
        found:    usize,
        /// Position of the call.
        position: usize,
    },
    /// A sampling range that cannot be sampled.
    #[error("Invalid plot range: {details}.")]
    InvalidRange {
        /// Details describing why the range is invalid.
        details: String,
    },
    /// Sampling produced no finite point at all.
    #[error("Could not evaluate function anywhere in [{x_min}, {x_max}].")]
    EmptyDomain {
        /// Lower bound of the sampled interval.
        x_min: f64,
        /// Upper bound of the sampled interval.
        x_max: f64,
    },
}

impl RuntimeError {
    /// The category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::Domain { .. } => ErrorKind::Domain,
            Self::UndefinedResult { .. } => ErrorKind::UndefinedResult,
            Self::UnboundVariable { .. } => ErrorKind::UnboundVariable,
            Self::UnknownFunction { .. } => ErrorKind::UnknownIdentifier,
            Self::ArgumentCountMismatch { .. } => ErrorKind::Syntax,
            Self::InvalidRange { .. } => ErrorKind::InvalidRange,
            Self::EmptyDomain { .. } => ErrorKind::EmptyDomain,
        }
    }
}
