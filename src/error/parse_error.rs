use std::fmt;

use crate::error::ErrorKind;

/// Which way a parenthesis count went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenImbalance {
    /// A `)` appeared with no open `(` to close.
    ExtraClosing,
    /// The text ended with at least one `(` still open.
    MissingClosing,
}

impl fmt::Display for ParenImbalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtraClosing => write!(f, "extra closing parenthesis"),
            Self::MissingClosing => write!(f, "missing closing parenthesis"),
        }
    }
}

/// Represents all errors that can occur during normalization, lexing or
/// parsing.
///
/// Positions are 0-based character offsets into the canonical text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input was empty or whitespace only.
    #[error("Empty expression.")]
    EmptyInput,
    /// The input contained characters outside the allowed set.
    #[error("Invalid characters in expression: {}", .characters.iter().collect::<String>())]
    InvalidCharacters {
        /// The offending characters, in order of first appearance.
        characters: Vec<char>,
    },
    /// Parentheses do not nest.
    #[error("Unbalanced parentheses: {imbalance}.")]
    UnbalancedParentheses {
        /// What went wrong.
        imbalance: ParenImbalance,
    },
    /// A character that cannot start any token.
    #[error("Unexpected character '{character}' at position {position}.")]
    UnexpectedCharacter {
        /// The character found.
        character: char,
        /// Where it was found.
        position:  usize,
    },
    /// A run of letters that is not a known function, constant or variable.
    #[error("Unknown identifier '{name}' at position {position}.")]
    UnknownIdentifier {
        /// The identifier found.
        name:     String,
        /// Where it was found.
        position: usize,
    },
    /// Found an unexpected token while parsing.
    #[error("Syntax error at position {position}: unexpected token {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Where it was found.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("Syntax error at position {position}: unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The length of the canonical text.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Syntax error at position {position}: expected ')' but found {found}.")]
    ExpectedClosingParen {
        /// What was found instead.
        found:    String,
        /// Where it was found.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Syntax error at position {position}: extra token {token} after a complete expression.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Where it was found.
        position: usize,
    },
    /// A function was called with a number of arguments it does not accept.
    #[error("Syntax error at position {position}: '{function}' takes {expected}, found {found}.")]
    ArgumentCountMismatch {
        /// The function name.
        function: &'static str,
        /// Human-readable description of the accepted counts.
        expected: String,
        /// The number of arguments given.
        found:    usize,
        /// Position of the function name.
        position: usize,
    },
    /// Groups, signs, exponents or operator chains are nested past what the
    /// parser accepts.
    #[error("Syntax error at position {position}: expression is nested more than {limit} levels deep.")]
    NestingTooDeep {
        /// The limit that was exceeded.
        limit:    usize,
        /// Where the limit was reached.
        position: usize,
    },
}

impl ParseError {
    /// The category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::InvalidCharacters { .. } => ErrorKind::InvalidCharacter,
            Self::UnbalancedParentheses { .. } => ErrorKind::UnbalancedParentheses,
            Self::UnexpectedCharacter { .. } => ErrorKind::Lex,
            Self::UnknownIdentifier { .. } => ErrorKind::UnknownIdentifier,
            Self::UnexpectedToken { .. }
            | Self::UnexpectedEndOfInput { .. }
            | Self::ExpectedClosingParen { .. }
            | Self::UnexpectedTrailingTokens { .. }
            | Self::ArgumentCountMismatch { .. }
            | Self::NestingTooDeep { .. } => ErrorKind::Syntax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_displayable() {
        let e = ParseError::InvalidCharacters { characters: vec!['$', '#'] };
        assert_eq!(e.to_string(), "Invalid characters in expression: $#");

        let e = ParseError::UnbalancedParentheses { imbalance: ParenImbalance::MissingClosing };
        assert_eq!(e.to_string(), "Unbalanced parentheses: missing closing parenthesis.");

        let e = ParseError::UnexpectedToken { token:    "')'".to_string(),
                                              position: 4, };
        assert_eq!(e.to_string(), "Syntax error at position 4: unexpected token ')'.");
        assert_eq!(e.kind(), ErrorKind::Syntax);
    }
}
