use std::fmt;

use logos::Logos;

use crate::{ast::is_recognized_identifier, error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in canonical text.
/// A token is a minimal but meaningful unit of text produced by the lexer.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `2.` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// Identifier tokens; function, constant or variable names such as `sin`,
    /// `pi` or `x`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,

    /// Whitespace.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "'{n}'"),
            Self::Identifier(name) => write!(f, "'{name}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Caret => write!(f, "'^'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Comma => write!(f, "','"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts canonical text into `(Token, position)` pairs.
///
/// Positions are byte offsets, which equal character offsets for canonical
/// (ASCII) text. Identifiers are checked against the table of recognised
/// names here, so the parser only ever sees known names.
///
/// # Errors
/// - `UnexpectedCharacter` for a character that cannot start any token.
/// - `UnknownIdentifier` for a run of letters that names nothing.
///
/// # Example
/// ```
/// use plotcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2*pi").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 0),
///                 (Token::Star, 1),
///                 (Token::Identifier("pi".to_string()), 2)]);
/// ```
pub fn tokenize(canonical: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(canonical);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(Token::Identifier(name)) if !is_recognized_identifier(&name) => {
                return Err(ParseError::UnknownIdentifier { name, position });
            },
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(ParseError::UnexpectedCharacter { character, position });
            },
        }
    }

    log::debug!("tokenized {canonical:?} into {} tokens", tokens.len());
    Ok(tokens)
}
