use crate::{
    ast::{Function, VARIABLE_NAME, recognized_identifiers},
    error::{ParenImbalance, ParseError},
    interpreter::parser::core::ParseResult,
};

/// Which front end the text comes from.
///
/// The calculator takes a bare expression; the grapher additionally accepts
/// an optional `f(x)=` header in front of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Calculator,
    Grapher,
}

/// Operator symbols that may appear in input text.
const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '^', '(', ')', ',', '.', '×', '÷'];

/// Rewrites raw user input into canonical text.
///
/// In order:
/// 1. (grapher only) strips a leading `f(x)=` header, case-insensitively;
/// 2. validates the remaining text: allowed characters and parenthesis
///    nesting;
/// 3. rewrites `**` to `^`, `×` to `*`, `÷` to `/` and any whitespace to a
///    plain space;
/// 4. inserts `*` at implicit multiplication boundaries (`2(`, `)2`, `)(`,
///    `)x`, `2x`, `2sin`, `x(`).
///
/// The canonical text is pure ASCII, so byte and character positions agree.
///
/// # Errors
/// - `EmptyInput` when nothing but whitespace (or a bare header) is given.
/// - `InvalidCharacters` naming every character outside the allowed set.
/// - `UnbalancedParentheses` on an extra or missing closing parenthesis.
///
/// # Example
/// ```
/// use plotcalc::interpreter::normalizer::{Flavor, normalize};
///
/// assert_eq!(normalize("2(3+4)", Flavor::Calculator).unwrap(), "2*(3+4)");
/// assert_eq!(normalize("f(x)=3sin(x)^2", Flavor::Grapher).unwrap(), "3*sin(x)^2");
/// ```
pub fn normalize(raw: &str, flavor: Flavor) -> ParseResult<String> {
    let trimmed = raw.trim();
    let body = match flavor {
        Flavor::Calculator => trimmed,
        Flavor::Grapher => strip_function_header(trimmed),
    };

    if body.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    validate_characters(body)?;
    validate_parentheses(body)?;

    let canonical = insert_implicit_multiplication(&rewrite_glyphs(body));
    log::debug!("normalized {raw:?} to {canonical:?}");
    Ok(canonical)
}

/// Removes a leading `f(x)` followed by `=`, ignoring case and surrounding
/// whitespace. Text without a complete header is returned unchanged.
fn strip_function_header(text: &str) -> &str {
    let header = format!("f({VARIABLE_NAME})");
    match text.get(..header.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(&header) => {
            text[header.len()..].trim_start()
                                .strip_prefix('=')
                                .map_or(text, str::trim)
        },
        _ => text,
    }
}

/// Checks that every character is a digit, whitespace, an operator symbol or
/// a letter occurring in some recognised identifier.
///
/// Letters are only checked individually; whether they spell a known name is
/// decided by the lexer.
fn validate_characters(text: &str) -> ParseResult<()> {
    let mut invalid = Vec::new();

    for c in text.chars() {
        let allowed = c.is_ascii_digit()
                      || c.is_whitespace()
                      || OPERATOR_CHARS.contains(&c)
                      || (c.is_ascii_lowercase() && recognized_identifiers().any(|name| name.contains(c)));
        if !allowed && !invalid.contains(&c) {
            invalid.push(c);
        }
    }

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(ParseError::InvalidCharacters { characters: invalid })
    }
}

/// Tracks parenthesis nesting left to right.
fn validate_parentheses(text: &str) -> ParseResult<()> {
    let mut depth = 0usize;

    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1)
                             .ok_or(ParseError::UnbalancedParentheses { imbalance:
                                                                            ParenImbalance::ExtraClosing, })?;
            },
            _ => {},
        }
    }

    if depth == 0 {
        Ok(())
    } else {
        Err(ParseError::UnbalancedParentheses { imbalance: ParenImbalance::MissingClosing })
    }
}

fn rewrite_glyphs(text: &str) -> String {
    text.replace("**", "^")
        .chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            c if c.is_whitespace() => ' ',
            c => c,
        })
        .collect()
}

/// What the last emitted piece of text was, as far as implicit
/// multiplication cares.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Previous {
    Digit,
    CloseParen,
    Variable,
    Other,
}

fn insert_implicit_multiplication(text: &str) -> String {
    let chars = text.chars().collect::<Vec<_>>();
    let mut out = String::with_capacity(text.len() * 2);
    let mut previous = Previous::Other;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word = chars[start..i].iter().collect::<String>();
            let is_variable = word == VARIABLE_NAME;
            let is_function = Function::from_name(&word).is_some();

            if (previous == Previous::Digit && (is_variable || is_function))
               || (previous == Previous::CloseParen && is_variable)
            {
                out.push('*');
            }
            out.push_str(&word);
            previous = if is_variable {
                Previous::Variable
            } else {
                Previous::Other
            };
            continue;
        }

        let boundary = match c {
            '(' => previous != Previous::Other,
            d if d.is_ascii_digit() => previous == Previous::CloseParen,
            _ => false,
        };
        if boundary {
            out.push('*');
        }
        out.push(c);

        previous = match c {
            d if d.is_ascii_digit() => Previous::Digit,
            ')' => Previous::CloseParen,
            _ => Previous::Other,
        };
        i += 1;
    }

    out
}
