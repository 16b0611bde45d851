use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING_DEPTH, MAX_TREE_HEIGHT, ParseResult},
    },
};

/// Fails once the recursive descent is more than [`MAX_NESTING_DEPTH`] levels
/// deep, reporting the position of the next token.
pub(in crate::interpreter::parser) fn check_nesting<'a, I>(tokens: &mut Peekable<I>,
                                                           depth: usize)
                                                           -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if depth > MAX_NESTING_DEPTH {
        let position = tokens.peek().map_or(0, |(_, position)| *position);
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                position });
    }
    Ok(())
}

/// Passes `height` through unless it exceeds [`MAX_TREE_HEIGHT`].
///
/// Left-associative chains such as `1+1+1+...` grow the tree without
/// recursing in the parser, so their height is checked separately.
pub(in crate::interpreter::parser) const fn check_height(height: usize,
                                                         position: usize)
                                                         -> ParseResult<usize> {
    if height > MAX_TREE_HEIGHT {
        return Err(ParseError::NestingTooDeep { limit: MAX_TREE_HEIGHT,
                                                position });
    }
    Ok(height)
}

/// Parses a comma-separated list of items until a closing `)`.
///
/// It repeatedly calls `parse_item` to parse one element, expecting either a
/// comma, to continue the list, or `)`, to end it. An immediately
/// encountered `)` produces an empty list; the caller decides whether that
/// is acceptable.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - something other than `,` or `)` follows an item,
/// - the stream ends before the closing `)`.
pub(in crate::interpreter::parser) fn parse_argument_list<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => break,
            Some((tok, position)) => {
                return Err(ParseError::ExpectedClosingParen { found:    tok.to_string(),
                                                              position: *position, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { position: 0 }),
        }
    }
    Ok(items)
}
