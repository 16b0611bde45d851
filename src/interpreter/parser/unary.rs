use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Function, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{check_nesting, parse_argument_list},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix signs:
/// - `-`  (numeric negation)
/// - `+`  (no-op)
///
/// Signs are right-associative and bind looser than `^`, so `-2^2` is
/// `-(2^2)` while `2^-1` is `2^(-1)`.
///
/// Every level of recursion passes through here, so this is where nesting
/// deeper than [`MAX_NESTING_DEPTH`](crate::interpreter::parser::core::MAX_NESTING_DEPTH)
/// is rejected.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | power
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    check_nesting(tokens, depth)?;

    if let Some((Token::Minus, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let expr = parse_unary(tokens, depth + 1)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           position })
    } else if let Some((Token::Plus, _)) = tokens.peek() {
        tokens.next();
        parse_unary(tokens, depth + 1)
    } else {
        parse_power(tokens, depth)
    }
}

/// Parses an exponentiation.
///
/// The exponent is itself a unary expression, which makes `^`
/// right-associative: `2^2^3` parses as `2^(2^3)`.
///
/// Grammar: `power := primary ("^" unary)?`
fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let base = parse_primary(tokens, depth)?;

    if let Some((Token::Caret, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let exponent = parse_unary(tokens, depth + 1)?;
        return Ok(Expr::BinaryOp { left: Box::new(base),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(exponent),
                                   position });
    }

    Ok(base)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | CONSTANT | VARIABLE
///              | FUNCTION "(" expression ("," expression)* ")"
///              | "(" expression ")"
/// ```
///
/// # Errors
/// `UnexpectedToken` when the next token cannot start an operand, and
/// `UnexpectedEndOfInput` when there is no next token.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(value), position)) => Ok(Expr::Literal { value:    *value,
                                                                     position: *position, }),
        Some((Token::LParen, _)) => parse_grouping(tokens, depth + 1),
        Some((Token::Identifier(name), position)) => {
            parse_identifier_or_call(tokens, name, *position, depth)
        },
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                                   position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }
}

/// Parses the rest of a parenthesized expression after its `(`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens, depth)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((tok, position)) => Err(ParseError::ExpectedClosingParen { found:    tok.to_string(),
                                                                        position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }
}

/// Parses a named value or a function call, the name already consumed.
///
/// Function names must be followed by a parenthesised argument list whose
/// length the function accepts. Every other name (constants and the free
/// variable) becomes an [`Expr::Variable`], resolved at evaluation time.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>,
                                   name: &str,
                                   position: usize,
                                   depth: usize)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some(function) = Function::from_name(name) else {
        return Ok(Expr::Variable { name: name.to_string(),
                                   position });
    };

    match tokens.next() {
        Some((Token::LParen, _)) => {},
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                     position: *position, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }

    let arguments = parse_argument_list(tokens, |tokens| parse_expression(tokens, depth + 1))?;

    let arity = function.arity();
    if !arity.check(arguments.len()) {
        return Err(ParseError::ArgumentCountMismatch { function: function.name(),
                                                       expected: arity.to_string(),
                                                       found: arguments.len(),
                                                       position });
    }

    Ok(Expr::Call { function,
                    arguments,
                    position })
}
