use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};
use std::iter::Peekable;

pub type ParseResult<T> = Result<T, ParseError>;

/// How many groups, signs, exponents and argument lists may enclose one
/// another.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Longest root-to-leaf path, in nodes, of a tree the parser builds.
pub const MAX_TREE_HEIGHT: usize = 512;

/// Parses a complete token sequence into an expression tree.
///
/// `end` is the length of the canonical text the tokens were read from. The
/// whole sequence must form exactly one expression; anything left over after
/// it is an error. End-of-input errors raised deep in the grammar are
/// reported at `end`.
///
/// # Errors
/// Any syntax error: a missing operand, a missing `)`, trailing tokens, a
/// function called with the wrong number of arguments, or nesting beyond
/// [`MAX_NESTING_DEPTH`] or [`MAX_TREE_HEIGHT`].
///
/// # Example
/// ```
/// use plotcalc::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let text = "2+3*4";
/// let expr = parse(&tokenize(text).unwrap(), text.len()).unwrap();
/// assert_eq!(expr.to_string(), "(2+(3*4))");
/// ```
pub fn parse(tokens: &[(Token, usize)], end: usize) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();

    let expr = parse_expression(&mut iter, 0).map_err(|e| match e {
                                                 ParseError::UnexpectedEndOfInput { .. } => {
                                                     ParseError::UnexpectedEndOfInput { position: end }
                                                 },
                                                 other => other,
                                             })?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                          position: *position, });
    }

    log::debug!("parsed expression {expr}");
    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy. `depth` counts the groups,
/// signs, exponents and argument lists enclosing this expression.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn parse_text(text: &str) -> ParseResult<Expr> {
        parse(&tokenize(text)?, text.len())
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(parse_text("2+3*4").unwrap().to_string(), "(2+(3*4))");
        assert_eq!(parse_text("10/2/5").unwrap().to_string(), "((10/2)/5)");
        assert_eq!(parse_text("2^2^3").unwrap().to_string(), "(2^(2^3))");
        assert_eq!(parse_text("-2^2").unwrap().to_string(), "(-(2^2))");
        assert_eq!(parse_text("2^-1").unwrap().to_string(), "(2^(-1))");
        assert_eq!(parse_text("1-2-3").unwrap().to_string(), "((1-2)-3)");
        assert_eq!(parse_text("+3").unwrap().to_string(), "3");
    }

    #[test]
    fn calls_and_groups() {
        assert_eq!(parse_text("max(1,2,3)").unwrap().to_string(), "max(1,2,3)");
        assert_eq!(parse_text("sqrt((x))").unwrap().to_string(), "sqrt(x)");
        assert_eq!(parse_text("2*pi").unwrap().to_string(), "(2*pi)");
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        assert_eq!(parse_text("2 3"),
                   Err(ParseError::UnexpectedTrailingTokens { token:    "'3'".to_string(),
                                                              position: 2, }));
    }

    #[test]
    fn missing_operands_are_rejected() {
        assert_eq!(parse_text("2+"), Err(ParseError::UnexpectedEndOfInput { position: 2 }));
        assert_eq!(parse_text("2+*3"),
                   Err(ParseError::UnexpectedToken { token:    "'*'".to_string(),
                                                     position: 2, }));
        assert_eq!(parse_text("()"),
                   Err(ParseError::UnexpectedToken { token:    "')'".to_string(),
                                                     position: 1, }));
        assert_eq!(parse(&[], 0), Err(ParseError::UnexpectedEndOfInput { position: 0 }));
    }

    #[test]
    fn arity_is_checked_while_parsing() {
        let err = parse_text("sin(1,2)").unwrap_err();
        assert!(matches!(err,
                         ParseError::ArgumentCountMismatch { function: "sin",
                                                             found: 2,
                                                             position: 0,
                                                             .. }));
        assert!(parse_text("max(1)").is_err());
        assert!(parse_text("sqrt()").is_err());
        assert!(parse_text("round(2.5, 1)").is_ok());
    }

    #[test]
    fn unclosed_calls_report_what_was_found() {
        assert_eq!(parse_text("max(1 2)"),
                   Err(ParseError::ExpectedClosingParen { found:    "'2'".to_string(),
                                                          position: 6, }));
        assert_eq!(parse_text("(1+2"), Err(ParseError::UnexpectedEndOfInput { position: 4 }));
    }

    #[test]
    fn functions_need_an_argument_list() {
        assert_eq!(parse_text("sin"), Err(ParseError::UnexpectedEndOfInput { position: 3 }));
        assert_eq!(parse_text("sin+1"),
                   Err(ParseError::UnexpectedToken { token:    "'+'".to_string(),
                                                     position: 3, }));
    }

    #[test]
    fn reparsing_is_idempotent() {
        let tokens = tokenize("3*sin(x)^2-max(1,x,pi)/e").unwrap();
        assert_eq!(parse(&tokens, 24).unwrap(), parse(&tokens, 24).unwrap());
    }

    #[test]
    fn end_of_input_is_reported_at_the_text_length() {
        assert_eq!(parse_text("1+sqrt"), Err(ParseError::UnexpectedEndOfInput { position: 6 }));
        assert_eq!(parse_text("max(1, 2"), Err(ParseError::UnexpectedEndOfInput { position: 8 }));
    }

    #[test]
    fn deep_nesting_is_a_syntax_error() {
        let nested = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
        assert!(matches!(parse_text(&nested),
                         Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                          .. })));

        let signs = format!("{}1", "-".repeat(10_000));
        assert!(matches!(parse_text(&signs), Err(ParseError::NestingTooDeep { .. })));

        let powers = format!("{}2", "2^".repeat(10_000));
        assert!(matches!(parse_text(&powers), Err(ParseError::NestingTooDeep { .. })));

        let calls = format!("{}1{}", "sqrt(".repeat(10_000), ")".repeat(10_000));
        assert!(matches!(parse_text(&calls), Err(ParseError::NestingTooDeep { .. })));
    }

    #[test]
    fn long_operator_chains_are_bounded() {
        let sum = format!("{}1", "1+".repeat(10_000));
        assert!(matches!(parse_text(&sum),
                         Err(ParseError::NestingTooDeep { limit: MAX_TREE_HEIGHT,
                                                          .. })));

        let product = format!("{}1", "1*".repeat(10_000));
        assert!(matches!(parse_text(&product), Err(ParseError::NestingTooDeep { .. })));
    }

    #[test]
    fn moderate_nesting_still_parses() {
        let nested = format!("{}1{}", "(".repeat(100), ")".repeat(100));
        assert_eq!(parse_text(&nested).unwrap().to_string(), "1");

        let sum = format!("{}1", "1+".repeat(200));
        assert_eq!(parse_text(&sum).unwrap().height(), 201);
    }
}
