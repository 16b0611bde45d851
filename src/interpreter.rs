/// The evaluator module reduces expression trees to numbers.
///
/// The evaluator walks the AST post-order against an [`Environment`] of
/// constants, functions and free variables. Every intermediate result is
/// checked, so a successful evaluation always yields a finite `f64`.
///
/// # Responsibilities
/// - Builds the calculator and grapher environments.
/// - Applies operators and built-in functions.
/// - Reports division by zero, domain errors, undefined results and unbound
///   variables.
///
/// [`Environment`]: evaluator::core::Environment
pub mod evaluator;
/// The lexer module tokenizes canonical text for further parsing.
///
/// The lexer reads normalized text and produces a flat sequence of tokens,
/// each paired with its position: numbers, identifiers, operators,
/// parentheses and commas.
///
/// # Responsibilities
/// - Converts the character stream into tokens with source positions.
/// - Rejects identifiers that name no function, constant or variable.
/// - Reports characters that cannot start any token.
pub mod lexer;
/// The normalizer rewrites user-friendly notation into canonical text.
///
/// # Responsibilities
/// - Strips an optional `f(x)=` header for function input.
/// - Validates the character set and parenthesis balance.
/// - Rewrites alternative operator glyphs and inserts implicit
///   multiplication.
pub mod normalizer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into [`Expr`](crate::ast::Expr) nodes, honouring
///   precedence and associativity.
/// - Checks function arity.
/// - Reports grammar violations with the offending token and its position.
pub mod parser;
/// The sampler evaluates a compiled function across an interval.
///
/// # Responsibilities
/// - Validates the sampling range.
/// - Evaluates the expression at evenly spaced points, skipping points where
///   it is undefined.
/// - Produces a [`PlotSeries`](sampler::PlotSeries) of finite coordinates.
pub mod sampler;
