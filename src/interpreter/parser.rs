/// Core parsing logic.
///
/// Holds the parser entry point, the shared result type and the top of the
/// precedence hierarchy.
pub mod core;

/// Unary, exponent and primary expression parsing.
///
/// Handles prefix signs, right-associative exponentiation, literals, named
/// values, function calls and parenthesised groups.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the left-associative additive and multiplicative levels.
pub mod binary;

/// Utility functions for the parser.
pub mod utils;
