/// Binary operator evaluation logic.
///
/// Handles the arithmetic operators, including the division-by-zero checks.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Core evaluation logic and environment management.
///
/// Contains the [`Environment`](core::Environment), the main evaluation
/// entry point and the finiteness check applied to every node.
pub mod core;

/// Function evaluation.
///
/// Handles built-in function calls: availability in the environment and the
/// per-function rules.
pub mod function;
