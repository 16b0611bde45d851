//! # plotcalc
//!
//! plotcalc is a mathematical expression engine written in Rust.
//! It normalizes, parses and evaluates calculator input such as `2(3+4)`, and
//! compiles functions of `x` such as `f(x)=3sin(x)^2` that can be evaluated at
//! a point or sampled over an interval for plotting.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::{Expr, VARIABLE_NAME},
    interpreter::{
        evaluator::core::Environment,
        lexer::tokenize,
        normalizer::{Flavor, normalize},
        parser::core::parse,
        sampler::sample,
    },
};

pub use crate::{
    error::{ErrorKind, EvalError},
    interpreter::sampler::{PlotRange, PlotSeries},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent an
/// expression as a tree. The tree is built by the parser and reduced by the
/// evaluator.
///
/// # Responsibilities
/// - Defines expression nodes, operators and the closed set of built-in
///   functions with their arities.
/// - Attaches source positions to nodes for error reporting.
/// - Lists the identifiers the engine recognises.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while normalizing,
/// tokenizing, parsing, evaluating or sampling an expression, and the
/// [`ErrorKind`] taxonomy they are grouped into.
///
/// # Responsibilities
/// - Defines error enums for the front end and for evaluation.
/// - Attaches positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the stages of expression handling.
///
/// Text flows through normalizer, lexer and parser into a tree, which the
/// evaluator reduces to a number and the sampler drives across an interval.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Runs raw text through the normalizer, the lexer and the parser.
fn compile(raw: &str, flavor: Flavor) -> Result<Expr, EvalError> {
    let canonical = normalize(raw, flavor)?;
    let tokens = tokenize(&canonical)?;
    Ok(parse(&tokens, canonical.len())?)
}

/// Evaluates calculator input to a single number.
///
/// The text is evaluated with the calculator environment: constants `pi` and
/// `e`, functions `sqrt`, `abs`, `round`, `min` and `max`, and no free
/// variable. Each call is independent; nothing is remembered between calls.
///
/// # Errors
/// Any [`EvalError`]; see [`ErrorKind`] for the categories.
///
/// # Examples
/// ```
/// use plotcalc::{ErrorKind, evaluate_arithmetic_expression};
///
/// assert_eq!(evaluate_arithmetic_expression("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate_arithmetic_expression("2(3+4)").unwrap(), 14.0);
///
/// let err = evaluate_arithmetic_expression("5/0").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
/// ```
pub fn evaluate_arithmetic_expression(text: &str) -> Result<f64, EvalError> {
    let expr = compile(text, Flavor::Calculator)?;
    Ok(Environment::calculator().eval(&expr)?)
}

/// Compiles a function of `x` into a reusable expression tree.
///
/// An optional `f(x)=` header is stripped first. Every function the tree
/// calls is checked against the grapher environment here, so an expression
/// that compiles can only fail later for numeric reasons or an unbound name.
///
/// # Errors
/// Any front-end error, or `UnknownIdentifier` for a function the grapher
/// does not provide (such as `round`).
///
/// # Examples
/// ```
/// use plotcalc::{compile_function_of_x, evaluate_at};
///
/// let f = compile_function_of_x("f(x) = 2x+1").unwrap();
/// assert_eq!(evaluate_at(&f, 3.0).unwrap(), 7.0);
/// assert!(compile_function_of_x("round(x)").is_err());
/// ```
pub fn compile_function_of_x(text: &str) -> Result<Expr, EvalError> {
    let expr = compile(text, Flavor::Grapher)?;
    Environment::grapher().check_functions(&expr)?;
    Ok(expr)
}

/// Evaluates a compiled function at a single point.
///
/// # Errors
/// Any runtime error raised while evaluating `expr` with `x` bound.
pub fn evaluate_at(expr: &Expr, x: f64) -> Result<f64, EvalError> {
    let env = Environment::grapher().with_variable(VARIABLE_NAME, x);
    Ok(env.eval(expr)?)
}

/// Samples a compiled function at `count` evenly spaced points of
/// `[x_min, x_max]`.
///
/// Points where the function is undefined are left out of the series.
///
/// # Errors
/// - `InvalidRange` if `x_min >= x_max`, a bound is not finite, or
///   `count < 2`.
/// - `EmptyDomain` if the function is undefined at every sampled point.
///
/// # Examples
/// ```
/// use std::f64::consts::PI;
///
/// use plotcalc::{compile_function_of_x, sample_plot};
///
/// let tan = compile_function_of_x("tan(x)").unwrap();
/// let series = sample_plot(&tan, -PI, PI, 100).unwrap();
/// assert!(!series.is_empty());
/// assert!(series.ys().iter().all(|y| y.is_finite()));
/// ```
pub fn sample_plot(expr: &Expr, x_min: f64, x_max: f64, count: usize) -> Result<PlotSeries, EvalError> {
    let range = PlotRange { x_min,
                            x_max,
                            count };
    Ok(sample(expr, &Environment::grapher(), VARIABLE_NAME, &range)?)
}
