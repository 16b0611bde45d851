use std::collections::HashMap;

use crate::{
    ast::{CONSTANTS, Expr, Function},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// What a name stands for during one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Binding {
    /// A number: a named constant or a bound free variable.
    Constant(f64),
    /// A built-in function.
    Function(Function),
}

/// The names visible during one evaluation call.
///
/// An environment is a plain value: it is built per call (or cloned per
/// sample point) and never shared mutably, so independent evaluations can
/// run on different threads without coordination.
///
/// ## Usage
///
/// Use [`Environment::calculator`] for bare arithmetic and
/// [`Environment::grapher`] for functions of `x`, then bind `x` with
/// [`Environment::with_variable`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: HashMap<String, Binding>,
}

impl Environment {
    /// Creates an environment with no names at all.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constants `pi` and `e`; functions `sqrt`, `abs`, `round`, `min` and
    /// `max`. No free variable.
    #[must_use]
    pub fn calculator() -> Self {
        Self::with_builtins(&[Function::Sqrt,
                              Function::Abs,
                              Function::Round,
                              Function::Min,
                              Function::Max])
    }

    /// Constants `pi` and `e`; functions `sin`, `cos`, `tan`, `sqrt` and
    /// `abs`. The free variable `x` is left unbound.
    #[must_use]
    pub fn grapher() -> Self {
        Self::with_builtins(&[Function::Sin,
                              Function::Cos,
                              Function::Tan,
                              Function::Sqrt,
                              Function::Abs])
    }

    fn with_builtins(functions: &[Function]) -> Self {
        let mut env = Self::new();
        for (name, value) in CONSTANTS {
            env.bind(name, *value);
        }
        for function in functions {
            env.bind_function(*function);
        }
        env
    }

    /// Binds `name` to a number, replacing any previous binding.
    pub fn bind(&mut self, name: &str, value: f64) {
        self.bindings.insert(name.to_string(), Binding::Constant(value));
    }

    /// Makes a built-in function available under its own name.
    pub fn bind_function(&mut self, function: Function) {
        self.bindings
            .insert(function.name().to_string(), Binding::Function(function));
    }

    /// Returns a copy of `self` with `name` bound to `value`.
    #[must_use]
    pub fn with_variable(mut self, name: &str, value: f64) -> Self {
        self.bind(name, value);
        self
    }

    /// Looks up what `name` is bound to.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Binding> {
        self.bindings.get(name).copied()
    }

    /// Whether `function` may be called in this environment.
    #[must_use]
    pub fn has_function(&self, function: Function) -> bool {
        self.lookup(function.name()) == Some(Binding::Function(function))
    }

    /// Checks, without evaluating anything, that every function `expr` calls
    /// is available here.
    ///
    /// # Errors
    /// `UnknownFunction` for the first unavailable function, in pre-order.
    pub fn check_functions(&self, expr: &Expr) -> EvalResult<()> {
        let mut missing = None;
        expr.for_each_call(&mut |function, position| {
                if missing.is_none() && !self.has_function(function) {
                    missing = Some(RuntimeError::UnknownFunction { name: function.name(),
                                                                   position });
                }
            });
        missing.map_or(Ok(()), Err)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is a post-order reduction: children first, then the node's own
    /// operator or function. Every node's value is checked, so NaN or
    /// infinity anywhere in the tree fails with `UndefinedResult` at the
    /// node that produced it.
    ///
    /// # Errors
    /// `DivisionByZero`, `Domain`, `UndefinedResult`, `UnboundVariable` or
    /// `UnknownFunction`.
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        let value = match expr {
            Expr::Literal { value, .. } => *value,
            Expr::Variable { name, position } => self.eval_variable(name, *position)?,
            Expr::UnaryOp { op, expr, .. } => Self::eval_unary(*op, self.eval(expr)?),
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *position)?
            },
            Expr::Call { function,
                         arguments,
                         position, } => self.eval_call(*function, arguments, *position)?,
        };

        ensure_finite(value, expr.position())
    }

    /// Looks up a named value.
    ///
    /// Names bound to functions, and names not bound at all, are reported as
    /// unbound variables.
    fn eval_variable(&self, name: &str, position: usize) -> EvalResult<f64> {
        match self.lookup(name) {
            Some(Binding::Constant(value)) => Ok(value),
            _ => Err(RuntimeError::UnboundVariable { name: name.to_string(),
                                                     position }),
        }
    }
}

/// Evaluates `expr` in `env`.
///
/// # Errors
/// See [`Environment::eval`].
///
/// # Example
/// ```
/// use plotcalc::interpreter::{
///     evaluator::core::{Environment, evaluate},
///     lexer::tokenize,
///     parser::core::parse,
/// };
///
/// let text = "max(1, pi, 2)";
/// let expr = parse(&tokenize(text).unwrap(), text.len()).unwrap();
/// assert_eq!(evaluate(&expr, &Environment::calculator()).unwrap(),
///            std::f64::consts::PI);
/// ```
pub fn evaluate(expr: &Expr, env: &Environment) -> EvalResult<f64> {
    env.eval(expr)
}

/// Passes finite values through and turns NaN or infinity into an error.
pub(crate) fn ensure_finite(value: f64, position: usize) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RuntimeError::UndefinedResult { position })
    }
}
