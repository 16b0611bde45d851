use std::fmt;

/// Name of the free variable a function of `x` is written in.
pub const VARIABLE_NAME: &str = "x";

/// Named constants every environment flavour binds.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", std::f64::consts::PI), ("e", std::f64::consts::E)];

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each node exclusively owns its children and remembers the position (a
/// 0-based character offset into the canonical text) of the token it was
/// built from, for error reporting. Trees are never mutated after the parser
/// returns them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3.5`.
    Literal {
        /// The constant value.
        value:    f64,
        /// Position in the canonical text.
        position: usize,
    },
    /// Reference to a named value: a constant (`pi`, `e`) or the free
    /// variable `x`.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Position in the canonical text.
        position: usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Position in the canonical text.
        position: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position in the canonical text.
        position: usize,
    },
    /// Call of a built-in function (e.g. `sin(x)`).
    Call {
        /// The function being called.
        function:  Function,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
        /// Position in the canonical text.
        position:  usize,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use plotcalc::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::Variable { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Call { position, .. } => *position,
        }
    }

    /// Number of nodes on the longest path from `self` down to a leaf.
    ///
    /// ## Example
    /// ```
    /// use plotcalc::ast::Expr;
    ///
    /// let leaf = Expr::Literal { value:    1.0,
    ///                            position: 0, };
    /// assert_eq!(leaf.height(), 1);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Literal { .. } | Self::Variable { .. } => 1,
            Self::UnaryOp { expr, .. } => expr.height() + 1,
            Self::BinaryOp { left, right, .. } => left.height().max(right.height()) + 1,
            Self::Call { arguments, .. } => arguments.iter().map(Self::height).max().unwrap_or(0) + 1,
        }
    }

    /// Visits every function called anywhere in the tree, in pre-order.
    pub fn for_each_call(&self, visit: &mut impl FnMut(Function, usize)) {
        match self {
            Self::Literal { .. } | Self::Variable { .. } => {},
            Self::UnaryOp { expr, .. } => expr.for_each_call(visit),
            Self::BinaryOp { left, right, .. } => {
                left.for_each_call(visit);
                right.for_each_call(visit);
            },
            Self::Call { function,
                         arguments,
                         position, } => {
                visit(*function, *position);
                for argument in arguments {
                    argument.for_each_call(visit);
                }
            },
        }
    }
}

/// Renders the tree back to canonical text with every compound
/// subexpression parenthesised.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left}{op}{right})"),
            Self::Call { function,
                         arguments,
                         .. } => {
                write!(f, "{function}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}

/// Specifies the allowed number of arguments for a built-in function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `OneOf(slice)` means the function accepts any arity listed in `slice`.
/// - `AtLeast(n)` means the function accepts `n` or more arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::AtLeast(m) => n >= *m,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(1) => write!(f, "1 argument"),
            Self::Exact(n) => write!(f, "{n} arguments"),
            Self::OneOf(counts) => {
                let counts = counts.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{} arguments", counts.join(" or "))
            },
            Self::AtLeast(n) => write!(f, "at least {n} arguments"),
        }
    }
}

/// The closed set of built-in functions.
///
/// A call node names one of these variants, so once a tree has been parsed it
/// can never refer to an unknown function. Which of them are usable is decided
/// by the [`Environment`](crate::interpreter::evaluator::core::Environment)
/// the tree is evaluated in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Abs,
    Round,
    Min,
    Max,
}

impl Function {
    /// Every built-in function, in a fixed order.
    pub const ALL: [Self; 8] = [Self::Sin,
                                Self::Cos,
                                Self::Tan,
                                Self::Sqrt,
                                Self::Abs,
                                Self::Round,
                                Self::Min,
                                Self::Max];

    /// The name the function is written with.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Round => "round",
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    /// Looks a function up by its written name.
    ///
    /// # Example
    /// ```
    /// use plotcalc::ast::Function;
    ///
    /// assert_eq!(Function::from_name("sqrt"), Some(Function::Sqrt));
    /// assert_eq!(Function::from_name("log"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Number of arguments accepted by the function; checked by the parser.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Sin | Self::Cos | Self::Tan | Self::Abs => Arity::Exact(1),
            Self::Sqrt | Self::Round => Arity::OneOf(&[1, 2]),
            Self::Min | Self::Max => Arity::AtLeast(2),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returns `true` when `name` is a function, a constant or the free variable.
///
/// # Example
/// ```
/// use plotcalc::ast::is_recognized_identifier;
///
/// assert!(is_recognized_identifier("pi"));
/// assert!(is_recognized_identifier("x"));
/// assert!(!is_recognized_identifier("y"));
/// ```
#[must_use]
pub fn is_recognized_identifier(name: &str) -> bool {
    name == VARIABLE_NAME
    || CONSTANTS.iter().any(|(constant, _)| *constant == name)
    || Function::from_name(name).is_some()
}

/// Iterates over every recognised identifier.
pub fn recognized_identifiers() -> impl Iterator<Item = &'static str> {
    CONSTANTS.iter()
             .map(|(name, _)| *name)
             .chain(Function::ALL.into_iter().map(Function::name))
             .chain(std::iter::once(VARIABLE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_rules() {
        assert!(Function::Sqrt.arity().check(1));
        assert!(Function::Sqrt.arity().check(2));
        assert!(!Function::Sqrt.arity().check(3));
        assert!(!Function::Max.arity().check(1));
        assert!(Function::Max.arity().check(5));
        assert!(!Function::Sin.arity().check(0));
    }

    #[test]
    fn names_round_trip() {
        for function in Function::ALL {
            assert_eq!(Function::from_name(function.name()), Some(function));
        }
        assert_eq!(recognized_identifiers().count(), 11);
    }

    #[test]
    fn display_parenthesises_everything() {
        let expr = Expr::BinaryOp { left:     Box::new(Expr::Literal { value:    2.0,
                                                                       position: 0, }),
                                    op:       BinaryOperator::Mul,
                                    right:    Box::new(Expr::Call { function:  Function::Abs,
                                                                    arguments:
                                                                        vec![Expr::Variable { name:     "x".to_string(),
                                                                                              position: 6, }],
                                                                    position:  2, }),
                                    position: 1, };
        assert_eq!(expr.to_string(), "(2*abs(x))");
        assert_eq!(expr.height(), 3);
    }
}
