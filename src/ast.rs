/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` is a closed set of five shapes: an integer leaf and the four binary
/// arithmetic applications. Every non-leaf node exclusively owns its two
/// children through a `Box`, so a tree is acyclic, finite, and released as a
/// whole when its root goes out of scope. Nodes are never mutated after the
/// parser builds them; the evaluator and printer traverse them read-only.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal leaf.
    Number {
        /// The literal's value.
        value: i64,
    },
    /// An addition (`+`).
    Add {
        /// Left operand.
        lhs: Box<Self>,
        /// Right operand.
        rhs: Box<Self>,
    },
    /// A subtraction (`-`).
    Sub {
        /// Left operand.
        lhs: Box<Self>,
        /// Right operand.
        rhs: Box<Self>,
    },
    /// A multiplication (`*`).
    Mul {
        /// Left operand.
        lhs: Box<Self>,
        /// Right operand.
        rhs: Box<Self>,
    },
    /// A truncating integer division (`/`).
    Div {
        /// Left operand.
        lhs: Box<Self>,
        /// Right operand.
        rhs: Box<Self>,
    },
}

impl Expr {
    /// Gets the name of the node's shape, as it appears in rendered trees.
    /// ## Example
    /// ```
    /// use numera::ast::Expr;
    ///
    /// let expr = Expr::Number { value: 5 };
    ///
    /// assert_eq!(expr.variant_name(), "Number");
    /// ```
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Number { .. } => "Number",
            Self::Add { .. } => "Add",
            Self::Sub { .. } => "Sub",
            Self::Mul { .. } => "Mul",
            Self::Div { .. } => "Div",
        }
    }
}
