use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns the resulting integer.
///
/// The walk is a structural recursion: a leaf returns its stored value, and a
/// binary node evaluates both children before combining them with its
/// operator. Division truncates toward zero. The function is pure, so
/// evaluating the same tree twice always yields the same result, and a failed
/// evaluation leaves no state behind.
///
/// # Parameters
/// - `expr`: Root of the tree to evaluate.
///
/// # Errors
/// - `RuntimeError::DivisionByZero` when a division's right operand is zero.
/// - `RuntimeError::Overflow` when an intermediate result does not fit in an
///   `i64` (including `i64::MIN / -1`).
///
/// # Example
/// ```
/// use numera::{interpreter::evaluator::evaluate, parse};
///
/// let expr = parse("2 + 3 * 4").unwrap();
/// assert_eq!(evaluate(&expr).unwrap(), 14);
///
/// let expr = parse("1 / 0").unwrap();
/// assert!(evaluate(&expr).is_err());
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    match expr {
        Expr::Number { value } => Ok(*value),
        Expr::Add { lhs, rhs } => {
            let (lhs, rhs) = (evaluate(lhs)?, evaluate(rhs)?);
            lhs.checked_add(rhs).ok_or(RuntimeError::Overflow)
        },
        Expr::Sub { lhs, rhs } => {
            let (lhs, rhs) = (evaluate(lhs)?, evaluate(rhs)?);
            lhs.checked_sub(rhs).ok_or(RuntimeError::Overflow)
        },
        Expr::Mul { lhs, rhs } => {
            let (lhs, rhs) = (evaluate(lhs)?, evaluate(rhs)?);
            lhs.checked_mul(rhs).ok_or(RuntimeError::Overflow)
        },
        Expr::Div { lhs, rhs } => {
            let (lhs, rhs) = (evaluate(lhs)?, evaluate(rhs)?);
            if rhs == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            lhs.checked_div(rhs).ok_or(RuntimeError::Overflow)
        },
    }
}
