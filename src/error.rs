/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include unexpected tokens, unmatched parentheses,
/// oversized literals, and any other issues detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors are division by zero and arithmetic overflow; nothing else can fail
/// once a tree has been built.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
