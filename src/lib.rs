//! # numera
//!
//! numera is an integer arithmetic expression calculator written in Rust.
//! It tokenizes, parses, and evaluates expressions built from decimal
//! literals, the four arithmetic operators, and parentheses, and can render
//! the parsed syntax tree for inspection.

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
    error::ParseError,
    interpreter::{evaluator::evaluate, lexer::tokenize, parser::core::parse_expression},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum that represents the syntactic
/// structure of an expression as a tree. The AST is built by the parser and
/// traversed by the evaluator and the printer.
///
/// # Responsibilities
/// - Defines the closed set of node shapes: literals and the four binary
///   operations.
/// - Gives every non-leaf node exclusive ownership of its children.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating an expression. It standardizes error reporting and carries
/// detailed information about failures, including source offsets where they
/// exist.
///
/// # Responsibilities
/// - Defines error enums for both failure phases (parse, runtime).
/// - Attaches byte offsets and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, and tree rendering
/// to provide a complete pipeline from source text to result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and printer.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses a source string into an expression tree.
///
/// The input is tokenized in full, parsed as a single expression, and the
/// token stream must be exhausted afterwards; leftover tokens are an error
/// rather than being silently ignored. On any failure no partial tree is
/// returned.
///
/// # Errors
/// Returns a [`ParseError`] if the input contains characters outside the
/// grammar, is not a single well-formed expression, or holds an integer
/// literal too large to represent.
///
/// # Examples
/// ```
/// use numera::parse;
///
/// assert!(parse("(2 + 3) * 4").is_ok());
///
/// // A dangling operator is rejected, not repaired.
/// assert!(parse("2 + ").is_err());
///
/// // So is anything left over after a complete expression.
/// assert!(parse("2 3").is_err());
/// ```
pub fn parse(source: &str) -> Result<ast::Expr, ParseError> {
    let tokens = tokenize(source)?;

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    match iter.next() {
        Some((token, offset)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:  token.to_string(),
                                                       offset: *offset, })
        },
        None => Ok(expr),
    }
}

/// Returns the final evaluation result for a source string.
///
/// This function parses the provided source string and evaluates the
/// resulting tree. If both phases succeed, it returns the computed integer;
/// otherwise, it returns an error with details about the failure.
///
/// # Errors
/// Returns an error if parsing fails, or if evaluation divides by zero or
/// overflows.
///
/// # Examples
/// ```
/// use numera::get_result;
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(get_result("2 + 3 * 4").unwrap(), 14);
///
/// // Division truncates toward zero.
/// assert_eq!(get_result("7 / 2").unwrap(), 3);
///
/// // Division by zero parses fine but fails to evaluate.
/// assert!(get_result("1 / 0").is_err());
/// ```
pub fn get_result(source: &str) -> Result<i64, Box<dyn std::error::Error>> {
    let expr = parse(source)?;
    let value = evaluate(&expr)?;
    Ok(value)
}
