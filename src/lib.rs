//! # shunter
//!
//! shunter is a single-shot arithmetic expression evaluator written in Rust.
//! It consumes expressions made of whitespace-separated tokens - numbers,
//! the binary operators `+ - * /`, parentheses, and unary `+`/`-` signs -
//! and reduces them to a double-precision result.
//!
//! Evaluation is a strict two-phase pipeline: a sequencer reorders the infix
//! token stream into postfix (reverse Polish) order with a shunting-yard
//! operator stack, and an evaluator then reduces the postfix sequence over a
//! value stack. Each call is a pure function of its input; there is no
//! shared state between invocations.

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
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{evaluator::reduce, lexer::Token, sequencer::sequence},
};

/// Provides unified error types for sequencing and evaluation.
///
/// This module defines all errors that can be raised while classifying
/// tokens, reordering them into postfix, or reducing the postfix sequence.
/// Every failure is terminal and propagates to the caller as a typed value;
/// nothing is retried and no partial result is ever returned.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, sequencer, evaluator).
/// - Attaches the offending token text and position where applicable.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together token classification, infix-to-postfix
/// sequencing, and postfix reduction. Data flows strictly
/// lexer -> sequencer -> evaluator; there is no feedback between phases.
///
/// # Responsibilities
/// - Coordinates the three core components: lexer, sequencer, and evaluator.
/// - Keeps each phase free of knowledge about the others' internals.
pub mod interpreter;
/// Defines the structure of sequenced expressions.
///
/// This module declares the operator enums and the `Postfix` item type that
/// represent an expression in evaluation order. The postfix sequence is
/// produced once by the sequencer and consumed once by the evaluator.
///
/// # Responsibilities
/// - Defines binary and unary operator types with their display symbols.
/// - Defines the postfix sequence item consumed by the evaluator.
pub mod rpn;

pub use crate::error::Error;

/// Evaluates a whitespace-tokenized arithmetic expression.
///
/// The expression is a string of tokens separated by one or more whitespace
/// characters; leading, trailing, and repeated whitespace is tolerated.
/// Recognized tokens are floating-point numbers, the operators `+ - * /`,
/// and parentheses. A `+` or `-` that starts the expression or follows
/// another operator or an opening parenthesis is treated as a unary sign.
///
/// All arithmetic is IEEE-754 double precision. Division by zero does not
/// fail: it yields a signed infinity, or NaN for `0 / 0`.
///
/// # Errors
/// Returns an [`Error`] if the expression is empty, contains a token that is
/// neither a number nor an operator, has unbalanced parentheses, or does not
/// reduce to exactly one value.
///
/// # Examples
/// ```
/// let result = shunter::evaluate("2 + 3 * 4").unwrap();
/// assert_eq!(result, 14.0);
///
/// // Parentheses override precedence.
/// let result = shunter::evaluate("( 2 + 3 ) * 4").unwrap();
/// assert_eq!(result, 20.0);
///
/// // Consecutive unary minuses compose by sign.
/// let result = shunter::evaluate("1 - - - - 5").unwrap();
/// assert_eq!(result, 6.0);
/// ```
pub fn evaluate(expression: &str) -> Result<f64, Error> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(expression);

    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::Unknown(text)) => {
                return Err(ParseError::InvalidToken { token:    text,
                                                      position: tokens.len(), }.into());
            },
            Ok(token) => tokens.push(token),
            Err(()) => {
                return Err(ParseError::InvalidToken { token:    lexer.slice().to_string(),
                                                      position: tokens.len(), }.into());
            },
        }
    }

    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression.into());
    }

    let postfix = sequence(&tokens)?;
    let result = reduce(&postfix)?;

    Ok(result)
}
