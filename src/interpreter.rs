/// Reduces a postfix sequence to a single value.
///
/// The evaluator walks the sequencer's output left to right, pushing
/// operands onto a value stack and applying operators to the values below
/// them. Arithmetic follows IEEE-754 double semantics throughout; division
/// by zero yields an infinity or NaN rather than an error.
///
/// # Responsibilities
/// - Applies binary operators to the two most recent values in source order.
/// - Applies unary signs to the most recent value.
/// - Rejects sequences that do not reduce to exactly one value.
pub mod evaluator;
/// Classifies whitespace-delimited tokens.
///
/// The lexer turns the raw expression string into a stream of classified
/// tokens. Classification is purely lexical: a `+` or `-` is emitted as an
/// operator token and only later resolved to unary or binary by the
/// sequencer.
///
/// # Responsibilities
/// - Recognizes numbers, the four operators, and parentheses.
/// - Collapses any amount of surrounding whitespace.
/// - Captures unclassifiable runs of text for error reporting.
pub mod lexer;
/// Reorders infix tokens into postfix order.
///
/// The sequencer implements a shunting-yard pass over the classified token
/// stream: operators wait on a priority-ordered stack until their
/// relationship to newly seen operators is resolved, and parentheses act as
/// barriers. No evaluation happens here.
///
/// # Responsibilities
/// - Resolves `+`/`-` as unary or binary from the previous raw token.
/// - Orders operators by priority and associativity.
/// - Detects unmatched parentheses on both sides.
pub mod sequencer;
