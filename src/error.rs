/// Sequencing errors.
///
/// Defines all error types that can occur while classifying tokens and
/// reordering them into postfix. Parse errors include empty input,
/// unclassifiable tokens, and unbalanced parentheses - everything detected
/// before a single value is computed.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing a postfix
/// sequence over the value stack, such as an operator with too few operands
/// or an expression that leaves more than one value behind.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, PartialEq, Eq)]
/// The unified failure type returned by [`evaluate`](crate::evaluate).
///
/// Every error is terminal: the evaluator never retries, degrades, or
/// returns a partial result.
pub enum Error {
    /// The expression could not be sequenced into postfix order.
    Parse(ParseError),
    /// The postfix sequence could not be reduced to a single value.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
