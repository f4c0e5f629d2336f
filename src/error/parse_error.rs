#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur before evaluation begins.
pub enum ParseError {
    /// The input contained no tokens after whitespace splitting.
    EmptyExpression,
    /// Found a token that is neither a recognized operator, a parenthesis,
    /// nor a valid number.
    InvalidToken {
        /// The offending token text.
        token:    String,
        /// The 0-based position of the token in the expression.
        position: usize,
    },
    /// A closing parenthesis has no matching opening one, or an opening
    /// parenthesis is never closed.
    UnmatchedParen,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => {
                write!(f, "Error: The expression contains no tokens.")
            },

            Self::InvalidToken { token, position } => {
                write!(f, "Error at token {position}: '{token}' is neither a number nor an operator.")
            },

            Self::UnmatchedParen => {
                write!(f, "Error: The expression contains an unmatched parenthesis.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
