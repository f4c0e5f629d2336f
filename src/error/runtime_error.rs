#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while reducing a postfix sequence.
pub enum RuntimeError {
    /// An operator was encountered with too few values on the stack.
    InsufficientOperands {
        /// The symbol of the operator that could not be applied.
        operator: String,
    },
    /// Reduction finished with a value-stack size other than one.
    MalformedExpression {
        /// How many values were left on the stack.
        values: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientOperands { operator } => {
                write!(f, "Error: Operator '{operator}' has too few operands.")
            },

            Self::MalformedExpression { values } => {
                write!(f, "Error: Expression reduced to {values} values instead of one.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
