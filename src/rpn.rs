/// A binary arithmetic operator applied to two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Subtract => write!(f, "-"),
            Self::Multiply => write!(f, "*"),
            Self::Divide => write!(f, "/"),
        }
    }
}

/// A unary sign applied to a single operand.
///
/// Unary operators are disambiguated from binary use by the sequencer based
/// on the token that precedes them. A unary plus is a no-op; a unary minus
/// negates its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+` in prefix position.
    Plus,
    /// `-` in prefix position.
    Minus,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}

/// One item of a postfix (reverse Polish) sequence.
///
/// A postfix sequence is the sequencer's output: operands and operators in
/// evaluation order, with all parentheses resolved away. Each unary sign is
/// its own item, which is what makes consecutive signs compose correctly
/// during reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Postfix {
    /// A numeric operand.
    Operand(f64),
    /// A binary operator applied to the two most recent values.
    Binary(BinaryOperator),
    /// A unary sign applied to the most recent value.
    Unary(UnaryOperator),
}
