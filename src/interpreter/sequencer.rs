use crate::{
    error::ParseError,
    interpreter::lexer::Token,
    rpn::{BinaryOperator, Postfix, UnaryOperator},
};

/// An operator buffered on the sequencer's stack while its priority
/// relationship to later operators is still unresolved.
#[derive(Debug)]
enum StackEntry {
    Binary(BinaryOperator),
    Unary(UnaryOperator),
    OpenParen,
}

impl StackEntry {
    /// Returns the operator's priority rank. Higher ranks bind tighter.
    ///
    /// The opening parenthesis carries the lowest rank so that it never
    /// outranks an incoming operator and acts as a barrier on the stack.
    const fn priority(&self) -> i32 {
        match self {
            Self::Unary(_) => 4,
            Self::Binary(BinaryOperator::Multiply | BinaryOperator::Divide) => 3,
            Self::Binary(_) => 2,
            Self::OpenParen => 1,
        }
    }

    /// Unary signs are right-associative: a waiting sign of equal priority
    /// must not be popped, so consecutive signs stack and later apply
    /// right-to-left.
    const fn is_right_associative(&self) -> bool {
        matches!(self, Self::Unary(_))
    }

    /// Converts the entry into its postfix item. `None` for a parenthesis,
    /// which is never emitted.
    fn into_postfix(self) -> Option<Postfix> {
        match self {
            Self::Binary(operator) => Some(Postfix::Binary(operator)),
            Self::Unary(operator) => Some(Postfix::Unary(operator)),
            Self::OpenParen => None,
        }
    }
}

/// Reorders a classified token stream into postfix (reverse Polish) order.
///
/// This is a shunting-yard pass: numbers go straight to the output while
/// operators wait on a stack until an operator of lower priority (or the
/// end of the expression) flushes them. `+` and `-` are resolved to unary
/// or binary form here, based on the token immediately before them: at the
/// start of the expression, after another operator, or after `(` they are
/// unary signs, otherwise binary.
///
/// # Parameters
/// - `tokens`: The classified tokens in source order.
///
/// # Returns
/// The postfix sequence, with every parenthesis resolved away and each
/// unary sign as its own item.
///
/// # Errors
/// Returns a `ParseError` if:
/// - a `)` has no matching `(`,
/// - a `(` is never closed,
/// - an `Unknown` token is encountered.
pub fn sequence(tokens: &[Token]) -> Result<Vec<Postfix>, ParseError> {
    let mut operators: Vec<StackEntry> = Vec::new();
    let mut output = Vec::with_capacity(tokens.len());
    let mut previous: Option<&Token> = None;

    for (position, token) in tokens.iter().enumerate() {
        match token {
            Token::Number(value) => output.push(Postfix::Operand(*value)),
            Token::LParen => operators.push(StackEntry::OpenParen),
            Token::RParen => pop_until_paren(&mut operators, &mut output)?,
            Token::Plus | Token::Minus => {
                let is_plus = matches!(token, Token::Plus);
                let entry = if is_unary_position(previous) {
                    StackEntry::Unary(if is_plus {
                                          UnaryOperator::Plus
                                      } else {
                                          UnaryOperator::Minus
                                      })
                } else {
                    StackEntry::Binary(if is_plus {
                                           BinaryOperator::Add
                                       } else {
                                           BinaryOperator::Subtract
                                       })
                };
                pop_while_priority(&mut operators, &mut output, entry.priority());
                operators.push(entry);
            },
            Token::Star | Token::Slash => {
                let entry = StackEntry::Binary(if matches!(token, Token::Star) {
                                                   BinaryOperator::Multiply
                                               } else {
                                                   BinaryOperator::Divide
                                               });
                pop_while_priority(&mut operators, &mut output, entry.priority());
                operators.push(entry);
            },
            Token::Unknown(text) => {
                return Err(ParseError::InvalidToken { token: text.clone(),
                                                      position, });
            },
        }
        previous = Some(token);
    }

    while let Some(entry) = operators.pop() {
        match entry.into_postfix() {
            Some(item) => output.push(item),
            // A parenthesis left on the stack was never closed.
            None => return Err(ParseError::UnmatchedParen),
        }
    }

    Ok(output)
}

/// Decides whether a `+`/`-` at the current position is a unary sign.
///
/// It is unary when there is no previous token, or the previous raw token
/// is itself an operator or an opening parenthesis.
const fn is_unary_position(previous: Option<&Token>) -> bool {
    matches!(previous,
             None | Some(Token::Plus
                         | Token::Minus
                         | Token::Star
                         | Token::Slash
                         | Token::LParen))
}

/// Moves operators from the stack to the output while the stack's top
/// outranks the incoming priority.
///
/// An entry outranks when its priority is strictly greater, or equal and
/// left-associative. Equal-priority right-associative entries (unary signs)
/// stay put, so consecutive signs stack instead of flushing each other.
/// An opening parenthesis never outranks anything and stops the loop.
fn pop_while_priority(operators: &mut Vec<StackEntry>, output: &mut Vec<Postfix>, priority: i32) {
    while let Some(entry) = operators.pop() {
        let outranks = entry.priority() > priority
                       || (entry.priority() == priority && !entry.is_right_associative());
        if !outranks {
            operators.push(entry);
            return;
        }
        if let Some(item) = entry.into_postfix() {
            output.push(item);
        }
    }
}

/// Moves operators from the stack to the output until an opening
/// parenthesis is popped. The parenthesis itself is discarded.
///
/// # Errors
/// Returns `ParseError::UnmatchedParen` if the stack empties before an
/// opening parenthesis is found.
fn pop_until_paren(operators: &mut Vec<StackEntry>, output: &mut Vec<Postfix>) -> Result<(), ParseError> {
    while let Some(entry) = operators.pop() {
        match entry.into_postfix() {
            Some(item) => output.push(item),
            None => return Ok(()),
        }
    }
    Err(ParseError::UnmatchedParen)
}
