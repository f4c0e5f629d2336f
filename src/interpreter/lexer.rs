use logos::Logos;

/// Represents one whitespace-delimited token of an expression.
///
/// The grammar is whitespace-separated by contract, and the `Unknown`
/// catch-all relies on logos' longest-match rule to enforce it: any maximal
/// run of non-whitespace characters that is not, in its entirety, a number
/// or a single operator lexes as one `Unknown` token. `10,5` and `1+2` are
/// therefore single invalid tokens rather than a number followed by junk.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`.
    ///
    /// Signs are never part of a number; a leading `+` or `-` is a separate
    /// token resolved by the sequencer.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number, priority = 3)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number, priority = 3)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A whitespace-delimited run that is not a valid token.
    #[regex(r"[^ \t\r\n\f]+", |lex| lex.slice().to_string(), priority = 0)]
    Unknown(String),
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Result<Token, ()>> {
        Token::lexer(input).collect()
    }

    #[test]
    fn classifies_numbers_and_operators() {
        let tokens = lex("2 + 3.5 * ( .5 ) / 0003");
        assert_eq!(tokens,
                   vec![Ok(Token::Number(2.0)),
                        Ok(Token::Plus),
                        Ok(Token::Number(3.5)),
                        Ok(Token::Star),
                        Ok(Token::LParen),
                        Ok(Token::Number(0.5)),
                        Ok(Token::RParen),
                        Ok(Token::Slash),
                        Ok(Token::Number(3.0))]);
    }

    #[test]
    fn glued_runs_are_single_unknown_tokens() {
        assert_eq!(lex("10,5"), vec![Ok(Token::Unknown("10,5".to_string()))]);
        assert_eq!(lex("1+2"), vec![Ok(Token::Unknown("1+2".to_string()))]);
        assert_eq!(lex("10.5."), vec![Ok(Token::Unknown("10.5.".to_string()))]);
        assert_eq!(lex("-5"), vec![Ok(Token::Unknown("-5".to_string()))]);
        assert_eq!(lex("foo"), vec![Ok(Token::Unknown("foo".to_string()))]);
    }

    #[test]
    fn whitespace_is_collapsed() {
        let tokens = lex("  15 \t 12\n");
        assert_eq!(tokens, vec![Ok(Token::Number(15.0)), Ok(Token::Number(12.0))]);
        assert!(lex("   ").is_empty());
    }

    #[test]
    fn exponents_lex_as_numbers() {
        assert_eq!(lex("2.1e-10"), vec![Ok(Token::Number(2.1e-10))]);
        assert_eq!(lex("1E3"), vec![Ok(Token::Number(1000.0))]);
    }
}
