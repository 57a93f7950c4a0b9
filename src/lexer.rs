use lexgen::lexer;
use thiserror::Error;

pub type Loc = lexgen_util::Loc;
pub type LexerError = lexgen_util::LexerError<LexicalError>;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token {
    /// `` ` `` — introduces an application of the next two terms.
    Backtick,
    /// `\` — introduces an abstraction over the next term.
    Lambda,
    /// A run of decimal digits: a De Bruijn index.
    Reference(usize),
    /// Any other run of atom characters: an opaque constant.
    Symbol(String),
}

#[derive(Debug, Error)]
pub enum LexicalError {
    #[error("Reference index out of range: `{0}`")]
    IndexOutOfRange(String),
}

// Backtick and backslash are single-character tokens even with no whitespace
// after them, so an atom is any maximal run of the remaining non-whitespace
// characters.
lexer! {
    pub Lexer -> Token;
    type Error = LexicalError;
    let ws = [' ' '\t' '\n'] | "\r\n";
    let atom = _ # [' ' '\t' '\n' '\r' '`' '\\'];

    $ws,
    "`" = Token::Backtick,
    "\\" = Token::Lambda,
    $atom+ =? |lexer| {
        let text = lexer.match_();
        let token = if text.bytes().all(|b| b.is_ascii_digit()) {
            text.parse()
                .map_err(|_| LexicalError::IndexOutOfRange(text.to_string()))
                .map(Token::Reference)
        } else {
            Ok(Token::Symbol(text.to_string()))
        };
        lexer.return_(token)
    },
}

#[cfg(test)]
mod test {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        Lexer::new(input)
            .map(|t| t.map(|(_, token, _)| token))
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn atoms_split_on_operators_without_whitespace() {
        use Token::*;
        assert_eq!(
            tokens("`\\0 y"),
            vec![Backtick, Lambda, Reference(0), Symbol("y".to_string())]
        );
    }

    #[test]
    fn digit_runs_are_references_and_anything_else_is_a_symbol() {
        use Token::*;
        assert_eq!(
            tokens("42 x1 4a2"),
            vec![
                Reference(42),
                Symbol("x1".to_string()),
                Symbol("4a2".to_string())
            ]
        );
    }

    #[test]
    fn whitespace_only_input_has_no_tokens() {
        assert_eq!(tokens(" \t\r\n "), vec![]);
    }
}
