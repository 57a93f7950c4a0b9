use thiserror::Error;

use crate::ast::{Term, TermRef};
use crate::lexer::{Lexer, LexerError, Loc, Token};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unexpected end of input while a term was expected")]
    UnexpectedEof,
    #[error("Invalid input at line {0}, column {1}: {2:?}")]
    Lexical(u32, u32, LexerError),
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// Parses the first complete term of `source`; trailing input is ignored.
pub fn parse(source: &str) -> Result<TermRef> {
    term(&mut Lexer::new(source))
}

// The prefix notation needs no lookahead: every token determines its
// production, so the parser is a plain recursive descent over the token
// stream. Taking any token iterator keeps real I/O out of the tests.
fn term<I>(tokens: &mut I) -> Result<TermRef>
where
    I: Iterator<Item = std::result::Result<(Loc, Token, Loc), LexerError>>,
{
    match tokens.next().ok_or(ParseError::UnexpectedEof)? {
        Err(e) => Err(ParseError::Lexical(e.location.line, e.location.col, e)),
        Ok((_, Token::Backtick, _)) => {
            let function = term(tokens)?;
            let argument = term(tokens)?;
            Ok(Term::apply(function, argument))
        }
        Ok((_, Token::Lambda, _)) => Ok(Term::lambda(term(tokens)?)),
        Ok((_, Token::Reference(depth), _)) => Ok(Term::reference(depth)),
        Ok((_, Token::Symbol(name), _)) => Ok(Term::symbol(name)),
    }
}
