//! Token scanner for the calculator grammar.

use crate::calc::error::{ArithmeticError, CalcError};
use crate::cursor::Cursor;

/// One calculator token. Number literals carry their decoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// End of the input stream.
    Eof,
    Number(i64),
    Add,
    Sub,
    Mul,
    Div,
    Lpar,
    Rpar,
    Semic,
}

/// A scanner owning its input position and the most recently read token.
///
/// Exactly one token is current at any time; [`advance_token`] replaces it.
/// One lexer serves every statement in its input, so tokens stream
/// continuously across `;` boundaries.
///
/// [`advance_token`]: Self::advance_token
#[derive(Debug)]
pub struct Lexer {
    cursor: Cursor,
    token: Token,
}

impl Lexer {
    /// Start scanning `input`. No token has been read yet; call
    /// [`advance_token`](Self::advance_token) to load the first one.
    pub fn new(input: &str) -> Self {
        Lexer {
            cursor: Cursor::new(input),
            token: Token::Eof,
        }
    }

    /// The most recently scanned token.
    pub fn token(&self) -> Token {
        self.token
    }

    /// Scan the next token, replacing the current one.
    ///
    /// Whitespace between tokens (space, tab, newline) is insignificant. A
    /// run of digits becomes a single [`Token::Number`]; a run that does not
    /// fit an `i64` reports [`ArithmeticError::Overflow`]. A character that
    /// starts no token reports [`CalcError::Lexical`] with that character.
    pub fn advance_token(&mut self) -> Result<(), CalcError> {
        // The cursor reports a newline at end of input, so the end check has
        // to come first or this loop would never leave the whitespace skip.
        while !self.cursor.at_end() && self.cursor.current().is_whitespace() {
            self.cursor.advance();
        }

        if self.cursor.at_end() {
            self.token = Token::Eof;
            return Ok(());
        }

        let ch = self.cursor.current();
        if ch.is_ascii_digit() {
            self.token = Token::Number(self.scan_integer()?);
            return Ok(());
        }

        self.token = match ch {
            '+' => Token::Add,
            '-' => Token::Sub,
            '*' => Token::Mul,
            '/' => Token::Div,
            '(' => Token::Lpar,
            ')' => Token::Rpar,
            ';' => Token::Semic,
            other => return Err(CalcError::Lexical(other)),
        };
        self.cursor.advance();
        Ok(())
    }

    /// Consume a run of digits and decode it as a checked `i64`.
    fn scan_integer(&mut self) -> Result<i64, CalcError> {
        let mut value: i64 = 0;
        while let Some(digit) = self.cursor.current().to_digit(10) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i64::from(digit)))
                .ok_or(ArithmeticError::Overflow)?;
            self.cursor.advance();
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tokens(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        loop {
            lexer.advance_token().unwrap();
            tokens.push(lexer.token());
            if lexer.token() == Token::Eof {
                return tokens;
            }
        }
    }

    #[test]
    fn scans_numbers_and_operators() {
        assert_eq!(
            all_tokens(" 12 +(34)*5/6-7 ;"),
            vec![
                Token::Number(12),
                Token::Add,
                Token::Lpar,
                Token::Number(34),
                Token::Rpar,
                Token::Mul,
                Token::Number(5),
                Token::Div,
                Token::Number(6),
                Token::Sub,
                Token::Number(7),
                Token::Semic,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn skips_every_whitespace_kind() {
        assert_eq!(all_tokens(" \t\n 42"), vec![Token::Number(42), Token::Eof]);
    }

    #[test]
    fn empty_input_is_eof() {
        assert_eq!(all_tokens(""), vec![Token::Eof]);

        // Eof is sticky.
        let mut lexer = Lexer::new("");
        lexer.advance_token().unwrap();
        lexer.advance_token().unwrap();
        assert_eq!(lexer.token(), Token::Eof);
    }

    #[test]
    fn reports_unknown_character() {
        let mut lexer = Lexer::new("2#3");
        lexer.advance_token().unwrap();
        assert_eq!(lexer.token(), Token::Number(2));
        assert_eq!(lexer.advance_token(), Err(CalcError::Lexical('#')));
    }

    #[test]
    fn largest_literal_fits() {
        assert_eq!(
            all_tokens("9223372036854775807"),
            vec![Token::Number(i64::MAX), Token::Eof]
        );
    }

    #[test]
    fn oversized_literal_reports_overflow() {
        let mut lexer = Lexer::new("9223372036854775808");
        assert_eq!(
            lexer.advance_token(),
            Err(CalcError::Arithmetic(ArithmeticError::Overflow))
        );
    }
}
