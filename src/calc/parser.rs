//! Recursive-descent evaluator for the calculator grammar.
//!
//! Grammar, lowest to tightest binding:
//!
//! ```text
//! Expression = Term {('+' | '-') Term}
//! Term       = Factor {('*' | '/') Factor}
//! Factor     = '(' Expression ')' | Number | ('+' | '-') Factor
//! ```
//!
//! Each production evaluates while it parses; no syntax tree is built.
//! Operators are left-associative and division truncates toward zero. All
//! arithmetic is checked: division by zero and any `i64` wraparound come
//! back as [`ArithmeticError`]s instead of panicking.

use crate::calc::error::{ArithmeticError, CalcError, SyntaxError};
use crate::calc::lexer::{Lexer, Token};

/// Evaluates a stream of `;`-terminated statements.
pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        Parser {
            lexer: Lexer::new(input),
        }
    }

    /// Evaluate the next statement, or `None` once the input is exhausted.
    ///
    /// Statements stream continuously: `"1+1; 2*2;"` yields `2` and then `4`
    /// from the same parser. An error abandons the current statement and
    /// leaves the read position unspecified, so callers should stop pulling
    /// statements once one fails.
    pub fn next_statement(&mut self) -> Option<Result<i64, CalcError>> {
        if let Err(e) = self.lexer.advance_token() {
            return Some(Err(e));
        }
        if self.lexer.token() == Token::Eof {
            return None;
        }
        Some(self.statement())
    }

    /// One expression followed by its `;` terminator.
    fn statement(&mut self) -> Result<i64, CalcError> {
        let value = self.expression()?;
        if self.lexer.token() != Token::Semic {
            return Err(SyntaxError::InvalidToken.into());
        }
        Ok(value)
    }

    fn expression(&mut self) -> Result<i64, CalcError> {
        let mut value = self.term()?;
        loop {
            match self.lexer.token() {
                Token::Add => {
                    self.lexer.advance_token()?;
                    let rhs = self.term()?;
                    value = value.checked_add(rhs).ok_or(ArithmeticError::Overflow)?;
                }
                Token::Sub => {
                    self.lexer.advance_token()?;
                    let rhs = self.term()?;
                    value = value.checked_sub(rhs).ok_or(ArithmeticError::Overflow)?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<i64, CalcError> {
        let mut value = self.factor()?;
        loop {
            match self.lexer.token() {
                Token::Mul => {
                    self.lexer.advance_token()?;
                    let rhs = self.factor()?;
                    value = value.checked_mul(rhs).ok_or(ArithmeticError::Overflow)?;
                }
                Token::Div => {
                    self.lexer.advance_token()?;
                    let rhs = self.factor()?;
                    // checked_div fails for both `/ 0` and `i64::MIN / -1`.
                    value = value.checked_div(rhs).ok_or(if rhs == 0 {
                        ArithmeticError::DivisionByZero
                    } else {
                        ArithmeticError::Overflow
                    })?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn factor(&mut self) -> Result<i64, CalcError> {
        match self.lexer.token() {
            Token::Lpar => {
                self.lexer.advance_token()?;
                let value = self.expression()?;
                if self.lexer.token() != Token::Rpar {
                    return Err(SyntaxError::ExpectedRparen.into());
                }
                self.lexer.advance_token()?;
                Ok(value)
            }
            Token::Number(value) => {
                self.lexer.advance_token()?;
                Ok(value)
            }
            Token::Add => {
                self.lexer.advance_token()?;
                self.factor()
            }
            Token::Sub => {
                self.lexer.advance_token()?;
                let value = self.factor()?;
                Ok(value.checked_neg().ok_or(ArithmeticError::Overflow)?)
            }
            _ => Err(SyntaxError::UnexpectedToken.into()),
        }
    }
}
