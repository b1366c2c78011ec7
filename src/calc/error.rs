//! Error taxonomy for the calculator grammar.

use thiserror::Error;

/// The reason a statement failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A factor position held nothing a factor can start with.
    #[error("unexpected token")]
    UnexpectedToken,
    /// A parenthesized expression was never closed.
    #[error("')' expected")]
    ExpectedRparen,
    /// A statement did not end in `;`.
    #[error("invalid token")]
    InvalidToken,
}

/// The reason an evaluation step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    /// A literal or an intermediate result left the `i64` range.
    #[error("integer overflow")]
    Overflow,
}

/// Any failure while scanning or evaluating a statement.
///
/// Raised at the point of detection and handed back unmodified through every
/// recursive production; the session loop is the only recovery point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The scanner hit a character that starts no token.
    #[error("invalid character '{0}'")]
    Lexical(char),
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(CalcError::Lexical('#').to_string(), "invalid character '#'");
        assert_eq!(
            CalcError::from(SyntaxError::ExpectedRparen).to_string(),
            "syntax error: ')' expected"
        );
        assert_eq!(
            CalcError::from(ArithmeticError::DivisionByZero).to_string(),
            "arithmetic error: division by zero"
        );
    }
}
