//! The calculator grammar: scan and evaluate integer expression statements.

mod error;
mod lexer;
mod parser;

pub use error::{ArithmeticError, CalcError, SyntaxError};
pub use lexer::{Lexer, Token};
pub use parser::Parser;
