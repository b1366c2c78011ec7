//! The job grammar: a permissive splitter for shell-like pipeline lines.

mod lexer;
mod parser;

pub use lexer::{Token, classify};
pub use parser::{Command, Job, parse_job};
