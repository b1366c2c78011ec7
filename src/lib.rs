//! Two hand-written recursive-descent parsers over single lines of input.
//!
//! The [`job`] module splits a shell-like line into a pipeline of commands
//! with an optional output redirection. It is deliberately permissive: every
//! input line, however malformed, parses to some [`job::Job`].
//!
//! The [`calc`] module scans and evaluates `;`-terminated integer expressions
//! with the usual precedence rules, reporting lexical, syntax, and arithmetic
//! failures as error values rather than panicking.
//!
//! Both grammars read their input through the shared [`cursor::Cursor`]. The
//! `jobparse` and `calc` binaries are thin adapters over this library: a
//! one-shot command-line front end for the job grammar and an interactive
//! read-evaluate-print loop for the calculator.

pub mod calc;
pub mod cursor;
pub mod job;

pub use job::{Command, Job, parse_job};
