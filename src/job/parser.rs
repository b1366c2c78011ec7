//! Recursive-descent parser for the job grammar.
//!
//! Grammar: `Job = Command {'|' Command} ['>' Word]` and
//! `Command = Word {' ' Word}`, where a `Word` is a maximal run of characters
//! that are not a space, a pipe, a redirect, or the line terminator.
//!
//! The grammar is total. Any input line parses to some [`Job`] in a single
//! left-to-right pass with no backtracking; malformed pieces (doubled pipes,
//! a dangling redirect) degrade to dropped commands or an empty redirect
//! target instead of errors.

use std::fmt;

use crate::cursor::Cursor;
use crate::job::lexer::{Token, classify};

/// One command of a pipeline: its argument words in input order.
///
/// Commands reaching a finished [`Job`] always hold at least one argument;
/// the parser drops empty ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Command {
    pub args: Vec<String>,
}

/// One parsed line: the pipeline commands plus an optional redirect target.
///
/// `redirect` is `Some` exactly when a `>` appeared in the input; a `>` with
/// nothing after it yields `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Job {
    pub commands: Vec<Command>,
    pub redirect: Option<String>,
}

struct JobParser {
    cursor: Cursor,
}

impl JobParser {
    fn new(line: &str) -> Self {
        JobParser {
            cursor: Cursor::new(line),
        }
    }

    /// Classification of the character currently under the cursor.
    fn token(&self) -> Token {
        classify(self.cursor.current())
    }

    fn skip_separators(&mut self) {
        while self.token() == Token::Separator {
            self.cursor.advance();
        }
    }

    /// Greedily consume one word, stopping before the first character that
    /// cannot be part of one. Empty if the cursor is not on a word character.
    fn parse_word(&mut self) -> String {
        let mut word = String::new();
        while self.token() == Token::StringChar {
            word.push(self.cursor.current());
            self.cursor.advance();
        }
        word
    }

    /// Parse words into a command while separators keep following them.
    ///
    /// Runs of separators collapse to a single word boundary. The returned
    /// command may have zero arguments; the caller decides whether to keep it.
    fn parse_command(&mut self) -> Command {
        let mut command = Command::default();
        loop {
            self.skip_separators();
            let word = self.parse_word();
            if !word.is_empty() {
                command.args.push(word);
            }
            if self.token() != Token::Separator {
                break;
            }
        }
        command
    }

    /// Parse the whole line: pipe-joined commands, then an optional redirect.
    fn parse_job(&mut self) -> Job {
        let mut job = Job::default();
        loop {
            let command = self.parse_command();
            if !command.args.is_empty() {
                job.commands.push(command);
            }
            if self.token() != Token::Pipe {
                break;
            }
            self.cursor.advance();
        }

        if self.token() == Token::Redirect {
            self.cursor.advance();
            self.skip_separators();
            job.redirect = Some(self.parse_word());
        }

        job
    }
}

/// Parse one line into a [`Job`].
///
/// Never fails: every input, including an empty or all-separator line, maps
/// to some job (possibly one with no commands and no redirect).
pub fn parse_job(line: &str) -> Job {
    JobParser::new(line).parse_job()
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args.join(" "))
    }
}

impl fmt::Display for Job {
    /// Serialize back to the line syntax: commands joined by `|`, the
    /// redirect appended after `>`. Parsing the result yields an equal job.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pipeline: Vec<String> = self.commands.iter().map(Command::to_string).collect();
        write!(f, "{}", pipeline.join(" | "))?;
        if let Some(target) = &self.redirect {
            write!(f, " > {}", target)?;
        }
        Ok(())
    }
}
