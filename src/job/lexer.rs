//! Token classification for the job grammar.

use crate::cursor::TERMINATOR;

/// Classification of a single input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// The pipe operator, `|`.
    Pipe,
    /// Output redirection, `>`.
    Redirect,
    /// A word separator (space).
    Separator,
    /// End of the line.
    Terminator,
    /// Any character that can appear inside a word.
    StringChar,
}

/// Classify one character.
///
/// Pure and stateless; the job grammar recomputes the classification from the
/// cursor's current character whenever it needs it.
pub fn classify(ch: char) -> Token {
    match ch {
        '|' => Token::Pipe,
        '>' => Token::Redirect,
        ' ' => Token::Separator,
        TERMINATOR => Token::Terminator,
        _ => Token::StringChar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_every_kind() {
        assert_eq!(classify('|'), Token::Pipe);
        assert_eq!(classify('>'), Token::Redirect);
        assert_eq!(classify(' '), Token::Separator);
        assert_eq!(classify('\n'), Token::Terminator);
        assert_eq!(classify('a'), Token::StringChar);
        assert_eq!(classify('0'), Token::StringChar);
        assert_eq!(classify('.'), Token::StringChar);
    }
}
