//! The character cursor both grammars read their input through.

/// The character reported once the cursor has run off the end of its text.
///
/// Both grammars treat it as their end-of-line marker, so every scanning loop
/// halts on it naturally instead of checking for end of input at each step.
pub const TERMINATOR: char = '\n';

/// A read position over an immutable piece of source text.
///
/// The text is fixed at construction; only the position moves, one character
/// at a time and never backwards.
#[derive(Debug)]
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    pub fn new(text: &str) -> Self {
        Cursor {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    /// The character under the cursor, or [`TERMINATOR`] at or past the end
    /// of the text (an empty text starts out at the end).
    pub fn current(&self) -> char {
        self.chars.get(self.pos).copied().unwrap_or(TERMINATOR)
    }

    /// Step forward one character and return the new current character.
    ///
    /// Advancing at the end is a no-op that keeps returning [`TERMINATOR`].
    pub fn advance(&mut self) -> char {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
        self.current()
    }

    /// True once the whole text has been consumed.
    ///
    /// The calculator needs this to tell real end of input apart from a
    /// literal newline, which it treats as plain whitespace.
    pub fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_immediately_terminated() {
        let mut cursor = Cursor::new("");
        assert!(cursor.at_end());
        assert_eq!(cursor.current(), TERMINATOR);
        assert_eq!(cursor.advance(), TERMINATOR);
    }

    #[test]
    fn walks_text_then_sticks_at_terminator() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.current(), 'a');
        assert!(!cursor.at_end());
        assert_eq!(cursor.advance(), 'b');
        assert_eq!(cursor.advance(), TERMINATOR);
        assert!(cursor.at_end());

        // Advancing past the end changes nothing.
        assert_eq!(cursor.advance(), TERMINATOR);
        assert_eq!(cursor.current(), TERMINATOR);
    }

    #[test]
    fn current_does_not_move_the_position() {
        let cursor = Cursor::new("x");
        assert_eq!(cursor.current(), 'x');
        assert_eq!(cursor.current(), 'x');
    }
}
