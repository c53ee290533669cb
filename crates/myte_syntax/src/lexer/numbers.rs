//! Number scanning for the Myte lexer
//!
//! Handles integer and floating-point literals. A literal is a maximal run of digits with at most one `.`;
//! a second `.` ends it. Text stays exactly as written, conversion happens in the parser.

use super::Lexer;
use super::tokens::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Scan a numeric literal starting at the cursor (a digit, or a `.` followed by a digit).
    ///
    /// Leaves the cursor on the first character after the literal.
    pub(super) fn read_number(&mut self) -> Token {
        let (start, line, column) = (self.position, self.line, self.column);
        let mut seen_dot = false;

        while let Some(c) = self.ch {
            match c {
                '0'..='9' => {}
                '.' if !seen_dot => seen_dot = true,
                _ => break,
            }
            self.read_char();
        }

        let kind = if seen_dot { TokenKind::Float } else { TokenKind::Int };
        Token::new(kind, self.text_until_current(start), line, column, start)
    }
}
