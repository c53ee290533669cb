//! Lexer for the Myte scripting language
//!
//! Turns source text into a lazy stream of [`Token`]s, one call to [`Lexer::next_token`] at a time. The stream
//! ends with an `Eof` token that is returned again on every later call.
//!
//! Handles tokenization including:
//! - Keywords (`fn`, `var`, `const`, `if`, ...) resolved from identifier text
//! - Identifiers and literals (int, float, single- or double-quoted string)
//! - `#` line comments, kept as tokens
//! - Single and two-character operators (`==`, `+=`, `++`, `**`, `//`, ...)
//!
//! ## Positions
//!
//! `line` counts newlines consumed so far, so the first line of input is line 0. `column` is 1-based: a newline
//! resets it to 0, a tab advances it by [`TAB_WIDTH`], anything else by 1. Two-character operators report the
//! position of their first character.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String literal and comment scanning
//! - `numbers` - Numeric literal scanning

mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id, lookup_ident};

use crate::diagnostics::Diagnostic;
use myte_core::lang::operators::OperatorId;
use myte_core::lang::punctuation::PunctuationId;

/// Number of columns a tab advances.
pub const TAB_WIDTH: usize = 4;

/// Lexer for Myte source code.
///
/// All state is advanced only by the lexer itself; the parser pulls tokens on demand.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    /// Byte offset of `ch` (`source.len()` once exhausted).
    position: usize,
    /// Character under the cursor; `None` past the end of input.
    ch: Option<char>,
    line: usize,
    column: usize,
    at_end: bool,
    emitted_eof: bool,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Self {
            source,
            chars: source.char_indices().peekable(),
            position: 0,
            ch: None,
            line: 0,
            column: 0,
            at_end: false,
            emitted_eof: false,
            diagnostics: Vec::new(),
        };
        lexer.read_char();
        lexer
    }

    /// Produce the next token.
    ///
    /// Once the input is exhausted this returns an `Eof` token, and keeps returning the same `Eof` token on
    /// every subsequent call.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(c) = self.ch else {
            return Token::new(TokenKind::Eof, "", self.line, self.column, self.position);
        };

        let token = match c {
            '=' => self.operator(OperatorId::Assign, &[('=', OperatorId::EqEq)]),
            '!' => self.operator(OperatorId::Bang, &[('=', OperatorId::NotEq)]),
            '+' => self.operator(
                OperatorId::Plus,
                &[('=', OperatorId::PlusEq), ('+', OperatorId::PlusPlus)],
            ),
            '-' => self.operator(
                OperatorId::Minus,
                &[('=', OperatorId::MinusEq), ('-', OperatorId::MinusMinus)],
            ),
            '*' => self.operator(
                OperatorId::Star,
                &[('=', OperatorId::StarEq), ('*', OperatorId::StarStar)],
            ),
            '/' => self.operator(
                OperatorId::Slash,
                &[('=', OperatorId::SlashEq), ('/', OperatorId::SlashSlash)],
            ),
            '%' => self.operator(OperatorId::Percent, &[]),
            '<' => self.operator(OperatorId::Lt, &[('=', OperatorId::LtEq)]),
            '>' => self.operator(OperatorId::Gt, &[('=', OperatorId::GtEq)]),

            ',' => self.punct(PunctuationId::Comma),
            ';' => self.punct(PunctuationId::Semicolon),
            ':' => self.punct(PunctuationId::Colon),
            '(' => self.punct(PunctuationId::LParen),
            ')' => self.punct(PunctuationId::RParen),
            '{' => self.punct(PunctuationId::LBrace),
            '}' => self.punct(PunctuationId::RBrace),
            '[' => self.punct(PunctuationId::LBracket),
            ']' => self.punct(PunctuationId::RBracket),

            // Scanners below consume exactly through their last character.
            '#' => return self.read_comment(),
            '"' | '\'' => return self.read_string(c),
            '.' if self.peek_char().is_some_and(|n| n.is_ascii_digit()) => return self.read_number(),
            _ if c.is_ascii_digit() => return self.read_number(),
            _ if is_ident_start(c) => return self.read_identifier(),

            '.' => self.illegal("unexpected '.' not followed by a digit"),
            _ => self.illegal(&format!("unexpected character {:?}", c)),
        };

        self.read_char();
        token
    }

    /// Take the lexical diagnostics recorded so far, leaving the internal list empty.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Lexical diagnostics recorded so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    /// Move the cursor to the next character and update line/column for it.
    fn read_char(&mut self) {
        match self.chars.next() {
            Some((pos, c)) => {
                self.position = pos;
                self.ch = Some(c);
                match c {
                    '\n' => {
                        self.line += 1;
                        self.column = 0;
                    }
                    '\t' => self.column += TAB_WIDTH,
                    _ => self.column += 1,
                }
            }
            None if !self.at_end => {
                // The end-of-input sentinel occupies one column past the last character.
                self.at_end = true;
                self.position = self.source.len();
                self.ch = None;
                self.column += 1;
            }
            None => {}
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    /// Source text from `start` through the character under the cursor (inclusive).
    fn text_through_current(&self, start: usize) -> &'a str {
        let end = self.position + self.ch.map_or(0, char::len_utf8);
        &self.source[start..end]
    }

    /// Source text from `start` up to (excluding) the character under the cursor.
    fn text_until_current(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    // ========================================================================
    // Operator helpers
    // ========================================================================

    /// Try to match a two-character compound operator, fallback to the simple one.
    ///
    /// On a match the cursor is left on the second character; `next_token` advances past it.
    fn operator(&mut self, simple: OperatorId, compounds: &[(char, OperatorId)]) -> Token {
        let (start, line, column) = (self.position, self.line, self.column);
        let next = self.peek_char();

        let id = compounds
            .iter()
            .find(|(c, _)| next == Some(*c))
            .map(|(_, id)| *id);

        let kind = match id {
            Some(id) => {
                self.read_char();
                TokenKind::Operator(id)
            }
            None => TokenKind::Operator(simple),
        };
        Token::new(kind, self.text_through_current(start), line, column, start)
    }

    fn punct(&mut self, id: PunctuationId) -> Token {
        self.token_at_cursor(TokenKind::Punctuation(id))
    }

    fn token_at_cursor(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            self.text_through_current(self.position),
            self.line,
            self.column,
            self.position,
        )
    }

    /// Emit an `Illegal` token for the character under the cursor and record why.
    fn illegal(&mut self, message: &str) -> Token {
        let token = self.token_at_cursor(TokenKind::Illegal);
        self.diagnostics.push(Diagnostic::lexical(message, &token));
        token
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn read_identifier(&mut self) -> Token {
        let (start, line, column) = (self.position, self.line, self.column);
        while self.ch.is_some_and(is_ident_continue) {
            self.read_char();
        }

        let spelling = self.text_until_current(start);
        Token::new(lookup_ident(spelling), spelling, line, column, start)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yield every token including a single trailing `Eof`, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.emitted_eof {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.emitted_eof = true;
        }
        Some(token)
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a whole source string.
///
/// Returns every token (ending with exactly one `Eof`) plus the lexical diagnostics.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut lexer = Lexer::new(source);
    let tokens: Vec<Token> = lexer
        .by_ref()
        .inspect(|t| tracing::trace!(kind = %t.kind, literal = %t.literal, line = t.line, column = t.column, "token"))
        .collect();
    (tokens, lexer.take_diagnostics())
}

// ============================================================================
// TESTS
// ============================================================================
