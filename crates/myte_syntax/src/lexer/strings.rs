//! String and comment scanning for the Myte lexer
//!
//! Strings are delimited by `"` or `'` and end at the next occurrence of the same quote. There are no escape
//! sequences; the literal keeps both quotes. Comments run from `#` to the end of the line.

use super::Lexer;
use super::tokens::{Token, TokenKind};
use crate::diagnostics::Diagnostic;

impl<'a> Lexer<'a> {
    /// Scan a string literal whose opening `quote` is under the cursor.
    ///
    /// When the closing quote never appears the scan stops at end of input and the partial text becomes an
    /// `Illegal` token with a lexical diagnostic.
    pub(super) fn read_string(&mut self, quote: char) -> Token {
        let (start, line, column) = (self.position, self.line, self.column);
        self.read_char(); // opening quote

        while let Some(c) = self.ch {
            if c == quote {
                let token = Token::new(TokenKind::String, self.text_through_current(start), line, column, start);
                self.read_char(); // closing quote
                return token;
            }
            self.read_char();
        }

        let token = Token::new(TokenKind::Illegal, self.text_until_current(start), line, column, start);
        self.diagnostics.push(
            Diagnostic::lexical("unterminated string literal", &token)
                .with_help(format!("add a closing {} before the end of input", quote)),
        );
        token
    }

    /// Scan a `#` comment up to, but not including, the end of the line.
    pub(super) fn read_comment(&mut self) -> Token {
        let (start, line, column) = (self.position, self.line, self.column);
        while self.ch.is_some_and(|c| c != '\n') {
            self.read_char();
        }

        let text = self.text_until_current(start);
        let text = text.strip_suffix('\r').unwrap_or(text);
        Token::new(TokenKind::Comment, text, line, column, start)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{TokenKind, lex};

    #[test]
    fn test_other_quote_inside_string_is_plain_text() {
        let tokens = lex(r#"'say "hi"' x"#).0;
        assert_eq!(tokens[0].literal, r#"'say "hi"'"#);
        assert_eq!(tokens[1].literal, "x");
    }

    #[test]
    fn test_empty_strings() {
        let tokens = lex(r#"'' """#).0;
        assert_eq!(tokens[0].literal, "''");
        assert_eq!(tokens[1].literal, r#""""#);
        assert!(tokens[..2].iter().all(|t| t.kind == TokenKind::String));
    }

    #[test]
    fn test_unterminated_string_has_help() {
        let (_, diags) = lex("\"abc");
        assert_eq!(diags[0].help.as_deref(), Some("add a closing \" before the end of input"));
        assert_eq!((diags[0].line, diags[0].column), (0, 1));
        assert_eq!(diags[0].len, 4);
    }

    #[test]
    fn test_comment_containing_quotes_and_hash() {
        let tokens = lex("# it's # fine\n1").0;
        assert_eq!(tokens[0].literal, "# it's # fine");
        assert_eq!(tokens[1].kind, TokenKind::Int);
    }
}
