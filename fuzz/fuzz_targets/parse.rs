#![no_main]

use libfuzzer_sys::fuzz_target;
use myte::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Lexing is total: exactly one trailing Eof
        let (tokens, _) = lexer::lex(s);
        assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);

        // Parsing never panics and always yields a renderable program
        let parsed = parser::parse(s);
        let _ = parsed.program.render();
    }
});
