//! Single-pass scanner turning one source buffer into a token sequence.
//!
//! The scan loop classifies one character per iteration and either emits a
//! token, delegates to a sub-scanner (strings, numbers, identifiers), or
//! skips trivia. Recoverable errors go to the [`ErrorReporter`] sink and
//! never abort the scan.

use memchr::{memchr, memchr2};
use rlox_core::text::TextSpan;
use rlox_diagnostics::{ErrorReporter, LexError};

use crate::char_codes::{
    is_alpha, is_alpha_numeric, is_digit, is_white_space_single_line, NULL_CHARACTER,
};
use crate::token::{LiteralValue, Token, TokenKind};

/// Scan `source` to completion, reporting recoverable errors to `reporter`.
///
/// The returned sequence always ends with exactly one
/// [`TokenKind::EndOfInput`] token, even for empty or error-riddled input.
pub fn scan<'src>(source: &'src str, reporter: &mut dyn ErrorReporter) -> Vec<Token<'src>> {
    Scanner::new(source).scan_tokens(reporter)
}

/// Cursor state for one scan over one source buffer.
///
/// `start` marks the first byte of the lexeme being recognized and
/// `current` the next unread byte; both always sit on character
/// boundaries. `line` is the 1-based line of `current`.
pub struct Scanner<'src> {
    source: &'src str,
    start: usize,
    current: usize,
    line: u32,
    tokens: Vec<Token<'src>>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Scanner<'src> {
        Scanner {
            source,
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Run the scan loop over the whole buffer and return the tokens.
    ///
    /// Consumes the scanner: cursor state has no life beyond one scan.
    pub fn scan_tokens(mut self, reporter: &mut dyn ErrorReporter) -> Vec<Token<'src>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token(reporter);
        }

        // Sentinel: empty lexeme at the buffer end, final line value.
        self.start = self.current;
        self.add_token(TokenKind::EndOfInput);
        self.tokens
    }

    /// Recognize one lexeme (or skip one piece of trivia) starting at
    /// `start == current`.
    fn scan_token(&mut self, reporter: &mut dyn ErrorReporter) {
        let c = self.advance();
        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            '"' => self.scan_string(reporter),
            '\n' => self.line += 1,
            c if is_white_space_single_line(c) => {}
            c if is_digit(c) => self.scan_number(),
            c if is_alpha(c) => self.scan_identifier(),
            c => reporter.report(self.line, LexError::UnexpectedCharacter(c)),
        }
    }

    /// Skip the body of a `//` comment.
    ///
    /// Stops at the newline itself, not past it, so the dispatch loop keeps
    /// the line counter authoritative.
    fn skip_line_comment(&mut self) {
        let rest = &self.source.as_bytes()[self.current..];
        match memchr(b'\n', rest) {
            Some(offset) => self.current += offset,
            None => self.current = self.source.len(),
        }
    }

    /// String literal body; the opening quote is already consumed.
    ///
    /// No escape processing: every `"` closes the literal. Interior
    /// newlines are legal and advance the line counter. On unterminated
    /// input the lexeme is discarded and the error carries the line the
    /// literal opened on.
    fn scan_string(&mut self, reporter: &mut dyn ErrorReporter) {
        let opening_line = self.line;
        loop {
            let rest = &self.source.as_bytes()[self.current..];
            match memchr2(b'"', b'\n', rest) {
                Some(offset) if rest[offset] == b'"' => {
                    self.current += offset + 1;
                    break;
                }
                Some(offset) => {
                    self.current += offset + 1;
                    self.line += 1;
                }
                None => {
                    self.current = self.source.len();
                    reporter.report(opening_line, LexError::UnterminatedString);
                    return;
                }
            }
        }

        // Literal value is the body with both quotes stripped.
        let value = &self.source[self.start + 1..self.current - 1];
        self.add_token_with_literal(TokenKind::StringLiteral, Some(LiteralValue::String(value)));
    }

    /// Number literal: a maximal digit run, then optionally one `.`
    /// followed by at least one more digit.
    ///
    /// A trailing `.` stays unconsumed, so `10.` lexes as the number `10`
    /// and a separate `Dot` token.
    fn scan_number(&mut self) {
        self.eat_digits();

        if self.peek() == '.' && is_digit(self.peek_next()) {
            self.advance();
            self.eat_digits();
        }

        let lexeme = &self.source[self.start..self.current];
        let value: f64 = lexeme.parse().expect("digit lexemes parse as f64");
        self.add_token_with_literal(TokenKind::NumberLiteral, Some(LiteralValue::Number(value)));
    }

    fn eat_digits(&mut self) {
        while is_digit(self.peek()) {
            self.advance();
        }
    }

    /// Identifier or reserved word: a maximal alphanumeric/underscore run,
    /// then one lookup of the full spelling in the keyword table.
    fn scan_identifier(&mut self) {
        while is_alpha_numeric(self.peek()) {
            self.advance();
        }

        let text = &self.source[self.start..self.current];
        let kind = TokenKind::from_keyword(text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    // --- Cursor primitives ---

    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Consume and return the character at `current`.
    ///
    /// Only called after a `!is_at_end()` check; the debug assertion
    /// guards the precondition.
    fn advance(&mut self) -> char {
        debug_assert!(!self.is_at_end(), "advance called at end of input");
        let c = self.peek();
        self.current += c.len_utf8();
        c
    }

    /// The character at `current`, without consuming it. Yields the NUL
    /// sentinel at end of input.
    #[inline]
    fn peek(&self) -> char {
        self.source[self.current..]
            .chars()
            .next()
            .unwrap_or(NULL_CHARACTER)
    }

    /// The character one past `current`. Only the fractional-number
    /// lookahead needs this.
    fn peek_next(&self) -> char {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next().unwrap_or(NULL_CHARACTER)
    }

    /// Consume the next character only if it equals `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        // peek() is NUL at end of input, which never equals a real
        // expected character.
        if self.peek() != expected {
            return false;
        }
        self.current += expected.len_utf8();
        true
    }

    // --- Emission ---

    fn add_token(&mut self, kind: TokenKind) {
        self.add_token_with_literal(kind, None);
    }

    fn add_token_with_literal(&mut self, kind: TokenKind, literal: Option<LiteralValue<'src>>) {
        let span = TextSpan::from_bounds(self.start as u32, self.current as u32);
        self.tokens.push(Token {
            kind,
            lexeme: &self.source[self.start..self.current],
            literal,
            span,
            line: self.line,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlox_diagnostics::DiagnosticCollection;

    #[test]
    fn test_cursor_advance_and_peek() {
        let mut scanner = Scanner::new("ab");
        assert_eq!(scanner.peek(), 'a');
        assert_eq!(scanner.peek_next(), 'b');
        assert_eq!(scanner.advance(), 'a');
        assert_eq!(scanner.peek(), 'b');
        assert_eq!(scanner.peek_next(), NULL_CHARACTER);
        assert_eq!(scanner.advance(), 'b');
        assert!(scanner.is_at_end());
        assert_eq!(scanner.peek(), NULL_CHARACTER);
    }

    #[test]
    fn test_match_char_consumes_only_on_match() {
        let mut scanner = Scanner::new("!=");
        assert_eq!(scanner.advance(), '!');
        assert!(!scanner.match_char('!'));
        assert_eq!(scanner.current, 1);
        assert!(scanner.match_char('='));
        assert!(scanner.is_at_end());
        assert!(!scanner.match_char('='));
    }

    #[test]
    fn test_advance_consumes_multibyte_chars_whole() {
        let mut scanner = Scanner::new("é!");
        assert_eq!(scanner.advance(), 'é');
        assert_eq!(scanner.peek(), '!');
    }

    #[test]
    fn test_empty_source_scans_to_sentinel() {
        let mut diagnostics = DiagnosticCollection::new();
        let tokens = Scanner::new("").scan_tokens(&mut diagnostics);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
        assert_eq!(tokens[0].lexeme, "");
        assert_eq!(tokens[0].line, 1);
        assert!(tokens[0].span.is_empty());
        assert!(!diagnostics.has_errors());
    }

    #[test]
    fn test_token_spans_slice_back_to_lexemes() {
        let source = "var answer = \"forty\" + 2;";
        let mut diagnostics = DiagnosticCollection::new();
        let tokens = Scanner::new(source).scan_tokens(&mut diagnostics);
        assert!(!diagnostics.has_errors());
        for token in &tokens {
            assert_eq!(&source[token.span.to_range()], token.lexeme);
        }
    }

    #[test]
    fn test_emission_does_not_move_cursor() {
        let mut scanner = Scanner::new("()");
        scanner.current = 1;
        scanner.add_token(TokenKind::LeftParen);
        assert_eq!(scanner.start, 0);
        assert_eq!(scanner.current, 1);
        assert_eq!(scanner.line, 1);
        assert_eq!(scanner.tokens.len(), 1);
        assert_eq!(scanner.tokens[0].lexeme, "(");
    }
}
