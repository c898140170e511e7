//! Token model: the closed set of lexical categories and the record
//! produced per recognized lexeme.

use std::fmt;

use rlox_core::text::TextSpan;

/// One variant per lexical category.
///
/// Keyword variants are declared contiguously so [`is_keyword`] can test
/// the discriminant range.
///
/// [`is_keyword`]: TokenKind::is_keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One- and two-character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    StringLiteral,
    NumberLiteral,
    Identifier,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    // Sentinel appended exactly once, after the last real token
    EndOfInput,
}

impl TokenKind {
    /// Map a reserved-word spelling to its kind.
    ///
    /// The lookup is exact and case-sensitive; every other spelling is an
    /// identifier.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        match text {
            "and" => Some(TokenKind::And),
            "class" => Some(TokenKind::Class),
            "else" => Some(TokenKind::Else),
            "false" => Some(TokenKind::False),
            "fun" => Some(TokenKind::Fun),
            "for" => Some(TokenKind::For),
            "if" => Some(TokenKind::If),
            "nil" => Some(TokenKind::Nil),
            "or" => Some(TokenKind::Or),
            "print" => Some(TokenKind::Print),
            "return" => Some(TokenKind::Return),
            "super" => Some(TokenKind::Super),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            "var" => Some(TokenKind::Var),
            "while" => Some(TokenKind::While),
            _ => None,
        }
    }

    /// Whether this kind is a reserved word.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self as u16 >= TokenKind::And as u16 && self as u16 <= TokenKind::While as u16
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Semantic value carried by a literal token.
///
/// String values borrow the quote-stripped body of the lexeme from the
/// source buffer. Absence is `Option::None` on the token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue<'src> {
    String(&'src str),
    Number(f64),
}

impl fmt::Display for LiteralValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::String(value) => write!(f, "{value}"),
            LiteralValue::Number(value) => write!(f, "{value}"),
        }
    }
}

/// One classified lexeme.
///
/// Tokens borrow their text from the source buffer, so the buffer must
/// outlive the token sequence. `line` is 1-based; `span` holds the byte
/// offsets of the lexeme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub literal: Option<LiteralValue<'src>>,
    pub span: TextSpan,
    pub line: u32,
}

impl fmt::Display for Token<'_> {
    // The classic `<kind> <lexeme> <literal>` token dump line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{} {} nil", self.kind, self.lexeme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::from_keyword("class"), Some(TokenKind::Class));
        assert_eq!(TokenKind::from_keyword("while"), Some(TokenKind::While));
        assert_eq!(TokenKind::from_keyword("nil"), Some(TokenKind::Nil));
        // Exact match only: prefixes and different casing miss.
        assert_eq!(TokenKind::from_keyword("classify"), None);
        assert_eq!(TokenKind::from_keyword("Class"), None);
        assert_eq!(TokenKind::from_keyword(""), None);
    }

    #[test]
    fn test_is_keyword_range() {
        assert!(TokenKind::And.is_keyword());
        assert!(TokenKind::Print.is_keyword());
        assert!(TokenKind::While.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::LeftParen.is_keyword());
        assert!(!TokenKind::EndOfInput.is_keyword());
    }

    #[test]
    fn test_token_display() {
        let token = Token {
            kind: TokenKind::NumberLiteral,
            lexeme: "12.5",
            literal: Some(LiteralValue::Number(12.5)),
            span: TextSpan::from_bounds(0, 4),
            line: 1,
        };
        assert_eq!(token.to_string(), "NumberLiteral 12.5 12.5");

        let token = Token {
            kind: TokenKind::Var,
            lexeme: "var",
            literal: None,
            span: TextSpan::from_bounds(0, 3),
            line: 1,
        };
        assert_eq!(token.to_string(), "Var var nil");
    }
}
