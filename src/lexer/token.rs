//! トークン型の定義

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Kinds of tokens the route parser switches on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    And,
    Arrow,
    CloseParen,
    Colon,
    Comma,
    Number,
    OpenParen,
    RegexpLiteral,
    Semicolon,
    ShuntKeyword,
    StringLiteral,
    Symbol,
}

impl TokenKind {
    /// Stable identifier of the kind, as used in parser diagnostics
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::And => "AND",
            TokenKind::Arrow => "ARROW",
            TokenKind::CloseParen => "CLOSE_PAREN",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Number => "NUMBER",
            TokenKind::OpenParen => "OPEN_PAREN",
            TokenKind::RegexpLiteral => "REGEXP_LITERAL",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::ShuntKeyword => "SHUNT_KEYWORD",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Symbol => "SYMBOL",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic value carried by a token
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    /// Punctuation and symbols keep their matched text
    Raw(String),
    Number(f64),
    /// String and regexp literals after quote stripping and unescaping
    Text(String),
}

impl Literal {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Raw(s) | Literal::Text(s) => Some(s),
            Literal::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Raw(s) => write!(f, "{}", s),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// A classified lexical unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Literal,
}

impl Token {
    pub fn new(kind: TokenKind, value: Literal) -> Self {
        Self { kind, value }
    }

    /// Shorthand for tokens whose value is their matched text
    pub fn raw(kind: TokenKind, text: &str) -> Self {
        Self::new(kind, Literal::Raw(text.to_owned()))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Literal::Raw(_) if self.kind != TokenKind::Symbol => write!(f, "{}", self.kind),
            value => write!(f, "{}({})", self.kind, value),
        }
    }
}

/// A token with its location in the scanned input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenWithPosition {
    pub token: Token,
    /// Cumulative offset at which the match (leading whitespace included) started
    pub offset: usize,
    /// Byte range of the token text itself
    pub span: Range<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Token::raw(TokenKind::Arrow, "->").to_string(), "ARROW");
        assert_eq!(Token::raw(TokenKind::Symbol, "path").to_string(), "SYMBOL(path)");
        assert_eq!(
            Token::new(TokenKind::Number, Literal::Number(0.5)).to_string(),
            "NUMBER(0.5)"
        );
        assert_eq!(
            Token::new(TokenKind::StringLiteral, Literal::Text("a\"b".into())).to_string(),
            "STRING_LITERAL(\"a\\\"b\")"
        );
    }

    #[test]
    fn test_literal_accessors() {
        assert_eq!(Literal::Number(3.0).as_number(), Some(3.0));
        assert_eq!(Literal::Number(3.0).as_str(), None);
        assert_eq!(Literal::Text("x".into()).as_str(), Some("x"));
        assert_eq!(Literal::Raw("(".into()).as_number(), None);
    }

    #[test]
    fn test_serialize_kind() {
        let json = serde_json::to_string(&TokenKind::RegexpLiteral).unwrap();
        assert_eq!(json, "\"REGEXP_LITERAL\"");
    }
}
