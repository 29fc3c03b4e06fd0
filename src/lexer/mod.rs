//! Lexical analysis for eskip route definitions.
//!
//! The lexer is pull based: the parser calls [`Lexer::next_token`] until it
//! returns `None`. Each call applies the composite pattern from
//! [`lexicon`] to the remaining input, so whitespace and comments around a
//! token are consumed together with it. When nothing matches, the lexer
//! records a [`LexerError`] and ends the stream; the parser checks
//! [`Lexer::error`] afterwards.

pub mod config;
pub mod lexicon;
pub mod literal_parser;
pub mod token;
pub mod token_table;

use log::{debug, trace};

pub use config::{ErrorPolicy, ScanOptions};
pub use lexicon::{lexicon, CompiledLexicon, SKIP_WHITESPACE};
pub use token::{Literal, Token, TokenKind, TokenWithPosition};
pub use token_table::{TokenDefinition, TOKEN_DEFINITIONS};

use crate::error::LexerError;

/// Lexer over one input
///
/// A lexer belongs to a single parse; the compiled lexicon it reads from is
/// shared by all of them.
pub struct Lexer<'a> {
    lexicon: &'static CompiledLexicon,
    options: ScanOptions,
    remaining: &'a str,
    offset: usize,
    last_raw: &'a str,
    last_token: &'a str,
    error: Option<LexerError>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ScanOptions::default())
    }

    pub fn with_options(input: &'a str, options: ScanOptions) -> Self {
        let mut lexer = Self {
            lexicon: lexicon(),
            options,
            remaining: input,
            offset: 0,
            last_raw: "",
            last_token: "",
            error: None,
        };

        if let Some(limit) = lexer.options.max_input_len {
            if input.len() > limit {
                lexer.record(LexerError::InputTooLong {
                    length: input.len(),
                    limit,
                });
            }
        }

        lexer
    }

    /// Next token, or `None` at the end of input or after an error
    pub fn next_token(&mut self) -> Option<TokenWithPosition> {
        if self.remaining.is_empty() || self.error.is_some() {
            return None;
        }

        self.offset += self.last_raw.len();

        // Only whitespace, or comments that a failed skip would let the
        // composite pattern read as an empty `//` regexp literal
        let content = self.remaining.trim_start_matches(SKIP_WHITESPACE);
        if content.is_empty()
            || (content.starts_with("//") && self.lexicon.is_skip_only(self.remaining))
        {
            self.last_raw = self.remaining;
            self.remaining = "";
            return None;
        }

        let Some(captures) = self.lexicon.find(self.remaining) else {
            self.last_raw = "";
            self.report_error("invalid token");
            return None;
        };

        let Some((definition, matched)) = self.lexicon.classify(&captures) else {
            self.record(LexerError::Unclassified {
                position: self.offset,
            });
            return None;
        };

        let input = self.remaining;
        let raw_len = captures.get(0).map_or(0, |m| m.end());
        let text = &input[matched.range()];

        self.last_raw = &input[..raw_len];
        self.last_token = text;
        self.remaining = &input[raw_len..];

        let token = Token::new(definition.kind, (definition.convert)(text));
        let span = self.offset + matched.start()..self.offset + matched.end();
        trace!("token {} at {:?}", token, span);

        Some(TokenWithPosition {
            token,
            offset: self.offset,
            span,
        })
    }

    /// Record an error at the current position, after the last good token
    ///
    /// Also used by the parser for syntax errors, so they carry the same
    /// position information as lexical ones.
    pub fn report_error(&mut self, message: &str) {
        self.record(LexerError::InvalidToken {
            last_token: self.last_token.to_owned(),
            position: self.offset,
            message: message.to_owned(),
        });
    }

    fn record(&mut self, error: LexerError) {
        if self.error.is_some() && self.options.error_policy == ErrorPolicy::KeepFirst {
            debug!("ignoring lexer error: {}", error);
            return;
        }

        debug!("lexer error: {}", error);
        self.error = Some(error);
    }

    pub fn error(&self) -> Option<&LexerError> {
        self.error.as_ref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn into_error(self) -> Option<LexerError> {
        self.error
    }

    /// Offset at which the most recent match started
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Text of the last emitted token, before literal conversion
    pub fn last_token(&self) -> &str {
        self.last_token
    }

    /// Input not consumed yet
    pub fn remaining(&self) -> &'a str {
        self.remaining
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = TokenWithPosition;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Tokenize a whole input, stopping at the first lexical error
pub fn tokenize(input: &str) -> Result<Vec<TokenWithPosition>, LexerError> {
    let mut lexer = Lexer::new(input);
    let tokens: Vec<TokenWithPosition> = lexer.by_ref().collect();

    match lexer.into_error() {
        Some(error) => Err(error),
        None => Ok(tokens),
    }
}

/// Token stream as text, one token per line
pub fn format_tokens(tokens: &[TokenWithPosition]) -> String {
    tokens
        .iter()
        .map(|t| format!("{} @ {:?}", t.token, t.span))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.token.kind)
            .collect()
    }

    #[test]
    fn test_route_definition() {
        let input = r#"hello: Path("/hello") -> setPath("/") -> "https://www.example.org";"#;
        assert_eq!(
            kinds(input),
            vec![
                TokenKind::Symbol,
                TokenKind::Colon,
                TokenKind::Symbol,
                TokenKind::OpenParen,
                TokenKind::StringLiteral,
                TokenKind::CloseParen,
                TokenKind::Arrow,
                TokenKind::Symbol,
                TokenKind::OpenParen,
                TokenKind::StringLiteral,
                TokenKind::CloseParen,
                TokenKind::Arrow,
                TokenKind::StringLiteral,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_offsets_and_spans() {
        let mut lexer = Lexer::new("a  &&\n b");

        let a = lexer.next_token().unwrap();
        assert_eq!((a.offset, a.span.clone()), (0, 0..1));

        let and = lexer.next_token().unwrap();
        assert_eq!((and.offset, and.span.clone()), (3, 3..5));
        assert_eq!(lexer.last_token(), "&&");

        let b = lexer.next_token().unwrap();
        assert_eq!((b.offset, b.span.clone()), (7, 7..8));
        assert_eq!(lexer.remaining(), "");

        assert!(lexer.next_token().is_none());
        assert!(!lexer.has_error());
    }

    #[test]
    fn test_trailing_comment() {
        assert_eq!(kinds("a // trailing"), vec![TokenKind::Symbol]);
        assert_eq!(
            kinds("// leading\na // one\n// two\n-> b"),
            vec![TokenKind::Symbol, TokenKind::Arrow, TokenKind::Symbol]
        );
    }

    #[test]
    fn test_leading_comment_offsets() {
        let mut lexer = Lexer::new("// header /x/\n  a");
        let a = lexer.next_token().unwrap();
        assert_eq!(a.token, Token::raw(TokenKind::Symbol, "a"));
        assert_eq!((a.offset, a.span), (0, 16..17));
        assert!(lexer.next_token().is_none());
        assert!(!lexer.has_error());
    }

    #[test]
    fn test_comment_only_after_tokens() {
        let mut lexer = Lexer::new("a\n");
        assert!(lexer.next_token().is_some());
        assert!(lexer.next_token().is_none());

        let mut lexer = Lexer::new("a -> @\n// note");
        assert_eq!(lexer.by_ref().count(), 2);
        assert_eq!(lexer.error().map(LexerError::position), Some(5));
    }

    #[test]
    fn test_error_stops_the_stream() {
        let mut lexer = Lexer::new("a -> @ b");
        assert!(lexer.next_token().is_some());
        assert!(lexer.next_token().is_some());
        assert!(lexer.next_token().is_none());
        assert!(lexer.next_token().is_none());
        assert_eq!(lexer.remaining(), "@ b");
        assert_eq!(
            lexer.error().map(|e| e.to_string()),
            Some("parse failed after token ->, position 5: invalid token".to_owned())
        );
    }

    #[test]
    fn test_error_policy() {
        let mut lexer = Lexer::new("@");
        assert!(lexer.next_token().is_none());
        lexer.report_error("syntax error");
        assert!(matches!(
            lexer.error(),
            Some(LexerError::InvalidToken { message, .. }) if message == "invalid token"
        ));

        let options = ScanOptions::default().with_error_policy(ErrorPolicy::KeepLast);
        let mut lexer = Lexer::with_options("@", options);
        assert!(lexer.next_token().is_none());
        lexer.report_error("syntax error");
        assert!(matches!(
            lexer.error(),
            Some(LexerError::InvalidToken { message, .. }) if message == "syntax error"
        ));
    }

    #[test]
    fn test_input_limit() {
        let options = ScanOptions::default().with_max_input_len(4);
        let mut lexer = Lexer::with_options("a -> b", options);
        assert!(lexer.next_token().is_none());
        assert_eq!(
            lexer.error(),
            Some(&LexerError::InputTooLong {
                length: 6,
                limit: 4
            })
        );

        let options = ScanOptions::default().with_max_input_len(6);
        let tokens: Vec<_> = Lexer::with_options("a -> b", options).collect();
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_format_tokens() {
        let tokens = tokenize("f(1)").unwrap();
        assert_eq!(
            format_tokens(&tokens),
            "SYMBOL(f) @ 0..1\nOPEN_PAREN @ 1..2\nNUMBER(1) @ 2..3\nCLOSE_PAREN @ 3..4"
        );
    }
}
