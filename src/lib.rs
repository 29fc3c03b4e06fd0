//! eskip route definition tokenizer
//!
//! This library turns eskip route definitions into the token stream consumed
//! by the route parser, and provides the filter interfaces parsed routes are
//! built from.

pub mod error;
pub mod filters;
pub mod lexer;

// Re-export commonly used types
pub use error::{DiagnosticError, EskipError, EskipResult, FilterError, LexerError, LexiconError};
pub use filters::{ChainSpec, Filter, FilterArg, FilterContext, Spec};
pub use lexer::{tokenize, Lexer, Literal, ScanOptions, Token, TokenKind, TokenWithPosition};
