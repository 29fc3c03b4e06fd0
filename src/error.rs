//! エラー型
//!
//! 字句エラーはスキャンを終了させ、呼び出し側が取り出すまでレキサーが保持する。
//! レキシコンのエラーはトークン定義テーブルの不備からのみ発生し、スキャン中には起きない。

use codespan_reporting::diagnostic::{Diagnostic, Label};
use thiserror::Error;

use crate::lexer::TokenKind;

/// クレート全体のエラー型
#[derive(Error, Debug)]
pub enum EskipError {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// レキサーエラーの詳細
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("parse failed after token {last_token}, position {position}: {message}")]
    InvalidToken {
        last_token: String,
        position: usize,
        message: String,
    },

    #[error("input of {length} bytes exceeds the limit of {limit} bytes")]
    InputTooLong { length: usize, limit: usize },

    #[error("no token group matched at position {position}")]
    Unclassified { position: usize },
}

impl LexerError {
    /// エラーが指す入力内の位置
    pub fn position(&self) -> usize {
        match self {
            LexerError::InvalidToken { position, .. } => *position,
            LexerError::InputTooLong { limit, .. } => *limit,
            LexerError::Unclassified { position } => *position,
        }
    }
}

/// 合成パターンのコンパイル時に見つかったトークン定義の不備
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("token pattern does not compile: {0}")]
    Pattern(#[from] regex::Error),

    #[error("{kind} pattern declares {declared} capture groups but has {actual}")]
    GroupCountMismatch {
        kind: TokenKind,
        declared: usize,
        actual: usize,
    },

    #[error("composite pattern has {actual} capture groups, expected {expected}")]
    TotalGroupMismatch { expected: usize, actual: usize },
}

/// フィルタ生成時のエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("filter {name} expects no arguments, got {count}")]
    UnexpectedArguments { name: String, count: usize },

    #[error("invalid argument for filter {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("failed to create child filter {child} of chain {chain}: {source}")]
    Child {
        chain: String,
        child: String,
        #[source]
        source: Box<FilterError>,
    },
}

/// ソースファイルの位置情報を含むエラー
#[derive(Debug, Clone)]
pub struct DiagnosticError {
    pub error: LexerError,
    pub file_id: usize,
}

impl DiagnosticError {
    pub fn new(error: LexerError, file_id: usize) -> Self {
        Self { error, file_id }
    }

    /// codespan-reportingのDiagnosticに変換
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        let position = self.error.position();
        let label = match &self.error {
            LexerError::InvalidToken { message, .. } => {
                Label::primary(self.file_id, position..position).with_message(message.clone())
            }
            LexerError::InputTooLong { .. } => Label::primary(self.file_id, position..position)
                .with_message("input is cut off here"),
            LexerError::Unclassified { .. } => Label::primary(self.file_id, position..position)
                .with_message("unclassified match"),
        };

        Diagnostic::error()
            .with_message(self.error.to_string())
            .with_labels(vec![label])
    }
}

/// Result型のエイリアス
pub type EskipResult<T> = Result<T, EskipError>;
