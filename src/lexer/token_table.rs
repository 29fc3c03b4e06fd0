//! トークン定義テーブル

use super::literal_parser::{
    convert_backtick_string, convert_number, convert_raw, convert_regexp, convert_string,
};
use super::token::{Literal, TokenKind};
use std::fmt;

/// トークン定義
///
/// `own_groups` は `pattern` 自身が持つキャプチャグループの数（コンパイラが
/// 外側に付けるグループは含まない）。どのパターンも最低1文字を消費すること。
#[derive(Clone, Copy)]
pub struct TokenDefinition {
    pub kind: TokenKind,
    pub pattern: &'static str,
    pub own_groups: usize,
    pub convert: fn(&str) -> Literal,
}

impl fmt::Debug for TokenDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenDefinition")
            .field("kind", &self.kind)
            .field("pattern", &self.pattern)
            .field("own_groups", &self.own_groups)
            .finish()
    }
}

/// 分類の優先順に並んだトークン定義
///
/// この順序が合成パターン内の各グループ番号も決める
pub static TOKEN_DEFINITIONS: &[TokenDefinition] = &[
    TokenDefinition {
        kind: TokenKind::And,
        pattern: r"&&",
        own_groups: 0,
        convert: convert_raw,
    },
    TokenDefinition {
        kind: TokenKind::Arrow,
        pattern: r"->",
        own_groups: 0,
        convert: convert_raw,
    },
    TokenDefinition {
        kind: TokenKind::CloseParen,
        pattern: r"\)",
        own_groups: 0,
        convert: convert_raw,
    },
    TokenDefinition {
        kind: TokenKind::Colon,
        pattern: r":",
        own_groups: 0,
        convert: convert_raw,
    },
    TokenDefinition {
        kind: TokenKind::Comma,
        pattern: r",",
        own_groups: 0,
        convert: convert_raw,
    },
    // ".5" と "5." の両方を受け付ける。末尾の "." を残さないよう整数部ありを先に試す
    TokenDefinition {
        kind: TokenKind::Number,
        pattern: r"[0-9]+(?:[.][0-9]*)?|[.][0-9]+",
        own_groups: 0,
        convert: convert_number,
    },
    TokenDefinition {
        kind: TokenKind::OpenParen,
        pattern: r"\(",
        own_groups: 0,
        convert: convert_raw,
    },
    TokenDefinition {
        kind: TokenKind::RegexpLiteral,
        pattern: r"/(\\\\|\\/|[^/])*/",
        own_groups: 1,
        convert: convert_regexp,
    },
    TokenDefinition {
        kind: TokenKind::Semicolon,
        pattern: r";",
        own_groups: 0,
        convert: convert_raw,
    },
    TokenDefinition {
        kind: TokenKind::ShuntKeyword,
        pattern: r"<shunt>",
        own_groups: 0,
        convert: convert_raw,
    },
    TokenDefinition {
        kind: TokenKind::StringLiteral,
        pattern: r#""(\\\\|\\"|[^"])*""#,
        own_groups: 1,
        convert: convert_string,
    },
    TokenDefinition {
        kind: TokenKind::StringLiteral,
        pattern: r"`(\\\\|\\`|[^`])*`",
        own_groups: 1,
        convert: convert_backtick_string,
    },
    TokenDefinition {
        kind: TokenKind::Symbol,
        pattern: r"[a-zA-Z_][a-zA-Z0-9_]*",
        own_groups: 0,
        convert: convert_raw,
    },
];
