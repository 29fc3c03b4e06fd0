//! スキャン設定

use serde::{Deserialize, Serialize};

/// 1回のスキャンで複数のエラーが報告された場合に残すエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// 最初のエラーを保持し、以降の報告は無視する
    #[default]
    KeepFirst,
    /// 報告のたびに置き換える
    KeepLast,
}

/// スキャンごとの設定
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// このバイト数を超える入力はスキャン前に拒否する
    pub max_input_len: Option<usize>,
    pub error_policy: ErrorPolicy,
}

impl ScanOptions {
    pub fn with_max_input_len(mut self, limit: usize) -> Self {
        self.max_input_len = Some(limit);
        self
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }
}
