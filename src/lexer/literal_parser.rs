//! リテラルの変換

use super::token::Literal;

const ESCAPE: char = '\\';

/// 許可された文字の前にあるエスケープ文字を取り除く
///
/// それ以外の文字の前のエスケープはそのまま残し、末尾の孤立したエスケープは捨てる
pub fn unescape(s: &str, allowed: &[char]) -> String {
    let mut result = String::with_capacity(s.len());
    let mut escaped = false;

    for ch in s.chars() {
        if escaped {
            if !allowed.contains(&ch) {
                result.push(ESCAPE);
            }
            result.push(ch);
            escaped = false;
        } else if ch == ESCAPE {
            escaped = true;
        } else {
            result.push(ch);
        }
    }

    result
}

/// 区切り文字を除いた中身
fn strip_delimiters(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

pub fn convert_raw(s: &str) -> Literal {
    Literal::Raw(s.to_owned())
}

/// 数値パターンが書式を保証しているので、解析は失敗しない
pub fn convert_number(s: &str) -> Literal {
    Literal::Number(s.parse().unwrap_or_default())
}

/// ダブルクォート文字列（`\` と `"` のみエスケープを解除）
pub fn convert_string(s: &str) -> Literal {
    Literal::Text(unescape(strip_delimiters(s), &['\\', '"']))
}

/// バッククォート文字列（エスケープ処理なし）
pub fn convert_backtick_string(s: &str) -> Literal {
    Literal::Text(strip_delimiters(s).to_owned())
}

/// 正規表現リテラル（`/` のみエスケープを解除）
pub fn convert_regexp(s: &str) -> Literal {
    Literal::Text(unescape(strip_delimiters(s), &['/']))
}
