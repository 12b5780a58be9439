//! List Parser Module
//!
//! カンマ区切りの数値リストをトークンに分割し、各トークンをスカラーパーサーに
//! 委譲するパーサー。
//!
//! 走査はCR・LF・NUL・スライス終端のいずれかで停止し、保留中の最後のトークンは
//! （空であっても）必ずパースされて最後のエントリとして格納されます。連続する
//! カンマの間の空トークンは`0`になります。出力容量を超えたトークンも内部で
//! パースされた上で破棄され、[`ParseCount::seen`]にだけ計上されます。

use crate::error::NumzeroError;
use crate::parser::scalar;
use crate::types::{is_terminator, ParseCount, DELIMITER};

/// トークンごとの変換関数を使ってリストを走査する（寛容版）
///
/// 1. カンマでトークン境界を確定し、都度変換して格納を試みる
/// 2. 最初の終端（CR/LF/NUL/スライス終端）で走査を打ち切る
/// 3. 保留中の最後のトークンを無条件にフラッシュする
fn parse_list_with<T, F>(text: &[u8], out: &mut [T], parse_token: F) -> ParseCount
where
    F: Fn(&[u8]) -> T,
{
    let mut seen = 0usize;
    let mut token_start = 0usize;
    let mut index = 0usize;

    while index < text.len() && !is_terminator(text[index]) {
        if text[index] == DELIMITER {
            let value = parse_token(&text[token_start..index]);
            if seen < out.len() {
                out[seen] = value;
            }
            seen += 1;
            token_start = index + 1;
        }
        index += 1;
    }

    // 最後のトークンは終端の種類に関係なく必ずフラッシュされる
    let value = parse_token(&text[token_start..index]);
    if seen < out.len() {
        out[seen] = value;
    }
    seen += 1;

    ParseCount::new(seen, out.len())
}

/// トークンごとの変換関数を使ってリストを走査する（厳格版）
///
/// トークン変換の失敗は、位置を入力全体のオフセットに付け替えて伝播します。
/// 走査完了後、遭遇したトークン数が出力容量を超えていれば
/// [`NumzeroError::CapacityExceeded`]を返します。
fn try_parse_list_with<T, F>(
    text: &[u8],
    out: &mut [T],
    parse_token: F,
) -> Result<ParseCount, NumzeroError>
where
    F: Fn(&[u8]) -> Result<T, NumzeroError>,
{
    let rebase = |error: NumzeroError, token_start: usize| match error {
        NumzeroError::MalformedToken { position, byte } => NumzeroError::MalformedToken {
            position: token_start + position,
            byte,
        },
        other => other,
    };

    let mut seen = 0usize;
    let mut token_start = 0usize;
    let mut index = 0usize;

    while index < text.len() && !is_terminator(text[index]) {
        if text[index] == DELIMITER {
            let value =
                parse_token(&text[token_start..index]).map_err(|e| rebase(e, token_start))?;
            if seen < out.len() {
                out[seen] = value;
            }
            seen += 1;
            token_start = index + 1;
        }
        index += 1;
    }

    let value = parse_token(&text[token_start..index]).map_err(|e| rebase(e, token_start))?;
    if seen < out.len() {
        out[seen] = value;
    }
    seen += 1;

    if seen > out.len() {
        return Err(NumzeroError::CapacityExceeded {
            seen,
            capacity: out.len(),
        });
    }
    Ok(ParseCount::new(seen, out.len()))
}

/// カンマ区切りの整数リストをパースする
///
/// # 引数
///
/// * `text` - CSV形式のバイト列（CR/LF/NUL/スライス終端で走査終了）
/// * `out` - 出力スライス（長さが容量を兼ねる）
///
/// # 戻り値
///
/// [`ParseCount`] — `seen`は遭遇したトークンの総数で、容量を超えても
/// そのまま数え上げられます。出力を走査する際は`stored`を使用してください。
///
/// # 使用例
///
/// ```rust
/// use numzero::parse_integer_list;
///
/// let mut values = [0i32; 10];
/// let count = parse_integer_list(b"-1234,01234,,,", &mut values[..3]);
///
/// assert_eq!(count.seen, 5);    // 空トークンと容量超過分も数える
/// assert_eq!(count.stored, 3);
/// assert_eq!(&values[..3], &[-1234, 1234, 0]);
/// ```
pub fn parse_integer_list(text: &[u8], out: &mut [i32]) -> ParseCount {
    parse_list_with(text, out, scalar::parse_integer)
}

/// カンマ区切りの浮動小数点数リストをパースする
///
/// 走査規則と個数の契約は[`parse_integer_list`]と同一です。
///
/// # 使用例
///
/// ```rust
/// use numzero::parse_float_list;
///
/// let mut values = [0.0f32; 10];
/// let count = parse_float_list(b"-1234.2,-0.2342,-1245.000,10,,\n", &mut values);
///
/// assert_eq!(count.seen, 6);
/// assert_eq!(values[3], 10.0);
/// assert_eq!(values[5], 0.0);  // 終端直前の空トークン
/// ```
pub fn parse_float_list(text: &[u8], out: &mut [f32]) -> ParseCount {
    parse_list_with(text, out, scalar::parse_float)
}

/// カンマ区切りの整数リストを検証付きでパースする
///
/// 各トークンは[`try_parse_integer`](crate::try_parse_integer)で検証され、
/// 空トークンも不正として扱われます。
///
/// # 戻り値
///
/// * `Ok(ParseCount)` - すべてのトークンが正当で容量内に収まった場合
/// * `Err(NumzeroError::MalformedToken)` - 不正なトークン（位置は入力全体のオフセット）
/// * `Err(NumzeroError::CapacityExceeded)` - トークン数が出力容量を超えた場合
///   （エラー時に出力へ書き込み済みの先頭部分は未規定）
pub fn try_parse_integer_list(text: &[u8], out: &mut [i32]) -> Result<ParseCount, NumzeroError> {
    try_parse_list_with(text, out, scalar::try_parse_integer)
}

/// カンマ区切りの浮動小数点数リストを検証付きでパースする
///
/// 契約は[`try_parse_integer_list`]と同一です。
pub fn try_parse_float_list(text: &[u8], out: &mut [f32]) -> Result<ParseCount, NumzeroError> {
    try_parse_list_with(text, out, scalar::try_parse_float)
}
