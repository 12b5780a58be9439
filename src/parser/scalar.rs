//! Scalar Parser Module
//!
//! 1個の数値トークンを整数または浮動小数点数に変換するパーサー。
//!
//! 寛容（silent-degrade）APIは決して失敗しません: 不正な入力は
//! ベストエフォートの数値（多くは`0`）に退化します。数字以外のバイトも
//! 検証されずに同じ桁上げ演算に流れ込み、i32のラップアラウンドで確定
//! 動作になります。厳格（`try_`）APIは同じ終端規則の下で構文を検証します。

use crate::error::NumzeroError;
use crate::types::{is_terminator, DELIMITER};

/// 先頭の符号を取り除き、(負数フラグ, 走査開始位置)を返す
fn strip_sign(text: &[u8]) -> (bool, usize) {
    if text.first() == Some(&b'-') {
        (true, 1)
    } else {
        (false, 0)
    }
}

/// バイトがトークンの終わり（デリミタまたは走査終端）かどうかを判定
fn ends_token(byte: u8) -> bool {
    byte == DELIMITER || is_terminator(byte)
}

/// 数値トークンを整数に変換する
///
/// 先頭の`-`は負数を示します。以降のバイトは`,`・CR・LF・NUL・スライス終端の
/// いずれかに達するまで消費され、`acc * 10 + (byte - b'0')`としてラップ演算で
/// 累積されます。
///
/// # 引数
///
/// * `text` - 数値トークンを先頭に持つバイト列
///
/// # 戻り値
///
/// 変換された整数。空の入力や`-`のみの入力は`0`になります。
///
/// # 使用例
///
/// ```rust
/// use numzero::parse_integer;
///
/// assert_eq!(parse_integer(b"-1234"), -1234);
/// assert_eq!(parse_integer(b"42,next"), 42);  // デリミタで停止
/// assert_eq!(parse_integer(b""), 0);
/// ```
pub fn parse_integer(text: &[u8]) -> i32 {
    let (negative, start) = strip_sign(text);

    let mut number: i32 = 0;
    let mut index = start;
    while index < text.len() && !ends_token(text[index]) {
        let digit = i32::from(text[index]) - i32::from(b'0');
        number = number.wrapping_mul(10).wrapping_add(digit);
        index += 1;
    }

    if negative {
        number = number.wrapping_neg();
    }
    number
}

/// 数値トークンを浮動小数点数に変換する
///
/// 整数変換と同じ走査規則に加えて、最初の`.`以降は小数モードに切り替わり、
/// 桁は同じ累積器に足し込まれながら小数除数が1桁ごとに10倍されます。
/// 走査終了後に累積値が除数で除算されます（小数桁がなければ除数は1のまま）。
///
/// # 引数
///
/// * `text` - 数値トークンを先頭に持つバイト列
///
/// # 戻り値
///
/// 変換された`f32`。空の入力は`0.0`、`-`のみの入力は`-0.0`になります。
///
/// # 使用例
///
/// ```rust
/// use numzero::parse_float;
///
/// assert_eq!(parse_float(b"-1"), -1.0);
/// assert!((parse_float(b"-1234.56789") - (-1234.56789)).abs() < 1e-3);
/// ```
pub fn parse_float(text: &[u8]) -> f32 {
    let (negative, start) = strip_sign(text);

    let mut number: f32 = 0.0;
    let mut divisor: i32 = 1;
    let mut fractional = false;
    let mut index = start;
    while index < text.len() && !ends_token(text[index]) {
        let byte = text[index];
        if byte == b'.' {
            fractional = true;
        } else {
            let digit = i32::from(byte) - i32::from(b'0');
            number = number * 10.0 + digit as f32;
            if fractional {
                divisor = divisor.wrapping_mul(10);
            }
        }
        index += 1;
    }

    number /= divisor as f32;
    if negative {
        number = -number;
    }
    number
}

/// 数値トークンを検証付きで整数に変換する
///
/// 走査規則は[`parse_integer`]と同一ですが、数字以外のバイトと空トークンを
/// [`NumzeroError::MalformedToken`]として報告します。値域の検証は行いません
/// （累積は寛容APIと同じラップ演算です）。
///
/// # 戻り値
///
/// * `Ok(i32)` - 変換成功
/// * `Err(NumzeroError::MalformedToken)` - 数字以外のバイト、または数字のないトークン
///
/// # 使用例
///
/// ```rust
/// use numzero::{try_parse_integer, NumzeroError};
///
/// assert_eq!(try_parse_integer(b"-1234").unwrap(), -1234);
/// assert!(matches!(
///     try_parse_integer(b"-"),
///     Err(NumzeroError::MalformedToken { .. })
/// ));
/// ```
pub fn try_parse_integer(text: &[u8]) -> Result<i32, NumzeroError> {
    let (negative, start) = strip_sign(text);

    let mut number: i32 = 0;
    let mut digits = 0usize;
    let mut index = start;
    while index < text.len() && !ends_token(text[index]) {
        let byte = text[index];
        if !byte.is_ascii_digit() {
            return Err(NumzeroError::MalformedToken {
                position: index,
                byte,
            });
        }
        number = number.wrapping_mul(10).wrapping_add(i32::from(byte - b'0'));
        digits += 1;
        index += 1;
    }

    if digits == 0 {
        return Err(NumzeroError::MalformedToken {
            position: index,
            byte: text.get(index).copied().unwrap_or(0),
        });
    }

    Ok(if negative { number.wrapping_neg() } else { number })
}

/// 数値トークンを検証付きで浮動小数点数に変換する
///
/// 走査規則は[`parse_float`]と同一ですが、数字と1個までの`.`以外のバイト、
/// および数字を1桁も含まないトークンを[`NumzeroError::MalformedToken`]として
/// 報告します。
///
/// # 戻り値
///
/// * `Ok(f32)` - 変換成功
/// * `Err(NumzeroError::MalformedToken)` - 不正なバイト、2個目の`.`、数字のないトークン
pub fn try_parse_float(text: &[u8]) -> Result<f32, NumzeroError> {
    let (negative, start) = strip_sign(text);

    let mut number: f32 = 0.0;
    let mut divisor: i32 = 1;
    let mut fractional = false;
    let mut digits = 0usize;
    let mut index = start;
    while index < text.len() && !ends_token(text[index]) {
        let byte = text[index];
        if byte == b'.' {
            if fractional {
                // 2個目の小数点
                return Err(NumzeroError::MalformedToken {
                    position: index,
                    byte,
                });
            }
            fractional = true;
        } else if byte.is_ascii_digit() {
            number = number * 10.0 + f32::from(byte - b'0');
            if fractional {
                divisor = divisor.wrapping_mul(10);
            }
            digits += 1;
        } else {
            return Err(NumzeroError::MalformedToken {
                position: index,
                byte,
            });
        }
        index += 1;
    }

    if digits == 0 {
        return Err(NumzeroError::MalformedToken {
            position: index,
            byte: text.get(index).copied().unwrap_or(0),
        });
    }

    number /= divisor as f32;
    Ok(if negative { -number } else { number })
}
