//! Formatter Module
//!
//! 固定幅フィールドへ数値を描画する公開エントリポイント。
//!
//! スライス書き込み版は呼び出し側のバッファに終端なしで全幅ちょうどを
//! 書き込みます。寛容版は値レベルでは決して失敗せず、フィールドに
//! 収まらない桁は左から黙って切り捨てられます。厳格
//! （`try_`）版は切り捨てが起きる入力を[`NumzeroError::FieldOverflow`]
//! として報告します。

use crate::error::NumzeroError;
use crate::field::{self, FixedPointField, IntegerField};

/// 出力スライスがフィールドの全幅を満たすか検証する
fn ensure_capacity(required: usize, available: usize) -> Result<(), NumzeroError> {
    if available < required {
        return Err(NumzeroError::BufferTooSmall {
            required,
            available,
        });
    }
    Ok(())
}

/// 絶対値の十進桁数を数える（0は1桁）
fn decimal_digits(mut magnitude: u64) -> usize {
    let mut digits = 1usize;
    while magnitude >= 10 {
        magnitude /= 10;
        digits += 1;
    }
    digits
}

/// 絶対値の十進桁数を数える（f64版、スケール溢れの報告用）
fn decimal_digits_f64(mut magnitude: f64) -> usize {
    let mut digits = 1usize;
    while magnitude >= 10.0 {
        magnitude /= 10.0;
        digits += 1;
    }
    digits
}

/// 整数を固定幅フィールドへ描画する
///
/// 出力は右詰めで、先頭`field.total_width()`バイトちょうどに書き込まれます。
/// 終端文字は付加されません。値レベルでは決して失敗しません: フィールドに
/// 収まらない上位桁は左から切り捨てられ、
/// [`SignMode::Magnitude`](crate::SignMode::Magnitude)の負数は絶対値のみ
/// 描画されます。
///
/// # 引数
///
/// * `value` - 描画する整数
/// * `field` - フィールドの幅設定
/// * `out` - 出力スライス（`field.total_width()`バイト以上）
///
/// # 戻り値
///
/// * `Ok(usize)` - 書き込んだバイト数（= `field.total_width()`）
/// * `Err(NumzeroError::BufferTooSmall)` - 出力スライスが全幅より短い場合
///
/// # 使用例
///
/// ```rust
/// use numzero::{format_integer, IntegerField};
///
/// let mut buf = [0u8; 8];
/// let written = format_integer(100, &IntegerField::new(8), &mut buf)?;
/// assert_eq!(&buf[..written], b"     100");
/// # Ok::<(), numzero::NumzeroError>(())
/// ```
pub fn format_integer(
    value: i32,
    field: &IntegerField,
    out: &mut [u8],
) -> Result<usize, NumzeroError> {
    ensure_capacity(field.total_width(), out.len())?;
    Ok(field::render_integer(value, field, out))
}

/// 整数を検証付きで固定幅フィールドへ描画する
///
/// [`format_integer`]と同じ出力を生成しますが、値の桁数がフィールドの
/// 数字領域を超える場合は切り捨てる代わりに
/// [`NumzeroError::FieldOverflow`]を返します。`i32::MIN`は桁エンジンの
/// 絶対値表現の外にあるため常に`FieldOverflow`になります。
///
/// # 使用例
///
/// ```rust
/// use numzero::{try_format_integer, IntegerField, NumzeroError};
///
/// let mut buf = [0u8; 3];
/// assert!(matches!(
///     try_format_integer(12345, &IntegerField::new(3), &mut buf),
///     Err(NumzeroError::FieldOverflow { digits: 5, width: 3 })
/// ));
/// ```
pub fn try_format_integer(
    value: i32,
    field: &IntegerField,
    out: &mut [u8],
) -> Result<usize, NumzeroError> {
    let digits = decimal_digits(i64::from(value).unsigned_abs());
    if value == i32::MIN || digits > field.width() {
        return Err(NumzeroError::FieldOverflow {
            digits,
            width: field.width(),
        });
    }
    format_integer(value, field, out)
}

/// 整数を固定幅フィールドの文字列として取得する
///
/// [`format_integer`]のアロケーションする版です。常に
/// `field.total_width()`文字の文字列を返します。
pub fn format_integer_string(value: i32, field: &IntegerField) -> String {
    let mut buf = vec![0u8; field.total_width()];
    field::render_integer(value, field, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// 固定小数点値を固定幅フィールドへ描画する
///
/// 値は`10^fraction_width`倍にスケーリングされ、0方向に切り捨てた整数と
/// して右詰め描画されます（四捨五入はされません）。右から
/// `fraction_width`桁目の次の位置には無条件に`.`が置かれ、小数点の左隣と
/// 小数点より右の未使用桁は`'0'`で埋められます。
///
/// # 戻り値
///
/// * `Ok(usize)` - 書き込んだバイト数（= `field.total_width()`）
/// * `Err(NumzeroError::BufferTooSmall)` - 出力スライスが全幅より短い場合
/// * `Err(NumzeroError::Config)` - `fraction_width > 9`の場合
///
/// # 使用例
///
/// ```rust
/// use numzero::{format_fixed_point, FixedPointField, SignMode};
///
/// let field = FixedPointField::new(1, 2).with_sign(SignMode::Signed);
/// let mut buf = [0u8; 5];
/// let written = format_fixed_point(-0.02, &field, &mut buf)?;
/// assert_eq!(&buf[..written], b"-0.02");
/// # Ok::<(), numzero::NumzeroError>(())
/// ```
pub fn format_fixed_point(
    value: f32,
    field: &FixedPointField,
    out: &mut [u8],
) -> Result<usize, NumzeroError> {
    let factor = field.scaling_factor()?;
    ensure_capacity(field.total_width(), out.len())?;
    Ok(field::render_fixed_point(value, field, factor, out))
}

/// 固定小数点値を検証付きで固定幅フィールドへ描画する
///
/// [`format_fixed_point`]と同じ出力を生成しますが、スケーリング後の値の
/// 桁数が`integer_width + fraction_width`を超える場合、またはスケール
/// 結果がi32の範囲に収まらない場合は[`NumzeroError::FieldOverflow`]を
/// 返します。
pub fn try_format_fixed_point(
    value: f32,
    field: &FixedPointField,
    out: &mut [u8],
) -> Result<usize, NumzeroError> {
    let factor = field.scaling_factor()?;
    let capacity = field.integer_width() + field.fraction_width();

    // スケール結果がi32に収まるかをf64で判定する
    let product = f64::from(value) * f64::from(factor);
    if product <= f64::from(i32::MIN) || product >= f64::from(i32::MAX) + 1.0 {
        return Err(NumzeroError::FieldOverflow {
            digits: decimal_digits_f64(product.trunc().abs()),
            width: capacity,
        });
    }

    // 描画エンジンと同一のスケーリング結果で桁数を判定する
    let scaled = field::scale(value, factor);
    let digits = decimal_digits(i64::from(scaled).unsigned_abs());
    if digits > capacity {
        return Err(NumzeroError::FieldOverflow {
            digits,
            width: capacity,
        });
    }

    format_fixed_point(value, field, out)
}

/// 固定小数点値を固定幅フィールドの文字列として取得する
///
/// [`format_fixed_point`]のアロケーションする版です。
///
/// # 戻り値
///
/// * `Ok(String)` - `field.total_width()`文字の文字列
/// * `Err(NumzeroError::Config)` - `fraction_width > 9`の場合
pub fn format_fixed_point_string(
    value: f32,
    field: &FixedPointField,
) -> Result<String, NumzeroError> {
    let factor = field.scaling_factor()?;
    let mut buf = vec![0u8; field.total_width()];
    field::render_fixed_point(value, field, factor, &mut buf);
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
