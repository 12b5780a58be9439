//! Field Render Module
//!
//! 右詰め桁埋めエンジン。最下位桁を最後の位置に書き、`% 10`／`/ 10`で
//! 上位桁へ埋めていきます。数字より左は空白で埋められ、符号スロット付きの
//! 負数では数字の直前の1桁だけが`-`になります。
//!
//! 呼び出し側（formatter）が出力スライスの長さを検証済みであることを
//! 前提とします。値の桁数がフィールドに収まらない場合、上位桁は構造上
//! そのまま失われます（左からの切り捨て）。

use crate::api::SignMode;
use crate::field::spec::{FixedPointField, IntegerField};

/// 浮動小数点値をスケーリングして整数化する
///
/// 0方向への切り捨て。i32の範囲外は飽和します。
pub(crate) fn scale(value: f32, factor: i32) -> i32 {
    (value * factor as f32) as i32
}

/// 整数を右詰め固定幅で描画する
///
/// 前提: `out.len() >= field.total_width()`。書き込んだバイト数を返します。
pub(crate) fn render_integer(value: i32, field: &IntegerField, out: &mut [u8]) -> usize {
    let length = field.total_width();
    let mut minus_pending = field.sign() == SignMode::Signed && value < 0;
    let mut number = value.wrapping_abs();

    for i in (0..length).rev() {
        if number > 0 {
            out[i] = b'0' + (number % 10) as u8;
            number /= 10;
        } else if i == length - 1 {
            // 最下位桁に達した時点で値が尽きているのは0の場合だけ
            out[i] = b'0';
        } else if minus_pending {
            out[i] = b'-';
            minus_pending = false;
        } else {
            out[i] = b' ';
        }
    }

    length
}

/// 固定小数点値を右詰め固定幅で描画する
///
/// 前提: `out.len() >= field.total_width()`、`factor == 10^fraction_width`。
/// 右から`fraction_width`桁目の次の位置には無条件に`.`が置かれます。
/// 小数点の左隣と、小数点より右の未使用桁は空白ではなく`'0'`になります
/// （最小でも`0.0`形式を保証）。符号は小数点に隣接する2桁には置かれません。
pub(crate) fn render_fixed_point(
    value: f32,
    field: &FixedPointField,
    factor: i32,
    out: &mut [u8],
) -> usize {
    let length = field.total_width();
    let point = length - field.fraction_width() - 1;

    let scaled = scale(value, factor);
    let mut minus_pending = field.sign() == SignMode::Signed && scaled < 0;
    let mut number = scaled.wrapping_abs();

    for i in (0..length).rev() {
        if i == point {
            out[i] = b'.';
        } else if number > 0 {
            out[i] = b'0' + (number % 10) as u8;
            number /= 10;
        } else if minus_pending && i + 1 < point {
            out[i] = b'-';
            minus_pending = false;
        } else if i + 1 == point || i > point {
            // 小数点の左隣の先行ゼロ、および小数点より右の桁
            out[i] = b'0';
        } else {
            out[i] = b' ';
        }
    }

    length
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_int(value: i32, field: &IntegerField) -> String {
        let mut buf = vec![0u8; field.total_width()];
        render_integer(value, field, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    fn render_fix(value: f32, field: &FixedPointField) -> String {
        let factor = field.scaling_factor().unwrap();
        let mut buf = vec![0u8; field.total_width()];
        render_fixed_point(value, field, factor, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_integer_right_alignment() {
        assert_eq!(render_int(100, &IntegerField::new(8)), "     100");
        assert_eq!(render_int(7, &IntegerField::new(3)), "  7");
    }

    #[test]
    fn test_integer_sign_sits_next_to_digits() {
        let field = IntegerField::new(3).with_sign(SignMode::Signed);
        assert_eq!(render_int(-5, &field), "  -5");
        assert_eq!(render_int(-123, &field), "-123");
        assert_eq!(render_int(5, &field), "   5");
    }

    #[test]
    fn test_integer_magnitude_mode_drops_sign() {
        assert_eq!(render_int(-5, &IntegerField::new(4)), "   5");
    }

    #[test]
    fn test_integer_zero_renders_single_digit() {
        assert_eq!(render_int(0, &IntegerField::new(4)), "   0");
        let signed = IntegerField::new(3).with_sign(SignMode::Signed);
        assert_eq!(render_int(0, &signed), "   0");
    }

    #[test]
    fn test_integer_overflow_truncates_from_left() {
        // 上位桁は構造上失われる
        assert_eq!(render_int(12345, &IntegerField::new(3)), "345");
    }

    #[test]
    fn test_fixed_point_basic() {
        let field = FixedPointField::new(1, 2).with_sign(SignMode::Signed);
        assert_eq!(render_fix(-0.02, &field), "-0.02");
    }

    #[test]
    fn test_fixed_point_minimum_rendering() {
        // 小数点の両側は空白にならない
        assert_eq!(render_fix(0.0, &FixedPointField::new(2, 2)), " 0.00");
        assert_eq!(
            render_fix(0.0, &FixedPointField::new(2, 1).with_sign(SignMode::Signed)),
            "  0.0"
        );
    }

    #[test]
    fn test_fixed_point_truncates_toward_zero() {
        // 四捨五入ではなく切り捨て
        assert_eq!(render_fix(1.999, &FixedPointField::new(2, 2)), " 1.99");
        assert_eq!(
            render_fix(-1.999, &FixedPointField::new(2, 2).with_sign(SignMode::Signed)),
            " -1.99"
        );
    }

    #[test]
    fn test_fixed_point_sign_placement() {
        let field = FixedPointField::new(3, 1).with_sign(SignMode::Signed);
        assert_eq!(render_fix(-21.5, &field), " -21.5");
        assert_eq!(render_fix(-215.0, &field), "-215.0");
        assert_eq!(render_fix(21.5, &field), "  21.5");
    }

    #[test]
    fn test_fixed_point_zero_fraction_width() {
        // 小数部0桁では小数点が最後の位置に来る
        assert_eq!(render_fix(12.0, &FixedPointField::new(3, 0)), " 12.");
    }

    #[test]
    fn test_fixed_point_overflow_truncates_from_left() {
        let field = FixedPointField::new(1, 1).with_sign(SignMode::Signed);
        // -123.4 -> scaled -1234、桁領域は2桁しかない
        assert_eq!(render_fix(-123.4, &field), "23.4");
    }

    #[test]
    fn test_scale_truncates() {
        assert_eq!(scale(-0.02, 100), -2);
        assert_eq!(scale(1.999, 100), 199);
        assert_eq!(scale(-1.999, 100), -199);
    }
}
