//! Field Spec Module
//!
//! 固定幅フィールドの幅設定を定義するモジュール。
//!
//! 幅と[`SignMode`]は独立した設定値です。符号スロットは全幅にだけ影響し、
//! 数字領域の幅を変えることはありません。

use crate::api::SignMode;
use crate::error::NumzeroError;

/// 固定幅整数フィールドの設定
///
/// `width`は数字領域の幅です。[`SignMode::Signed`]の場合、全幅は
/// `width + 1`になり、先頭側に符号用の1桁が確保されます。
///
/// # 使用例
///
/// ```rust
/// use numzero::{format_integer_string, IntegerField, SignMode};
///
/// let field = IntegerField::new(8);
/// assert_eq!(format_integer_string(100, &field), "     100");
///
/// let signed = IntegerField::new(3).with_sign(SignMode::Signed);
/// assert_eq!(signed.total_width(), 4);
/// assert_eq!(format_integer_string(-5, &signed), "  -5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegerField {
    /// 数字領域の幅
    width: usize,

    /// 符号スロットの扱い
    sign: SignMode,
}

impl IntegerField {
    /// 符号スロットなしのフィールドを生成
    pub fn new(width: usize) -> Self {
        Self {
            width,
            sign: SignMode::Magnitude,
        }
    }

    /// 符号スロットの扱いを指定する
    pub fn with_sign(mut self, sign: SignMode) -> Self {
        self.sign = sign;
        self
    }

    /// 数字領域の幅を取得
    pub fn width(&self) -> usize {
        self.width
    }

    /// 符号スロットの扱いを取得
    pub fn sign(&self) -> SignMode {
        self.sign
    }

    /// フィールドの全幅（出力バイト数）を取得
    ///
    /// [`SignMode::Signed`]では符号スロットの1桁が加算されます。
    pub fn total_width(&self) -> usize {
        match self.sign {
            SignMode::Magnitude => self.width,
            SignMode::Signed => self.width + 1,
        }
    }
}

/// 固定幅固定小数点フィールドの設定
///
/// 全幅は`integer_width + 1（小数点） + fraction_width`、
/// [`SignMode::Signed`]ではさらに1桁が加算されます。値は
/// `10^fraction_width`倍にスケーリングされ、0方向に切り捨てた整数として
/// 描画されます（四捨五入はされません）。
///
/// # 使用例
///
/// ```rust
/// use numzero::{format_fixed_point_string, FixedPointField, SignMode};
///
/// let field = FixedPointField::new(1, 2).with_sign(SignMode::Signed);
/// assert_eq!(field.total_width(), 5);
/// assert_eq!(format_fixed_point_string(-0.02, &field)?, "-0.02");
/// # Ok::<(), numzero::NumzeroError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedPointField {
    /// 整数部の数字領域の幅
    integer_width: usize,

    /// 小数部の桁数
    fraction_width: usize,

    /// 符号スロットの扱い
    sign: SignMode,
}

impl FixedPointField {
    /// 符号スロットなしのフィールドを生成
    pub fn new(integer_width: usize, fraction_width: usize) -> Self {
        Self {
            integer_width,
            fraction_width,
            sign: SignMode::Magnitude,
        }
    }

    /// 符号スロットの扱いを指定する
    pub fn with_sign(mut self, sign: SignMode) -> Self {
        self.sign = sign;
        self
    }

    /// 整数部の幅を取得
    pub fn integer_width(&self) -> usize {
        self.integer_width
    }

    /// 小数部の桁数を取得
    pub fn fraction_width(&self) -> usize {
        self.fraction_width
    }

    /// 符号スロットの扱いを取得
    pub fn sign(&self) -> SignMode {
        self.sign
    }

    /// フィールドの全幅（出力バイト数）を取得
    pub fn total_width(&self) -> usize {
        let base = self.integer_width + 1 + self.fraction_width;
        match self.sign {
            SignMode::Magnitude => base,
            SignMode::Signed => base + 1,
        }
    }

    /// スケーリング係数`10^fraction_width`を取得
    ///
    /// 係数がi32に収まらない場合（`fraction_width > 9`）は
    /// [`NumzeroError::Config`]を返します。
    pub(crate) fn scaling_factor(&self) -> Result<i32, NumzeroError> {
        u32::try_from(self.fraction_width)
            .ok()
            .and_then(|exp| 10i32.checked_pow(exp))
            .ok_or_else(|| {
                NumzeroError::Config(format!(
                    "fraction_width {} exceeds the supported maximum of 9 digits",
                    self.fraction_width
                ))
            })
    }
}
