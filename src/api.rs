//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// 符号スロットの扱い
///
/// 固定幅フィールドが負数の符号用に先頭1桁を確保するかどうかを指定します。
/// 幅とは独立した設定値なので、符号スロットの有無でフィールドの全幅が
/// どう変わるかは[`total_width`](crate::IntegerField::total_width)が示します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum SignMode {
    /// 符号スロットなし（デフォルト）
    ///
    /// フィールド幅は数字領域そのものです。負数は絶対値のみが描画され、
    /// 符号文字は一切出力されません。
    ///
    /// # 出力例
    ///
    /// ```text
    /// format_integer(-5, width 4, Magnitude) => "   5"
    /// ```
    #[default]
    Magnitude,

    /// 符号スロットあり
    ///
    /// フィールドの全幅は`width + 1`になり、負数の場合のみ数字の直前の
    /// 1桁に`-`が描画されます。正数の場合このスロットは空白になります。
    ///
    /// # 出力例
    ///
    /// ```text
    /// format_integer(-5, width 3, Signed) => "  -5"
    /// format_integer( 5, width 3, Signed) => "   5"
    /// ```
    Signed,
}

/// レコードの行終端
///
/// `RecordWriter`がレコード末尾に出力する終端文字列を指定します。
/// パーサーが終端として認識するのはCR・LF・NULなので、`CrLf`・`Cr`・`Lf`で
/// 出力したレコードはそのままリストパーサーに往復できます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum LineEnding {
    /// CR + LF（デフォルト）
    ///
    /// シリアル転送行の慣例的な終端です。例: `"  4500,-21.5\r\n"`
    #[default]
    CrLf,

    /// CRのみ
    Cr,

    /// LFのみ
    Lf,

    /// 終端なし
    ///
    /// 呼び出し側が独自の終端を付加する場合に使用します。
    None,
}

impl LineEnding {
    /// 終端のバイト列を取得
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            LineEnding::CrLf => b"\r\n",
            LineEnding::Cr => b"\r",
            LineEnding::Lf => b"\n",
            LineEnding::None => b"",
        }
    }
}
