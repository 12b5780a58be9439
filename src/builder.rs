//! Builder Module
//!
//! Fluent Builder APIを提供し、`RecordWriter`インスタンスを段階的に構築する。
//!
//! レコードは固定幅フィールドをカンマで連結し、行終端を付けた転送行です。
//! フォーマット後のバッファへ手作業でCR・LFを書き足す代わりに、検証済みの
//! カラム設定として組み立てを一級化します。

use std::io::Write;

use crate::api::LineEnding;
use crate::error::NumzeroError;
use crate::field::{FixedPointField, IntegerField};
use crate::formatter::{format_fixed_point_string, format_integer_string};
use crate::types::Value;

/// レコードの1カラムのフィールド設定
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Column {
    /// 固定幅整数カラム
    Integer(IntegerField),

    /// 固定幅固定小数点カラム
    FixedPoint(FixedPointField),
}

impl Column {
    /// カラムの全幅（出力バイト数）を取得
    pub fn total_width(&self) -> usize {
        match self {
            Column::Integer(field) => field.total_width(),
            Column::FixedPoint(field) => field.total_width(),
        }
    }

    /// カラムの種類名を取得（エラーメッセージ用）
    fn kind_name(&self) -> &'static str {
        match self {
            Column::Integer(_) => "integer",
            Column::FixedPoint(_) => "float",
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `RecordWriter`インスタンスを段階的に構築するためのビルダーです。
/// カラムは`with_column`の呼び出し順にレコード上へ並びます。
///
/// # 使用例
///
/// ```rust
/// use numzero::{Column, IntegerField, LineEnding, RecordWriterBuilder};
///
/// # fn main() -> Result<(), numzero::NumzeroError> {
/// let writer = RecordWriterBuilder::new()
///     .with_column(Column::Integer(IntegerField::new(6)))
///     .with_column(Column::Integer(IntegerField::new(4)))
///     .with_line_ending(LineEnding::Lf)
///     .build()?;
/// # let _ = writer;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RecordWriterBuilder {
    /// カラム設定（構築中）
    columns: Vec<Column>,

    /// 行終端
    line_ending: LineEnding,
}

impl Default for RecordWriterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordWriterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - カラム: なし（`build()`までに最低1個の追加が必要）
    /// - 行終端: CR + LF
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            line_ending: LineEnding::default(),
        }
    }

    /// カラムを末尾に追加する
    ///
    /// # 引数
    ///
    /// * `column: Column`: 追加するカラムのフィールド設定
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// 行終端を指定する
    ///
    /// # 引数
    ///
    /// * `ending: LineEnding`: レコード末尾に出力する終端
    pub fn with_line_ending(mut self, ending: LineEnding) -> Self {
        self.line_ending = ending;
        self
    }

    /// 設定を検証して`RecordWriter`を構築する
    ///
    /// # 検証項目
    ///
    /// - カラムが1個以上あること
    /// - 固定小数点カラムの`fraction_width`がスケーリング係数の表現範囲に
    ///   収まること（9桁まで）
    ///
    /// # 戻り値
    ///
    /// * `Ok(RecordWriter)` - 検証成功
    /// * `Err(NumzeroError::Config)` - 無効な設定が検出された場合
    pub fn build(self) -> Result<RecordWriter, NumzeroError> {
        if self.columns.is_empty() {
            return Err(NumzeroError::Config("record has no columns".to_string()));
        }

        for (index, column) in self.columns.iter().enumerate() {
            if let Column::FixedPoint(field) = column {
                field.scaling_factor().map_err(|_| {
                    NumzeroError::Config(format!(
                        "column {}: fraction_width {} exceeds the supported maximum of 9 digits",
                        index,
                        field.fraction_width()
                    ))
                })?;
            }
        }

        Ok(RecordWriter {
            columns: self.columns,
            line_ending: self.line_ending,
        })
    }
}

/// 固定幅レコードの書き込み器
///
/// 検証済みのカラム設定を保持し、値の列をカンマ区切りの固定幅レコードと
/// して出力します。出力した行をリストパーサーに掛けるとトークン数は
/// そのまま往復します。フィールドは右詰めなので、値まで復元する場合は
/// トークンごとに先頭の空白を取り除いてからスカラーパーサーへ渡して
/// ください（パーサーは空白を検証せず桁上げ演算に流し込みます）。
///
/// # 使用例
///
/// ```rust
/// use numzero::{Column, FixedPointField, IntegerField, RecordWriterBuilder, SignMode, Value};
///
/// # fn main() -> Result<(), numzero::NumzeroError> {
/// let writer = RecordWriterBuilder::new()
///     .with_column(Column::Integer(IntegerField::new(6)))
///     .with_column(Column::FixedPoint(
///         FixedPointField::new(3, 1).with_sign(SignMode::Signed),
///     ))
///     .build()?;
///
/// let mut line = Vec::new();
/// writer.write_record(&[Value::Integer(4500), Value::Float(-21.5)], &mut line)?;
/// assert_eq!(line, b"  4500, -21.5\r\n");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RecordWriter {
    /// カラム設定
    columns: Vec<Column>,

    /// 行終端
    line_ending: LineEnding,
}

impl RecordWriter {
    /// カラム設定を取得
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// 行終端を取得
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// レコード1行の総バイト数を取得
    ///
    /// フィールドの全幅の合計に、区切りカンマと行終端を加えた長さです。
    pub fn record_width(&self) -> usize {
        let fields: usize = self.columns.iter().map(Column::total_width).sum();
        fields + (self.columns.len() - 1) + self.line_ending.as_bytes().len()
    }

    /// 値の列を1レコードとして書き込む
    ///
    /// # 引数
    ///
    /// * `values` - カラムと同数・同種の値の列
    /// * `writer` - 出力先のライター
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 書き込み成功
    /// * `Err(NumzeroError::Config)` - 値の個数または種類がカラムと一致しない場合
    /// * `Err(NumzeroError::Io)` - 書き込みに失敗した場合
    pub fn write_record<W: Write>(
        &self,
        values: &[Value],
        writer: &mut W,
    ) -> Result<(), NumzeroError> {
        if values.len() != self.columns.len() {
            return Err(NumzeroError::Config(format!(
                "record expects {} values but received {}",
                self.columns.len(),
                values.len()
            )));
        }

        for (index, (column, value)) in self.columns.iter().zip(values).enumerate() {
            if index > 0 {
                writer.write_all(b",")?;
            }

            match (column, value) {
                (Column::Integer(field), Value::Integer(v)) => {
                    writer.write_all(format_integer_string(*v, field).as_bytes())?;
                }
                (Column::FixedPoint(field), Value::Float(v)) => {
                    writer.write_all(format_fixed_point_string(*v, field)?.as_bytes())?;
                }
                (column, value) => {
                    return Err(NumzeroError::Config(format!(
                        "column {} expects {}, received {}",
                        index,
                        column.kind_name(),
                        value.kind_name()
                    )));
                }
            }
        }

        writer.write_all(self.line_ending.as_bytes())?;
        Ok(())
    }

    /// 値の列を1レコードの文字列として取得する
    ///
    /// [`write_record`](Self::write_record)のアロケーションする版です。
    pub fn write_record_string(&self, values: &[Value]) -> Result<String, NumzeroError> {
        let mut buffer = Vec::with_capacity(self.record_width());
        self.write_record(values, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
