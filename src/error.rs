//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// numzeroクレート全体で使用するエラー型
///
/// 寛容（silent-degrade）APIは値レベルでは決して失敗しません。このエラー型が
/// 表すのは、Rustとして暗黙にできない契約違反（出力スライス不足、不正な
/// フィールド設定）と、厳格（`try_`）APIが明示的に検出する入力異常です。
///
/// # エラーの種類
///
/// - `Config`: フィールド／レコード設定の検証に失敗したエラー
/// - `MalformedToken`: 厳格パーサーが数値トークン以外のバイトを検出したエラー
/// - `CapacityExceeded`: 厳格リストパーサーで出力容量を超えるトークンを検出したエラー
/// - `FieldOverflow`: 厳格フォーマッターで桁数がフィールド幅を超えたエラー
/// - `BufferTooSmall`: 出力スライスがフィールドの全幅より短いエラー
/// - `Io`: レコード書き込み中に発生したI/Oエラー
///
/// # 使用例
///
/// ```rust
/// use numzero::{try_parse_integer, NumzeroError};
///
/// fn read_sensor_value(token: &[u8]) -> Result<i32, NumzeroError> {
///     let value = try_parse_integer(token)?;  // MalformedTokenが伝播する
///     Ok(value)
/// }
///
/// assert!(read_sensor_value(b"123").is_ok());
/// assert!(read_sensor_value(b"abc").is_err());
/// ```
#[derive(Error, Debug)]
pub enum NumzeroError {
    /// フィールド／レコード設定の検証に失敗したエラー
    ///
    /// `RecordWriterBuilder::build()`時の検証、または小数部の桁数が
    /// スケーリング係数の表現範囲（10^9まで）を超えた場合に発生します。
    #[error("Configuration error: {0}")]
    Config(String),

    /// 厳格パーサーが数値トークンとして不正なバイトを検出したエラー
    ///
    /// `position`は入力スライス先頭からのオフセット、`byte`は検出された
    /// バイト値です。寛容パーサーは同じ入力を検証せず、そのまま桁上げ
    /// 演算に流し込みます。
    #[error("Malformed numeric token: unexpected byte 0x{byte:02X} at position {position}")]
    MalformedToken {
        /// 不正バイトの入力先頭からのオフセット
        position: usize,
        /// 検出されたバイト値
        byte: u8,
    },

    /// 出力容量を超える個数のトークンを検出したエラー
    ///
    /// 厳格リストパーサーのみが返します。寛容リストパーサーは書き込みを
    /// 容量で打ち切りつつ、遭遇したトークン数を`ParseCount::seen`として
    /// 返します（エラーにはなりません）。
    #[error("Capacity exceeded: {seen} tokens encountered but output holds only {capacity}")]
    CapacityExceeded {
        /// 遭遇したトークンの総数
        seen: usize,
        /// 出力スライスの容量
        capacity: usize,
    },

    /// 値の桁数がフィールドの桁領域を超えたエラー
    ///
    /// 厳格フォーマッターのみが返します。寛容フォーマッターは上位桁を
    /// 左から黙って切り捨てます。
    #[error("Field overflow: value has {digits} digits but the field holds only {width}")]
    FieldOverflow {
        /// 値の十進桁数
        digits: usize,
        /// フィールドの桁領域の幅
        width: usize,
    },

    /// 出力スライスがフィールドの全幅より短いエラー
    ///
    /// バッファの確保は呼び出し側の契約ですが、不足を黙って見過ごす
    /// ことはせず、スライス境界として明示的に報告します。
    #[error("Output buffer too small: field needs {required} bytes but only {available} available")]
    BufferTooSmall {
        /// フィールドが必要とするバイト数
        required: usize,
        /// 出力スライスの長さ
        available: usize,
    },

    /// レコード書き込み中に発生したI/Oエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_error_display() {
        let error = NumzeroError::Config("record has no columns".to_string());
        let error_msg = error.to_string();

        assert!(error_msg.contains("Configuration error"));
        assert!(error_msg.contains("record has no columns"));
    }

    #[test]
    fn test_malformed_token_display() {
        let error = NumzeroError::MalformedToken {
            position: 3,
            byte: b'x',
        };
        let error_msg = error.to_string();

        assert!(error_msg.contains("0x78"));
        assert!(error_msg.contains("position 3"));
    }

    #[test]
    fn test_capacity_exceeded_display() {
        let error = NumzeroError::CapacityExceeded {
            seen: 5,
            capacity: 3,
        };
        let error_msg = error.to_string();

        assert!(error_msg.contains("5 tokens"));
        assert!(error_msg.contains("only 3"));
    }

    #[test]
    fn test_field_overflow_display() {
        let error = NumzeroError::FieldOverflow {
            digits: 6,
            width: 4,
        };
        let error_msg = error.to_string();

        assert!(error_msg.contains("6 digits"));
        assert!(error_msg.contains("only 4"));
    }

    #[test]
    fn test_buffer_too_small_display() {
        let error = NumzeroError::BufferTooSmall {
            required: 9,
            available: 4,
        };
        let error_msg = error.to_string();

        assert!(error_msg.contains("9 bytes"));
        assert!(error_msg.contains("4 available"));
    }

    // エラー変換のテスト（?演算子の動作確認）
    #[test]
    fn test_error_conversion_with_question_mark() {
        fn io_operation() -> Result<(), NumzeroError> {
            let _file = std::fs::File::open("nonexistent_readout.log")?;
            Ok(())
        }

        let result = io_operation();
        match result {
            Err(NumzeroError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            _ => panic!("Expected Io error from ? operator"),
        }
    }
}
