//! Parser Module
//!
//! 固定形式の数値テキストを走査する2層のパーサー。
//! スカラーパーサーが1トークンを数値に変換し、リストパーサーがカンマ区切りの
//! 入力をトークンに分割して委譲します。

mod list;
mod scalar;

pub use list::{parse_float_list, parse_integer_list, try_parse_float_list, try_parse_integer_list};
pub use scalar::{parse_float, parse_integer, try_parse_float, try_parse_integer};
