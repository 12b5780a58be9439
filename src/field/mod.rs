//! Field Module
//!
//! 固定幅フィールドの幅設定と右詰め描画エンジンを提供するモジュール。

mod render;
mod spec;

pub use spec::{FixedPointField, IntegerField};

pub(crate) use render::{render_fixed_point, render_integer, scale};
