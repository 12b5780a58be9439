//! numzero - Zero-allocation CSV numeric parser and fixed-width field formatter
//!
//! This crate converts between numeric values and the restrictive text formats
//! used by fixed-width displays and serial telemetry lines: comma-separated
//! decimal numbers terminated by CR, LF or NUL on the way in, and right-aligned
//! fixed-width character fields on the way out.
//!
//! # Quick Start
//!
//! Parsing a scalar token or a comma-separated list:
//!
//! ```rust
//! use numzero::{parse_integer, parse_integer_list};
//!
//! assert_eq!(parse_integer(b"-1234"), -1234);
//!
//! let mut values = [0i32; 8];
//! let count = parse_integer_list(b"10,20,30\r\n", &mut values);
//! assert_eq!(count.seen, 3);
//! assert_eq!(&values[..count.stored], &[10, 20, 30]);
//! ```
//!
//! Formatting into a caller-owned buffer (no allocation, no terminator):
//!
//! ```rust
//! use numzero::{format_integer, IntegerField};
//!
//! let field = IntegerField::new(8);
//! let mut buf = [0u8; 8];
//! let written = format_integer(100, &field, &mut buf)?;
//! assert_eq!(&buf[..written], b"     100");
//! # Ok::<(), numzero::NumzeroError>(())
//! ```
//!
//! # Silent-degrade vs. strict parsing
//!
//! The plain functions follow the permissive contract of firmware-style
//! readout code: they never fail, malformed tokens degrade to best-effort
//! values (commonly `0`). The `try_` variants validate instead:
//!
//! ```rust
//! use numzero::{parse_integer, try_parse_integer, NumzeroError};
//!
//! assert_eq!(parse_integer(b""), 0);
//! assert!(matches!(
//!     try_parse_integer(b"12x4"),
//!     Err(NumzeroError::MalformedToken { position: 2, byte: b'x' })
//! ));
//! ```
//!
//! # Building readout records
//!
//! ```rust
//! use numzero::{Column, FixedPointField, IntegerField, RecordWriterBuilder, SignMode, Value};
//!
//! let writer = RecordWriterBuilder::new()
//!     .with_column(Column::Integer(IntegerField::new(6)))
//!     .with_column(Column::FixedPoint(FixedPointField::new(3, 1).with_sign(SignMode::Signed)))
//!     .build()?;
//!
//! let line = writer.write_record_string(&[Value::Integer(4500), Value::Float(-21.5)])?;
//! assert_eq!(line, "  4500, -21.5\r\n");
//! # Ok::<(), numzero::NumzeroError>(())
//! ```

mod api;
mod builder;
mod error;
mod field;
mod formatter;
mod parser;
mod types;

// 公開API
pub use api::{LineEnding, SignMode};
pub use builder::{Column, RecordWriter, RecordWriterBuilder};
pub use error::NumzeroError;
pub use field::{FixedPointField, IntegerField};
pub use formatter::{
    format_fixed_point, format_fixed_point_string, format_integer, format_integer_string,
    try_format_fixed_point, try_format_integer,
};
pub use parser::{
    parse_float, parse_float_list, parse_integer, parse_integer_list, try_parse_float,
    try_parse_float_list, try_parse_integer, try_parse_integer_list,
};
pub use types::{ParseCount, Value};
