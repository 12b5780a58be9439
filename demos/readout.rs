//! Readout Example
//!
//! This example walks through the full surface of numzero the way a
//! fixed-width display/telemetry caller would use it: scalar parsing,
//! list parsing with a bounded output buffer, and fixed-width record
//! formatting.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example readout
//! ```

use numzero::{
    format_integer, parse_float, parse_float_list, parse_integer, parse_integer_list, Column,
    FixedPointField, IntegerField, RecordWriterBuilder, SignMode, Value,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("scalar parsing");
    println!("  parse_integer(\"-1234\")       -> {}", parse_integer(b"-1234"));
    println!("  parse_float(\"-1234.56789\")   -> {}", parse_float(b"-1234.56789"));
    println!("  parse_float(\"-1\")            -> {}", parse_float(b"-1"));

    println!("\nlist parsing with a bounded output buffer");
    let mut integers = [0i32; 10];
    let count = parse_integer_list(b"-1234,01234,,,", &mut integers[..3]);
    println!(
        "  tokens seen: {}, stored: {}, values: {:?}",
        count.seen,
        count.stored,
        &integers[..count.stored]
    );

    let mut floats = [0.0f32; 10];
    let count = parse_float_list(b"-1234.2,-0.2342,-1245.000,10,,\n", &mut floats);
    println!(
        "  tokens seen: {}, values: {:?}",
        count.seen,
        &floats[..count.stored]
    );

    println!("\nfixed-width formatting into a caller-owned buffer");
    let mut buf = [0u8; 8];
    let written = format_integer(100, &IntegerField::new(8), &mut buf)?;
    println!("  format_integer(100, width 8) -> {:?}", std::str::from_utf8(&buf[..written])?);

    println!("\nassembling a transmit record");
    let writer = RecordWriterBuilder::new()
        .with_column(Column::Integer(IntegerField::new(6)))
        .with_column(Column::FixedPoint(
            FixedPointField::new(3, 1).with_sign(SignMode::Signed),
        ))
        .with_column(Column::FixedPoint(
            FixedPointField::new(1, 2).with_sign(SignMode::Signed),
        ))
        .build()?;

    let line = writer.write_record_string(&[
        Value::Integer(4500),
        Value::Float(-21.5),
        Value::Float(-0.02),
    ])?;
    println!("  record: {:?}", line);

    Ok(())
}
