//! Renders command records to stdout.
//!
//! Every command hands a fully built slice of records to [`print_output`];
//! nothing is written before the slice exists.

use prettytable::{format, Row, Table};
use serde::Serialize;

use std::io::{self, Write};

use crate::common::OutputFormat;

/// A record that can be rendered as one table row.
pub trait TableRecord {
    /// Column titles.
    fn header() -> Row;

    fn row(&self) -> Row;
}

/// Writes `records` to `out` in the requested format.
pub fn write_output<T, W>(records: &[T], fmt: OutputFormat, out: &mut W) -> eyre::Result<()>
where
    T: Serialize + TableRecord,
    W: Write,
{
    match fmt {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_format(*format::consts::FORMAT_BOX_CHARS);
            table.set_titles(T::header());
            for record in records {
                table.add_row(record.row());
            }
            table.print(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Writes `records` to stdout.
pub fn print_output<T>(records: &[T], fmt: OutputFormat) -> eyre::Result<()>
where
    T: Serialize + TableRecord,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_output(records, fmt, &mut out)
}
