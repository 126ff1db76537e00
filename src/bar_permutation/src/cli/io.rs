//! JSON in, JSON out. Dates are kept as raw JSON values, never interpreted.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

use anyhow::Context;
use serde_json::Value;

use crate::models::bar_series::BarSeries;

/// Bars whose date is whatever JSON value the input carried.
pub type JsonSeries = BarSeries<Value>;

/// Reads a JSON array of bars from `reader`.
pub fn read_series<R: Read>(reader: R) -> anyhow::Result<JsonSeries> {
    serde_json::from_reader(BufReader::new(reader)).context("failed to parse bar series JSON")
}

/// Reads from a file path, or stdin when `input` is `-`.
pub fn read_series_from(input: &str) -> anyhow::Result<JsonSeries> {
    if input == "-" {
        return read_series(io::stdin().lock());
    }
    let file = File::open(input).with_context(|| format!("open input file {input}"))?;
    read_series(file)
}

/// Writes surrogates: a single series as a bar array, several as an array of arrays.
pub fn write_surrogates<W: Write>(writer: W, surrogates: &[JsonSeries]) -> anyhow::Result<()> {
    let mut writer = BufWriter::new(writer);
    match surrogates {
        [single] => serde_json::to_writer(&mut writer, single),
        many => serde_json::to_writer(&mut writer, many),
    }
    .context("failed to serialize surrogates")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes to `output`, or stdout when `None`.
pub fn write_surrogates_to(output: Option<&Path>, surrogates: &[JsonSeries]) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create output file {}", path.display()))?;
            write_surrogates(file, surrogates)
        }
        None => write_surrogates(io::stdout().lock(), surrogates),
    }
}
