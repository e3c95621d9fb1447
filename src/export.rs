//! JSON and CSV serialization of a [`Dataset`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::Result;

fn write_json_to<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
    dataset.serialize(&mut ser)?;
    Ok(())
}

/// Serialize to pretty-printed JSON with 4-space indentation.
pub fn to_json_string(dataset: &Dataset) -> Result<String> {
    let mut buf = Vec::new();
    write_json_to(dataset, &mut buf)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the full dataset, including measurement counts, as JSON.
pub fn write_json(dataset: &Dataset, path: impl AsRef<Path>) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json_to(dataset, &mut writer)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Column order of the CSV export.
pub const CSV_HEADER: [&str; 6] = [
    "input_data_real",
    "input_data_imag",
    "qft_output_real",
    "qft_output_imag",
    "qft_fixed_point_real",
    "qft_fixed_point_imag",
];

/// Write one CSV row per sample after a header row. Counts are not included.
pub fn write_csv_to<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    let mut builder = csv::WriterBuilder::new();
    builder.has_headers(false);
    let mut wtr = builder.from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for row in dataset.rows() {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv(dataset: &Dataset, path: impl AsRef<Path>) -> Result<()> {
    write_csv_to(dataset, File::create(path)?)
}
