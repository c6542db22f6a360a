//! Counting and listing operations

use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::record_batch::RecordBatch;

use crate::error::{CoreError, CoreResult};
use crate::table::{
    SEQID, SOURCE, TYPE, counts_batch, filter_rows, gff3_reference_schema, string_batch,
    unique_values, utf8_column, value_counts,
};

const UNASSEMBLED_LABEL: &str = "Fraction of unassembled sequences";
const REFERENCE_SOURCE: &str = "GRCh38";
const SUPERCONTIG: &str = "supercontig";

/// Column names and types of the reference schema. The input is not read.
pub(super) fn basic_info() -> CoreResult<RecordBatch> {
    let schema = gff3_reference_schema();
    let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    let types: Vec<String> = schema
        .fields()
        .iter()
        .map(|f| f.data_type().to_string())
        .collect();
    string_batch(vec![
        ("name", StringArray::from(names)),
        ("type", StringArray::from(types)),
    ])
}

pub(super) fn features_count(table: &RecordBatch) -> CoreResult<RecordBatch> {
    let sources = utf8_column(table, SOURCE)?;
    counts_batch(SOURCE, &value_counts(&sources))
}

pub(super) fn entries_count(table: &RecordBatch) -> CoreResult<RecordBatch> {
    let types = utf8_column(table, TYPE)?;
    counts_batch(TYPE, &value_counts(&types))
}

pub(super) fn list_ids(table: &RecordBatch) -> CoreResult<RecordBatch> {
    distinct(table, SEQID)
}

pub(super) fn list_types(table: &RecordBatch) -> CoreResult<RecordBatch> {
    distinct(table, TYPE)
}

fn distinct(table: &RecordBatch, column: &str) -> CoreResult<RecordBatch> {
    let values = utf8_column(table, column)?;
    let unique = StringArray::from(unique_values(&values));
    Ok(RecordBatch::try_from_iter([(
        column,
        Arc::new(unique) as ArrayRef,
    )])?)
}

/// Percentage of GRCh38 entries that are supercontigs, as `"NN.NN %"`.
pub(super) fn unassembled_seq(table: &RecordBatch) -> CoreResult<RecordBatch> {
    let reference = filter_rows(table, SOURCE, |source| source == REFERENCE_SOURCE)?;
    let types = utf8_column(&reference, TYPE)?;
    let counts = value_counts(&types);

    let total: u64 = counts.iter().map(|(_, count)| count).sum();
    let supercontigs = counts
        .iter()
        .find(|(value, _)| *value == SUPERCONTIG)
        .map(|(_, count)| *count)
        .ok_or_else(|| {
            CoreError::malformed(
                "UnassembledSeq",
                format!("no {SUPERCONTIG} entries from source {REFERENCE_SOURCE}"),
            )
        })?;

    let percent = format_percent(supercontigs, total);
    string_batch(vec![
        ("description", vec![UNASSEMBLED_LABEL]),
        ("value", vec![percent.as_str()]),
    ])
}

/// `part / total` as a percentage with two decimals, exact ties rounded to
/// even. `total` is non-zero.
fn format_percent(part: u64, total: u64) -> String {
    format!("{:.2} %", part as f64 * 100.0 / total as f64)
}
