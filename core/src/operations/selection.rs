//! Row selections and the views derived from them

use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::record_batch::RecordBatch;

use super::EH_SOURCES;
use crate::error::{CoreError, CoreResult};
use crate::table::{
    ATTRIBUTES, SEQID, SOURCE, TYPE, counts_batch, filter_rows, utf8_column, value_counts,
};

pub(super) fn entire_chromosomes(table: &RecordBatch) -> CoreResult<RecordBatch> {
    filter_rows(table, TYPE, |feature| feature == "chromosome")
}

pub(super) fn eh_select(table: &RecordBatch) -> CoreResult<RecordBatch> {
    filter_rows(table, SOURCE, |source| EH_SOURCES.contains(&source))
}

pub(super) fn eh_entries(table: &RecordBatch) -> CoreResult<RecordBatch> {
    let selected = eh_select(table)?;
    let types = utf8_column(&selected, TYPE)?;
    counts_batch(TYPE, &value_counts(&types))
}

/// Pairs each Ensembl/Havana gene's name with its sequence identifier.
pub(super) fn eh_gene_names(table: &RecordBatch) -> CoreResult<RecordBatch> {
    let genes = filter_rows(&eh_select(table)?, TYPE, |feature| feature == "gene")?;
    let attributes = utf8_column(&genes, ATTRIBUTES)?;
    let seqids = utf8_column(&genes, SEQID)?;

    let names = attributes
        .iter()
        .zip(seqids.iter())
        .map(|(attrs, seqid)| {
            attrs.and_then(gene_name).ok_or_else(|| {
                CoreError::malformed(
                    "EHGeneNames",
                    format!(
                        "gene on {:?} has no name in attributes {:?}",
                        seqid.unwrap_or_default(),
                        attrs.unwrap_or_default()
                    ),
                )
            })
        })
        .collect::<CoreResult<Vec<&str>>>()?;

    Ok(RecordBatch::try_from_iter([
        ("genename", Arc::new(StringArray::from(names)) as ArrayRef),
        ("name", Arc::new(seqids) as ArrayRef),
    ])?)
}

/// Value of the second `tag=value` pair, e.g. `FOO` in `ID=g1;Name=FOO`.
fn gene_name(attributes: &str) -> Option<&str> {
    attributes.split(';').nth(1)?.split('=').nth(1)
}
