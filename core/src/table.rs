//! GFF3 table layout and columnar helpers
//!
//! Tables are Arrow `RecordBatch`es. String columns may arrive as `Utf8`,
//! `LargeUtf8` or dictionary-encoded (categorical) arrays; readers cast them
//! to `Utf8` before use.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, BooleanArray, StringArray, UInt64Array};
use arrow::compute::{cast, filter_record_batch};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;

use crate::error::{CoreError, CoreResult};

/// Sequence identifier column (GFF3 column 1)
pub const SEQID: &str = "Chromosome or scaffold name";
/// Annotation source column (GFF3 column 2)
pub const SOURCE: &str = "Source";
/// Feature type column (GFF3 column 3)
pub const TYPE: &str = "Type";
pub const START: &str = "Start";
pub const END: &str = "End";
pub const SCORE: &str = "Score";
pub const STRAND: &str = "Strand";
pub const PHASE: &str = "Phase";
/// Semicolon separated `tag=value` pairs (GFF3 column 9)
pub const ATTRIBUTES: &str = "Attributes";

/// Name of the count column produced by value counts.
pub const COUNT: &str = "count";

/// The nine GFF3 columns in file order with their reference types.
pub const GFF3_COLUMNS: [(&str, DataType); 9] = [
    (SEQID, DataType::Utf8),
    (SOURCE, DataType::Utf8),
    (TYPE, DataType::Utf8),
    (START, DataType::UInt64),
    (END, DataType::UInt64),
    (SCORE, DataType::Float64),
    (STRAND, DataType::Utf8),
    (PHASE, DataType::UInt8),
    (ATTRIBUTES, DataType::Utf8),
];

/// Reference schema of a GFF3 annotation table.
///
/// Score and phase are nullable since GFF3 writes `.` for missing values.
pub fn gff3_reference_schema() -> SchemaRef {
    let fields: Vec<Field> = GFF3_COLUMNS
        .iter()
        .map(|(name, data_type)| {
            let nullable = matches!(*name, SCORE | PHASE);
            Field::new(*name, data_type.clone(), nullable)
        })
        .collect();
    Arc::new(Schema::new(fields))
}

/// Read `name` from `batch` as a `Utf8` array.
pub fn utf8_column(batch: &RecordBatch, name: &str) -> CoreResult<StringArray> {
    let column = batch
        .column_by_name(name)
        .ok_or_else(|| CoreError::MissingColumn(name.to_string()))?;
    let column: ArrayRef = match column.data_type() {
        DataType::Utf8 => Arc::clone(column),
        _ => cast(column, &DataType::Utf8)?,
    };
    column
        .as_any()
        .downcast_ref::<StringArray>()
        .cloned()
        .ok_or_else(|| {
            CoreError::Arrow(ArrowError::CastError(format!(
                "column '{name}' cannot be read as Utf8"
            )))
        })
}

/// Keep the rows of `batch` whose `column` value satisfies `predicate`.
///
/// Null values never match.
pub fn filter_rows<P>(batch: &RecordBatch, column: &str, predicate: P) -> CoreResult<RecordBatch>
where
    P: Fn(&str) -> bool,
{
    let values = utf8_column(batch, column)?;
    let mask: BooleanArray = values
        .iter()
        .map(|value| Some(value.is_some_and(&predicate)))
        .collect();
    Ok(filter_record_batch(batch, &mask)?)
}

/// Count occurrences of each non-null value.
///
/// Ordered by count descending; equal counts keep first-seen order.
pub fn value_counts(values: &StringArray) -> Vec<(&str, u64)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, u64)> = Vec::new();
    for value in values.iter().flatten() {
        match index.get(value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value, 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Distinct values in first-seen order. A null is kept once if present.
pub fn unique_values(values: &StringArray) -> Vec<Option<&str>> {
    let mut seen = HashSet::new();
    values.iter().filter(|value| seen.insert(*value)).collect()
}

/// Two-column table of `(key, count)` pairs.
pub fn counts_batch(key: &str, counts: &[(&str, u64)]) -> CoreResult<RecordBatch> {
    let keys = StringArray::from_iter_values(counts.iter().map(|(value, _)| *value));
    let totals = UInt64Array::from_iter_values(counts.iter().map(|(_, count)| *count));
    Ok(RecordBatch::try_from_iter([
        (key, Arc::new(keys) as ArrayRef),
        (COUNT, Arc::new(totals) as ArrayRef),
    ])?)
}

/// Build a table of string columns.
pub fn string_batch<N, V>(columns: Vec<(N, V)>) -> CoreResult<RecordBatch>
where
    N: AsRef<str>,
    V: Into<StringArray>,
{
    let columns: Vec<(N, ArrayRef)> = columns
        .into_iter()
        .map(|(name, values)| (name, Arc::new(values.into()) as ArrayRef))
        .collect();
    Ok(RecordBatch::try_from_iter(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::DictionaryArray;
    use arrow::datatypes::Int32Type;

    fn annotation_batch() -> RecordBatch {
        string_batch(vec![
            (SOURCE, vec!["ensembl", "GRCh38", "havana", "GRCh38", "ensembl"]),
            (TYPE, vec!["gene", "chromosome", "exon", "chromosome", "exon"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_reference_schema_layout() {
        let schema = gff3_reference_schema();
        assert_eq!(schema.fields().len(), 9);
        assert_eq!(schema.field(0).name(), SEQID);
        assert_eq!(schema.field(8).name(), ATTRIBUTES);
        assert!(schema.field_with_name(SCORE).unwrap().is_nullable());
        assert!(!schema.field_with_name(TYPE).unwrap().is_nullable());
        assert_eq!(
            schema.field_with_name(START).unwrap().data_type(),
            &DataType::UInt64
        );
    }

    #[test]
    fn test_missing_column() {
        let batch = annotation_batch();
        let err = utf8_column(&batch, ATTRIBUTES).unwrap_err();
        assert!(matches!(err, CoreError::MissingColumn(ref name) if name == ATTRIBUTES));
    }

    #[test]
    fn test_dictionary_column_is_cast() {
        let types: DictionaryArray<Int32Type> =
            vec!["gene", "exon", "gene"].into_iter().collect();
        let batch =
            RecordBatch::try_from_iter([(TYPE, Arc::new(types) as ArrayRef)]).unwrap();

        let column = utf8_column(&batch, TYPE).unwrap();
        assert_eq!(column.value(0), "gene");
        assert_eq!(column.value(1), "exon");
        assert_eq!(column.len(), 3);
    }

    #[test]
    fn test_filter_rows_skips_nulls() {
        let sources = StringArray::from(vec![Some("ensembl"), None, Some("havana")]);
        let batch =
            RecordBatch::try_from_iter([(SOURCE, Arc::new(sources) as ArrayRef)]).unwrap();

        let filtered = filter_rows(&batch, SOURCE, |s| s != "GRCh38").unwrap();
        assert_eq!(filtered.num_rows(), 2);
    }

    #[test]
    fn test_value_counts_order() {
        let batch = annotation_batch();
        let types = utf8_column(&batch, TYPE).unwrap();
        assert_eq!(
            value_counts(&types),
            vec![("chromosome", 2), ("exon", 2), ("gene", 1)]
        );
    }

    #[test]
    fn test_value_counts_drops_nulls() {
        let values = StringArray::from(vec![None, Some("a"), None, Some("a")]);
        assert_eq!(value_counts(&values), vec![("a", 2)]);
    }

    #[test]
    fn test_unique_values_first_seen() {
        let values = StringArray::from(vec![Some("2"), Some("1"), None, Some("2"), None]);
        assert_eq!(unique_values(&values), vec![Some("2"), Some("1"), None]);
    }

    #[test]
    fn test_counts_batch_schema() {
        let batch = counts_batch(TYPE, &[("gene", 3), ("exon", 1)]).unwrap();
        assert_eq!(batch.schema().field(0).name(), TYPE);
        assert_eq!(batch.schema().field(1).name(), COUNT);
        let counts = batch
            .column(1)
            .as_any()
            .downcast_ref::<UInt64Array>()
            .unwrap();
        assert_eq!(counts.value(0), 3);
        assert_eq!(counts.value(1), 1);
    }
}
