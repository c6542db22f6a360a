//! Common test utilities and fixtures for integration tests

use std::sync::Arc;

use arrow::array::{ArrayRef, DictionaryArray, StringArray};
use arrow::datatypes::Int32Type;
use arrow::record_batch::RecordBatch;
use gffgate_core::Dataset;
use gffgate_core::table::{ATTRIBUTES, SEQID, SOURCE, TYPE};

/// The four-record annotation table used throughout the scenario tests:
/// one Ensembl gene, one GRCh38 supercontig and two GRCh38 chromosomes.
pub fn scenario_dataset() -> Dataset {
    Dataset::from_columns(vec![
        (SEQID, vec!["1", "KI270728.1", "1", "2"]),
        (SOURCE, vec!["ensembl", "GRCh38", "GRCh38", "GRCh38"]),
        (TYPE, vec!["gene", "supercontig", "chromosome", "chromosome"]),
        (
            ATTRIBUTES,
            vec![
                "ID=g1;Name=FOO",
                "ID=supercontig:KI270728.1",
                "ID=chromosome:1",
                "ID=chromosome:2",
            ],
        ),
    ])
    .unwrap()
}

/// A larger table with categorical (dictionary-encoded) source and type
/// columns and a null sequence identifier.
#[allow(dead_code)] // Used in scenarios.rs only
pub fn categorical_dataset() -> Dataset {
    let seqids = StringArray::from(vec![
        Some("1"),
        Some("1"),
        None,
        Some("X"),
        Some("X"),
        Some("GL000009.2"),
    ]);
    let sources: DictionaryArray<Int32Type> = vec![
        "havana",
        "ensembl_havana",
        "GRCh38",
        "GRCh38",
        "havana",
        "GRCh38",
    ]
    .into_iter()
    .collect();
    let types: DictionaryArray<Int32Type> = vec![
        "gene",
        "gene",
        "supercontig",
        "chromosome",
        "exon",
        "supercontig",
    ]
    .into_iter()
    .collect();
    let attributes = StringArray::from(vec![
        "ID=gene:ENSG11;Name=DDX11L1;biotype=transcribed_unprocessed_pseudogene",
        "ID=gene:ENSG12;Name=WASH7P",
        "ID=supercontig:unplaced",
        "ID=chromosome:X",
        "Parent=transcript:ENST13",
        "ID=supercontig:GL000009.2",
    ]);

    let table = RecordBatch::try_from_iter([
        (SEQID, Arc::new(seqids) as ArrayRef),
        (SOURCE, Arc::new(sources) as ArrayRef),
        (TYPE, Arc::new(types) as ArrayRef),
        (ATTRIBUTES, Arc::new(attributes) as ArrayRef),
    ])
    .unwrap();
    Dataset::new(table)
}

/// Values of a column with nulls rendered as empty strings.
pub fn column(dataset: &Dataset, name: &str) -> Vec<String> {
    dataset
        .column_values(name)
        .unwrap()
        .into_iter()
        .map(|value| value.unwrap_or_default())
        .collect()
}
