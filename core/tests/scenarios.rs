//! End-to-end scenarios for the annotation operations

mod common;

use common::{categorical_dataset, column, scenario_dataset};
use gffgate_common::config::GateConfig;
use gffgate_core::{Dataset, OperationRegistry};

fn run(dataset: &Dataset, registry: &OperationRegistry, name: &str) -> Dataset {
    dataset
        .execute(registry, name)
        .unwrap()
        .into_dataset()
        .unwrap_or_else(|| panic!("{name} did not produce a dataset"))
}

#[test]
fn test_unassembled_seq_scenario() {
    let registry = OperationRegistry::with_all(true);
    let result = run(&scenario_dataset(), &registry, "UnassembledSeq");
    assert_eq!(column(&result, "value"), vec!["33.33 %"]);
}

#[test]
fn test_eh_select_scenario() {
    let dataset = scenario_dataset();
    let registry = OperationRegistry::with_all(true);
    let result = run(&dataset, &registry, "EHselect");

    assert_eq!(result.num_rows(), 1);
    assert_eq!(result.table().schema(), dataset.table().schema());
    assert_eq!(column(&result, "Source"), vec!["ensembl"]);
    assert_eq!(column(&result, "Attributes"), vec!["ID=g1;Name=FOO"]);
}

#[test]
fn test_eh_gene_names_scenario() {
    let registry = OperationRegistry::with_all(true);
    let result = run(&scenario_dataset(), &registry, "EHGeneNames");
    assert_eq!(column(&result, "genename"), vec!["FOO"]);
    assert_eq!(column(&result, "name"), vec!["1"]);
}

#[test]
fn test_listings_are_stable_under_reapplication() {
    let registry = OperationRegistry::with_all(true);
    for (name, key) in [("ListID", "Chromosome or scaffold name"), ("ListTypes", "Type")] {
        let once = run(&scenario_dataset(), &registry, name);
        let twice = run(&once, &registry, name);
        assert_eq!(column(&once, key), column(&twice, key));
        assert_eq!(once, twice);
    }
}

#[test]
fn test_categorical_columns() {
    let dataset = categorical_dataset();
    let registry = OperationRegistry::with_all(true);

    let ids = run(&dataset, &registry, "ListID");
    assert_eq!(
        ids.column_values("Chromosome or scaffold name").unwrap(),
        vec![
            Some("1".to_string()),
            None,
            Some("X".to_string()),
            Some("GL000009.2".to_string()),
        ]
    );

    let features = run(&dataset, &registry, "FeaturesCount");
    assert_eq!(
        column(&features, "Source"),
        vec!["GRCh38", "havana", "ensembl_havana"]
    );

    let unassembled = run(&dataset, &registry, "UnassembledSeq");
    assert_eq!(column(&unassembled, "value"), vec!["66.67 %"]);

    let genes = run(&dataset, &registry, "EHGeneNames");
    assert_eq!(column(&genes, "genename"), vec!["DDX11L1", "WASH7P"]);
    assert_eq!(column(&genes, "name"), vec!["1", "1"]);
}

#[test]
fn test_eh_entries_and_entries_count() {
    let dataset = categorical_dataset();
    let registry = OperationRegistry::with_all(true);

    let entries = run(&dataset, &registry, "EntriesCount");
    assert_eq!(
        column(&entries, "Type"),
        vec!["gene", "supercontig", "chromosome", "exon"]
    );

    let eh_entries = run(&dataset, &registry, "EHentries");
    assert_eq!(column(&eh_entries, "Type"), vec!["gene", "exon"]);
}

#[test]
fn test_basic_info_output_is_printable() {
    let registry = OperationRegistry::with_all(true);
    let outcome = scenario_dataset().execute(&registry, "BasicInfo").unwrap();
    let rendered = outcome.to_string();
    assert!(rendered.contains("Chromosome or scaffold name"));
    assert!(rendered.contains("Float64"));
}

#[test]
fn test_registry_from_config_document() {
    let config = GateConfig::from_json_str(
        r#"{ "registry": { "operations": { "EntireChromosomes": true } } }"#,
    )
    .unwrap();
    let registry = OperationRegistry::from_config(&config.registry).unwrap();
    let dataset = scenario_dataset();

    let chromosomes = run(&dataset, &registry, "EntireChromosomes");
    assert_eq!(
        column(&chromosomes, "Chromosome or scaffold name"),
        vec!["1", "2"]
    );
    assert_eq!(
        dataset.execute(&registry, "BasicInfo").unwrap().to_string(),
        "Operation not active"
    );
}
