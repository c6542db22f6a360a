//! Annotation report example
//!
//! Builds a small annotation table, configures the registry from a JSON
//! document (or the file given as the first argument) and runs every
//! operation through the gate.
//!
//! ```text
//! cargo run -p gffgate-core --example annotation_report [config.json]
//! ```

use gffgate_common::config::GateConfig;
use gffgate_common::{CommonError, Diagnose, init_logging};
use gffgate_core::table::{ATTRIBUTES, SEQID, SOURCE, TYPE};
use gffgate_core::{Dataset, OperationKind, OperationRegistry, Outcome};
use tracing::{info, warn};

const DEFAULT_CONFIG: &str = r#"{
    "logging": { "level": "info" },
    "registry": {
        "default_status": true,
        "operations": { "EntireChromosomes": false }
    }
}"#;

fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => GateConfig::from_path(path),
        None => GateConfig::from_json_str(DEFAULT_CONFIG),
    }
    .inspect_err(print_diagnostics)?;
    init_logging(&config.logging)?;

    let mut registry = OperationRegistry::from_config(&config.registry)?;
    let dataset = Dataset::from_columns(vec![
        (SEQID, vec!["1", "1", "1", "KI270728.1", "1", "2"]),
        (
            SOURCE,
            vec!["ensembl_havana", "havana", "ensembl", "GRCh38", "GRCh38", "GRCh38"],
        ),
        (
            TYPE,
            vec!["gene", "exon", "gene", "supercontig", "chromosome", "chromosome"],
        ),
        (
            ATTRIBUTES,
            vec![
                "ID=gene:ENSG00000223972;Name=DDX11L1",
                "Parent=transcript:ENST00000456328;Name=DDX11L1-202",
                "ID=gene:ENSG00000227232;Name=WASH7P",
                "ID=supercontig:KI270728.1",
                "ID=chromosome:1",
                "ID=chromosome:2",
            ],
        ),
    ])?;
    info!(rows = dataset.num_rows(), "annotation table loaded");

    for kind in OperationKind::ALL {
        report(&dataset, &registry, kind.name())?;
    }

    registry.enable("EntireChromosomes")?;
    report(&dataset, &registry, "EntireChromosomes")?;
    report(&dataset, &registry, "GeneLengths")?;

    Ok(())
}

/// Logging is not installed yet when the configuration fails to load.
fn print_diagnostics(err: &CommonError) {
    eprintln!(
        "{err} [{:?}/{:?}, retryable: {}]",
        err.category(),
        err.severity(),
        err.is_retryable()
    );
    for hint in err.suggestions() {
        eprintln!("  hint: {hint}");
    }
}

fn report(dataset: &Dataset, registry: &OperationRegistry, name: &str) -> anyhow::Result<()> {
    match dataset.execute(registry, name)? {
        Outcome::Dataset(result) => println!("{name}\n{result}\n"),
        other => warn!(operation = name, "{other}"),
    }
    Ok(())
}
