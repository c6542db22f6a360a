//! Named, toggleable operations over annotation datasets
//!
//! The set of operations is closed: every operation is an [`OperationKind`]
//! variant, and an [`Operation`] pairs a kind with its enabled status. Kinds
//! serialize under the same names the registry uses for lookup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::{Dataset, QueryView};
use crate::error::{CoreError, CoreResult};

mod selection;
mod summary;

/// Sources merged by the Ensembl/Havana annotation pipeline.
pub const EH_SOURCES: [&str; 3] = ["ensembl", "havana", "ensembl_havana"];

/// Every operation known to gffgate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OperationKind {
    /// Column names and types of the reference GFF3 schema
    BasicInfo,
    /// Number of features per source
    FeaturesCount,
    /// Distinct sequence identifiers
    #[serde(rename = "ListID")]
    ListId,
    /// Distinct feature types
    ListTypes,
    /// Number of entries per feature type
    EntriesCount,
    /// Rows describing entire chromosomes
    EntireChromosomes,
    /// Share of unassembled sequences from GRCh38
    UnassembledSeq,
    /// Rows from the Ensembl/Havana sources
    #[serde(rename = "EHselect")]
    EhSelect,
    /// Entries per feature type among Ensembl/Havana rows
    #[serde(rename = "EHentries")]
    EhEntries,
    /// Gene names and their sequence among Ensembl/Havana genes
    #[serde(rename = "EHGeneNames")]
    EhGeneNames,
}

impl OperationKind {
    pub const ALL: [OperationKind; 10] = [
        OperationKind::BasicInfo,
        OperationKind::FeaturesCount,
        OperationKind::ListId,
        OperationKind::ListTypes,
        OperationKind::EntriesCount,
        OperationKind::EntireChromosomes,
        OperationKind::UnassembledSeq,
        OperationKind::EhSelect,
        OperationKind::EhEntries,
        OperationKind::EhGeneNames,
    ];

    /// Registry name of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::BasicInfo => "BasicInfo",
            OperationKind::FeaturesCount => "FeaturesCount",
            OperationKind::ListId => "ListID",
            OperationKind::ListTypes => "ListTypes",
            OperationKind::EntriesCount => "EntriesCount",
            OperationKind::EntireChromosomes => "EntireChromosomes",
            OperationKind::UnassembledSeq => "UnassembledSeq",
            OperationKind::EhSelect => "EHselect",
            OperationKind::EhEntries => "EHentries",
            OperationKind::EhGeneNames => "EHGeneNames",
        }
    }

    /// Run the transform of this kind.
    pub fn apply(&self, view: QueryView<'_>) -> CoreResult<Dataset> {
        let table = match self {
            OperationKind::BasicInfo => summary::basic_info()?,
            OperationKind::FeaturesCount => summary::features_count(view.table())?,
            OperationKind::ListId => summary::list_ids(view.table())?,
            OperationKind::ListTypes => summary::list_types(view.table())?,
            OperationKind::EntriesCount => summary::entries_count(view.table())?,
            OperationKind::EntireChromosomes => selection::entire_chromosomes(view.table())?,
            OperationKind::UnassembledSeq => summary::unassembled_seq(view.table())?,
            OperationKind::EhSelect => selection::eh_select(view.table())?,
            OperationKind::EhEntries => selection::eh_entries(view.table())?,
            OperationKind::EhGeneNames => selection::eh_gene_names(view.table())?,
        };
        Ok(Dataset::new(table))
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperationKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| CoreError::UnknownOperation(s.to_string()))
    }
}

/// An operation together with its enabled status.
///
/// Operations start disabled unless built with [`Operation::enabled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    kind: OperationKind,
    status: bool,
}

impl Operation {
    pub fn new(kind: OperationKind, status: bool) -> Self {
        Self { kind, status }
    }

    pub fn enabled(kind: OperationKind) -> Self {
        Self::new(kind, true)
    }

    pub fn disabled(kind: OperationKind) -> Self {
        Self::new(kind, false)
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn status(&self) -> bool {
        self.status
    }

    /// Change the status of a standalone operation.
    ///
    /// Once registered, toggle through the registry so its status map stays
    /// in sync.
    pub fn set_status(&mut self, status: bool) {
        self.status = status;
    }

    /// Run the transform over an authorized view.
    pub fn apply(&self, view: QueryView<'_>) -> CoreResult<Dataset> {
        debug!(operation = self.name(), rows = view.table().num_rows(), "applying operation");
        self.kind.apply(view)
    }
}

impl From<OperationKind> for Operation {
    fn from(kind: OperationKind) -> Self {
        Self::disabled(kind)
    }
}
