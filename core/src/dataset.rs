//! Gated datasets
//!
//! A [`Dataset`] wraps an immutable annotation table. Operations never see the
//! dataset itself: [`Dataset::execute`] checks the registry, opens the gate and
//! hands the operation a [`QueryView`], which only an open gate can create.
//! The gate is closed again on every exit path, so `queried()` is only ever
//! observed as `true` from inside a running operation.

use std::cell::Cell;
use std::fmt;

use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use tracing::{debug, warn};

use crate::error::CoreResult;
use crate::registry::OperationRegistry;
use crate::table::{string_batch, utf8_column};

/// Text reported for a registered but disabled operation.
pub const OPERATION_NOT_ACTIVE: &str = "Operation not active";
/// Text reported for a name that is not in the registry.
pub const NOT_EXISTING_OPERATION: &str = "Not existing operation";

/// An immutable annotation table with a one-shot query gate.
///
/// The gate flag is a plain `Cell`, which makes `Dataset` `!Sync`: one dataset
/// cannot be executed from two threads at once.
#[derive(Debug, Clone)]
pub struct Dataset {
    table: RecordBatch,
    queried: Cell<bool>,
}

impl Dataset {
    /// Wrap a table.
    pub fn new(table: RecordBatch) -> Self {
        Self {
            table,
            queried: Cell::new(false),
        }
    }

    /// Build a dataset of string columns, e.g. for fixtures and small lookups.
    pub fn from_columns(columns: Vec<(&str, Vec<&str>)>) -> CoreResult<Self> {
        Ok(Self::new(string_batch(columns)?))
    }

    /// The wrapped table.
    pub fn table(&self) -> &RecordBatch {
        &self.table
    }

    /// Whether an operation is currently reading this dataset.
    pub fn queried(&self) -> bool {
        self.queried.get()
    }

    pub fn num_rows(&self) -> usize {
        self.table.num_rows()
    }

    /// Values of a string (or string-castable) column.
    pub fn column_values(&self, name: &str) -> CoreResult<Vec<Option<String>>> {
        let column = utf8_column(&self.table, name)?;
        Ok(column.iter().map(|v| v.map(str::to_string)).collect())
    }

    /// Run the operation registered as `name` against this dataset.
    ///
    /// Unknown and disabled operations are reported through [`Outcome`];
    /// failures inside an enabled operation are returned as errors. Exactly one
    /// operation body runs per call, and the gate is closed on return.
    pub fn execute(&self, registry: &OperationRegistry, name: &str) -> CoreResult<Outcome> {
        let gate = QueryGate::open(self);

        let Some(active) = registry.status(name) else {
            warn!(operation = name, "operation is not registered");
            return Ok(Outcome::NotExisting);
        };
        if !active {
            debug!(operation = name, "operation is disabled");
            return Ok(Outcome::NotActive);
        }
        let Some(operation) = registry.get(name) else {
            warn!(operation = name, "status entry without a registered operation");
            return Ok(Outcome::NotExisting);
        };

        match operation.apply(gate.view()) {
            Ok(result) => {
                debug!(
                    operation = name,
                    input_rows = self.num_rows(),
                    output_rows = result.num_rows(),
                    "operation finished"
                );
                Ok(Outcome::Dataset(result))
            }
            Err(e) => {
                warn!(operation = name, error = %e, "operation failed");
                Err(e)
            }
        }
    }
}

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
    }
}

impl From<RecordBatch> for Dataset {
    fn from(table: RecordBatch) -> Self {
        Self::new(table)
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = pretty_format_batches(std::slice::from_ref(&self.table))
            .map_err(|_| fmt::Error)?;
        write!(f, "{rendered}")
    }
}

/// Read-only access to a table, granted for the duration of one execution.
#[derive(Debug, Clone, Copy)]
pub struct QueryView<'a> {
    table: &'a RecordBatch,
}

impl<'a> QueryView<'a> {
    pub(crate) fn new(table: &'a RecordBatch) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a RecordBatch {
        self.table
    }
}

/// Holds the gate open; dropping it closes the gate.
struct QueryGate<'a> {
    dataset: &'a Dataset,
}

impl<'a> QueryGate<'a> {
    fn open(dataset: &'a Dataset) -> Self {
        dataset.queried.set(true);
        Self { dataset }
    }

    fn view(&self) -> QueryView<'a> {
        QueryView::new(&self.dataset.table)
    }
}

impl Drop for QueryGate<'_> {
    fn drop(&mut self) {
        self.dataset.queried.set(false);
    }
}

/// Result of [`Dataset::execute`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The operation ran and produced a new dataset.
    Dataset(Dataset),
    /// The operation is registered but disabled.
    NotActive,
    /// No operation is registered under the requested name.
    NotExisting,
}

impl Outcome {
    /// The status text for the non-dataset outcomes.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::Dataset(_) => None,
            Outcome::NotActive => Some(OPERATION_NOT_ACTIVE),
            Outcome::NotExisting => Some(NOT_EXISTING_OPERATION),
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            Outcome::Dataset(dataset) => Some(dataset),
            _ => None,
        }
    }

    pub fn into_dataset(self) -> Option<Dataset> {
        match self {
            Outcome::Dataset(dataset) => Some(dataset),
            _ => None,
        }
    }

    pub fn is_dataset(&self) -> bool {
        matches!(self, Outcome::Dataset(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Dataset(dataset) => write!(f, "{dataset}"),
            Outcome::NotActive => f.write_str(OPERATION_NOT_ACTIVE),
            Outcome::NotExisting => f.write_str(NOT_EXISTING_OPERATION),
        }
    }
}
