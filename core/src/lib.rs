//! gffgate core - registry-gated operations over GFF3 annotation tables
//!
//! A [`Dataset`] wraps an immutable Arrow table of annotation records. Named
//! operations are held in an [`OperationRegistry`] together with their enabled
//! status, and run only through [`Dataset::execute`], which consults the
//! registry and grants the operation a single read of the table.

pub mod dataset;
pub mod error;
pub mod operations;
pub mod registry;
pub mod table;

pub use dataset::{Dataset, NOT_EXISTING_OPERATION, OPERATION_NOT_ACTIVE, Outcome, QueryView};
pub use error::{CoreError, CoreResult};
pub use operations::{Operation, OperationKind};
pub use registry::OperationRegistry;
