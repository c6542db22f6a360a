//! Operation registry
//!
//! The registry is the lookup table consulted by [`crate::Dataset::execute`].
//! It keeps two maps keyed by operation name: the operations themselves and a
//! status map mirroring each operation's enabled flag. Status changes go
//! through [`OperationRegistry::set_status`], which updates both maps.

use std::collections::BTreeMap;

use gffgate_common::config::RegistryConfig;
use gffgate_common::error::CommonError;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::operations::{Operation, OperationKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationRegistry {
    registry: BTreeMap<&'static str, Operation>,
    status_registry: BTreeMap<&'static str, bool>,
}

impl OperationRegistry {
    /// Register `operations`. A later operation with the same name replaces an
    /// earlier one.
    pub fn new(operations: impl IntoIterator<Item = Operation>) -> Self {
        let mut registry = Self::default();
        for operation in operations {
            registry.register(operation);
        }
        debug!(
            operations = registry.len(),
            active = registry.active_names().count(),
            "operation registry built"
        );
        registry
    }

    /// Register every known operation with the same status.
    pub fn with_all(status: bool) -> Self {
        Self::new(
            OperationKind::ALL
                .into_iter()
                .map(|kind| Operation::new(kind, status)),
        )
    }

    /// Register every known operation with the status given by `config`.
    ///
    /// Names in the configuration that match no operation are rejected.
    pub fn from_config(config: &RegistryConfig) -> CoreResult<Self> {
        if let Some(unknown) = config
            .listed_names()
            .find(|name| name.parse::<OperationKind>().is_err())
        {
            return Err(CommonError::configuration_error(format!(
                "unknown operation '{unknown}' in registry configuration"
            ))
            .into());
        }
        Ok(Self::new(OperationKind::ALL.into_iter().map(|kind| {
            Operation::new(kind, config.status_for(kind.name()))
        })))
    }

    /// Add or replace an operation, returning the one it replaced.
    pub fn register(&mut self, operation: Operation) -> Option<Operation> {
        let name = operation.name();
        self.status_registry.insert(name, operation.status());
        self.registry.insert(name, operation)
    }

    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.registry.get(name)
    }

    /// Status of `name`, or `None` if it is not registered.
    pub fn status(&self, name: &str) -> Option<bool> {
        self.status_registry.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains_key(name)
    }

    /// Enable or disable a registered operation.
    pub fn set_status(&mut self, name: &str, status: bool) -> CoreResult<()> {
        let operation = self
            .registry
            .get_mut(name)
            .ok_or_else(|| CoreError::UnknownOperation(name.to_string()))?;
        operation.set_status(status);
        self.status_registry.insert(operation.name(), status);
        debug!(operation = name, status, "operation status changed");
        Ok(())
    }

    pub fn enable(&mut self, name: &str) -> CoreResult<()> {
        self.set_status(name, true)
    }

    pub fn disable(&mut self, name: &str) -> CoreResult<()> {
        self.set_status(name, false)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.registry.keys().copied()
    }

    /// Names of enabled operations in sorted order.
    pub fn active_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.status_registry
            .iter()
            .filter(|(_, active)| **active)
            .map(|(name, _)| *name)
    }

    pub fn registry(&self) -> &BTreeMap<&'static str, Operation> {
        &self.registry
    }

    pub fn status_registry(&self) -> &BTreeMap<&'static str, bool> {
        &self.status_registry
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl FromIterator<Operation> for OperationRegistry {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self::new(iter)
    }
}
