//! Declarative form of a batch, for callers that keep registry settings in their own config files.

use crate::{
    error::Result,
    repositories::RegistryKey,
    service,
    types::{AccessMask, Values},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueBatch {
    pub location: String,
    pub access: AccessMask,
    pub names: Vec<String>,
    pub values: Values,
}

impl ValueBatch {
    pub fn new(
        location: impl Into<String>,
        access: AccessMask,
        names: Vec<String>,
        values: Values,
    ) -> Self {
        Self {
            location: location.into(),
            access,
            names,
            values,
        }
    }

    /// Write the batch under `key`
    ///
    /// # Errors
    ///
    /// Same as [`service::set_multiple_values`]
    pub fn apply<K: RegistryKey + ?Sized>(&self, key: &K) -> Result {
        service::set_multiple_values(key, &self.location, self.access, &self.names, &self.values)
    }
}
