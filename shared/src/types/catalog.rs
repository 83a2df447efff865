//! Usage catalog: the billing definitions known for each usage type

use super::billing::BillingPeriod;
use crate::errors::{SharedError, SharedResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// A single usage type and the period it is billed over
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageDefinition {
    pub name: String,
    pub billing_period: BillingPeriod,
}

impl UsageDefinition {
    pub fn new(name: impl Into<String>, billing_period: BillingPeriod) -> Self {
        Self {
            name: name.into(),
            billing_period,
        }
    }
}

/// Usage definitions in effect for one computation, keyed by usage name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageCatalog {
    definitions: HashMap<String, UsageDefinition>,
}

impl UsageCatalog {
    /// Build a catalog, rejecting two definitions with the same name
    pub fn from_definitions<I>(definitions: I) -> SharedResult<Self>
    where
        I: IntoIterator<Item = UsageDefinition>,
    {
        let mut by_name = HashMap::new();
        for definition in definitions {
            if by_name.contains_key(&definition.name) {
                return Err(SharedError::DuplicateUsageDefinition {
                    usage_name: definition.name,
                });
            }
            by_name.insert(definition.name.clone(), definition);
        }
        Ok(Self { definitions: by_name })
    }

    /// Parse a JSON array of usage definitions
    pub fn from_json(json: &str) -> SharedResult<Self> {
        let definitions: Vec<UsageDefinition> =
            serde_json::from_str(json).map_err(|e| SharedError::DeserializationError {
                message: e.to_string(),
            })?;
        Self::from_definitions(definitions)
    }

    pub fn get(&self, usage_name: &str) -> Option<&UsageDefinition> {
        self.definitions.get(usage_name)
    }

    /// Distinct billing periods referenced by at least one definition
    pub fn billing_periods(&self) -> BTreeSet<BillingPeriod> {
        self.definitions
            .values()
            .map(|definition| definition.billing_period)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
