use crate::domain::model::LABEL_NAMESPACE;
use crate::utils::error::Result;
use std::collections::{BTreeMap, BTreeSet};

/// Engine filter arguments: each key maps to a set of accepted values.
///
/// Encoded on the wire as `{"label":{"com.docker.stack.namespace":true}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    fields: BTreeMap<String, BTreeSet<String>>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// 只保留帶有 stack namespace 標籤的服務
    pub fn all_stacks() -> Self {
        let mut filters = Self::new();
        filters.add("label", LABEL_NAMESPACE);
        filters
    }

    pub fn add(&mut self, key: &str, value: &str) {
        self.fields
            .entry(key.to_string())
            .or_default()
            .insert(value.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        let encoded: BTreeMap<&str, BTreeMap<&str, bool>> = self
            .fields
            .iter()
            .map(|(key, values)| {
                (
                    key.as_str(),
                    values.iter().map(|v| (v.as_str(), true)).collect(),
                )
            })
            .collect();

        Ok(serde_json::to_string(&encoded)?)
    }
}
