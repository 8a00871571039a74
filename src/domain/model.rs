use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label key the engine uses to mark which stack a service belongs to.
pub const LABEL_NAMESPACE: &str = "com.docker.stack.namespace";

/// Service as returned by `GET /services`. Only the fields this tool reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Spec", default)]
    pub spec: ServiceSpec,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceSpec {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Labels", default)]
    pub labels: HashMap<String, String>,
}

impl Service {
    pub fn namespace(&self) -> Option<&str> {
        self.spec.labels.get(LABEL_NAMESPACE).map(String::as_str)
    }
}

/// One row of `stack ls`: a namespace and how many services carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    pub name: String,
    pub services: usize,
}
