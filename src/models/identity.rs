use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    #[serde(rename = "name")]
    pub handle: String,
    #[serde(rename = "real_name", default)]
    pub display_name: String,
}

/// Lookup table built once per run from the harvested identities
#[derive(Debug, Clone, Default)]
pub struct IdentityDirectory {
    handles: HashMap<String, String>,
}

impl IdentityDirectory {
    pub fn from_identities(identities: &[Identity]) -> Self {
        let handles =
            identities.iter().map(|identity| (identity.id.clone(), identity.handle.clone())).collect();
        Self { handles }
    }

    /// Handle for an identity id, if known
    pub fn handle(&self, id: &str) -> Option<&str> {
        self.handles.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
