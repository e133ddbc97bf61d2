use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// URL returned to the host in place of a stored file location.
///
/// Only built from a route base plus an asset id, so a `Reference` is never
/// handed out for an upload whose asset id has not been observed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reference(String);

impl Reference {
    /// Join `route_base` and `asset_id` with a single `/`.
    pub fn from_route(route_base: &str, asset_id: &str) -> Self {
        Reference(format!("{}/{}", route_base.trim_end_matches('/'), asset_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Reference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Reference> for String {
    fn from(reference: Reference) -> Self {
        reference.0
    }
}
