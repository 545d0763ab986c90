use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an exhibit in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExhibitId(pub Uuid);

impl ExhibitId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ExhibitId {
    fn default() -> Self {
        Self::new()
    }
}
