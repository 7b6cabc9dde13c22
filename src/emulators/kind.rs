use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag identifying which emulator backend a connection record or operation
/// targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmulatorKind {
    PubSub,
    BigQuery,
    Firestore,
    Bigtable,
    Datastore,
    Spanner,
}

impl EmulatorKind {
    /// Stable lowercase tag, as used by the settings UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmulatorKind::PubSub => "pubsub",
            EmulatorKind::BigQuery => "bigquery",
            EmulatorKind::Firestore => "firestore",
            EmulatorKind::Bigtable => "bigtable",
            EmulatorKind::Datastore => "datastore",
            EmulatorKind::Spanner => "spanner",
        }
    }
}

impl fmt::Display for EmulatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
