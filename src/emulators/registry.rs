use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::kind::EmulatorKind;

/// Connection record for one emulator backend.
///
/// `is_connected` is only ever set to true by a successful reachability
/// probe; the flag says nothing about the backend's state since that probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emulator {
    pub kind: EmulatorKind,
    pub host: String,
    pub port: u16,
    pub project_id: String,
    pub is_connected: bool,
}

/// Registry holding at most one connection record per backend kind.
///
/// The registry is an explicit value constructed once by the host and passed
/// by reference to everything that needs it; there is no ambient global
/// state. It performs no internal locking: it assumes a single logical
/// writer, which holds inside one UI event loop. A multi-threaded host must
/// wrap it in `Arc<Mutex<_>>` itself.
#[derive(Debug, Default)]
pub struct EmulatorRegistry {
    emulators: HashMap<EmulatorKind, Emulator>,
}

impl EmulatorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record, replacing any existing record for the same kind.
    /// Last write wins.
    pub fn upsert(&mut self, emulator: Emulator) {
        self.emulators.insert(emulator.kind, emulator);
    }

    /// Returns the current record for the kind, if any.
    pub fn get(&self, kind: EmulatorKind) -> Option<&Emulator> {
        self.emulators.get(&kind)
    }

    /// True only when a record exists for the kind and its last probe
    /// succeeded. False when no record is present.
    pub fn is_connected(&self, kind: EmulatorKind) -> bool {
        self.emulators
            .get(&kind)
            .map(|emulator| emulator.is_connected)
            .unwrap_or(false)
    }

    /// Flips an existing record for the kind to disconnected. Returns true
    /// when a record was present.
    pub fn mark_disconnected(&mut self, kind: EmulatorKind) -> bool {
        match self.emulators.get_mut(&kind) {
            Some(emulator) => {
                emulator.is_connected = false;
                true
            }
            None => false,
        }
    }

    /// Removes the record for the kind, if any.
    pub fn remove(&mut self, kind: EmulatorKind) -> Option<Emulator> {
        self.emulators.remove(&kind)
    }

    /// Every registered record, for diagnostic/settings display.
    pub fn list_all(&self) -> Vec<&Emulator> {
        self.emulators.values().collect()
    }
}
