//! The `emulators` module owns connection state for every emulator backend.
//!
//! It holds at most one connection record per backend kind, and only flips a
//! record to connected after a successful reachability probe. There is no
//! automatic re-probing; callers re-run the probe before trusting a stale
//! "connected" flag.

pub mod kind;
pub mod probe;
pub mod registry;

pub use kind::EmulatorKind;
pub use probe::EmulatorForm;
pub use registry::{Emulator, EmulatorRegistry};
