//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared across all components:
//! 1. **Constants:** Register count, word size, ABI names, run defaults.
//! 2. **Error Handling:** Memory fault, simulation fault, and parse error types.
//! 3. **Register Management:** The architectural register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for memory faults, simulation faults, and parse failures.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{NUM_REGS, WORD_BYTES};
pub use error::{DecodeError, MemError, SimError};
pub use reg::RegisterFile;
