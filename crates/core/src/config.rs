//! Configuration system for the simulator.
//!
//! This module defines the configuration structure used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** Baseline constants for memory sizing and run limits.
//! 2. **Structure:** A flat, deserializable config consumed by the CLI.
//!
//! Configuration is supplied via JSON or falls back to `SimConfig::default()`.

use serde::Deserialize;

/// Default configuration constants for the simulator.
mod defaults {
    /// Data memory size in words (256 KiB of data memory).
    pub const MEMORY_WORDS: usize = crate::common::constants::DEFAULT_MEM_WORDS;

    /// Safety cap on `run()` for programs that never halt or drain.
    pub const MAX_CYCLES: u64 = crate::common::constants::MAX_RUN_CYCLES;

    pub fn memory_words() -> usize {
        MEMORY_WORDS
    }

    pub fn max_cycles() -> u64 {
        MAX_CYCLES
    }
}

/// Simulation configuration.
///
/// Every field has a default, so a partial JSON document deserializes into a
/// fully populated config.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct SimConfig {
    /// Data memory size in words (byte capacity is four times this).
    #[serde(default = "defaults::memory_words")]
    pub memory_words: usize,

    /// Emit one trace line per cycle to stderr.
    #[serde(default)]
    pub trace: bool,

    /// Safety cap on `run()`; `step()` is never bounded.
    #[serde(default = "defaults::max_cycles")]
    pub max_cycles: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            memory_words: defaults::MEMORY_WORDS,
            trace: false,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}
