//! Architectural register file.
//!
//! This module implements the 32-entry integer register file:
//! 1. **Storage:** 32 signed 32-bit registers (`$0`-`$31`).
//! 2. **Invariant Enforcement:** Register `$0` is hard-wired to zero.
//! 3. **Observability:** A read-only view of the full register array.

use crate::common::constants::NUM_REGS;

/// Architectural register file.
///
/// Contains 32 signed 32-bit registers. Register `$0` always reads as zero
/// and writes to it are silently ignored; every other register holds the
/// last value committed by a writeback.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    regs: [i32; NUM_REGS],
}

impl RegisterFile {
    /// Creates a register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `$0` always returns 0.
    #[inline]
    pub fn read(&self, idx: usize) -> i32 {
        if idx == 0 {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Writes a value to a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `$0` are ignored.
    /// * `val` - The value to write.
    #[inline]
    pub fn write(&mut self, idx: usize, val: i32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns a read-only view of the full register array.
    pub fn snapshot(&self) -> &[i32; NUM_REGS] {
        &self.regs
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
