//! Global system constants.
//!
//! This module defines system-wide constants used across the simulator:
//! 1. **Architectural Constants:** Register count and memory word size.
//! 2. **Naming:** MIPS ABI register names for rendering.
//! 3. **Simulation Constants:** Default sizes and the run-loop safety cap.

/// Number of architectural registers.
pub const NUM_REGS: usize = 32;

/// Size of a memory word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Default data memory size in words (256 KiB of data memory).
pub const DEFAULT_MEM_WORDS: usize = 1 << 16;

/// Safety cap on `run()`: a program that never retires HALT and never
/// drains (e.g. a redirect loop) is stopped after this many cycles.
pub const MAX_RUN_CYCLES: u64 = 1_000_000;

/// Number of memory words included in the final-state dump.
pub const DUMP_WORDS: usize = 64;

/// MIPS ABI register names for `$0`-`$31`.
pub const REG_NAMES: [&str; NUM_REGS] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

/// Returns the ABI name for a register index.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("$??")
}
