//! Pipeline stage implementations.
//!
//! This module contains the per-stage evaluation functions for the five
//! stages of the pipeline:
//! 1. **Fetch:** Retrieves the instruction the PC points at.
//! 2. **Decode:** Produces control signals and reads operands.
//! 3. **Execute:** Performs ALU work and resolves branch/jump targets.
//! 4. **Memory:** Performs data loads and stores.
//! 5. **Writeback:** Commits results to the register file.
//!
//! Every stage is a pure function over the current latch snapshot (plus the
//! architectural state it owns); the driver commits all drafted latch values
//! atomically at the end of the cycle.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
