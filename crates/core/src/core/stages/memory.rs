//! Memory access (MEM) stage.
//!
//! Performs the data-memory side of loads and stores. A store becomes
//! visible at the end of this stage; a load observes every store whose MEM
//! stage ran in an earlier cycle. Illegal addresses surface as faults and
//! abort the simulation.

use crate::common::error::MemError;
use crate::core::latches::{ExMem, MemWb};
use crate::mem::WordMemory;

/// Executes the memory stage of the pipeline.
///
/// Builds the new MEM/WB entry from EX/MEM, loading or storing through the
/// word memory when the control bundle asks for it. The ALU output is the
/// byte address for both.
///
/// # Errors
///
/// Propagates [`MemError`] for misaligned or out-of-bounds addresses; the
/// driver annotates the fault with the current cycle.
pub fn mem_stage(ex_mem: &ExMem, mem: &mut WordMemory) -> Result<MemWb, MemError> {
    let mut out = MemWb {
        ctrl: ex_mem.ctrl,
        op: ex_mem.op,
        alu_out: ex_mem.alu_out,
        dest: ex_mem.dest,
        valid: ex_mem.valid,
        halt: ex_mem.halt,
        ..MemWb::default()
    };

    if ex_mem.is_live() {
        if ex_mem.ctrl.mem_read {
            out.mem_data = mem.load_word(ex_mem.alu_out as u32)?;
        }
        if ex_mem.ctrl.mem_write {
            mem.store_word(ex_mem.alu_out as u32, ex_mem.store_data)?;
        }
    }

    Ok(out)
}
