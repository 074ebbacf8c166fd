//! Data hazard detection and forwarding.
//!
//! This module implements the logic that keeps the pipeline consistent when
//! data dependencies exist between in-flight instructions:
//! 1. **Hazard Detection:** Identifies load-use hazards that require a
//!    one-cycle stall with bubble insertion.
//! 2. **Operand Forwarding:** Resolves read-after-write hazards by bypassing
//!    the register file from the EX/MEM and MEM/WB latches.

use crate::core::latches::{ExMem, IdEx, IfId, MemWb};

/// Checks whether a pipeline stall is needed due to a load-use hazard.
///
/// A load-use hazard occurs when the instruction being decoded depends on
/// data still being loaded by the instruction currently in execute. Loaded
/// data is not available until the end of MEM, so forwarding cannot bridge
/// a distance of one; the consumer must wait a cycle.
///
/// A load's destination is always its `rt` field. Loads targeting `$0` never
/// stall.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX latch holding the instruction currently in execute.
/// * `if_id` - The IF/ID latch holding the instruction currently in decode.
pub fn need_stall_load_use(id_ex: &IdEx, if_id: &IfId) -> bool {
    if !id_ex.is_live() || !id_ex.ctrl.mem_read {
        return false;
    }

    let load_dest = id_ex.rt;
    if load_dest == 0 || !if_id.valid {
        return false;
    }

    let next_rs = if_id.instr.rs as usize;
    let next_rt = if_id.instr.rt as usize;

    load_dest == next_rs || load_dest == next_rt
}

/// Forwards register values from later pipeline stages into execute.
///
/// Returns the `(rs, rt)` operand pair for the instruction in ID/EX,
/// substituting results still in flight for the stale values read from the
/// register file in decode. MEM/WB candidates are applied first and EX/MEM
/// candidates second, so the younger result wins when both stages write the
/// same register. EX/MEM entries that are loads never forward: their ALU
/// output is an address, and the load-use stall guarantees no consumer
/// reaches execute while its producer load sits in EX/MEM.
///
/// # Arguments
///
/// * `id_ex` - The entry requiring forwarded operand values.
/// * `ex_mem` - The EX/MEM latch holding the one-cycle-older result.
/// * `mem_wb` - The MEM/WB latch holding the two-cycle-older result.
pub fn forward_operands(id_ex: &IdEx, ex_mem: &ExMem, mem_wb: &MemWb) -> (i32, i32) {
    let mut a = id_ex.rs_val;
    let mut b = id_ex.rt_val;

    if mem_wb.is_live() && mem_wb.ctrl.reg_write && mem_wb.dest != 0 {
        let wb_val = if mem_wb.ctrl.mem_to_reg {
            mem_wb.mem_data
        } else {
            mem_wb.alu_out
        };

        if mem_wb.dest == id_ex.rs {
            a = wb_val;
        }
        if mem_wb.dest == id_ex.rt {
            b = wb_val;
        }
    }

    if ex_mem.is_live() && ex_mem.ctrl.reg_write && ex_mem.dest != 0 && !ex_mem.ctrl.mem_read {
        if ex_mem.dest == id_ex.rs {
            a = ex_mem.alu_out;
        }
        if ex_mem.dest == id_ex.rt {
            b = ex_mem.alu_out;
        }
    }

    (a, b)
}
