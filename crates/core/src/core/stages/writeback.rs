//! Writeback (WB) stage.
//!
//! The final stage of the pipeline: commits results to the register file,
//! updates retirement statistics, and reports HALT retirement so the driver
//! can terminate the machine.

use crate::common::reg::RegisterFile;
use crate::core::latches::MemWb;
use crate::stats::SimStats;

/// Executes the writeback stage of the pipeline.
///
/// Writes the loaded data or ALU result to the destination register when
/// the control bundle enables it, counts the retirement, and returns whether
/// the retiring entry carried the HALT instruction.
pub fn wb_stage(mem_wb: &MemWb, regs: &mut RegisterFile, stats: &mut SimStats) -> bool {
    if !mem_wb.is_live() {
        return false;
    }

    if mem_wb.ctrl.reg_write && mem_wb.dest != 0 {
        let val = if mem_wb.ctrl.mem_to_reg {
            mem_wb.mem_data
        } else {
            mem_wb.alu_out
        };
        regs.write(mem_wb.dest, val);
    }

    stats.instructions_retired += 1;
    if mem_wb.ctrl.mem_read {
        stats.inst_load += 1;
    } else if mem_wb.ctrl.mem_write {
        stats.inst_store += 1;
    } else if mem_wb.ctrl.branch || mem_wb.ctrl.jump {
        stats.inst_control += 1;
    } else {
        stats.inst_alu += 1;
    }

    mem_wb.halt
}
