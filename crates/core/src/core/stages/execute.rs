//! Instruction execute (EX) stage.
//!
//! Resolves forwarded operands, runs the ALU, and evaluates branch and jump
//! outcomes. Branch targets are PC-relative word offsets; jump targets
//! combine the upper PC bits with the 26-bit word index carried in the
//! immediate slot.

use crate::core::hazards::forward_operands;
use crate::core::latches::{ExMem, IdEx, MemWb};
use crate::core::signals::AluOp;
use crate::core::units::Alu;
use crate::isa::Opcode;

/// Executes the execute stage of the pipeline.
///
/// Builds the new EX/MEM entry from ID/EX. The destination register is `rd`
/// when the control bundle selects it, otherwise `rt`. Store data is the
/// forwarded `rt` value regardless of the ALU inputs, so a store always
/// writes the freshest producer result.
pub fn execute_stage(id_ex: &IdEx, ex_mem: &ExMem, mem_wb: &MemWb) -> ExMem {
    let mut out = ExMem {
        ctrl: id_ex.ctrl,
        op: id_ex.op,
        dest: if id_ex.ctrl.reg_dst { id_ex.rd } else { id_ex.rt },
        valid: id_ex.valid,
        halt: id_ex.halt,
        ..ExMem::default()
    };

    if !id_ex.is_live() {
        return out;
    }

    let (fwd_a, fwd_b) = forward_operands(id_ex, ex_mem, mem_wb);
    out.store_data = fwd_b;

    // Shifts move the forwarded rt value by the shamt carried in the
    // immediate slot; everything else is the usual A op (imm | B) shape.
    out.alu_out = match id_ex.ctrl.alu {
        AluOp::Sll | AluOp::Srl => Alu::execute(id_ex.ctrl.alu, fwd_b, id_ex.imm & 31),
        op => {
            let b = if id_ex.ctrl.alu_src { id_ex.imm } else { fwd_b };
            Alu::execute(op, fwd_a, b)
        }
    };

    if id_ex.ctrl.branch {
        let eq = fwd_a == fwd_b;
        out.branch_taken = match id_ex.op {
            Opcode::Beq => eq,
            Opcode::Bne => !eq,
            _ => false,
        };
        out.branch_target = id_ex
            .pc
            .wrapping_add(4)
            .wrapping_add((id_ex.imm << 2) as u32);
    }

    if id_ex.ctrl.jump {
        out.branch_taken = true;
        out.branch_target = (id_ex.pc & 0xF000_0000) | (((id_ex.imm as u32) & 0x03FF_FFFF) << 2);
    }

    out
}
