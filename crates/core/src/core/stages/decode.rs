//! Instruction decode (ID) stage.
//!
//! Maps an opcode to the control signals that drive EX, MEM, and WB, reads
//! the source operands from the register file, and places the immediate the
//! execute stage will consume (16-bit immediate, shift amount, or 26-bit
//! jump word index, depending on the opcode).

use crate::common::reg::RegisterFile;
use crate::core::latches::{IdEx, IfId};
use crate::core::signals::{AluOp, ControlSignals};
use crate::isa::Opcode;

/// Returns the control bundle for an opcode.
///
/// NOP and HALT drive nothing; HALT is additionally marked for the halt
/// tracker when the ID/EX entry is built.
pub fn decode_op(op: Opcode) -> ControlSignals {
    let mut c = ControlSignals::default();
    match op {
        Opcode::Add => {
            c.reg_write = true;
            c.reg_dst = true;
            c.alu = AluOp::Add;
        }
        Opcode::Sub => {
            c.reg_write = true;
            c.reg_dst = true;
            c.alu = AluOp::Sub;
        }
        Opcode::And => {
            c.reg_write = true;
            c.reg_dst = true;
            c.alu = AluOp::And;
        }
        Opcode::Or => {
            c.reg_write = true;
            c.reg_dst = true;
            c.alu = AluOp::Or;
        }
        Opcode::Slt => {
            c.reg_write = true;
            c.reg_dst = true;
            c.alu = AluOp::Slt;
        }
        Opcode::Addi => {
            c.reg_write = true;
            c.alu_src = true;
            c.alu = AluOp::Add;
        }
        Opcode::Lw => {
            c.reg_write = true;
            c.mem_read = true;
            c.mem_to_reg = true;
            c.alu_src = true;
            c.alu = AluOp::Add;
        }
        Opcode::Sw => {
            c.mem_write = true;
            c.alu_src = true;
            c.alu = AluOp::Add;
        }
        Opcode::Beq | Opcode::Bne => {
            c.branch = true;
            c.alu = AluOp::Sub;
        }
        Opcode::J => {
            c.jump = true;
        }
        Opcode::Mul => {
            c.reg_write = true;
            c.reg_dst = true;
            c.alu = AluOp::Mul;
        }
        Opcode::Sll => {
            c.reg_write = true;
            c.alu_src = true;
            c.reg_dst = true;
            c.alu = AluOp::Sll;
        }
        Opcode::Srl => {
            c.reg_write = true;
            c.alu_src = true;
            c.reg_dst = true;
            c.alu = AluOp::Srl;
        }
        Opcode::Halt => {}
        Opcode::Nop => {
            c.is_nop = true;
        }
    }
    c
}

/// Executes the decode stage of the pipeline.
///
/// Builds the new ID/EX entry from the instruction in IF/ID. An invalid
/// IF/ID produces a bubble. The register-0 rule is applied by the register
/// file itself on read.
pub fn decode_stage(if_id: &IfId, regs: &RegisterFile) -> IdEx {
    if !if_id.valid {
        return IdEx {
            ctrl: ControlSignals::nop(),
            ..IdEx::default()
        };
    }

    let ins = if_id.instr;
    let ctrl = decode_op(ins.op);

    // J carries its 26-bit word index and SLL/SRL their shamt in the same
    // immediate slot; the execute stage interprets it per the control bundle.
    let imm = match ins.op {
        Opcode::J => ins.addr as i32,
        Opcode::Sll | Opcode::Srl => ins.shamt as i32,
        _ => ins.imm as i32,
    };

    IdEx {
        ctrl,
        op: ins.op,
        pc: if_id.pc,
        rs: ins.rs as usize,
        rt: ins.rt as usize,
        rd: ins.rd as usize,
        rs_val: regs.read(ins.rs as usize),
        rt_val: regs.read(ins.rt as usize),
        imm,
        valid: true,
        halt: ins.op == Opcode::Halt,
    }
}
