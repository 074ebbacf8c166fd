//! Control decoder tests.
//!
//! Verifies the opcode-to-control-signal table and the decode stage's
//! operand handling.

use mipsim_core::common::reg::RegisterFile;
use mipsim_core::core::latches::IfId;
use mipsim_core::core::signals::AluOp;
use mipsim_core::core::stages::decode::{decode_op, decode_stage};
use mipsim_core::isa::Opcode;

use crate::common;

// ══════════════════════════════════════════════════════════
// 1. Control table
// ══════════════════════════════════════════════════════════

#[test]
fn r_type_writes_rd_from_alu() {
    for (op, alu) in [
        (Opcode::Add, AluOp::Add),
        (Opcode::Sub, AluOp::Sub),
        (Opcode::And, AluOp::And),
        (Opcode::Or, AluOp::Or),
        (Opcode::Slt, AluOp::Slt),
        (Opcode::Mul, AluOp::Mul),
    ] {
        let c = decode_op(op);
        assert!(c.reg_write && c.reg_dst, "{op} writes rd");
        assert!(!c.alu_src && !c.mem_read && !c.mem_write, "{op} is pure ALU");
        assert!(!c.branch && !c.jump && !c.is_nop);
        assert_eq!(c.alu, alu);
    }
}

#[test]
fn addi_uses_immediate_and_writes_rt() {
    let c = decode_op(Opcode::Addi);
    assert!(c.reg_write && c.alu_src && !c.reg_dst);
    assert_eq!(c.alu, AluOp::Add);
}

#[test]
fn load_reads_memory_into_rt() {
    let c = decode_op(Opcode::Lw);
    assert!(c.reg_write && c.mem_read && c.mem_to_reg && c.alu_src);
    assert!(!c.reg_dst && !c.mem_write);
    assert_eq!(c.alu, AluOp::Add, "address generation is an add");
}

#[test]
fn store_writes_memory_only() {
    let c = decode_op(Opcode::Sw);
    assert!(c.mem_write && c.alu_src);
    assert!(!c.reg_write && !c.mem_read && !c.mem_to_reg);
}

#[test]
fn branches_compare_without_writing() {
    for op in [Opcode::Beq, Opcode::Bne] {
        let c = decode_op(op);
        assert!(c.branch, "{op} is a branch");
        assert!(!c.reg_write && !c.jump && !c.alu_src);
        assert_eq!(c.alu, AluOp::Sub);
    }
}

#[test]
fn jump_drives_only_the_jump_signal() {
    let c = decode_op(Opcode::J);
    assert!(c.jump);
    assert!(!c.reg_write && !c.branch && !c.mem_read && !c.mem_write);
}

#[test]
fn shifts_write_rd_using_shamt() {
    for (op, alu) in [(Opcode::Sll, AluOp::Sll), (Opcode::Srl, AluOp::Srl)] {
        let c = decode_op(op);
        assert!(c.reg_write && c.reg_dst && c.alu_src, "{op} writes rd from shamt");
        assert_eq!(c.alu, alu);
    }
}

#[test]
fn halt_and_nop_drive_nothing() {
    for op in [Opcode::Halt, Opcode::Nop] {
        let c = decode_op(op);
        assert!(!c.reg_write && !c.mem_read && !c.mem_write);
        assert!(!c.branch && !c.jump);
    }
    assert!(decode_op(Opcode::Nop).is_nop);
    assert!(!decode_op(Opcode::Halt).is_nop, "HALT is live, not a bubble");
}

// ══════════════════════════════════════════════════════════
// 2. Decode stage
// ══════════════════════════════════════════════════════════

#[test]
fn decode_reads_register_values() {
    let mut regs = RegisterFile::new();
    regs.write(8, 5);
    regs.write(9, 7);

    let if_id = IfId {
        instr: common::add(10, 8, 9),
        pc: 12,
        valid: true,
    };
    let id_ex = decode_stage(&if_id, &regs);

    assert!(id_ex.valid);
    assert_eq!((id_ex.rs, id_ex.rt, id_ex.rd), (8, 9, 10));
    assert_eq!((id_ex.rs_val, id_ex.rt_val), (5, 7));
    assert_eq!(id_ex.pc, 12);
}

#[test]
fn decode_applies_register_zero_rule() {
    let regs = RegisterFile::new();
    let if_id = IfId {
        instr: common::add(1, 0, 0),
        pc: 0,
        valid: true,
    };
    let id_ex = decode_stage(&if_id, &regs);
    assert_eq!((id_ex.rs_val, id_ex.rt_val), (0, 0));
}

#[test]
fn decode_places_immediate_per_opcode() {
    let regs = RegisterFile::new();
    let entry = |instr| IfId {
        instr,
        pc: 0,
        valid: true,
    };

    assert_eq!(decode_stage(&entry(common::addi(8, 0, -5)), &regs).imm, -5);
    assert_eq!(decode_stage(&entry(common::j(3)), &regs).imm, 3);
    assert_eq!(decode_stage(&entry(common::sll(11, 10, 7)), &regs).imm, 7);
}

#[test]
fn decode_marks_halt() {
    let regs = RegisterFile::new();
    let if_id = IfId {
        instr: common::halt(),
        pc: 0,
        valid: true,
    };
    assert!(decode_stage(&if_id, &regs).halt);
}

#[test]
fn invalid_if_id_decodes_to_bubble() {
    let regs = RegisterFile::new();
    let id_ex = decode_stage(&IfId::default(), &regs);
    assert!(!id_ex.is_live());
    assert!(!id_ex.halt);
}
