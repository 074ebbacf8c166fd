//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the four edge-triggered registers carried between the
//! five pipeline stages: IF/ID, ID/EX, EX/MEM, and MEM/WB.
//!
//! Each latch is either a live instruction (`valid` set and control not
//! marked no-op) or a bubble. Bubbles produce no architectural effect.
//! `Default` is the bubble state, which is also the reset state of all four
//! latches at construction.

use crate::core::signals::ControlSignals;
use crate::isa::{Instruction, Opcode};

/// Entry in the IF/ID latch (fetch to decode).
///
/// Carries the fetched instruction record and its program counter.
#[derive(Clone, Copy, Default, Debug)]
pub struct IfId {
    /// The fetched instruction.
    pub instr: Instruction,
    /// Program counter of the instruction.
    pub pc: u32,
    /// Whether this entry holds a live fetched instruction.
    pub valid: bool,
}

/// Entry in the ID/EX latch (decode to execute).
///
/// Carries decoded control, register indices, register values read in ID,
/// and the immediate selected for this opcode (16-bit immediate, shift
/// amount, or 26-bit jump word index).
#[derive(Clone, Copy, Default, Debug)]
pub struct IdEx {
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
    /// Operation, kept for branch discrimination and tracing.
    pub op: Opcode,
    /// Program counter of the instruction.
    pub pc: u32,
    /// First source register index.
    pub rs: usize,
    /// Second source register index.
    pub rt: usize,
    /// Destination register index for R-type operations.
    pub rd: usize,
    /// Value read from `rs` in decode.
    pub rs_val: i32,
    /// Value read from `rt` in decode.
    pub rt_val: i32,
    /// Immediate operand as placed by decode.
    pub imm: i32,
    /// Whether this entry holds a live instruction.
    pub valid: bool,
    /// Set when this entry carries the HALT instruction.
    pub halt: bool,
}

impl IdEx {
    /// A bubble inserted into ID/EX during a load-use stall.
    pub fn bubble() -> Self {
        Self {
            ctrl: ControlSignals::nop(),
            valid: true,
            ..Self::default()
        }
    }
}

/// Entry in the EX/MEM latch (execute to memory).
///
/// Carries the ALU result, the forwarded store data, the resolved
/// destination register, and the branch outcome computed in EX.
#[derive(Clone, Copy, Default, Debug)]
pub struct ExMem {
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
    /// Operation, kept for tracing.
    pub op: Opcode,
    /// ALU result (also the memory address for loads and stores).
    pub alu_out: i32,
    /// Forwarded `rt` value, written to memory by a store.
    pub store_data: i32,
    /// Resolved destination register index.
    pub dest: usize,
    /// Whether this instruction redirects the PC (taken branch, or any jump).
    pub branch_taken: bool,
    /// Redirect target for a taken branch or a jump.
    pub branch_target: u32,
    /// Whether this entry holds a live instruction.
    pub valid: bool,
    /// Set when this entry carries the HALT instruction.
    pub halt: bool,
}

/// Entry in the MEM/WB latch (memory to writeback).
///
/// Carries the ALU result and any loaded data toward the register commit.
#[derive(Clone, Copy, Default, Debug)]
pub struct MemWb {
    /// Control signals for the writeback stage.
    pub ctrl: ControlSignals,
    /// Operation, kept for tracing.
    pub op: Opcode,
    /// ALU result (for non-load instructions).
    pub alu_out: i32,
    /// Data loaded from memory (for loads).
    pub mem_data: i32,
    /// Destination register index.
    pub dest: usize,
    /// Whether this entry holds a live instruction.
    pub valid: bool,
    /// Set when this entry carries the HALT instruction.
    pub halt: bool,
}

impl IfId {
    /// Whether the latch holds a live, architecturally visible instruction.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.valid && self.instr.op != Opcode::Nop
    }
}

impl IdEx {
    /// Whether the latch holds a live, architecturally visible instruction.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.valid && !self.ctrl.is_nop
    }
}

impl ExMem {
    /// Whether the latch holds a live, architecturally visible instruction.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.valid && !self.ctrl.is_nop
    }
}

impl MemWb {
    /// Whether the latch holds a live, architecturally visible instruction.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.valid && !self.ctrl.is_nop
    }
}
