//! Opcode set and decoded instruction record.
//!
//! This module defines the data the pipeline operates on:
//! 1. **Opcodes:** The closed set of sixteen MIPS-like operations.
//! 2. **Instruction Record:** The immutable decoded operation with its
//!    operand fields. Fields unused by a given opcode are zero.
//! 3. **Rendering:** Debug-printable mnemonics for tracing and diagnostics.

use std::fmt;

/// The closed set of supported operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Opcode {
    /// `ADD rd, rs, rt` - signed addition.
    Add,
    /// `SUB rd, rs, rt` - signed subtraction.
    Sub,
    /// `AND rd, rs, rt` - bitwise AND.
    And,
    /// `OR rd, rs, rt` - bitwise OR.
    Or,
    /// `SLT rd, rs, rt` - set if less than (signed).
    Slt,
    /// `ADDI rt, rs, imm` - add sign-extended immediate.
    Addi,
    /// `LW rt, imm(rs)` - load word.
    Lw,
    /// `SW rt, imm(rs)` - store word.
    Sw,
    /// `BEQ rs, rt, offset` - branch if equal.
    Beq,
    /// `BNE rs, rt, offset` - branch if not equal.
    Bne,
    /// `J addr` - unconditional jump to a 26-bit word index.
    J,
    /// `MUL rd, rs, rt` - signed multiply, low 32 bits.
    Mul,
    /// `SLL rd, rt, shamt` - shift left logical.
    Sll,
    /// `SRL rd, rt, shamt` - shift right logical.
    Srl,
    /// `HALT` - stop the machine once retired.
    Halt,
    /// `NOP` - no architectural effect.
    #[default]
    Nop,
}

impl Opcode {
    /// Returns the upper-case assembly mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Slt => "SLT",
            Opcode::Addi => "ADDI",
            Opcode::Lw => "LW",
            Opcode::Sw => "SW",
            Opcode::Beq => "BEQ",
            Opcode::Bne => "BNE",
            Opcode::J => "J",
            Opcode::Mul => "MUL",
            Opcode::Sll => "SLL",
            Opcode::Srl => "SRL",
            Opcode::Halt => "HALT",
            Opcode::Nop => "NOP",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// An immutable decoded instruction.
///
/// Produced by the assembler (or constructed directly in tests) and consumed
/// by the pipeline's fetch stage. Fields not used by `op` are zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Instruction {
    /// Operation.
    pub op: Opcode,
    /// First source register index.
    pub rs: u8,
    /// Second source register index (also the load/store data register).
    pub rt: u8,
    /// Destination register index for R-type operations.
    pub rd: u8,
    /// Signed 16-bit immediate, sign-extended on use.
    pub imm: i16,
    /// 26-bit jump target word index (J only).
    pub addr: u32,
    /// 5-bit shift amount (SLL/SRL only).
    pub shamt: u8,
}

impl fmt::Display for Instruction {
    /// Renders a debug mnemonic, e.g. `ADDI $8, $0, 5` or `LW $9, 0($0)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            Opcode::Add | Opcode::Sub | Opcode::And | Opcode::Or | Opcode::Slt | Opcode::Mul => {
                write!(f, "{} ${}, ${}, ${}", self.op, self.rd, self.rs, self.rt)
            }
            Opcode::Sll | Opcode::Srl => {
                write!(f, "{} ${}, ${}, {}", self.op, self.rd, self.rt, self.shamt)
            }
            Opcode::Addi => write!(f, "{} ${}, ${}, {}", self.op, self.rt, self.rs, self.imm),
            Opcode::Lw | Opcode::Sw => {
                write!(f, "{} ${}, {}(${})", self.op, self.rt, self.imm, self.rs)
            }
            Opcode::Beq | Opcode::Bne => {
                write!(f, "{} ${}, ${}, {}", self.op, self.rs, self.rt, self.imm)
            }
            Opcode::J => write!(f, "{} {}", self.op, self.addr),
            Opcode::Halt | Opcode::Nop => f.write_str(self.op.mnemonic()),
        }
    }
}
