//! Arithmetic logic unit.
//!
//! This module implements the integer ALU used in the execute stage. It
//! covers addition, subtraction, bitwise logic, signed comparison, low-word
//! multiplication, and logical shifts. All arithmetic wraps in two's
//! complement; shift counts are masked to 5 bits.

use crate::core::signals::AluOp;

/// Integer arithmetic logic unit.
///
/// Stateless; every operation is a pure function of its operands.
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// For shifts, `a` is the value shifted and `b` the shift count; the
    /// count is masked to 5 bits and the value is reinterpreted as unsigned
    /// for the shift itself.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform.
    /// * `a`  - First operand.
    /// * `b`  - Second operand (immediate, register, or shift count).
    pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::And => a & b,
            AluOp::Or => a | b,
            AluOp::Slt => (a < b) as i32,
            AluOp::Mul => a.wrapping_mul(b),
            AluOp::Sll => ((a as u32) << (b & 31)) as i32,
            AluOp::Srl => ((a as u32) >> (b & 31)) as i32,
        }
    }
}
