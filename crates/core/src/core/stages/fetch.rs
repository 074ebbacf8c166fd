//! Instruction fetch (IF) stage.
//!
//! Indexes the program with the PC and produces the new IF/ID entry. A PC
//! past the end of the program produces an invalid entry and leaves the PC
//! unchanged, letting the pipeline drain naturally.

use crate::core::latches::IfId;
use crate::isa::Instruction;

/// Executes the fetch stage of the pipeline.
///
/// Returns the new IF/ID entry and the next PC. `pc` is always a multiple
/// of four, so the instruction index is simply `pc / 4`.
pub fn fetch_stage(pc: u32, program: &[Instruction]) -> (IfId, u32) {
    let idx = (pc / 4) as usize;
    if idx < program.len() {
        let if_id = IfId {
            instr: program[idx],
            pc,
            valid: true,
        };
        (if_id, pc.wrapping_add(4))
    } else {
        (IfId::default(), pc)
    }
}
