//! Final-state rendering.
//!
//! Renders the architectural state left behind by a finished simulation:
//! 1. **Registers:** All 32 registers with their MIPS ABI names, in decimal
//!    and hex, four per block.
//! 2. **Memory:** The first 64 data words in 4-word hex rows.
//!
//! Rendering is a presentation concern; the pipeline only exposes read-only
//! views. The `render_*` functions return strings so callers (and tests)
//! can direct the output wherever they like.

use crate::common::constants::{reg_name, DUMP_WORDS, NUM_REGS, WORD_BYTES};

fn header(out: &mut String, title: &str) {
    out.push_str(&"=".repeat(60));
    out.push('\n');
    out.push_str(&format!(" {}\n", title));
    out.push_str(&"=".repeat(60));
    out.push('\n');
}

/// Renders the final register file, four registers per block.
pub fn render_registers(regs: &[i32; NUM_REGS]) -> String {
    let mut out = String::new();
    header(&mut out, "FINAL REGISTER FILE");

    for block in (0..NUM_REGS).step_by(4) {
        out.push_str(&format!(
            "{:<8}{:<8}{:<12}{:<12}\n",
            "Reg", "Name", "Decimal", "Hex"
        ));
        for i in block..(block + 4).min(NUM_REGS) {
            out.push_str(&format!(
                "{:<8}{:<8}{:<12}0x{:08x}\n",
                format!("${}", i),
                reg_name(i),
                regs[i],
                regs[i] as u32
            ));
        }
        out.push('\n');
    }
    out
}

/// Renders the first 64 memory words in 4-word rows.
pub fn render_memory(mem: &[i32]) -> String {
    let words = DUMP_WORDS.min(mem.len());
    let mut out = String::new();
    header(&mut out, "FINAL MEMORY CONTENTS");
    out.push_str(&format!(
        "First {} bytes ({} words) from 0x00000000:\n",
        words as u32 * WORD_BYTES,
        words
    ));

    for row in (0..words).step_by(4) {
        out.push_str(&format!("0x{:08x}:", row as u32 * WORD_BYTES));
        for &word in &mem[row..(row + 4).min(words)] {
            out.push_str(&format!(" {:08x}", word as u32));
        }
        out.push('\n');
    }
    out
}

/// Prints the final register file and memory contents to stdout.
pub fn print_final_state(regs: &[i32; NUM_REGS], mem: &[i32]) {
    print!("{}", render_registers(regs));
    print!("{}", render_memory(mem));
}
