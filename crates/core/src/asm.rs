//! Assembly-text parser.
//!
//! Maps textual mnemonics to decoded [`Instruction`] records. This is a
//! front-end collaborator of the pipeline: the core itself only ever sees
//! decoded records. It provides:
//! 1. **Strict parsing:** [`parse_line`] surfaces [`DecodeError`] for
//!    unknown mnemonics and malformed operands.
//! 2. **Lenient parsing:** [`parse_program`] maps failing lines to NOP so a
//!    whole source file always yields a runnable program.
//!
//! Accepted forms (mnemonics are case-insensitive, the `$` register sigil
//! is optional, `#` starts a comment line):
//!
//! ```text
//! ADD  $rd, $rs, $rt        SUB / MUL / AND / OR / SLT likewise
//! SLL  $rd, $rt, shamt      SRL likewise
//! ADDI $rt, $rs, imm
//! LW   $rt, imm($rs)        SW likewise
//! BEQ  $rs, $rt, offset     BNE likewise
//! J    addr
//! HALT
//! NOP
//! ```

use crate::common::error::DecodeError;
use crate::isa::{Instruction, Opcode};

/// Parses a single register token such as `$8` or `8`.
fn parse_reg(tok: &str, line: &str) -> Result<u8, DecodeError> {
    let digits = tok.strip_prefix('$').unwrap_or(tok);
    match digits.parse::<u8>() {
        Ok(n) if n < 32 => Ok(n),
        _ => Err(DecodeError::BadRegister(line.to_string())),
    }
}

/// Parses a signed 16-bit immediate token.
fn parse_imm(tok: &str, line: &str) -> Result<i16, DecodeError> {
    tok.parse::<i16>()
        .map_err(|_| DecodeError::BadOperand(line.to_string()))
}

/// Splits a `imm($rs)` memory operand into its parts.
fn parse_mem_operand(tok: &str, line: &str) -> Result<(i16, u8), DecodeError> {
    let open = tok
        .find('(')
        .ok_or_else(|| DecodeError::BadOperand(line.to_string()))?;
    let close = tok
        .rfind(')')
        .filter(|&c| c > open)
        .ok_or_else(|| DecodeError::BadOperand(line.to_string()))?;

    let imm_part = tok[..open].trim();
    let imm = if imm_part.is_empty() {
        0
    } else {
        parse_imm(imm_part, line)?
    };
    let rs = parse_reg(tok[open + 1..close].trim(), line)?;
    Ok((imm, rs))
}

/// Parses one source line.
///
/// Returns `Ok(None)` for blank and comment lines.
///
/// # Errors
///
/// [`DecodeError`] for unknown mnemonics, bad register tokens, and operands
/// of the wrong shape or count.
pub fn parse_line(line: &str) -> Result<Option<Instruction>, DecodeError> {
    let text = line.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let (head, rest) = match text.find(char::is_whitespace) {
        Some(i) => (&text[..i], &text[i..]),
        None => (text, ""),
    };

    let op = match head.to_ascii_uppercase().as_str() {
        "ADD" => Opcode::Add,
        "SUB" => Opcode::Sub,
        "AND" => Opcode::And,
        "OR" => Opcode::Or,
        "SLT" => Opcode::Slt,
        "ADDI" => Opcode::Addi,
        "LW" => Opcode::Lw,
        "SW" => Opcode::Sw,
        "BEQ" => Opcode::Beq,
        "BNE" => Opcode::Bne,
        "J" => Opcode::J,
        "MUL" => Opcode::Mul,
        "SLL" => Opcode::Sll,
        "SRL" => Opcode::Srl,
        "HALT" => Opcode::Halt,
        "NOP" => Opcode::Nop,
        _ => return Err(DecodeError::UnknownMnemonic(line.to_string())),
    };

    let ops: Vec<&str> = rest
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let wrong_shape = || DecodeError::BadOperand(line.to_string());

    let mut ins = Instruction {
        op,
        ..Instruction::default()
    };

    match op {
        Opcode::Add | Opcode::Sub | Opcode::And | Opcode::Or | Opcode::Slt | Opcode::Mul => {
            match ops.as_slice() {
                [rd, rs, rt] => {
                    ins.rd = parse_reg(rd, line)?;
                    ins.rs = parse_reg(rs, line)?;
                    ins.rt = parse_reg(rt, line)?;
                }
                _ => return Err(wrong_shape()),
            }
        }
        Opcode::Sll | Opcode::Srl => match ops.as_slice() {
            [rd, rt, shamt] => {
                ins.rd = parse_reg(rd, line)?;
                ins.rt = parse_reg(rt, line)?;
                ins.shamt = match shamt.parse::<u8>() {
                    Ok(n) if n < 32 => n,
                    _ => return Err(wrong_shape()),
                };
            }
            _ => return Err(wrong_shape()),
        },
        Opcode::Addi => match ops.as_slice() {
            [rt, rs, imm] => {
                ins.rt = parse_reg(rt, line)?;
                ins.rs = parse_reg(rs, line)?;
                ins.imm = parse_imm(imm, line)?;
            }
            _ => return Err(wrong_shape()),
        },
        Opcode::Lw | Opcode::Sw => match ops.as_slice() {
            [rt, mem] => {
                ins.rt = parse_reg(rt, line)?;
                let (imm, rs) = parse_mem_operand(mem, line)?;
                ins.imm = imm;
                ins.rs = rs;
            }
            _ => return Err(wrong_shape()),
        },
        Opcode::Beq | Opcode::Bne => match ops.as_slice() {
            [rs, rt, off] => {
                ins.rs = parse_reg(rs, line)?;
                ins.rt = parse_reg(rt, line)?;
                ins.imm = parse_imm(off, line)?;
            }
            _ => return Err(wrong_shape()),
        },
        Opcode::J => match ops.as_slice() {
            [addr] => {
                ins.addr = addr.parse::<u32>().map_err(|_| wrong_shape())? & 0x03FF_FFFF;
            }
            _ => return Err(wrong_shape()),
        },
        Opcode::Halt | Opcode::Nop => {
            if !ops.is_empty() {
                return Err(wrong_shape());
            }
        }
    }

    Ok(Some(ins))
}

/// Parses a whole source text into a program.
///
/// Lines that fail to parse are mapped to NOP in place, preserving the
/// index-to-PC correspondence; blank and comment lines are skipped. The
/// pipeline therefore only ever sees valid records.
pub fn parse_program(source: &str) -> Vec<Instruction> {
    let mut program = Vec::new();
    for line in source.lines() {
        match parse_line(line) {
            Ok(Some(ins)) => program.push(ins),
            Ok(None) => {}
            Err(_) => program.push(Instruction::default()),
        }
    }
    program
}
