//! Pipeline core.
//!
//! This module owns the microarchitectural state and orchestrates one clock
//! cycle at a time:
//! 1. **State:** Register file, word memory, PC, and the four inter-stage
//!    latches.
//! 2. **Driver:** Per-cycle evaluation in WB → MEM → EX → ID → IF order over
//!    the current latch snapshot, followed by an atomic commit.
//! 3. **Hazards:** Load-use stall arbitration and branch/jump flush.
//! 4. **Termination:** The HALT retirement state machine.

/// Data hazard detection and operand forwarding.
pub mod hazards;
/// Inter-stage latch entry types.
pub mod latches;
/// Control signals and ALU operation types.
pub mod signals;
/// Per-stage evaluation functions.
pub mod stages;
/// Functional units (ALU).
pub mod units;

use crate::common::constants::MAX_RUN_CYCLES;
use crate::common::error::SimError;
use crate::common::reg::RegisterFile;
use crate::config::SimConfig;
use crate::core::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::signals::ControlSignals;
use crate::isa::Instruction;
use crate::mem::WordMemory;
use crate::stats::SimStats;
use stages::{decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage};

/// HALT retirement tracker.
///
/// `Seen` is latched when a decoded HALT leaves the decode stage;
/// `Committed` when that HALT retires through writeback. `Committed` is
/// terminal: further `step` calls are no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HaltState {
    /// No HALT has left decode yet.
    Running,
    /// A HALT is in flight between decode and writeback.
    Seen,
    /// The HALT has retired; the machine is stopped.
    Committed,
}

/// The five-stage pipeline driver.
///
/// Owns the architectural state (registers, memory, PC) and the four
/// inter-stage latches. External readers may inspect the read-only views
/// between `step` invocations; within a cycle every stage reads the latch
/// snapshot from the previous commit, modelling edge-triggered hardware.
pub struct Pipeline {
    program: Vec<Instruction>,
    regs: RegisterFile,
    mem: WordMemory,
    pc: u32,
    trace: bool,
    max_cycles: u64,
    halt: HaltState,

    if_id: IfId,
    id_ex: IdEx,
    ex_mem: ExMem,
    mem_wb: MemWb,

    stats: SimStats,
}

impl Pipeline {
    /// Creates a pipeline over `program` with `memory_words` words of data
    /// memory.
    ///
    /// Registers and memory start zeroed, the PC at 0, and all four latches
    /// in the bubble state. Instruction `i` of the program sits at byte
    /// address `4 * i`.
    pub fn new(program: Vec<Instruction>, memory_words: usize, trace: bool) -> Self {
        Self {
            program,
            regs: RegisterFile::new(),
            mem: WordMemory::new(memory_words),
            pc: 0,
            trace,
            max_cycles: MAX_RUN_CYCLES,
            halt: HaltState::Running,
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            stats: SimStats::default(),
        }
    }

    /// Creates a pipeline from a configuration.
    pub fn from_config(program: Vec<Instruction>, config: &SimConfig) -> Self {
        let mut p = Self::new(program, config.memory_words, config.trace);
        p.max_cycles = config.max_cycles;
        p
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// Always increments the cycle counter unless the machine has already
    /// halted. Stages are evaluated consumers-first over the latch snapshot
    /// from the previous commit; the drafted latch values and the PC are
    /// committed together at the end of the cycle.
    ///
    /// # Errors
    ///
    /// A misaligned or out-of-bounds data access in the MEM stage aborts the
    /// simulation with a [`SimError`] carrying the faulting address and
    /// cycle number.
    pub fn step(&mut self) -> Result<(), SimError> {
        if self.is_halted() {
            return Ok(());
        }
        self.stats.cycles += 1;

        // WB: commit the oldest instruction.
        if wb_stage(&self.mem_wb, &mut self.regs, &mut self.stats) {
            self.halt = HaltState::Committed;
        }

        // MEM: data access for the instruction one behind.
        let new_mem_wb =
            mem_stage(&self.ex_mem, &mut self.mem).map_err(|e| e.at_cycle(self.stats.cycles))?;

        // EX: ALU work and branch/jump resolution.
        let new_ex_mem = execute_stage(&self.id_ex, &self.ex_mem, &self.mem_wb);

        // A taken branch or a jump redirects the IF below and squashes the
        // one speculatively fetched instruction sitting in IF/ID.
        let flush = new_ex_mem.is_live()
            && ((new_ex_mem.ctrl.branch && new_ex_mem.branch_taken) || new_ex_mem.ctrl.jump);

        // ID: decode the fetched instruction, unless it was just squashed.
        let mut new_id_ex = if flush {
            if self.if_id.valid {
                self.stats.squashed_control += 1;
            }
            IdEx {
                ctrl: ControlSignals::nop(),
                ..IdEx::default()
            }
        } else {
            decode_stage(&self.if_id, &self.regs)
        };

        // Load-use hazard: the load still in EX this cycle cannot feed the
        // instruction being decoded. A flush overrides a stall.
        let stall = !flush && hazards::need_stall_load_use(&self.id_ex, &self.if_id);

        // IF: fetch, honoring redirect and stall.
        let mut next_pc = if flush {
            new_ex_mem.branch_target
        } else {
            self.pc
        };
        let new_if_id = if stall {
            new_id_ex = IdEx::bubble();
            self.stats.stalls_data += 1;
            self.if_id
        } else {
            let (fetched, pc_after) = fetch_stage(next_pc, &self.program);
            next_pc = pc_after;
            fetched
        };

        if new_id_ex.halt && self.halt == HaltState::Running {
            self.halt = HaltState::Seen;
        }

        // Commit all latches and the PC together.
        self.mem_wb = new_mem_wb;
        self.ex_mem = new_ex_mem;
        self.id_ex = new_id_ex;
        self.if_id = new_if_id;
        self.pc = next_pc;

        if self.trace {
            eprintln!("{}", self.trace_line());
        }
        Ok(())
    }

    /// Executes until the machine halts.
    ///
    /// Also returns once the pipeline has fully drained with nothing left to
    /// fetch (a program that never issues HALT), or after the safety cycle
    /// cap for programs that redirect forever.
    ///
    /// # Errors
    ///
    /// Propagates the first [`SimError`] raised by `step`.
    pub fn run(&mut self) -> Result<(), SimError> {
        let limit = self.stats.cycles.saturating_add(self.max_cycles);
        while !self.is_halted() && !self.is_drained() && self.stats.cycles < limit {
            self.step()?;
        }
        Ok(())
    }

    /// Whether the HALT instruction has retired through writeback.
    pub fn is_halted(&self) -> bool {
        self.halt == HaltState::Committed
    }

    /// Whether all latches are bubbles and the PC is past the program.
    fn is_drained(&self) -> bool {
        !self.if_id.valid
            && !self.id_ex.is_live()
            && !self.ex_mem.is_live()
            && !self.mem_wb.is_live()
            && (self.pc / 4) as usize >= self.program.len()
    }

    /// Total clock cycles elapsed.
    pub fn cycles(&self) -> u64 {
        self.stats.cycles
    }

    /// Current program counter.
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// Read-only view of the 32 architectural registers.
    pub fn regs(&self) -> &[i32; 32] {
        self.regs.snapshot()
    }

    /// Read-only view of the data memory word array.
    pub fn mem(&self) -> &[i32] {
        self.mem.raw()
    }

    /// Simulation statistics collected so far.
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Current HALT tracker state.
    pub fn halt_state(&self) -> HaltState {
        self.halt
    }

    /// Renders the per-cycle trace line for the current latch contents.
    ///
    /// One line is written to stderr per `step` when tracing is enabled;
    /// this accessor lets tests assert on the format without capturing the
    /// stream.
    pub fn trace_line(&self) -> String {
        let dash = "-";
        let if_col = if self.if_id.valid {
            self.if_id.instr.op.mnemonic()
        } else {
            dash
        };
        let id_col = if self.id_ex.is_live() {
            self.id_ex.op.mnemonic()
        } else {
            dash
        };
        let ex_col = if self.ex_mem.is_live() {
            self.ex_mem.op.mnemonic()
        } else {
            dash
        };
        let mem_col = if self.mem_wb.is_live() {
            self.mem_wb.op.mnemonic()
        } else {
            dash
        };
        format!(
            "Cyc {} | PC=0x{:x} | IF: {} | ID: {} | EX: {} | MEM: {}",
            self.stats.cycles, self.pc, if_col, id_col, ex_col, mem_col
        )
    }
}
