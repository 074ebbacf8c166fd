//! Simulation statistics collection and reporting.
//!
//! This module tracks performance counters for the pipeline:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, derived CPI.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, control).
//! 3. **Hazards:** Load-use stall bubbles and control-flow squashes.

/// Simulation statistics tracking all performance counters.
///
/// Bubbles and NOPs never count as retired instructions.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimStats {
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions committed (retired) in writeback.
    pub instructions_retired: u64,

    /// Count of ALU (non-load/store/control) instructions retired.
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of branch and jump instructions retired.
    pub inst_control: u64,

    /// Bubbles inserted to resolve load-use hazards.
    pub stalls_data: u64,
    /// Speculatively fetched instructions squashed by taken branches/jumps.
    pub squashed_control: u64,
}

impl SimStats {
    /// Prints all statistics to stdout.
    pub fn print(&self) {
        let instr = self.instructions_retired.max(1);
        let cpi = self.cycles as f64 / instr as f64;

        println!("\n==========================================================");
        println!("PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_cpi                  {:.4}", cpi);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        let total = instr as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;
        println!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
        println!("  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load));
        println!("  op.store               {} ({:.2}%)", self.inst_store, pct(self.inst_store));
        println!(
            "  op.control             {} ({:.2}%)",
            self.inst_control,
            pct(self.inst_control)
        );
        println!("----------------------------------------------------------");
        println!("HAZARDS");
        println!("  stalls.data            {}", self.stalls_data);
        println!("  squashed.control       {}", self.squashed_control);
        println!("==========================================================");
    }
}
