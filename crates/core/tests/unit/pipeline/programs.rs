//! End-to-end program scenarios.
//!
//! Whole programs run to completion with the final architectural state
//! checked against hand-computed expectations.

use crate::common::{self, add, addi, and, beq, halt, j, lw, mul, or, sll, slt, srl, sub, sw};

#[test]
fn arithmetic_with_forwarding() {
    let sim = common::run(vec![
        addi(8, 0, 5),
        addi(9, 0, 7),
        add(10, 8, 9),
        halt(),
    ]);
    assert_eq!(sim.regs()[8], 5);
    assert_eq!(sim.regs()[9], 7);
    assert_eq!(sim.regs()[10], 12);
    assert!(sim.is_halted());
}

#[test]
fn multiply_and_shifts() {
    let sim = common::run(vec![
        addi(8, 0, 4),
        addi(9, 0, 3),
        mul(10, 8, 9),
        sll(11, 10, 1),
        srl(12, 11, 2),
        halt(),
    ]);
    assert_eq!(sim.regs()[10], 12);
    assert_eq!(sim.regs()[11], 24);
    assert_eq!(sim.regs()[12], 6);
}

#[test]
fn load_use_hazard_stalls_exactly_one_cycle() {
    let hazard = common::run(vec![
        addi(8, 0, 100),
        sw(8, 0, 0),
        lw(9, 0, 0),
        add(10, 9, 9), // consumes the load immediately
        halt(),
    ]);
    assert_eq!(hazard.regs()[9], 100);
    assert_eq!(hazard.regs()[10], 200);
    assert_eq!(hazard.stats().stalls_data, 1);

    // Identical shape without the dependency: one cycle faster.
    let baseline = common::run(vec![
        addi(8, 0, 100),
        sw(8, 0, 0),
        lw(9, 0, 0),
        add(10, 8, 8),
        halt(),
    ]);
    assert_eq!(baseline.regs()[10], 200);
    assert_eq!(baseline.stats().stalls_data, 0);
    assert_eq!(
        hazard.cycles(),
        baseline.cycles() + 1,
        "the hazard costs exactly one bubble"
    );
}

#[test]
fn taken_branch_flush() {
    let sim = common::run(vec![
        addi(8, 0, 1),
        addi(9, 0, 1),
        beq(8, 9, 2),    // taken; target skips both ADDI $10 writes
        addi(10, 0, 111), // squashed in decode
        addi(10, 0, 222), // never fetched
        addi(11, 0, 333),
        halt(),
    ]);
    assert_eq!(sim.regs()[10], 0, "no wrong-path write may commit");
    assert_eq!(sim.regs()[11], 333);
    assert_eq!(sim.stats().squashed_control, 1);
}

#[test]
fn jump_skips_wrong_path() {
    let sim = common::run(vec![
        addi(8, 0, 1),
        j(3),
        addi(8, 0, 99), // wrong path
        addi(9, 0, 7),
        halt(),
    ]);
    assert_eq!(sim.regs()[8], 1);
    assert_eq!(sim.regs()[9], 7);
}

#[test]
fn r_type_logic_and_subtraction() {
    let sim = common::run(vec![
        addi(8, 0, 0b1100),
        addi(9, 0, 0b1010),
        and(10, 8, 9),
        or(11, 8, 9),
        sub(12, 8, 9),
        halt(),
    ]);
    assert_eq!(sim.regs()[10], 0b1000);
    assert_eq!(sim.regs()[11], 0b1110);
    assert_eq!(sim.regs()[12], 2);
}

#[test]
fn slt_comparisons() {
    let sim = common::run(vec![
        addi(8, 0, 3),
        addi(9, 0, 5),
        slt(10, 8, 9),
        slt(11, 9, 8),
        halt(),
    ]);
    assert_eq!(sim.regs()[10], 1);
    assert_eq!(sim.regs()[11], 0);
}

#[test]
fn store_lands_in_memory() {
    let sim = common::run(vec![addi(8, 0, -42), sw(8, 12, 0), halt()]);
    assert_eq!(sim.mem()[3], -42);
}
