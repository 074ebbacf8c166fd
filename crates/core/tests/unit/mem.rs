//! Word memory tests.
//!
//! Verifies aligned access, the alignment and bounds fault conditions, and
//! the cycle annotation that turns a memory fault into a simulation error.

use mipsim_core::common::error::{MemError, SimError};
use mipsim_core::mem::WordMemory;

#[test]
fn store_then_load_roundtrip() {
    let mut mem = WordMemory::new(16);
    mem.store_word(8, -123).unwrap();
    assert_eq!(mem.load_word(8), Ok(-123));
}

#[test]
fn fresh_memory_is_zeroed() {
    let mem = WordMemory::new(4);
    assert_eq!(mem.words(), 4);
    assert!(mem.raw().iter().all(|&w| w == 0));
}

#[test]
fn misaligned_load_faults() {
    let mem = WordMemory::new(16);
    assert_eq!(mem.load_word(6), Err(MemError::Misaligned(6)));
}

#[test]
fn misaligned_store_faults() {
    let mut mem = WordMemory::new(16);
    assert_eq!(mem.store_word(3, 1), Err(MemError::Misaligned(3)));
}

#[test]
fn out_of_bounds_load_faults() {
    let mem = WordMemory::new(16);
    // 16 words cover byte addresses 0..64.
    assert_eq!(mem.load_word(64), Err(MemError::OutOfBounds(64)));
}

#[test]
fn out_of_bounds_store_faults() {
    let mut mem = WordMemory::new(16);
    assert_eq!(mem.store_word(1000, 1), Err(MemError::OutOfBounds(1000)));
}

#[test]
fn last_word_is_accessible() {
    let mut mem = WordMemory::new(16);
    mem.store_word(60, 7).unwrap();
    assert_eq!(mem.load_word(60), Ok(7));
}

#[test]
fn fault_carries_cycle_number() {
    let err = MemError::Misaligned(6).at_cycle(42);
    assert_eq!(err, SimError::Misaligned { addr: 6, cycle: 42 });

    let err = MemError::OutOfBounds(4096).at_cycle(7);
    assert_eq!(
        err,
        SimError::OutOfBounds {
            addr: 4096,
            cycle: 7
        }
    );
}

#[test]
fn fault_display_names_address_and_cycle() {
    let msg = MemError::Misaligned(6).at_cycle(42).to_string();
    assert!(msg.contains("42"), "message should name the cycle: {}", msg);
    assert!(
        msg.contains("0x00000006"),
        "message should name the address: {}",
        msg
    );
}
