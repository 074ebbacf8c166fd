//! Configuration tests.
//!
//! Verifies the defaults and JSON deserialization, including partial
//! documents falling back to defaults per field.

use mipsim_core::SimConfig;

#[test]
fn defaults_are_sensible() {
    let cfg = SimConfig::default();
    assert_eq!(cfg.memory_words, 1 << 16);
    assert!(!cfg.trace);
    assert_eq!(cfg.max_cycles, 1_000_000);
}

#[test]
fn full_json_deserialization() {
    let cfg: SimConfig =
        serde_json::from_str(r#"{"memory_words": 1024, "trace": true, "max_cycles": 5000}"#)
            .unwrap();
    assert_eq!(cfg.memory_words, 1024);
    assert!(cfg.trace);
    assert_eq!(cfg.max_cycles, 5000);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let cfg: SimConfig = serde_json::from_str(r#"{"trace": true}"#).unwrap();
    assert!(cfg.trace);
    assert_eq!(cfg.memory_words, SimConfig::default().memory_words);
    assert_eq!(cfg.max_cycles, SimConfig::default().max_cycles);
}

#[test]
fn empty_json_is_all_defaults() {
    let cfg: SimConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg.memory_words, SimConfig::default().memory_words);
    assert!(!cfg.trace);
}
