//! Pipeline behavior suites.
//!
//! Organized by hazard class plus the end-to-end program scenarios and the
//! quantified invariants that must hold after every cycle.




/// End-to-end program scenarios.
pub mod programs;
