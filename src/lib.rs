#![no_std]

//! Structural planner for power-of-two radix-2 DIF FFT hardware.
//!
//! Computes the Q8.8 twiddle-coefficient table and the butterfly topology of
//! every stage, assembles both into an immutable [`NetworkPlan`], and renders
//! the plan as a flat synthesizable Verilog module.

extern crate alloc;

// Enables the standard library for tests and for the optional `std`
// feature (std::error::Error), so you can run 'cargo test' on your PC
// normally while keeping no_std builds working.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod network;
pub mod stages;
pub mod twiddle;
pub mod types;
pub mod verilog;

pub use common::ConfigError;
pub use network::{NetworkPlan, StagePlan};
pub use stages::{ButterflyUnit, StageUnits, Stages};
pub use types::{Q8_8, TwiddleCoefficient};
