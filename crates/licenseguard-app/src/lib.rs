//! Use case orchestration for licenseguard.
//!
//! This crate provides the application layer: use cases that coordinate the domain, repo,
//! settings, and render layers. The CLI crate depends on this; it only handles argument
//! parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod format;
mod gate;
mod policy;

pub use check::{CheckInput, CheckOutput, run_check};
pub use format::{ReportFormat, UnsupportedFormat};
pub use gate::{GateInput, GateOutput, run_gate};
pub use policy::{LoadedPolicy, load_policy};

/// Map a violation flag to the process exit code: 0 = clean, 1 = violation.
pub fn violation_exit_code(violation: bool) -> i32 {
    i32::from(violation)
}
