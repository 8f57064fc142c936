//! Terminal calculator app
//!
//! Split into pure state and plumbing, so the calculator logic is testable
//! without a terminal:
//! - [model]: the calculator state (expression buffer, result, memory) and
//!   the button semantics; no rendering, no I/O
//! - [ui]: ratatui rendering of the display and button grid
//! - [runner]: terminal setup/teardown and the event loop

pub mod model;
pub mod runner;
pub mod ui;
