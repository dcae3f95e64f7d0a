//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `check.rs` — the full missing-targets check and report write.
//! - `inspect.rs` — deps/targets/catalog views over single stages.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod check;
pub mod inspect;

pub use check::handle_check;
pub use inspect::handle_inspect_commands;
