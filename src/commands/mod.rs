//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `targets.rs` — target dispatch and exit-code propagation.
//!
//! ## Principles
//! - Match CLI inputs here.
//! - Delegate side effects to `services/*`.
//! - Keep behavior and output schema stable.

pub mod targets;

pub use targets::handle_target;
