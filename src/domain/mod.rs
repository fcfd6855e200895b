//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep report/output structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — target documentation table, per-target report structs,
//!   output envelope.
//!
//! ## Rule of thumb
//! Domain types are data-only: no filesystem/network/process side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs and the contract tests.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod models;
