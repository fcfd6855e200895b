//! Service layer containing the per-target side-effect helpers.
//!
//! ## Service map
//! - `clean.rs` — removal of the fixed build/virtualenv directories.
//! - `exec.rs` — synchronous external process invocation.
//! - `fetch.rs` — classic snap download.
//! - `help.rs` — aligned, color-highlighted target listing.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects are explicit and localized; honoring `--dry-run` is the
//!   service's job, not the caller's.
//! - Keep command handlers thin; delegate to services.

pub mod clean;
pub mod exec;
pub mod fetch;
pub mod help;
pub mod output;
