//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — settings, sync outcome and report structs.
//! - `constants.rs` — fixed note/export names and the checksum prefix.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Report structs are the `--json` output schema; keep `docs/contracts/*` in sync.

pub mod constants;
pub mod models;
