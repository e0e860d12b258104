//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `sync.rs` — sync/preview orchestration and the single-sync guard.
//! - `vault.rs` — dictionary note read/atomic write (source A).
//! - `picker.rs` — external file selection and reading (source B).
//! - `export.rs` — delivery of the merged list as `Custom Dictionary.txt`.
//! - `storage.rs` — settings persistence + sync history.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - The merge itself lives in `dictionary.rs` and stays pure.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod export;
pub mod output;
pub mod picker;
pub mod storage;
pub mod sync;
pub mod vault;
