//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep record/report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — persisted records, drafts, report/output structs.
//! - `error.rs` — the engine error taxonomy.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! `Item` and `Version` double as the on-disk schema (`items.json` /
//! `versions.json`); field renames break existing data files.

pub mod error;
pub mod models;
