//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `chain.rs` — period-chain maintenance: insert/reschedule/ordered/neighbors.
//! - `ledger.rs` — item↔version attachments, catalog mutations, delete guard.
//! - `storage.rs` — item/version JSON stores, config, audit log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - `chain` and `ledger` are pure over in-memory collections; persistence
//!   stays in the command handlers via the stores.
//! - Operations that can fail validate fully before mutating anything.
//! - Side effects should be explicit and localized.

pub mod chain;
pub mod ledger;
pub mod output;
pub mod storage;
