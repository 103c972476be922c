//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `versions.rs` — version history, scheduling, and attachment commands.
//! - `items.rs` — item catalog commands.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate chain and ledger logic to `services/*`.
//! - Handlers own the load/save lifecycle of the two stores.

pub mod items;
pub mod versions;

pub use items::handle_item_commands;
pub use versions::handle_version_commands;
