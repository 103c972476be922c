use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "deskhist", version, about = "Desk environment version history CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Version history and attachments
    Version {
        #[command(subcommand)]
        command: VersionCommands,
    },
    /// Item catalog
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum VersionCommands {
    /// Record a new version starting at the given date
    Add {
        name: String,
        #[arg(long, help = "Start date (YYYY-MM-DD)")]
        start: String,
    },
    /// Move a version to a new start date
    Reschedule {
        id: u64,
        #[arg(long, help = "New start date (YYYY-MM-DD)")]
        start: String,
    },
    List {
        #[arg(long, value_enum, default_value_t = SortOrder::Asc)]
        order: SortOrder,
    },
    /// Show one version with its items and chronological neighbors
    Show {
        id: u64,
    },
    /// Attach an existing catalog item to a version
    Attach {
        id: u64,
        item_id: u64,
    },
    /// Create a catalog item and attach it in one step
    AttachNew {
        id: u64,
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        product_link: Option<String>,
    },
    /// Remove an attachment (keeps the item in the catalog)
    Detach {
        id: u64,
        item_id: u64,
    },
}

#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    Add {
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        product_link: Option<String>,
    },
    /// Rename, recategorize, or relink an item
    Edit {
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        product_link: Option<String>,
    },
    /// Delete an item; refused while any version still references it
    Remove {
        id: u64,
    },
    List,
    /// Show which versions use an item, most recent first
    Usage {
        id: u64,
    },
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}
