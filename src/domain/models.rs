use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

/// Catalog entry. `product_link` round-trips as absent when unset.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_link: Option<String>,
}

/// A desk-environment snapshot valid from `start_period` until the next
/// version's start. `end_period` is derived by the period chain, never set
/// directly by a caller; it stays absent for the chronologically last version.
/// `item_ids` has set semantics but keeps insertion order for display.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub id: u64,
    pub version_name: String,
    pub start_period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_period: Option<String>,
    #[serde(default)]
    pub item_ids: Vec<u64>,
}

/// Caller-supplied fields for a new or edited item, validated by the ledger.
#[derive(Debug, Clone)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub product_link: Option<String>,
}

/// `version show` payload: the version, its attached items resolved in
/// attachment order, and the chronological neighbors.
#[derive(Serialize)]
pub struct VersionDetail {
    pub version: Version,
    pub items: Vec<Item>,
    pub previous: Option<Version>,
    pub next: Option<Version>,
}
