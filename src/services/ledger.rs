//! Item/version attachment ledger and catalog mutations.
//!
//! The delete guard is the one invariant enforced here: an item referenced by
//! any version cannot be removed. There is no reverse index, so the guard
//! scans every version on each delete.

use crate::cli::SortOrder;
use crate::domain::error::EngineError;
use crate::domain::models::{Item, ItemDraft, Version};
use crate::services::chain;

fn validate_draft(draft: &ItemDraft) -> Result<(), EngineError> {
    if draft.name.trim().is_empty() {
        return Err(EngineError::MissingField("name"));
    }
    if draft.category.trim().is_empty() {
        return Err(EngineError::MissingField("category"));
    }
    Ok(())
}

fn version_mut(versions: &mut [Version], id: u64) -> Result<&mut Version, EngineError> {
    versions
        .iter_mut()
        .find(|v| v.id == id)
        .ok_or(EngineError::VersionNotFound(id))
}

/// Create a catalog item from a validated draft, assigning the next free id.
pub fn create_item(items: &mut Vec<Item>, draft: ItemDraft) -> Result<Item, EngineError> {
    validate_draft(&draft)?;
    let id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
    let item = Item {
        id,
        name: draft.name,
        category: draft.category,
        product_link: draft.product_link,
    };
    items.push(item.clone());
    Ok(item)
}

/// Apply partial edits to an item. A provided but empty name or category is
/// rejected before anything is written.
pub fn update_item(
    items: &mut [Item],
    id: u64,
    name: Option<String>,
    category: Option<String>,
    product_link: Option<String>,
) -> Result<Item, EngineError> {
    let idx = items
        .iter()
        .position(|i| i.id == id)
        .ok_or(EngineError::ItemNotFound(id))?;
    if matches!(&name, Some(n) if n.trim().is_empty()) {
        return Err(EngineError::MissingField("name"));
    }
    if matches!(&category, Some(c) if c.trim().is_empty()) {
        return Err(EngineError::MissingField("category"));
    }

    let item = &mut items[idx];
    if let Some(n) = name {
        item.name = n;
    }
    if let Some(c) = category {
        item.category = c;
    }
    if let Some(l) = product_link {
        // a blank link clears the field so it round-trips as absent
        item.product_link = if l.trim().is_empty() { None } else { Some(l) };
    }
    Ok(item.clone())
}

/// Attach an existing item to a version. Attaching twice is a no-op; the
/// relation is a set, kept in attachment order for display.
pub fn attach(versions: &mut [Version], items: &[Item], version_id: u64, item_id: u64) -> Result<(), EngineError> {
    if !items.iter().any(|i| i.id == item_id) {
        return Err(EngineError::ItemNotFound(item_id));
    }
    let version = version_mut(versions, version_id)?;
    if !version.item_ids.contains(&item_id) {
        version.item_ids.push(item_id);
    }
    Ok(())
}

/// Create a new item and attach it to `version_id` in one logical step.
/// Both the draft and the version id are checked before either collection
/// is touched.
pub fn attach_new(
    versions: &mut [Version],
    items: &mut Vec<Item>,
    version_id: u64,
    draft: ItemDraft,
) -> Result<Item, EngineError> {
    validate_draft(&draft)?;
    if !versions.iter().any(|v| v.id == version_id) {
        return Err(EngineError::VersionNotFound(version_id));
    }
    let item = create_item(items, draft)?;
    attach(versions, items, version_id, item.id)?;
    Ok(item)
}

/// Remove an attachment. Returns whether anything was removed; a missing
/// association is not an error.
pub fn detach(versions: &mut [Version], version_id: u64, item_id: u64) -> Result<bool, EngineError> {
    let version = version_mut(versions, version_id)?;
    let before = version.item_ids.len();
    version.item_ids.retain(|id| *id != item_id);
    Ok(version.item_ids.len() < before)
}

/// Delete an item, refusing while any version still references it.
pub fn delete_item(
    versions: &[Version],
    items: &mut Vec<Item>,
    item_id: u64,
) -> Result<Item, EngineError> {
    let idx = items
        .iter()
        .position(|i| i.id == item_id)
        .ok_or(EngineError::ItemNotFound(item_id))?;
    let count = versions
        .iter()
        .filter(|v| v.item_ids.contains(&item_id))
        .count();
    if count > 0 {
        return Err(EngineError::ItemInUse { id: item_id, count });
    }
    Ok(items.remove(idx))
}

/// Versions referencing an item, most recent start first. Read-only.
pub fn usage_of(versions: &[Version], item_id: u64) -> Vec<Version> {
    chain::ordered(versions, SortOrder::Desc)
        .into_iter()
        .filter(|v| v.item_ids.contains(&item_id))
        .collect()
}
