use crate::cli::VersionCommands;
use crate::domain::error::EngineError;
use crate::domain::models::{Item, ItemDraft, JsonOut, Version, VersionDetail};
use crate::services::chain;
use crate::services::ledger;
use crate::services::output::{dash, print_one, print_out};
use crate::services::storage::{audit, ItemStore, VersionStore};

pub fn handle_version_commands(
    json: bool,
    command: &VersionCommands,
    item_store: &ItemStore,
    version_store: &VersionStore,
    items: &mut Vec<Item>,
    versions: &mut Vec<Version>,
) -> anyhow::Result<()> {
    match command {
        VersionCommands::Add { name, start } => {
            let version = chain::insert(versions, name, start);
            version_store.save(versions)?;
            audit(
                "version_add",
                serde_json::json!({"id": version.id, "start": start}),
            );
            print_one(json, version, |v| {
                format!("added version {} starting {}", v.id, v.start_period)
            })?;
        }
        VersionCommands::Reschedule { id, start } => {
            let version = chain::reschedule(versions, *id, start)?;
            version_store.save(versions)?;
            audit(
                "version_reschedule",
                serde_json::json!({"id": id, "start": start}),
            );
            print_one(json, version, |v| {
                format!("version {} now starts {}", v.id, v.start_period)
            })?;
        }
        VersionCommands::List { order } => {
            let view = chain::ordered(versions, *order);
            print_out(json, &view, |v| {
                format!(
                    "{}\t{}\t{}\t{}",
                    v.id,
                    v.version_name,
                    v.start_period,
                    dash(v.end_period.as_deref())
                )
            })?;
        }
        VersionCommands::Show { id } => {
            let version = versions
                .iter()
                .find(|v| v.id == *id)
                .cloned()
                .ok_or(EngineError::VersionNotFound(*id))?;
            let (previous, next) = chain::neighbors(versions, *id)?;
            let resolved: Vec<Item> = version
                .item_ids
                .iter()
                .filter_map(|iid| items.iter().find(|i| i.id == *iid).cloned())
                .collect();
            let detail = VersionDetail {
                version,
                items: resolved,
                previous,
                next,
            };
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: detail
                    })?
                );
            } else {
                println!("id: {}", detail.version.id);
                println!("name: {}", detail.version.version_name);
                println!("start: {}", detail.version.start_period);
                println!("end: {}", dash(detail.version.end_period.as_deref()));
                for i in &detail.items {
                    println!("item: {}\t{}\t{}", i.id, i.name, i.category);
                }
                if let Some(p) = &detail.previous {
                    println!("previous: {} ({})", p.version_name, p.start_period);
                }
                if let Some(n) = &detail.next {
                    println!("next: {} ({})", n.version_name, n.start_period);
                }
            }
        }
        VersionCommands::Attach { id, item_id } => {
            ledger::attach(versions, items, *id, *item_id)?;
            version_store.save(versions)?;
            audit(
                "attach",
                serde_json::json!({"versionId": id, "itemId": item_id}),
            );
            print_one(
                json,
                serde_json::json!({"versionId": id, "itemId": item_id}),
                |_| format!("attached item {} to version {}", item_id, id),
            )?;
        }
        VersionCommands::AttachNew {
            id,
            name,
            category,
            product_link,
        } => {
            let draft = ItemDraft {
                name: name.clone(),
                category: category.clone(),
                product_link: product_link.clone(),
            };
            let item = ledger::attach_new(versions, items, *id, draft)?;
            item_store.save(items)?;
            version_store.save(versions)?;
            audit(
                "attach_new",
                serde_json::json!({"versionId": id, "itemId": item.id}),
            );
            print_one(json, item, |i| {
                format!("created item {} and attached it to version {}", i.id, id)
            })?;
        }
        VersionCommands::Detach { id, item_id } => {
            let removed = ledger::detach(versions, *id, *item_id)?;
            version_store.save(versions)?;
            audit(
                "detach",
                serde_json::json!({"versionId": id, "itemId": item_id, "removed": removed}),
            );
            print_one(json, removed, |r| {
                if *r {
                    format!("detached item {} from version {}", item_id, id)
                } else {
                    format!("item {} was not attached to version {}", item_id, id)
                }
            })?;
        }
    }
    Ok(())
}
