use crate::cli::ItemCommands;
use crate::domain::models::{Item, ItemDraft, Version};
use crate::services::ledger;
use crate::services::output::{dash, print_one, print_out};
use crate::services::storage::{audit, ItemStore};

pub fn handle_item_commands(
    json: bool,
    command: &ItemCommands,
    item_store: &ItemStore,
    items: &mut Vec<Item>,
    versions: &[Version],
) -> anyhow::Result<()> {
    match command {
        ItemCommands::Add {
            name,
            category,
            product_link,
        } => {
            let draft = ItemDraft {
                name: name.clone(),
                category: category.clone(),
                product_link: product_link.clone(),
            };
            let item = ledger::create_item(items, draft)?;
            item_store.save(items)?;
            audit("item_add", serde_json::json!({"id": item.id}));
            print_one(json, item, |i| {
                format!("added item {}\t{}\t{}", i.id, i.name, i.category)
            })?;
        }
        ItemCommands::Edit {
            id,
            name,
            category,
            product_link,
        } => {
            let item = ledger::update_item(
                items,
                *id,
                name.clone(),
                category.clone(),
                product_link.clone(),
            )?;
            item_store.save(items)?;
            audit("item_edit", serde_json::json!({"id": id}));
            print_one(json, item, |i| {
                format!("updated item {}\t{}\t{}", i.id, i.name, i.category)
            })?;
        }
        ItemCommands::Remove { id } => {
            let removed = ledger::delete_item(versions, items, *id)?;
            item_store.save(items)?;
            audit("item_remove", serde_json::json!({"id": id}));
            print_one(json, removed, |i| format!("removed item {}", i.id))?;
        }
        ItemCommands::List => {
            print_out(json, items, |i| {
                format!(
                    "{}\t{}\t{}\t{}",
                    i.id,
                    i.name,
                    i.category,
                    dash(i.product_link.as_deref())
                )
            })?;
        }
        ItemCommands::Usage { id } => {
            let usage = ledger::usage_of(versions, *id);
            print_out(json, &usage, |v| {
                format!("{}\t{}\t{}", v.id, v.version_name, v.start_period)
            })?;
        }
    }
    Ok(())
}
