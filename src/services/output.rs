use crate::domain::models::JsonOut;
use serde::Serialize;

/// Text-mode rendering of an optional field (open end period, missing link).
pub fn dash(field: Option<&str>) -> &str {
    field.unwrap_or("-")
}

fn emit_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

/// Render a collection: success envelope under `--json`, one row per record
/// otherwise.
pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        return emit_json(data);
    }
    for d in data {
        println!("{}", row(d));
    }
    Ok(())
}

/// Render a single record.
pub fn print_one<T: Serialize>(json: bool, data: T, row: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        return emit_json(data);
    }
    println!("{}", row(&data));
    Ok(())
}
