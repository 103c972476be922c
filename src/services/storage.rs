use crate::domain::models::{Item, Version};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Optional user configuration (`~/.config/deskhist/config.toml`).
#[derive(Debug, Default, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

pub fn load_config() -> anyhow::Result<Config> {
    let home = std::env::var("HOME")?;
    let path = PathBuf::from(home).join(".config/deskhist/config.toml");
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

fn data_dir(config: &Config) -> anyhow::Result<PathBuf> {
    if let Some(dir) = &config.data_dir {
        return Ok(dir.clone());
    }
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("deskhist"))
}

/// Fail-open collection read: a missing file and an unparseable file both
/// yield an empty collection, so a fresh install behaves like an empty one.
fn read_collection<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Whole-collection write, creating the data directory on first save.
fn write_collection<T: Serialize>(path: &Path, records: &[T]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(records)?)?;
    Ok(())
}

/// Handle for the item catalog file.
pub struct ItemStore {
    path: PathBuf,
}

impl ItemStore {
    pub fn open(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            path: data_dir(config)?.join("items.json"),
        })
    }

    pub fn load(&self) -> Vec<Item> {
        read_collection(&self.path)
    }

    pub fn save(&self, items: &[Item]) -> anyhow::Result<()> {
        write_collection(&self.path, items)
    }
}

/// Handle for the version history file.
pub struct VersionStore {
    path: PathBuf,
}

impl VersionStore {
    pub fn open(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            path: data_dir(config)?.join("versions.json"),
        })
    }

    pub fn load(&self) -> Vec<Version> {
        read_collection(&self.path)
    }

    pub fn save(&self, versions: &[Version]) -> anyhow::Result<()> {
        write_collection(&self.path, versions)
    }
}

/// Append one line to the mutation audit log. Best-effort: audit failures
/// never fail the command.
pub fn audit(action: &str, data: serde_json::Value) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(".config/deskhist/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": chrono::Utc::now().to_rfc3339(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}
