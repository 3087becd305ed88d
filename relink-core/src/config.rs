use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{RelinkError, Result};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_RECOVER_NUMBER: u64 = 10;

/// Persisted settings, keyed the way the host stores them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoverConfig {
    #[serde(deserialize_with = "de_flag")]
    pub enabled: bool,
    /// Run once at the next init, then clear.
    #[serde(deserialize_with = "de_flag")]
    pub onlyonce: bool,
    /// Dry run: classify and log, never link.
    #[serde(deserialize_with = "de_flag")]
    pub only_print: bool,
    /// Handled-record budget; 0 means the whole history.
    #[serde(deserialize_with = "de_count")]
    pub recover_number: u64,
}

impl Default for RecoverConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            onlyonce: false,
            only_print: false,
            recover_number: DEFAULT_RECOVER_NUMBER,
        }
    }
}

// The host's form keeps text-field values as strings.
fn de_count<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrText {
        Num(u64),
        Text(String),
    }

    match NumOrText::deserialize(d)? {
        NumOrText::Num(n) => Ok(n),
        NumOrText::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("recover_number is not a count: {s:?}"))),
    }
}

// Unset switches are saved as null, and older configs hold 0/1.
fn de_flag<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Option::<Flag>::deserialize(d)? {
        None => false,
        Some(Flag::Bool(b)) => b,
        Some(Flag::Int(n)) => n != 0,
    })
}

/// Everything one scan needs, passed in by value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Max handled records; 0 is unbounded.
    pub limit: u64,
    pub dry_run: bool,
    pub page_size: u32,
    /// History status filter; `Some(true)` reads successful transfers only.
    pub status: Option<bool>,
    /// Stop after this many pages even if the budget is not spent.
    pub max_pages: Option<u32>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RECOVER_NUMBER,
            dry_run: false,
            page_size: DEFAULT_PAGE_SIZE,
            status: Some(true),
            max_pages: None,
        }
    }
}

impl From<&RecoverConfig> for ScanOptions {
    fn from(cfg: &RecoverConfig) -> Self {
        Self {
            limit: cfg.recover_number,
            dry_run: cfg.only_print,
            ..Default::default()
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Result<RecoverConfig>;
    fn save(&self, cfg: &RecoverConfig) -> Result<()>;
}

/// Config kept as a pretty-printed JSON file. A missing file loads defaults.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for JsonFileStore {
    fn load(&self) -> Result<RecoverConfig> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RecoverConfig::default());
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&bytes)
            .map_err(|e| RelinkError::Config(format!("{}: {e}", self.path.display())))
    }

    fn save(&self, cfg: &RecoverConfig) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut json = serde_json::to_vec_pretty(cfg)?;
        json.push(b'\n');
        fs::write(&self.path, json)?;
        Ok(())
    }
}
