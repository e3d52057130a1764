//! Key-value persistence for scores
//!
//! Backends:
//! - `MemoryStore`: in-process map, used by tests and throwaway sessions
//! - `JsonFileStore`: JSON object on disk (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm32)

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

#[cfg(target_arch = "wasm32")]
mod local_storage;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Minimal integer key-value store
pub trait KeyValueStore {
    /// Value under `key`, or `None` when absent or unreadable
    fn get(&self, key: &str) -> Option<i64>;

    /// Store `value` under `key`
    fn set(&mut self, key: &str, value: i64) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Option<i64> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: i64) -> Result<()> {
        (**self).set(key, value)
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, i64>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail (for exercising error paths)
    pub fn failing() -> Self {
        Self {
            values: HashMap::new(),
            fail_writes: true,
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: i64) -> Result<()> {
        if self.fail_writes {
            bail!("memory store is read-only");
        }
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a JSON object file
///
/// The whole file is read on open and rewritten on every `set`, going
/// through a temporary file so a crash never leaves a half-written save.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: HashMap<String, i64>,
}

impl JsonFileStore {
    /// Open (or lazily create) a store at `path`
    ///
    /// A missing file is an empty store. A corrupt file is logged and
    /// treated as empty; it is overwritten on the next save.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<HashMap<String, i64>>(&json) {
                Ok(values) => {
                    log::info!("Opened score store {} ({} keys)", path.display(), values.len());
                    values
                }
                Err(e) => {
                    log::warn!("Score store {} is corrupt, starting fresh: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No score store at {}, starting fresh", path.display());
                HashMap::new()
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading score store {}", path.display()));
            }
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).with_context(|| format!("writing {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: i64) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }
}
