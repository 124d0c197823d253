//! Durable store handle: bootstrap, fresh reads, and usage recording.
//!
//! The store file is the single source of truth for cooldown timing. Loads
//! snapshot the record once; anything timing-related re-reads the file so a
//! concurrent invocation's update is observed.

mod paths;


use crate::model::RawRecord;
use crate::{ConfigError, StoreOverrides, StoreRecord};
use log::{debug, info, warn};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Default store filename, resolved against the installation directory.
pub const DEFAULT_STORE_FILE: &str = "meridian.json";

/// Handle to the durable store file plus the record resolved at open time.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    record: StoreRecord,
}

impl ConfigStore {
    /// Open the store, creating it with defaults when absent.
    ///
    /// An existing file's explicit values win over `overrides`, which win
    /// over built-in defaults. A present-but-malformed file is fatal; a
    /// failed bootstrap write is logged and the in-memory record still
    /// serves the current process.
    pub fn open(path: Option<&Path>, overrides: StoreOverrides) -> Result<Self, ConfigError> {
        let path = paths::resolve_store_path(path.unwrap_or(Path::new(DEFAULT_STORE_FILE)));
        debug!("opening store (path={})", path.display());

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let raw: RawRecord = serde_json::from_str(&contents)?;
            let record = raw.resolve(&overrides)?;
            info!("loaded store (path={})", path.display());
            return Ok(Self { path, record });
        }

        let record = RawRecord::default().resolve(&overrides)?;
        match write_raw(&path, &RawRecord::from(&record)) {
            Ok(()) => info!("bootstrapped store with defaults (path={})", path.display()),
            Err(err) => warn!(
                "failed to write bootstrap store (path={}): {err}",
                path.display()
            ),
        }
        Ok(Self { path, record })
    }

    /// The resolved record snapshotted at open time.
    pub fn record(&self) -> &StoreRecord {
        &self.record
    }

    /// Location of the store file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fresh read of the last successful call time.
    ///
    /// Fail-open: any read or parse problem yields `None` so a transient
    /// failure never locks the user out.
    pub fn read_last_used(&self) -> Option<f64> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                if self.path.exists() {
                    warn!("cooldown check could not read store: {err}");
                }
                return None;
            }
        };
        let value: Value = match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(err) => {
                warn!("cooldown check could not parse store: {err}");
                return None;
            }
        };
        value.get("last_used").and_then(Value::as_f64)
    }

    /// Record a successful call at `now` (epoch seconds).
    ///
    /// Re-reads the stored object first so fields written by another process
    /// or edited by hand are not clobbered; unknown fields round-trip intact.
    /// Callers treat a failure as a warning, never as a failed call.
    pub fn record_usage(&self, now: f64) -> Result<(), ConfigError> {
        let mut value = match fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Value::Object(Map::new())
            }
            Err(err) => return Err(err.into()),
        };
        if !value.is_object() {
            // A scalar store would have failed open(); start clean.
            value = Value::Object(Map::new());
        }
        if let Value::Object(fields) = &mut value {
            fields.insert("last_used".to_string(), now.into());
        }
        write_json(&self.path, &value)?;
        debug!("recorded usage (path={}, last_used={now})", self.path.display());
        Ok(())
    }
}

/// Serialize a raw record to disk as pretty JSON.
fn write_raw(path: &Path, raw: &RawRecord) -> Result<(), ConfigError> {
    let value = serde_json::to_value(raw)?;
    write_json(path, &value)
}

/// Write a JSON value to the store path with a trailing newline.
fn write_json(path: &Path, value: &Value) -> Result<(), ConfigError> {
    let mut contents = serde_json::to_string_pretty(value)?;
    contents.push('\n');
    fs::write(path, contents)?;
    Ok(())
}
