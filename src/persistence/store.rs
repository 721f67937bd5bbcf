//! Snapshot store
//!
//! All snapshots live in one JSON object (name -> record) under a single
//! storage key. Every mutation rewrites the whole object; the in-memory copy
//! only changes once the write succeeded.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::snapshot::{Snapshot, SnapshotMeta, SnapshotRecord, validate_name};
use crate::consts::SNAPSHOTS_KEY;
use crate::error::{Error, Result, ValidationError};
use crate::platform::KeyValueStorage;
use crate::sim::{Grid, Session};

type Records = BTreeMap<String, SnapshotRecord>;

pub struct SnapshotStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    records: Records,
}

impl<S: KeyValueStorage> SnapshotStore<S> {
    /// Open the store under the default key
    pub fn open(storage: S) -> Result<Self> {
        Self::open_with_key(storage, SNAPSHOTS_KEY)
    }

    /// Open the store under a custom key
    ///
    /// A missing key is an empty store. A blob that is not a valid name ->
    /// record map is rejected as malformed; individual records are checked
    /// again when loaded.
    pub fn open_with_key(storage: S, key: &str) -> Result<Self> {
        let records = match storage.get_item(key)? {
            Some(json) => serde_json::from_str::<Records>(&json).map_err(|e| {
                log::warn!("Stored snapshots under '{}' are unreadable: {}", key, e);
                ValidationError::Malformed(e.to_string())
            })?,
            None => Records::new(),
        };

        log::info!("Loaded {} saved boards", records.len());
        Ok(Self {
            storage,
            key: key.to_string(),
            records,
        })
    }

    /// Start empty without reading storage (first write replaces whatever is there)
    pub fn empty(storage: S) -> Self {
        Self {
            storage,
            key: SNAPSHOTS_KEY.to_string(),
            records: Records::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name.trim())
    }

    /// Save a board under `name`, replacing any previous snapshot of that name
    pub fn save(&mut self, name: &str, grid: &Grid, generation: u64) -> Result<()> {
        self.save_at(name, grid, generation, Utc::now())
    }

    /// [`save`](Self::save) with an explicit timestamp
    pub fn save_at(
        &mut self,
        name: &str,
        grid: &Grid,
        generation: u64,
        date: DateTime<Utc>,
    ) -> Result<()> {
        let snapshot = Snapshot::new(name, grid.clone(), generation, date)?;
        self.insert(snapshot)
    }

    /// Store an already-built snapshot (last write wins)
    pub fn insert(&mut self, snapshot: Snapshot) -> Result<()> {
        let name = snapshot.name().to_string();
        let mut records = self.records.clone();
        let replaced = records.insert(name.clone(), snapshot.to_record()).is_some();
        self.commit(records)?;

        if replaced {
            log::info!("Overwrote saved board '{}'", name);
        } else {
            log::info!("Saved board '{}'", name);
        }
        Ok(())
    }

    /// Fetch and validate a snapshot
    pub fn load(&self, name: &str) -> Result<Snapshot> {
        let name = validate_name(name)?;
        let record = self
            .records
            .get(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;

        if record.name != name {
            return Err(ValidationError::Malformed(format!(
                "record stored as \"{}\" is named \"{}\"",
                name, record.name
            ))
            .into());
        }
        Ok(Snapshot::try_from(record.clone())?)
    }

    /// Load `name` into a session
    ///
    /// Fails without touching the session if the snapshot is missing,
    /// malformed, or was taken at different board dimensions.
    pub fn load_into(&self, name: &str, session: &mut Session) -> Result<()> {
        let snapshot = self.load(name)?;
        session.restore(&snapshot)?;
        log::info!(
            "Loaded board '{}' at generation {}",
            snapshot.name(),
            snapshot.generation()
        );
        Ok(())
    }

    /// Remove a snapshot
    pub fn delete(&mut self, name: &str) -> Result<()> {
        let name = validate_name(name)?;
        if !self.records.contains_key(name) {
            return Err(Error::NotFound(name.to_string()));
        }

        let mut records = self.records.clone();
        records.remove(name);
        self.commit(records)?;
        log::info!("Deleted saved board '{}'", name);
        Ok(())
    }

    /// Metadata of every snapshot, newest first (ties broken by name)
    pub fn list(&self) -> Vec<SnapshotMeta> {
        let mut metas: Vec<SnapshotMeta> = self.records.values().map(|r| r.meta()).collect();
        metas.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.name.cmp(&b.name)));
        metas
    }

    /// Write `records` out, adopting them only if the write succeeds
    fn commit(&mut self, records: Records) -> Result<()> {
        let json = serde_json::to_string(&records)?;
        self.storage.set_item(&self.key, &json)?;
        self.records = records;
        Ok(())
    }

    /// Give the storage backend back
    pub fn into_storage(self) -> S {
        self.storage
    }
}
