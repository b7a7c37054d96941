use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::Result;
use crate::model::City;

/// Backing storage for the search history.
///
/// Modeled as a load/save capability so an alternative backing (e.g. an
/// embedded key-value store) can be substituted without touching the API
/// layer.
pub trait HistoryBackend: Send + Sync {
    /// Load all stored entries in storage order.
    fn load(&self) -> Result<Vec<City>>;

    /// Persist the full entry sequence, replacing the previous state.
    fn save(&self, cities: &[City]) -> Result<()>;
}

/// Flat-file backend holding a JSON array of `{id, name}` objects.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryBackend for JsonFileBackend {
    fn load(&self) -> Result<Vec<City>> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return Ok(Vec::new());
        };

        // An unparsable file is treated as empty state, not an error.
        Ok(serde_json::from_str(&contents).unwrap_or_default())
    }

    fn save(&self, cities: &[City]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(cities)?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}

/// Deduplicated search history over a pluggable backend.
///
/// Every mutation is a full read-modify-write of the backing store with no
/// locking, so concurrent writers can lose updates.
pub struct HistoryStore {
    backend: Box<dyn HistoryBackend>,
}

impl HistoryStore {
    pub fn new(backend: Box<dyn HistoryBackend>) -> Self {
        Self { backend }
    }

    /// History store backed by a JSON file at `path`.
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(JsonFileBackend::new(path)))
    }

    /// All stored entries in file order.
    pub fn list(&self) -> Result<Vec<City>> {
        self.backend.load()
    }

    /// Record a searched city, deduplicating on case-insensitive name.
    ///
    /// Returns the existing entry unchanged (no write) when the name is
    /// already recorded; otherwise appends an entry with a fresh id and
    /// persists the updated sequence.
    pub fn add(&self, name: &str) -> Result<City> {
        let mut cities = self.backend.load()?;

        if let Some(existing) = cities
            .iter()
            .find(|city| city.name.to_lowercase() == name.to_lowercase())
        {
            return Ok(existing.clone());
        }

        let city = City {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
        };

        cities.push(city.clone());
        self.backend.save(&cities)?;

        Ok(city)
    }

    /// Remove the entry with the given id. Removing an unknown id is a no-op.
    pub fn remove(&self, id: &str) -> Result<()> {
        let mut cities = self.backend.load()?;
        cities.retain(|city| city.id != id);
        self.backend.save(&cities)
    }
}
