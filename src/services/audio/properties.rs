use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use tracing::{debug, instrument};

use super::StoreError;

/// Where a property lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyNamespace {
    /// Survives restarts
    Persist,
    /// Lost when the process exits
    Runtime,
}

/// Key/value string store holding device properties
///
/// Keys are dotted strings such as `audio.volume.tts`.
pub trait PropertyStore {
    /// Read a property
    ///
    /// # Errors
    /// Returns error if the store cannot be read
    fn get(&self, key: &str, namespace: PropertyNamespace) -> Result<Option<String>, StoreError>;

    /// Write a property
    ///
    /// # Errors
    /// Returns error if the store cannot be written
    fn set(&self, key: &str, value: &str, namespace: PropertyNamespace)
    -> Result<(), StoreError>;
}

/// Property store kept entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    properties: RwLock<HashMap<(PropertyNamespace, String), String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with persisted properties
    pub fn with_persisted<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let properties = entries
            .into_iter()
            .map(|(key, value)| {
                (
                    (PropertyNamespace::Persist, key.to_string()),
                    value.to_string(),
                )
            })
            .collect();

        Self {
            properties: RwLock::new(properties),
        }
    }
}

impl PropertyStore for MemoryStore {
    fn get(&self, key: &str, namespace: PropertyNamespace) -> Result<Option<String>, StoreError> {
        let properties = self.properties.read().unwrap_or_else(PoisonError::into_inner);

        Ok(properties.get(&(namespace, key.to_string())).cloned())
    }

    fn set(
        &self,
        key: &str,
        value: &str,
        namespace: PropertyNamespace,
    ) -> Result<(), StoreError> {
        let mut properties = self
            .properties
            .write()
            .map_err(|_| StoreError::Lock("write"))?;

        properties.insert((namespace, key.to_string()), value.to_string());
        Ok(())
    }
}

/// Property store whose persisted namespace is a TOML file
///
/// The file holds flat `"dotted.key" = "value"` pairs and is rewritten on every
/// persisted write. Runtime properties stay in memory.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    persisted: RwLock<BTreeMap<String, String>>,
    runtime: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, starting empty if the file does not exist
    ///
    /// # Errors
    /// * `StoreError::Io` - If the file exists but cannot be read
    /// * `StoreError::Parse` - If the file is not a flat table of strings
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let persisted = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| StoreError::Io {
                path: path.clone(),
                details: e.to_string(),
            })?;

            toml::from_str(&content).map_err(|e| StoreError::Parse {
                path: path.clone(),
                details: e.to_string(),
            })?
        } else {
            BTreeMap::new()
        };

        debug!(count = persisted.len(), "Loaded persisted properties");

        Ok(Self {
            path,
            persisted: RwLock::new(persisted),
            runtime: RwLock::new(HashMap::new()),
        })
    }

    /// Backing file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, persisted: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let content =
            toml::to_string(persisted).map_err(|e| StoreError::Serialize(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                details: e.to_string(),
            })?;
        }

        fs::write(&self.path, content).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            details: e.to_string(),
        })
    }
}

impl PropertyStore for FileStore {
    fn get(&self, key: &str, namespace: PropertyNamespace) -> Result<Option<String>, StoreError> {
        let value = match namespace {
            PropertyNamespace::Persist => self
                .persisted
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .get(key)
                .cloned(),
            PropertyNamespace::Runtime => self
                .runtime
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .get(key)
                .cloned(),
        };

        Ok(value)
    }

    fn set(
        &self,
        key: &str,
        value: &str,
        namespace: PropertyNamespace,
    ) -> Result<(), StoreError> {
        match namespace {
            PropertyNamespace::Persist => {
                let mut persisted = self
                    .persisted
                    .write()
                    .map_err(|_| StoreError::Lock("write"))?;

                let mut updated = persisted.clone();
                updated.insert(key.to_string(), value.to_string());
                self.save(&updated)?;

                *persisted = updated;
                Ok(())
            }
            PropertyNamespace::Runtime => {
                self.runtime
                    .write()
                    .map_err(|_| StoreError::Lock("write"))?
                    .insert(key.to_string(), value.to_string());
                Ok(())
            }
        }
    }
}
