//! Loading, persisting and mutating the address table.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::types::{ConfigFile, ProviderConfig};
use crate::error::{AskError, Result};

/// The configured addresses plus the file they live in.
///
/// Every mutation is followed by a full rewrite of the file; there is no
/// locking, so two concurrent `ask add` runs may lose one update.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    file: ConfigFile,
}

impl ConfigStore {
    /// Loads the store from the default path.
    ///
    /// # Errors
    ///
    /// Only fails when the path itself cannot be determined; a missing or
    /// unreadable file yields an empty store.
    pub fn open() -> anyhow::Result<Self> {
        Ok(Self::load_from(Self::config_path()?))
    }

    /// Loads the store from `path`, falling back to an empty table if the
    /// file is missing, unreadable or not valid JSON.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::debug!(path = %path.display(), error = %e, "ignoring unparsable config");
                ConfigFile::default()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => ConfigFile::default(),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "ignoring unreadable config");
                ConfigFile::default()
            }
        };
        let store = Self { path, file };
        tracing::debug!(path = %store.path.display(), entries = store.len(), "loaded config");
        store
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the whole table, replacing the file's previous contents.
    ///
    /// Creates the containing directory if needed. On Unix the file is
    /// readable and writable by its owner only.
    pub fn save(&self) -> Result<()> {
        let persistence = |source| AskError::Persistence {
            path: self.path.clone(),
            source,
        };
        let mut json = serde_json::to_string_pretty(&self.file)
            .map_err(|e| persistence(io::Error::other(e)))?;
        json.push('\n');
        write_private(&self.path, json.as_bytes()).map_err(persistence)?;
        tracing::debug!(path = %self.path.display(), entries = self.len(), "saved config");
        Ok(())
    }

    /// Stores `config` under `address`, replacing any previous entry, and
    /// saves.
    pub fn add(&mut self, address: impl Into<String>, config: ProviderConfig) -> Result<()> {
        self.file.apis.insert(address.into(), config);
        self.save()
    }

    /// Removes `address`. Returns whether it existed; the file is only
    /// rewritten when it did.
    pub fn remove(&mut self, address: &str) -> Result<bool> {
        if self.file.apis.remove(address).is_none() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Looks up the configuration for `address`.
    pub fn get(&self, address: &str) -> Result<&ProviderConfig> {
        self.file
            .apis
            .get(address)
            .ok_or_else(|| AskError::UnknownAddress(address.to_string()))
    }

    /// Iterates entries in address order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ProviderConfig)> {
        self.file.apis.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.file.apis.is_empty()
    }

    pub fn len(&self) -> usize {
        self.file.apis.len()
    }
}

/// Truncates and writes `path` with owner-only permissions.
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;

    // `mode` only applies on creation; tighten files that already existed.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    file.write_all(contents)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ConfigStore {
        ConfigStore::load_from(dir.path().join("nested").join("config.json"))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_garbage_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        assert!(ConfigStore::load_from(&path).is_empty());
    }

    #[test]
    fn test_directory_in_place_of_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(ConfigStore::load_from(dir.path()).is_empty());
    }

    #[test]
    fn test_add_then_get() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let config = ProviderConfig::remote("claude", "claude-3-opus-20240229", "sk-test".into());
        store.add("api:claude-opus", config.clone()).unwrap();
        assert_eq!(store.get("api:claude-opus").unwrap(), &config);

        let reloaded = ConfigStore::load_from(store.path());
        assert_eq!(reloaded.get("api:claude-opus").unwrap(), &config);
    }

    #[test]
    fn test_add_replaces_without_merging() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store
            .add("api:x", ProviderConfig::remote("claude", "m1", "k1".into()))
            .unwrap();
        store.add("api:x", ProviderConfig::local("m2")).unwrap();

        let reloaded = ConfigStore::load_from(store.path());
        let entry = reloaded.get("api:x").unwrap();
        assert_eq!(entry, &ProviderConfig::local("m2"));
        assert!(entry.api_key.is_none());
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_get_unknown_address() {
        let dir = TempDir::new().unwrap();
        let err = store_in(&dir).get("api:nope").unwrap_err();
        assert!(matches!(err, AskError::UnknownAddress(ref a) if a == "api:nope"));
    }

    #[test]
    fn test_remove_absent_does_not_touch_file() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        assert!(!store.remove("api:claude").unwrap());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_remove_absent_keeps_existing_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let original = "{\"apis\":{\"local:a\":{\"provider\":\"local\",\"model\":\"a\"}}}";
        fs::write(&path, original).unwrap();

        let mut store = ConfigStore::load_from(&path);
        assert!(!store.remove("local:b").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_remove_present_persists() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add("local:a", ProviderConfig::local("a")).unwrap();
        store.add("local:b", ProviderConfig::local("b")).unwrap();
        assert!(store.remove("local:a").unwrap());

        let reloaded = ConfigStore::load_from(store.path());
        assert!(reloaded.get("local:a").is_err());
        assert!(reloaded.get("local:b").is_ok());
    }

    #[test]
    fn test_save_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add("local:b", ProviderConfig::local("b")).unwrap();
        store
            .add("api:gemini", ProviderConfig::remote("gemini", "gemini-1.5-pro", "g".into()))
            .unwrap();
        store.add("local:a", ProviderConfig::local("a")).unwrap();
        let first = fs::read(store.path()).unwrap();

        ConfigStore::load_from(store.path()).save().unwrap();
        ConfigStore::load_from(store.path()).save().unwrap();
        assert_eq!(fs::read(store.path()).unwrap(), first);
    }

    #[test]
    fn test_entries_are_sorted() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add("local:b", ProviderConfig::local("b")).unwrap();
        store.add("api:openai", ProviderConfig::remote("openai", "m", "k".into())).unwrap();
        store.add("local:a", ProviderConfig::local("a")).unwrap();
        let keys: Vec<_> = store.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, ["api:openai", "local:a", "local:b"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let mut store = ConfigStore::load_from(&path);
        store.add("local:a", ProviderConfig::local("a")).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
