use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::SessionError;

const SESSION_DIR_NAME: &str = ".portal";
const SESSION_FILE_NAME: &str = "session.json";

/// Flat string key/value persistence.
///
/// No TTL, no encryption, no namespacing beyond the keys themselves.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the value cannot be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Every stored pair, sorted by key.
    fn entries(&self) -> BTreeMap<String, String>;
}

fn lock(map: &Mutex<BTreeMap<String, String>>) -> MutexGuard<'_, BTreeMap<String, String>> {
    map.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-process store; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store, mostly for tests.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let values = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            values: Mutex::new(values),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        lock(&self.values).insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn entries(&self) -> BTreeMap<String, String> {
        lock(&self.values).clone()
    }
}

/// JSON-file-backed store (`~/.portal/session.json` by default).
///
/// The file is read on open and again by every `set`, which rewrites it
/// with only its own key changed. The directory is
/// created `0700` and the file written `0600` on Unix.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileSessionStore {
    /// Open the store at the default location under the home directory.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::HomeNotFound` if there is no home directory, or
    /// any error from [`Self::open`].
    pub fn open_default() -> Result<Self, SessionError> {
        Self::open(default_path()?)
    }

    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if the file exists but cannot be read, or
    /// `SessionError::Corrupt` if it is not a flat JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let values = load_file(&path)?;
        tracing::debug!(path = %path.display(), keys = values.len(), "opened session store");
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut values = lock(&self.values);
        // Other processes may have written since open; only `key` changes.
        let mut latest = load_file(&self.path)?;
        latest.insert(key.to_string(), value.to_string());
        write_file(&self.path, &latest)?;
        *values = latest;
        Ok(())
    }

    fn entries(&self) -> BTreeMap<String, String> {
        lock(&self.values).clone()
    }
}

/// `~/.portal/session.json`.
///
/// # Errors
///
/// Returns `SessionError::HomeNotFound` if the home directory cannot be resolved.
pub fn default_path() -> Result<PathBuf, SessionError> {
    dirs::home_dir()
        .map(|h| h.join(SESSION_DIR_NAME).join(SESSION_FILE_NAME))
        .ok_or(SessionError::HomeNotFound)
}

fn io_error(path: &Path, error: &std::io::Error) -> SessionError {
    SessionError::Io {
        path: path.to_path_buf(),
        reason: error.to_string(),
    }
}

fn load_file(path: &Path) -> Result<BTreeMap<String, String>, SessionError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(error) => return Err(io_error(path, &error)),
    };

    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    serde_json::from_str(&content).map_err(|e| SessionError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn write_file(path: &Path, values: &BTreeMap<String, String>) -> Result<(), SessionError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, &e))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }

    let body = serde_json::to_string_pretty(values).map_err(|e| SessionError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, body).map_err(|e| io_error(&tmp, &e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))
            .map_err(|e| io_error(&tmp, &e))?;
    }

    fs::rename(&tmp, path).map_err(|e| io_error(path, &e))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_path_is_under_home() {
        let path = default_path().expect("should resolve");
        assert!(path.ends_with(".portal/session.json"));
    }

    #[test]
    fn missing_file_is_an_empty_store() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileSessionStore::open(tmp.path().join("nested/session.json")).expect("open");
        assert!(store.entries().is_empty());
        assert_eq!(store.get("studentId"), None);
    }

    #[test]
    fn values_survive_reopen() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("state/session.json");

        let store = FileSessionStore::open(&path).expect("open");
        store.set("studentId", "S1").expect("set");
        store.set("selectedModuleName", "Week 1").expect("set");
        drop(store);

        let reopened = FileSessionStore::open(&path).expect("reopen");
        assert_eq!(reopened.get("studentId").as_deref(), Some("S1"));
        assert_eq!(reopened.get("selectedModuleName").as_deref(), Some("Week 1"));
    }

    #[test]
    fn set_overwrites_previous_value() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileSessionStore::open(tmp.path().join("session.json")).expect("open");
        store.set("teacherId", "T1").expect("set");
        store.set("teacherId", "T2").expect("set");
        assert_eq!(store.get("teacherId").as_deref(), Some("T2"));
    }

    #[test]
    fn set_keeps_keys_written_by_another_handle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session.json");
        FileSessionStore::open(&path)
            .expect("open")
            .set("studentId", "S1")
            .expect("set");

        let long_running = FileSessionStore::open(&path).expect("open a");
        let later_login = FileSessionStore::open(&path).expect("open b");
        later_login.set("studentId", "S2").expect("login");
        long_running
            .set("selectedModuleName", "Week 1")
            .expect("select module");

        let reopened = FileSessionStore::open(&path).expect("reopen");
        assert_eq!(reopened.get("studentId").as_deref(), Some("S2"));
        assert_eq!(reopened.get("selectedModuleName").as_deref(), Some("Week 1"));
        assert_eq!(long_running.get("studentId").as_deref(), Some("S2"));
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session.json");
        FileSessionStore::open(&path)
            .expect("open")
            .set("studentId", "S1")
            .expect("set");

        let mode = fs::metadata(&path).expect("metadata").permissions().mode() & 0o777;
        assert_eq!(mode, 0o600, "session file should be 0600");
    }

    #[test]
    fn corrupt_file_is_reported() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session.json");
        fs::write(&path, "{ not json").expect("write");

        let err = FileSessionStore::open(&path).unwrap_err();
        assert!(matches!(err, SessionError::Corrupt { .. }));
    }

    #[test]
    fn whitespace_only_file_is_empty() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session.json");
        fs::write(&path, "   \n  ").expect("write");

        let store = FileSessionStore::open(&path).expect("open");
        assert!(store.entries().is_empty());
    }

    #[test]
    fn memory_store_roundtrip() {
        let store = MemorySessionStore::with_entries([("studentId", "S9")]);
        store.set("teacherId", "T9").expect("set");
        let keys: Vec<_> = store.entries().into_keys().collect();
        assert_eq!(keys, vec!["studentId", "teacherId"]);
    }
}
