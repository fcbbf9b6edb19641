use anyhow::Context;
use serde_json::Map;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::MutexGuard;

/// Single-key get/set storage for JSON-shaped values.
///
/// No transactions: every read and write stands alone.
pub trait MemoryStore {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: Value) -> anyhow::Result<()>;
    fn get_or(&self, key: &str, default: Value) -> Value {
        self.get(key).unwrap_or(default)
    }
}

impl<T: MemoryStore + ?Sized> MemoryStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: Value) -> anyhow::Result<()> {
        (**self).set(key, value)
    }
}

fn lock(map: &Mutex<Map<String, Value>>) -> MutexGuard<'_, Map<String, Value>> {
    map.lock().unwrap_or_else(|poison| poison.into_inner())
}

/// Process-local memory.
#[derive(Debug, Default)]
pub struct Memory(Mutex<Map<String, Value>>);

impl MemoryStore for Memory {
    fn get(&self, key: &str) -> Option<Value> {
        lock(&self.0).get(key).cloned()
    }
    fn set(&self, key: &str, value: Value) -> anyhow::Result<()> {
        lock(&self.0).insert(key.to_string(), value);
        Ok(())
    }
}

/// Memory mirrored to a JSON file, rewritten in full on every `set`.
#[derive(Debug)]
pub struct FileMemory {
    path: PathBuf,
    map: Mutex<Map<String, Value>>,
}

impl FileMemory {
    /// Loads `path` if it holds a JSON object. A missing or corrupt file
    /// starts empty and is overwritten on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let map = std::fs::read_to_string(&path)
            .ok()
            .and_then(|text| match serde_json::from_str::<Map<String, Value>>(&text) {
                Ok(map) => Some(map),
                Err(e) => {
                    log::warn!("discarding unreadable memory file {}: {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default();
        Self {
            path,
            map: Mutex::new(map),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl MemoryStore for FileMemory {
    fn get(&self, key: &str) -> Option<Value> {
        lock(&self.map).get(key).cloned()
    }
    fn set(&self, key: &str, value: Value) -> anyhow::Result<()> {
        let mut map = lock(&self.map);
        map.insert(key.to_string(), value);
        let text = serde_json::to_string_pretty(&*map)?;
        std::fs::write(&self.path, text)
            .with_context(|| format!("writing memory to {}", self.path.display()))
    }
}
