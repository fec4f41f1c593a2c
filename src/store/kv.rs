use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::store::saved::SavedPolicyItem;

/// The fixed key the saved-policy list is stored under.
pub const STORAGE_KEY: &str = "nl2policy.savedPolicies.v1";

/// File-backed key-value store holding the ordered saved-policy list
/// (newest first) under [`STORAGE_KEY`].
///
/// Reads never fail: a missing or corrupt file yields an empty list so that
/// broken stored state cannot break policy generation or listing.
#[derive(Debug, Clone)]
pub struct PolicyStore {
    path: PathBuf,
}

impl PolicyStore {
    /// Open a store at the given file path. The file is created on first save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        PolicyStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load all saved policies, newest first. Missing or corrupt data yields
    /// an empty list.
    pub fn load(&self) -> Vec<SavedPolicyItem> {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        let Ok(mut map) = serde_json::from_str::<HashMap<String, Vec<SavedPolicyItem>>>(&raw)
        else {
            return Vec::new();
        };
        map.remove(STORAGE_KEY).unwrap_or_default()
    }

    /// Persist the full policy list, replacing any previous contents.
    pub fn save(&self, items: &[SavedPolicyItem]) -> Result<(), String> {
        let mut map = HashMap::new();
        map.insert(STORAGE_KEY.to_string(), items);
        let json = serde_json::to_string_pretty(&map)
            .map_err(|e| format!("Failed to serialize policy store: {e}"))?;
        std::fs::write(&self.path, json)
            .map_err(|e| format!("Failed to write {}: {e}", self.path.display()))
    }

    /// Prepend a newly saved policy and persist.
    pub fn insert(&self, item: SavedPolicyItem) -> Result<(), String> {
        let mut items = self.load();
        items.insert(0, item);
        self.save(&items)
    }

    /// Delete a saved policy by id. Returns whether an item was removed.
    pub fn delete(&self, id: &str) -> Result<bool, String> {
        let mut items = self.load();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Ok(false);
        }
        self.save(&items)?;
        Ok(true)
    }
}
