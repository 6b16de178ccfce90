//! In-memory storage implementation, mainly for tests.

use super::{Storage, StorageError, StorageResult};
use crate::canvas::CanvasDocument;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage backed by a map of serialized documents.
#[derive(Default)]
pub struct MemoryStorage {
    documents: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_err() -> StorageError {
        StorageError::Io("Storage lock poisoned".to_string())
    }
}

impl Storage for MemoryStorage {
    fn save(&self, id: &str, document: &CanvasDocument) -> StorageResult<()> {
        let json = document
            .to_json()
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let mut docs = self.documents.write().map_err(|_| Self::lock_err())?;
        docs.insert(id.to_string(), json);
        Ok(())
    }

    fn load(&self, id: &str) -> StorageResult<CanvasDocument> {
        let docs = self.documents.read().map_err(|_| Self::lock_err())?;
        let json = docs
            .get(id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;
        CanvasDocument::from_json(json).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    fn delete(&self, id: &str) -> StorageResult<()> {
        let mut docs = self.documents.write().map_err(|_| Self::lock_err())?;
        docs.remove(id);
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let docs = self.documents.read().map_err(|_| Self::lock_err())?;
        Ok(docs.keys().cloned().collect())
    }

    fn exists(&self, id: &str) -> StorageResult<bool> {
        let docs = self.documents.read().map_err(|_| Self::lock_err())?;
        Ok(docs.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_delete() {
        let storage = MemoryStorage::new();
        let mut doc = CanvasDocument::new();
        doc.name = "Memory".to_string();

        storage.save("a", &doc).unwrap();
        assert!(storage.exists("a").unwrap());
        assert_eq!(storage.load("a").unwrap().name, "Memory");

        storage.delete("a").unwrap();
        assert!(!storage.exists("a").unwrap());
        assert!(matches!(storage.load("a"), Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_list() {
        let storage = MemoryStorage::new();
        let doc = CanvasDocument::new();
        storage.save("one", &doc).unwrap();
        storage.save("two", &doc).unwrap();

        let mut list = storage.list().unwrap();
        list.sort();
        assert_eq!(list, vec!["one".to_string(), "two".to_string()]);
    }
}
