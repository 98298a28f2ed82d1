//! Delete entry use case

use crate::error::Result;
use crate::infrastructure::{EntryStore, JsonEntryStore};

/// Remove an entry by id. Deleting an id that is not stored succeeds
/// without changing the collection.
pub fn delete_entry(store: &JsonEntryStore, id: &str) -> Result<()> {
    store.delete(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::CreateEntryService;
    use crate::infrastructure::DiaryRepository;
    use tempfile::TempDir;

    #[test]
    fn test_delete_then_read_all_excludes_entry() {
        let temp = TempDir::new().unwrap();
        let repo = DiaryRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        let store = JsonEntryStore::new(repo);

        let entry = CreateEntryService::new(store.clone())
            .execute(Some(1), "soon to be gone")
            .unwrap();

        delete_entry(&store, &entry.id).unwrap();

        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_delete_unknown_id_succeeds() {
        let temp = TempDir::new().unwrap();
        let repo = DiaryRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        let store = JsonEntryStore::new(repo);

        assert!(delete_entry(&store, "ghost").is_ok());
    }
}
