use atelier_core::catalog::{Catalog, UndoSlot};
use atelier_core::models::{NewWork, WorkType};
use atelier_storage::store::{CatalogStore, JsonFileStore, MemoryStore};

fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::default();
    catalog.add(NewWork::new("Song", WorkType::Music, "https://drive.google.com/s"));
    catalog.add(
        NewWork::new("Essay", WorkType::Writing, "https://docs.google.com/e")
            .with_description("final"),
    );
    catalog
}

#[test]
fn missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("works.json"));
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("nested/works.json"));
    let catalog = sample_catalog();

    store.save_catalog(&catalog).unwrap();
    assert_eq!(store.load_catalog().unwrap(), catalog);
    assert!(!dir.path().join("nested/works.json.tmp").exists());
}

#[test]
fn save_replaces_the_whole_collection() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("works.json"));

    store.save_catalog(&sample_catalog()).unwrap();
    store.save_all(&[]).unwrap();
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn corrupt_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("works.json");
    std::fs::write(&path, "{ definitely not a catalog").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn undo_slot_persists_and_clears() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("works.json"));
    let mut catalog = sample_catalog();
    let id = catalog.records()[0].id.clone();

    let mut undo = store.load_undo().unwrap();
    let removed = catalog.delete(&id, &mut undo).unwrap();
    store.save_undo(&undo).unwrap();
    assert!(store.undo_path().exists());

    let mut reloaded = store.load_undo().unwrap();
    assert_eq!(reloaded.peek(), Some(&removed));

    reloaded.take();
    store.save_undo(&reloaded).unwrap();
    assert!(!store.undo_path().exists());
    assert_eq!(store.load_undo().unwrap(), UndoSlot::default());
}

#[test]
fn memory_store_round_trips() {
    let store = MemoryStore::default();
    let catalog = sample_catalog();
    store.save_catalog(&catalog).unwrap();
    assert_eq!(store.load_catalog().unwrap(), catalog);
}
