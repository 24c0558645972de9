use atelier_core::catalog::{Catalog, UndoSlot};
use atelier_core::error::CoreError;
use atelier_core::models::{NewWork, WorkPatch, WorkType};
use atelier_core::view::{SortOrder, TypeFilter, ViewQuery};

fn work(title: &str, work_type: WorkType) -> NewWork {
    NewWork::new(title, work_type, "https://drive.google.com/file/d/x")
}

#[test]
fn add_assigns_identity() {
    let mut catalog = Catalog::default();
    let a = catalog.add(work("A", WorkType::Art));
    let b = catalog.add(work("B", WorkType::Art));

    assert_ne!(a.id, b.id);
    assert!(a.created_at.parse::<jiff::Timestamp>().is_ok());
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(&a.id), Some(&a));
}

#[test]
fn add_many_preserves_order() {
    let mut catalog = Catalog::default();
    let created = catalog.add_many(vec![work("1", WorkType::Music), work("2", WorkType::Video)]);
    assert_eq!(created.len(), 2);
    let titles: Vec<_> = catalog.records().iter().map(|w| w.title.as_str()).collect();
    assert_eq!(titles, vec!["1", "2"]);
}

#[test]
fn update_keeps_id_and_created_at() {
    let mut catalog = Catalog::default();
    let original = catalog.add(work("Draft", WorkType::Writing).with_description("old"));

    let patch = WorkPatch {
        title: Some("Final".to_string()),
        work_type: Some(WorkType::Design),
        description: Some(None),
        ..WorkPatch::default()
    };
    let updated = catalog.update(&original.id, &patch).unwrap().clone();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.work_type, WorkType::Design);
    assert_eq!(updated.description, None);
    assert_eq!(updated.drive_url, original.drive_url);
}

#[test]
fn update_unknown_id_is_not_found() {
    let mut catalog = Catalog::default();
    let err = catalog.update("missing", &WorkPatch::default()).unwrap_err();
    assert!(matches!(err, CoreError::NotFound(id) if id == "missing"));
}

#[test]
fn delete_then_undo_restores_record() {
    let mut catalog = Catalog::default();
    let keep = catalog.add(work("Keep", WorkType::Art));
    let gone = catalog.add(work("Gone", WorkType::Art));
    let mut undo = UndoSlot::default();

    catalog.delete(&gone.id, &mut undo).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(undo.peek(), Some(&gone));

    let restored = catalog.undo_delete(&mut undo).unwrap();
    assert_eq!(restored, Some(gone.clone()));
    assert_eq!(catalog.records(), &[keep, gone]);
    assert!(undo.peek().is_none());

    assert_eq!(catalog.undo_delete(&mut undo).unwrap(), None);
}

#[test]
fn only_the_latest_delete_is_undoable() {
    let mut catalog = Catalog::default();
    let first = catalog.add(work("First", WorkType::Art));
    let second = catalog.add(work("Second", WorkType::Art));
    let mut undo = UndoSlot::default();

    catalog.delete(&first.id, &mut undo).unwrap();
    catalog.delete(&second.id, &mut undo).unwrap();
    catalog.undo_delete(&mut undo).unwrap();

    assert_eq!(catalog.records(), &[second]);
}

#[test]
fn restore_refuses_duplicate_ids() {
    let mut catalog = Catalog::default();
    let a = catalog.add(work("A", WorkType::Art));
    let err = catalog.restore(a).unwrap_err();
    assert!(matches!(err, CoreError::DuplicateId(_)));
}

#[test]
fn failed_undo_keeps_the_pending_record() {
    let mut catalog = Catalog::default();
    let gone = catalog.add(work("Gone", WorkType::Art));
    let mut undo = UndoSlot::default();
    catalog.delete(&gone.id, &mut undo).unwrap();

    // The same id came back some other way, e.g. a merge of an old backup.
    catalog.restore(gone.clone()).unwrap();

    let err = catalog.undo_delete(&mut undo).unwrap_err();
    assert!(matches!(err, CoreError::DuplicateId(id) if id == gone.id));
    assert_eq!(undo.peek(), Some(&gone));
    assert_eq!(catalog.len(), 1);
}

#[test]
fn delete_unknown_id_leaves_undo_untouched() {
    let mut catalog = Catalog::default();
    let mut undo = UndoSlot::default();
    assert!(catalog.delete("nope", &mut undo).is_err());
    assert!(undo.peek().is_none());
}

#[test]
fn view_filters_searches_and_sorts() {
    let mut catalog = Catalog::default();
    let mut add = |title: &str, t: WorkType, desc: Option<&str>, created: &str| {
        let mut w = work(title, t);
        w.description = desc.map(str::to_string);
        let mut r = catalog.add(w);
        r.created_at = created.to_string();
        r
    };
    let records = vec![
        add("banana song", WorkType::Music, None, "2024-01-02T00:00:00Z"),
        add("Apple poem", WorkType::Writing, Some("about fruit"), "2024-01-03T00:00:00Z"),
        add("Cherry mix", WorkType::Music, Some("FRUIT remix"), "2024-01-01T00:00:00Z"),
    ];
    let catalog = Catalog::new(records);

    let titles = |q: &ViewQuery| -> Vec<String> {
        catalog.view(q).into_iter().map(|w| w.title.clone()).collect()
    };

    let newest = ViewQuery::default();
    assert_eq!(titles(&newest), vec!["Apple poem", "banana song", "Cherry mix"]);

    let oldest = ViewQuery { sort: SortOrder::Oldest, ..ViewQuery::default() };
    assert_eq!(titles(&oldest), vec!["Cherry mix", "banana song", "Apple poem"]);

    let by_title = ViewQuery { sort: SortOrder::TitleAsc, ..ViewQuery::default() };
    assert_eq!(titles(&by_title), vec!["Apple poem", "banana song", "Cherry mix"]);

    let desc = ViewQuery { sort: SortOrder::TitleDesc, ..ViewQuery::default() };
    assert_eq!(titles(&desc), vec!["Cherry mix", "banana song", "Apple poem"]);

    let music = ViewQuery {
        filter: TypeFilter::Only(WorkType::Music),
        ..ViewQuery::default()
    };
    assert_eq!(titles(&music), vec!["banana song", "Cherry mix"]);

    let fruit = ViewQuery {
        search: "  Fruit ".to_string(),
        sort: SortOrder::TitleAsc,
        ..ViewQuery::default()
    };
    assert_eq!(titles(&fruit), vec!["Apple poem", "Cherry mix"]);

    let none = ViewQuery {
        filter: TypeFilter::Only(WorkType::Video),
        ..ViewQuery::default()
    };
    assert!(titles(&none).is_empty());
}
