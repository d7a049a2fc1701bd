use schoolmap_core::db::open_db;
use schoolmap_core::{
    CancellationToken, LocationStore, NewSchool, SchoolRepository, SqliteSchoolRepository,
    StoreError,
};
use std::collections::HashSet;
use tempfile::TempDir;

fn temp_store() -> (TempDir, LocationStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = LocationStore::new(dir.path().join("data").join("schools.db"));
    (dir, store)
}

#[test]
fn initialize_seeds_exactly_twenty_five_records() {
    let (_dir, store) = temp_store();
    let cancel = CancellationToken::new();

    store.initialize(&cancel).unwrap();

    let all = store.get_all(&cancel).unwrap();
    assert_eq!(all.len(), 25);
    assert_eq!(all[0].name, "Adams High School");

    let kennedy = all
        .iter()
        .find(|s| s.name == "Kennedy High School")
        .expect("seed must contain Kennedy High School");
    assert!((kennedy.latitude - 37.774929).abs() < 1e-6);
    assert!((kennedy.longitude - -122.419418).abs() < 1e-6);
    assert_eq!(kennedy.city.as_deref(), Some("San Francisco"));
    assert_eq!(kennedy.state.as_deref(), Some("CA"));
}

#[test]
fn initialize_is_idempotent() {
    let (_dir, store) = temp_store();
    let cancel = CancellationToken::new();

    store.initialize(&cancel).unwrap();
    store.initialize(&cancel).unwrap();

    assert_eq!(store.get_all(&cancel).unwrap().len(), 25);
}

#[test]
fn get_all_is_sorted_by_name_with_unique_stable_ids() {
    let (_dir, store) = temp_store();
    let cancel = CancellationToken::new();
    store.initialize(&cancel).unwrap();

    let all = store.get_all(&cancel).unwrap();

    let names: Vec<&str> = all.iter().map(|s| s.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    let ids: HashSet<i64> = all.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), all.len());

    // Ids are stable across reads.
    let again = store.get_all(&cancel).unwrap();
    assert_eq!(all, again);
}

#[test]
fn every_record_has_required_fields() {
    let (_dir, store) = temp_store();
    let cancel = CancellationToken::new();
    store.initialize(&cancel).unwrap();

    for school in store.get_all(&cancel).unwrap() {
        assert!(!school.name.trim().is_empty());
        assert!(school.latitude.is_finite());
        assert!(school.longitude.is_finite());
    }
}

#[test]
fn initialize_skips_seeding_when_rows_already_exist() {
    let (_dir, store) = temp_store();
    let cancel = CancellationToken::new();

    std::fs::create_dir_all(store.db_path().parent().unwrap()).unwrap();
    let conn = open_db(store.db_path()).unwrap();
    SqliteSchoolRepository::new(&conn)
        .insert_school(&NewSchool::new("Existing High School", 1.0, 2.0, None, None))
        .unwrap();
    drop(conn);

    store.initialize(&cancel).unwrap();

    let all = store.get_all(&cancel).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Existing High School");
}

#[test]
fn get_all_fails_when_store_was_never_initialized() {
    let (_dir, store) = temp_store();
    std::fs::create_dir_all(store.db_path().parent().unwrap()).unwrap();
    let cancel = CancellationToken::new();

    let err = store.get_all(&cancel).unwrap_err();
    match err {
        StoreError::Db(_) | StoreError::Repo(_) => {}
        other => panic!("expected schema-level failure, got {other}"),
    }
}

#[test]
fn pre_cancelled_token_fails_fast_and_leaves_no_rows() {
    let (_dir, store) = temp_store();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = store.initialize(&cancel).unwrap_err();
    assert!(matches!(err, StoreError::Cancelled));

    // Nothing was seeded: a fresh initialize still finds an empty store
    // and inserts all 25 records.
    let active = CancellationToken::new();
    store.initialize(&active).unwrap();
    assert_eq!(store.get_all(&active).unwrap().len(), 25);
}

#[test]
fn get_all_honors_cancellation() {
    let (_dir, store) = temp_store();
    let active = CancellationToken::new();
    store.initialize(&active).unwrap();

    let cancelled = CancellationToken::new();
    cancelled.cancel();
    let err = store.get_all(&cancelled).unwrap_err();
    assert!(matches!(err, StoreError::Cancelled));
}

#[test]
fn store_error_display_names_cancellation() {
    assert_eq!(StoreError::Cancelled.to_string(), "operation cancelled");
}
