//! End-to-end scenarios across the store crates
//!
//! Each test builds a small tree on disk and checks one observable property
//! of the store: round trips, freshness, partitioning, moves and deletes.

use std::fs;
use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use store_cache::FreshnessCache;
use store_core::{EntityStore, StoreSettings};
use store_model::{
    ConfiguredForm, Entity, EntityKind, EntityPath, EntityRecord, Form, FormField, RootKind,
};
use store_test_utils::TestStore;
use uuid::Uuid;

// ============================================================================
// Round trip
// ============================================================================

#[test]
fn every_kind_survives_a_round_trip_through_a_fresh_process() {
    let store = TestStore::new();
    let folder = store.add_folder(&TestStore::root_path(RootKind::Forms), "Sales");

    let mut form = Form::new(Uuid::new_v4(), &folder.header.path, "Quote request");
    form.fields.push(FormField {
        id: Uuid::new_v4(),
        field_type: "text".to_string(),
        name: "Company".to_string(),
        alias: "company".to_string(),
        label: "Company name".to_string(),
        category: None,
        validations: vec![],
        configuration: serde_json::json!({ "maxLength": 120 }),
    });
    store.entities().persist(&Entity::Form(form.clone())).unwrap();

    let conform = ConfiguredForm::new(Uuid::new_v4(), &form.header.path, "Quote page");
    store.entities().persist(&Entity::ConfiguredForm(conform.clone())).unwrap();

    let layout = store.add_layout(&TestStore::root_path(RootKind::Layouts), "Wide");
    let validation = store.add_validation(&TestStore::root_path(RootKind::Validations), "Email");
    let value = store.add_data_value(&TestStore::root_path(RootKind::DataValues), "Countries");

    let expected: Vec<Entity> = vec![
        folder.into(),
        form.into(),
        conform.into(),
        layout.into(),
        validation.into(),
        value.into(),
    ];

    let reopened = store.reopen();
    for entity in &expected {
        let loaded = reopened.entities().retrieve(entity.id()).unwrap();
        assert_eq!(loaded.as_ref(), Some(entity));
    }
}

// ============================================================================
// Freshness
// ============================================================================

#[test]
fn write_is_visible_to_a_reader_on_another_thread() {
    let store = TestStore::new();
    let mut folder = store.add_folder(&TestStore::root_path(RootKind::Forms), "Before");

    // Warm the cache
    store.entities().retrieve(folder.header.id).unwrap();

    folder.header.name = "After".to_string();
    store.entities().persist(&Entity::Folder(folder.clone())).unwrap();

    let id = folder.header.id;
    let name = thread::scope(|scope| {
        scope
            .spawn(|| {
                store
                    .entities()
                    .retrieve(id)
                    .unwrap()
                    .map(|e| e.name().to_string())
            })
            .join()
            .unwrap()
    });
    assert_eq!(name.as_deref(), Some("After"));
}

#[test]
fn out_of_band_edit_with_new_size_is_picked_up() {
    let store = TestStore::new();
    let layout = store.add_layout(&TestStore::root_path(RootKind::Layouts), "Narrow");
    let path = store.entity_file(EntityKind::Layout, layout.header.id);

    assert_eq!(store.entities().layouts().retrieve_all().unwrap().len(), 1);

    let mut edited = layout.clone();
    edited.header.name = "Considerably wider".to_string();
    fs::write(&path, serde_json::to_string_pretty(&edited).unwrap()).unwrap();

    let all = store.entities().layouts().retrieve_all().unwrap();
    assert_eq!(all, vec![edited.clone()]);
    assert_eq!(
        store.entities().retrieve(layout.header.id).unwrap(),
        Some(Entity::Layout(edited))
    );
}

#[test]
fn two_stores_sharing_one_cache_agree() {
    let temp = tempfile::TempDir::new().unwrap();
    let mut settings = StoreSettings::with_root(temp.path());
    settings.fsync = false;

    let cache = Arc::new(FreshnessCache::new());
    let first = EntityStore::open_with_cache(settings.clone(), Arc::clone(&cache)).unwrap();
    let second = EntityStore::open_with_cache(settings, Arc::clone(&cache)).unwrap();

    let form = Form::new(Uuid::new_v4(), &TestStore::root_path(RootKind::Forms), "Shared");
    first.entities().persist(&Entity::Form(form.clone())).unwrap();

    assert_eq!(
        second.entities().retrieve(form.header.id).unwrap(),
        Some(Entity::Form(form))
    );
    assert!(cache.stats().hits >= 1);
}

// ============================================================================
// Children and descendants
// ============================================================================

#[test]
fn children_partition_a_kind_across_parents() {
    let store = TestStore::new();
    let root = TestStore::root_path(RootKind::Forms);
    let a = store.add_folder(&root, "A");
    let b = store.add_folder(&a.header.path, "B");
    store.add_form(&root, "Top form");
    store.add_form(&a.header.path, "In A");
    store.add_form(&b.header.path, "In B 1");
    store.add_form(&b.header.path, "In B 2");

    let forms = store.entities().forms();
    let all = forms.retrieve_all().unwrap();

    let mut seen: Vec<Uuid> = Vec::new();
    for parent in [None, Some(a.header.id), Some(b.header.id)] {
        for form in forms.retrieve_children(parent).unwrap() {
            assert_eq!(form.header.path.parent_id(), parent.or(Some(RootKind::Forms.id())));
            seen.push(form.header.id);
        }
    }
    seen.sort();

    let mut expected: Vec<Uuid> = all.iter().map(|f| f.header.id).collect();
    expected.sort();
    assert_eq!(seen, expected);
}

#[test]
fn descendants_stop_at_forms() {
    let store = TestStore::new();
    let f = store.add_folder(&TestStore::root_path(RootKind::Forms), "F");
    let g = store.add_folder(&f.header.path, "G");
    let h = store.add_form(&g.header.path, "H");
    let i = store.add_form(&f.header.path, "I");
    let below_i = store.add_configured_form(&i, "Below I");

    let ids: Vec<Uuid> = store
        .entities()
        .retrieve_descendants(f.header.id)
        .unwrap()
        .iter()
        .map(Entity::id)
        .collect();

    assert!(ids.contains(&g.header.id));
    assert!(ids.contains(&h.header.id));
    assert!(ids.contains(&i.header.id));
    assert!(!ids.contains(&below_i.header.id));
}

// ============================================================================
// Move and delete
// ============================================================================

#[test]
fn move_updates_path_and_listings() {
    let store = TestStore::new();
    let root = TestStore::root_path(RootKind::Forms);
    let a = store.add_folder(&root, "A");
    let b = store.add_folder(&root, "B");
    let form = store.add_form(&a.header.path, "Moving");

    let mut entity = Entity::Form(form.clone());
    let new_path = store.entities().move_entity(&mut entity, &b.header.path).unwrap();

    let expected = EntityPath::new(vec![RootKind::Forms.id(), b.header.id, form.header.id]);
    assert_eq!(new_path, expected);
    assert_eq!(entity.path(), &expected);

    let reopened = store.reopen();
    let loaded = reopened.entities().retrieve(form.header.id).unwrap().unwrap();
    assert_eq!(loaded.path(), &expected);

    let in_a = reopened.entities().retrieve_children(Some(a.header.id)).unwrap();
    let in_b = reopened.entities().retrieve_children(Some(b.header.id)).unwrap();
    assert!(in_a.iter().all(|e| e.id() != form.header.id));
    assert!(in_b.iter().any(|e| e.id() == form.header.id));
}

#[test]
fn delete_twice_is_quiet_and_leaves_nothing() {
    let store = TestStore::new();
    let validation = store.add_validation(&TestStore::root_path(RootKind::Validations), "Phone");
    let entity = Entity::Validation(validation.clone());

    store.entities().delete(&entity).unwrap();
    store.entities().delete(&entity).unwrap();

    assert_eq!(store.entities().retrieve(validation.header.id).unwrap(), None);
    store.assert_entity_file_not_exists(EntityKind::Validation, validation.header.id);
}

// ============================================================================
// Roots
// ============================================================================

#[test]
fn data_value_root_is_synthetic() {
    let store = TestStore::new();
    let id = RootKind::DataValues.id();

    let root = store.entities().retrieve(id).unwrap().unwrap();
    assert_eq!(root.kind(), EntityKind::Root);
    assert!(root.is_synthetic());
    assert_eq!(root.path(), &EntityPath::new(vec![id]));

    let settings = store.store().settings();
    for kind in EntityKind::PERSISTED {
        let file = settings
            .directory_for(kind)
            .join(format!("{}{}", id.simple(), settings.extension_for(kind)));
        assert!(!file.exists(), "unexpected file for {kind}");
    }
}

#[test]
fn top_level_data_values_are_listed_under_their_root() {
    let store = TestStore::new();
    let value = store.add_data_value(&TestStore::root_path(RootKind::DataValues), "Sizes");

    let children = store
        .entities()
        .retrieve_children(Some(RootKind::DataValues.id()))
        .unwrap();
    assert!(children.iter().any(|e| e.id() == value.header.id));
    assert_eq!(value.path().root_marker(), Some(RootKind::DataValues.id()));
}
