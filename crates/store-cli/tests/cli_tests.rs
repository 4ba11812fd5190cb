//! Tests that run the compiled `formstore` binary against temporary stores.

use assert_cmd::Command;
use predicates::prelude::*;
use store_model::{EntityKind, RootKind};
use store_test_utils::TestStore;

fn formstore(store: &TestStore) -> Command {
    let mut cmd = Command::cargo_bin("formstore").expect("Failed to find formstore binary");
    cmd.arg("--store").arg(store.store().settings().root.as_os_str());
    cmd.env_remove("FORMSTORE_DIR").env_remove("FORMSTORE_CONFIG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    Command::cargo_bin("formstore")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("children"))
        .stdout(predicate::str::contains("descendants"))
        .stdout(predicate::str::contains("create-folder"));
}

#[test]
fn test_roots_lists_all_four() {
    let store = TestStore::new();
    formstore(&store)
        .arg("roots")
        .assert()
        .success()
        .stdout(predicate::str::contains("Forms"))
        .stdout(predicate::str::contains("Layouts"))
        .stdout(predicate::str::contains("Validation Library"))
        .stdout(predicate::str::contains("Data Values"));
}

#[test]
fn test_get_json_includes_kind_tag() {
    let store = TestStore::new();
    let form = store.add_form(&TestStore::root_path(RootKind::Forms), "Contact");

    let output = formstore(&store)
        .args(["get", &form.header.id.to_string(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["Kind"], "Form");
    assert_eq!(json["Name"], "Contact");
}

#[test]
fn test_get_unknown_id_fails() {
    let store = TestStore::new();
    formstore(&store)
        .args(["get", "3b241101-e2bb-4255-8caf-4136c566a962"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No entity with id"));
}

#[test]
fn test_get_rejects_malformed_id() {
    let store = TestStore::new();
    formstore(&store).args(["get", "not-a-guid"]).assert().failure();
}

#[test]
fn test_children_of_folder() {
    let store = TestStore::new();
    let folder = store.add_folder(&TestStore::root_path(RootKind::Forms), "Marketing");
    store.add_form(&folder.header.path, "Newsletter");

    formstore(&store)
        .args(["children", "--parent", &folder.header.id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Newsletter"));
}

#[test]
fn test_children_without_parent_lists_top_level() {
    let store = TestStore::new();
    store.add_folder(&TestStore::root_path(RootKind::Forms), "Top");

    let output = formstore(&store).args(["children", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.len(), 1);
    assert_eq!(json[0]["Name"], "Top");
}

#[test]
fn test_descendants_reaches_nested_forms() {
    let store = TestStore::new();
    let outer = store.add_folder(&TestStore::root_path(RootKind::Forms), "Outer");
    let inner = store.add_folder(&outer.header.path, "Inner");
    store.add_form(&inner.header.path, "Deep");

    formstore(&store)
        .args(["descendants", &outer.header.id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inner"))
        .stdout(predicate::str::contains("Deep"));
}

#[test]
fn test_create_folder_defaults_to_forms_root() {
    let store = TestStore::new();
    formstore(&store)
        .args(["create-folder", "Campaigns"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created folder"));

    let reopened = store.reopen();
    let top = reopened.entities().retrieve_children(None).unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].name(), "Campaigns");
    assert_eq!(top[0].kind(), EntityKind::Folder);
    assert_eq!(top[0].path().root_marker(), Some(RootKind::Forms.id()));
}

#[test]
fn test_create_folder_inside_form_is_rejected() {
    let store = TestStore::new();
    let form = store.add_form(&TestStore::root_path(RootKind::Forms), "Contact");

    formstore(&store)
        .args(["create-folder", "Nope", "--parent", &form.header.id.to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot create a folder"));
}

#[test]
fn test_move_form_into_folder() {
    let store = TestStore::new();
    let folder = store.add_folder(&TestStore::root_path(RootKind::Forms), "Archive");
    let form = store.add_form(&TestStore::root_path(RootKind::Forms), "Old");

    formstore(&store)
        .args([
            "move",
            &form.header.id.to_string(),
            "--parent",
            &folder.header.id.to_string(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved"));

    let reopened = store.reopen();
    let children = reopened
        .entities()
        .retrieve_children(Some(folder.header.id))
        .unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].id(), form.header.id);
}

#[test]
fn test_move_folder_into_itself_fails() {
    let store = TestStore::new();
    let folder = store.add_folder(&TestStore::root_path(RootKind::Forms), "Loop");
    let id = folder.header.id.to_string();

    formstore(&store)
        .args(["move", &id, "--parent", &id])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_delete_removes_file() {
    let store = TestStore::new();
    let layout = store.add_layout(&TestStore::root_path(RootKind::Layouts), "Two columns");

    formstore(&store)
        .args(["delete", &layout.header.id.to_string()])
        .assert()
        .success();

    store.assert_entity_file_not_exists(EntityKind::Layout, layout.header.id);
}

#[test]
fn test_delete_root_fails() {
    let store = TestStore::new();
    formstore(&store)
        .args(["delete", &RootKind::Forms.id().to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_store_dir_from_environment() {
    let store = TestStore::new();
    store.add_folder(&TestStore::root_path(RootKind::Forms), "FromEnv");

    Command::cargo_bin("formstore")
        .unwrap()
        .env("FORMSTORE_DIR", store.store().settings().root.as_os_str())
        .env_remove("FORMSTORE_CONFIG")
        .arg("children")
        .assert()
        .success()
        .stdout(predicate::str::contains("FromEnv"));
}

#[test]
fn test_move_layout_into_forms_section_is_rejected() {
    let store = TestStore::new();
    let folder = store.add_folder(&TestStore::root_path(RootKind::Forms), "Campaigns");
    let layout = store.add_layout(&TestStore::root_path(RootKind::Layouts), "Wide");

    formstore(&store)
        .args([
            "move",
            &layout.header.id.to_string(),
            "--parent",
            &folder.header.id.to_string(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of the Layouts section"));

    let reopened = store.reopen();
    let loaded = reopened.entities().retrieve(layout.header.id).unwrap().unwrap();
    assert_eq!(loaded.path(), &TestStore::root_path(RootKind::Layouts).child(layout.header.id));
}

#[test]
fn test_move_folder_between_sections_is_allowed() {
    let store = TestStore::new();
    let folder = store.add_folder(&TestStore::root_path(RootKind::Forms), "Shared");

    formstore(&store)
        .args([
            "move",
            &folder.header.id.to_string(),
            "--parent",
            &RootKind::Layouts.id().to_string(),
        ])
        .assert()
        .success();
}
