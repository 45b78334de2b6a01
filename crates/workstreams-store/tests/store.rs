//! Integration tests exercising the store against real directory trees.

use std::fs;
use std::path::Path;

use tempfile::tempdir;
use workstreams_store::{
    Document, Store, StoreError, COMMANDS_DIR, CURRENT_STREAM_FILE, STREAMS_DIR, STREAM_FILE,
    TEMPLATES_DIR,
};

fn write_stream(root: &Path, name: &str, yaml: &str) {
    let dir = root.join(STREAMS_DIR).join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(STREAM_FILE), yaml).unwrap();
}

fn write_template(root: &Path, file: &str, yaml: &str) {
    let dir = root.join(TEMPLATES_DIR);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), yaml).unwrap();
}

#[test]
fn empty_root_reads_as_uninitialized_and_empty() {
    let dir = tempdir().unwrap();
    let store = Store::at(dir.path().join(".claude"));

    assert!(!store.is_initialized());
    assert!(store.current_stream().unwrap().is_none());
    assert!(store.streams().unwrap().is_empty());
    assert!(store.templates().unwrap().is_empty());
}

#[test]
fn stream_enumeration_skips_non_streams() {
    let dir = tempdir().unwrap();
    let root = dir.path().join(".claude");
    let store = Store::at(&root);

    write_stream(&root, "checkout-flow", "name: checkout-flow\nstatus: active\n");
    write_stream(&root, "login-fix", "name: login-fix\nstatus: paused\n");
    // A directory with no state file, a stray file, and the pointer file
    // must all be ignored.
    fs::create_dir_all(root.join(STREAMS_DIR).join("scratch")).unwrap();
    fs::write(root.join(STREAMS_DIR).join("notes.txt"), "not a stream").unwrap();
    fs::write(
        root.join(STREAMS_DIR).join(CURRENT_STREAM_FILE),
        "checkout-flow",
    )
    .unwrap();

    let mut names: Vec<String> = store
        .streams()
        .unwrap()
        .iter()
        .map(|s| s.name().unwrap().to_owned())
        .collect();
    names.sort();
    assert_eq!(names, ["checkout-flow", "login-fix"]);
}

#[test]
fn stream_enumeration_propagates_parse_failures() {
    let dir = tempdir().unwrap();
    let root = dir.path().join(".claude");
    let store = Store::at(&root);

    write_stream(&root, "good", "name: good\n");
    write_stream(&root, "bad", "name: [unterminated\n");

    assert!(matches!(store.streams(), Err(StoreError::Yaml(_))));
}

// Existence is defined by the backing file, not its contents: an empty
// file is an empty document, not a missing or malformed one.
#[test]
fn empty_files_read_as_empty_documents() {
    let dir = tempdir().unwrap();
    let root = dir.path().join(".claude");
    let store = Store::at(&root);

    write_stream(&root, "blank", "");
    write_template(&root, "blank.yaml", "");

    let stream = store.stream("blank").unwrap().unwrap();
    assert!(stream.as_mapping().is_empty());
    assert_eq!(store.streams().unwrap().len(), 1);

    let templates = store.templates().unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].name(), Some("blank"));
    assert_eq!(templates[0].as_mapping().len(), 1);
}

#[test]
fn template_enumeration_filters_and_stamps_names() {
    let dir = tempdir().unwrap();
    let root = dir.path().join(".claude");
    let store = Store::at(&root);

    write_template(&root, "bug-fix.yaml", "description: x\n");
    // The file's own name field loses to the filename-derived one.
    write_template(&root, "refactoring.yaml", "name: something-else\nphases: 3\n");
    write_template(&root, "README.md", "not yaml");
    write_template(&root, ".hidden.yaml", "description: hidden\n");
    write_template(&root, "notes.yml", "description: wrong extension\n");
    fs::create_dir_all(root.join(TEMPLATES_DIR).join("custom")).unwrap();

    let templates = store.templates().unwrap();
    let mut names: Vec<&str> = templates.iter().map(|t| t.name().unwrap()).collect();
    names.sort();
    assert_eq!(names, ["bug-fix", "refactoring"]);

    let refactoring = templates
        .iter()
        .find(|t| t.name() == Some("refactoring"))
        .unwrap();
    assert_eq!(
        refactoring.get("phases"),
        Some(&serde_yaml::Value::from(3))
    );
}

#[test]
fn template_lookup_and_listing_agree_on_contents() {
    let dir = tempdir().unwrap();
    let root = dir.path().join(".claude");
    let store = Store::at(&root);

    write_template(&root, "bug-fix.yaml", "description: x\n");

    let looked_up = store.template("bug-fix").unwrap().unwrap();
    assert_eq!(
        looked_up.get("description"),
        Some(&serde_yaml::Value::from("x"))
    );
    assert!(looked_up.name().is_none());

    let listed = &store.templates().unwrap()[0];
    assert_eq!(listed.name(), Some("bug-fix"));
    assert_eq!(listed.description(), Some("x"));
}

#[test]
fn documents_round_trip_through_the_filesystem() {
    let dir = tempdir().unwrap();
    let root = dir.path().join(".claude");
    let store = Store::at(&root);

    let original: Document = serde_yaml::from_str(
        "name: payment-retry\nstatus: active\ncheckpoints:\n  - step: design\n    done: true\n  - step: build\n    done: false\n",
    )
    .unwrap();
    write_stream(
        &root,
        "payment-retry",
        &serde_yaml::to_string(&original).unwrap(),
    );

    let read_back = store.stream("payment-retry").unwrap().unwrap();
    assert_eq!(read_back, original);
}

#[test]
fn current_stream_follows_pointer_to_document() {
    let dir = tempdir().unwrap();
    let root = dir.path().join(".claude");
    let store = Store::at(&root);

    write_stream(&root, "my-stream", "name: my-stream\ngoal: ship it\n");
    write_stream(&root, "other", "name: other\n");
    fs::write(root.join(STREAMS_DIR).join(CURRENT_STREAM_FILE), "my-stream\n").unwrap();

    let current = store.current_stream().unwrap().unwrap();
    assert_eq!(
        current.get("goal"),
        Some(&serde_yaml::Value::from("ship it"))
    );
}

#[test]
fn initialization_check_matches_layout() {
    let dir = tempdir().unwrap();
    let root = dir.path().join(".claude");
    let store = Store::at(&root);

    fs::create_dir_all(root.join(COMMANDS_DIR)).unwrap();
    assert!(!store.is_initialized());
    fs::create_dir_all(root.join(TEMPLATES_DIR)).unwrap();
    assert!(store.is_initialized());
}
