// Directory-backed sample store: the on-disk layout, the compact entity
// arrays, snapshot persistence, and the missing/malformed-file policy.

mod test_helpers;

use std::fs;
use std::path::{Path, PathBuf};

use labeler::state::{DirSampleStore, SampleStore};
use labeler::{Entity, SessionError};
use test_helpers::{bbox, pt};

/// Fresh dataset root under the system temp directory.
fn dataset_root(tag: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("labeler-dataset-{}-{tag}", std::process::id()));
    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(root.join("images")).unwrap();
    root
}

fn write_samples(root: &Path, names: &[&str]) {
    fs::write(root.join("samples.txt"), names.join("\n")).unwrap();
}

fn write_image(root: &Path, name: &str, width: u32, height: u32) {
    let path = root.join("images").join(format!("{name}.png"));
    image::RgbImage::new(width, height).save(path).unwrap();
}

#[test]
fn open_reads_the_sample_list() {
    let root = dataset_root("open");
    write_samples(&root, &["frame_000", "frame_001", "", "  ", "frame_002"]);

    let store = DirSampleStore::open(&root).unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(store.sample_name(0), "frame_000");
    assert_eq!(store.sample_name(2), "frame_002");
}

#[test]
fn open_fails_on_an_empty_sample_list() {
    let root = dataset_root("empty");
    write_samples(&root, &[]);
    assert!(matches!(
        DirSampleStore::open(&root),
        Err(SessionError::NoSamples)
    ));
}

#[test]
fn open_fails_without_a_sample_list() {
    let root = dataset_root("missing-list");
    assert!(matches!(
        DirSampleStore::open(&root),
        Err(SessionError::Io(_))
    ));
}

#[test]
fn annotations_round_trip_through_compact_arrays() {
    let root = dataset_root("roundtrip");
    write_samples(&root, &["a"]);
    let store = DirSampleStore::open(&root).unwrap();

    let entities = vec![
        Entity::Point(pt(12, 34)),
        Entity::Region(bbox(1, 2, 30, 40)),
        Entity::Point(pt(12, 34)), // duplicates are legal
    ];
    store.save_annotations(0, &entities).unwrap();

    // The file is the legacy array-of-arrays form.
    let raw = fs::read_to_string(root.join("annotations/a.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0], serde_json::json!([12, 34]));
    assert_eq!(value[1], serde_json::json!([1, 2, 30, 40]));

    assert_eq!(store.load_annotations(0).unwrap(), entities);
}

#[test]
fn missing_annotation_file_loads_as_empty() {
    let root = dataset_root("missing-ann");
    write_samples(&root, &["a"]);
    let store = DirSampleStore::open(&root).unwrap();
    assert!(store.load_annotations(0).unwrap().is_empty());
}

#[test]
fn malformed_annotation_file_loads_as_empty() {
    let root = dataset_root("malformed");
    write_samples(&root, &["a"]);
    fs::create_dir_all(root.join("annotations")).unwrap();
    fs::write(root.join("annotations/a.json"), "{not json").unwrap();

    let store = DirSampleStore::open(&root).unwrap();
    assert!(store.load_annotations(0).unwrap().is_empty());
}

#[test]
fn empty_annotation_sets_are_not_written() {
    let root = dataset_root("skip-empty");
    write_samples(&root, &["a"]);
    let store = DirSampleStore::open(&root).unwrap();

    store.save_annotations(0, &[]).unwrap();
    assert!(!root.join("annotations/a.json").exists());
}

#[test]
fn image_dimensions_come_from_the_file_header() {
    let root = dataset_root("dims");
    write_samples(&root, &["a"]);
    write_image(&root, "a", 64, 48);

    let store = DirSampleStore::open(&root).unwrap();
    assert_eq!(store.image_dimensions(0).unwrap(), (64, 48));
}

#[test]
fn missing_image_is_fatal() {
    let root = dataset_root("no-image");
    write_samples(&root, &["ghost"]);
    let store = DirSampleStore::open(&root).unwrap();
    assert!(matches!(
        store.image_dimensions(0),
        Err(SessionError::ImageNotFound { .. })
    ));
}

#[test]
fn snapshot_round_trips() {
    let root = dataset_root("snapshot");
    write_samples(&root, &["a", "b", "c"]);
    let store = DirSampleStore::open(&root).unwrap();

    assert_eq!(store.load_snapshot(), None);
    store.save_snapshot(2).unwrap();
    assert_eq!(store.load_snapshot(), Some(2));

    // The progress file is plain JSON with the sample index.
    let raw = fs::read_to_string(root.join("snapshot.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["samples_id"], 2);
}

#[test]
fn corrupt_snapshot_is_ignored() {
    let root = dataset_root("bad-snapshot");
    write_samples(&root, &["a"]);
    fs::write(root.join("snapshot.json"), "nope").unwrap();

    let store = DirSampleStore::open(&root).unwrap();
    assert_eq!(store.load_snapshot(), None);
}
