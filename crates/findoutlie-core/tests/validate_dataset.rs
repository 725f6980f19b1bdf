//! Integration test: discover the group directory under a data root and
//! validate it against its manifest, the way the CLI does.

use findoutlie_core::checksum::sha1_path;
use findoutlie_core::groups::{find_group_dir, GroupPattern};
use findoutlie_core::manifest::DEFAULT_MANIFEST_NAME;
use findoutlie_core::validate::{validate_data, ValidateError};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn build_dataset(root: &Path) {
    let group = root.join("group-07");
    let files = [
        ("sub-01/func/sub-01_task-rest_bold.nii.gz", b"run one".as_slice()),
        ("sub-02/func/sub-02_task-rest_bold.nii.gz", b"run two".as_slice()),
        ("sub-02/anat/sub-02_T1w.nii.gz", b"structural".as_slice()),
    ];
    let mut lines = Vec::new();
    for (rel, body) in files {
        let path = group.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, body).unwrap();
        lines.push(format!("{} group-07/{}", sha1_path(&path).unwrap(), rel));
    }
    fs::write(group.join(DEFAULT_MANIFEST_NAME), lines.join("\n") + "\n").unwrap();
}

#[test]
fn discovered_group_validates() {
    let root = tempdir().unwrap();
    build_dataset(root.path());
    fs::create_dir_all(root.path().join("derivatives")).unwrap();

    let group = find_group_dir(root.path(), &GroupPattern::default()).unwrap();
    assert_eq!(group, root.path().join("group-07"));

    let report = validate_data(&group, DEFAULT_MANIFEST_NAME).unwrap();
    assert_eq!(report.file_count(), 3);
}

#[test]
fn corrupted_download_is_detected() {
    let root = tempdir().unwrap();
    build_dataset(root.path());
    let victim = root
        .path()
        .join("group-07/sub-02/anat/sub-02_T1w.nii.gz");
    fs::write(&victim, b"structurak").unwrap();

    let group = find_group_dir(root.path(), &GroupPattern::default()).unwrap();
    match validate_data(&group, DEFAULT_MANIFEST_NAME) {
        Err(ValidateError::HashMismatch { filename, .. }) => {
            assert_eq!(filename, "group-07/sub-02/anat/sub-02_T1w.nii.gz");
        }
        other => panic!("expected HashMismatch, got {other:?}"),
    }
}
