//! Phases failing after the rename: the run stops, nothing is rolled back,
//! and the user is told what was left behind.

mod common;

use common::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_backup_failure_leaves_files_untouched() {
    let temp = create_project_with_config();
    let root = temp.path();
    fs::create_dir(root.join("composer.json.backup")).unwrap();

    run_migrate(root, &[])
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Renamed"))
        .stdout(predicate::str::contains("Migration completed.").not())
        .stderr(predicate::str::contains("Failed to create"))
        .stderr(predicate::str::contains("composer.json.backup"))
        .stderr(predicate::str::contains("moved docroot → public"));

    // The rename is kept; no rollback across phases.
    assert!(root.join("public").is_dir());
    assert!(!root.join("docroot").exists());
    assert!(root.join("public/index.php").is_file());

    assert_eq!(
        fs::read_to_string(root.join("composer.json")).unwrap(),
        COMPOSER_JSON
    );
    assert_eq!(
        fs::read_to_string(root.join("config/local.php")).unwrap(),
        LOCAL_PHP
    );
    assert!(!root.join("config/local.php.backup").exists());
}

#[test]
fn test_unreadable_manifest_reports_its_backup() {
    let temp = create_project_with_config();
    let root = temp.path();
    let invalid_utf8 = [0xffu8, 0xfe, b'{'];
    fs::write(root.join("composer.json"), invalid_utf8).unwrap();

    run_migrate(root, &[])
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"))
        .stderr(predicate::str::contains("moved docroot → public"))
        .stderr(predicate::str::contains(
            "backup kept at composer.json.backup",
        ));

    assert!(root.join("public").is_dir());
    assert_eq!(
        fs::read(root.join("composer.json.backup")).unwrap(),
        invalid_utf8
    );
    assert_eq!(fs::read(root.join("composer.json")).unwrap(), invalid_utf8);
    assert_eq!(
        fs::read_to_string(root.join("config/local.php")).unwrap(),
        LOCAL_PHP
    );
}
