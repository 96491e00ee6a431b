//! Shared fixtures for mautic-webroot integration tests.
//!
//! Each helper builds a throwaway Mautic project layout and drives the
//! compiled binary against it.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[allow(unused)]
pub const COMPOSER_JSON: &str = r#"{
    "name": "mautic/recommended-project",
    "type": "project",
    "require": {
        "mautic/core-lib": "^5.0"
    },
    "autoload": {
        "psr-4": {
            "MauticPlugin\\": "docroot/plugins/"
        }
    },
    "extra": {
        "mautic-scaffold": {
            "locations": {
                "web-root": "docroot/"
            }
        },
        "installer-paths": {
            "docroot/app": [
                "type:mautic-core"
            ],
            "docroot/plugins/{$name}": [
                "type:mautic-plugin"
            ],
            "docroot/themes/{$name}": [
                "type:mautic-theme"
            ]
        }
    }
}
"#;

#[allow(unused)]
pub const LOCAL_PHP: &str = r#"<?php
$parameters = array(
	'db_driver' => 'pdo_mysql',
	'db_host' => 'localhost',
	'image_path' => '/var/www/docroot/media/images',
	'upload_dir' => '/var/www/docroot/media/files',
	'tmp_path' => '/var/www/var/tmp',
);
"#;

/// Creates a legacy project: `docroot/` with a small tree plus `composer.json`.
#[allow(unused)]
pub fn create_legacy_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let docroot = temp.path().join("docroot");

    fs::create_dir_all(docroot.join("app")).unwrap();
    fs::create_dir_all(docroot.join("media/images")).unwrap();
    fs::write(docroot.join("index.php"), "<?php require 'app/bootstrap.php';\n").unwrap();
    fs::write(docroot.join("app/bootstrap.php"), "<?php\n").unwrap();
    fs::write(docroot.join("media/images/logo.png"), [0x89u8, b'P', b'N', b'G']).unwrap();

    fs::write(temp.path().join("composer.json"), COMPOSER_JSON).unwrap();

    temp
}

/// Same as [`create_legacy_project`] with a `config/local.php`.
#[allow(unused)]
pub fn create_project_with_config() -> TempDir {
    let temp = create_legacy_project();
    fs::create_dir(temp.path().join("config")).unwrap();
    fs::write(temp.path().join("config/local.php"), LOCAL_PHP).unwrap();
    temp
}

/// Lists every entry under `root` as sorted relative paths.
#[allow(unused)]
pub fn list_tree(root: &Path) -> Vec<String> {
    fn walk(base: &Path, dir: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            let relative = path.strip_prefix(base).unwrap();
            out.push(relative.to_string_lossy().replace('\\', "/"));
            if path.is_dir() {
                walk(base, &path, out);
            }
        }
    }

    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

/// Runs `mautic-webroot migrate-webroot` inside `project_root`.
pub fn run_migrate(project_root: &Path, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("mautic-webroot");
    cmd.arg("migrate-webroot")
        .args(extra_args)
        .env_remove("RUST_LOG")
        .current_dir(project_root);

    cmd.assert()
}
