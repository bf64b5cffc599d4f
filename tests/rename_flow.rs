//! End-to-end rename behavior.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use image_renamer::fs::FORBIDDEN_CHARS;
use image_renamer::names::{parse_item_names, NameFormat};
use image_renamer::{extract_item_names, rename_images, RenameOptions};
use tempfile::TempDir;

fn write_images(dir: &Path, count: usize) -> Vec<PathBuf> {
    std::fs::create_dir_all(dir).unwrap();
    (0..count)
        .map(|i| {
            let path = dir.join(format!("img_{:03}.png", i));
            std::fs::write(&path, format!("pixels {}", i)).unwrap();
            path
        })
        .collect()
}

fn options(root: &Path, workers: usize) -> RenameOptions {
    RenameOptions {
        source_dir: root.join("original_images"),
        output_dir: root.join("renamed_images"),
        extension: ".png".to_string(),
        workers,
        show_progress: false,
    }
}

fn names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("Item {}", i)).collect()
}

/// Filename -> content for every file in `dir`.
fn snapshot(dir: &Path) -> BTreeMap<String, String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| {
            let e = e.unwrap();
            (
                e.file_name().into_string().unwrap(),
                std::fs::read_to_string(e.path()).unwrap(),
            )
        })
        .collect()
}

#[test]
fn structured_names_keep_appearance_order() {
    let content = r#"
        Zebra
        {item = "Third"}, {item = "First"},
        Alpha
        {item = "Second"}
    "#;

    let extracted = parse_item_names(content);
    assert_eq!(extracted.format, NameFormat::Structured);
    assert_eq!(extracted.names, vec!["Third", "First", "Second"]);
}

#[test]
fn blank_file_yields_no_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("paste.txt");
    std::fs::write(&path, "\n\n   \n\t\n").unwrap();

    assert!(extract_item_names(&path).is_empty());
}

#[tokio::test]
async fn more_images_than_names_leaves_the_rest_untouched() {
    let dir = TempDir::new().unwrap();
    let images = write_images(&dir.path().join("original_images"), 5);

    let outcome = rename_images(&options(dir.path(), 4), &names(3))
        .await
        .unwrap();

    assert_eq!(outcome.total, 3);
    assert_eq!(outcome.succeeded(), 3);
    assert_eq!(outcome.images_dropped, 2);

    let out = snapshot(&dir.path().join("renamed_images"));
    assert_eq!(out.len(), 3);
    assert_eq!(out["Item 0.png"], "pixels 0");
    assert_eq!(out["Item 2.png"], "pixels 2");

    for (i, image) in images.iter().enumerate() {
        assert_eq!(
            std::fs::read_to_string(image).unwrap(),
            format!("pixels {}", i)
        );
    }
}

#[tokio::test]
async fn output_in_source_dir_never_truncates_an_original() {
    let dir = TempDir::new().unwrap();
    let images_dir = dir.path().join("imgs");
    std::fs::create_dir(&images_dir).unwrap();
    std::fs::write(images_dir.join("a.png"), "AAAA").unwrap();
    std::fs::write(images_dir.join("b.png"), "BBBB").unwrap();

    let options = RenameOptions {
        source_dir: images_dir.clone(),
        output_dir: images_dir.clone(),
        extension: ".png".to_string(),
        workers: 1,
        show_progress: false,
    };
    let outcome = rename_images(&options, &["a".to_string(), "a2".to_string()])
        .await
        .unwrap();

    assert_eq!(outcome.succeeded(), 1);
    assert_eq!(outcome.failed(), 1);
    assert_eq!(outcome.failures()[0].task.original_name, "a");
    assert_eq!(std::fs::read_to_string(images_dir.join("a.png")).unwrap(), "AAAA");
    assert_eq!(std::fs::read_to_string(images_dir.join("b.png")).unwrap(), "BBBB");
    assert_eq!(std::fs::read_to_string(images_dir.join("a2.png")).unwrap(), "BBBB");
}

#[tokio::test]
async fn more_names_than_images_uses_the_first_names() {
    let dir = TempDir::new().unwrap();
    write_images(&dir.path().join("original_images"), 2);

    let outcome = rename_images(&options(dir.path(), 4), &names(6))
        .await
        .unwrap();

    assert_eq!(outcome.succeeded(), 2);
    assert_eq!(outcome.names_dropped, 4);

    let out = snapshot(&dir.path().join("renamed_images"));
    let files: Vec<_> = out.keys().cloned().collect();
    assert_eq!(files, vec!["Item 0.png", "Item 1.png"]);
}

#[tokio::test]
async fn forbidden_characters_become_underscores() {
    let dir = TempDir::new().unwrap();
    write_images(&dir.path().join("original_images"), 1);

    let outcome = rename_images(&options(dir.path(), 1), &["Key: *Gold*?".to_string()])
        .await
        .unwrap();

    assert_eq!(outcome.succeeded(), 1);
    let task = &outcome.results[0].task;
    assert_eq!(task.sanitized_name, "Key_ _Gold__");
    assert!(!task.sanitized_name.contains(FORBIDDEN_CHARS));
    assert!(dir.path().join("renamed_images/Key_ _Gold__.png").exists());
}

#[tokio::test]
async fn existing_output_files_are_kept() {
    let dir = TempDir::new().unwrap();
    write_images(&dir.path().join("original_images"), 2);
    let output_dir = dir.path().join("renamed_images");
    std::fs::create_dir_all(&output_dir).unwrap();
    std::fs::write(output_dir.join("unrelated.txt"), "keep me").unwrap();

    let outcome = rename_images(&options(dir.path(), 4), &names(2))
        .await
        .unwrap();

    assert_eq!(outcome.succeeded(), 2);
    let out = snapshot(&output_dir);
    assert_eq!(out.len(), 3);
    assert_eq!(out["unrelated.txt"], "keep me");
}

#[tokio::test]
async fn worker_count_does_not_change_the_result() {
    let parallel = TempDir::new().unwrap();
    let serial = TempDir::new().unwrap();
    write_images(&parallel.path().join("original_images"), 100);
    write_images(&serial.path().join("original_images"), 100);

    let a = rename_images(&options(parallel.path(), 4), &names(100))
        .await
        .unwrap();
    let b = rename_images(&options(serial.path(), 1), &names(100))
        .await
        .unwrap();

    assert_eq!(a.succeeded(), 100);
    assert_eq!(b.succeeded(), 100);
    assert_eq!(
        snapshot(&parallel.path().join("renamed_images")),
        snapshot(&serial.path().join("renamed_images"))
    );
}

fn run_cli(cwd: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_image-renamer"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("IMAGE_RENAMER_CONFIG")
        .output()
        .unwrap()
}

#[test]
fn cli_discovers_text_file_and_succeeds() {
    let dir = TempDir::new().unwrap();
    write_images(&dir.path().join("original_images"), 2);
    std::fs::write(dir.path().join("items.txt"), "item = \"A\"\nitem = \"B\"\n").unwrap();

    let output = run_cli(dir.path(), &["--quiet"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(dir.path().join("renamed_images/A.png").exists());
    assert!(dir.path().join("renamed_images/B.png").exists());
}

#[test]
fn cli_fails_without_text_file() {
    let dir = TempDir::new().unwrap();
    write_images(&dir.path().join("original_images"), 2);

    let output = run_cli(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("renamed_images").exists());
}

#[test]
fn cli_fails_on_blank_text_file() {
    let dir = TempDir::new().unwrap();
    write_images(&dir.path().join("original_images"), 2);
    std::fs::write(dir.path().join("paste.txt"), "\n  \n").unwrap();

    let output = run_cli(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn cli_fails_when_nothing_is_renamed() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("original_images")).unwrap();
    std::fs::write(dir.path().join("paste.txt"), "Lonely\n").unwrap();

    let output = run_cli(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn cli_dry_run_copies_nothing() {
    let dir = TempDir::new().unwrap();
    write_images(&dir.path().join("original_images"), 1);
    std::fs::write(dir.path().join("names.txt"), "Only\n").unwrap();

    let output = run_cli(dir.path(), &["--text-file", "names.txt", "--dry-run"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(!dir.path().join("renamed_images").exists());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Only.png"));
}

#[test]
fn cli_reads_config_file_and_writes_report() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("shots");
    std::fs::create_dir(&source).unwrap();
    std::fs::write(source.join("b.JPG"), "b").unwrap();
    std::fs::write(source.join("a.jpg"), "a").unwrap();
    std::fs::write(dir.path().join("list.txt"), "First\nSecond\n").unwrap();
    std::fs::write(
        dir.path().join("renamer.toml"),
        "[input]\ntext_file = \"list.txt\"\n\n[rename]\nsource_dir = \"shots\"\noutput_dir = \"done\"\nextension = \"jpg\"\nworkers = 2\n",
    )
    .unwrap();

    let output = run_cli(dir.path(), &["-q", "--report", "report.json"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("done/First.jpg")).unwrap(),
        "a"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("done/Second.jpg")).unwrap(),
        "b"
    );

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("report.json")).unwrap())
            .unwrap();
    assert_eq!(report["succeeded"], 2);
    assert_eq!(report["extension"], ".jpg");
}

#[test]
fn cli_rejects_zero_workers() {
    let dir = TempDir::new().unwrap();
    write_images(&dir.path().join("original_images"), 1);
    std::fs::write(dir.path().join("paste.txt"), "A\n").unwrap();

    let output = run_cli(dir.path(), &["--workers", "0"]);

    assert_eq!(output.status.code(), Some(1));
}
