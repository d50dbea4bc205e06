// End-to-end checks of a full generation run against a scratch directory

use hub_icons::config::GeneratorConfig;
use hub_icons::generate::{downsample, generate};
use hub_icons::render::render;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn read_all(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    fs::read_dir(dir)
        .expect("Failed to list output directory")
        .map(|entry| {
            let entry = entry.expect("Failed to read directory entry");
            let name = entry.file_name().to_string_lossy().into_owned();
            let bytes = fs::read(entry.path()).expect("Failed to read icon");
            (name, bytes)
        })
        .collect()
}

#[test]
fn test_writes_one_file_per_size_plus_default() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    let report = generate(&GeneratorConfig::with_out_dir(dir)).unwrap();

    let names: Vec<String> = read_all(dir).into_keys().collect();
    assert_eq!(
        names,
        vec!["icon-128.png", "icon-16.png", "icon-32.png", "icon-48.png", "icon-64.png", "icon.png"]
    );
    assert!(report.paths().all(|p| p.is_file()));
}

#[test]
fn test_report_follows_size_order() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    let report = generate(&GeneratorConfig::with_out_dir(dir)).unwrap();

    assert_eq!(report.out_dir, dir);
    assert_eq!(
        report.files,
        vec!["icon-16.png", "icon-32.png", "icon-48.png", "icon-64.png", "icon-128.png", "icon.png"]
    );
}

#[test]
fn test_default_icon_matches_master_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    generate(&GeneratorConfig::with_out_dir(dir)).unwrap();

    let files = read_all(dir);
    assert_eq!(files["icon.png"], files["icon-128.png"]);
}

#[test]
fn test_second_run_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    let config = GeneratorConfig::with_out_dir(dir);

    generate(&config).unwrap();
    let first = read_all(dir);

    generate(&config).unwrap();
    let second = read_all(dir);

    assert_eq!(first.len(), 6);
    assert_eq!(first, second);
}

#[test]
fn test_output_dimensions() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    generate(&GeneratorConfig::with_out_dir(dir)).unwrap();

    for size in [16, 32, 48, 64, 128] {
        let img = image::open(dir.join(format!("icon-{}.png", size))).unwrap();
        assert_eq!((img.width(), img.height()), (size, size));
    }
    let img = image::open(dir.join("icon.png")).unwrap();
    assert_eq!((img.width(), img.height()), (128, 128));
}

#[test]
fn test_smaller_sizes_are_downsampled_from_master() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    generate(&GeneratorConfig::with_out_dir(dir)).unwrap();

    let master = render(128);
    let written_master = image::open(dir.join("icon-128.png")).unwrap().to_rgba8();
    assert_eq!(written_master, master);

    for size in [16, 32, 48, 64] {
        let written = image::open(dir.join(format!("icon-{}.png", size))).unwrap().to_rgba8();
        assert_eq!(written, downsample(&master, size), "size {}", size);
    }
}

#[test]
fn test_creates_nested_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let dir = root.join("src").join("images");
    generate(&GeneratorConfig::with_out_dir(&dir)).unwrap();

    assert!(dir.join("icon.png").is_file());
}

#[test]
fn test_custom_size_set_uses_largest_as_master() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    let config = GeneratorConfig {
        sizes: vec![40, 20],
        ..GeneratorConfig::with_out_dir(dir)
    };
    let report = generate(&config).unwrap();

    assert_eq!(report.files, vec!["icon-40.png", "icon-20.png", "icon.png"]);
    let files = read_all(dir);
    assert_eq!(files.len(), 3);
    assert_eq!(files["icon.png"], files["icon-40.png"]);

    let small = image::open(dir.join("icon-20.png")).unwrap().to_rgba8();
    assert_eq!(small, downsample(&render(40), 20));
}

#[test]
fn test_invalid_config_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("icons");
    let config = GeneratorConfig {
        sizes: vec![],
        ..GeneratorConfig::with_out_dir(&dir)
    };

    assert!(generate(&config).is_err());
    assert!(!dir.exists());
}

#[test]
fn test_unwritable_directory_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let blocker = root.join("not-a-dir");
    fs::write(&blocker, b"plain file").unwrap();

    let dir = blocker.join("images");
    let err = generate(&GeneratorConfig::with_out_dir(dir)).unwrap_err();
    assert!(
        err.to_string().contains("not-a-dir"),
        "error should name the directory: {:#}",
        err
    );
}

#[test]
fn test_lossy_extension_is_rejected_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("icons");
    let config = GeneratorConfig {
        extension: "jpg".to_string(),
        ..GeneratorConfig::with_out_dir(&dir)
    };

    assert!(generate(&config).is_err());
    assert!(!dir.exists());
}
