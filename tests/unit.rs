use snapfold::{
    FileEntry, FilterPolicy, NamingMode, Snapshot, SnapfoldBuilder, bundle, render_tree,
    resolve_output_path, scan,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn entry(rel: &str) -> FileEntry {
    FileEntry {
        path: PathBuf::from("/project").join(rel),
        rel_path: PathBuf::from(rel),
        size: 0,
        extension: Path::new(rel)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default(),
    }
}

#[test]
fn test_allow_list_only_applies_when_enabled() {
    let policy = FilterPolicy::new(vec![], 1024, vec!["css".to_string()], true);
    assert!(policy.includes(Path::new("style.css"), 10));
    assert!(!policy.includes(Path::new("script.js"), 10));
    assert!(!policy.includes(Path::new("Makefile"), 10));
    let disabled = FilterPolicy::new(vec![], 1024, vec!["css".to_string()], false);
    assert!(disabled.includes(Path::new("script.js"), 10));
    assert!(disabled.includes(Path::new("Makefile"), 10));
}

#[test]
fn test_allow_list_is_case_insensitive_on_extension() {
    let policy = FilterPolicy::new(vec![], 1024, vec!["css".to_string()], true);
    assert!(policy.includes(Path::new("STYLE.CSS"), 10));
}

#[test]
fn test_size_limit_is_inclusive() {
    let policy = FilterPolicy::new(vec![], 100, vec![], false);
    assert!(policy.includes(Path::new("a.txt"), 100));
    assert!(!policy.includes(Path::new("a.txt"), 101));
}

#[test]
fn test_ignore_matches_any_path_component() {
    let policy = FilterPolicy::new(vec!["node_modules".to_string()], 1024, vec![], false);
    assert!(!policy.includes(Path::new("node_modules/pkg/index.js"), 10));
    assert!(!policy.includes(Path::new("deep/node_modules/pkg/index.js"), 10));
    assert!(policy.includes(Path::new("src/index.js"), 10));
    // matching is case-sensitive
    assert!(policy.includes(Path::new("Node_Modules/index.js"), 10));
}

#[test]
fn test_tree_rendering_is_sorted_and_stable() {
    let entries = vec![
        entry("src/main.rs"),
        entry("README.md"),
        entry("src/lib.rs"),
    ];
    let expected = "\
├── README.md
└── src
    ├── lib.rs
    └── main.rs
";
    assert_eq!(render_tree(&entries), expected);
    assert_eq!(render_tree(&entries), render_tree(&entries));
}

#[test]
fn test_tree_rendering_nested_connectors() {
    let entries = vec![entry("a/b/c.txt"), entry("a/d.txt"), entry("e.txt")];
    let expected = "\
├── a
│   ├── b
│   │   └── c.txt
│   └── d.txt
└── e.txt
";
    assert_eq!(render_tree(&entries), expected);
}

#[test]
fn test_tree_rendering_empty() {
    assert_eq!(render_tree(&[]), "");
}

#[test]
fn test_increment_naming_probes_unused_paths() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("name.md");
    let first = resolve_output_path(&output, NamingMode::Increment).unwrap();
    assert_eq!(first, dir.path().join("name.md"));
    fs::write(&first, "x").unwrap();
    let second = resolve_output_path(&output, NamingMode::Increment).unwrap();
    assert_eq!(second, dir.path().join("name(2).md"));
    fs::write(&second, "x").unwrap();
    let third = resolve_output_path(&output, NamingMode::Increment).unwrap();
    assert_eq!(third, dir.path().join("name(3).md"));
}

#[test]
fn test_overwrite_naming_is_stable() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("name.md");
    let first = resolve_output_path(&output, NamingMode::Overwrite).unwrap();
    fs::write(&first, "x").unwrap();
    let second = resolve_output_path(&output, NamingMode::Overwrite).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_timestamp_naming_encodes_the_minute() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("name.md");
    let path = resolve_output_path(&output, NamingMode::Timestamp).unwrap();
    let file_name = path.file_name().unwrap().to_str().unwrap();
    assert!(file_name.starts_with("name-"));
    assert!(file_name.ends_with(".md"));
    assert_eq!(file_name.len(), "name-2025-01-01_00-00.md".len());
}

#[test]
fn test_default_output_extension_is_md() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("name");
    let path = resolve_output_path(&output, NamingMode::Overwrite).unwrap();
    assert_eq!(path, dir.path().join("name.md"));
}

#[test]
fn test_naming_resolution_creates_destination_folder() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out/deep/name.md");
    let path = resolve_output_path(&output, NamingMode::Overwrite).unwrap();
    assert!(path.parent().unwrap().is_dir());
}

#[test]
fn test_unknown_naming_mode_string_falls_back_to_timestamp() {
    assert_eq!(NamingMode::parse("weekly"), NamingMode::Timestamp);
    assert_eq!(NamingMode::parse("increment"), NamingMode::Increment);
    assert_eq!(NamingMode::parse("OVERWRITE"), NamingMode::Overwrite);
}

#[test]
fn test_bundle_single_file_section() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.css"), "body{}").unwrap();
    let options = SnapfoldBuilder::new(dir.path()).include_tree(false).build();
    let snapshot = scan(&options).unwrap();
    let doc = bundle(&snapshot, &options);
    assert!(doc.contains("### `a.css`\n```css\nbody{}\n```\n"));
    assert!(!doc.contains("Project Structure"));
    assert_eq!(doc.matches("---\n### ").count(), 1);
}

#[test]
fn test_bundle_unreadable_file_degrades_to_placeholder() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), "still here").unwrap();
    let snapshot = Snapshot {
        root: dir.path().to_path_buf(),
        files: vec![
            FileEntry {
                path: dir.path().join("a.txt"),
                rel_path: PathBuf::from("a.txt"),
                size: 0,
                extension: "txt".to_string(),
            },
            FileEntry {
                path: dir.path().join("b.txt"),
                rel_path: PathBuf::from("b.txt"),
                size: 10,
                extension: "txt".to_string(),
            },
        ],
    };
    let options = SnapfoldBuilder::new(dir.path()).include_tree(false).build();
    let doc = bundle(&snapshot, &options);
    assert!(doc.contains("[Error reading file:"));
    assert!(doc.contains("still here"));
}

#[test]
fn test_bundle_non_utf8_file_degrades_to_placeholder() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bin.dat"), [0xff, 0xfe, 0x00, 0x41]).unwrap();
    let options = SnapfoldBuilder::new(dir.path()).include_tree(false).build();
    let snapshot = scan(&options).unwrap();
    let doc = bundle(&snapshot, &options);
    assert!(doc.contains("[Error reading file:"));
}

#[test]
fn test_scan_invalid_root_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let options = SnapfoldBuilder::new(&missing).build();
    assert!(scan(&options).is_err());
    let file = dir.path().join("plain.txt");
    fs::write(&file, "x").unwrap();
    let options = SnapfoldBuilder::new(&file).build();
    assert!(scan(&options).is_err());
}

#[test]
fn test_scan_order_is_lexical_and_repeatable() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("zeta.txt"), "z").unwrap();
    fs::write(dir.path().join("src/alpha.txt"), "a").unwrap();
    fs::write(dir.path().join("beta.txt"), "b").unwrap();
    let options = SnapfoldBuilder::new(dir.path()).build();
    let first = scan(&options).unwrap();
    let rels: Vec<_> = first.files.iter().map(|f| f.rel_path.clone()).collect();
    assert_eq!(
        rels,
        vec![
            PathBuf::from("beta.txt"),
            PathBuf::from("src/alpha.txt"),
            PathBuf::from("zeta.txt"),
        ]
    );
    let second = scan(&options).unwrap();
    assert_eq!(first.files, second.files);
}
