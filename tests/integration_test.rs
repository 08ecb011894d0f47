use std::fs;
use std::path::Path;
use tempfile::tempdir;

use ext_stats::config::ScanConfig;
use ext_stats::models::ExtensionRecord;
use ext_stats::report::write_report;
use ext_stats::{FileWalker, OutputMode, SortField};

fn write_file(path: &Path, size: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, vec![b'x'; size]).unwrap();
}

fn scan(root: &Path) -> ext_stats::ExtensionStats {
    FileWalker::new(&ScanConfig::default()).unwrap().scan(root).unwrap()
}

#[test]
fn test_three_file_scenario() {
    let temp_dir = tempdir().unwrap();
    write_file(&temp_dir.path().join("a.txt"), 10);
    write_file(&temp_dir.path().join("b.txt"), 20);
    write_file(&temp_dir.path().join("c.md"), 5);

    let stats = scan(temp_dir.path());
    assert_eq!(stats.get("txt"), Some(&ExtensionRecord { count: 2, total_size: 30 }));
    assert_eq!(stats.get("md"), Some(&ExtensionRecord { count: 1, total_size: 5 }));

    let mut out = Vec::new();
    write_report(stats, SortField::Count, OutputMode::Csv, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "txt,2,15,30\nmd,1,5,5\n");
}

#[test]
fn test_totals_match_visited_files() {
    let temp_dir = tempdir().unwrap();
    let files = [
        ("src/main.rs", 120),
        ("src/lib.rs", 80),
        ("src/bin/tool.rs", 3),
        ("docs/guide.md", 1500),
        ("docs/img/logo.png", 4096),
        ("archive.tar.gz", 2048),
        ("Makefile", 64),
        ("LICENSE", 1070),
        ("notes.", 9),
        (".env", 0),
    ];
    for (name, size) in files {
        write_file(&temp_dir.path().join(name), size);
    }

    let stats = scan(temp_dir.path());

    let expected_size: u64 = files.iter().map(|(_, size)| *size as u64).sum();
    assert_eq!(stats.total_files(), files.len() as u64);
    assert_eq!(stats.total_size(), expected_size);
    assert!(stats.iter().all(|(_, record)| record.count >= 1));

    assert_eq!(stats.get("rs").map(|r| r.count), Some(3));
    assert_eq!(stats.get("gz").map(|r| r.count), Some(1));
    assert!(stats.get("tar").is_none());
    // Makefile, LICENSE, notes.
    assert_eq!(stats.get(""), Some(&ExtensionRecord { count: 3, total_size: 1143 }));
    assert_eq!(stats.get("env").map(|r| r.count), Some(1));
}

#[test]
fn test_no_extension_in_every_output_mode() {
    let temp_dir = tempdir().unwrap();
    write_file(&temp_dir.path().join("README"), 11);

    for mode in [OutputMode::Table, OutputMode::Csv, OutputMode::Extension] {
        let mut out = Vec::new();
        write_report(scan(temp_dir.path()), SortField::Count, mode, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("No Filename"), "{mode:?}: {output}");
    }
}

#[test]
fn test_order_by_total() {
    let temp_dir = tempdir().unwrap();
    for i in 0..5 {
        write_file(&temp_dir.path().join(format!("small{i}.txt")), 1);
    }
    write_file(&temp_dir.path().join("big.iso"), 10_000);

    let mut out = Vec::new();
    write_report(scan(temp_dir.path()), SortField::Total, OutputMode::Extension, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "iso\ntxt\n");

    let mut out = Vec::new();
    write_report(scan(temp_dir.path()), SortField::Count, OutputMode::Extension, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "txt\niso\n");
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_aborts_scan() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = tempdir().unwrap();
    write_file(&temp_dir.path().join("a.txt"), 1);
    let locked = temp_dir.path().join("locked");
    write_file(&locked.join("secret.txt"), 1);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // root 用户不受权限位限制
    let readable = fs::read_dir(&locked).is_ok();
    let result = FileWalker::new(&ScanConfig::default()).unwrap().scan(temp_dir.path());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    if readable {
        assert!(result.is_ok());
    } else {
        assert!(matches!(result, Err(ext_stats::ScanError::Walk { .. })));
    }
}

#[cfg(unix)]
#[test]
fn test_walk_error_after_files_discards_partial_results() {
    let temp_dir = tempdir().unwrap();
    write_file(&temp_dir.path().join("a.txt"), 10);
    write_file(&temp_dir.path().join("b.md"), 5);
    let sub = temp_dir.path().join("sub");
    write_file(&sub.join("c.txt"), 20);
    // 按文件名排序，循环链接在所有普通文件之后才被访问
    std::os::unix::fs::symlink(temp_dir.path(), sub.join("zz-loop")).unwrap();

    let config = ScanConfig {
        follow_symlinks: true,
        ..ScanConfig::default()
    };
    let result = FileWalker::new(&config).unwrap().scan(temp_dir.path());

    match result {
        Err(ext_stats::ScanError::Walk { path, .. }) => {
            assert!(path.is_some_and(|p| p.ends_with("zz-loop")));
        }
        other => panic!("expected walk error, got {other:?}"),
    }
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_extensions_csv_round_trip() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = tempdir().unwrap();
    write_file(&temp_dir.path().join(OsStr::from_bytes(b"a.\xff")), 1);
    write_file(&temp_dir.path().join(OsStr::from_bytes(b"b.\xfe")), 2);
    write_file(&temp_dir.path().join(OsStr::from_bytes(b"c.\xfe")), 4);

    let mut out = Vec::new();
    write_report(scan(temp_dir.path()), SortField::Count, OutputMode::Csv, &mut out).unwrap();
    assert_eq!(out, b"\xfe,2,3,6\n\xff,1,1,1\n");
}
