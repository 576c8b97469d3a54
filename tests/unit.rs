use treecat::{export, ExportBuilder, Notice};
use std::fs;
use tempfile::tempdir;
#[test]
fn test_basic_export() {
    let dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("out.txt");
    let file_path = dir.path().join("hello.txt");
    fs::write(&file_path, "hello world").unwrap();
    let options = ExportBuilder::new(dir.path()).output(&out).build();
    let report = export(&options).unwrap();
    assert_eq!(report.exported, 1);
    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(
        text,
        format!("\n\n# TREE_FILE_PATH: {}\nhello world", file_path.display())
    );
}
#[test]
fn test_non_text_file_leaves_no_trace() {
    let dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("out.txt");
    fs::write(dir.path().join("logo.png"), [0x89, b'P', b'N', b'G', 0, 0]).unwrap();
    let options = ExportBuilder::new(dir.path()).output(&out).build();
    let report = export(&options).unwrap();
    assert_eq!(report.exported, 0);
    assert_eq!(report.skipped, 1);
    assert!(matches!(report.notices[0], Notice::NotText { .. }));
    assert_eq!(fs::read_to_string(&out).unwrap(), "");
}
#[test]
fn test_ignore_files() {
    let dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("out.txt");
    fs::write(dir.path().join("a.json"), "{}").unwrap();
    fs::write(dir.path().join("package-lock.json"), "{\"lock\": true}").unwrap();
    let options = ExportBuilder::new(dir.path())
        .output(&out)
        .add_ignore_files(vec!["package-lock.json".into()])
        .build();
    let report = export(&options).unwrap();
    assert_eq!(report.exported, 1);
    assert!(matches!(&report.notices[..], [Notice::IgnoredFile { path }] if path.ends_with("package-lock.json")));
    let text = fs::read_to_string(&out).unwrap();
    assert!(!text.contains("package-lock.json"));
    assert!(!text.contains("\"lock\": true"));
}
#[test]
fn test_latin1_fallback() {
    let dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("out.txt");
    fs::write(dir.path().join("notes.txt"), [b'a', b'\xF1', b'o']).unwrap();
    let options = ExportBuilder::new(dir.path()).output(&out).build();
    let report = export(&options).unwrap();
    assert_eq!(report.exported, 1);
    assert_eq!(report.latin1_fallbacks, 1);
    assert!(report.notices.is_empty());
    let text = fs::read_to_string(&out).unwrap();
    assert!(text.ends_with("año"));
}
#[cfg(unix)]
#[test]
fn test_unreadable_file_keeps_header() {
    let dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("out.txt");
    std::os::unix::fs::symlink(dir.path().join("missing.py"), dir.path().join("a_broken.py"))
        .unwrap();
    fs::write(dir.path().join("b_ok.py"), "ok = True").unwrap();
    let options = ExportBuilder::new(dir.path())
        .output(&out)
        .sort_by_name(true)
        .build();
    let report = export(&options).unwrap();
    assert_eq!(report.exported, 1);
    assert_eq!(report.unreadable, 1);
    assert!(matches!(&report.notices[..], [Notice::Unreadable { path, .. }] if path.ends_with("a_broken.py")));
    let broken = dir.path().join("a_broken.py");
    let ok = dir.path().join("b_ok.py");
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        format!(
            "\n\n# TREE_FILE_PATH: {}\n\n\n# TREE_FILE_PATH: {}\nok = True",
            broken.display(),
            ok.display()
        )
    );
}
#[test]
fn test_missing_root_is_fatal() {
    let dir = tempdir().unwrap();
    let options = ExportBuilder::new(dir.path().join("nope"))
        .output(dir.path().join("out.txt"))
        .build();
    assert!(export(&options).is_err());
}
#[test]
fn test_output_in_missing_directory_is_fatal() {
    let dir = tempdir().unwrap();
    let options = ExportBuilder::new(dir.path())
        .output(dir.path().join("no_such_dir").join("out.txt"))
        .build();
    assert!(export(&options).is_err());
}
