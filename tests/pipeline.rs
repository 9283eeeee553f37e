//! End-to-end runs over an on-disk fixture tree.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};
use wiki_cleaner::cleaner::PageCleaner;

/// Two extractor shard dirs plus a file that must be ignored.
fn write_fixture_tree(root: &Path) {
    let aa = root.join("AA");
    let ab = root.join("AB");
    fs::create_dir_all(&aa).unwrap();
    fs::create_dir_all(&ab).unwrap();

    let article = |title: &str, id: u32| {
        json!({
            "id": id.to_string(),
            "title": title,
            "text": format!("'''測試'''是一個[[示例]]。{}", "x".repeat(200)),
            "source": "dump-20260801",
        })
        .to_string()
    };

    let wiki_00 = [
        article("測試條目", 1),
        "{this is not json".to_string(),
        json!({"title": "分类:測試"}).to_string(),
        json!({"title": "短", "text": "'''短'''"}).to_string(),
        article("第二條目", 2),
    ]
    .join("\n");
    fs::write(aa.join("wiki_00"), wiki_00).unwrap();
    fs::write(ab.join("wiki_01"), article("乙條目", 3)).unwrap();
    fs::write(root.join("notes.txt"), "not an input shard").unwrap();
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn full_run_filters_and_converts() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture_tree(dir.path());
    let out = dir.path().join("cleaned.jsonl");

    let cleaner = PageCleaner::new(dir.path().to_path_buf(), out.clone(), 0, 100);
    let stats = cleaner.process().unwrap();

    // 3 eligible articles; malformed line + category page + short page skipped.
    assert_eq!(stats.emitted, 3);
    assert_eq!(stats.skipped, 3);
    assert!(stats.fields_seen.contains("source"));
    assert!(stats.fields_seen.contains("title"));

    let lines = read_lines(&out);
    assert_eq!(lines.len(), 3);

    let first: Value = serde_json::from_str(&lines[0]).unwrap();
    let text = first["text"].as_str().unwrap();
    assert!(text.starts_with("测试是一个示例。"));
    for token in ["[[", "]]", "'''"] {
        assert!(!text.contains(token));
    }
    assert_eq!(first["meta"]["title"], "测试条目");
    assert_eq!(first["meta"]["url"], "https://zh.wikipedia.org/wiki/测试条目");
    assert_eq!(first["meta"]["source"], "dump-20260801");
    assert!(first["meta"].get("text").is_none());

    // Non-ASCII is written literally, not \u-escaped.
    assert!(lines[0].contains("测试条目"));

    // Deterministic traversal: AA/wiki_00 records before AB/wiki_01.
    let last: Value = serde_json::from_str(&lines[2]).unwrap();
    assert_eq!(last["meta"]["title"], "乙条目");
}

#[test]
fn quota_stops_the_run() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture_tree(dir.path());
    let out = dir.path().join("cleaned.jsonl");

    let cleaner = PageCleaner::new(dir.path().to_path_buf(), out.clone(), 2, 100);
    let stats = cleaner.process().unwrap();

    assert_eq!(stats.emitted, 2);
    assert_eq!(read_lines(&out).len(), 2);
}

#[test]
fn quota_larger_than_eligible_emits_all() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture_tree(dir.path());
    let out = dir.path().join("cleaned.jsonl");

    let cleaner = PageCleaner::new(dir.path().to_path_buf(), out.clone(), 50, 100);
    let stats = cleaner.process().unwrap();
    assert_eq!(stats.emitted, 3);
}

#[test]
fn reruns_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture_tree(dir.path());
    let out = dir.path().join("cleaned.jsonl");

    let cleaner = PageCleaner::new(dir.path().to_path_buf(), out.clone(), 0, 100);
    cleaner.process().unwrap();
    let first = fs::read(&out).unwrap();
    cleaner.process().unwrap();
    let second = fs::read(&out).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_input_dir_is_a_run_level_error() {
    let dir = tempfile::tempdir().unwrap();
    let cleaner = PageCleaner::new(
        dir.path().join("no_such_dir"),
        dir.path().join("out.jsonl"),
        0,
        100,
    );
    assert!(cleaner.process().is_err());
}
