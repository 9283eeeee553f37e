//! Per-page cleaning pipeline over WikiExtractor output.
//!
//! One JSON page per input line; each record is decoded, filtered, stripped,
//! script-converted, and either appended to the output stream or skipped.
//! Skips never abort the run; only run-level I/O errors propagate.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;
use walkdir::WalkDir;

use crate::{wikitext, zh};

/// Input files are the WikiExtractor shards, named wiki_00, wiki_01, ...
const INPUT_FILE_PREFIX: &str = "wiki_";

/// Title prefixes marking non-article pages in the zh dumps.
const EXCLUDED_NAMESPACES: &[&str] = &["分类:", "Wikipedia:", "模板:", "File:"];

const URL_BASE: &str = "https://zh.wikipedia.org/wiki/";

pub struct PageCleaner {
    input_dir: PathBuf,
    output_file: PathBuf,
    /// Emit at most this many records; <= 0 means unlimited.
    max_docs: i64,
    /// Minimum character count of cleaned text to keep a record.
    min_length: usize,
}

/// Run-level bookkeeping returned by `process`.
#[derive(Debug, Default)]
pub struct RunStats {
    pub emitted: u64,
    pub skipped: u64,
    /// Union of top-level field names across all decoded input records.
    pub fields_seen: BTreeSet<String>,
}

impl RunStats {
    pub fn report(&self, output_file: &Path) {
        println!(
            "Saved {} records -> {}",
            self.emitted,
            output_file.display()
        );
        println!("Skipped {} records", self.skipped);
        let fields: Vec<&str> = self.fields_seen.iter().map(String::as_str).collect();
        println!("Fields seen: {{{}}}", fields.join(", "));
    }
}

#[derive(Serialize)]
struct CleanedPage {
    text: String,
    meta: Map<String, Value>,
}

impl PageCleaner {
    pub fn new(
        input_dir: PathBuf,
        output_file: PathBuf,
        max_docs: i64,
        min_length: usize,
    ) -> Self {
        Self {
            input_dir,
            output_file,
            max_docs,
            min_length,
        }
    }

    /// One forward pass over every wiki_* file under the input directory.
    /// Stops early once the emitted-record quota is reached.
    pub fn process(&self) -> Result<RunStats> {
        let mut stats = RunStats::default();

        let files = self.collect_input_files()?;
        let out = File::create(&self.output_file)
            .with_context(|| format!("cannot create {}", self.output_file.display()))?;
        let mut writer = BufWriter::new(out);

        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40} {pos}/{len} files ({per_sec})")?
                .progress_chars("=> "),
        );

        'run: for path in &files {
            let file = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            for line in BufReader::new(file).lines() {
                let line =
                    line.with_context(|| format!("read error in {}", path.display()))?;
                if self.max_docs > 0 && stats.emitted >= self.max_docs as u64 {
                    break 'run;
                }
                match self.clean_record(&line, &mut stats.fields_seen) {
                    Some(page) => {
                        // serde_json writes non-ASCII literally, one record per line.
                        serde_json::to_writer(&mut writer, &page)?;
                        writer.write_all(b"\n")?;
                        stats.emitted += 1;
                    }
                    None => stats.skipped += 1,
                }
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        writer
            .flush()
            .with_context(|| format!("write error on {}", self.output_file.display()))?;
        Ok(stats)
    }

    /// Transform one input line into zero or one output record.
    /// Any record-level problem returns None; the caller counts the skip.
    fn clean_record(
        &self,
        line: &str,
        fields_seen: &mut BTreeSet<String>,
    ) -> Option<CleanedPage> {
        let page: Map<String, Value> = match serde_json::from_str(line) {
            Ok(p) => p,
            Err(e) => {
                debug!("skipping undecodable line: {}", e);
                return None;
            }
        };
        fields_seen.extend(page.keys().cloned());

        let title = match page.get("title") {
            None => "",
            Some(Value::String(s)) => s.as_str(),
            Some(_) => {
                debug!("skipping record with non-string title");
                return None;
            }
        };
        if !is_valid_title(title) {
            debug!("skipping excluded namespace: {}", title);
            return None;
        }

        let raw_text = match page.get("text") {
            None => "",
            Some(Value::String(s)) => s.as_str(),
            Some(_) => {
                debug!("skipping record with non-string text: {}", title);
                return None;
            }
        };
        let text = clean_text(raw_text);
        let title = clean_title(title);

        if text.chars().count() < self.min_length {
            debug!("skipping short page: {}", title);
            return None;
        }

        let url = format!("{}{}", URL_BASE, title.replace(' ', "_"));
        let mut meta: Map<String, Value> = page
            .into_iter()
            .filter(|(key, _)| key != "text")
            .collect();
        meta.insert("title".into(), Value::String(title));
        meta.insert("url".into(), Value::String(url));

        Some(CleanedPage { text, meta })
    }

    /// All wiki_* files under input_dir, recursively, in sorted order so
    /// reruns over the same tree produce identical output.
    fn collect_input_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.input_dir).sort_by_file_name() {
            let entry = entry.with_context(|| {
                format!("cannot walk input dir {}", self.input_dir.display())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(INPUT_FILE_PREFIX))
            {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

/// Strip markup, trim, and convert script.
pub fn clean_text(raw: &str) -> String {
    zh::t2s(wikitext::strip_markup(raw).trim())
}

/// Titles are plain text; script conversion only.
pub fn clean_title(title: &str) -> String {
    zh::t2s(title)
}

/// False for category, project, template, and file pages.
pub fn is_valid_title(title: &str) -> bool {
    !EXCLUDED_NAMESPACES.iter().any(|ns| title.starts_with(ns))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaner(min_length: usize) -> PageCleaner {
        PageCleaner::new(PathBuf::from("in"), PathBuf::from("out"), 0, min_length)
    }

    #[test]
    fn namespace_filter() {
        assert!(is_valid_title("上海"));
        assert!(is_valid_title(""));
        assert!(!is_valid_title("分类:历史"));
        assert!(!is_valid_title("Wikipedia:格式手册"));
        assert!(!is_valid_title("模板:城市"));
        assert!(!is_valid_title("File:Map.png"));
    }

    #[test]
    fn clean_text_strips_and_converts() {
        let out = clean_text("'''漢語'''是一種[[語言]]。");
        assert_eq!(out, "汉语是一种语言。");
    }

    #[test]
    fn record_emitted_with_url_and_title() {
        let c = cleaner(1);
        let mut fields = BTreeSet::new();
        let line = r#"{"id": "12", "title": "測試 條目", "text": "'''正文'''內容"}"#;
        let page = c.clean_record(line, &mut fields).expect("record kept");
        assert_eq!(page.text, "正文内容");
        assert_eq!(page.meta["title"], "测试 条目");
        assert_eq!(page.meta["url"], "https://zh.wikipedia.org/wiki/测试_条目");
        assert_eq!(page.meta["id"], "12");
        assert!(!page.meta.contains_key("text"));
        assert_eq!(
            fields.iter().collect::<Vec<_>>(),
            ["id", "text", "title"].iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn excluded_namespace_skipped_after_key_tracking() {
        let c = cleaner(1);
        let mut fields = BTreeSet::new();
        let line = r#"{"title": "分类:測試", "extra": 1}"#;
        assert!(c.clean_record(line, &mut fields).is_none());
        // Keys are tracked even for filtered records.
        assert!(fields.contains("extra"));
    }

    #[test]
    fn short_text_skipped() {
        let c = cleaner(100);
        let mut fields = BTreeSet::new();
        let line = r#"{"title": "短", "text": "太短"}"#;
        assert!(c.clean_record(line, &mut fields).is_none());
    }

    #[test]
    fn min_length_counts_chars_not_bytes() {
        let c = cleaner(4);
        let mut fields = BTreeSet::new();
        // Four CJK chars: 12 bytes, 4 chars.
        let line = r#"{"title": "甲", "text": "四个汉字"}"#;
        assert!(c.clean_record(line, &mut fields).is_some());
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let c = cleaner(0);
        let mut fields = BTreeSet::new();
        let page = c.clean_record("{}", &mut fields).expect("kept at min_length 0");
        assert_eq!(page.text, "");
        assert_eq!(page.meta["title"], "");
        assert_eq!(page.meta["url"], "https://zh.wikipedia.org/wiki/");
    }

    #[test]
    fn malformed_fields_skipped() {
        let c = cleaner(0);
        let mut fields = BTreeSet::new();
        assert!(c.clean_record(r#"{"title": 7}"#, &mut fields).is_none());
        assert!(c
            .clean_record(r#"{"title": "甲", "text": ["a"]}"#, &mut fields)
            .is_none());
        assert!(c.clean_record("not json", &mut fields).is_none());
        assert!(c.clean_record(r#"[1, 2]"#, &mut fields).is_none());
    }
}
