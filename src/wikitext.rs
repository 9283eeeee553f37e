//! Wikitext → plaintext stripping.
//!
//! Removes templates, tables, refs, link markup, headings, and formatting
//! directives from MediaWiki source, keeping the human-readable text.

use std::sync::LazyLock;

use regex::Regex;

static NOWIKI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<nowiki>(.*?)</nowiki>").unwrap());
static PRE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<pre>(.*?)</pre>").unwrap());
static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static REF_PAIR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<ref[^>/]*>.*?</ref\s*>").unwrap());
static REF_SELF_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<ref[^>]*/>").unwrap());
static EXT_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(?:https?|ftp)://[^\s\]]+\s+([^\]]*)\]").unwrap());
static EXT_BARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(?:https?|ftp)://[^\s\]]+\]").unwrap());
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^=+\s*(.*?)\s*=+\s*$").unwrap());
static LIST_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[*#:;]+\s*").unwrap());
static MAGIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__[A-Z]+__").unwrap());
static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][^<>]*>").unwrap());

/// Link targets dropped wholesale (namespace prefix before the first colon,
/// compared lowercase). Covers the zh-wiki dumps this tool is fed plus the
/// English spellings that appear in them.
const DROP_LINK_PREFIXES: &[&str] = &[
    "file:", "image:", "category:", "template:", "wikipedia:", "wikt:", "wp:", "help:",
    "文件:", "檔案:", "档案:", "图像:", "圖像:", "分类:", "分類:", "模板:", "帮助:", "幫助:",
];

/// Strip wiki markup and return trimmed plain text.
pub fn strip_markup(text: &str) -> String {
    let text = NOWIKI_RE.replace_all(text, "$1");
    let text = PRE_RE.replace_all(&text, "$1");
    let text = COMMENT_RE.replace_all(&text, "");
    let text = REF_PAIR_RE.replace_all(&text, "");
    let text = REF_SELF_RE.replace_all(&text, "");

    // Nested constructs need depth tracking, not regex.
    let text = strip_nested(&text, ('{', '|'), ('|', '}'));
    let text = strip_nested(&text, ('{', '{'), ('}', '}'));
    let text = resolve_internal_links(&text);

    let text = EXT_LINK_RE.replace_all(&text, "$1");
    let text = EXT_BARE_RE.replace_all(&text, "");
    let text = text.replace("'''''", "").replace("'''", "").replace("''", "");
    let text = HEADING_RE.replace_all(&text, "$1");
    let text = text.replace("----", "");
    let text = LIST_RE.replace_all(&text, "");
    let text = MAGIC_RE.replace_all(&text, "");
    let text = HTML_TAG_RE.replace_all(&text, "");

    collapse_whitespace(&text)
}

/// Drop everything between two-char delimiters, honoring nesting.
/// Used for templates `{{...}}` and tables `{|...|}`.
fn strip_nested(text: &str, open: (char, char), close: (char, char)) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == open.0 && chars.peek() == Some(&open.1) {
            chars.next();
            depth += 1;
        } else if c == close.0 && chars.peek() == Some(&close.1) && depth > 0 {
            chars.next();
            depth -= 1;
        } else if depth == 0 {
            out.push(c);
        }
    }

    out
}

/// Replace `[[target]]` / `[[target|display]]` with their display text.
/// Namespace links (files, categories, templates) and interwiki links are
/// dropped entirely, caption markup included.
fn resolve_internal_links(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '[' || chars.peek() != Some(&'[') {
            out.push(c);
            continue;
        }
        chars.next();

        // Collect up to the matching ]], keeping nested links intact
        // (file captions may contain further [[...]]).
        let mut content = String::new();
        let mut depth = 1usize;
        while let Some(ch) = chars.next() {
            if ch == '[' && chars.peek() == Some(&'[') {
                chars.next();
                depth += 1;
                content.push_str("[[");
            } else if ch == ']' && chars.peek() == Some(&']') {
                chars.next();
                depth -= 1;
                if depth == 0 {
                    break;
                }
                content.push_str("]]");
            } else {
                content.push(ch);
            }
        }

        let target = content.split('|').next().unwrap_or("").trim();
        if is_dropped_target(target) {
            continue;
        }

        let display = match content.find('|') {
            Some(pos) => &content[pos + 1..],
            None => content.as_str(),
        };
        // Nested links inside the display text resolve recursively.
        if display.contains("[[") {
            out.push_str(&resolve_internal_links(display));
        } else {
            out.push_str(display);
        }
    }

    out
}

fn is_dropped_target(target: &str) -> bool {
    let lower = target.to_lowercase();
    if DROP_LINK_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return true;
    }
    // Interwiki: 2-3 letter language code before the colon, e.g. [[en:...]]
    match lower.find(':') {
        Some(pos) => {
            let prefix = &lower[..pos];
            (2..=3).contains(&prefix.len()) && prefix.chars().all(|c| c.is_ascii_lowercase())
        }
        None => false,
    }
}

/// Collapse runs of spaces to one space and runs of blank lines to one blank
/// line, then trim. Paragraph structure survives.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0usize;
    let mut pending_space = false;

    for c in text.chars() {
        if c == '\n' {
            newlines += 1;
            pending_space = false;
        } else if c.is_whitespace() {
            pending_space = true;
        } else {
            match newlines {
                0 => {
                    if pending_space {
                        out.push(' ');
                    }
                }
                1 => out.push('\n'),
                _ => out.push_str("\n\n"),
            }
            newlines = 0;
            pending_space = false;
            out.push(c);
        }
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_italic() {
        let out = strip_markup("'''粗体''' 和 ''斜体'' 文本。");
        assert_eq!(out, "粗体 和 斜体 文本。");
    }

    #[test]
    fn internal_links() {
        assert_eq!(strip_markup("前往[[上海]]。"), "前往上海。");
        assert_eq!(strip_markup("前往[[上海市|上海]]。"), "前往上海。");
    }

    #[test]
    fn namespace_links_dropped() {
        let out = strip_markup("正文[[File:Foo.jpg|thumb|含[[嵌套]]的说明]]继续。");
        assert_eq!(out, "正文继续。");
        assert_eq!(strip_markup("尾部[[分类:历史]]"), "尾部");
        assert_eq!(strip_markup("尾部[[en:History]]"), "尾部");
    }

    #[test]
    fn nested_link_in_display_kept() {
        let out = strip_markup("[[a|见[[b]]和c]]");
        assert_eq!(out, "见b和c");
    }

    #[test]
    fn templates_removed_nested() {
        assert_eq!(strip_markup("头{{infobox|a={{inner|b}}}}尾"), "头尾");
    }

    #[test]
    fn tables_removed() {
        let out = strip_markup("前\n{| class=\"wikitable\"\n|-\n| 格子\n|}\n后");
        assert_eq!(out, "前\n\n后");
    }

    #[test]
    fn refs_removed() {
        let out = strip_markup("事实<ref>{{cite web|url=x}}</ref>成立<ref name=\"a\" />。");
        assert_eq!(out, "事实成立。");
    }

    #[test]
    fn external_links() {
        assert_eq!(strip_markup("见[https://example.com 官网]。"), "见官网。");
        assert_eq!(strip_markup("见[https://example.com]。"), "见。");
    }

    #[test]
    fn headings_keep_text() {
        let out = strip_markup("== 历史 ==\n正文");
        assert_eq!(out, "历史\n正文");
    }

    #[test]
    fn lists_and_magic_words() {
        let out = strip_markup("__NOTOC__\n* 第一\n# 第二\n; 术语: 定义");
        assert_eq!(out, "第一\n第二\n术语: 定义");
    }

    #[test]
    fn comments_and_html() {
        let out = strip_markup("可见<!-- 不可见 -->文本<br/>换行");
        assert_eq!(out, "可见文本换行");
    }

    #[test]
    fn nowiki_unwrapped() {
        assert_eq!(strip_markup("<nowiki>'''literal'''</nowiki>"), "literal");
    }

    #[test]
    fn whitespace_collapsed() {
        let out = strip_markup("  甲   乙\n\n\n\n丙  ");
        assert_eq!(out, "甲 乙\n\n丙");
    }

    #[test]
    fn full_article() {
        let src = r#"
'''上海'''是[[中华人民共和国]]的[[直辖市]]<ref>{{cite book|title=年鉴}}</ref>。

{{Infobox city
| name = 上海
| population = 24870895
}}

== 历史 ==
上海的历史可以追溯到[[宋朝|宋代]]。

[[Category:中国城市]]
[[en:Shanghai]]
"#;
        let out = strip_markup(src);
        assert!(out.starts_with("上海是中华人民共和国的直辖市。"));
        assert!(out.contains("历史"));
        assert!(out.contains("宋代"));
        for token in ["[[", "]]", "{{", "}}", "'''", "<ref", "Category", "en:"] {
            assert!(!out.contains(token), "leftover {:?} in {:?}", token, out);
        }
    }
}
