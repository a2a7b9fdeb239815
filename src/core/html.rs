// src/core/html.rs
//! Case-insensitive tag slicing over raw HTML strings.
//! Naive on purpose: the results pages are plain server-rendered tables.

use super::sanitize::{normalize_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Next complete `<open ...> ... </close>` block at or after `from`.
/// Returns byte offsets `(start_of_open, end_of_close)`.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let mut start = lc.get(from..)?.find(&ol)? + from;
    // "<th" must not match "<thead"
    while lc[start + ol.len()..].starts_with(|c: char| c.is_ascii_alphanumeric()) {
        start = lc.get(start + 1..)?.find(&ol)? + start + 1;
    }
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// All blocks of one tag inside `s`, in document order.
pub fn tag_blocks<'a>(s: &'a str, o: &str, c: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((bs, be)) = next_tag_block_ci(s, o, c, pos) {
        out.push(&s[bs..be]);
        pos = be;
    }
    out
}

/// The opening tag of a block, e.g. `<table class="f1-table">`.
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(gt) => &block[..=gt],
        None => block,
    }
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Remove tags, treating each as a word break, then collapse whitespace.
/// `<span>Max</span><span>Verstappen</span>` → `Max Verstappen`.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => { in_tag = true; out.push(' '); }
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Visible text of a cell block.
pub fn cell_text(block: &str) -> String {
    normalize_ws(&normalize_entities(&strip_tags(inner_after_open_tag(block))))
}

/// First `<table>` whose opening tag mentions `class_sub` (case-insensitive).
pub fn find_table_with_class<'a>(doc: &'a str, class_sub: &str) -> Option<&'a str> {
    let needle = to_lower(class_sub);
    tag_blocks(doc, "<table", "</table>")
        .into_iter()
        .find(|t| to_lower(open_tag(t)).contains(&needle))
}

/// Page title text, if any.
pub fn title(doc: &str) -> Option<String> {
    let (s, e) = next_tag_block_ci(doc, "<title", "</title>", 0)?;
    let t = cell_text(&doc[s..e]);
    if t.is_empty() { None } else { Some(t) }
}

/// A parsed table: `<th>` texts and `<td>` texts per data row.
/// Rows without any `<td>` (header rows) are skipped.
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn parse(table: &str) -> Self {
        let headers = tag_blocks(table, "<th", "</th>")
            .into_iter()
            .map(cell_text)
            .collect();

        let rows = tag_blocks(table, "<tr", "</tr>")
            .into_iter()
            .map(|tr| {
                tag_blocks(tr, "<td", "</td>")
                    .into_iter()
                    .map(cell_text)
                    .collect::<Vec<_>>()
            })
            .filter(|cells| !cells.is_empty())
            .collect();

        Self { headers, rows }
    }

    /// Column whose header equals any of `names` (case-insensitive), else `fallback`.
    pub fn column(&self, names: &[&str], fallback: Option<usize>) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
            .or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_tags_breaks_words() {
        assert_eq!(strip_tags("<span>Max</span><span>Verstappen</span>"), "Max Verstappen");
    }

    #[test]
    fn finds_table_by_class() {
        let doc = r#"<table class="nav"><tr><td>x</td></tr></table>
                     <TABLE class="f1-table f1-table-with-data"><tr><td>y</td></tr></TABLE>"#;
        let t = find_table_with_class(doc, "f1-table").unwrap();
        assert!(t.contains("y"));
        assert!(!t.contains(">x<"));
    }

    #[test]
    fn parses_headers_and_rows() {
        let t = Table::parse(
            "<table><thead><tr><th>Pos</th><th>Driver</th></tr></thead>\
             <tbody><tr><td>1</td><td><a href='/x'>Lando&nbsp;Norris</a></td></tr></tbody></table>",
        );
        assert_eq!(t.headers, vec!["Pos", "Driver"]);
        assert_eq!(t.rows, vec![vec![s!("1"), s!("Lando Norris")]]);
        assert_eq!(t.column(&["driver"], Some(9)), Some(1));
        assert_eq!(t.column(&["team"], Some(3)), Some(3));
    }

    #[test]
    fn th_does_not_match_thead() {
        let t = "<thead><tr><th>Pos</th></tr></thead>";
        let (s, e) = next_tag_block_ci(t, "<th", "</th>", 0).unwrap();
        assert_eq!(&t[s..e], "<th>Pos</th>");
    }

    #[test]
    fn title_text() {
        assert_eq!(title("<html><title>Race Result</title></html>").as_deref(), Some("Race Result"));
        assert_eq!(title("<html></html>"), None);
    }
}
