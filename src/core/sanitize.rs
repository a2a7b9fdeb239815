// src/core/sanitize.rs

/// Decode the handful of entities the results pages actually use.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop a trailing three-letter driver code: "Max Verstappen VER" → "Max Verstappen".
/// A lone code is left alone so the cell never ends up empty.
pub fn strip_driver_code(s: &str) -> String {
    let s = normalize_ws(s);
    if let Some(sp) = s.rfind(' ') {
        let tail = &s[sp + 1..];
        if tail.len() == 3 && tail.chars().all(|c| c.is_ascii_uppercase()) {
            return s[..sp].trim_end().to_string();
        }
    }
    s
}

/// File-system friendly stem: alphanumerics kept, whitespace runs become `_`.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() || ch == '/' || ch == '\\' { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' || ch == '_' { if !(last_us && ch == '_') { out.push(ch); } last_us = ch == '_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}
