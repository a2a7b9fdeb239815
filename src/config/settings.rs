// src/config/settings.rs
//! `f1_live.cfg`: optional `key=value` settings, `#` starts a comment.
//!
//! ```text
//! season=2024
//! session=sprint
//! order=https://www.formula1.com/en/results/2024/races/1229/bahrain/race-result
//! format=tsv
//! ```
//!
//! Unknown keys and bad values are logged and skipped; a broken settings
//! file never stops the app from starting.

use std::{fs, path::Path};

use super::options::{AppOptions, ExportFormat, Location};
use crate::standings::SessionType;

fn flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true") || val.eq_ignore_ascii_case("yes")
}

/// Apply settings text on top of `opts`.
pub fn apply(text: &str, opts: &mut AppOptions) {
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some(eq) = line.find('=') else {
            loge!("Settings: line {}: expected key=value", n + 1);
            continue;
        };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();
        match key {
            "season" => match val.parse::<u32>() {
                Ok(y) => opts.fetch.season = y,
                Err(_) => loge!("Settings: line {}: bad season '{val}'", n + 1),
            },
            "session" => opts.fetch.session = if val.is_empty() || val.eq_ignore_ascii_case("auto") {
                None
            } else {
                Some(SessionType::from_label(val))
            },
            "standings" => opts.fetch.standings = (!val.is_empty()).then(|| Location::parse(val)),
            "order" => opts.fetch.order = (!val.is_empty()).then(|| Location::parse(val)),
            "demo" => opts.fetch.demo = flag(val),
            "strict_names" => opts.fetch.strict_names = flag(val),
            "format" => match ExportFormat::parse(val) {
                Some(f) => opts.export.format = f,
                None => loge!("Settings: line {}: bad format '{val}'", n + 1),
            },
            "include_headers" => opts.export.include_headers = flag(val),
            "out_path" => opts.export.set_path(val),
            other => logd!("Settings: ignoring unknown key '{other}'"),
        }
    }
}

/// Defaults overlaid with the settings file at `path`, if it exists.
pub fn load(path: &Path) -> AppOptions {
    let mut opts = AppOptions::default();
    match fs::read_to_string(path) {
        Ok(text) => {
            apply(&text, &mut opts);
            logf!("Settings: loaded {}", path.display());
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => loge!("Settings: could not read {}: {e}", path.display()),
    }
    opts
}

/// Serialize the persisted subset of `opts`.
pub fn render(opts: &AppOptions) -> String {
    let mut s = s!();
    s.push_str(&format!("season={}\n", opts.fetch.season));
    s.push_str(&format!(
        "session={}\n",
        opts.fetch.session.map(|t| t.label()).unwrap_or("auto")
    ));
    if let Some(loc) = &opts.fetch.standings {
        s.push_str(&format!("standings={}\n", loc.describe()));
    }
    if let Some(loc) = &opts.fetch.order {
        s.push_str(&format!("order={}\n", loc.describe()));
    }
    s.push_str(&format!("demo={}\n", if opts.fetch.demo { 1 } else { 0 }));
    s.push_str(&format!("strict_names={}\n", if opts.fetch.strict_names { 1 } else { 0 }));
    s.push_str(&format!("format={}\n", opts.export.format.ext()));
    s.push_str(&format!("include_headers={}\n", if opts.export.include_headers { 1 } else { 0 }));
    if !opts.export.is_default_path() {
        s.push_str(&format!("out_path={}\n", opts.export.path_text()));
    }
    s
}

pub fn save(path: &Path, opts: &AppOptions) -> std::io::Result<()> {
    fs::write(path, render(opts))
}
