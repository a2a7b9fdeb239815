// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::standings::SessionType;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

/// Where one page comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    Url(String),
    File(PathBuf),
}

impl Location {
    /// `http(s)://…` is a URL, anything else a path.
    pub fn parse(s: &str) -> Self {
        let t = s.trim();
        if t.starts_with("http://") || t.starts_with("https://") {
            Location::Url(s!(t))
        } else {
            Location::File(PathBuf::from(t))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Location::Url(u) => u.clone(),
            Location::File(p) => p.display().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub season: u32,
    /// Explicit standings page; `None` means the season's standings URL.
    pub standings: Option<Location>,
    /// Running-order page or list; `None` means no live data.
    pub order: Option<Location>,
    /// Forces the session type instead of detecting it from the page.
    pub session: Option<SessionType>,
    /// Use the built-in demo data instead of any page.
    pub demo: bool,
    /// Exact name matching only (no partial-name fallback).
    pub strict_names: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            season: DEFAULT_SEASON,
            standings: None,
            order: None,
            session: None,
            demo: false,
            strict_names: false,
        }
    }
}

impl FetchOptions {
    pub fn standings_location(&self) -> Location {
        self.standings.clone().unwrap_or_else(|| Location::Url(standings_url(self.season)))
    }
}

pub fn standings_url(season: u32) -> String {
    join!(BASE_URL, &STANDINGS_PATH_TMPL.replace("{season}", &season.to_string()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

/// Where an export goes. Only an explicit file name is pinned; the other
/// two derive the file name from the current format.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
enum OutTarget {
    #[default]
    Default,
    Dir(PathBuf),
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out: OutTarget,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out: OutTarget::Default,
        }
    }
}

impl ExportOptions {
    fn default_name(&self) -> String {
        join!(DEFAULT_FILE, ".", self.format.ext())
    }

    pub fn out_path(&self) -> PathBuf {
        match &self.out {
            OutTarget::Default => PathBuf::from(DEFAULT_OUT_DIR).join(self.default_name()),
            OutTarget::Dir(d) => d.join(self.default_name()),
            OutTarget::File(p) => p.clone(),
        }
    }

    /// Set the output file. A trailing separator or an existing directory
    /// means "default file name inside this directory".
    pub fn set_path(&mut self, text: &str) {
        let t = text.trim();
        if t.is_empty() {
            self.out = OutTarget::Default;
            return;
        }
        let p = Path::new(t);
        self.out = if t.ends_with('/') || t.ends_with('\\') || p.is_dir() {
            OutTarget::Dir(p.to_path_buf())
        } else {
            OutTarget::File(p.to_path_buf())
        };
    }

    /// Text that `set_path` turns back into the same target. Directories
    /// keep a trailing separator so they survive even if not yet created.
    pub fn path_text(&self) -> String {
        match &self.out {
            OutTarget::Dir(d) => {
                let t = d.display().to_string();
                if t.ends_with('/') || t.ends_with('\\') { t } else { join!(&t, "/") }
            }
            _ => self.out_path().display().to_string(),
        }
    }

    pub fn is_default_path(&self) -> bool {
        self.out == OutTarget::Default
    }

    /// True unless the user pinned a file name.
    pub fn name_follows_format(&self) -> bool {
        !matches!(self.out, OutTarget::File(_))
    }
}
