// src/standings/matcher.rs
//! Resolving live running-order names against the standings.
//!
//! Live feeds print names however they like: surname only, upper-cased,
//! trailing driver codes, diacritics dropped or decomposed. Both sides are
//! folded to a canonical key (`normalize_name`) and compared on that.
//!
//! Policy (`ExactThenContains`, the default):
//! 1. exact key equality wins outright;
//! 2. otherwise one key containing the other is a candidate;
//! 3. exactly one candidate is a match, zero or several is no match.
//!
//! A short surname that also sits inside a longer one ("Sainz" / "Sainz Jr")
//! therefore resolves only when the exact form is present.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use super::types::StandingsEntry;
use crate::core::sanitize::normalize_ws;

/// Fold a name to its comparison key: NFKD, combining marks dropped,
/// lowercase, punctuation as space, whitespace collapsed.
pub fn normalize_name(name: &str) -> String {
    let folded: String = name
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    normalize_ws(&folded)
}

/// Normalized keys for one standings set, computed once per projection.
pub struct NameIndex {
    keys: Vec<String>,
}

impl NameIndex {
    pub fn new(standings: &[StandingsEntry]) -> Self {
        Self { keys: standings.iter().map(|e| normalize_name(&e.driver_name)).collect() }
    }

    pub fn keys(&self) -> &[String] { &self.keys }
}

pub trait NameMatcher {
    /// Index into the standings of the single entry `identifier` refers to,
    /// or `None` when nothing (or more than one thing) matches.
    fn resolve(&self, identifier: &str, index: &NameIndex) -> Option<usize>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ExactThenContains;

impl NameMatcher for ExactThenContains {
    fn resolve(&self, identifier: &str, index: &NameIndex) -> Option<usize> {
        let key = normalize_name(identifier);
        if key.is_empty() { return None; }

        if let Some(hit) = unique(index.keys().iter().enumerate().filter(|(_, k)| **k == key)) {
            return Some(hit);
        }
        if index.keys().iter().any(|k| *k == key) {
            // exact but duplicated; the contract check normally prevents this
            return None;
        }

        unique(
            index.keys().iter().enumerate()
                .filter(|(_, k)| !k.is_empty() && (k.contains(&key) || key.contains(k.as_str())))
        )
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ExactOnly;

impl NameMatcher for ExactOnly {
    fn resolve(&self, identifier: &str, index: &NameIndex) -> Option<usize> {
        let key = normalize_name(identifier);
        if key.is_empty() { return None; }
        unique(index.keys().iter().enumerate().filter(|(_, k)| **k == key))
    }
}

fn unique<'a>(mut hits: impl Iterator<Item = (usize, &'a String)>) -> Option<usize> {
    let (first, _) = hits.next()?;
    match hits.next() {
        None => Some(first),
        Some(_) => None,
    }
}
