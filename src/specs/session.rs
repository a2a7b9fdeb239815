// src/specs/session.rs
//! Session-type detection from a results page URL and `<title>`.
//! Anything that can't be placed is `Other`, which projects as a pass-through.

use crate::standings::SessionType;

/// Classify a page. The URL's last meaningful path segment is trusted
/// first; the title is only consulted when the URL says nothing.
pub fn detect(url: Option<&str>, title: Option<&str>) -> SessionType {
    let from_url = url.map(from_url).unwrap_or(SessionType::Other);
    if from_url != SessionType::Other {
        return from_url;
    }
    title.map(from_text).unwrap_or(SessionType::Other)
}

/// `…/races/1229/bahrain/race-result` → Race, `…/practice/2` → Other.
pub fn from_url(url: &str) -> SessionType {
    let path = url.split(['?', '#']).next().unwrap_or("");
    let mut segments = path.trim_end_matches('/').rsplit('/');
    let mut last = segments.next().unwrap_or("");
    if !last.is_empty() && last.chars().all(|c| c.is_ascii_digit()) {
        // practice/1, practice/2 …
        last = segments.next().unwrap_or("");
    }
    match last.to_ascii_lowercase().as_str() {
        "race-result" | "race-results" | "race" => SessionType::Race,
        "sprint-results" | "sprint-result" | "sprint" => SessionType::Sprint,
        "qualifying" | "sprint-qualifying" | "sprint-shootout" => SessionType::Qualifying,
        _ => SessionType::Other,
    }
}

/// Free text such as a page title or a `# session:` line.
pub fn from_text(text: &str) -> SessionType {
    let t = text.to_lowercase();
    if t.contains("practice") {
        SessionType::Other
    } else if t.contains("qualifying") || t.contains("shootout") {
        SessionType::Qualifying
    } else if t.contains("sprint") {
        SessionType::Sprint
    } else if t.contains("race") || t.contains("grand prix") {
        SessionType::Race
    } else {
        SessionType::from_label(&t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.formula1.com/en/results/2024/races/1229/bahrain";

    #[test]
    fn url_segments() {
        assert_eq!(from_url(&format!("{BASE}/race-result")), SessionType::Race);
        assert_eq!(from_url(&format!("{BASE}/sprint-results/")), SessionType::Sprint);
        assert_eq!(from_url(&format!("{BASE}/sprint-qualifying")), SessionType::Qualifying);
        assert_eq!(from_url(&format!("{BASE}/qualifying?x=1")), SessionType::Qualifying);
        assert_eq!(from_url(&format!("{BASE}/practice/2")), SessionType::Other);
        assert_eq!(from_url(&format!("{BASE}/starting-grid")), SessionType::Other);
    }

    #[test]
    fn title_fallback() {
        assert_eq!(detect(Some("order.html"), Some("Bahrain Grand Prix 2024 - Race Result")), SessionType::Race);
        assert_eq!(detect(None, Some("Sprint Shootout")), SessionType::Qualifying);
        assert_eq!(detect(None, Some("Practice 1")), SessionType::Other);
        assert_eq!(detect(None, None), SessionType::Other);
    }

    #[test]
    fn url_wins_over_title() {
        assert_eq!(detect(Some(&format!("{BASE}/sprint-results")), Some("Race Result")), SessionType::Sprint);
    }
}
