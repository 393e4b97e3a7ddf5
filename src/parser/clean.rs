use std::sync::LazyLock;

use regex::Regex;

// Digits that belong to the title: "2001: A Space Odyssey", "12 Angry Men", "1917".
static NUMBERED_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:[\s:]|$)").unwrap());
static LEADING_DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+\s*").unwrap());
static POSTER_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Poster for\s*").unwrap());
static TRAILING_RATING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*[*½]+\s*(?:Read Review|Show Reviews)?$").unwrap()
});
static TRAILING_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[0-9]{4}$").unwrap());

const EXCLUDED_PHRASES: &[&str] = &["movies you must see"];

/// Why a cleaned title was thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    Link,
    ExcludedPhrase,
    KnownBadCapture,
    TooShort,
}

/// Strip list noise from a captured title.
///
/// Steps run in a fixed order, each result trimmed:
/// 1. list-numbering digits (`1All of Us Strangers`), unless the digits are
///    part of the title (followed by a space, a colon or nothing);
/// 2. the `Poster for ` prefix left by scraped image alt text;
/// 3. trailing rating glyphs and review-link text;
/// 4. a trailing four-digit year captured twice (`Heat 1995`);
/// 5. digits still glued to the first word (`627Vivre Sa Vie`).
pub fn clean_title(raw: &str) -> String {
    let mut title = raw.trim().to_string();

    if !NUMBERED_TITLE_RE.is_match(&title) {
        title = LEADING_DIGITS_RE.replace(&title, "").trim().to_string();
    }

    title = POSTER_PREFIX_RE.replace(&title, "").trim().to_string();
    title = TRAILING_RATING_RE.replace(&title, "").trim().to_string();

    title = TRAILING_YEAR_RE.replace(&title, "").trim().to_string();

    if !NUMBERED_TITLE_RE.is_match(&title) {
        let without = title.trim_start_matches(|c: char| c.is_ascii_digit());
        title = without.trim().to_string();
    }

    title
}

/// Post-cleanup validity check. `None` means the entry is kept.
pub fn rejection(title: &str, year: &str) -> Option<Rejection> {
    if title.is_empty() {
        return Some(Rejection::Empty);
    }
    if title.starts_with("http") {
        return Some(Rejection::Link);
    }
    let lower = title.to_lowercase();
    if EXCLUDED_PHRASES.iter().any(|p| lower.contains(p)) {
        return Some(Rejection::ExcludedPhrase);
    }
    if is_known_bad_capture(title, year) {
        return Some(Rejection::KnownBadCapture);
    }
    if title.chars().count() < 2 && !title.chars().all(|c| c.is_ascii_digit()) {
        return Some(Rejection::TooShort);
    }
    None
}

/// One scraped list truncates "A Trip to the Moon" (1902); the short capture
/// is dropped so it never shadows the real entry. Exact match only: the full
/// title and other years pass.
fn is_known_bad_capture(title: &str, year: &str) -> bool {
    title == "Trip to the Moon" && year == "1902"
}

// ── Tests ──
