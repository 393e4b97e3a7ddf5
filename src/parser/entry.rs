use std::sync::LazyLock;

use regex::Regex;

// Characters a scraped title may contain. `*` and `½` are rating glyphs that
// sometimes sit before the year; the cleaner removes them afterwards.
const TITLE_BODY: &str = r"[\w\s:'\-,.\&()/—\[\]*½]";
const PAREN_YEAR: &str = r"\(([0-9]{4})\)";
const BARE_YEAR: &str = r"([0-9]{4})";

static PAREN_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| entry_pattern(PAREN_YEAR));
static BARE_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| entry_pattern(BARE_YEAR));

fn entry_pattern(year: &str) -> Regex {
    Regex::new(&format!(
        r"(?i)(?:^\s*[0-9]+[.)]\s*)?(?:Poster for\s*)?({TITLE_BODY}+?)\s+{year}(?:\s*[*½]*\s*(?:Read Review|Show Reviews)?)?"
    ))
    .unwrap()
}

/// How the year appeared on the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearStyle {
    Parenthesized,
    Bare,
}

/// Tried in order; the first style that matches decides the line.
pub const MATCH_ORDER: [YearStyle; 2] = [YearStyle::Parenthesized, YearStyle::Bare];

impl YearStyle {
    fn regex(self) -> &'static Regex {
        match self {
            YearStyle::Parenthesized => &*PAREN_YEAR_RE,
            YearStyle::Bare => &*BARE_YEAR_RE,
        }
    }

    /// `None` if the style does not match; `Some(None)` if it matched but the
    /// title was only whitespace.
    fn capture(self, line: &str) -> Option<Option<RawEntry>> {
        let caps = self.regex().captures(line)?;
        let title = caps[1].trim().to_string();
        if title.is_empty() {
            return Some(None);
        }
        Some(Some(RawEntry {
            title,
            year: caps[2].to_string(),
            style: self,
        }))
    }
}

/// Title/year pair as captured, before cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub title: String,
    pub year: String,
    pub style: YearStyle,
}

/// Pull a raw entry out of one trimmed line. `None` if no year style matches,
/// or if the first matching style captured an empty title; later styles are
/// not consulted once one has matched.
pub fn parse_line(line: &str) -> Option<RawEntry> {
    MATCH_ORDER.iter().find_map(|style| style.capture(line)).flatten()
}

// ── Tests ──
