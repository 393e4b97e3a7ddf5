use std::fmt::Write as _;

use super::dedup::MovieRecord;
use super::header::Header;
use super::normalize::normalize_title;

pub const TITLE_LABEL: &str = "List Title:";
pub const SHORT_VERSION_LABEL: &str = "List Short Version:";
pub const URL_LABEL: &str = "List URL:";
pub const MOVIES_LABEL: &str = "Movies:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub header: Header,
    pub movies: Vec<MovieRecord>,
}

impl Report {
    /// Stable sort by normalized title. Same-title records (remakes) keep the
    /// order they arrive in.
    pub fn new(header: Header, mut movies: Vec<MovieRecord>) -> Self {
        movies.sort_by_cached_key(|m| normalize_title(&m.display_title));
        Report { header, movies }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} {}", TITLE_LABEL, self.header.title);
        let _ = writeln!(out, "{} {}", SHORT_VERSION_LABEL, self.header.short_version);
        let _ = writeln!(out, "{} {}", URL_LABEL, self.header.url);
        out.push('\n');
        out.push_str(MOVIES_LABEL);
        out.push('\n');
        for m in &self.movies {
            let _ = writeln!(out, "- {} ({})", m.display_title, m.year);
        }
        out
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, year: &str) -> MovieRecord {
        MovieRecord {
            display_title: title.to_string(),
            year: year.to_string(),
        }
    }

    fn header() -> Header {
        Header {
            title: "My List".into(),
            short_version: "A short version line".into(),
            url: "https://example.com/list".into(),
        }
    }

    #[test]
    fn sorted_by_title_not_year() {
        let report = Report::new(
            header(),
            vec![
                record("Zodiac", "1985"),
                record("Alien", "2001"),
                record("Memento", "1999"),
            ],
        );
        let order: Vec<_> = report.movies.iter().map(|m| m.year.as_str()).collect();
        assert_eq!(order, vec!["2001", "1999", "1985"]);
    }

    #[test]
    fn sort_ignores_case_and_punctuation() {
        let report = Report::new(
            header(),
            vec![record("beau travail", "1999"), record("\"Alphaville\"", "1965")],
        );
        assert_eq!(report.movies[0].display_title, "\"Alphaville\"");
    }

    #[test]
    fn same_title_keeps_input_order() {
        let report = Report::new(
            header(),
            vec![record("Dune", "2021"), record("Alien", "1979"), record("dune", "1984")],
        );
        let order: Vec<_> = report.movies.iter().map(|m| m.year.as_str()).collect();
        assert_eq!(order, vec!["1979", "2021", "1984"]);
    }

    #[test]
    fn render_layout() {
        let report = Report::new(header(), vec![record("Heat", "1995"), record("Alien", "1979")]);
        assert_eq!(
            report.render(),
            "List Title: My List\n\
             List Short Version: A short version line\n\
             List URL: https://example.com/list\n\
             \n\
             Movies:\n\
             - Alien (1979)\n\
             - Heat (1995)\n"
        );
    }

    #[test]
    fn render_empty_url_and_no_movies() {
        let mut h = header();
        h.url.clear();
        let text = Report::new(h, Vec::new()).render();
        assert!(text.contains("List URL: \n"));
        assert!(text.ends_with("Movies:\n"));
    }
}
