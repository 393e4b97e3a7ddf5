//! Re-reads rendered playlist reports and bundles them into a JSON catalog.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::files;
use crate::parser::report::{SHORT_VERSION_LABEL, TITLE_LABEL, URL_LABEL};

static MOVIE_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- (.+?) \(([0-9]{4})\)$").unwrap());
static ID_STRIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\s\-]").unwrap());
static ID_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s\-]+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonMovie {
    pub title: String,
    pub year: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonList {
    pub id: String,
    pub title: String,
    pub short_title: String,
    pub source_url: String,
    pub total_movies: usize,
    pub movies: Vec<CanonMovie>,
}

/// Totals across every exported list; `lists` maps list id to movie count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonStats {
    pub total_lists: usize,
    pub total_movies: usize,
    pub lists: BTreeMap<String, usize>,
}

impl CanonStats {
    pub fn from_lists(lists: &[CanonList]) -> Self {
        CanonStats {
            total_lists: lists.len(),
            total_movies: lists.iter().map(|l| l.total_movies).sum(),
            lists: lists.iter().map(|l| (l.id.clone(), l.total_movies)).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CanonCatalog<'a> {
    lists: &'a [CanonList],
    stats: CanonStats,
}

/// Identifier derived from a report's file stem: `"1001 Films - Vol. 2"` →
/// `"LIST_1001_films_vol_2"`.
pub fn list_id(stem: &str) -> String {
    let lower = stem.to_lowercase();
    let stripped = ID_STRIP_RE.replace_all(&lower, "");
    let id = ID_SEPARATOR_RE.replace_all(&stripped, "_").into_owned();
    if id.starts_with(|c: char| c.is_ascii_digit()) {
        format!("LIST_{id}")
    } else {
        id
    }
}

/// Parse one rendered report. `path` is only used for the id and for errors.
pub fn parse_report(text: &str, path: &Path) -> Result<CanonList> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();

    let field = |label: &'static str| -> Result<String> {
        lines
            .iter()
            .find_map(|l| l.strip_prefix(label))
            .map(|v| v.trim().to_string())
            .ok_or_else(|| Error::MissingMetadata {
                path: path.to_path_buf(),
                label,
            })
    };
    let title = field(TITLE_LABEL)?;
    let short_title = field(SHORT_VERSION_LABEL)?;
    let source_url = field(URL_LABEL)?;

    let movies: Vec<CanonMovie> = lines
        .iter()
        .filter_map(|l| MOVIE_LINE_RE.captures(l))
        .filter_map(|caps| {
            Some(CanonMovie {
                title: caps[1].trim().to_string(),
                year: caps[2].parse().ok()?,
            })
        })
        .collect();

    if movies.is_empty() {
        return Err(Error::NoMovies(path.to_path_buf()));
    }

    Ok(CanonList {
        id: list_id(&files::source_name(path)),
        title,
        short_title,
        source_url,
        total_movies: movies.len(),
        movies,
    })
}

/// Every parseable report in `dir`, ordered by id. Broken reports are logged
/// and left out.
pub fn collect(dir: &Path, ext: &str) -> Result<Vec<CanonList>> {
    let mut lists = Vec::new();
    for path in files::discover(dir, ext, false)? {
        let parsed = files::read_document(&path).and_then(|text| parse_report(&text, &path));
        match parsed {
            Ok(list) => lists.push(list),
            Err(e) => warn!(error = %e, "skipping report"),
        }
    }
    lists.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(lists)
}

/// Pretty-printed `{ "lists": [...], "stats": {...} }` catalog.
pub fn to_json(lists: &[CanonList]) -> Result<String> {
    let catalog = CanonCatalog {
        lists,
        stats: CanonStats::from_lists(lists),
    };
    Ok(serde_json::to_string_pretty(&catalog)?)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::process_document;

    #[test]
    fn ids() {
        assert_eq!(list_id("The New Canon"), "the_new_canon");
        assert_eq!(list_id("1001 Films - Vol. 2"), "LIST_1001_films_vol_2");
        assert_eq!(list_id("Sight & Sound (2022)"), "sight_sound_2022");
    }

    #[test]
    fn reads_back_rendered_report() {
        let text = std::fs::read_to_string("tests/fixtures/letterboxd_canon.txt").unwrap();
        let rendered = process_document(&text, "letterboxd_canon").render();
        let list = parse_report(&rendered, Path::new("out/The New Canon.md")).unwrap();

        assert_eq!(list.id, "the_new_canon");
        assert_eq!(list.title, "The New Canon");
        assert_eq!(list.source_url, "https://letterboxd.com/example/list/the-new-canon/");
        assert_eq!(list.movies.len(), 9);
        assert_eq!(list.total_movies, 9);
        assert_eq!(
            list.movies[0],
            CanonMovie {
                title: "2001: A Space Odyssey".into(),
                year: 1968
            }
        );
    }

    #[test]
    fn empty_url_is_allowed() {
        let text = "List Title: A\nList Short Version: A\nList URL: \n\nMovies:\n- Heat (1995)\n";
        let list = parse_report(text, Path::new("a.md")).unwrap();
        assert_eq!(list.source_url, "");
    }

    #[test]
    fn missing_header_line() {
        let text = "List Title: A\nList URL: \n\nMovies:\n- Heat (1995)\n";
        let err = parse_report(text, Path::new("a.md")).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingMetadata {
                label: SHORT_VERSION_LABEL,
                ..
            }
        ));
    }

    #[test]
    fn no_movies() {
        let text = "List Title: A\nList Short Version: A\nList URL: \n\nMovies:\n";
        assert!(matches!(
            parse_report(text, Path::new("a.md")),
            Err(Error::NoMovies(_))
        ));
    }

    #[test]
    fn collect_skips_broken_reports() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("b list.md"),
            "List Title: B\nList Short Version: B\nList URL: \n\nMovies:\n- Ran (1985)\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("a list.md"), "not a report").unwrap();

        let lists = collect(dir.path(), "md").unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].id, "b_list");

        let json = to_json(&lists).unwrap();
        assert!(json.contains("\"shortTitle\": \"B\""));
        assert!(json.contains("\"year\": 1985"));
        assert!(json.contains("\"totalMovies\": 1"));
    }

    #[test]
    fn stats_across_lists() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("crime.md"),
            "List Title: Crime\nList Short Version: Crime\nList URL: \n\nMovies:\n- Heat (1995)\n- Ronin (1998)\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("space.md"),
            "List Title: Space\nList Short Version: Space\nList URL: \n\nMovies:\n- Alien (1979)\n",
        )
        .unwrap();

        let lists = collect(dir.path(), "md").unwrap();
        let stats = CanonStats::from_lists(&lists);
        assert_eq!(stats.total_lists, 2);
        assert_eq!(stats.total_movies, 3);
        assert_eq!(stats.lists.get("crime"), Some(&2));
        assert_eq!(stats.lists.get("space"), Some(&1));

        let value: serde_json::Value = serde_json::from_str(&to_json(&lists).unwrap()).unwrap();
        assert_eq!(value["stats"]["totalLists"], 2);
        assert_eq!(value["stats"]["totalMovies"], 3);
        assert_eq!(value["lists"][0]["totalMovies"], 2);
    }
}
