pub mod clean;
pub mod dedup;
pub mod entry;
pub mod header;
pub mod normalize;
pub mod report;

use tracing::{debug, trace};

use dedup::MovieSet;
use report::Report;

/// Single pass over one playlist: header → entries → cleanup → dedup → sort.
///
/// Pure; the same text always yields the same report. `source_name` is only
/// used when the document has no title line.
pub fn process_document(content: &str, source_name: &str) -> Report {
    let lines: Vec<&str> = content.trim().split('\n').map(str::trim).collect();
    let scan = header::extract_header(&lines, source_name);

    let mut movies = MovieSet::new();
    for line in &lines {
        if line.is_empty() || scan.is_metadata(line) {
            continue;
        }
        let Some(raw) = entry::parse_line(line) else {
            continue;
        };
        let title = clean::clean_title(&raw.title);
        if let Some(reason) = clean::rejection(&title, &raw.year) {
            trace!(line = %line, style = ?raw.style, ?reason, "dropped entry");
            continue;
        }
        movies.insert(&title, &raw.year);
    }

    if movies.is_empty() {
        debug!(source = %source_name, "no movie entries found");
    } else {
        debug!(source = %source_name, movies = movies.len(), "document parsed");
    }

    Report::new(scan.header, movies.into_records())
}

// ── Tests ──
