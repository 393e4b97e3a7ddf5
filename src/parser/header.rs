use std::collections::HashSet;

// Header lines are only looked for near the top of the document.
const SHORT_VERSION_WINDOW: usize = 5;
const URL_WINDOW: usize = 10;
const URL_PREFIX: &str = "https://";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub short_version: String,
    pub url: String,
}

/// Header plus the exact lines it was taken from.
#[derive(Debug, Clone)]
pub struct HeaderScan {
    pub header: Header,
    pub metadata_lines: HashSet<String>,
}

impl HeaderScan {
    /// Metadata lines are matched by text, not position: a movie line that
    /// repeats a header line verbatim is skipped too.
    pub fn is_metadata(&self, line: &str) -> bool {
        self.metadata_lines.contains(line)
    }
}

/// Scan the top of the document for title, short version and source URL.
///
/// `lines` are already trimmed; their indices count blank lines. Each line
/// fills at most one field, tried in title → short version → URL order.
/// `source_name` (the file stem) stands in for a missing title.
pub fn extract_header(lines: &[&str], source_name: &str) -> HeaderScan {
    let mut title: Option<&str> = None;
    let mut short_version: Option<&str> = None;
    let mut url: Option<&str> = None;
    let mut metadata_lines = HashSet::new();

    for (idx, &line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }

        if title.is_none() {
            title = Some(line);
            metadata_lines.insert(line.to_string());
        } else if short_version.is_none()
            && idx < SHORT_VERSION_WINDOW
            && Some(line) != title
            && line.split_whitespace().count() > 2
        {
            short_version = Some(line);
            metadata_lines.insert(line.to_string());
        } else if url.is_none() && idx < URL_WINDOW && line.starts_with(URL_PREFIX) {
            url = Some(line);
            metadata_lines.insert(line.to_string());
        }

        if title.is_some() && short_version.is_some() && url.is_some() {
            break;
        }
    }

    let title = title.unwrap_or(source_name).to_string();
    let short_version = short_version.map_or_else(|| title.clone(), str::to_string);
    let url = url.unwrap_or_default().to_string();

    HeaderScan {
        header: Header {
            title,
            short_version,
            url,
        },
        metadata_lines,
    }
}

// ── Tests ──
