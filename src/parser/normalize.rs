/// Comparison key for a movie title.
///
/// Smart apostrophes and em-dashes fold to their ASCII forms, everything that
/// is not alphanumeric, whitespace, `:`, `'` or `-` is dropped, then the result
/// is lowercased and trimmed. Only ASCII letters are case-folded; accented
/// letters survive untouched, case included.
pub fn normalize_title(title: &str) -> String {
    title
        .replace('\u{2019}', "'")
        .replace('\u{2014}', "-")
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, ':' | '\'' | '-'))
        .collect::<String>()
        .to_ascii_lowercase()
        .trim()
        .to_string()
}

// ── Tests ──
