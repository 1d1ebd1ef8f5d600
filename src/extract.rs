//! URL harvesting from pasted text.
//!
//! Duplicates are preserved on purpose: each occurrence in the input is one
//! download task, so pasting the same URL twice produces two numbered
//! output files.

use regex::Regex;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s\[\]<>"']+"#).unwrap());

/// Artifact extensions worth downloading and scanning.
const VALID_EXTENSIONS: [&str; 18] = [
    ".js", ".php", ".css", ".html", ".htm", ".json", ".xml", ".txt", ".py", ".java", ".cpp", ".c",
    ".ts", ".jsx", ".tsx", ".vue", ".scss", ".sass",
];

/// Extracts all URLs with recognized artifact extensions, in input order,
/// duplicates preserved.
pub fn extract_urls(text: &str) -> Vec<String> {
    URL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|url| {
            let path = url_path(url).to_lowercase();
            VALID_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
        })
        .collect()
}

/// File extension (with leading dot) derived from the URL path, `.txt` when
/// the path carries none.
pub fn artifact_extension(url: &str) -> String {
    let path = url_path(url);
    let segment = path.rsplit('/').next().unwrap_or("");
    match segment.rfind('.') {
        Some(i) if i > 0 => segment[i..].to_lowercase(),
        _ => ".txt".to_string(),
    }
}

/// Path component of a URL, without query or fragment.
fn url_path(url: &str) -> &str {
    let rest = url.split_once("://").map(|(_, r)| r).unwrap_or(url);
    let rest = rest.split(['?', '#']).next().unwrap_or(rest);
    match rest.find('/') {
        Some(i) => &rest[i..],
        None => "",
    }
}
