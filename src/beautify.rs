//! Line-oriented reformatting of downloaded artifacts.
//!
//! Markup-like files get a simple tag-based re-indentation so minified
//! one-liners become reviewable; everything else passes through unchanged.
//! This is deliberately not a parser, and scanning does not depend on it.

/// Extensions that receive markup re-indentation.
const MARKUP_EXTENSIONS: [&str; 4] = [".html", ".htm", ".php", ".vue"];

pub fn beautify(content: &str, extension: &str) -> String {
    if MARKUP_EXTENSIONS.contains(&extension) {
        indent_markup(content)
    } else {
        content.to_string()
    }
}

fn indent_markup(content: &str) -> String {
    let indent_str = "  ";
    let mut out = Vec::new();
    let mut level: usize = 0;

    for line in content.lines() {
        let stripped = line.trim();
        if stripped.is_empty() {
            continue;
        }

        if stripped.starts_with("</") {
            level = level.saturating_sub(1);
        }

        out.push(format!("{}{}", indent_str.repeat(level), stripped));

        if stripped.starts_with('<')
            && !stripped.starts_with("</")
            && !stripped.starts_with("<!")
            && !stripped.starts_with("<?")
            && !stripped.ends_with("/>")
        {
            level += 1;
        }
    }

    out.join("\n")
}
