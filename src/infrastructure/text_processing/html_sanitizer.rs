use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Reduces an HTML-formatted text field to plain text: every `<...>` run is
/// removed, the `&nbsp;` entity becomes an ordinary space, whitespace runs
/// collapse to a single space, and the ends are trimmed.
///
/// This is a greedy tag-stripping pass, not an HTML parser: literal text
/// shaped like `<...>` is removed too. Known limitation, kept for
/// compatibility with the exports this was built against. Total and
/// idempotent; never fails.
pub fn strip_markup(raw: &str) -> String {
    let without_tags = TAG.replace_all(raw, "");
    let without_nbsp = without_tags.replace("&nbsp;", " ");
    WHITESPACE.replace_all(&without_nbsp, " ").trim().to_string()
}
