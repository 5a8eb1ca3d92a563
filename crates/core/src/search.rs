//! Helpers for the skill/project substring search.

/// Escape character used in `LIKE ... ESCAPE` clauses built by [`like_pattern`].
pub const LIKE_ESCAPE: char = '\\';

/// Build a `LIKE` pattern matching `query` as a literal substring.
///
/// `%`, `_` and the escape character itself are escaped so user input never
/// acts as a wildcard. An empty query yields `%%`, which matches every row.
///
/// ```
/// use folio_core::search::like_pattern;
///
/// assert_eq!(like_pattern("git"), "%git%");
/// assert_eq!(like_pattern("100%"), "%100\\%%");
/// ```
pub fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
