//! Active navigation link selection.
//!
//! Pages are flat `.html` files, so a link is "current" when the last path
//! segment of its `href` equals the last segment of the page location.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Last `/`-separated segment of a link target.
#[must_use]
pub fn href_file_name(href: &str) -> &str {
    href.rsplit('/').next().unwrap_or(href)
}

/// Last segment of a location path, treating `\` as a separator too.
///
/// Pages opened from a Windows filesystem report backslash paths.
#[must_use]
pub fn location_file_name(path: &str) -> &str {
    path.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(path)
}

/// Index of the link to mark active for `location_path`.
///
/// Entries are the links' `href` attributes in document order; missing or
/// empty ones never match. When several links point at the same file, the
/// first one wins.
#[must_use]
pub fn active_link_index(location_path: &str, hrefs: &[Option<String>]) -> Option<usize> {
    let current = location_file_name(location_path);
    hrefs.iter().position(|href| match href.as_deref() {
        Some(href) if !href.is_empty() => href_file_name(href) == current,
        _ => false,
    })
}
