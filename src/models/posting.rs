//! Postings as read from the requisition listing

use std::sync::LazyLock;

use regex::Regex;

/// Edit links look like `https://<host>/<section>/<posting id>/edit`, or the
/// same path without scheme and host when read from the raw attribute
static POSTING_ID_IN_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.-]*://[^/]*)?/[^/]*/([^/?#]+)").expect("valid regex")
});

const COPY_PREFIX: &str = "Copy of ";

/// Visibility lifecycle of a posting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostingStatus {
    Draft,
    Live,
}

impl PostingStatus {
    /// Derives the status from a listing row's class attribute
    pub fn from_row_class(class: &str) -> Self {
        if class.split_whitespace().any(|c| c == "live") {
            PostingStatus::Live
        } else {
            PostingStatus::Draft
        }
    }
}

/// One listing row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingRow {
    pub id: String,
    pub board: String,
    pub name: String,
    pub location: String,
}

/// Every posting row of a requisition, in listing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExistingState {
    rows: Vec<PostingRow>,
}

impl ExistingState {
    pub fn extend(&mut self, rows: impl IntoIterator<Item = PostingRow>) {
        self.rows.extend(rows);
    }

    pub fn rows(&self) -> &[PostingRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Name of the first row carrying `id`
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.id == id)
            .map(|row| row.name.as_str())
    }

    /// Locations of every row whose name contains `name`
    pub fn locations_for_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.rows
            .iter()
            .filter(move |row| row.name.contains(name))
            .map(|row| row.location.as_str())
    }
}

impl FromIterator<PostingRow> for ExistingState {
    fn from_iter<I: IntoIterator<Item = PostingRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// First line of a possibly multi-line name cell
pub fn first_line(cell: &str) -> String {
    cell.lines().next().unwrap_or_default().trim().to_string()
}

/// Location cell text without its `( )` decoration
pub fn strip_location_decoration(cell: &str) -> String {
    cell.trim()
        .trim_matches(|c| c == '(' || c == ')')
        .to_string()
}

/// Posting id from an edit link
pub fn posting_id_from_href(href: &str) -> Option<String> {
    POSTING_ID_IN_HREF
        .captures(href.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Name for a duplicated posting: leading "Copy of " prefixes removed
pub fn clean_posting_name(name: &str) -> String {
    let mut cleaned = name.trim_start();
    while let Some(rest) = cleaned.strip_prefix(COPY_PREFIX) {
        cleaned = rest.trim_start();
    }
    cleaned.trim().to_string()
}

/// Public "publish location": everything after the first comma, trimmed
pub fn publish_location(location: &str) -> &str {
    location
        .split_once(',')
        .map_or(location, |(_, rest)| rest)
        .trim()
}
