use catalog::Course;

/// Identity used as the pagination cursor.
pub trait CursorKey {
    fn cursor_key(&self) -> &str;
}

impl CursorKey for Course {
    fn cursor_key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_next_page: bool,
}

/// Cursor paginator over an already filtered and ordered sequence.
///
/// The page starts just after the item whose key equals `cursor`. An absent
/// or unknown cursor starts at the beginning. Position is never derived from
/// a numeric offset, so rows that move between requests do not shift pages.
///
/// A `limit` of zero is treated as one, so a page that reports a next page
/// always carries its cursor.
pub fn paginate<T: CursorKey>(items: Vec<T>, cursor: Option<&str>, limit: usize) -> Page<T> {
    let limit = limit.max(1);
    let start = cursor
        .and_then(|c| items.iter().position(|it| it.cursor_key() == c))
        .map_or(0, |idx| idx + 1);

    let end = start.saturating_add(limit).min(items.len());
    let has_next_page = end < items.len();

    let items: Vec<T> = items.into_iter().take(end).skip(start).collect();
    let next_cursor = if has_next_page {
        items.last().map(|it| it.cursor_key().to_string())
    } else {
        None
    };

    Page {
        items,
        next_cursor,
        has_next_page,
    }
}
