use std::num::IntErrorKind;

use tracing::debug;

use crate::order::{SortBy, SortOrder};

pub const DEFAULT_LIMIT: usize = 20;
pub const MAX_LIMIT: usize = 50;

/// Raw query parameters as they arrive on the wire. Everything is a string;
/// typing happens in [`PageRequest::from_params`] and
/// [`crate::filter::FilterSelection::from_params`].
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub cursor: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    pub campus: Option<String>,
    pub main_field_of_study: Option<String>,
    pub semester: Option<String>,
    pub period: Option<String>,
    pub block: Option<String>,
    pub study_pace: Option<String>,
    pub course_level: Option<String>,
    /// JSON object: label -> tri-state.
    pub examinations: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl SearchParams {
    /// Folds decoded query pairs (camelCase keys). A repeated scalar key keeps
    /// its first value. A repeated list key has its values joined with `,`, so
    /// `campus=A&campus=B` reads the same as `campus=A,B`.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut p = SearchParams::default();
        for (key, value) in pairs {
            match key.as_str() {
                "cursor" => keep_first(&mut p.cursor, value),
                "limit" => keep_first(&mut p.limit, value),
                "search" => keep_first(&mut p.search, value),
                "examinations" => keep_first(&mut p.examinations, value),
                "sortBy" => keep_first(&mut p.sort_by, value),
                "sortOrder" => keep_first(&mut p.sort_order, value),
                "campus" => append_list(&mut p.campus, value),
                "mainFieldOfStudy" => append_list(&mut p.main_field_of_study, value),
                "semester" => append_list(&mut p.semester, value),
                "period" => append_list(&mut p.period, value),
                "block" => append_list(&mut p.block, value),
                "studyPace" => append_list(&mut p.study_pace, value),
                "courseLevel" => append_list(&mut p.course_level, value),
                _ => debug!(%key, "unknown query parameter, ignoring"),
            }
        }
        p
    }
}

fn keep_first(slot: &mut Option<String>, value: String) {
    if slot.is_none() {
        *slot = Some(value);
    }
}

fn append_list(slot: &mut Option<String>, value: String) {
    match slot {
        Some(list) => {
            list.push(',');
            list.push_str(&value);
        }
        None => *slot = Some(value),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub cursor: Option<String>,
    pub limit: usize,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            cursor: None,
            limit: DEFAULT_LIMIT,
            sort_by: SortBy::Code,
            sort_order: SortOrder::Asc,
        }
    }
}

impl PageRequest {
    pub fn from_params(p: &SearchParams) -> Self {
        let cursor = p
            .cursor
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        let (sort_by, sort_order) = match p.sort_by.as_deref().map(SortBy::parse) {
            None => (SortBy::Code, parse_order(p.sort_order.as_deref())),
            Some(Some(by)) => (by, parse_order(p.sort_order.as_deref())),
            Some(None) => {
                debug!(sort_by = ?p.sort_by, "unknown sortBy, using code asc");
                (SortBy::Code, SortOrder::Asc)
            }
        };

        Self {
            cursor,
            limit: clamp_limit(p.limit.as_deref()),
            sort_by,
            sort_order,
        }
    }
}

/// Missing or unparsable -> default; otherwise clamped to `[1, MAX_LIMIT]`.
/// Integers too wide for `i64` clamp like any other out-of-range number.
pub fn clamp_limit(raw: Option<&str>) -> usize {
    match raw.map(str::trim).map(str::parse::<i64>) {
        Some(Ok(n)) => n.clamp(1, MAX_LIMIT as i64) as usize,
        Some(Err(e)) => match e.kind() {
            IntErrorKind::PosOverflow => MAX_LIMIT,
            IntErrorKind::NegOverflow => 1,
            _ => DEFAULT_LIMIT,
        },
        None => DEFAULT_LIMIT,
    }
}

fn parse_order(raw: Option<&str>) -> SortOrder {
    raw.and_then(SortOrder::parse).unwrap_or(SortOrder::Asc)
}
