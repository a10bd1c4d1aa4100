//! Filter compiler: request parameters -> store predicate + residual filter.

pub mod exam;

use std::collections::BTreeSet;

use catalog::normalizer::fold_case;
use catalog::{Course, PaceConstraint, StorePredicate};
use tracing::warn;

use crate::params::SearchParams;
use exam::{ExamFilter, ExamSelection};

/// In-memory predicate for conditions the store cannot express.
pub trait ResidualFilter: Send + Sync {
    fn keep(&self, course: &Course) -> bool;

    /// True when `keep` accepts everything.
    fn is_open(&self) -> bool {
        false
    }
}

/// Keeps the input order.
pub fn apply_residual(courses: Vec<Course>, filter: &dyn ResidualFilter) -> Vec<Course> {
    if filter.is_open() {
        return courses;
    }
    courses.into_iter().filter(|c| filter.keep(c)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StudyPace {
    /// "Helfart"
    Full,
    /// "Halvfart"
    Half,
}

impl StudyPace {
    pub fn parse(s: &str) -> Option<Self> {
        match fold_case(s.trim()).as_str() {
            "helfart" => Some(StudyPace::Full),
            "halvfart" => Some(StudyPace::Half),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CourseLevel {
    /// "Grundnivå"
    Basic,
    /// "Avancerad nivå"
    Advanced,
}

impl CourseLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match fold_case(s.trim()).as_str() {
            "grundnivå" => Some(CourseLevel::Basic),
            "avancerad nivå" => Some(CourseLevel::Advanced),
            _ => None,
        }
    }
}

/// Typed, validated filter selections for one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub search: Option<String>,
    pub campus: Vec<String>,
    pub main_field_of_study: Vec<String>,
    pub semester: Vec<u8>,
    pub period: Vec<u8>,
    pub block: Vec<u8>,
    pub study_pace: BTreeSet<StudyPace>,
    pub course_level: BTreeSet<CourseLevel>,
    pub examinations: ExamSelection,
}

impl FilterSelection {
    pub fn from_params(p: &SearchParams) -> Self {
        Self {
            search: p
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            campus: split_list(p.campus.as_deref()),
            main_field_of_study: split_list(p.main_field_of_study.as_deref()),
            semester: numeric_list("semester", p.semester.as_deref()),
            period: numeric_list("period", p.period.as_deref()),
            block: numeric_list("block", p.block.as_deref()),
            study_pace: parsed_set("studyPace", p.study_pace.as_deref(), StudyPace::parse),
            course_level: parsed_set("courseLevel", p.course_level.as_deref(), CourseLevel::parse),
            examinations: p
                .examinations
                .as_deref()
                .map(ExamSelection::parse)
                .unwrap_or_default(),
        }
    }
}

pub struct CompiledFilters {
    pub store: StorePredicate,
    pub residual: ExamFilter,
}

pub fn compile_filters(sel: &FilterSelection) -> CompiledFilters {
    // exactly one level selected narrows; both or none is open
    let advanced = match (
        sel.course_level.contains(&CourseLevel::Basic),
        sel.course_level.contains(&CourseLevel::Advanced),
    ) {
        (true, false) => Some(false),
        (false, true) => Some(true),
        _ => None,
    };
    let pace = match (
        sel.study_pace.contains(&StudyPace::Full),
        sel.study_pace.contains(&StudyPace::Half),
    ) {
        (true, false) => Some(PaceConstraint::FullPace),
        (false, true) => Some(PaceConstraint::HalfPace),
        _ => None,
    };

    let store = StorePredicate {
        search: sel.search.as_deref().map(fold_case),
        campus: sel.campus.clone(),
        main_field_of_study: sel.main_field_of_study.clone(),
        semester: sel.semester.clone(),
        period: sel.period.clone(),
        block: sel.block.clone(),
        advanced,
        pace,
    };

    CompiledFilters {
        store,
        residual: sel.examinations.compile(),
    }
}

/// Splits on `,` or `|`, trims, drops empties.
pub fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split([',', '|'])
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn numeric_list(category: &'static str, raw: Option<&str>) -> Vec<u8> {
    split_list(raw)
        .into_iter()
        .filter_map(|v| match v.parse::<u8>() {
            Ok(n) => Some(n),
            Err(_) => {
                warn!(category, value = %v, "non-numeric filter value dropped");
                None
            }
        })
        .collect()
}

fn parsed_set<T: Ord>(
    category: &'static str,
    raw: Option<&str>,
    parse: fn(&str) -> Option<T>,
) -> BTreeSet<T> {
    split_list(raw)
        .into_iter()
        .filter_map(|v| {
            let parsed = parse(&v);
            if parsed.is_none() {
                warn!(category, value = %v, "unknown filter value ignored");
            }
            parsed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::course_with_periods;

    fn params(f: impl FnOnce(&mut SearchParams)) -> SearchParams {
        let mut p = SearchParams::default();
        f(&mut p);
        p
    }

    fn store_for(p: &SearchParams) -> StorePredicate {
        compile_filters(&FilterSelection::from_params(p)).store
    }

    #[test]
    fn lists_split_on_comma_and_pipe() {
        assert_eq!(
            split_list(Some("Linköping| Norrköping,,Distans ")),
            vec!["Linköping", "Norrköping", "Distans"]
        );
        assert!(split_list(Some(" , |")).is_empty());
        assert!(split_list(None).is_empty());
    }

    #[test]
    fn numeric_categories_drop_garbage() {
        let sel = FilterSelection::from_params(&params(|p| {
            p.semester = Some("7,8,x".into());
            p.block = Some("1|4|999".into());
        }));
        assert_eq!(sel.semester, vec![7, 8]);
        assert_eq!(sel.block, vec![1, 4]);
    }

    #[test]
    fn empty_selection_compiles_to_open_predicate() {
        let compiled = compile_filters(&FilterSelection::from_params(&SearchParams::default()));
        assert!(compiled.store.is_empty());
        assert!(compiled.residual.is_open());
    }

    #[test]
    fn search_is_folded_and_blank_ignored() {
        assert_eq!(
            store_for(&params(|p| p.search = Some("  TDDD ".into()))).search.as_deref(),
            Some("tddd")
        );
        assert_eq!(store_for(&params(|p| p.search = Some("   ".into()))).search, None);
    }

    #[test]
    fn single_level_maps_to_advanced_flag() {
        assert_eq!(
            store_for(&params(|p| p.course_level = Some("Grundnivå".into()))).advanced,
            Some(false)
        );
        assert_eq!(
            store_for(&params(|p| p.course_level = Some("Avancerad nivå".into()))).advanced,
            Some(true)
        );
    }

    #[test]
    fn both_levels_equal_no_level_filter() {
        let both = store_for(&params(|p| {
            p.course_level = Some("Grundnivå,Avancerad nivå".into());
        }));
        assert_eq!(both, StorePredicate::default());
    }

    #[test]
    fn study_pace_xor() {
        let full = store_for(&params(|p| p.study_pace = Some("Helfart".into())));
        let half = store_for(&params(|p| p.study_pace = Some("Halvfart".into())));
        let both = store_for(&params(|p| p.study_pace = Some("Helfart|Halvfart".into())));

        let one_period = course_with_periods("1", &[1]);
        let two_periods = course_with_periods("2", &[1, 2]);

        assert!(full.matches(&one_period));
        assert!(!half.matches(&one_period));
        assert!(both.matches(&one_period));

        assert!(!full.matches(&two_periods));
        assert!(half.matches(&two_periods));
        assert!(both.matches(&two_periods));
    }

    #[test]
    fn unknown_pace_and_level_are_ignored() {
        let sel = FilterSelection::from_params(&params(|p| {
            p.study_pace = Some("Kvartsfart".into());
            p.course_level = Some("Forskarnivå".into());
        }));
        assert!(sel.study_pace.is_empty());
        assert!(sel.course_level.is_empty());
    }
}
