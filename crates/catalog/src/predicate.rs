use crate::normalizer::contains_folded;
use crate::Course;

/// Structural condition on a course's `period` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaceConstraint {
    /// Period set is exactly `[1]` or exactly `[2]`.
    FullPace,
    /// Period set holds both 1 and 2.
    HalfPace,
}

impl PaceConstraint {
    pub fn matches(self, period: &[u8]) -> bool {
        match self {
            PaceConstraint::FullPace => period == [1u8] || period == [2u8],
            PaceConstraint::HalfPace => period.contains(&1) && period.contains(&2),
        }
    }
}

/// Conditions a store can evaluate natively. Empty lists and `None` impose
/// no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorePredicate {
    /// Already case-folded; matched against name or code.
    pub search: Option<String>,
    pub campus: Vec<String>,
    pub main_field_of_study: Vec<String>,
    pub semester: Vec<u8>,
    pub period: Vec<u8>,
    pub block: Vec<u8>,
    pub advanced: Option<bool>,
    pub pace: Option<PaceConstraint>,
}

impl StorePredicate {
    pub fn is_empty(&self) -> bool {
        *self == StorePredicate::default()
    }

    pub fn matches(&self, course: &Course) -> bool {
        if let Some(needle) = &self.search {
            if !contains_folded(&course.name, needle) && !contains_folded(&course.code, needle) {
                return false;
            }
        }
        if !self.campus.is_empty() && !self.campus.iter().any(|c| *c == course.campus) {
            return false;
        }
        if !contains_any(&course.main_field_of_study, &self.main_field_of_study)
            || !contains_any(&course.semester, &self.semester)
            || !contains_any(&course.period, &self.period)
            || !contains_any(&course.block, &self.block)
        {
            return false;
        }
        if let Some(advanced) = self.advanced {
            if course.advanced != advanced {
                return false;
            }
        }
        self.pace.map_or(true, |p| p.matches(&course.period))
    }
}

// array-contains-any; an empty wanted set is open
fn contains_any<T: PartialEq>(have: &[T], wanted: &[T]) -> bool {
    wanted.is_empty() || wanted.iter().any(|w| have.contains(w))
}
