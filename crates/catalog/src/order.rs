use std::cmp::Ordering;

use crate::Course;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Code,
    Name,
    Credits,
    Semester,
    Id,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTerm {
    pub field: OrderField,
    pub direction: Direction,
}

impl OrderTerm {
    pub const fn new(field: OrderField, direction: Direction) -> Self {
        Self { field, direction }
    }

    pub const fn asc(field: OrderField) -> Self {
        Self::new(field, Direction::Asc)
    }

    fn compare(&self, a: &Course, b: &Course) -> Ordering {
        let ord = match self.field {
            OrderField::Code => a.code.cmp(&b.code),
            OrderField::Name => a.name.cmp(&b.name),
            OrderField::Credits => a.credits.total_cmp(&b.credits),
            OrderField::Semester => a.semester.cmp(&b.semester),
            OrderField::Id => a.id.cmp(&b.id),
        };
        match self.direction {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    }
}

/// Lexicographic comparison over `terms`; first non-equal term wins.
pub fn compare(a: &Course, b: &Course, terms: &[OrderTerm]) -> Ordering {
    terms
        .iter()
        .map(|t| t.compare(a, b))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

pub fn sort_courses(courses: &mut [Course], terms: &[OrderTerm]) {
    courses.sort_by(|a, b| compare(a, b, terms));
}
