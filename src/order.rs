use catalog::{Direction, OrderField, OrderTerm};

/// Client-facing sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Code,
    Name,
    Credits,
    Semester,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortBy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "code" => Some(SortBy::Code),
            "name" => Some(SortBy::Name),
            "credits" => Some(SortBy::Credits),
            "semester" => Some(SortBy::Semester),
            _ => None,
        }
    }

    fn field(self) -> OrderField {
        match self {
            SortBy::Code => OrderField::Code,
            SortBy::Name => OrderField::Name,
            SortBy::Credits => OrderField::Credits,
            SortBy::Semester => OrderField::Semester,
        }
    }
}

impl SortOrder {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    fn direction(self) -> Direction {
        match self {
            SortOrder::Asc => Direction::Asc,
            SortOrder::Desc => Direction::Desc,
        }
    }
}

/// Total ordering for cursor pagination: the requested key, then `code`
/// (unless it is already the primary key), then `id`.
pub fn build_ordering(sort_by: SortBy, sort_order: SortOrder) -> Vec<OrderTerm> {
    let mut terms = vec![OrderTerm::new(sort_by.field(), sort_order.direction())];
    if sort_by != SortBy::Code {
        terms.push(OrderTerm::asc(OrderField::Code));
    }
    terms.push(OrderTerm::asc(OrderField::Id));
    terms
}
