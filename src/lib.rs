//! Course search pipeline: filter compilation, total ordering and cursor
//! pagination over a [`catalog::CourseStore`].

pub mod filter;
pub mod order;
pub mod paginator;
pub mod params;
pub mod search;

pub use params::SearchParams;
pub use search::{CourseSearch, SearchPage};
