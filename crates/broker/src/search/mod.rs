use coursefinder::SearchPage;

pub mod types;

use types::CoursesResponse;

impl From<SearchPage> for CoursesResponse {
    fn from(page: SearchPage) -> Self {
        Self {
            success: true,
            count: page.courses.len(),
            data: page.courses,
            next_cursor: page.next_cursor,
            has_next_page: page.has_next_page,
            total_count: page.total_count,
        }
    }
}
