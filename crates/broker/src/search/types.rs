use catalog::Course;
use serde::Serialize;

/// `GET /courses` success body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursesResponse {
    pub success: bool,
    pub data: Vec<Course>,
    pub next_cursor: Option<String>,
    pub has_next_page: bool,
    pub total_count: usize,
    /// Items on this page.
    pub count: usize,
}

/// Failure body. Same field names as the success body so clients can render
/// an empty state without special cases.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureBody {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_id: Option<String>,
    pub data: Vec<Course>,
    pub has_next_page: bool,
    pub count: usize,
}

impl FailureBody {
    pub fn new(error: String, error_id: Option<String>) -> Self {
        Self {
            success: false,
            error,
            error_id,
            data: Vec::new(),
            has_next_page: false,
            count: 0,
        }
    }
}
