use serde::Serialize;

/// A row of the example-submission table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    pub passenger_id: u32,
    pub survived: bool,
}
