use serde::Deserialize;

/// Batch of class-section ids the client wants to enroll in. Each id is attempted
/// independently and in order; there is no all-or-nothing semantics.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub class_ids: Vec<i64>,
}
