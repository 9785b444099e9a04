use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub detail: String,
}
