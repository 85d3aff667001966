//! Response envelope wrapping every backend reply

use serde::{Deserialize, Serialize};

/// `code` value the backend uses for a successful call
pub const SUCCESS_CODE: i32 = 1;

/// Envelope `{ code, msg, data }` around every response body
///
/// Business errors are reported with HTTP 200 and a non-success `code`,
/// with the human-readable reason in `msg`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,

    #[serde(default)]
    pub msg: Option<String>,

    #[serde(default = "none")]
    pub data: Option<T>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}
