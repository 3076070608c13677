use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error as ThisError;

use gym_data::Member;

/// Client errors. The display text is meant to be
/// shown to the user.
#[derive(Debug, ThisError)]
pub enum ClientError {
    #[error("connection error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response from server (HTTP {status}): {reason}")]
    InvalidResponse { status: StatusCode, reason: String },
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
    #[error("{0}")]
    Rejected(String),
    #[error("member {0} not found")]
    NotFound(u32),
    #[error("server response did not include the member")]
    MissingMember,
}

/// Response envelope of the members api. The `success`
/// flag decides the outcome, not the http status.
#[derive(Debug, Clone, Deserialize)]
pub struct Reply {
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
    pub member: Option<Member>,
    pub members: Option<Vec<Member>>,
}

impl Reply {
    /// Turn a rejection into an error.
    pub fn into_error(self, status: StatusCode, key: Option<u32>) -> ClientError {
        match key {
            Some(id) if status == StatusCode::NOT_FOUND => ClientError::NotFound(id),
            _ => ClientError::Rejected(
                self.error
                    .unwrap_or_else(|| format!("request failed (HTTP {})", status)),
            ),
        }
    }
}
