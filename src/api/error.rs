// ABOUTME: Error taxonomy for backend API calls made on behalf of the wizard

#![allow(missing_docs)]

use thiserror::Error;

/// One of the three dependent lookups (workspaces, boards, columns) failed.
///
/// Carries the level name so callers can clear that level's options and
/// report which step of the wizard broke. Recoverable: the wizard stays
/// open and the user may retry by re-selecting upstream fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to fetch monday.com {level}: {reason}")]
pub struct FetchError {
    pub level: &'static str,
    pub reason: String,
}

impl FetchError {
    pub fn new(level: &'static str, reason: impl Into<String>) -> Self {
        Self {
            level,
            reason: reason.into(),
        }
    }
}

/// The final connect call was rejected or never reached the backend.
///
/// The wizard state is left intact so the user can retry without
/// re-entering anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("monday.com connect failed: {0}")]
pub struct ConnectError(pub String);

/// Transport- or status-level failure from the dashboard backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {status}: {detail}")]
    Status { status: u16, detail: String },
}

impl ApiError {
    /// Flatten into the per-level fetch error the wizard recovers from.
    pub fn into_fetch_error(self, level: &'static str) -> FetchError {
        FetchError::new(level, self.to_string())
    }

    /// Flatten into the submission error surfaced after a failed connect.
    pub fn into_connect_error(self) -> ConnectError {
        ConnectError(self.to_string())
    }
}
