//! Response wrapper and error body used by every endpoint.

use serde::{Deserialize, Serialize};

/// Pagination block returned by list endpoints that page their results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

/// `{ success, data, message }` wrapper, or the bare payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ApiEnvelope<T> {
    Wrapped {
        #[serde(default)]
        success: Option<bool>,
        data: T,
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        pagination: Option<Pagination>,
    },
    Bare(T),
}

impl<T> ApiEnvelope<T> {
    pub fn into_data(self) -> T {
        match self {
            ApiEnvelope::Wrapped { data, .. } => data,
            ApiEnvelope::Bare(data) => data,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ApiEnvelope::Wrapped { message, .. } => message.as_deref(),
            ApiEnvelope::Bare(_) => None,
        }
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        match self {
            ApiEnvelope::Wrapped { pagination, .. } => pagination.as_ref(),
            ApiEnvelope::Bare(_) => None,
        }
    }
}

/// Error response body. The backend uses `message`; some middleware uses `error`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn text(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .filter(|text| !text.trim().is_empty())
    }
}
