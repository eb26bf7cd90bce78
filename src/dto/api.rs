//! Query and response types for the JSON API.

use serde::{Deserialize, Serialize};

use crate::domain::application::LoanApplication;

/// Query parameters accepted by `GET /api/v1/applications`.
#[derive(Debug, Default, Deserialize)]
pub struct ApplicationsQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub page: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ApplicationsResponse {
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub applications: Vec<LoanApplication>,
}
