use super::launch::Launch;
use serde::{Deserialize, Serialize};

/// Paginated envelope returned by the v5 `/launches/query` endpoint.
///
/// Page-valued metadata is floating point: the service echoes back whatever
/// page number the request carried, fractional or not.
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LaunchQueryResponse {
    pub docs: Vec<Launch>,
    pub total_docs: u32,
    pub limit: u32,
    pub total_pages: u32,
    pub page: f64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub next_page: Option<f64>,
    pub prev_page: Option<f64>,
}

impl LaunchQueryResponse {

    #[cfg(test)]
    pub fn single_page(docs: Vec<Launch>) -> Self {
        Self {
            total_docs: docs.len() as u32,
            docs,
            limit: 10,
            total_pages: 1,
            page: 1.0,
            has_next_page: false,
            has_prev_page: false,
            next_page: None,
            prev_page: None,
        }
    }
}
