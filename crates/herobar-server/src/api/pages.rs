use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct PageItem {
    pub slug: String,
    pub title: String,
    /// Number of copy fields this page overrides.
    pub override_count: usize,
    pub hero_off: bool,
    pub intent_override: Option<String>,
}

/// Registered pages with a summary of their overrides.
pub(super) async fn list_pages(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<PageItem>>> {
    let data = state
        .registry
        .entries()
        .iter()
        .map(|page| {
            let overrides = page.meta.overrides();
            PageItem {
                slug: page.slug.clone(),
                title: page.title.clone(),
                override_count: overrides.fields.len(),
                hero_off: page.meta.hero_off(),
                intent_override: page.meta.intent_override(),
            }
        })
        .collect();

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}
