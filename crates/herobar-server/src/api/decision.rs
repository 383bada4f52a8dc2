use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use herobar_core::{Decision, PageMeta, PageRequest, RequestFlags};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct DecisionQuery {
    pub path: Option<String>,
    /// Explicit title; the registry title is used when absent and the path
    /// matches a registered page.
    pub title: Option<String>,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub feed: bool,
    #[serde(default)]
    pub robots: bool,
    #[serde(default)]
    pub attachment: bool,
}

/// Run the decision pipeline for one page view.
pub(super) async fn get_decision(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<DecisionQuery>,
) -> Result<Json<ApiResponse<Decision>>, ApiError> {
    let Some(path) = query.path.filter(|p| !p.trim().is_empty()) else {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            "query parameter 'path' is required",
        ));
    };

    let page = state.registry.find_by_path(&path);
    let title = query
        .title
        .or_else(|| page.map(|p| p.title.clone()))
        .unwrap_or_default();
    let meta = page.map(|p| p.meta.clone()).unwrap_or_else(PageMeta::default);

    let request = PageRequest {
        path,
        title,
        meta,
        flags: RequestFlags {
            is_admin: query.admin,
            is_feed: query.feed,
            is_robots: query.robots,
            is_attachment: query.attachment,
        },
    };

    let decision = state.engine.decide(&request);
    tracing::debug!(
        path = %request.path,
        intent = %decision.intent,
        suppressed = decision.suppressed,
        "decision served"
    );

    Ok(Json(ApiResponse {
        data: decision,
        meta: ResponseMeta::new(req_id.0),
    }))
}
