use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;

use herobar_core::{
    content::resolve,
    intent::{EMERGENCY_TERMS, PLANNED_TERMS, SAME_DAY_TERMS},
    ContentRecord, Intent, PageOverride,
};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

/// Base copy record for one intent, before overrides and token
/// substitution.
pub(super) async fn get_content(
    State(_state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(intent): Path<String>,
) -> Result<Json<ApiResponse<ContentRecord>>, ApiError> {
    let Some(intent) = Intent::parse(&intent) else {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            format!("unknown intent '{intent}'"),
        ));
    };

    match resolve(intent, &PageOverride::default()) {
        Some(record) => Ok(Json(ApiResponse {
            data: record,
            meta: ResponseMeta::new(req_id.0),
        })),
        // Only `off` resolves to nothing; no record exists for it by design.
        None => Err(ApiError::new(
            req_id.0,
            "not_found",
            "intent 'off' has no content record",
        )),
    }
}

#[derive(Debug, Serialize)]
pub(super) struct IntentInfo {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

/// The classifier's categories and their keyword sets, for introspection.
pub(super) async fn list_intents(
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<IntentInfo>>> {
    let data = vec![
        IntentInfo {
            intent: Intent::Emergency,
            keywords: EMERGENCY_TERMS,
        },
        IntentInfo {
            intent: Intent::SameDay,
            keywords: SAME_DAY_TERMS,
        },
        IntentInfo {
            intent: Intent::Planned,
            keywords: PLANNED_TERMS,
        },
        IntentInfo {
            intent: Intent::Off,
            keywords: &[],
        },
    ];

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}
