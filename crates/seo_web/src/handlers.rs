use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use seo_core::{ContentSubType, Error, Feature, Generation, SelectorSnapshot};
use seo_inference::prompts::PromptPair;

use crate::AppState;

/// Handler error carrying the status and the message shown to the user.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn from_error(error: Error, feature: Feature) -> Self {
        if error.is_generation_failure() {
            return Self::new(StatusCode::BAD_GATEWAY, feature.failure_message());
        }
        let status = match error {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Busy => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectFeature {
    pub feature: Feature,
    pub sub_type: Option<ContentSubType>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FieldsBody {
    #[serde(default)]
    pub fields: HashMap<String, String>,
}

pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<SelectorSnapshot> {
    Json(state.selector.lock().await.snapshot())
}

pub async fn select_feature(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SelectFeature>,
) -> Json<SelectorSnapshot> {
    let mut selector = state.selector.lock().await;
    selector.select(body.feature);
    if let Some(sub_type) = body.sub_type {
        selector.set_sub_type(sub_type);
    }
    tracing::debug!(feature = %body.feature, "Feature selected");
    Json(selector.snapshot())
}

pub async fn preview_prompt(
    State(state): State<Arc<AppState>>,
    Json(body): Json<FieldsBody>,
) -> Result<Json<PromptPair>, ApiError> {
    let mut selector = state.selector.lock().await;
    let feature = selector.feature();
    selector.set_fields(body.fields);
    let request = selector
        .request()
        .map_err(|e| ApiError::from_error(e, feature))?;
    Ok(Json(state.engine.preview(&request)))
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<FieldsBody>,
) -> Result<Json<Generation>, ApiError> {
    let (request, ticket) = {
        let mut selector = state.selector.lock().await;
        let feature = selector.feature();
        // A rejected submission must not touch the fields of the one in flight.
        let ticket = selector
            .begin()
            .map_err(|e| ApiError::from_error(e, feature))?;
        selector.set_fields(body.fields);
        let request = selector
            .request()
            .map_err(|e| ApiError::from_error(e, feature))?;
        (request, ticket)
    };

    let feature = ticket.feature();
    let outcome = state.engine.generate(&request).await;

    let mut selector = state.selector.lock().await;
    match outcome {
        Ok(generation) => {
            if !selector.complete(ticket, generation.result.clone()) {
                return Err(ApiError::new(
                    StatusCode::CONFLICT,
                    "The active feature changed before generation finished.",
                ));
            }
            Ok(Json(generation))
        }
        Err(e) => {
            let error = ApiError::from_error(e, feature);
            selector.fail(ticket, error.message.clone());
            Err(error)
        }
    }
}
