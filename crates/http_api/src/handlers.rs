use axum::{
    Json,
    extract::{Extension, State},
    response::IntoResponse,
};

use app_api::{
    EmptyRequest, OkResponse, RecordsAddRequest, RecordsDeleteRequest, ReportRequest,
    SettingsPutRequest,
};

use crate::{errors::HttpError, extract::ApiJson, middleware::OwnerId, state::HttpState};

pub async fn health() -> impl IntoResponse {
    Json(OkResponse { ok: true })
}

pub async fn records_add(
    State(state): State<HttpState>,
    Extension(OwnerId(owner)): Extension<OwnerId>,
    ApiJson(req): ApiJson<RecordsAddRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::records_add(&state.context, &owner, req)?;
    Ok(Json(response))
}

pub async fn records_list(
    State(state): State<HttpState>,
    Extension(OwnerId(owner)): Extension<OwnerId>,
    ApiJson(_): ApiJson<EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::records_list(&state.context, &owner)?;
    Ok(Json(response))
}

pub async fn records_delete(
    State(state): State<HttpState>,
    Extension(OwnerId(owner)): Extension<OwnerId>,
    ApiJson(req): ApiJson<RecordsDeleteRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::records_delete(&state.context, &owner, req)?;
    Ok(Json(response))
}

pub async fn report(
    State(state): State<HttpState>,
    Extension(OwnerId(owner)): Extension<OwnerId>,
    ApiJson(req): ApiJson<ReportRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::report(&state.context, &owner, req)?;
    Ok(Json(response))
}

pub async fn settings_get(
    State(state): State<HttpState>,
    ApiJson(_): ApiJson<EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::settings_get(&state.context)?;
    Ok(Json(response))
}

pub async fn settings_put(
    State(state): State<HttpState>,
    ApiJson(req): ApiJson<SettingsPutRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::settings_put(&state.context, req)?;
    Ok(Json(response))
}
