use crate::{
    routes::get_stop_monitor::{upstream_error, GetStopMonitorPayload},
    services::stop_monitoring::render::render_text,
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
#[cfg(test)]
use axum_macros::debug_handler;
use tracing::info;

#[cfg_attr(test, debug_handler)]
pub async fn get_stop_monitor_text(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetStopMonitorPayload>,
) -> Result<Response, AppError> {
    let result = state
        .stop_monitoring_service
        .get_stop_monitor(payload.into())
        .await
        .map_err(upstream_error)?;

    info!(
        stop_name = ?result.stop_name,
        visits = result.visits.len(),
        "Served stop monitor"
    );

    Ok((StatusCode::OK, render_text(&result)).into_response())
}
