use crate::{
    services::stop_monitoring::{
        render::render_structured, stop_monitoring_service::StopMonitorInput,
        types::stop_monitoring_error::StopMonitoringError,
    },
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::Deserialize;
use tracing::{error, info};
use validator::Validate;

pub const DEFAULT_MAX_VISITS: u32 = 2;

fn default_max_visits() -> u32 {
    DEFAULT_MAX_VISITS
}

#[derive(Validate, Deserialize)]
pub struct GetStopMonitorPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub stop: String,

    pub route: Option<String>,

    #[serde(default = "default_max_visits")]
    pub max_visits: u32,
}

impl From<GetStopMonitorPayload> for StopMonitorInput {
    fn from(payload: GetStopMonitorPayload) -> Self {
        StopMonitorInput {
            stop_id: payload.stop,
            // `route=` means no filter
            line: payload.route.filter(|r| !r.is_empty()),
            max_visits: payload.max_visits,
        }
    }
}

pub fn upstream_error(e: StopMonitoringError) -> AppError {
    error!("Failed to fetch stop monitoring: {}", e);

    match e {
        StopMonitoringError::Transport(_) => AppError::bad_gateway("Failed to reach BusTime"),
        StopMonitoringError::UpstreamStatus(_) => {
            AppError::bad_gateway("BusTime returned an error")
        }
        StopMonitoringError::Decode(_) => {
            AppError::bad_gateway("BusTime returned an unexpected response")
        }
    }
}

#[cfg_attr(test, debug_handler)]
pub async fn get_stop_monitor(
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

    Ok((StatusCode::OK, Json(render_structured(&result))).into_response())
}
