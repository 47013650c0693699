use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_stop_monitor;
mod get_stop_monitor_text;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/", get(get_stop_monitor::get_stop_monitor))
        .route("/text", get(get_stop_monitor_text::get_stop_monitor_text))
}
