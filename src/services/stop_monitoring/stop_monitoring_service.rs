use std::time::Duration;

use tracing::debug;

use super::{
    stop_monitor_result::{parse_stop_monitoring_response, StopMonitorResult},
    stop_monitoring_request::StopMonitoringQuery,
    types::stop_monitoring_error::StopMonitoringError,
};

pub const STOP_MONITORING_PATH: &str = "/api/siri/stop-monitoring.json";

#[derive(Clone)]
pub struct StopMonitoringServiceConfig {
    pub api_key: String,
    pub host: String,
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct StopMonitoringService {
    config: StopMonitoringServiceConfig,
    client: reqwest::Client,
}

pub struct StopMonitorInput {
    pub stop_id: String,
    pub line: Option<String>,
    pub max_visits: u32,
}

impl StopMonitoringService {
    pub fn new(config: StopMonitoringServiceConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { config, client })
    }

    pub async fn get_stop_monitor(
        &self,
        input: StopMonitorInput,
    ) -> Result<StopMonitorResult, StopMonitoringError> {
        let query = StopMonitoringQuery {
            api_key: self.config.api_key.clone(),
            stop_id: input.stop_id,
            line: input.line,
            max_visits: input.max_visits,
        };

        debug!(
            stop_id = %query.stop_id,
            line = ?query.line,
            max_visits = query.max_visits,
            "Requesting stop monitoring"
        );

        let resp = self
            .client
            .get(format!("{}{}", self.config.host, STOP_MONITORING_PATH))
            .query(&query.to_query_params())
            .send()
            .await
            .map_err(StopMonitoringError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(StopMonitoringError::UpstreamStatus(status));
        }

        let body = resp.text().await.map_err(StopMonitoringError::Transport)?;

        let result = parse_stop_monitoring_response(&body)?;
        debug!(visits = result.visits.len(), "Decoded stop monitoring response");

        Ok(result)
    }
}
