use crate::services::stop_monitoring::stop_monitoring_service::StopMonitoringService;

#[derive(Clone)]
pub struct AppState {
    pub stop_monitoring_service: StopMonitoringService,
}
