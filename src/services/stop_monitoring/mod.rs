pub mod render;
pub mod stop_monitor_result;
pub mod stop_monitoring_request;
pub mod stop_monitoring_service;
pub mod types;
