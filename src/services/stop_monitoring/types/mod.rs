pub mod siri_stop_monitoring_response;
pub mod stop_monitoring_error;
