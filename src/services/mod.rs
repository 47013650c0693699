pub mod stop_monitoring;
