#![allow(non_snake_case)]
use serde::Deserialize;

// Missing keys decode to None; the translator reports them by path.

#[derive(Deserialize)]
pub struct Distances {
    pub StopsFromCall: Option<i64>,
    pub DistanceFromCall: Option<f64>,
}

#[derive(Deserialize)]
pub struct MonitoredCallExtensions {
    pub Distances: Option<Distances>,
}

#[derive(Deserialize)]
pub struct MonitoredCall {
    pub StopPointName: Option<String>,
    pub Extensions: Option<MonitoredCallExtensions>,
}

#[derive(Deserialize)]
pub struct MonitoredVehicleJourney {
    pub PublishedLineName: Option<String>,
    pub MonitoredCall: Option<MonitoredCall>,
}

#[derive(Deserialize)]
pub struct MonitoredStopVisit {
    pub MonitoredVehicleJourney: Option<MonitoredVehicleJourney>,
}

#[derive(Deserialize)]
pub struct StopMonitoringDelivery {
    pub MonitoredStopVisit: Option<Vec<MonitoredStopVisit>>,
}

#[derive(Deserialize)]
pub struct ServiceDelivery {
    pub StopMonitoringDelivery: Option<Vec<StopMonitoringDelivery>>,
}

#[derive(Deserialize)]
pub struct Siri {
    pub ServiceDelivery: Option<ServiceDelivery>,
}

#[derive(Deserialize)]
pub struct SiriStopMonitoringResponse {
    pub Siri: Option<Siri>,
}
