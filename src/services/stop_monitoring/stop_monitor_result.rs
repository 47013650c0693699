use super::types::{
    siri_stop_monitoring_response::{MonitoredStopVisit, SiriStopMonitoringResponse},
    stop_monitoring_error::DecodeError,
};

pub const FEET_PER_METER: f64 = 3.28084;
pub const FEET_PER_MILE: f64 = 5280.0;

const VISITS_PATH: &str = "Siri.ServiceDelivery.StopMonitoringDelivery[0].MonitoredStopVisit";

/// A predicted arrival of one vehicle at the monitored stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    pub route: String,
    pub monitored_stop_name: String,
    pub stops_away: u32,
    pub distance_miles: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StopMonitorResult {
    pub stop_name: Option<String>,
    pub visits: Vec<Visit>,
}

impl StopMonitorResult {
    pub fn new(visits: Vec<Visit>) -> Self {
        Self {
            stop_name: visits.first().map(|v| v.monitored_stop_name.clone()),
            visits,
        }
    }
}

pub fn meters_to_miles(meters: f64) -> f64 {
    let miles = meters * FEET_PER_METER / FEET_PER_MILE;
    (miles * 100.0).round() / 100.0
}

fn required<T>(value: Option<T>, path: &str) -> Result<T, DecodeError> {
    value.ok_or_else(|| DecodeError::MissingField(path.to_string()))
}

impl Visit {
    fn from_raw(index: usize, raw: MonitoredStopVisit) -> Result<Self, DecodeError> {
        let path = |field: &str| format!("{}[{}].{}", VISITS_PATH, index, field);

        let journey = required(raw.MonitoredVehicleJourney, &path("MonitoredVehicleJourney"))?;
        let route = required(
            journey.PublishedLineName,
            &path("MonitoredVehicleJourney.PublishedLineName"),
        )?;
        let call = required(
            journey.MonitoredCall,
            &path("MonitoredVehicleJourney.MonitoredCall"),
        )?;
        let monitored_stop_name = required(
            call.StopPointName,
            &path("MonitoredVehicleJourney.MonitoredCall.StopPointName"),
        )?;
        let distances = required(
            call.Extensions,
            &path("MonitoredVehicleJourney.MonitoredCall.Extensions"),
        )?
        .Distances;
        let distances = required(
            distances,
            &path("MonitoredVehicleJourney.MonitoredCall.Extensions.Distances"),
        )?;

        let stops_path = path("MonitoredVehicleJourney.MonitoredCall.Extensions.Distances.StopsFromCall");
        let stops_from_call = required(distances.StopsFromCall, &stops_path)?;
        let stops_away = u32::try_from(stops_from_call).map_err(|_| DecodeError::InvalidValue {
            path: stops_path,
            value: stops_from_call.to_string(),
        })?;

        let distance_path =
            path("MonitoredVehicleJourney.MonitoredCall.Extensions.Distances.DistanceFromCall");
        let distance_from_call = required(distances.DistanceFromCall, &distance_path)?;
        if !distance_from_call.is_finite() || distance_from_call < 0.0 {
            return Err(DecodeError::InvalidValue {
                path: distance_path,
                value: distance_from_call.to_string(),
            });
        }

        Ok(Visit {
            route,
            monitored_stop_name,
            stops_away,
            distance_miles: meters_to_miles(distance_from_call),
        })
    }
}

/// Decodes a SIRI stop-monitoring document. A missing level of the envelope
/// is an error, never an empty result.
pub fn parse_stop_monitoring_response(body: &str) -> Result<StopMonitorResult, DecodeError> {
    let response = serde_json::from_str::<SiriStopMonitoringResponse>(body)
        .map_err(DecodeError::Malformed)?;

    let delivery = required(
        required(
            required(response.Siri, "Siri")?.ServiceDelivery,
            "Siri.ServiceDelivery",
        )?
        .StopMonitoringDelivery,
        "Siri.ServiceDelivery.StopMonitoringDelivery",
    )?
    .into_iter()
    .next();

    let raw_visits = required(
        required(delivery, "Siri.ServiceDelivery.StopMonitoringDelivery[0]")?.MonitoredStopVisit,
        VISITS_PATH,
    )?;

    let visits = raw_visits
        .into_iter()
        .enumerate()
        .map(|(i, raw)| Visit::from_raw(i, raw))
        .collect::<Result<Vec<Visit>, DecodeError>>()?;

    Ok(StopMonitorResult::new(visits))
}
