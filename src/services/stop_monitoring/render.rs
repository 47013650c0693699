use serde::{Deserialize, Serialize};

use super::stop_monitor_result::{StopMonitorResult, Visit};

pub const NO_BUSES_MESSAGE: &str = "no buses are on the way. sad :(";

/// One entry of the JSON rendering. The stop name is not part of it.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct StructuredVisit {
    pub route: String,
    pub stops_away: u32,
    pub distance: f64,
}

pub fn render_structured(result: &StopMonitorResult) -> Vec<StructuredVisit> {
    result
        .visits
        .iter()
        .map(|v| StructuredVisit {
            route: v.route.clone(),
            stops_away: v.stops_away,
            distance: v.distance_miles,
        })
        .collect()
}

// Whole numbers keep one decimal, so 1 mile prints as "1.0".
fn format_miles(miles: f64) -> String {
    if miles.fract() == 0.0 {
        format!("{:.1}", miles)
    } else {
        miles.to_string()
    }
}

fn render_visit(visit: &Visit) -> String {
    format!(
        "{} bus {} stops away ({} miles)",
        visit.route,
        visit.stops_away,
        format_miles(visit.distance_miles)
    )
}

pub fn render_text(result: &StopMonitorResult) -> String {
    let mut lines = Vec::<String>::new();

    if let Some(name) = &result.stop_name {
        lines.push(format!("{}:", name));
    }

    for (i, visit) in result.visits.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, render_visit(visit)));
    }

    if result.visits.is_empty() {
        lines.push(NO_BUSES_MESSAGE.to_string());
    }

    lines.join("\n")
}
