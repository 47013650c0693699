pub const OPERATOR_REF: &str = "MTA";
pub const LINE_REF_PREFIX: &str = "MTA NYCT_";

/// Parameters for one call to the SIRI stop-monitoring endpoint.
pub struct StopMonitoringQuery {
    pub api_key: String,
    pub stop_id: String,
    pub line: Option<String>,
    pub max_visits: u32,
}

impl StopMonitoringQuery {
    /// Query parameters in the order the upstream documents them. `LineRef`
    /// is only sent when a line filter was requested.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("key", self.api_key.clone()),
            ("OperatorRef", OPERATOR_REF.to_string()),
            ("MonitoringRef", self.stop_id.clone()),
        ];

        if let Some(line) = &self.line {
            params.push(("LineRef", format!("{}{}", LINE_REF_PREFIX, line)));
        }

        params.push(("MaximumStopVisits", self.max_visits.to_string()));

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(line: Option<&str>) -> StopMonitoringQuery {
        StopMonitoringQuery {
            api_key: "secret".to_string(),
            stop_id: "308100".to_string(),
            line: line.map(|l| l.to_string()),
            max_visits: 2,
        }
    }

    fn param<'a>(params: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn builds_all_params_with_line() {
        let params = query(Some("B70")).to_query_params();

        assert_eq!(
            params,
            vec![
                ("key", "secret".to_string()),
                ("OperatorRef", "MTA".to_string()),
                ("MonitoringRef", "308100".to_string()),
                ("LineRef", "MTA NYCT_B70".to_string()),
                ("MaximumStopVisits", "2".to_string()),
            ]
        );
    }

    #[test]
    fn omits_line_ref_without_line() {
        let params = query(None).to_query_params();

        assert_eq!(param(&params, "LineRef"), None);
        assert!(params.iter().all(|(_, v)| v != LINE_REF_PREFIX));
        assert_eq!(param(&params, "MonitoringRef"), Some("308100"));
        assert_eq!(param(&params, "MaximumStopVisits"), Some("2"));
    }

    #[test]
    fn passes_stop_id_through_untouched() {
        let mut q = query(None);
        q.stop_id = "".to_string();
        q.max_visits = 0;

        let params = q.to_query_params();

        assert_eq!(param(&params, "MonitoringRef"), Some(""));
        assert_eq!(param(&params, "MaximumStopVisits"), Some("0"));
    }
}
