use reqwest::StatusCode;

/// The upstream document was received but does not have the expected shape.
#[derive(Debug)]
pub enum DecodeError {
    Malformed(serde_json::Error),
    MissingField(String),
    InvalidValue { path: String, value: String },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DecodeError::Malformed(e) => write!(f, "Malformed response body: {}", e),
            DecodeError::MissingField(path) => write!(f, "Missing field: {}", path),
            DecodeError::InvalidValue { path, value } => {
                write!(f, "Invalid value for {}: {}", path, value)
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Malformed(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum StopMonitoringError {
    Transport(reqwest::Error),
    UpstreamStatus(StatusCode),
    Decode(DecodeError),
}

impl std::fmt::Display for StopMonitoringError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            StopMonitoringError::Transport(e) => write!(f, "Failed to send request: {}", e),
            StopMonitoringError::UpstreamStatus(code) => {
                write!(f, "Upstream responded with status {}", code)
            }
            StopMonitoringError::Decode(e) => write!(f, "Failed to decode response: {}", e),
        }
    }
}

impl std::error::Error for StopMonitoringError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StopMonitoringError::Transport(e) => Some(e),
            StopMonitoringError::UpstreamStatus(_) => None,
            StopMonitoringError::Decode(e) => Some(e),
        }
    }
}

impl From<DecodeError> for StopMonitoringError {
    fn from(err: DecodeError) -> StopMonitoringError {
        StopMonitoringError::Decode(err)
    }
}
