//! Core types: simulated outcomes and log records.

/// One simulated result of a balance request.
///
/// The closed set is `{200, 403, 500, 408}`; anything else observed on the
/// wire maps to [`Outcome::Unexpected`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Forbidden,
    ServerError,
    Timeout,
    Unexpected(u16),
}

impl Outcome {
    /// HTTP status code for this outcome.
    pub fn status_code(&self) -> u16 {
        match self {
            Outcome::Ok => 200,
            Outcome::Forbidden => 403,
            Outcome::ServerError => 500,
            Outcome::Timeout => 408,
            Outcome::Unexpected(code) => *code,
        }
    }

    /// Classifies a received status code.
    pub fn from_status(code: u16) -> Self {
        match code {
            200 => Outcome::Ok,
            403 => Outcome::Forbidden,
            500 => Outcome::ServerError,
            408 => Outcome::Timeout,
            other => Outcome::Unexpected(other),
        }
    }

    /// Whether this is one of the four statuses the server is expected to
    /// produce. The client's reachability probe accepts exactly these.
    pub fn is_expected(&self) -> bool {
        !matches!(self, Outcome::Unexpected(_))
    }
}

/// One logged balance-request event.
///
/// Immutable once created; written to the store exactly once, in the order
/// the triggering request was handled. Field values must not contain the
/// `" - "` or `": "` delimiter sequences (assumed, not enforced).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    /// Second-precision local timestamp, `%Y-%m-%dT%H:%M:%S`.
    pub timestamp: String,
    /// Client IP address as text. Not validated at this layer.
    pub ip: String,
    /// Status code of the chosen outcome.
    pub status: u16,
}

impl LogRecord {
    /// Builds a record stamped with the current time.
    pub fn now(ip: impl Into<String>, status: u16) -> Self {
        Self {
            timestamp: chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            ip: ip.into(),
            status,
        }
    }

    /// On-disk representation, without the trailing line terminator.
    pub fn to_line(&self) -> String {
        format!("{} - {} - Status Code: {}", self.timestamp, self.ip, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_round_trips_for_closed_set() {
        for code in [200u16, 403, 500, 408] {
            let outcome = Outcome::from_status(code);
            assert!(outcome.is_expected());
            assert_eq!(outcome.status_code(), code);
        }
    }

    #[test]
    fn unknown_status_maps_to_unexpected() {
        let outcome = Outcome::from_status(418);
        assert_eq!(outcome, Outcome::Unexpected(418));
        assert!(!outcome.is_expected());
        assert_eq!(outcome.status_code(), 418);
    }

    #[test]
    fn record_line_uses_fixed_delimiters() {
        let record = LogRecord {
            timestamp: "2024-01-01T10:00:00".into(),
            ip: "1.2.3.4".into(),
            status: 200,
        };
        assert_eq!(record.to_line(), "2024-01-01T10:00:00 - 1.2.3.4 - Status Code: 200");
    }

    #[test]
    fn now_produces_second_precision_timestamp() {
        let record = LogRecord::now("127.0.0.1", 403);
        // %Y-%m-%dT%H:%M:%S is always 19 characters.
        assert_eq!(record.timestamp.len(), 19);
        assert_eq!(record.timestamp.as_bytes()[10], b'T');
    }
}
