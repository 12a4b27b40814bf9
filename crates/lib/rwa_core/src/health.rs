//! Liveness report for the backend.

use serde::Serialize;

/// Status value reported when the service is up.
pub const STATUS_OK: &str = "OK";

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub message: &'static str,
}

/// Returns the liveness report. There are no dependencies to probe.
pub fn report() -> HealthReport {
    HealthReport {
        status: STATUS_OK,
        message: "RWA Search Backend is running",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_ok() {
        let report = report();
        assert_eq!(report.status, "OK");
        assert!(report.message.contains("running"));
    }
}
