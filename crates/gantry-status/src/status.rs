//! Health-check handler.

use gantry::{Handler, Request, Response};
use serde::Serialize;

use crate::config::StatusConfig;

/// Body of a status response.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub status: StatusConfig,
    pub request: Request,
}

/// Reports the configured name and version alongside the request it received.
pub struct StatusHandler {
    status: StatusConfig,
}

impl StatusHandler {
    pub fn new(status: StatusConfig) -> Self {
        Self { status }
    }
}

impl Handler for StatusHandler {
    type Payload = StatusReport;

    fn handle(&self, request: Request) -> Response<StatusReport> {
        Response::ok(StatusReport {
            status: self.status.clone(),
            request,
        })
    }
}

#[cfg(test)]
mod tests {
    use gantry::{InvocationContext, ProxyRequest, lambda_handler};
    use serde_json::{Value, json};

    use super::*;

    fn status() -> StatusConfig {
        StatusConfig {
            name: "Status Test".to_string(),
            version: "1.0.0".to_string(),
        }
    }

    #[test]
    fn reports_status_and_request() {
        let dispatcher = lambda_handler(StatusHandler::new(status()));
        let envelope = ProxyRequest {
            path: "/status".to_string(),
            http_method: "GET".to_string(),
            body: r#"{"probe":true}"#.to_string(),
            ..Default::default()
        };

        let out = dispatcher
            .dispatch(InvocationContext::new("req-1"), envelope)
            .unwrap();
        assert_eq!(out.status_code, 200);

        let body: Value = serde_json::from_str(&out.body).unwrap();
        assert_eq!(body["status"], json!({"name": "Status Test", "version": "1.0.0"}));
        assert_eq!(body["request"]["envelope"]["path"], "/status");
        assert_eq!(body["request"]["data"], json!({"probe": true}));
        assert_eq!(body["request"]["context"]["request_id"], "req-1");
    }
}
