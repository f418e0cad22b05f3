//! Generic request handed to handlers.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::context::InvocationContext;
use crate::envelope::ProxyRequest;

/// HTTP-like view of one inbound invocation.
///
/// Holds the proxy event verbatim alongside `data`, the body decoded as a
/// JSON object. `data` is empty when the body is absent, malformed, or not
/// an object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    context: InvocationContext,
    envelope: ProxyRequest,
    data: Map<String, Value>,
}

impl Request {
    pub(crate) fn new(
        context: InvocationContext,
        envelope: ProxyRequest,
        data: Map<String, Value>,
    ) -> Self {
        Self {
            context,
            envelope,
            data,
        }
    }

    pub fn context(&self) -> &InvocationContext {
        &self.context
    }

    /// The unmodified proxy event.
    pub fn envelope(&self) -> &ProxyRequest {
        &self.envelope
    }

    /// Body decoded as a JSON object.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Raw body as delivered by the gateway.
    pub fn body(&self) -> &str {
        &self.envelope.body
    }

    pub fn method(&self) -> &str {
        &self.envelope.http_method
    }

    pub fn path(&self) -> &str {
        &self.envelope.path
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.envelope
            .headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.envelope
            .query_string_parameters
            .get(name)
            .map(String::as_str)
    }

    pub fn path_param(&self, name: &str) -> Option<&str> {
        self.envelope.path_parameters.get(name).map(String::as_str)
    }

    /// Split into the context, the proxy event, and the decoded body.
    pub fn into_parts(self) -> (InvocationContext, ProxyRequest, Map<String, Value>) {
        (self.context, self.envelope, self.data)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn sample() -> Request {
        let envelope = ProxyRequest {
            path: "/orders/42".to_string(),
            http_method: "POST".to_string(),
            headers: HashMap::from([("Content-Type".to_string(), "application/json".to_string())]),
            query_string_parameters: HashMap::from([("verbose".to_string(), "1".to_string())]),
            path_parameters: HashMap::from([("id".to_string(), "42".to_string())]),
            body: "{}".to_string(),
            ..Default::default()
        };
        Request::new(InvocationContext::new("req-1"), envelope, Map::new())
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = sample();
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(req.header("accept"), None);
    }

    #[test]
    fn envelope_accessors() {
        let req = sample();
        assert_eq!(req.method(), "POST");
        assert_eq!(req.path(), "/orders/42");
        assert_eq!(req.body(), "{}");
        assert_eq!(req.query_param("verbose"), Some("1"));
        assert_eq!(req.path_param("id"), Some("42"));
        assert_eq!(req.path_param("missing"), None);
        assert_eq!(req.context().request_id, "req-1");
    }

    #[test]
    fn into_parts_returns_envelope() {
        let (ctx, envelope, data) = sample().into_parts();
        assert_eq!(ctx.request_id, "req-1");
        assert_eq!(envelope.path, "/orders/42");
        assert!(data.is_empty());
    }
}
