//! Generic response returned by handlers.

use std::collections::HashMap;

use crate::envelope::ProxyResponse;

/// HTTP-like result of one invocation.
///
/// `status_code` and `headers` only replace the outbound envelope's values
/// when set: a status of zero or below becomes 200, and `None` headers leave
/// the envelope's headers untouched. The payload is JSON-encoded into the
/// body by [`build_response`](crate::build_response).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response<T = serde_json::Value> {
    base: ProxyResponse,
    pub status_code: i64,
    pub headers: Option<HashMap<String, String>>,
    pub payload: T,
}

impl<T> Response<T> {
    /// Response with the given payload and the default status.
    pub fn new(payload: T) -> Self {
        Self {
            base: ProxyResponse::default(),
            status_code: 0,
            headers: None,
            payload,
        }
    }

    /// 200 response with the given payload.
    pub fn ok(payload: T) -> Self {
        Self::new(payload).with_status(200)
    }

    /// Any positive value is passed through as-is.
    pub fn with_status(mut self, status_code: i64) -> Self {
        self.status_code = status_code;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Replace the whole header map.
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Outbound envelope the translator starts from.
    ///
    /// Fields not covered by the response itself, such as
    /// `is_base64_encoded` or `multi_value_headers`, are carried through.
    pub fn base(&self) -> &ProxyResponse {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut ProxyResponse {
        &mut self.base
    }

    pub(crate) fn into_parts(self) -> (ProxyResponse, i64, Option<HashMap<String, String>>, T) {
        (self.base, self.status_code, self.headers, self.payload)
    }
}
