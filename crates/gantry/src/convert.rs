//! Conversions between proxy envelopes and gantry's generic types.
//!
//! Both directions are pure: they touch nothing but their arguments, so
//! concurrent invocations never share state.

use std::any::Any;
use std::borrow::Cow;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::context::InvocationContext;
use crate::envelope::{ProxyRequest, ProxyResponse};
use crate::error::ConvertError;
use crate::request::Request;
use crate::response::Response;

/// Status used when a response leaves its status code unset.
pub const DEFAULT_STATUS: i64 = 200;

/// Build a [`Request`] from an inbound proxy event.
///
/// The body is decoded as a JSON object into [`Request::data`]. A body that
/// is empty, malformed, or not an object leaves `data` empty; it never fails
/// the invocation. The event itself is kept verbatim.
pub fn parse_request(context: InvocationContext, envelope: ProxyRequest) -> Request {
    let data = decode_body(&envelope.body);
    Request::new(context, envelope, data)
}

fn decode_body(body: &str) -> Map<String, Value> {
    if body.is_empty() {
        return Map::new();
    }
    match serde_json::from_str::<Map<String, Value>>(body) {
        Ok(data) => data,
        Err(e) => {
            debug!(error = %e, "request body is not a JSON object");
            Map::new()
        }
    }
}

/// Build the outbound proxy result from a [`Response`].
///
/// Starts from the response's base envelope, then:
/// - replaces the headers when the response set any (no merging),
/// - uses the response status if positive, otherwise [`DEFAULT_STATUS`],
/// - JSON-encodes the payload into the body. A payload that fails to encode
///   is used verbatim if it is a string type; anything else is an error and
///   no envelope is produced.
pub fn build_response<T>(response: Response<T>) -> Result<ProxyResponse, ConvertError>
where
    T: Serialize + 'static,
{
    let (mut envelope, status_code, headers, payload) = response.into_parts();

    let body = encode_payload(&payload)?;

    if let Some(headers) = headers {
        envelope.headers = Some(headers);
    }
    envelope.status_code = if status_code > 0 {
        status_code
    } else {
        DEFAULT_STATUS
    };
    envelope.body = body;

    Ok(envelope)
}

fn encode_payload<T>(payload: &T) -> Result<String, ConvertError>
where
    T: Serialize + 'static,
{
    match serde_json::to_string(payload) {
        Ok(body) => Ok(body),
        Err(e) => match payload_as_text(payload) {
            Some(text) => {
                warn!(error = %e, "payload failed to encode, sending it as text");
                Ok(text)
            }
            None => Err(ConvertError::UnserializablePayload(e)),
        },
    }
}

/// Text of a string-typed payload.
fn payload_as_text(payload: &dyn Any) -> Option<String> {
    if let Some(s) = payload.downcast_ref::<String>() {
        Some(s.clone())
    } else if let Some(s) = payload.downcast_ref::<&'static str>() {
        Some((*s).to_string())
    } else if let Some(s) = payload.downcast_ref::<Box<str>>() {
        Some(s.to_string())
    } else {
        payload
            .downcast_ref::<Cow<'static, str>>()
            .map(|s| s.to_string())
    }
}
