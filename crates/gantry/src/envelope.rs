//! API Gateway proxy integration envelopes.
//!
//! Wire shapes of the REST API (payload format 1.0) proxy event and the
//! result the platform expects back. These are decoded and encoded by the
//! Lambda run-loop; gantry only reads from and writes into them.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Inbound proxy event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyRequest {
    pub resource: String,
    pub path: String,
    pub http_method: String,
    #[serde(deserialize_with = "null_as_default")]
    pub headers: HashMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub multi_value_headers: HashMap<String, Vec<String>>,
    #[serde(deserialize_with = "null_as_default")]
    pub query_string_parameters: HashMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub multi_value_query_string_parameters: HashMap<String, Vec<String>>,
    #[serde(deserialize_with = "null_as_default")]
    pub path_parameters: HashMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub stage_variables: HashMap<String, String>,
    pub request_context: ProxyRequestContext,
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
    pub is_base64_encoded: bool,
}

/// Gateway-side metadata about the inbound request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyRequestContext {
    pub account_id: String,
    pub resource_id: String,
    pub stage: String,
    pub request_id: String,
    pub identity: RequestIdentity,
    pub resource_path: String,
    pub http_method: String,
    pub api_id: String,
    /// Values injected by a custom or Cognito authorizer.
    #[serde(deserialize_with = "null_as_default")]
    pub authorizer: HashMap<String, serde_json::Value>,
}

/// Caller identity as seen by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestIdentity {
    pub cognito_identity_pool_id: Option<String>,
    pub account_id: Option<String>,
    pub cognito_identity_id: Option<String>,
    pub caller: Option<String>,
    pub api_key: Option<String>,
    pub source_ip: Option<String>,
    pub cognito_authentication_type: Option<String>,
    pub cognito_authentication_provider: Option<String>,
    pub user_arn: Option<String>,
    pub user_agent: Option<String>,
    pub user: Option<String>,
}

/// Outbound proxy result.
///
/// `headers` and `multi_value_headers` stay `None` unless something sets
/// them, in which case they are left off the wire and the gateway applies
/// its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyResponse {
    pub status_code: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_value_headers: Option<HashMap<String, Vec<String>>>,
    pub body: String,
    pub is_base64_encoded: bool,
}

/// The gateway sends `null` rather than omitting empty maps and bodies.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
