//! gantry — generic request/response handlers for API Gateway on Lambda.
//!
//! Application code implements [`Handler`] against a small HTTP-like
//! [`Request`] / [`Response`] pair. Gantry translates the platform's
//! proxy event into a `Request`, runs the handler, and translates the
//! `Response` back into the proxy result the platform expects.
//!
//! # Architecture
//!
//! ```text
//! lambda_runtime run-loop
//!   │
//!   ▼
//! Dispatcher
//!   │
//!   ├── ProxyRequest → Request        (convert::parse_request)
//!   ├── Handler::handle(Request) → Response
//!   ├── Response → ProxyResponse      (convert::build_response)
//!   │
//!   ▼
//! lambda_runtime run-loop
//! ```
//!
//! Both translations are pure functions over their per-call inputs, so a
//! single [`Dispatcher`] can serve concurrent invocations.
//!
//! # Example
//!
//! ```no_run
//! use gantry::{Request, Response};
//! use serde_json::json;
//!
//! fn main() -> Result<(), gantry::StartError> {
//!     gantry::start(|req: Request| {
//!         Response::ok(json!({ "path": req.path() }))
//!     })
//! }
//! ```

pub mod context;
pub mod convert;
pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod handler;
pub mod request;
pub mod response;

pub use context::InvocationContext;
pub use convert::{build_response, parse_request};
pub use dispatch::{Dispatcher, lambda_handler, run, start};
pub use envelope::{ProxyRequest, ProxyRequestContext, ProxyResponse, RequestIdentity};
pub use error::{ConvertError, DispatchError, StartError};
pub use handler::Handler;
pub use request::Request;
pub use response::Response;
