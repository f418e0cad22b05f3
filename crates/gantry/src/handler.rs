//! Handler contract implemented by application code.

use serde::Serialize;

use crate::request::Request;
use crate::response::Response;

/// Application logic behind a gantry function.
///
/// A single handler instance serves every invocation of the function,
/// possibly concurrently, so it takes `&self`. Configuration the handler
/// needs is passed to its constructor.
///
/// Closures of the form `Fn(Request) -> Response<T>` implement this trait.
pub trait Handler: Send + Sync + 'static {
    /// Type of the response payload, JSON-encoded into the proxy body.
    type Payload: Serialize + 'static;

    fn handle(&self, request: Request) -> Response<Self::Payload>;
}

impl<F, T> Handler for F
where
    F: Fn(Request) -> Response<T> + Send + Sync + 'static,
    T: Serialize + 'static,
{
    type Payload = T;

    fn handle(&self, request: Request) -> Response<T> {
        self(request)
    }
}
