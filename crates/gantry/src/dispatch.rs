//! Dispatcher wiring a [`Handler`] into the Lambda run-loop.
//!
//! `Dispatcher` owns the per-invocation pipeline (parse → handle → build).
//! [`run`] registers it with `lambda_runtime`; [`start`] does the same from
//! synchronous code and blocks for the life of the process.

use std::sync::Arc;

use lambda_runtime::{LambdaEvent, service_fn};
use tracing::{debug, debug_span, error, info};

use crate::context::InvocationContext;
use crate::convert::{build_response, parse_request};
use crate::envelope::{ProxyRequest, ProxyResponse};
use crate::error::{DispatchError, StartError};
use crate::handler::Handler;

/// Adapts a [`Handler`] to the run-loop's `(context, event) → result`
/// signature.
///
/// Cloning is cheap; clones share the same handler.
pub struct Dispatcher<H> {
    handler: Arc<H>,
}

impl<H> Clone for Dispatcher<H> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
        }
    }
}

impl<H: Handler> Dispatcher<H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Run one invocation.
    ///
    /// Returns a fully built proxy result, or an error and no result. Handler
    /// panics are not caught.
    pub fn dispatch(
        &self,
        context: InvocationContext,
        envelope: ProxyRequest,
    ) -> Result<ProxyResponse, DispatchError> {
        let span = debug_span!(
            "invocation",
            request_id = %context.request_id,
            method = %envelope.http_method,
            path = %envelope.path,
        );
        let _guard = span.enter();

        let request = parse_request(context, envelope);
        let response = self.handler.handle(request);

        match build_response(response) {
            Ok(result) => {
                debug!(status = result.status_code, "invocation complete");
                Ok(result)
            }
            Err(e) => {
                error!(error = %e, "failed to build proxy response");
                Err(e.into())
            }
        }
    }

    /// Entry point in the shape `lambda_runtime` expects.
    pub async fn call(
        &self,
        event: LambdaEvent<ProxyRequest>,
    ) -> Result<ProxyResponse, lambda_runtime::Error> {
        let context = InvocationContext::from(&event.context);
        Ok(self.dispatch(context, event.payload)?)
    }
}

/// Wrap a handler into the function the run-loop invokes.
pub fn lambda_handler<H: Handler>(handler: H) -> Dispatcher<H> {
    Dispatcher::new(handler)
}

/// Register `handler` with the Lambda run-loop.
///
/// Resolves only when the run-loop itself fails.
pub async fn run<H: Handler>(handler: H) -> Result<(), lambda_runtime::Error> {
    let dispatcher = lambda_handler(handler);
    info!("registering handler with lambda run-loop");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<ProxyRequest>| {
        let dispatcher = dispatcher.clone();
        async move { dispatcher.call(event).await }
    }))
    .await
}

/// Blocking form of [`run`] for a plain `fn main`.
///
/// Builds a multi-threaded tokio runtime and never returns under normal
/// operation.
pub fn start<H: Handler>(handler: H) -> Result<(), StartError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime
        .block_on(run(handler))
        .map_err(|e| StartError::RunLoop(e.to_string()))
}
