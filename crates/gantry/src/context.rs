//! Per-invocation context forwarded to handlers.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;

/// Invocation metadata carried from the run-loop into a [`Request`](crate::Request).
///
/// Gantry never inspects the deadline itself. Handlers that make their own
/// downstream calls can use [`remaining`](Self::remaining) to bound them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvocationContext {
    pub request_id: String,
    pub deadline: Option<SystemTime>,
    pub invoked_function_arn: String,
    pub xray_trace_id: Option<String>,
}

impl InvocationContext {
    /// Context with only a request id and no deadline.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            ..Default::default()
        }
    }

    pub fn with_deadline(mut self, deadline: SystemTime) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn deadline(&self) -> Option<SystemTime> {
        self.deadline
    }

    /// Time left before the platform cancels the invocation.
    ///
    /// Saturates at zero once the deadline has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining_at(SystemTime::now())
    }

    pub fn is_expired(&self) -> bool {
        self.remaining() == Some(Duration::ZERO)
    }

    fn remaining_at(&self, now: SystemTime) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.duration_since(now).unwrap_or(Duration::ZERO))
    }
}

impl From<&lambda_runtime::Context> for InvocationContext {
    fn from(ctx: &lambda_runtime::Context) -> Self {
        // A zero deadline means the run-loop did not report one.
        let deadline =
            (ctx.deadline > 0).then(|| UNIX_EPOCH + Duration::from_millis(ctx.deadline));

        Self {
            request_id: ctx.request_id.clone(),
            deadline,
            invoked_function_arn: ctx.invoked_function_arn.clone(),
            xray_trace_id: ctx.xray_trace_id.clone(),
        }
    }
}
