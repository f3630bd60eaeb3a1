//! Centralized error pipeline.
//!
//! Every failure produced by a routed delegate ends up here: asynchronous
//! failures via [`super::forward_errors`], panics via [`PanicForwarder`].

use axum::response::Response;
use serde_json::json;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::ResponseForPanic;

use crate::error::AppError;

/// Receiver of failures forwarded out of request handlers.
///
/// The returned response is what the client sees.
pub trait ErrorSink: Send + Sync {
    fn forward(&self, error: AppError) -> Response;
}

/// Default sink: logs the failure, counts it and renders the JSON body.
#[derive(Debug, Default, Clone, Copy)]
pub struct ErrorPipeline;

impl ErrorSink for ErrorPipeline {
    fn forward(&self, error: AppError) -> Response {
        let status = error.status();

        if status.is_server_error() {
            tracing::error!(
                status = status.as_u16(),
                code = error.code(),
                details = %error.details(),
                "{}",
                error.message()
            );
        } else {
            tracing::warn!(
                status = status.as_u16(),
                code = error.code(),
                details = %error.details(),
                "{}",
                error.message()
            );
        }

        metrics::counter!("dispatch_handler_failures_total", "code" => error.code()).increment(1);

        error.render()
    }
}

/// Handle on the error sink shared by every wrapped handler.
///
/// This is the "next step" a failing handler hands its error to.
#[derive(Clone)]
pub struct Continuation {
    sink: Arc<dyn ErrorSink>,
}

impl Continuation {
    pub fn new(sink: Arc<dyn ErrorSink>) -> Self {
        Self { sink }
    }

    /// Hands a failure to the sink and returns the response to send.
    pub fn forward(&self, error: AppError) -> Response {
        self.sink.forward(error)
    }
}

impl Default for Continuation {
    fn default() -> Self {
        Self::new(Arc::new(ErrorPipeline))
    }
}

/// Converts a handler panic into an internal error on the same pipeline.
#[derive(Clone)]
pub struct PanicForwarder {
    continuation: Continuation,
}

impl PanicForwarder {
    pub fn new(continuation: Continuation) -> Self {
        Self { continuation }
    }
}

impl ResponseForPanic for PanicForwarder {
    type ResponseBody = axum::body::Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response {
        let reason = if let Some(s) = err.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = err.downcast_ref::<&str>() {
            (*s).to_string()
        } else {
            "unknown panic payload".to_string()
        };

        self.continuation.forward(AppError::internal(
            "Handler panicked",
            json!({ "panic": reason }),
        ))
    }
}
