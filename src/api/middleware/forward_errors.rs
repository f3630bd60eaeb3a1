//! Async error adapter.
//!
//! Delegates signal failure by returning `Err(AppError)`; the error travels
//! out of the handler as a [`HandlerFailure`] response extension. This
//! middleware detaches it and hands it to the [`Continuation`], so the
//! failure reaches the error pipeline exactly once. Successful responses
//! pass through untouched.
//!
//! [`crate::api::route_table::RouteTable`] applies the adapter to every
//! binding at registration time; no handler is registered unwrapped.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::error_pipeline::Continuation;
use crate::error::HandlerFailure;

/// Runs the wrapped handler and forwards its failure, if any.
pub async fn forward_errors(
    State(continuation): State<Continuation>,
    req: Request,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;

    match response.extensions_mut().remove::<HandlerFailure>() {
        Some(HandlerFailure(error)) => continuation.forward(error),
        None => response,
    }
}
