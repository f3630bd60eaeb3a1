//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates the request tracing layer applied to the whole application.
///
/// Spans are opened at `INFO` with method, URI and version; the response is
/// logged with its status and latency in milliseconds. Failures are already
/// logged by the error pipeline, so 5xx classification only marks the span.
///
/// ```text
/// INFO request{method=GET uri=/drivers/42 version=HTTP/1.1}: started processing request
/// INFO request{method=GET uri=/drivers/42 version=HTTP/1.1}: finished processing request latency=3 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
