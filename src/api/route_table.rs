//! Explicit route tables.
//!
//! A [`RouteTable`] is built once during application assembly and then
//! turned into an axum [`Router`]. It records every `(method, path)` binding
//! together with the delegate name, rejects duplicates, and wraps each
//! handler with [`forward_errors`] as it is registered.

use axum::{
    Router,
    handler::Handler,
    http::Method,
    middleware,
    routing::{MethodFilter, on},
};
use thiserror::Error;

use crate::api::middleware::error_pipeline::Continuation;
use crate::api::middleware::forward_errors::forward_errors;
use crate::state::AppState;

/// One `(method, path pattern) -> delegate` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteBinding {
    pub method: Method,
    pub path: &'static str,
    pub delegate: &'static str,
}

/// Errors raised while assembling a route table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("{table}: {method} {path} is already bound to `{existing}`")]
    Duplicate {
        table: &'static str,
        method: Method,
        path: &'static str,
        existing: &'static str,
    },
    #[error("{table}: method {method} cannot be routed")]
    UnsupportedMethod { table: &'static str, method: Method },
}

/// Immutable-once-built list of bindings for one resource family.
pub struct RouteTable<S = AppState> {
    name: &'static str,
    continuation: Continuation,
    bindings: Vec<RouteBinding>,
    router: Router<S>,
}

impl<S> RouteTable<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new(name: &'static str, continuation: Continuation) -> Self {
        Self {
            name,
            continuation,
            bindings: Vec::new(),
            router: Router::new(),
        }
    }

    /// Binds `handler` to `(method, path)`.
    ///
    /// The handler is wrapped by the async error adapter before it is
    /// registered.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Duplicate`] if the pair is already bound and
    /// [`RouteError::UnsupportedMethod`] for methods axum cannot filter on.
    pub fn bind<H, T>(
        mut self,
        method: Method,
        path: &'static str,
        delegate: &'static str,
        handler: H,
    ) -> Result<Self, RouteError>
    where
        H: Handler<T, S>,
        T: 'static,
    {
        if let Some(existing) = self.lookup(&method, path).map(|b| b.delegate) {
            return Err(RouteError::Duplicate {
                table: self.name,
                method,
                path,
                existing,
            });
        }

        let filter =
            MethodFilter::try_from(method.clone()).map_err(|_| RouteError::UnsupportedMethod {
                table: self.name,
                method: method.clone(),
            })?;

        let wrapped = handler.layer(middleware::from_fn_with_state(
            self.continuation.clone(),
            forward_errors,
        ));
        self.router = self.router.route(path, on(filter, wrapped));

        tracing::debug!(table = self.name, %method, path, delegate, "Route bound");
        self.bindings.push(RouteBinding {
            method,
            path,
            delegate,
        });

        Ok(self)
    }

    /// Finds the binding registered for an exact `(method, path pattern)`.
    pub fn lookup(&self, method: &Method, path: &str) -> Option<&RouteBinding> {
        self.bindings
            .iter()
            .find(|b| b.method == *method && b.path == path)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn bindings(&self) -> &[RouteBinding] {
        &self.bindings
    }

    pub fn into_router(self) -> Router<S> {
        self.router
    }
}
