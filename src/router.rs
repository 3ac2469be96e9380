//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. You register a path, you
//! get a handler, and every handler receives a clone of the router's state.
//!
//! A handler can also be mounted on a path prefix. It then sees every request
//! under that prefix, whatever the method, with the remainder of the path in
//! the `path` parameter. Exact routes always win over mounts, and a request
//! for the prefix without its trailing slash is redirected to it.
//!
//! `HEAD` requests fall back to the `GET` route for the same path.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::trace;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::on`] call returns `self` so registrations chain naturally.
pub struct Router<S> {
    routes: HashMap<Method, MatchitRouter<BoxedHandler<S>>>,
    mounts: Vec<(String, BoxedHandler<S>)>,
    state: S,
}

/// What a method + path pair resolved to.
enum Lookup<S> {
    Found(BoxedHandler<S>, HashMap<String, String>),
    /// The path names a mount prefix minus its trailing slash.
    Redirect(String),
    /// The path exists, but only under these methods.
    WrongMethod(Vec<Method>),
    Missing,
}

impl<S> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Creates an empty router whose handlers all receive `state`.
    pub fn with_state(state: S) -> Self {
        Self { routes: HashMap::new(), mounts: Vec::new(), state }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax and catch-alls use `{*name}`;
    /// `req.param("name")` retrieves them.
    ///
    /// # Panics
    ///
    /// Panics if the path is not a valid route or conflicts with one already
    /// registered for the same method. Routes are fixed at startup, so this
    /// is a programming error.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler<S>) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{method} {path}`: {e}"));
        self
    }

    /// Mount a handler on every path starting with `prefix`, for any method.
    ///
    /// The handler reads the stripped remainder with `req.param("path")`;
    /// for a mount at `/app/`, a request to `/app/css/site.css` yields
    /// `"css/site.css"` and `/app/` itself yields `""`.
    ///
    /// # Panics
    ///
    /// Panics if `prefix` does not start and end with `/`.
    pub fn mount(mut self, prefix: &str, handler: impl Handler<S>) -> Self {
        assert!(
            prefix.starts_with('/') && prefix.ends_with('/'),
            "invalid mount `{prefix}`: prefix must start and end with `/`",
        );
        self.mounts.push((prefix.to_owned(), handler.into_boxed_handler()));
        // Longest prefix first, so nested mounts shadow their parents.
        self.mounts.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        self
    }

    /// Routes one request and produces one response.
    ///
    /// Unregistered paths yield `404`; paths registered only under other
    /// methods yield `405` with an `allow` header.
    pub async fn dispatch(&self, req: Request) -> Response {
        let method = req.method();
        let path = req.path().to_owned();
        let user_agent = req.header("user-agent").unwrap_or_default().to_owned();
        let lookup = self.lookup(method, &path);
        let state = self.state.clone();

        let fut = async move {
            match lookup {
                Lookup::Found(handler, params) => {
                    handler.call(state, req.with_params(params)).await
                }
                Lookup::Redirect(location) => moved_permanently(&location),
                Lookup::WrongMethod(allowed) => method_not_allowed(&allowed),
                Lookup::Missing => Response::status(Status::NotFound),
            }
        };
        trace::instrument(method.as_str(), &path, &user_agent, fut).await
    }

    fn lookup(&self, method: Method, path: &str) -> Lookup<S> {
        let exact = self.routes.get(&method)
            .and_then(|tree| tree.at(path).ok())
            .or_else(|| match method {
                Method::Head => self.routes.get(&Method::Get).and_then(|tree| tree.at(path).ok()),
                _ => None,
            });
        if let Some(matched) = exact {
            let handler = Arc::clone(matched.value);
            let params = matched.params.iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect();
            return Lookup::Found(handler, params);
        }

        let mounted = self.mounts.iter()
            .find_map(|(prefix, handler)| path.strip_prefix(prefix.as_str()).map(|rest| (handler, rest)));
        if let Some((handler, rest)) = mounted {
            let params = HashMap::from([("path".to_owned(), rest.to_owned())]);
            return Lookup::Found(Arc::clone(handler), params);
        }

        if let Some((prefix, _)) = self.mounts.iter().find(|(prefix, _)| prefix.strip_suffix('/') == Some(path)) {
            return Lookup::Redirect(prefix.clone());
        }

        let mut allowed: Vec<Method> = self.routes.iter()
            .filter(|(m, tree)| **m != method && tree.at(path).is_ok())
            .map(|(m, _)| *m)
            .collect();
        if allowed.is_empty() {
            return Lookup::Missing;
        }
        if allowed.contains(&Method::Get) {
            allowed.push(Method::Head);
        }
        allowed.sort();
        allowed.dedup();
        Lookup::WrongMethod(allowed)
    }
}

/// `405` for a method the server does not recognise at all.
pub(crate) fn unknown_method() -> Response {
    Response::status(Status::MethodNotAllowed)
}

fn moved_permanently(location: &str) -> Response {
    Response::builder()
        .status(Status::MovedPermanently)
        .header("location", location)
        .no_body()
}

fn method_not_allowed(allowed: &[Method]) -> Response {
    let allow = allowed.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ");
    Response::builder()
        .status(Status::MethodNotAllowed)
        .header("allow", &allow)
        .no_body()
}
