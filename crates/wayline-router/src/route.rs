//! Route definition and registration options.
//!
//! A [`Route`] is one navigable endpoint: a compiled path pattern, an
//! optional name for reverse lookup, the action invoked when the route is
//! matched, an optional leave hook that can veto navigating away, and the
//! parameter values of the most recent match.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use wayline_core::WaylineResult;

use crate::pattern::PathPattern;
use crate::router::ActionContext;

/// Parameter values extracted from a dynamic match, keyed by placeholder
/// name.
pub type RouteParams = std::collections::HashMap<String, String>;

/// The callback invoked when a route is matched.
///
/// The context gives the action access to the matched route and to the
/// router's navigation and rendering surface.
pub type RouteAction = Arc<dyn Fn(&mut ActionContext<'_>) + Send + Sync>;

/// A per-route leave hook, invoked before the router navigates away.
/// Returning `false` cancels the navigation.
pub type LeaveHook = Arc<dyn Fn(&Route) -> bool + Send + Sync>;

/// Options for registering a route.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use wayline_router::route::RouteOptions;
///
/// let options = RouteOptions::new(Arc::new(|_| {}))
///     .with_name("page")
///     .with_leave(Arc::new(|_| true));
/// ```
#[derive(Clone)]
pub struct RouteOptions {
    pub(crate) name: Option<String>,
    pub(crate) action: RouteAction,
    pub(crate) leave: Option<LeaveHook>,
}

impl RouteOptions {
    /// Creates options carrying just an action.
    pub fn new(action: RouteAction) -> Self {
        Self {
            name: None,
            action,
            leave: None,
        }
    }

    /// Names the route for reverse lookup via
    /// [`Router::path`](crate::Router::path).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attaches a leave hook at registration time.
    #[must_use]
    pub fn with_leave(mut self, hook: LeaveHook) -> Self {
        self.leave = Some(hook);
        self
    }
}

/// A registered navigable endpoint.
#[derive(Clone)]
pub struct Route {
    pattern: PathPattern,
    name: Option<String>,
    action: RouteAction,
    leave: Option<LeaveHook>,
    params: Option<RouteParams>,
}

impl Route {
    /// Builds a route from a path template and registration options.
    ///
    /// # Errors
    ///
    /// Returns [`wayline_core::WaylineError::InvalidPattern`] if the
    /// template does not compile.
    pub fn new(path: &str, options: RouteOptions) -> WaylineResult<Self> {
        let pattern = PathPattern::compile(path)?;
        Ok(Self {
            pattern,
            name: options.name,
            action: options.action,
            leave: options.leave,
            params: None,
        })
    }

    /// The path template this route was registered under.
    pub fn path(&self) -> &str {
        self.pattern.template()
    }

    /// The route's name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Parameter values of the most recent dynamic match. `None` until the
    /// route is matched dynamically, and cleared again on a literal exact
    /// match.
    pub fn params(&self) -> Option<&RouteParams> {
        self.params.as_ref()
    }

    /// Looks up one parameter value from the most recent match.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.as_ref()?.get(key).map(String::as_str)
    }

    /// True if the path template contains at least one `:name` placeholder.
    pub fn is_dynamic(&self) -> bool {
        self.pattern.is_dynamic()
    }

    /// Registers a lifecycle hook under a string event name.
    ///
    /// Only `"leave"` is recognized; any other event name is a silent
    /// no-op, matching the historical surface of this API.
    pub fn on(&mut self, event: &str, hook: LeaveHook) {
        if event == "leave" {
            self.leave = Some(hook);
        } else {
            trace!(route = self.path(), event, "unrecognized route event ignored");
        }
    }

    /// Registers the leave hook directly.
    pub fn set_leave(&mut self, hook: LeaveHook) {
        self.leave = Some(hook);
    }

    /// True if a leave hook is attached.
    pub fn has_leave(&self) -> bool {
        self.leave.is_some()
    }

    pub(crate) fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub(crate) fn action(&self) -> RouteAction {
        self.action.clone()
    }

    pub(crate) fn leave_hook(&self) -> Option<LeaveHook> {
        self.leave.clone()
    }

    pub(crate) fn set_params(&mut self, params: Option<RouteParams>) {
        self.params = params;
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path())
            .field("name", &self.name)
            .field("params", &self.params)
            .field("has_leave", &self.leave.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> RouteAction {
        Arc::new(|_| {})
    }

    #[test]
    fn test_new_route_has_no_params() {
        let route = Route::new("/pages/:id", RouteOptions::new(noop())).unwrap();
        assert_eq!(route.path(), "/pages/:id");
        assert!(route.params().is_none());
        assert!(route.param("id").is_none());
        assert!(route.is_dynamic());
    }

    #[test]
    fn test_invalid_template_rejected_at_construction() {
        let err = Route::new("/x/:id/:id", RouteOptions::new(noop())).unwrap_err();
        assert!(err.is_registration_error());
    }

    #[test]
    fn test_options_builder() {
        let route = Route::new(
            "/pages/:id",
            RouteOptions::new(noop())
                .with_name("page")
                .with_leave(Arc::new(|_| true)),
        )
        .unwrap();

        assert_eq!(route.name(), Some("page"));
        assert!(route.has_leave());
    }

    #[test]
    fn test_on_recognizes_only_leave() {
        let mut route = Route::new("/about", RouteOptions::new(noop())).unwrap();

        route.on("enter", Arc::new(|_| false));
        assert!(!route.has_leave());

        route.on("leave", Arc::new(|_| false));
        assert!(route.has_leave());
    }

    #[test]
    fn test_set_params_round_trip() {
        let mut route = Route::new("/pages/:id", RouteOptions::new(noop())).unwrap();

        let mut params = RouteParams::new();
        params.insert("id".to_string(), "42".to_string());
        route.set_params(Some(params));

        assert_eq!(route.param("id"), Some("42"));

        route.set_params(None);
        assert!(route.params().is_none());
    }

    #[test]
    fn test_debug_masks_callbacks() {
        let route = Route::new("/about", RouteOptions::new(noop())).unwrap();
        let repr = format!("{route:?}");
        assert!(repr.contains("/about"));
        assert!(repr.contains("has_leave: false"));
    }
}
