//! The router: route registry, fragment resolution, bounded history, and
//! the transition state machine.
//!
//! A [`Router`] is one explicit value owning everything navigation needs:
//! the ordered registry, the history stack, the event hub, the scheduler
//! driving the rollback re-enable delay, and the three collaborators
//! ([`AddressSource`], [`Document`], [`Renderer`]) it consumes but never
//! implements. The host invokes [`Router::refresh`] from its
//! fragment-changed notification and pumps [`Router::tick`] to advance the
//! virtual clock.
//!
//! A transition runs synchronously to completion: resolve the fragment,
//! fire the `route` event, give the outgoing route's leave hook a chance to
//! veto, then commit (history push, current-route update, action). A veto
//! disables the router, rolls the address back to the previous history
//! entry, and schedules re-enabling after a fixed delay so the rollback
//! settles without re-triggering cancellation.

use std::time::Duration;

use tracing::{debug, error, info, trace, warn};

use wayline_core::logging::navigation_span;
use wayline_core::schedule::{Scheduler, TaskHandle};
use wayline_core::{WaylineError, WaylineResult};

use crate::address::AddressSource;
use crate::config::RouterConfig;
use crate::events::{EventHub, RouteObserver, RouterEvent};
use crate::history::History;
use crate::render::{Document, RenderData, RenderOptions, Renderer};
use crate::route::{Route, RouteAction, RouteOptions, RouteParams};

/// The terminal state of one `refresh` attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing happened: the router is disabled, or the fragment was empty.
    Idle,
    /// No route matched and no not-found handler is configured.
    Unresolved,
    /// The outgoing route's leave hook vetoed the navigation; the address
    /// was rolled back and re-enabling is scheduled.
    Cancelled,
    /// The navigation completed and the new route's action ran.
    Committed,
}

/// What stands in when no pattern matches.
enum NotFound {
    /// An action to wrap in a synthesized route named `notFound`.
    Action(RouteAction),
    /// A pre-built route reused as-is.
    Route(Route),
}

/// Where the current route lives.
///
/// A registered route is referenced by its template so a later match never
/// exposes a stale `params` snapshot through [`Router::current_route`]; a
/// not-found fallback is owned outright since it has no registry entry.
enum CurrentSlot {
    Registered(String),
    Fallback(Route),
}

/// The outcome of resolution, before the leave/commit sequence.
enum Resolved {
    Registered(Route),
    Fallback(Route),
}

/// Deferred work owned by the router's scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RouterTask {
    Reenable,
}

/// The navigation resolver.
pub struct Router {
    config: RouterConfig,
    routes: Vec<Route>,
    history: History,
    current: Option<CurrentSlot>,
    enabled: bool,
    redirecting: bool,
    not_found: Option<NotFound>,
    target: String,
    events: EventHub,
    scheduler: Scheduler<RouterTask>,
    reenable_task: Option<TaskHandle>,
    address: Box<dyn AddressSource>,
    document: Box<dyn Document>,
    renderer: Box<dyn Renderer>,
}

impl Router {
    /// Creates a router wired to its three collaborators.
    pub fn new(
        config: RouterConfig,
        address: impl AddressSource + 'static,
        document: impl Document + 'static,
        renderer: impl Renderer + 'static,
    ) -> Self {
        let target = config.target.clone();
        let history = History::new(config.history_limit);
        Self {
            target,
            history,
            routes: Vec::new(),
            current: None,
            enabled: true,
            redirecting: false,
            not_found: None,
            events: EventHub::new(),
            scheduler: Scheduler::new(),
            reenable_task: None,
            address: Box::new(address),
            document: Box::new(document),
            renderer: Box::new(renderer),
            config,
        }
    }

    // ── Registry ─────────────────────────────────────────────────────

    /// Registers a route under `path`. Re-registering the same path
    /// replaces the previous entry in place, keeping its position in the
    /// first-match order.
    ///
    /// # Errors
    ///
    /// Returns [`WaylineError::InvalidPattern`] if the template does not
    /// compile.
    pub fn route(&mut self, path: &str, options: RouteOptions) -> WaylineResult<()> {
        let route = Route::new(path, options)?;
        if let Some(existing) = self.routes.iter_mut().find(|r| r.path() == path) {
            debug!(%path, "route replaced");
            *existing = route;
        } else {
            debug!(%path, "route registered");
            self.routes.push(route);
        }
        Ok(())
    }

    /// Registers a route from a bare action.
    ///
    /// # Errors
    ///
    /// Returns [`WaylineError::InvalidPattern`] if the template does not
    /// compile.
    #[deprecated(note = "use `route(path, RouteOptions::new(action))` instead")]
    pub fn route_with_action(&mut self, path: &str, action: RouteAction) -> WaylineResult<()> {
        warn!(
            "route_with_action(path, action) is deprecated, \
             use route(path, RouteOptions::new(action)) instead"
        );
        self.route(path, RouteOptions::new(action))
    }

    /// True iff `path` is a literal key in the registry. No dynamic
    /// matching is attempted.
    pub fn exists(&self, path: &str) -> bool {
        self.routes.iter().any(|route| route.path() == path)
    }

    /// Reverse lookup: the path of the route named `name`, with each
    /// `:key` placeholder substituted from `params`. A placeholder with no
    /// corresponding entry stays as the literal `:key` text. Returns `None`
    /// if no route has that name.
    pub fn path(&self, name: &str, params: &RouteParams) -> Option<String> {
        self.routes
            .iter()
            .find(|route| route.name() == Some(name))
            .map(|route| route.pattern().fill(params))
    }

    /// Uses `action` for unmatched fragments, wrapped in a synthesized
    /// route named `notFound` carrying the unmatched path.
    pub fn set_not_found_action(&mut self, action: RouteAction) {
        self.not_found = Some(NotFound::Action(action));
    }

    /// Uses a pre-built route for unmatched fragments.
    pub fn set_not_found_route(&mut self, route: Route) {
        self.not_found = Some(NotFound::Route(route));
    }

    // ── Navigation ───────────────────────────────────────────────────

    /// Navigates programmatically: writes the fragment and marks the
    /// router as redirecting until the next resolution. The host's
    /// fragment-changed notification drives the actual `refresh`.
    pub fn go(&mut self, path: &str) {
        debug!(%path, "programmatic navigation");
        self.redirecting = true;
        self.address.set_fragment(path);
    }

    /// Goes back in history with two-pop semantics: the current page's own
    /// entry is discarded along with the step back, so from history
    /// `[/a, /b, /c]` this navigates to `/a`. With fewer than three
    /// entries the history drains and no navigation happens.
    pub fn go_back(&mut self) {
        self.history.pop();
        self.history.pop();
        if let Some(path) = self.history.last().map(str::to_string) {
            self.go(&path);
        }
    }

    /// Resolves the current fragment and runs the transition to its
    /// terminal state.
    pub fn refresh(&mut self) -> Transition {
        if !self.enabled {
            trace!("refresh ignored: router disabled");
            return Transition::Idle;
        }

        let path = normalize_fragment(&self.address.fragment());
        if path.is_empty() {
            if self.exists("/") {
                self.go("/");
            }
            return Transition::Idle;
        }

        let span = navigation_span(&path);
        let _guard = span.enter();

        // A non-empty fragment being resolved ends any redirect in flight.
        self.redirecting = false;

        let resolved = match self.resolve(&path) {
            Some(index) => {
                let route = self.routes[index].clone();
                self.events.emit(RouterEvent::Route, &route);
                Resolved::Registered(route)
            }
            None => {
                error!("No route defined for {path}");
                match self.fallback_route(&path) {
                    Some(route) => Resolved::Fallback(route),
                    None => return Transition::Unresolved,
                }
            }
        };

        // The previous path is the last history entry, read without
        // removal; rollback writes it back to the address.
        let previous = self.history.last().map(str::to_string);
        if previous.as_deref() != Some(path.as_str()) {
            if let Some(outgoing) = self.current_route().cloned() {
                if let Some(hook) = outgoing.leave_hook() {
                    if !hook(&outgoing) {
                        info!(from = outgoing.path(), to = %path, "navigation cancelled by leave hook");
                        self.enabled = false;
                        if let Some(previous) = previous {
                            self.address.set_fragment(&previous);
                        }
                        let handle = self
                            .scheduler
                            .schedule_in(self.config.reenable_delay(), RouterTask::Reenable);
                        self.reenable_task = Some(handle);
                        return Transition::Cancelled;
                    }
                }
            }
        }

        self.history.push(path.as_str());

        let route = match resolved {
            Resolved::Registered(route) => {
                self.current = Some(CurrentSlot::Registered(route.path().to_string()));
                route
            }
            Resolved::Fallback(route) => {
                self.current = Some(CurrentSlot::Fallback(route.clone()));
                route
            }
        };

        info!(route = route.path(), "navigation committed");
        let action = route.action();
        let mut context = ActionContext {
            router: self,
            route,
        };
        action(&mut context);
        Transition::Committed
    }

    /// Selects a route for `path`: literal exact match first, then the
    /// first dynamic pattern (insertion order) whose placeholders all
    /// match. Updates the winner's `params`.
    fn resolve(&mut self, path: &str) -> Option<usize> {
        if let Some(index) = self.routes.iter().position(|route| route.path() == path) {
            debug!(route = path, "exact match");
            // A literal match is a complete match with zero placeholders;
            // a stale prior match must never show through.
            self.routes[index].set_params(None);
            return Some(index);
        }

        for index in 0..self.routes.len() {
            if !self.routes[index].is_dynamic() {
                continue;
            }
            if let Some(params) = self.routes[index].pattern().captures(path) {
                debug!(route = self.routes[index].path(), %path, "dynamic match");
                self.routes[index].set_params(Some(params));
                return Some(index);
            }
        }
        None
    }

    /// Builds the stand-in route for an unmatched fragment, if a handler
    /// is configured.
    fn fallback_route(&self, path: &str) -> Option<Route> {
        match self.not_found.as_ref()? {
            NotFound::Action(action) => {
                let options = RouteOptions::new(action.clone()).with_name("notFound");
                match Route::new(path, options) {
                    Ok(route) => Some(route),
                    Err(err) => {
                        warn!("not-found route for '{path}' could not be built: {err}");
                        None
                    }
                }
            }
            NotFound::Route(route) => Some(route.clone()),
        }
    }

    // ── Enable / disable & the virtual clock ─────────────────────────

    /// Re-enables the router immediately, discarding any pending
    /// re-enable task.
    pub fn enable(&mut self) {
        self.enabled = true;
        if let Some(handle) = self.reenable_task.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Disables the router. A pending re-enable task is cancelled so a
    /// manual disable is not undone by a stale rollback timer.
    pub fn disable(&mut self) {
        self.enabled = false;
        if let Some(handle) = self.reenable_task.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Advances the virtual clock and runs the tasks that came due.
    pub fn tick(&mut self, elapsed: Duration) {
        for task in self.scheduler.advance(elapsed) {
            match task {
                RouterTask::Reenable => {
                    trace!("rollback settled, router re-enabled");
                    self.enabled = true;
                    self.reenable_task = None;
                }
            }
        }
    }

    // ── Global events ────────────────────────────────────────────────

    /// Connects an observer to a global event under `observer_id`.
    ///
    /// # Errors
    ///
    /// Returns [`WaylineError::InvalidHook`] if the id is empty or
    /// whitespace-only.
    pub fn on(
        &self,
        event: RouterEvent,
        observer_id: impl Into<String>,
        observer: RouteObserver,
    ) -> WaylineResult<()> {
        self.events.connect(event, observer_id, observer)
    }

    /// Disconnects the observer registered under `observer_id` from
    /// `event`. Returns `true` if one was removed.
    pub fn off(&self, event: RouterEvent, observer_id: &str) -> bool {
        self.events.disconnect(event, observer_id)
    }

    /// The router's event hub.
    pub fn events(&self) -> &EventHub {
        &self.events
    }

    // ── Inspection ───────────────────────────────────────────────────

    /// The route of the last successfully committed navigation.
    pub fn current_route(&self) -> Option<&Route> {
        match self.current.as_ref()? {
            CurrentSlot::Registered(template) => {
                self.routes.iter().find(|route| route.path() == template)
            }
            CurrentSlot::Fallback(route) => Some(route),
        }
    }

    /// The most recent history entry.
    pub fn last_path(&self) -> Option<&str> {
        self.history.last()
    }

    /// The navigation history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The registered routes, in first-match order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The default render target name.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Changes the default render target name.
    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = target.into();
    }

    /// Whether `refresh` currently performs any work.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a programmatic navigation is in flight.
    pub fn is_redirecting(&self) -> bool {
        self.redirecting
    }

    /// Whether the host should perform an initial `refresh` when wiring
    /// the router up. The router only stores the flag.
    pub fn auto_run(&self) -> bool {
        self.config.auto_run
    }

    /// The configuration this router was built with.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }
}

/// The surface a route action sees while it runs.
///
/// Created by the router for each committed navigation; gives the action
/// the matched route plus navigation and rendering entry points.
pub struct ActionContext<'r> {
    router: &'r mut Router,
    route: Route,
}

impl ActionContext<'_> {
    /// The matched route, params populated.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Parameter values of the match, if it was dynamic.
    pub fn params(&self) -> Option<&RouteParams> {
        self.route.params()
    }

    /// Navigates to another path. Delegates to [`Router::go`]; history is
    /// only touched when the resulting fragment change is resolved.
    pub fn redirect(&mut self, path: &str) {
        self.router.go(path);
    }

    /// Renders content for the matched route.
    ///
    /// Resolves the target (explicit option over the router default),
    /// merges optional data, fires `beforeRender`, clears the target,
    /// delegates painting to the renderer, updates link highlighting, and
    /// fires `afterRender`. While a redirect is in flight the
    /// clear/paint/link/`afterRender` block is skipped: the page is
    /// already being navigated away from.
    ///
    /// # Errors
    ///
    /// Returns [`WaylineError::TargetNotFound`] if the resolved target
    /// does not exist in the document, or the renderer's own error if
    /// painting fails.
    pub fn render(&mut self, content: &str, options: &RenderOptions) -> WaylineResult<()> {
        let target = options
            .target
            .clone()
            .unwrap_or_else(|| self.router.target.clone());

        if !self.router.document.contains_target(&target) {
            return Err(WaylineError::TargetNotFound {
                route: self.route.path().to_string(),
                target,
            });
        }

        let data = options
            .data
            .as_ref()
            .map_or_else(RenderData::new, |source| source.resolve(&self.route));

        self.router.events.emit(RouterEvent::BeforeRender, &self.route);

        if self.router.redirecting {
            debug!(route = self.route.path(), "render skipped: redirect in flight");
            return Ok(());
        }

        self.router.document.clear_target(&target);
        self.router.renderer.paint(content, &data, &target)?;

        let fragment = self.router.address.fragment();
        self.router.document.update_active_links(&fragment);

        self.router.events.emit(RouterEvent::AfterRender, &self.route);
        Ok(())
    }
}

/// Strips the leading `#` from a raw fragment, if present.
fn normalize_fragment(raw: &str) -> String {
    raw.strip_prefix('#').unwrap_or(raw).to_string()
}
