//! Global navigation events.
//!
//! Three events are observable on a router: `route` (a genuine match was
//! resolved), `beforeRender`, and `afterRender`. Each is backed by a
//! [`Signal`] carrying the route concerned; observers register under an id
//! of their choosing and are removed through that id.

use wayline_core::WaylineResult;
use wayline_signals::{Signal, SignalReceiver};

use crate::route::Route;

/// An observer of a router event.
pub type RouteObserver = SignalReceiver<Route>;

/// The global events a router emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouterEvent {
    /// Resolution produced a genuine match (never fired for the not-found
    /// fallback), before the leave/commit sequence runs.
    Route,
    /// A render is about to paint.
    BeforeRender,
    /// A render finished painting.
    AfterRender,
}

impl RouterEvent {
    /// The event name as hosts and logs refer to it.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Route => "route",
            Self::BeforeRender => "beforeRender",
            Self::AfterRender => "afterRender",
        }
    }
}

/// The signal bundle owned by one router.
///
/// There is no process-wide hub: observers attach to a specific router
/// value.
#[derive(Default)]
pub struct EventHub {
    route_matched: Signal<Route>,
    before_render: Signal<Route>,
    after_render: Signal<Route>,
}

impl EventHub {
    /// Creates a hub with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Connects `observer` to `event` under `observer_id`. Re-connecting
    /// the same id replaces the previous observer.
    ///
    /// # Errors
    ///
    /// Returns [`wayline_core::WaylineError::InvalidHook`] if the id is
    /// empty or whitespace-only.
    pub fn connect(
        &self,
        event: RouterEvent,
        observer_id: impl Into<String>,
        observer: RouteObserver,
    ) -> WaylineResult<()> {
        self.signal(event).connect(observer_id, observer)
    }

    /// Disconnects the observer registered under `observer_id` from
    /// `event`. Returns `true` if one was removed.
    pub fn disconnect(&self, event: RouterEvent, observer_id: &str) -> bool {
        self.signal(event).disconnect(observer_id)
    }

    /// Number of observers currently attached to `event`.
    pub fn observer_count(&self, event: RouterEvent) -> usize {
        self.signal(event).receiver_count()
    }

    /// Notifies every observer of `event`, in connection order. Returns
    /// the number notified.
    pub(crate) fn emit(&self, event: RouterEvent, route: &Route) -> usize {
        self.signal(event).send(route)
    }

    fn signal(&self, event: RouterEvent) -> &Signal<Route> {
        match event {
            RouterEvent::Route => &self.route_matched,
            RouterEvent::BeforeRender => &self.before_render,
            RouterEvent::AfterRender => &self.after_render,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RouteOptions;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn sample_route() -> Route {
        Route::new("/about", RouteOptions::new(Arc::new(|_| {}))).unwrap()
    }

    #[test]
    fn test_events_are_independent() {
        let hub = EventHub::new();
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();

        hub.connect(
            RouterEvent::Route,
            "probe",
            Arc::new(move |_: &Route| {
                c.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .unwrap();

        assert_eq!(hub.emit(RouterEvent::BeforeRender, &sample_route()), 0);
        assert_eq!(hub.emit(RouterEvent::Route, &sample_route()), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disconnect_by_id() {
        let hub = EventHub::new();
        hub.connect(RouterEvent::AfterRender, "probe", Arc::new(|_: &Route| {}))
            .unwrap();

        assert_eq!(hub.observer_count(RouterEvent::AfterRender), 1);
        assert!(hub.disconnect(RouterEvent::AfterRender, "probe"));
        assert!(!hub.disconnect(RouterEvent::AfterRender, "probe"));
        assert_eq!(hub.observer_count(RouterEvent::AfterRender), 0);
    }

    #[test]
    fn test_blank_observer_id_rejected() {
        let hub = EventHub::new();
        let err = hub
            .connect(RouterEvent::Route, " ", Arc::new(|_: &Route| {}))
            .unwrap_err();
        assert!(err.is_registration_error());
    }

    #[test]
    fn test_event_names() {
        assert_eq!(RouterEvent::Route.as_str(), "route");
        assert_eq!(RouterEvent::BeforeRender.as_str(), "beforeRender");
        assert_eq!(RouterEvent::AfterRender.as_str(), "afterRender");
    }

    #[test]
    fn test_observer_receives_route_payload() {
        let hub = EventHub::new();
        let seen = Arc::new(std::sync::Mutex::new(String::new()));
        let s = seen.clone();

        hub.connect(
            RouterEvent::Route,
            "capture",
            Arc::new(move |route: &Route| {
                *s.lock().unwrap() = route.path().to_string();
            }),
        )
        .unwrap();

        hub.emit(RouterEvent::Route, &sample_route());
        assert_eq!(*seen.lock().unwrap(), "/about");
    }
}
