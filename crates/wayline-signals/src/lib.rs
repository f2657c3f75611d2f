//! # wayline-signals
//!
//! Signal dispatcher for the wayline navigation resolver. Provides a
//! decoupled observer system so that navigation events (route matched,
//! before render, after render) can be watched without the watchers knowing
//! about the router and vice versa.
//!
//! Observers are keyed by a caller-chosen id string: closures have no
//! notion of equality, so later removal goes through the id rather than the
//! callback value.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use wayline_signals::Signal;
//!
//! struct FragmentChanged;
//!
//! let signal: Signal<FragmentChanged> = Signal::new();
//!
//! signal
//!     .connect("analytics", Arc::new(|_event: &FragmentChanged| {
//!         println!("fragment changed");
//!     }))
//!     .unwrap();
//!
//! let notified = signal.send(&FragmentChanged);
//! assert_eq!(notified, 1);
//! ```

use std::sync::{Arc, RwLock};

use wayline_core::{WaylineError, WaylineResult};

/// The type signature for a signal receiver callback.
///
/// Receivers accept a reference to the signal payload. They must be
/// `Send + Sync` so a signal can be shared across threads.
pub type SignalReceiver<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A signal that can be connected to and dispatched.
///
/// Each signal carries a payload type `T`. Receivers are called in the
/// order they were connected.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use wayline_signals::Signal;
///
/// let signal: Signal<String> = Signal::new();
///
/// signal
///     .connect("logger", Arc::new(|path: &String| {
///         println!("navigated to {path}");
///     }))
///     .unwrap();
///
/// signal.send(&"/pages/42".to_string());
/// ```
pub struct Signal<T: 'static> {
    receivers: RwLock<Vec<(String, SignalReceiver<T>)>>,
}

impl<T: 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Signal<T> {
    /// Creates a new signal with no connected receivers.
    pub fn new() -> Self {
        Self {
            receivers: RwLock::new(Vec::new()),
        }
    }

    /// Connects a receiver to this signal.
    ///
    /// The `receiver_id` identifies the receiver for later disconnection.
    /// If a receiver with the same id is already connected, it is replaced
    /// in place (keeping its position in the dispatch order).
    ///
    /// # Errors
    ///
    /// Returns [`WaylineError::InvalidHook`] if `receiver_id` is empty or
    /// whitespace-only. A receiver that cannot be addressed can never be
    /// disconnected, so the registration is rejected outright.
    pub fn connect(
        &self,
        receiver_id: impl Into<String>,
        callback: SignalReceiver<T>,
    ) -> WaylineResult<()> {
        let id = receiver_id.into();
        if id.trim().is_empty() {
            return Err(WaylineError::InvalidHook(
                "receiver id must not be empty".to_string(),
            ));
        }

        let mut receivers = self.receivers.write().expect("signal lock poisoned");

        // Replace if already connected with this id
        if let Some(entry) = receivers.iter_mut().find(|(rid, _)| *rid == id) {
            entry.1 = callback;
        } else {
            receivers.push((id, callback));
        }
        Ok(())
    }

    /// Disconnects the receiver with the given id.
    ///
    /// Returns `true` if a receiver was found and removed.
    pub fn disconnect(&self, receiver_id: &str) -> bool {
        let mut receivers = self.receivers.write().expect("signal lock poisoned");
        let len_before = receivers.len();
        receivers.retain(|(id, _)| id != receiver_id);
        receivers.len() < len_before
    }

    /// Sends the signal to all connected receivers.
    ///
    /// Receivers are called in connection order. Returns the number of
    /// receivers notified.
    pub fn send(&self, payload: &T) -> usize {
        let receivers = self.receivers.read().expect("signal lock poisoned");
        for (_, callback) in receivers.iter() {
            callback(payload);
        }
        receivers.len()
    }

    /// Returns the number of connected receivers.
    pub fn receiver_count(&self) -> usize {
        self.receivers.read().expect("signal lock poisoned").len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn test_signal_connect_and_send() {
        let signal: Signal<String> = Signal::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        signal
            .connect(
                "counter",
                Arc::new(move |_: &String| {
                    count_clone.fetch_add(1, Ordering::SeqCst);
                }),
            )
            .unwrap();

        let notified = signal.send(&"hello".to_string());
        assert_eq!(notified, 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_signal_multiple_receivers() {
        let signal: Signal<i32> = Signal::new();
        let count = Arc::new(AtomicUsize::new(0));

        for i in 0..3 {
            let c = count.clone();
            signal
                .connect(
                    format!("receiver_{i}"),
                    Arc::new(move |_: &i32| {
                        c.fetch_add(1, Ordering::SeqCst);
                    }),
                )
                .unwrap();
        }

        assert_eq!(signal.receiver_count(), 3);
        assert_eq!(signal.send(&42), 3);
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_signal_disconnect() {
        let signal: Signal<()> = Signal::new();

        signal.connect("a", Arc::new(|(): &()| {})).unwrap();
        signal.connect("b", Arc::new(|(): &()| {})).unwrap();
        assert_eq!(signal.receiver_count(), 2);

        assert!(signal.disconnect("a"));
        assert_eq!(signal.receiver_count(), 1);

        assert!(!signal.disconnect("nonexistent"));
        assert_eq!(signal.receiver_count(), 1);
    }

    #[test]
    fn test_signal_replace_receiver() {
        let signal: Signal<()> = Signal::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        signal.connect("handler", Arc::new(|(): &()| {})).unwrap();
        signal
            .connect(
                "handler",
                Arc::new(move |(): &()| {
                    count_clone.fetch_add(1, Ordering::SeqCst);
                }),
            )
            .unwrap();

        assert_eq!(signal.receiver_count(), 1);
        signal.send(&());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_replace_keeps_dispatch_position() {
        let signal: Signal<()> = Signal::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for name in ["first", "second"] {
            let o = order.clone();
            signal
                .connect(
                    name,
                    Arc::new(move |(): &()| {
                        o.lock().unwrap().push(name);
                    }),
                )
                .unwrap();
        }

        // Re-connecting "first" must not move it behind "second".
        let o = order.clone();
        signal
            .connect(
                "first",
                Arc::new(move |(): &()| {
                    o.lock().unwrap().push("first-replaced");
                }),
            )
            .unwrap();

        signal.send(&());
        assert_eq!(*order.lock().unwrap(), vec!["first-replaced", "second"]);
    }

    #[test]
    fn test_empty_receiver_id_rejected() {
        let signal: Signal<()> = Signal::new();

        let err = signal.connect("", Arc::new(|(): &()| {})).unwrap_err();
        assert!(err.is_registration_error());

        let err = signal.connect("   ", Arc::new(|(): &()| {})).unwrap_err();
        assert!(err.to_string().contains("receiver id"));
        assert_eq!(signal.receiver_count(), 0);
    }

    #[test]
    fn test_empty_signal_send() {
        let signal: Signal<()> = Signal::new();
        assert_eq!(signal.send(&()), 0);
    }

    #[test]
    fn test_signal_default() {
        let signal: Signal<i32> = Signal::default();
        assert_eq!(signal.receiver_count(), 0);
    }
}
