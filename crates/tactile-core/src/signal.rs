//! Signal/slot system for Tactile.
//!
//! This module provides the observable channel that every control event is
//! delivered through. Signals are emitted when something happens, and the
//! connected slots (callbacks) are invoked in response.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//! - [`ConnectionGuard`] - RAII guard that disconnects when dropped
//!
//! # Delivery
//!
//! Emission is synchronous: [`Signal::emit`] invokes every connected slot on
//! the calling thread, in the order the slots were connected, before it
//! returns. The set of slots is captured when emission starts, so a slot may
//! connect, disconnect, or emit again without deadlocking. Slots connected
//! during an emission are first invoked by the next one.
//!
//! # Example
//!
//! ```
//! use tactile_core::Signal;
//!
//! // Create a signal that passes a string argument
//! let text_changed = Signal::<String>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! // Emit the signal
//! text_changed.emit("Hello, World!".to_string());
//!
//! // Disconnect when done
//! text_changed.disconnect(conn_id);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::error::SignalError;
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    /// The ID remains valid until the connection is explicitly disconnected or
    /// the signal is dropped.
    ///
    /// # Related
    ///
    /// - [`Signal::connect`] - Returns a `ConnectionId`
    /// - [`Signal::disconnect`] - Removes a connection by ID
    /// - [`ConnectionGuard`] - RAII alternative that auto-disconnects
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// Connected slots plus the order they were connected in.
///
/// The slot map recycles vacated slots, so its iteration order is not the
/// connection order. `order` is the source of truth for delivery.
struct Connections<Args> {
    slots: SlotMap<ConnectionId, Slot<Args>>,
    order: Vec<ConnectionId>,
}

impl<Args> Connections<Args> {
    fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    fn insert(&mut self, slot: Slot<Args>) -> ConnectionId {
        let id = self.slots.insert(slot);
        self.order.push(id);
        id
    }

    fn remove(&mut self, id: ConnectionId) -> bool {
        if self.slots.remove(id).is_none() {
            return false;
        }
        self.order.retain(|&existing| existing != id);
        true
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.order.clear();
    }

    fn snapshot(&self) -> Vec<Slot<Args>> {
        self.order
            .iter()
            .filter_map(|id| self.slots.get(*id).cloned())
            .collect()
    }
}

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked with a reference
/// to the provided arguments.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no payload (every control event signal is a `Signal<()>`), or a
///   tuple like `(String, i32)` for multiple arguments.
///
/// # Thread Safety
///
/// `Signal<Args>` is `Send + Sync`. Slots must be `Send + Sync` and run on
/// whichever thread calls [`emit`](Self::emit).
///
/// # Related Types
///
/// - [`ConnectionId`] - Returned by [`connect`](Self::connect), used to disconnect
/// - [`ConnectionGuard`] - RAII-style connection that auto-disconnects on drop
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<Connections<Args>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().order.len())
            .field("blocked", &self.blocked.load(Ordering::Relaxed))
            .finish()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(Connections::new()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    ///
    /// # Example
    ///
    /// ```
    /// use tactile_core::Signal;
    ///
    /// let signal = Signal::<String>::new();
    /// let id = signal.connect(|s| println!("Got: {}", s));
    /// signal.emit("Hello".to_string());
    /// assert!(signal.disconnect(id));
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id)
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().order.len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing. Emissions that happen
    /// while blocked are dropped, not replayed.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots in connection order.
    ///
    /// If the signal is blocked, this does nothing.
    #[tracing::instrument(skip_all, target = "tactile_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        // Release the lock before invoking slots so they may reenter.
        let slots = self.connections.lock().snapshot();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in &slots {
            slot(&args);
        }
    }

    /// Connect a slot that is disconnected when the returned guard is dropped.
    ///
    /// The guard only holds a weak reference, so it never keeps the signal
    /// alive; if the signal is gone by the time the guard drops, nothing
    /// happens.
    pub fn connect_scoped<F>(self: &Arc<Self>, slot: F) -> ConnectionGuard<Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connect(slot);
        ConnectionGuard {
            signal: Arc::downgrade(self),
            id: Some(id),
        }
    }
}

/// A connection guard that automatically disconnects when dropped.
///
/// Created via [`Signal::connect_scoped`].
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicI32, Ordering};
/// use std::sync::Arc;
/// use tactile_core::Signal;
///
/// let signal = Arc::new(Signal::<i32>::new());
/// let counter = Arc::new(AtomicI32::new(0));
/// {
///     let counter_clone = counter.clone();
///     let _guard = signal.connect_scoped(move |&n| {
///         counter_clone.fetch_add(n, Ordering::SeqCst);
///     });
///     signal.emit(42);  // counter = 42
/// }
/// signal.emit(43);  // Nothing happens - connection was dropped
/// assert_eq!(counter.load(Ordering::SeqCst), 42);
/// ```
pub struct ConnectionGuard<Args: 'static> {
    signal: Weak<Signal<Args>>,
    id: Option<ConnectionId>,
}

impl<Args: 'static> ConnectionGuard<Args> {
    /// The ID of the guarded connection.
    ///
    /// Returns `None` once the guard has been disconnected explicitly.
    pub fn id(&self) -> Option<ConnectionId> {
        self.id
    }

    /// Disconnect now instead of on drop.
    ///
    /// Fails with [`SignalError::SignalDropped`] if the signal no longer
    /// exists, and with [`SignalError::InvalidConnection`] if the connection
    /// was already removed through [`Signal::disconnect`] or
    /// [`Signal::disconnect_all`].
    pub fn disconnect(mut self) -> Result<(), SignalError> {
        let id = self.id.take().ok_or(SignalError::InvalidConnection)?;
        let signal = self.signal.upgrade().ok_or(SignalError::SignalDropped)?;
        if signal.disconnect(id) {
            Ok(())
        } else {
            Err(SignalError::InvalidConnection)
        }
    }
}

impl<Args: 'static> Drop for ConnectionGuard<Args> {
    fn drop(&mut self) {
        if let (Some(id), Some(signal)) = (self.id.take(), self.signal.upgrade()) {
            signal.disconnect(id);
        }
    }
}

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);
static_assertions::assert_impl_all!(ConnectionGuard<()>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_signal_connect_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(42);
        signal.emit(100);

        let values = received.lock();
        assert_eq!(*values, vec![42, 100]);
    }

    #[test]
    fn test_signal_unit_args() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = count.clone();
        signal.connect(move |()| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_signal_disconnect() {
        let signal = Signal::<i32>::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = count.clone();
        let id = signal.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.emit(1);
        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));
        signal.emit(2);

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_signal_disconnect_all() {
        let signal = Signal::<()>::new();
        signal.connect(|_| {});
        signal.connect(|_| {});
        assert_eq!(signal.connection_count(), 2);

        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_signal_blocked() {
        let signal = Signal::<i32>::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = count.clone();
        signal.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.set_blocked(true);
        assert!(signal.is_blocked());
        signal.emit(1);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        signal.set_blocked(false);
        signal.emit(2);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_emit_follows_connection_order_after_slot_reuse() {
        let signal = Signal::<()>::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let o = order.clone();
        let first = signal.connect(move |_| o.lock().push("first"));
        let o = order.clone();
        signal.connect(move |_| o.lock().push("second"));

        // The vacated slot gets reused by the next connection.
        signal.disconnect(first);
        let o = order.clone();
        signal.connect(move |_| o.lock().push("third"));

        signal.emit(());
        assert_eq!(*order.lock(), vec!["second", "third"]);
    }

    #[test]
    fn test_slot_can_reenter_signal() {
        let signal = Arc::new(Signal::<()>::new());
        let count = Arc::new(AtomicUsize::new(0));

        let weak = Arc::downgrade(&signal);
        let count_clone = count.clone();
        signal.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
            if let Some(signal) = weak.upgrade() {
                // Connecting from inside a slot must not deadlock.
                signal.connect(|_| {});
            }
        });

        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(signal.connection_count(), 2);
    }

    #[test]
    fn test_connect_scoped_disconnects_on_drop() {
        let signal = Arc::new(Signal::<i32>::new());
        let count = Arc::new(AtomicUsize::new(0));

        {
            let count_clone = count.clone();
            let guard = signal.connect_scoped(move |_| {
                count_clone.fetch_add(1, Ordering::SeqCst);
            });
            assert!(guard.id().is_some());
            signal.emit(1);
        }

        signal.emit(2);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_guard_disconnect_errors() {
        let signal = Arc::new(Signal::<()>::new());

        let guard = signal.connect_scoped(|_| {});
        assert_eq!(guard.disconnect(), Ok(()));

        let guard = signal.connect_scoped(|_| {});
        signal.disconnect_all();
        assert_eq!(guard.disconnect(), Err(SignalError::InvalidConnection));

        let guard = signal.connect_scoped(|_| {});
        drop(signal);
        assert_eq!(guard.disconnect(), Err(SignalError::SignalDropped));
    }
}
