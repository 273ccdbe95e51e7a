//! Signal stores for controls the application does not own.
//!
//! When a native control is owned by someone else and cannot be wrapped in a
//! [`Control`](super::Control), a [`ControlSignalTable`] keeps the signal
//! stores on the side, keyed by the identity of the control's `Arc`. Keys are
//! weak: the table never keeps a control alive, and a store whose control has
//! been dropped is discarded the next time the table is touched.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tactile_core::logging::targets;
use tactile_core::Signal;

use super::config::ControlConfig;
use super::event_kind::ControlEvent;
use super::source::ControlEventSource;
use super::store::SignalStore;

struct TableEntry<W> {
    control: Weak<W>,
    store: Arc<SignalStore>,
}

impl<W> TableEntry<W> {
    fn is_live(&self) -> bool {
        self.control.strong_count() > 0
    }
}

/// A weak-keyed side table of per-control signal stores.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tactile::control::{ControlEvent, ControlSignalTable};
/// use tactile::control::headless::HeadlessControl;
///
/// let table = ControlSignalTable::new();
/// let slider = Arc::new(HeadlessControl::new());
///
/// let a = table.signal_for(&slider, ControlEvent::ValueChanged);
/// let b = table.signal_for(&slider, ControlEvent::ValueChanged);
/// assert!(Arc::ptr_eq(&a, &b));
///
/// drop(slider);
/// assert_eq!(table.prune(), 1);
/// ```
pub struct ControlSignalTable<W> {
    entries: Mutex<HashMap<usize, TableEntry<W>>>,
    config: ControlConfig,
}

impl<W> Default for ControlSignalTable<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> ControlSignalTable<W> {
    /// Create an empty table with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ControlConfig::default())
    }

    /// Create an empty table whose stores use `config`.
    ///
    /// Thread affinity is not tracked per entry; `enforce_thread_affinity`
    /// is ignored.
    pub fn with_config(config: ControlConfig) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            config,
        }
    }

    /// Number of live controls with a store.
    pub fn len(&self) -> usize {
        self.entries.lock().values().filter(|entry| entry.is_live()).count()
    }

    /// Whether no live control has a store.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard the stores of controls that have been dropped.
    ///
    /// Returns the number of stores discarded.
    pub fn prune(&self) -> usize {
        let released = Self::take_released(&mut self.entries.lock());
        let removed = released.len();
        // Dropping a store drops its subscribers, which may touch this table.
        drop(released);
        if removed > 0 {
            tracing::debug!(target: targets::CONTROL, removed, "pruned released controls");
        }
        removed
    }

    /// Remove the entries of dropped controls and hand them back, so the
    /// caller can release them once the table lock is gone.
    fn take_released(entries: &mut HashMap<usize, TableEntry<W>>) -> Vec<TableEntry<W>> {
        let dead: Vec<usize> = entries
            .iter()
            .filter(|(_, entry)| !entry.is_live())
            .map(|(key, _)| *key)
            .collect();
        dead.into_iter().filter_map(|key| entries.remove(&key)).collect()
    }

    fn key(control: &Arc<W>) -> usize {
        Arc::as_ptr(control) as *const () as usize
    }
}

impl<W: ControlEventSource> ControlSignalTable<W> {
    /// The store of `control`, created on first use.
    ///
    /// Creating a store also discards the stores of dropped controls.
    pub fn store_for(&self, control: &Arc<W>) -> Arc<SignalStore> {
        // An entry's weak key pins the control's allocation, so an address
        // cannot be reused while its entry exists.
        let key = Self::key(control);
        let mut entries = self.entries.lock();

        if let Some(entry) = entries.get(&key) {
            return entry.store.clone();
        }

        let released = Self::take_released(&mut entries);
        let store = Arc::new(SignalStore::new(
            self.config.name.clone(),
            self.config.allocation,
        ));
        entries.insert(
            key,
            TableEntry {
                control: Arc::downgrade(control),
                store: store.clone(),
            },
        );
        drop(entries);
        drop(released);
        store
    }

    /// The signal for `kind` on `control`, created and wired on first use.
    pub fn signal_for(&self, control: &Arc<W>, kind: ControlEvent) -> Arc<Signal<()>> {
        // The table lock is not held while the native control registers.
        self.store_for(control).signal_for(kind, control.as_ref())
    }
}
