//! Thread affinity verification for Tactile.
//!
//! Native controls live on the thread that drives the UI event loop. The
//! types in this crate are `Send + Sync`, so nothing stops application code
//! from touching a control elsewhere; [`ThreadAffinity`] turns that mistake
//! into an immediate, descriptive panic instead of an event that silently
//! fires on the wrong thread.
//!
//! # Usage
//!
//! ```
//! use tactile_core::thread_check::ThreadAffinity;
//!
//! struct Slider {
//!     affinity: ThreadAffinity,
//!     value: std::cell::Cell<f32>,
//! }
//!
//! impl Slider {
//!     fn new() -> Self {
//!         Self {
//!             affinity: ThreadAffinity::current(),
//!             value: std::cell::Cell::new(0.0),
//!         }
//!     }
//!
//!     fn set_value(&self, v: f32) {
//!         // Panics if checks are enabled and we are on the wrong thread
//!         self.affinity.verify("Slider::set_value");
//!         self.value.set(v);
//!     }
//! }
//! ```
//!
//! # Thread Safety Checks
//!
//! - [`ThreadAffinity::assert_same_thread`] is always active.
//! - [`ThreadAffinity::verify`] only runs while checks are enabled, which is
//!   the default in debug builds. Use [`set_thread_checks_enabled`] to
//!   override that.
//! - [`ThreadAffinity::check`] never panics and reports a
//!   [`TactileError::WrongThread`] instead.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::ThreadId;

use crate::error::{Result, TactileError};
use crate::logging::targets;

/// Flag to enable/disable runtime thread checks globally.
static THREAD_CHECKS_ENABLED: AtomicBool = AtomicBool::new(cfg!(debug_assertions));

/// Enable or disable runtime thread checks.
///
/// By default, thread checks are enabled in debug builds and disabled in
/// release builds.
pub fn set_thread_checks_enabled(enabled: bool) {
    THREAD_CHECKS_ENABLED.store(enabled, Ordering::SeqCst);
}

/// Check if runtime thread checks are currently enabled.
#[inline]
pub fn are_thread_checks_enabled() -> bool {
    THREAD_CHECKS_ENABLED.load(Ordering::Relaxed)
}

/// Thread affinity tracker.
///
/// Records the thread on which an object was created and verifies that
/// subsequent operations occur on the same thread.
#[derive(Debug, Clone, Copy)]
pub struct ThreadAffinity {
    thread_id: ThreadId,
}

impl Default for ThreadAffinity {
    fn default() -> Self {
        Self::current()
    }
}

impl ThreadAffinity {
    /// Create a new thread affinity tracker for the current thread.
    #[inline]
    pub fn current() -> Self {
        Self {
            thread_id: std::thread::current().id(),
        }
    }

    /// Get the thread ID this affinity is bound to.
    #[inline]
    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }

    /// Check if the current thread matches this affinity.
    #[inline]
    pub fn is_same_thread(&self) -> bool {
        std::thread::current().id() == self.thread_id
    }

    /// Report a wrong-thread access as an error instead of panicking.
    ///
    /// Unlike [`verify`](Self::verify), this ignores the global enable flag.
    pub fn check(&self) -> Result<()> {
        let actual = std::thread::current().id();
        if actual == self.thread_id {
            Ok(())
        } else {
            Err(TactileError::WrongThread {
                expected: self.thread_id,
                actual,
            })
        }
    }

    /// Assert that we are on the same thread as the affinity.
    ///
    /// This always runs (debug and release builds).
    ///
    /// # Panics
    ///
    /// Panics with a descriptive message if called from a different thread.
    #[inline]
    pub fn assert_same_thread(&self) {
        self.assert_same_thread_with_msg("object accessed from wrong thread")
    }

    /// Assert that we are on the same thread, with a custom message.
    ///
    /// # Panics
    ///
    /// Panics if called from a different thread.
    pub fn assert_same_thread_with_msg(&self, msg: &str) {
        if !self.is_same_thread() {
            self.panic_wrong_thread(msg);
        }
    }

    /// Assert the affinity only while thread checks are enabled.
    ///
    /// # Panics
    ///
    /// Panics if checks are enabled and this is called from a different thread.
    #[inline]
    pub fn verify(&self, msg: &str) {
        if are_thread_checks_enabled() {
            self.assert_same_thread_with_msg(msg);
        }
    }

    #[cold]
    #[inline(never)]
    fn panic_wrong_thread(&self, msg: &str) -> ! {
        let current = std::thread::current();
        let current_name = current.name().unwrap_or("<unnamed>");
        let current_id = current.id();

        tracing::error!(
            target: targets::THREAD,
            expected = ?self.thread_id,
            actual = ?current_id,
            "{msg}"
        );

        panic!(
            "\n\
            ══════════════════════════════════════════════════════════════════════\n\
            THREAD AFFINITY VIOLATION\n\
            ══════════════════════════════════════════════════════════════════════\n\
            \n\
            {msg}\n\
            \n\
            Object was created on thread: {:?}\n\
            Current thread: \"{current_name}\" (ID: {current_id:?})\n\
            \n\
            Controls and their signals must only be accessed from the thread\n\
            that created them, normally the thread running the UI event loop.\n\
            \n\
            POSSIBLE SOLUTIONS:\n\
            \n\
            1. Post the operation to the UI thread\n\
            2. Subscribe once on the UI thread and forward values over a channel\n\
            3. Disable affinity enforcement for controls that are shared on purpose\n\
            \n\
            ══════════════════════════════════════════════════════════════════════",
            self.thread_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_thread_affinity_same_thread() {
        let affinity = ThreadAffinity::current();
        assert!(affinity.is_same_thread());
        assert!(affinity.check().is_ok());
        // Should not panic
        affinity.assert_same_thread();
    }

    #[test]
    fn test_thread_affinity_different_thread() {
        let affinity = ThreadAffinity::current();

        let result = Arc::new(AtomicBool::new(false));
        let result_clone = result.clone();

        std::thread::spawn(move || {
            result_clone.store(!affinity.is_same_thread(), Ordering::SeqCst);
        })
        .join()
        .unwrap();

        assert!(
            result.load(Ordering::SeqCst),
            "is_same_thread() should return false from different thread"
        );
    }

    #[test]
    fn test_thread_affinity_check_reports_wrong_thread() {
        let affinity = ThreadAffinity::current();
        let expected = affinity.thread_id();

        let err = std::thread::spawn(move || affinity.check())
            .join()
            .unwrap()
            .unwrap_err();

        match err {
            TactileError::WrongThread { expected: e, actual } => {
                assert_eq!(e, expected);
                assert_ne!(actual, expected);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_thread_affinity_panic_on_wrong_thread() {
        let affinity = ThreadAffinity::current();

        let result = std::thread::spawn(move || {
            affinity.assert_same_thread();
        })
        .join();

        assert!(result.is_err(), "Expected thread to panic with affinity violation");
    }

    #[test]
    fn test_thread_checks_enabled_flag() {
        let original = are_thread_checks_enabled();

        set_thread_checks_enabled(true);
        assert!(are_thread_checks_enabled());

        set_thread_checks_enabled(false);
        assert!(!are_thread_checks_enabled());

        set_thread_checks_enabled(original);
    }

    #[test]
    fn test_thread_affinity_default() {
        let affinity = ThreadAffinity::default();
        assert!(affinity.is_same_thread());
        affinity.verify("same thread never panics");
    }
}
