//! Control configuration.

use super::source::ControlEventSource;
use super::Control;

/// Default name used in log fields when none is configured.
const DEFAULT_CONTROL_NAME: &str = "control";

/// Capacity hint for a control's signal store.
///
/// Both variants build the store with the control, and both create signals
/// and register with the native control only on first request. `Eager` only
/// pre-sizes the store's map for all fourteen kinds, so adding signals never
/// reallocates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StoreAllocation {
    /// Grow the store as signals are requested.
    #[default]
    Lazy,
    /// Reserve map capacity for every event kind up front.
    Eager,
}

/// Configuration for creating a [`Control`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControlConfig {
    /// Name reported in log fields.
    pub name: String,
    /// Capacity hint for the signal store.
    pub allocation: StoreAllocation,
    /// Whether accessors check they run on the thread that built the control.
    ///
    /// Checks only run while `tactile_core::are_thread_checks_enabled()`
    /// returns `true`.
    pub enforce_thread_affinity: bool,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_CONTROL_NAME.to_string(),
            allocation: StoreAllocation::Lazy,
            enforce_thread_affinity: true,
        }
    }
}

impl ControlConfig {
    /// Create a new configuration with the given control name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Builder for creating controls with custom configuration.
///
/// # Example
///
/// ```
/// use tactile::control::{ControlBuilder, StoreAllocation};
/// use tactile::control::headless::HeadlessControl;
///
/// let control = ControlBuilder::new()
///     .name("volume")
///     .allocation(StoreAllocation::Eager)
///     .build(HeadlessControl::new());
/// assert_eq!(control.name(), "volume");
/// ```
#[derive(Debug, Default)]
pub struct ControlBuilder {
    config: ControlConfig,
}

impl ControlBuilder {
    /// Create a new ControlBuilder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: ControlConfig) -> Self {
        Self { config }
    }

    /// Set the control name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the store capacity hint.
    pub fn allocation(mut self, allocation: StoreAllocation) -> Self {
        self.config.allocation = allocation;
        self
    }

    /// Enable or disable thread affinity enforcement.
    pub fn enforce_thread_affinity(mut self, enforce: bool) -> Self {
        self.config.enforce_thread_affinity = enforce;
        self
    }

    /// The configuration built so far.
    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// Wrap a native control.
    pub fn build<W: ControlEventSource>(self, native: W) -> Control<W> {
        Control::with_config(native, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ControlConfig::default();
        assert_eq!(config.name, "control");
        assert_eq!(config.allocation, StoreAllocation::Lazy);
        assert!(config.enforce_thread_affinity);
    }

    #[test]
    fn test_builder_overrides() {
        let builder = ControlBuilder::from_config(ControlConfig::with_name("slider"))
            .allocation(StoreAllocation::Eager)
            .enforce_thread_affinity(false);

        let config = builder.config();
        assert_eq!(config.name, "slider");
        assert_eq!(config.allocation, StoreAllocation::Eager);
        assert!(!config.enforce_thread_affinity);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serde_roundtrip() {
        let config = ControlConfig {
            name: "slider".to_string(),
            allocation: StoreAllocation::Eager,
            enforce_thread_affinity: false,
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""allocation":"eager""#));
        let parsed: ControlConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_missing_fields_use_defaults() {
        let parsed: ControlConfig = serde_json::from_str(r#"{"name":"volume"}"#).unwrap();
        assert_eq!(parsed, ControlConfig::with_name("volume"));
    }
}
