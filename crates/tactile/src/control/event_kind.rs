//! The closed set of interaction events a control can raise.

use std::fmt;
use std::str::FromStr;

use crate::error::ControlError;

use super::events::ControlEvents;

/// An interaction event raised by a native control.
///
/// Each kind has a stable [`identifier`](Self::identifier), used as the key
/// of a control's signal store, and the native bit it occupies in a
/// [`ControlEvents`] mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlEvent {
    /// A touch went down inside the control.
    TouchDown,
    /// A repeated touch went down inside the control (tap count > 1).
    TouchDownRepeat,
    /// A touch was dragged within the control's bounds.
    TouchDragInside,
    /// A touch was dragged outside the control's bounds.
    TouchDragOutside,
    /// A touch was dragged from outside into the control's bounds.
    TouchDragEnter,
    /// A touch was dragged from inside out of the control's bounds.
    TouchDragExit,
    /// A touch was lifted inside the control's bounds.
    TouchUpInside,
    /// A touch was lifted outside the control's bounds.
    TouchUpOutside,
    /// The system cancelled the current touch.
    TouchCancel,
    /// The control's value changed.
    ValueChanged,
    /// A text control began editing.
    EditingDidBegin,
    /// The text of a text control changed.
    EditingChanged,
    /// A text control stopped editing.
    EditingDidEnd,
    /// A text control stopped editing because the return key was pressed.
    EditingDidEndOnExit,
}

impl ControlEvent {
    /// Every event kind, in declaration order.
    pub const ALL: [ControlEvent; 14] = [
        Self::TouchDown,
        Self::TouchDownRepeat,
        Self::TouchDragInside,
        Self::TouchDragOutside,
        Self::TouchDragEnter,
        Self::TouchDragExit,
        Self::TouchUpInside,
        Self::TouchUpOutside,
        Self::TouchCancel,
        Self::ValueChanged,
        Self::EditingDidBegin,
        Self::EditingChanged,
        Self::EditingDidEnd,
        Self::EditingDidEndOnExit,
    ];

    /// Iterate over every event kind.
    pub fn all() -> impl Iterator<Item = ControlEvent> {
        Self::ALL.into_iter()
    }

    /// The stable identifier of this kind.
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::TouchDown => "TouchDown",
            Self::TouchDownRepeat => "TouchDownRepeat",
            Self::TouchDragInside => "TouchDragInside",
            Self::TouchDragOutside => "TouchDragOutside",
            Self::TouchDragEnter => "TouchDragEnter",
            Self::TouchDragExit => "TouchDragExit",
            Self::TouchUpInside => "TouchUpInside",
            Self::TouchUpOutside => "TouchUpOutside",
            Self::TouchCancel => "TouchCancel",
            Self::ValueChanged => "ValueChanged",
            Self::EditingDidBegin => "EditingDidBegin",
            Self::EditingChanged => "EditingChanged",
            Self::EditingDidEnd => "EditingDidEnd",
            Self::EditingDidEndOnExit => "EditingDidEndOnExit",
        }
    }

    /// The native bit this kind occupies in a [`ControlEvents`] mask.
    pub const fn bits(self) -> u32 {
        match self {
            Self::TouchDown => 1 << 0,
            Self::TouchDownRepeat => 1 << 1,
            Self::TouchDragInside => 1 << 2,
            Self::TouchDragOutside => 1 << 3,
            Self::TouchDragEnter => 1 << 4,
            Self::TouchDragExit => 1 << 5,
            Self::TouchUpInside => 1 << 6,
            Self::TouchUpOutside => 1 << 7,
            Self::TouchCancel => 1 << 8,
            Self::ValueChanged => 1 << 12,
            Self::EditingDidBegin => 1 << 16,
            Self::EditingChanged => 1 << 17,
            Self::EditingDidEnd => 1 << 18,
            Self::EditingDidEndOnExit => 1 << 19,
        }
    }

    /// Look up a kind by its identifier.
    pub fn from_identifier(identifier: &str) -> Option<ControlEvent> {
        Self::all().find(|kind| kind.identifier() == identifier)
    }

    /// Whether this is one of the touch kinds.
    pub fn is_touch_event(self) -> bool {
        ControlEvents::ALL_TOUCH_EVENTS.contains(self)
    }

    /// Whether this is one of the text editing kinds.
    pub fn is_editing_event(self) -> bool {
        ControlEvents::ALL_EDITING_EVENTS.contains(self)
    }
}

impl fmt::Display for ControlEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for ControlEvent {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s).ok_or_else(|| ControlError::unknown_event(s))
    }
}

impl TryFrom<ControlEvents> for ControlEvent {
    type Error = ControlError;

    fn try_from(events: ControlEvents) -> Result<Self, Self::Error> {
        events.single().ok_or(ControlError::NotSingleEvent(events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identifiers_are_unique() {
        let identifiers: HashSet<_> = ControlEvent::all().map(ControlEvent::identifier).collect();
        assert_eq!(identifiers.len(), ControlEvent::ALL.len());
    }

    #[test]
    fn test_bits_are_single_and_unique() {
        let mut seen = 0u32;
        for kind in ControlEvent::all() {
            assert_eq!(kind.bits().count_ones(), 1, "{kind} must occupy one bit");
            assert_eq!(seen & kind.bits(), 0, "{kind} shares a bit");
            seen |= kind.bits();
        }
    }

    #[test]
    fn test_identifier_lookup() {
        for kind in ControlEvent::all() {
            assert_eq!(ControlEvent::from_identifier(kind.identifier()), Some(kind));
            assert_eq!(kind.to_string().parse::<ControlEvent>().unwrap(), kind);
        }
        assert_eq!(ControlEvent::from_identifier("touchDown"), None);
    }

    #[test]
    fn test_parse_unknown_identifier() {
        let err = "Hover".parse::<ControlEvent>().unwrap_err();
        assert!(matches!(err, ControlError::UnknownEvent(ref name) if name == "Hover"));
    }

    #[test]
    fn test_classification() {
        assert!(ControlEvent::TouchCancel.is_touch_event());
        assert!(!ControlEvent::TouchCancel.is_editing_event());
        assert!(ControlEvent::EditingChanged.is_editing_event());
        assert!(!ControlEvent::ValueChanged.is_touch_event());
        assert!(!ControlEvent::ValueChanged.is_editing_event());
    }

    #[test]
    fn test_try_from_mask() {
        let single = ControlEvents::from(ControlEvent::ValueChanged);
        assert_eq!(ControlEvent::try_from(single).unwrap(), ControlEvent::ValueChanged);

        let pair = ControlEvent::TouchDown | ControlEvent::TouchUpInside;
        assert!(matches!(
            ControlEvent::try_from(pair),
            Err(ControlError::NotSingleEvent(events)) if events == pair
        ));
        assert!(ControlEvent::try_from(ControlEvents::empty()).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_identifiers() {
        for kind in ControlEvent::all() {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.identifier()));
            assert_eq!(serde_json::from_str::<ControlEvent>(&json).unwrap(), kind);
        }
        assert!(serde_json::from_str::<ControlEvent>(r#""Hover""#).is_err());
    }
}
