//! Native event masks.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use super::event_kind::ControlEvent;

/// A set of control events represented as native bit flags.
///
/// Native controls register targets and deliver notifications by mask. Bits
/// that no [`ControlEvent`] occupies are preserved but never yielded by
/// [`iter`](Self::iter).
///
/// # Example
///
/// ```
/// use tactile::control::{ControlEvent, ControlEvents};
///
/// let events = ControlEvent::TouchDown | ControlEvent::TouchUpInside;
/// assert!(events.contains(ControlEvent::TouchDown));
/// assert!(!events.contains(ControlEvent::ValueChanged));
/// assert!(ControlEvents::ALL_TOUCH_EVENTS.contains_all(events));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ControlEvents(u32);

impl ControlEvents {
    /// No events.
    pub const NONE: ControlEvents = ControlEvents(0);
    /// Every touch event.
    pub const ALL_TOUCH_EVENTS: ControlEvents = ControlEvents(0x0000_0FFF);
    /// Every text editing event.
    pub const ALL_EDITING_EVENTS: ControlEvents = ControlEvents(0x000F_0000);
    /// Every event bit, including ones reserved by the native toolkit.
    pub const ALL_EVENTS: ControlEvents = ControlEvents(0xFFFF_FFFF);

    /// An empty set.
    pub const fn empty() -> Self {
        Self::NONE
    }

    /// Create from raw native bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Create from a single event kind.
    pub const fn from_event(event: ControlEvent) -> Self {
        Self(event.bits())
    }

    /// The raw native bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Check if this set contains the given event.
    pub fn contains(self, event: ControlEvent) -> bool {
        (self.0 & event.bits()) != 0
    }

    /// Check if this set contains every event in `other`.
    pub fn contains_all(self, other: ControlEvents) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check if this set shares at least one bit with `other`.
    pub fn intersects(self, other: ControlEvents) -> bool {
        (self.0 & other.0) != 0
    }

    /// Check if this set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the known events in this set, in declaration order.
    pub fn iter(self) -> impl Iterator<Item = ControlEvent> {
        ControlEvent::all().filter(move |&event| self.contains(event))
    }

    /// The event kind this set holds, if it holds exactly one.
    pub fn single(self) -> Option<ControlEvent> {
        let mut events = self.iter();
        match (events.next(), events.next()) {
            (Some(event), None) if event.bits() == self.0 => Some(event),
            _ => None,
        }
    }
}

impl From<ControlEvent> for ControlEvents {
    fn from(event: ControlEvent) -> Self {
        Self::from_event(event)
    }
}

impl FromIterator<ControlEvent> for ControlEvents {
    fn from_iter<I: IntoIterator<Item = ControlEvent>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, |set, event| set | event)
    }
}

impl fmt::Display for ControlEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(none)");
        }
        let mut first = true;
        for event in self.iter() {
            if !first {
                f.write_str(" | ")?;
            }
            f.write_str(event.identifier())?;
            first = false;
        }
        let known: u32 = self.iter().map(ControlEvent::bits).sum();
        let unknown = self.0 & !known;
        if unknown != 0 {
            if !first {
                f.write_str(" | ")?;
            }
            write!(f, "{unknown:#010x}")?;
        }
        Ok(())
    }
}

impl BitOr for ControlEvents {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        ControlEvents(self.0 | rhs.0)
    }
}

impl BitOrAssign for ControlEvents {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ControlEvents {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        ControlEvents(self.0 & rhs.0)
    }
}

impl BitOr<ControlEvent> for ControlEvents {
    type Output = Self;

    fn bitor(self, rhs: ControlEvent) -> Self::Output {
        self | Self::from_event(rhs)
    }
}

impl BitOrAssign<ControlEvent> for ControlEvents {
    fn bitor_assign(&mut self, rhs: ControlEvent) {
        self.0 |= rhs.bits();
    }
}

impl BitOr<ControlEvents> for ControlEvent {
    type Output = ControlEvents;

    fn bitor(self, rhs: ControlEvents) -> Self::Output {
        ControlEvents::from_event(self) | rhs
    }
}

impl BitOr for ControlEvent {
    type Output = ControlEvents;

    fn bitor(self, rhs: Self) -> Self::Output {
        ControlEvents::from_event(self) | ControlEvents::from_event(rhs)
    }
}
