//! Input boundary
//!
//! Buttons and rotary encoders are reduced to four navigation intents before
//! they reach the menu engine. Debouncing and press timing stay with the
//! producer.

/// Navigation intent produced by an input device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavigationEvent {
    /// Cursor to the previous element (encoder counter-clockwise, "up" button)
    Previous,
    /// Cursor to the next element (encoder clockwise, "down" button)
    Next,
    /// Commit / enter (short press)
    Select,
    /// Return back (long press)
    Back,
}

impl NavigationEvent {
    /// Map a signed encoder delta to a navigation event
    ///
    /// Positive deltas are clockwise. Zero yields `None`.
    pub fn from_rotation(delta: i8) -> Option<Self> {
        match delta {
            d if d > 0 => Some(NavigationEvent::Next),
            d if d < 0 => Some(NavigationEvent::Previous),
            _ => None,
        }
    }

    /// Map a button press to a navigation event
    pub fn from_press(long_press: bool) -> Self {
        if long_press {
            NavigationEvent::Back
        } else {
            NavigationEvent::Select
        }
    }

    /// Returns true if this event moves the cursor
    pub fn is_movement(&self) -> bool {
        matches!(self, NavigationEvent::Previous | NavigationEvent::Next)
    }
}

/// Source of navigation events
///
/// Implemented by whatever owns the buttons or encoder. The application loop
/// polls it and forwards each event to the menu one at a time.
pub trait InputSource {
    /// Return the next pending event, if any
    fn poll(&mut self) -> Option<NavigationEvent>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted<'a> {
        events: &'a [NavigationEvent],
    }

    impl InputSource for Scripted<'_> {
        fn poll(&mut self) -> Option<NavigationEvent> {
            let (first, rest) = self.events.split_first()?;
            self.events = rest;
            Some(*first)
        }
    }

    #[test]
    fn test_rotation_mapping() {
        assert_eq!(NavigationEvent::from_rotation(1), Some(NavigationEvent::Next));
        assert_eq!(NavigationEvent::from_rotation(3), Some(NavigationEvent::Next));
        assert_eq!(
            NavigationEvent::from_rotation(-1),
            Some(NavigationEvent::Previous)
        );
        assert_eq!(NavigationEvent::from_rotation(0), None);
    }

    #[test]
    fn test_press_mapping() {
        assert_eq!(NavigationEvent::from_press(false), NavigationEvent::Select);
        assert_eq!(NavigationEvent::from_press(true), NavigationEvent::Back);
    }

    #[test]
    fn test_is_movement() {
        assert!(NavigationEvent::Next.is_movement());
        assert!(NavigationEvent::Previous.is_movement());
        assert!(!NavigationEvent::Select.is_movement());
        assert!(!NavigationEvent::Back.is_movement());
    }

    #[test]
    fn test_input_source_drains() {
        let script = [NavigationEvent::Next, NavigationEvent::Select];
        let mut source = Scripted { events: &script };

        assert_eq!(source.poll(), Some(NavigationEvent::Next));
        assert_eq!(source.poll(), Some(NavigationEvent::Select));
        assert_eq!(source.poll(), None);
    }
}
