//! Menu events
//!
//! Event kinds are numbered in three non-overlapping bands so routing can be
//! decided with a range check:
//!
//! ```text
//!   0..100   common      noop, cursor moves, enter, escape
//! 100..200   internal    focus/select notifications and engine directives
//! 200..      item value  opaque payloads for the selected item
//! ```

use heapless::Vec;
use muipp_display::NavigationEvent;

use crate::config::{MAX_BLOB_LEN, MAX_NAME_LEN};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed-capacity name used for pages, items and name-keyed directives
pub type Label = heapless::String<MAX_NAME_LEN>;

/// First code of the engine-internal band
pub const INTERNAL_BAND_START: u16 = 100;

/// First code of the item-value band
pub const ITEM_VALUE_BAND_START: u16 = 200;

/// Build a label, truncating at a char boundary if `text` is too long
pub fn label(text: &str) -> Label {
    let mut out = Label::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Event band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventBand {
    /// Shared vocabulary between engine and items
    Common,
    /// Synthesized or interpreted by the engine only
    Internal,
    /// Opaque to the engine, forwarded to the selected item
    ItemValue,
}

/// Event kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u16)]
pub enum EventKind {
    // Common band
    /// No operation
    #[default]
    Noop = 0,
    /// Cursor up, previous element or decrement
    MoveUp = 1,
    /// Cursor down, next element or increment
    MoveDown = 2,
    /// Cursor left, previous element or decrement
    MoveLeft = 3,
    /// Cursor right, next element or increment
    MoveRight = 4,
    /// Commit / ok
    Enter = 5,
    /// Return back, release selection
    Escape = 6,

    // Engine-internal band
    /// Item received cursor focus
    Focus = 100,
    /// Item lost cursor focus
    Unfocus = 101,
    /// Item was selected and now grabs navigation input
    Select = 102,
    /// Item released navigation input
    Unselect = 103,
    /// Switch to the page whose id is in `param`
    GoPageById = 104,
    /// Switch to the page whose name is the text payload
    GoPageByName = 105,
    /// Focus the item whose id is in `param` on the current page
    GoItemById = 106,
    /// Focus the item whose name is the text payload on the current page
    GoItemByName = 107,
    /// Go to the parent page, or quit from a root page
    PrevPage = 108,
    /// Hide the item whose id is in `param`
    HideItem = 109,
    /// Unhide the item whose id is in `param`
    UnhideItem = 110,
    /// Menu wants to close
    QuitMenu = 111,
    /// Focus the next focusable item on the page and select it
    NextItem = 112,
    /// Focus the previous focusable item on the page and select it
    PrevItem = 113,
    /// Switch to the next page in creation order, wrapping around
    NextPage = 114,
    /// Flip the hidden flag of the item whose id is in `param`
    HideToggle = 115,

    // Item-value band
    /// Absolute value in `param`
    Value = 200,
    /// Relative value in `param`
    Step = 201,
    /// Byte payload
    Blob = 202,
    /// Text payload
    String = 203,
    /// Application defined
    Custom1 = 204,
    /// Application defined
    Custom2 = 205,
    /// Application defined
    Custom3 = 206,
    /// Application defined
    Custom4 = 207,
    /// Application defined
    Custom5 = 208,
}

impl EventKind {
    /// Numeric code of this kind
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Parse a numeric code
    pub fn from_code(code: u16) -> Option<Self> {
        use EventKind::*;

        let kind = match code {
            0 => Noop,
            1 => MoveUp,
            2 => MoveDown,
            3 => MoveLeft,
            4 => MoveRight,
            5 => Enter,
            6 => Escape,
            100 => Focus,
            101 => Unfocus,
            102 => Select,
            103 => Unselect,
            104 => GoPageById,
            105 => GoPageByName,
            106 => GoItemById,
            107 => GoItemByName,
            108 => PrevPage,
            109 => HideItem,
            110 => UnhideItem,
            111 => QuitMenu,
            112 => NextItem,
            113 => PrevItem,
            114 => NextPage,
            115 => HideToggle,
            200 => Value,
            201 => Step,
            202 => Blob,
            203 => String,
            204 => Custom1,
            205 => Custom2,
            206 => Custom3,
            207 => Custom4,
            208 => Custom5,
            _ => return None,
        };
        Some(kind)
    }

    /// Band this kind belongs to
    pub fn band(self) -> EventBand {
        match self.code() {
            c if c < INTERNAL_BAND_START => EventBand::Common,
            c if c < ITEM_VALUE_BAND_START => EventBand::Internal,
            _ => EventBand::ItemValue,
        }
    }

    /// Returns true for the cursor movement kinds
    pub fn is_move(self) -> bool {
        matches!(
            self,
            EventKind::MoveUp | EventKind::MoveDown | EventKind::MoveLeft | EventKind::MoveRight
        )
    }

    /// Returns true for kinds that move backwards (up/left)
    pub fn is_backward(self) -> bool {
        matches!(self, EventKind::MoveUp | EventKind::MoveLeft)
    }
}

/// Opaque event payload
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Payload {
    /// No payload
    #[default]
    None,
    /// Text, e.g. a page name for `GoPageByName`
    Text(Label),
    /// Raw bytes for `Blob`
    Bytes(Vec<u8, MAX_BLOB_LEN>),
}

/// Event passed to and returned from the engine and items
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Event {
    /// Event kind
    pub kind: EventKind,
    /// Integer parameter (id, value, step)
    pub param: i32,
    /// Optional payload
    pub payload: Payload,
}

impl Event {
    /// Event without parameter or payload
    pub const fn new(kind: EventKind) -> Self {
        Self {
            kind,
            param: 0,
            payload: Payload::None,
        }
    }

    /// The no-op event
    pub const fn noop() -> Self {
        Self::new(EventKind::Noop)
    }

    /// Event with an integer parameter
    pub const fn with_param(kind: EventKind, param: i32) -> Self {
        Self {
            kind,
            param,
            payload: Payload::None,
        }
    }

    /// Event carrying a text payload (truncated to `MAX_NAME_LEN`)
    pub fn with_text(kind: EventKind, text: &str) -> Self {
        Self {
            kind,
            param: 0,
            payload: Payload::Text(label(text)),
        }
    }

    /// Event carrying a byte payload; `None` if it exceeds `MAX_BLOB_LEN`
    pub fn with_bytes(kind: EventKind, bytes: &[u8]) -> Option<Self> {
        let bytes = Vec::from_slice(bytes).ok()?;
        Some(Self {
            kind,
            param: bytes.len() as i32,
            payload: Payload::Bytes(bytes),
        })
    }

    /// Returns true for the no-op event
    pub fn is_noop(&self) -> bool {
        self.kind == EventKind::Noop
    }

    /// Text payload, if any
    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            Payload::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Byte payload, if any
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.payload {
            Payload::Bytes(bytes) => Some(bytes.as_slice()),
            _ => None,
        }
    }
}

impl From<EventKind> for Event {
    fn from(kind: EventKind) -> Self {
        Event::new(kind)
    }
}

impl From<NavigationEvent> for Event {
    fn from(nav: NavigationEvent) -> Self {
        let kind = match nav {
            NavigationEvent::Previous => EventKind::MoveUp,
            NavigationEvent::Next => EventKind::MoveDown,
            NavigationEvent::Select => EventKind::Enter,
            NavigationEvent::Back => EventKind::Escape,
        };
        Event::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands() {
        assert_eq!(EventKind::Noop.band(), EventBand::Common);
        assert_eq!(EventKind::Enter.band(), EventBand::Common);
        assert_eq!(EventKind::Escape.band(), EventBand::Common);
        assert_eq!(EventKind::Focus.band(), EventBand::Internal);
        assert_eq!(EventKind::PrevPage.band(), EventBand::Internal);
        assert_eq!(EventKind::QuitMenu.band(), EventBand::Internal);
        assert_eq!(EventKind::Value.band(), EventBand::ItemValue);
        assert_eq!(EventKind::Custom5.band(), EventBand::ItemValue);
    }

    #[test]
    fn test_code_lookup() {
        assert_eq!(EventKind::from_code(105), Some(EventKind::GoPageByName));
        assert_eq!(EventKind::from_code(201), Some(EventKind::Step));
        assert_eq!(EventKind::GoPageByName.code(), 105);
        assert_eq!(EventKind::from_code(115), Some(EventKind::HideToggle));
        assert_eq!(EventKind::NextItem.band(), EventBand::Internal);
        assert!(EventKind::from_code(7).is_none());
        assert!(EventKind::from_code(116).is_none());
        assert!(EventKind::from_code(150).is_none());
    }

    #[test]
    fn test_label_truncates_on_char_boundary() {
        let long = "ééééééééééééééééééééééé";
        let l = label(long);
        assert!(l.len() <= MAX_NAME_LEN);
        assert!(long.starts_with(l.as_str()));
        assert_eq!(label("Settings").as_str(), "Settings");
    }

    #[test]
    fn test_payload_accessors() {
        let e = Event::with_text(EventKind::GoPageByName, "Network");
        assert_eq!(e.text(), Some("Network"));
        assert_eq!(e.bytes(), None);

        let b = Event::with_bytes(EventKind::Blob, &[1, 2, 3]).unwrap();
        assert_eq!(b.bytes(), Some(&[1u8, 2, 3][..]));
        assert_eq!(b.param, 3);

        assert!(Event::with_bytes(EventKind::Blob, &[0; MAX_BLOB_LEN + 1]).is_none());
    }

    #[test]
    fn test_navigation_mapping() {
        assert_eq!(Event::from(NavigationEvent::Previous).kind, EventKind::MoveUp);
        assert_eq!(Event::from(NavigationEvent::Next).kind, EventKind::MoveDown);
        assert_eq!(Event::from(NavigationEvent::Select).kind, EventKind::Enter);
        assert_eq!(Event::from(NavigationEvent::Back).kind, EventKind::Escape);
    }

    #[test]
    fn test_move_predicates() {
        assert!(EventKind::MoveLeft.is_move());
        assert!(EventKind::MoveLeft.is_backward());
        assert!(!EventKind::MoveRight.is_backward());
        assert!(!EventKind::Enter.is_move());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_postcard_event() {
        let e = Event::with_text(EventKind::GoPageByName, "Audio");
        let bytes = postcard::to_allocvec(&e).unwrap();
        let back: Event = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(back, e);
    }
}
