//! Menu item capability contract
//!
//! Every widget implements [`MenuItem`] by embedding an [`ItemCore`] that
//! holds identity, capability flags and transient state. The engine only
//! ever talks to items through this trait.

use muipp_display::{DisplayBackend, DisplayError};

use crate::event::{label, Event, EventKind, Label};
use crate::id::ItemId;
use crate::page::Page;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Item capability flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemOptions {
    /// Item can be selected and then grabs cursor/enter/escape input.
    /// A non-selectable item can still be focused and receives `enter`.
    pub selectable: bool,
    /// Item can be neither focused nor selected (titles, decorations)
    pub constant: bool,
}

impl Default for ItemOptions {
    fn default() -> Self {
        Self {
            selectable: true,
            constant: false,
        }
    }
}

impl ItemOptions {
    /// Selectable, focusable item
    pub const SELECTABLE: Self = Self {
        selectable: true,
        constant: false,
    };

    /// Focusable item that reacts to `enter` without grabbing the cursor
    pub const FOCUSABLE: Self = Self {
        selectable: false,
        constant: false,
    };

    /// Passive item, never focused
    pub const CONSTANT: Self = Self {
        selectable: false,
        constant: true,
    };
}

/// State shared by every item implementation
#[derive(Debug, Clone)]
pub struct ItemCore {
    id: ItemId,
    name: Label,
    options: ItemOptions,
    focused: bool,
    hidden: bool,
    on_escape: EventKind,
}

impl ItemCore {
    /// Create item state with the given capabilities
    pub fn new(id: ItemId, name: &str, options: ItemOptions) -> Self {
        Self {
            id,
            name: label(name),
            options,
            focused: false,
            hidden: false,
            on_escape: EventKind::Escape,
        }
    }

    /// Item id
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Item name
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Replace the item name (truncated to `MAX_NAME_LEN`)
    pub fn set_name(&mut self, name: &str) {
        self.name = label(name);
    }

    /// Capability flags
    pub fn options(&self) -> ItemOptions {
        self.options
    }

    /// Mutable capability flags
    pub fn options_mut(&mut self) -> &mut ItemOptions {
        &mut self.options
    }

    /// Whether the item currently holds cursor focus
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Set by the engine on focus changes
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Whether the item should skip drawing
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hide or unhide the item
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Event kind returned when the item receives `escape` while selected
    pub fn on_escape(&self) -> EventKind {
        self.on_escape
    }

    /// Change the escape answer, e.g. to `PrevPage` or `QuitMenu`
    pub fn set_on_escape(&mut self, kind: EventKind) {
        self.on_escape = kind;
    }

    /// The escape answer as an event
    pub fn escape_event(&self) -> Event {
        Event::new(self.on_escape)
    }
}

/// Menu item contract
///
/// Implementors provide access to their [`ItemCore`]; capability queries
/// have default implementations on top of it. Passive widgets that must
/// stay constant override the setters to ignore changes.
pub trait MenuItem {
    /// Shared item state
    fn core(&self) -> &ItemCore;

    /// Mutable shared item state
    fn core_mut(&mut self) -> &mut ItemCore;

    /// Item id
    fn id(&self) -> ItemId {
        self.core().id()
    }

    /// Item name
    fn name(&self) -> &str {
        self.core().name()
    }

    /// Whether the item can be selected
    fn selectable(&self) -> bool {
        self.core().options().selectable
    }

    /// Change the selectable capability
    fn set_selectable(&mut self, selectable: bool) {
        self.core_mut().options_mut().selectable = selectable;
    }

    /// Whether the item is constant (never focused)
    fn constant(&self) -> bool {
        self.core().options().constant
    }

    /// Change the constant capability
    fn set_constant(&mut self, constant: bool) {
        self.core_mut().options_mut().constant = constant;
    }

    /// Whether the item holds cursor focus
    fn focused(&self) -> bool {
        self.core().is_focused()
    }

    /// Whether the item skips drawing
    fn hidden(&self) -> bool {
        self.core().is_hidden()
    }

    /// Process an input event or engine notification
    ///
    /// The returned event is interpreted by the engine as a directive
    /// (page switch, go back, quit); return `Event::noop()` otherwise.
    fn handle_event(&mut self, event: &Event) -> Event {
        let _ = event;
        Event::noop()
    }

    /// Draw the item
    ///
    /// `page` is the page being rendered, so an item shared between pages
    /// can show the page's name.
    fn render(&self, page: &Page, display: &mut dyn DisplayBackend) -> Result<(), DisplayError> {
        let _ = (page, display);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain {
        core: ItemCore,
    }

    impl MenuItem for Plain {
        fn core(&self) -> &ItemCore {
            &self.core
        }

        fn core_mut(&mut self) -> &mut ItemCore {
            &mut self.core
        }
    }

    #[test]
    fn test_default_options() {
        let opts = ItemOptions::default();
        assert!(opts.selectable);
        assert!(!opts.constant);
    }

    #[test]
    fn test_capability_setters() {
        let mut item = Plain {
            core: ItemCore::new(ItemId(3), "Volume", ItemOptions::SELECTABLE),
        };
        assert_eq!(item.id(), ItemId(3));
        assert_eq!(item.name(), "Volume");

        item.set_selectable(false);
        item.set_constant(true);
        assert!(!item.selectable());
        assert!(item.constant());
    }

    #[test]
    fn test_escape_answer() {
        let mut core = ItemCore::new(ItemId(1), "", ItemOptions::default());
        assert_eq!(core.escape_event().kind, EventKind::Escape);

        core.set_on_escape(EventKind::PrevPage);
        assert_eq!(core.escape_event().kind, EventKind::PrevPage);
    }

    #[test]
    fn test_default_handler_is_noop() {
        let mut item = Plain {
            core: ItemCore::new(ItemId(1), "", ItemOptions::default()),
        };
        assert!(item.handle_event(&Event::new(EventKind::Enter)).is_noop());
    }
}
