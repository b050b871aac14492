//! List widgets
//!
//! Both lists are selectable: once selected they take the cursor events and
//! release the selection through their escape event.

use alloc::boxed::Box;

use muipp_core::event::label as make_label;
use muipp_core::{Event, EventKind, ItemCore, ItemId, ItemOptions, Label, MenuItem, Page};
use muipp_display::{DisplayBackend, DisplayError};

use crate::layout::{self, Position};

/// Scroll list behaviour flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ListOptions {
    /// `enter` switches to the page named by the current label
    pub page_selector: bool,
    /// In page-selector mode, the last entry goes back instead
    pub back_on_last: bool,
}

/// Scrolling list with labels produced on demand
///
/// The list does not store its entries: `size` reports how many there are
/// and `label` produces the text for an index, so the list can follow data
/// that changes at runtime.
pub struct ScrollList {
    core: ItemCore,
    pos: Position,
    rows: u8,
    index: usize,
    options: ListOptions,
    label: Box<dyn Fn(usize) -> Label>,
    size: Box<dyn Fn() -> usize>,
    action: Option<Box<dyn FnMut(usize)>>,
}

impl ScrollList {
    /// Create a list with three visible rows at the top left
    pub fn new(
        id: ItemId,
        label: impl Fn(usize) -> Label + 'static,
        size: impl Fn() -> usize + 'static,
    ) -> Self {
        Self {
            core: ItemCore::new(id, "", ItemOptions::SELECTABLE),
            pos: Position::new(0, 0),
            rows: 3,
            index: 0,
            options: ListOptions::default(),
            label: Box::new(label),
            size: Box::new(size),
            action: None,
        }
    }

    /// Anchor of the first visible row
    pub fn at(mut self, pos: Position) -> Self {
        self.pos = pos;
        self
    }

    /// Number of visible rows
    pub fn rows(mut self, rows: u8) -> Self {
        self.rows = rows.max(1);
        self
    }

    /// Behaviour flags
    pub fn options(mut self, options: ListOptions) -> Self {
        self.options = options;
        self
    }

    /// Call `f` with the current index on `enter` (ignored in page-selector mode)
    pub fn on_enter(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.action = Some(Box::new(f));
        self
    }

    /// Event returned on `escape`
    pub fn on_escape(mut self, kind: EventKind) -> Self {
        self.core.set_on_escape(kind);
        self
    }

    /// Index of the current entry
    pub fn index(&self) -> usize {
        self.index
    }

    /// Jump to an entry, ignoring indices past the end
    pub fn set_index(&mut self, index: usize) {
        if index < (self.size)() {
            self.index = index;
        }
    }

    fn step(&mut self, forward: bool) {
        let len = (self.size)();
        if len == 0 {
            return;
        }
        self.index = match (forward, self.index.min(len - 1)) {
            (true, i) if i + 1 >= len => 0,
            (true, i) => i + 1,
            (false, 0) => len - 1,
            (false, i) => i - 1,
        };
    }

    fn enter(&mut self) -> Event {
        let len = (self.size)();
        if len == 0 {
            return Event::noop();
        }
        // The list may have shrunk since the index was set
        let index = self.index.min(len - 1);
        if self.options.page_selector {
            if self.options.back_on_last && index + 1 == len {
                return Event::new(EventKind::PrevPage);
            }
            let name = (self.label)(index);
            return Event::with_text(EventKind::GoPageByName, &name);
        }
        if let Some(f) = self.action.as_mut() {
            f(index);
        }
        Event::noop()
    }
}

impl MenuItem for ScrollList {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn handle_event(&mut self, event: &Event) -> Event {
        match event.kind {
            EventKind::MoveUp | EventKind::MoveLeft => self.step(false),
            EventKind::MoveDown | EventKind::MoveRight => self.step(true),
            EventKind::Value => {
                if let Ok(index) = usize::try_from(event.param) {
                    self.set_index(index);
                }
            }
            EventKind::Enter => return self.enter(),
            EventKind::Escape => return self.core.escape_event(),
            _ => {}
        }
        Event::noop()
    }

    fn render(&self, _page: &Page, display: &mut dyn DisplayBackend) -> Result<(), DisplayError> {
        let len = (self.size)();
        if self.hidden() || len == 0 {
            return Ok(());
        }
        // Window rows that fall off the bottom of the display are dropped
        let (_, display_rows) = display.dimensions();
        let rows = self.rows.min(display_rows.saturating_sub(self.pos.row)) as usize;
        if rows == 0 {
            return Ok(());
        }
        let index = self.index.min(len - 1);
        // Keep the current entry in the middle of the window where possible
        let first = index.saturating_sub(rows / 2).min(len.saturating_sub(rows));

        for (offset, entry) in (first..len).take(rows).enumerate() {
            let pos = self.pos.on_row(self.pos.row + offset as u8);
            let span = layout::draw(display, pos, &(self.label)(entry))?;
            if entry == index {
                layout::invert(display, pos.row, span)?;
            }
        }
        Ok(())
    }
}

/// Label followed by a value that callbacks step through
pub struct ValuesList {
    core: ItemCore,
    pos: Position,
    value_col: Option<u8>,
    selected: bool,
    current: Box<dyn Fn() -> Label>,
    on_prev: Box<dyn FnMut()>,
    on_next: Box<dyn FnMut()>,
}

impl ValuesList {
    /// Create a list whose value text comes from `current`
    ///
    /// `on_prev` and `on_next` are called on the cursor keys while selected.
    pub fn new(
        id: ItemId,
        label: &str,
        current: impl Fn() -> Label + 'static,
        on_prev: impl FnMut() + 'static,
        on_next: impl FnMut() + 'static,
    ) -> Self {
        Self {
            core: ItemCore::new(id, label, ItemOptions::SELECTABLE),
            pos: Position::new(0, 0),
            value_col: None,
            selected: false,
            current: Box::new(current),
            on_prev: Box::new(on_prev),
            on_next: Box::new(on_next),
        }
    }

    /// Anchor of the label
    pub fn at(mut self, pos: Position) -> Self {
        self.pos = pos;
        self
    }

    /// Draw the value from a fixed column instead of right after the label
    pub fn value_at(mut self, col: u8) -> Self {
        self.value_col = Some(col);
        self
    }

    /// Event returned on `escape` and `enter`
    pub fn on_escape(mut self, kind: EventKind) -> Self {
        self.core.set_on_escape(kind);
        self
    }

    /// Current value text
    pub fn value(&self) -> Label {
        (self.current)()
    }
}

impl MenuItem for ValuesList {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn handle_event(&mut self, event: &Event) -> Event {
        match event.kind {
            EventKind::MoveUp | EventKind::MoveLeft => (self.on_prev)(),
            EventKind::MoveDown | EventKind::MoveRight => (self.on_next)(),
            EventKind::Select => self.selected = true,
            EventKind::Unselect => self.selected = false,
            // Enter confirms the value and releases the selection
            EventKind::Enter | EventKind::Escape => return self.core.escape_event(),
            _ => {}
        }
        Event::noop()
    }

    fn render(&self, _page: &Page, display: &mut dyn DisplayBackend) -> Result<(), DisplayError> {
        if self.hidden() {
            return Ok(());
        }
        let label_span = layout::draw(display, self.pos, self.name())?;
        let col = self
            .value_col
            .unwrap_or_else(|| label_span.1.saturating_add(1));
        let value = (self.current)();
        let value_span = layout::draw(display, Position::new(self.pos.row, col), &value)?;

        if self.selected {
            layout::invert(display, self.pos.row, value_span)?;
        } else if self.focused() {
            layout::invert(display, self.pos.row, label_span)?;
        }
        Ok(())
    }
}

/// Label for list entries built from a string slice table
pub fn entry(entries: &'static [&'static str], index: usize) -> Label {
    make_label(entries.get(index).copied().unwrap_or(""))
}
