//! Buttons
//!
//! Buttons are focusable but never selected: the engine forwards `enter` to
//! the focused button and moves the cursor past it on up/down.

use alloc::boxed::Box;

use muipp_core::{Event, EventKind, ItemCore, ItemId, ItemOptions, MenuItem, Page};
use muipp_display::{DisplayBackend, DisplayError, SCREEN_COLS, SCREEN_ROWS};

use crate::layout::{self, Align, Position};

/// Button returning a fixed event when pressed
///
/// The event is usually an engine directive, e.g. `GoPageByName` to open a
/// sub-page or `QuitMenu`.
pub struct ActionButton {
    core: ItemCore,
    pos: Position,
    action: Event,
}

impl ActionButton {
    /// Create a button at the top left
    pub fn new(id: ItemId, label: &str, action: Event) -> Self {
        Self {
            core: ItemCore::new(id, label, ItemOptions::FOCUSABLE),
            pos: Position::new(0, 0),
            action,
        }
    }

    /// Anchor of the label
    pub fn at(mut self, pos: Position) -> Self {
        self.pos = pos;
        self
    }

    /// Event returned on press
    pub fn action(&self) -> &Event {
        &self.action
    }
}

impl MenuItem for ActionButton {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn handle_event(&mut self, event: &Event) -> Event {
        match event.kind {
            EventKind::Enter | EventKind::Select => self.action.clone(),
            _ => Event::noop(),
        }
    }

    fn render(&self, _page: &Page, display: &mut dyn DisplayBackend) -> Result<(), DisplayError> {
        if self.hidden() {
            return Ok(());
        }
        let span = layout::draw(display, self.pos, self.name())?;
        if self.focused() {
            layout::invert(display, self.pos.row, span)?;
        }
        Ok(())
    }
}

/// Button returning to the parent page, in the bottom-right corner
pub struct BackButton(ActionButton);

impl BackButton {
    /// Create a back button in the bottom-right corner
    pub fn new(id: ItemId, label: &str) -> Self {
        let corner = Position::new(SCREEN_ROWS as u8 - 1, SCREEN_COLS as u8 - 1).aligned(Align::Right);
        Self(ActionButton::new(id, label, Event::new(EventKind::PrevPage)).at(corner))
    }

    /// Move the button out of the corner
    pub fn at(self, pos: Position) -> Self {
        Self(self.0.at(pos))
    }
}

impl MenuItem for BackButton {
    fn core(&self) -> &ItemCore {
        self.0.core()
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        self.0.core_mut()
    }

    fn handle_event(&mut self, event: &Event) -> Event {
        self.0.handle_event(event)
    }

    fn render(&self, page: &Page, display: &mut dyn DisplayBackend) -> Result<(), DisplayError> {
        self.0.render(page, display)
    }
}

/// Boolean toggle drawn as `[x] label`
pub struct CheckBox {
    core: ItemCore,
    pos: Position,
    checked: bool,
    on_change: Option<Box<dyn FnMut(bool)>>,
}

impl CheckBox {
    /// Create a checkbox at the top left
    pub fn new(id: ItemId, label: &str, checked: bool) -> Self {
        Self {
            core: ItemCore::new(id, label, ItemOptions::FOCUSABLE),
            pos: Position::new(0, 0),
            checked,
            on_change: None,
        }
    }

    /// Anchor of the box
    pub fn at(mut self, pos: Position) -> Self {
        self.pos = pos;
        self
    }

    /// Call `f` with the new value after every toggle
    pub fn on_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Current value
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Set the value without calling the change callback
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }
}

impl MenuItem for CheckBox {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn handle_event(&mut self, event: &Event) -> Event {
        if event.kind == EventKind::Enter {
            self.checked = !self.checked;
            if let Some(f) = self.on_change.as_mut() {
                f(self.checked);
            }
        }
        Event::noop()
    }

    fn render(&self, _page: &Page, display: &mut dyn DisplayBackend) -> Result<(), DisplayError> {
        if self.hidden() {
            return Ok(());
        }
        let mark = if self.checked { 'x' } else { ' ' };
        let text = layout::format(format_args!("[{}] {}", mark, self.name()));
        let span = layout::draw(display, self.pos, &text)?;
        if self.focused() {
            layout::invert(display, self.pos.row, span)?;
        }
        Ok(())
    }
}
