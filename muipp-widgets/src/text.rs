//! Passive text widgets
//!
//! These items are constant: the engine never focuses them and they ignore
//! capability changes.

use alloc::boxed::Box;

use muipp_core::{ItemCore, ItemId, ItemOptions, MenuItem, Page};
use muipp_display::{DisplayBackend, DisplayError};

use crate::layout::{self, Align, LineText, Position, Wrap};

/// Draws the name of the page it is rendered on
///
/// One title item can be bound to every page.
pub struct PageTitle {
    core: ItemCore,
    pos: Position,
}

impl PageTitle {
    /// Create a title at the top left
    pub fn new(id: ItemId) -> Self {
        Self {
            core: ItemCore::new(id, "", ItemOptions::CONSTANT),
            pos: Position::new(0, 0),
        }
    }

    /// Anchor of the title
    pub fn at(mut self, pos: Position) -> Self {
        self.pos = pos;
        self
    }
}

impl MenuItem for PageTitle {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn set_selectable(&mut self, _selectable: bool) {}

    fn set_constant(&mut self, _constant: bool) {}

    fn render(&self, page: &Page, display: &mut dyn DisplayBackend) -> Result<(), DisplayError> {
        if self.hidden() {
            return Ok(());
        }
        layout::draw(display, self.pos, page.name()).map(|_| ())
    }
}

/// Fixed text, word-wrapped from its row down to the bottom of the display
pub struct StaticText {
    core: ItemCore,
    pos: Position,
    text: &'static str,
}

impl StaticText {
    /// Create a text block at the top left
    pub fn new(id: ItemId, text: &'static str) -> Self {
        Self {
            core: ItemCore::new(id, "", ItemOptions::CONSTANT),
            pos: Position::new(0, 0),
            text,
        }
    }

    /// Anchor of the first line
    pub fn at(mut self, pos: Position) -> Self {
        self.pos = pos;
        self
    }

    /// Text before wrapping
    pub fn text(&self) -> &str {
        self.text
    }

    /// Replace the text, picked up on the next render
    pub fn set_text(&mut self, text: &'static str) {
        self.text = text;
    }
}

impl MenuItem for StaticText {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn set_selectable(&mut self, _selectable: bool) {}

    fn set_constant(&mut self, _constant: bool) {}

    fn render(&self, _page: &Page, display: &mut dyn DisplayBackend) -> Result<(), DisplayError> {
        if self.hidden() {
            return Ok(());
        }
        let (cols, rows) = display.dimensions();
        let width = match self.pos.align {
            Align::Left => cols.saturating_sub(self.pos.col),
            Align::Center | Align::Right => cols,
        };

        for (row, line) in (self.pos.row..rows).zip(Wrap::new(self.text, width as usize)) {
            layout::draw(display, self.pos.on_row(row), line)?;
        }
        Ok(())
    }
}

/// Text produced by a closure on every render
pub struct TextCallback {
    core: ItemCore,
    pos: Position,
    text: Box<dyn Fn() -> LineText>,
}

impl TextCallback {
    /// Create an item drawing whatever `text` returns
    pub fn new(id: ItemId, text: impl Fn() -> LineText + 'static) -> Self {
        Self {
            core: ItemCore::new(id, "", ItemOptions::CONSTANT),
            pos: Position::new(0, 0),
            text: Box::new(text),
        }
    }

    /// Anchor of the text
    pub fn at(mut self, pos: Position) -> Self {
        self.pos = pos;
        self
    }
}

impl MenuItem for TextCallback {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn set_selectable(&mut self, _selectable: bool) {}

    fn set_constant(&mut self, _constant: bool) {}

    fn render(&self, _page: &Page, display: &mut dyn DisplayBackend) -> Result<(), DisplayError> {
        if self.hidden() {
            return Ok(());
        }
        let text = (self.text)();
        layout::draw(display, self.pos, &text).map(|_| ())
    }
}
