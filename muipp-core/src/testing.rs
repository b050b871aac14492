//! Test items

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use muipp_display::{DisplayBackend, DisplayError};

use crate::event::{Event, EventKind};
use crate::id::ItemId;
use crate::item::{ItemCore, ItemOptions, MenuItem};
use crate::page::Page;

pub(crate) type EventLog = Rc<RefCell<Vec<EventKind>>>;

type Reply = Box<dyn FnMut(&ItemCore, &Event) -> Event>;

/// Item that records every event it receives
pub(crate) struct Probe {
    core: ItemCore,
    log: EventLog,
    reply: Reply,
    row: u8,
}

impl Probe {
    pub(crate) fn new(id: u32, options: ItemOptions) -> Self {
        Self {
            core: ItemCore::new(ItemId(id), "", options),
            log: Rc::new(RefCell::new(Vec::new())),
            // Escape answers with the configured escape event, like real widgets
            reply: Box::new(|core, event| match event.kind {
                EventKind::Escape => core.escape_event(),
                _ => Event::noop(),
            }),
            row: 0,
        }
    }

    pub(crate) fn selectable(id: u32) -> Self {
        Self::new(id, ItemOptions::SELECTABLE)
    }

    pub(crate) fn focusable(id: u32) -> Self {
        Self::new(id, ItemOptions::FOCUSABLE)
    }

    pub(crate) fn constant(id: u32) -> Self {
        Self::new(id, ItemOptions::CONSTANT)
    }

    pub(crate) fn named(mut self, name: &str) -> Self {
        self.core.set_name(name);
        self
    }

    pub(crate) fn at_row(mut self, row: u8) -> Self {
        self.row = row;
        self
    }

    pub(crate) fn on_escape(mut self, kind: EventKind) -> Self {
        self.core.set_on_escape(kind);
        self
    }

    pub(crate) fn replying(mut self, reply: impl FnMut(&ItemCore, &Event) -> Event + 'static) -> Self {
        self.reply = Box::new(reply);
        self
    }

    pub(crate) fn log(&self) -> EventLog {
        self.log.clone()
    }
}

impl MenuItem for Probe {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn handle_event(&mut self, event: &Event) -> Event {
        self.log.borrow_mut().push(event.kind);
        (self.reply)(&self.core, event)
    }

    fn render(&self, page: &Page, display: &mut dyn DisplayBackend) -> Result<(), DisplayError> {
        if self.hidden() {
            return Ok(());
        }
        let marker = if self.focused() { ">" } else { " " };
        display.draw_text(self.row, 0, marker)?;
        let text = if self.name().is_empty() {
            page.name()
        } else {
            self.name()
        };
        display.draw_text(self.row, 1, text)
    }
}

/// Drain and return a probe's log
pub(crate) fn take(log: &EventLog) -> Vec<EventKind> {
    core::mem::take(&mut *log.borrow_mut())
}
