//! Horizontal number slider
//!
//! Drawn as `label  <prev [value] next>`, where the neighbours are the
//! values one step away. They are omitted when outside the range or when
//! the slider is unbounded.

use alloc::boxed::Box;
use core::fmt::Write;

use muipp_core::{Event, EventKind, ItemCore, ItemId, ItemOptions, MenuItem, Page};
use muipp_display::{DisplayBackend, DisplayError};

use crate::layout::{self, LineText, Position};

type Callback = Option<Box<dyn FnMut(i32)>>;

/// Integer value adjusted with the cursor keys while selected
///
/// `min == max` disables clamping.
pub struct NumberSlider {
    core: ItemCore,
    pos: Position,
    value: i32,
    min: i32,
    max: i32,
    step: i32,
    selected: bool,
    on_select: Callback,
    on_unselect: Callback,
    on_change: Callback,
}

impl NumberSlider {
    /// Create a slider; `min` and `max` are swapped if given in reverse
    pub fn new(id: ItemId, label: &str, value: i32, min: i32, max: i32, step: i32) -> Self {
        let mut slider = Self {
            core: ItemCore::new(id, label, ItemOptions::SELECTABLE),
            pos: Position::new(0, 0),
            value,
            min: min.min(max),
            max: max.max(min),
            step,
            selected: false,
            on_select: None,
            on_unselect: None,
            on_change: None,
        };
        slider.value = slider.clamp(value);
        slider
    }

    /// Anchor of the label
    pub fn at(mut self, pos: Position) -> Self {
        self.pos = pos;
        self
    }

    /// Event returned on `escape` and `enter`
    pub fn on_escape(mut self, kind: EventKind) -> Self {
        self.core.set_on_escape(kind);
        self
    }

    /// Called with the current value when the slider is selected
    pub fn on_select(mut self, f: impl FnMut(i32) + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    /// Called with the current value when the selection is released
    pub fn on_unselect(mut self, f: impl FnMut(i32) + 'static) -> Self {
        self.on_unselect = Some(Box::new(f));
        self
    }

    /// Called with the new value after every change
    pub fn on_change(mut self, f: impl FnMut(i32) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Current value
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Whether the value is clamped to `min..=max`
    pub fn is_bounded(&self) -> bool {
        self.min != self.max
    }

    /// Set the value (clamped), calling the change callback if it changed
    pub fn set_value(&mut self, value: i32) {
        let value = self.clamp(value);
        if value != self.value {
            self.value = value;
            if let Some(f) = self.on_change.as_mut() {
                f(value);
            }
        }
    }

    fn clamp(&self, value: i32) -> i32 {
        if self.is_bounded() {
            value.clamp(self.min, self.max)
        } else {
            value
        }
    }

    fn neighbour(&self, delta: i32) -> Option<i32> {
        if !self.is_bounded() || delta == 0 {
            return None;
        }
        self.value
            .checked_add(delta)
            .filter(|v| (self.min..=self.max).contains(v))
    }
}

fn call(callback: &mut Callback, value: i32) {
    if let Some(f) = callback.as_mut() {
        f(value);
    }
}

impl MenuItem for NumberSlider {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn handle_event(&mut self, event: &Event) -> Event {
        match event.kind {
            EventKind::MoveUp | EventKind::MoveLeft => {
                self.set_value(self.value.saturating_sub(self.step))
            }
            EventKind::MoveDown | EventKind::MoveRight => {
                self.set_value(self.value.saturating_add(self.step))
            }
            EventKind::Value => self.set_value(event.param),
            EventKind::Step => self.set_value(self.value.saturating_add(event.param)),
            EventKind::Select => {
                self.selected = true;
                call(&mut self.on_select, self.value);
            }
            EventKind::Unselect => {
                self.selected = false;
                call(&mut self.on_unselect, self.value);
            }
            EventKind::Enter | EventKind::Escape => return self.core.escape_event(),
            _ => {}
        }
        Event::noop()
    }

    fn render(&self, _page: &Page, display: &mut dyn DisplayBackend) -> Result<(), DisplayError> {
        if self.hidden() {
            return Ok(());
        }
        let mut line = LineText::new();
        let _ = write!(line, "{}  ", self.name());
        if let Some(prev) = self.neighbour(self.step.saturating_neg()) {
            let _ = write!(line, "<{} ", prev);
        }
        let value_start = layout::width(&line);
        let _ = write!(line, "[{}]", self.value);
        let value_end = layout::width(&line);
        if let Some(next) = self.neighbour(self.step) {
            let _ = write!(line, " {}>", next);
        }

        let (start, end) = layout::draw(display, self.pos, &line)?;
        let offset = |w: usize| (start as usize + w).min(end as usize) as u8;
        if self.selected {
            layout::invert(display, self.pos.row, (offset(value_start), offset(value_end)))?;
        } else if self.focused() {
            let label_end = offset(layout::width(self.name()));
            layout::invert(display, self.pos.row, (start, label_end))?;
        }
        Ok(())
    }
}
