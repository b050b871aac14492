//! Event dispatch and page navigation
//!
//! Routing for each dispatched event, in order:
//!
//! 1. A selected item gets common-band and item-value events verbatim; its
//!    answer goes through the feedback step.
//! 2. A focused, non-selectable item still gets `enter` and item values.
//! 3. Common and engine-internal events drive page navigation.
//! 4. Anything else is dropped.
//!
//! Item answers are directives only (page switch, go back, quit). Raw input
//! kinds returned by an item are ignored. Navigation can re-enter itself
//! through feedback; nesting is capped at `MAX_NESTED_EVENTS` per dispatch.

use super::MenuEngine;
use crate::config::MAX_NESTED_EVENTS;
use crate::error::MenuError;
use crate::event::{Event, EventBand, EventKind};
use crate::id::{ItemId, PageId};

impl MenuEngine {
    /// Start the menu on a page, optionally jumping into an item
    ///
    /// If the page does not exist the engine falls back to the first page
    /// with nothing focused.
    pub fn start(&mut self, page: PageId, item: Option<ItemId>) {
        if let Err(e) = self.go_to_page(page, item) {
            warn!("start on page {} failed: {}", page.get(), e);
            self.leave_current_page();
            self.current = if self.pages.is_empty() { None } else { Some(0) };
            if let Some(index) = self.current {
                self.pages[index].reset();
            }
        }
        info!("menu started");
    }

    /// Feed one input event into the menu
    ///
    /// Returns the menu's response: `QuitMenu` when the menu wants to close,
    /// the echoed event for `Noop`, otherwise `Noop`. Never fails.
    pub fn dispatch(&mut self, event: Event) -> Event {
        if event.is_noop() {
            return event;
        }
        trace!("dispatch {}", event.kind);
        self.depth = 0;
        self.route(event)
    }

    /// Switch to a page
    ///
    /// Focus goes to, in order of preference: `item` if it is bound and not
    /// constant, the page's auto-select item, the first non-constant item.
    /// The first two are also selected when selectable. A page without
    /// focusable items is entered with nothing focused.
    pub fn go_to_page(&mut self, page: PageId, item: Option<ItemId>) -> Result<(), MenuError> {
        let index = self.page_index(page).ok_or(MenuError::UnknownPage)?;
        self.leave_current_page();
        self.current = Some(index);
        self.pages[index].reset();
        debug!("page {} entered", page.get());

        let jump = item
            .and_then(|id| self.eligible_position(index, id))
            .or_else(|| {
                self.pages[index]
                    .auto_select()
                    .and_then(|id| self.eligible_position(index, id))
            });

        if let Some(pos) = jump {
            self.focus_position(index, pos);
            self.grab_quietly(index);
        } else if let Some(pos) = self.first_eligible(index, true) {
            self.focus_position(index, pos);
        }
        Ok(())
    }

    /// Switch to the first page with the given name
    pub fn go_to_page_by_name(&mut self, name: &str) -> Result<(), MenuError> {
        let id = self.page_by_name(name).ok_or(MenuError::UnknownPage)?.id();
        self.go_to_page(id, None)
    }

    /// Move focus to an item on the current page, selecting it if selectable
    pub fn go_to_item(&mut self, item: ItemId) -> Result<(), MenuError> {
        let index = self.current.ok_or(MenuError::Empty)?;
        if self.first_eligible(index, true).is_none() {
            return Err(MenuError::Empty);
        }
        let pos = self
            .eligible_position(index, item)
            .ok_or(MenuError::UnknownItem)?;

        self.release(index);
        self.focus_position(index, pos);
        self.grab_quietly(index);
        Ok(())
    }

    /// Move focus to an item on the current page by name
    pub fn go_to_item_by_name(&mut self, name: &str) -> Result<(), MenuError> {
        let index = self.current.ok_or(MenuError::Empty)?;
        let id = self.pages[index]
            .items()
            .iter()
            .copied()
            .find(|id| self.item(*id).is_some_and(|item| item.name() == name))
            .ok_or(MenuError::UnknownItem)?;
        self.go_to_item(id)
    }

    fn route(&mut self, event: Event) -> Event {
        let band = event.kind.band();

        if let Some(index) = self.current {
            let page = &self.pages[index];
            if let Some(id) = page.focused_item() {
                if page.is_selected() && band != EventBand::Internal {
                    if event.kind == EventKind::Escape {
                        return self.escape_selected(index, id, &event);
                    }
                    let response = self.send(id, &event);
                    return self.feedback(response);
                }

                let passive = self.item(id).is_some_and(|item| !item.selectable());
                if !page.is_selected()
                    && passive
                    && (event.kind == EventKind::Enter || band == EventBand::ItemValue)
                {
                    let response = self.send(id, &event);
                    return self.feedback(response);
                }
            }
        }

        match band {
            EventBand::Common | EventBand::Internal => self.navigate(event),
            EventBand::ItemValue => Event::noop(),
        }
    }

    /// Interpret an item's answer as a directive
    fn feedback(&mut self, response: Event) -> Event {
        match response.kind {
            EventKind::Noop => response,
            kind if kind == EventKind::Escape || kind.band() == EventBand::Internal => {
                debug!("feedback {}", kind);
                self.navigate(response)
            }
            _ => Event::noop(),
        }
    }

    fn navigate(&mut self, event: Event) -> Event {
        if self.depth >= MAX_NESTED_EVENTS {
            warn!("event nesting limit reached, dropping {}", event.kind);
            return Event::noop();
        }
        self.depth += 1;
        let response = self.navigate_inner(event);
        self.depth -= 1;
        response
    }

    fn navigate_inner(&mut self, event: Event) -> Event {
        let kind = event.kind;
        match kind {
            _ if kind.is_move() => {
                self.move_cursor(!kind.is_backward());
                Event::noop()
            }
            EventKind::Enter | EventKind::Select => self.select_focused(),
            EventKind::Escape => self.escape(),
            EventKind::Unselect => {
                if let Some(index) = self.current {
                    self.release(index);
                }
                Event::noop()
            }
            EventKind::PrevPage => self.prev_page(),
            EventKind::QuitMenu => event,
            EventKind::GoPageById => {
                match PageId::from_param(event.param) {
                    Some(page) => log_miss(self.go_to_page(page, None)),
                    None => warn!("page id {} out of range", event.param),
                }
                Event::noop()
            }
            EventKind::GoPageByName => {
                match event.text() {
                    Some(name) => log_miss(self.go_to_page_by_name(name)),
                    None => warn!("page switch without a name"),
                }
                Event::noop()
            }
            EventKind::GoItemById => {
                match ItemId::from_param(event.param) {
                    Some(item) => log_miss(self.go_to_item(item)),
                    None => warn!("item id {} out of range", event.param),
                }
                Event::noop()
            }
            EventKind::GoItemByName => {
                match event.text() {
                    Some(name) => log_miss(self.go_to_item_by_name(name)),
                    None => warn!("item switch without a name"),
                }
                Event::noop()
            }
            EventKind::NextItem | EventKind::PrevItem => {
                self.step_item(kind == EventKind::NextItem);
                Event::noop()
            }
            EventKind::NextPage => self.next_page(),
            EventKind::HideItem | EventKind::UnhideItem | EventKind::HideToggle => {
                if let Some(item) = ItemId::from_param(event.param) {
                    if let Some(item) = self.item_mut(item) {
                        let hidden = match kind {
                            EventKind::HideItem => true,
                            EventKind::UnhideItem => false,
                            _ => !item.hidden(),
                        };
                        item.core_mut().set_hidden(hidden);
                    }
                }
                Event::noop()
            }
            // Focus notifications flow engine -> item only
            _ => Event::noop(),
        }
    }

    /// `escape` received while an item is selected: forward it, then release
    fn escape_selected(&mut self, index: usize, id: ItemId, event: &Event) -> Event {
        let response = self.send(id, event);
        self.release(index);
        match response.kind {
            // The generic answer is the release itself
            EventKind::Noop | EventKind::Escape => Event::noop(),
            _ => self.feedback(response),
        }
    }

    /// `enter`/`select` with nothing grabbed: select the focused item
    fn select_focused(&mut self) -> Event {
        let Some(index) = self.current else {
            return Event::noop();
        };
        let page = &self.pages[index];
        let Some(id) = page.focused_item() else {
            return Event::noop();
        };
        if page.is_selected() {
            return Event::noop();
        }

        if self.item(id).is_some_and(|item| item.selectable()) {
            self.pages[index].set_selected(true);
            trace!("item {} selected", id.get());
        }
        let response = self.send(id, &Event::new(EventKind::Select));
        self.feedback(response)
    }

    /// One level of escape: release a selection, otherwise leave the page
    fn escape(&mut self) -> Event {
        match self.current {
            Some(index) if self.pages[index].is_selected() => {
                self.release(index);
                Event::noop()
            }
            _ => self.prev_page(),
        }
    }

    /// Go to the parent page, or quit if there is none
    fn prev_page(&mut self) -> Event {
        let parent = self
            .current_page()
            .and_then(|page| page.parent())
            .filter(|parent| self.page_index(*parent).is_some());

        match parent {
            Some(parent) => {
                log_miss(self.go_to_page(parent, None));
                Event::noop()
            }
            None => {
                info!("menu quit");
                Event::new(EventKind::QuitMenu)
            }
        }
    }

    fn move_cursor(&mut self, forward: bool) {
        let Some(index) = self.current else {
            return;
        };
        let page = &self.pages[index];
        if page.is_selected() {
            return;
        }
        let from = page.cursor();
        let next = match from {
            Some(pos) => self.step_eligible(index, pos, forward),
            None => self.first_eligible(index, forward),
        };
        if let Some(pos) = next.filter(|pos| Some(*pos) != from) {
            self.focus_position(index, pos);
        }
    }

    /// Focus the neighbouring focusable item and grab it
    ///
    /// Works while an item is selected: the selection moves along with the
    /// cursor.
    fn step_item(&mut self, forward: bool) {
        let Some(index) = self.current else {
            return;
        };
        let from = self.pages[index].cursor();
        let next = match from {
            Some(pos) => self.step_eligible(index, pos, forward),
            None => self.first_eligible(index, forward),
        };
        let Some(pos) = next else {
            return;
        };
        if Some(pos) != from {
            self.release(index);
            self.focus_position(index, pos);
        }
        if !self.pages[index].is_selected() {
            self.grab_quietly(index);
        }
    }

    /// Switch to the page created after the current one, wrapping around
    fn next_page(&mut self) -> Event {
        if self.pages.is_empty() {
            return Event::noop();
        }
        let next = self.current.map_or(0, |index| (index + 1) % self.pages.len());
        let page = self.pages[next].id();
        log_miss(self.go_to_page(page, None));
        Event::noop()
    }

    /// Move the cursor to `pos`, notifying the old and new items
    fn focus_position(&mut self, index: usize, pos: usize) {
        if let Some(old) = self.pages[index].focused_item() {
            self.set_focus(old, false);
        }
        self.pages[index].set_cursor(Some(pos));
        if let Some(new) = self.pages[index].focused_item() {
            self.set_focus(new, true);
        }
    }

    fn set_focus(&mut self, id: ItemId, focused: bool) {
        if let Some(item) = self.item_mut(id) {
            item.core_mut().set_focused(focused);
        }
        let kind = if focused {
            EventKind::Focus
        } else {
            EventKind::Unfocus
        };
        self.notify(id, kind);
    }

    /// Select the focused item if it is selectable, ignoring its answer
    fn grab_quietly(&mut self, index: usize) {
        let Some(id) = self.pages[index].focused_item() else {
            return;
        };
        if self.item(id).is_some_and(|item| item.selectable()) {
            self.pages[index].set_selected(true);
            self.notify(id, EventKind::Select);
        }
    }

    fn release(&mut self, index: usize) {
        if !self.pages[index].is_selected() {
            return;
        }
        self.pages[index].set_selected(false);
        if let Some(id) = self.pages[index].focused_item() {
            trace!("item {} released", id.get());
            self.notify(id, EventKind::Unselect);
        }
    }

    fn leave_current_page(&mut self) {
        let Some(index) = self.current else {
            return;
        };
        self.release(index);
        if let Some(id) = self.pages[index].focused_item() {
            self.set_focus(id, false);
        }
        self.pages[index].set_cursor(None);
    }

    /// Send an event to an item and return its answer
    fn send(&mut self, id: ItemId, event: &Event) -> Event {
        match self.item_mut(id) {
            Some(item) => item.handle_event(event),
            None => Event::noop(),
        }
    }

    /// Send a notification whose answer is ignored
    fn notify(&mut self, id: ItemId, kind: EventKind) {
        let _ = self.send(id, &Event::new(kind));
    }

    fn is_eligible(&self, index: usize, pos: usize) -> bool {
        self.pages[index]
            .items()
            .get(pos)
            .and_then(|id| self.item(*id))
            .is_some_and(|item| !item.constant())
    }

    /// First binding of `item` on the page, if it can take focus
    fn eligible_position(&self, index: usize, item: ItemId) -> Option<usize> {
        let pos = self.pages[index].items().iter().position(|id| *id == item)?;
        self.is_eligible(index, pos).then_some(pos)
    }

    /// First (or last, scanning backwards) focusable position
    pub(super) fn first_eligible(&self, index: usize, forward: bool) -> Option<usize> {
        let len = self.pages[index].len();
        (0..len)
            .map(|step| if forward { step } else { len - 1 - step })
            .find(|pos| self.is_eligible(index, *pos))
    }

    /// Next focusable position after `from`, wrapping around
    fn step_eligible(&self, index: usize, from: usize, forward: bool) -> Option<usize> {
        let len = self.pages[index].len();
        (1..=len)
            .map(|step| {
                if forward {
                    (from + step) % len
                } else {
                    (from + len - step) % len
                }
            })
            .find(|pos| self.is_eligible(index, *pos))
    }
}

fn log_miss(result: Result<(), MenuError>) {
    if let Err(e) = result {
        warn!("directive failed: {}", e);
    }
}
