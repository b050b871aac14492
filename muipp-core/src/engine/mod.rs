//! Menu engine
//!
//! `MenuEngine` owns every item and page. Items live in a flat registry
//! keyed by id; pages hold item ids, never references, so an item can be
//! shared by any number of pages.
//!
//! The engine is single-threaded and synchronous: the application feeds
//! events one at a time through [`MenuEngine::dispatch`] and calls
//! [`MenuEngine::render`] whenever it wants a frame.

mod navigation;
mod registry;

use alloc::boxed::Box;
use heapless::Vec;
use muipp_display::{DisplayBackend, DisplayError};

use crate::config::{MAX_ITEMS, MAX_PAGES};
use crate::id::{IdAllocator, ItemId, PageId};
use crate::item::MenuItem;
use crate::page::{Page, PageState};

/// Page/item container and navigation state machine
pub struct MenuEngine {
    /// Item registry, anchor owner of every item
    items: Vec<Box<dyn MenuItem>, MAX_ITEMS>,
    /// Page registry; pages are never removed, so indices stay valid
    pages: Vec<Page, MAX_PAGES>,
    /// Index into `pages`, `None` before the first page switch
    current: Option<usize>,
    /// Shared id source for pages and items
    ids: IdAllocator,
    /// Nesting level of navigation calls within the current dispatch
    depth: u8,
}

impl Default for MenuEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuEngine {
    /// Create an empty engine
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            pages: Vec::new(),
            current: None,
            ids: IdAllocator::new(),
            depth: 0,
        }
    }

    /// Generate an id not used by any registered item or page
    pub fn next_id(&mut self) -> ItemId {
        let items = &self.items;
        let pages = &self.pages;
        let raw = self.ids.next(|id| {
            items.iter().any(|i| i.id().get() == id) || pages.iter().any(|p| p.id().get() == id)
        });
        ItemId(raw)
    }

    /// Number of registered items
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of pages
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Look up an item
    pub fn item(&self, id: ItemId) -> Option<&dyn MenuItem> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .map(|item| item.as_ref())
    }

    /// Look up an item for modification
    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut (dyn MenuItem + 'static)> {
        self.items
            .iter_mut()
            .find(|item| item.id() == id)
            .map(|item| item.as_mut())
    }

    /// Look up a page
    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id() == id)
    }

    /// Look up a page by name (first match)
    pub fn page_by_name(&self, name: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.name() == name)
    }

    /// Page currently shown
    pub fn current_page(&self) -> Option<&Page> {
        self.current.and_then(|index| self.pages.get(index))
    }

    /// Item holding the cursor on the current page
    pub fn focused_item(&self) -> Option<ItemId> {
        self.current_page().and_then(Page::focused_item)
    }

    /// Whether the focused item grabs navigation input
    pub fn is_item_selected(&self) -> bool {
        self.current_page().is_some_and(Page::is_selected)
    }

    /// Focus/selection state of the current page
    pub fn page_state(&self) -> Option<PageState> {
        let index = self.current?;
        let page = &self.pages[index];
        let state = match page.focused_item() {
            Some(id) if page.is_selected() => PageState::Selected(id),
            Some(id) => PageState::Focused(id),
            None if self.first_eligible(index, true).is_some() => PageState::Unfocused,
            None => PageState::Empty,
        };
        Some(state)
    }

    /// Render the current page
    ///
    /// Calls every bound item's render hook in binding order, passing the
    /// current page. Does nothing without pages or items. Navigation state
    /// is not touched.
    ///
    /// An item that fails to draw does not stop the pass; the first error is
    /// returned once every item had its turn. A display that is not ready is
    /// rejected with `NotInitialized` before any item is drawn.
    pub fn render<D: DisplayBackend>(&self, display: &mut D) -> Result<(), DisplayError> {
        if !display.is_ready() {
            warn!("render skipped, display not ready");
            return Err(DisplayError::NotInitialized);
        }
        if self.pages.is_empty() || self.items.is_empty() {
            return Ok(());
        }
        let Some(page) = self.current_page() else {
            return Ok(());
        };

        let mut result = Ok(());
        for id in page.items() {
            // Lookups that miss are skipped
            let Some(item) = self.item(*id) else {
                continue;
            };
            if let Err(e) = item.render(page, &mut *display) {
                warn!("item {} failed to render: {}", id.get(), e);
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }
        result
    }

    fn page_index(&self, id: PageId) -> Option<usize> {
        self.pages.iter().position(|p| p.id() == id)
    }

    fn item_index(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|i| i.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Probe;
    use muipp_display::Screen;

    #[test]
    fn test_next_id_skips_registered() {
        let mut menu = MenuEngine::new();
        menu.register_item(Probe::selectable(1), None).unwrap();
        menu.register_item(Probe::selectable(2), None).unwrap();

        assert_eq!(menu.next_id(), ItemId(3));
        let page = menu.create_page("Root", None).unwrap();
        assert_eq!(page, PageId(4));
        assert_eq!(menu.next_id(), ItemId(5));
    }

    #[test]
    fn test_render_without_pages_is_noop() {
        let menu = MenuEngine::new();
        let mut screen = Screen::new();
        menu.render(&mut screen).unwrap();
        assert_eq!(screen.selection(), None);
        assert_eq!(screen.line(0).unwrap().as_str(), "");
    }

    #[test]
    fn test_render_in_binding_order_with_page_ref() {
        let mut menu = MenuEngine::new();
        let root = menu.create_page("Settings", None).unwrap();
        // Unnamed probe draws the page name, like a title widget
        let title = Probe::constant(10).at_row(0);
        let volume = Probe::selectable(11).named("Volume").at_row(1);
        let brightness = Probe::selectable(12).named("Brightness").at_row(2);
        menu.register_item(title, Some(root)).unwrap();
        menu.register_item(volume, Some(root)).unwrap();
        menu.register_item(brightness, Some(root)).unwrap();
        menu.start(root, None);

        let mut screen = Screen::new();
        menu.render(&mut screen).unwrap();

        assert_eq!(screen.line(0).unwrap().as_str(), " Settings");
        assert_eq!(screen.line(1).unwrap().as_str(), ">Volume");
        assert_eq!(screen.line(2).unwrap().as_str(), " Brightness");
    }

    #[test]
    fn test_render_does_not_touch_state() {
        let mut menu = MenuEngine::new();
        let root = menu.create_page("Root", None).unwrap();
        menu.register_item(Probe::selectable(1), Some(root)).unwrap();
        menu.start(root, None);

        let before = menu.page_state();
        let mut screen = Screen::new();
        menu.render(&mut screen).unwrap();
        menu.render(&mut screen).unwrap();
        assert_eq!(menu.page_state(), before);
    }

    #[test]
    fn test_render_continues_after_item_error() {
        let mut menu = MenuEngine::new();
        let root = menu.create_page("Root", None).unwrap();
        menu.register_item(Probe::selectable(1).named("Lost").at_row(9), Some(root))
            .unwrap();
        menu.register_item(Probe::selectable(2).named("Shown").at_row(3), Some(root))
            .unwrap();
        menu.start(root, None);

        let mut screen = Screen::new();
        assert_eq!(menu.render(&mut screen), Err(DisplayError::InvalidCoordinates));
        assert_eq!(screen.line(3).unwrap().as_str(), " Shown");
    }

    /// Backend whose hardware never came up
    struct Offline;

    impl DisplayBackend for Offline {
        fn clear(&mut self) -> Result<(), DisplayError> {
            Err(DisplayError::NotInitialized)
        }

        fn draw_text(&mut self, _row: u8, _col: u8, _text: &str) -> Result<(), DisplayError> {
            panic!("drawn while not ready");
        }

        fn invert_region(&mut self, _row: u8, _start: u8, _end: u8) -> Result<(), DisplayError> {
            panic!("drawn while not ready");
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            Err(DisplayError::NotInitialized)
        }

        fn dimensions(&self) -> (u8, u8) {
            (21, 8)
        }

        fn is_ready(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_render_rejects_display_not_ready() {
        let mut menu = MenuEngine::new();
        let root = menu.create_page("Root", None).unwrap();
        menu.register_item(Probe::selectable(1), Some(root)).unwrap();
        menu.start(root, None);

        assert_eq!(menu.render(&mut Offline), Err(DisplayError::NotInitialized));
    }

    #[test]
    fn test_item_mut_changes_capabilities() {
        let mut menu = MenuEngine::new();
        menu.register_item(Probe::selectable(7), None).unwrap();

        menu.item_mut(ItemId(7)).unwrap().set_constant(true);
        assert!(menu.item(ItemId(7)).unwrap().constant());
        assert!(menu.item(ItemId(8)).is_none());
    }
}
