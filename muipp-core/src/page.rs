//! Pages
//!
//! A page is an ordered list of item ids plus its own cursor and selection
//! state. Items are referenced by id; the engine owns the items themselves,
//! so one item can sit on many pages (or twice on one page).

use heapless::Vec;

use crate::config::MAX_PAGE_ITEMS;
use crate::event::{label, Label};
use crate::id::{ItemId, PageId};

/// Focus/selection state of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PageState {
    /// No focusable items
    Empty,
    /// Has focusable items but nothing holds the cursor yet
    Unfocused,
    /// Item holds the cursor
    Focused(ItemId),
    /// Focused item grabs navigation input
    Selected(ItemId),
}

/// A menu page
#[derive(Debug, Clone)]
pub struct Page {
    id: PageId,
    name: Label,
    parent: Option<PageId>,
    items: Vec<ItemId, MAX_PAGE_ITEMS>,
    /// Index into `items`, not an item id, so duplicate bindings stay distinct
    cursor: Option<usize>,
    selected: bool,
    auto_select: Option<ItemId>,
}

impl Page {
    /// Create a detached page
    ///
    /// Pages only take part in navigation when created through
    /// `MenuEngine::create_page`; a detached page is useful for rendering a
    /// single item.
    pub fn new(id: PageId, name: &str, parent: Option<PageId>) -> Self {
        Self {
            id,
            name: label(name),
            parent,
            items: Vec::new(),
            cursor: None,
            selected: false,
            auto_select: None,
        }
    }

    /// Page id
    pub fn id(&self) -> PageId {
        self.id
    }

    /// Page name
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Parent page, `None` for a root page
    pub fn parent(&self) -> Option<PageId> {
        self.parent
    }

    /// Bound item ids in navigation order
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page has no bindings at all
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `item` is bound to this page
    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    /// Cursor position (index into [`Page::items`])
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Item holding the cursor
    pub fn focused_item(&self) -> Option<ItemId> {
        self.cursor.and_then(|pos| self.items.get(pos).copied())
    }

    /// Whether the focused item grabs navigation input
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Item focused and selected on page entry
    pub fn auto_select(&self) -> Option<ItemId> {
        self.auto_select
    }

    pub(crate) fn bind(&mut self, item: ItemId) -> Result<(), ItemId> {
        self.items.push(item)
    }

    pub(crate) fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub(crate) fn set_auto_select(&mut self, item: ItemId) {
        self.auto_select = Some(item);
    }

    pub(crate) fn set_cursor(&mut self, pos: Option<usize>) {
        self.cursor = pos;
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Drop cursor and selection
    pub(crate) fn reset(&mut self) {
        self.cursor = None;
        self.selected = false;
    }
}
