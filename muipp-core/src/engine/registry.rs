//! Page and item registration

use alloc::boxed::Box;

use super::MenuEngine;
use crate::error::MenuError;
use crate::id::{ItemId, PageId};
use crate::item::MenuItem;
use crate::page::Page;

impl MenuEngine {
    /// Create a page
    ///
    /// `parent` is not validated: a page whose parent does not exist quits
    /// the menu on escape, like a root page.
    pub fn create_page(&mut self, name: &str, parent: Option<PageId>) -> Result<PageId, MenuError> {
        if self.pages.is_full() {
            warn!("page registry full, cannot create {}", name);
            return Err(MenuError::CapacityExceeded);
        }
        let id = PageId(self.next_id().get());
        self.pages
            .push(Page::new(id, name, parent))
            .map_err(|_| MenuError::CapacityExceeded)?;
        debug!("page {} created: {}", id.get(), name);
        Ok(id)
    }

    /// Register an item, optionally binding it to a page
    ///
    /// The engine takes ownership. On error nothing is registered or bound.
    pub fn register_item(
        &mut self,
        item: impl MenuItem + 'static,
        page: Option<PageId>,
    ) -> Result<(), MenuError> {
        self.register_boxed(Box::new(item), page)
    }

    /// Register an already boxed item
    pub fn register_boxed(
        &mut self,
        item: Box<dyn MenuItem>,
        page: Option<PageId>,
    ) -> Result<(), MenuError> {
        let id = item.id();
        if id.get() == 0 {
            return Err(MenuError::InvalidId);
        }
        if self.item_index(id).is_some() {
            warn!("item {} already registered", id.get());
            return Err(MenuError::DuplicateId);
        }
        if self.items.is_full() {
            return Err(MenuError::CapacityExceeded);
        }
        let page_index = match page {
            Some(page) => {
                let index = self.page_index(page).ok_or(MenuError::UnknownPage)?;
                if self.pages[index].is_full() {
                    return Err(MenuError::CapacityExceeded);
                }
                Some(index)
            }
            None => None,
        };

        // Capacity checked above, neither push can fail now
        self.items
            .push(item)
            .map_err(|_| MenuError::CapacityExceeded)?;
        if let Some(index) = page_index {
            self.pages[index]
                .bind(id)
                .map_err(|_| MenuError::CapacityExceeded)?;
        }
        debug!("item {} registered", id.get());
        Ok(())
    }

    /// Append an item to a page's navigation order
    ///
    /// Binding the same item twice gives it two cursor stops.
    pub fn bind_item_to_page(&mut self, item: ItemId, page: PageId) -> Result<(), MenuError> {
        let index = self.page_index(page).ok_or(MenuError::UnknownPage)?;
        if self.item_index(item).is_none() {
            return Err(MenuError::UnknownItem);
        }
        self.pages[index]
            .bind(item)
            .map_err(|_| MenuError::CapacityExceeded)?;
        trace!("item {} bound to page {}", item.get(), page.get());
        Ok(())
    }

    /// Mark the item focused and selected whenever the page is entered
    /// without an explicit item
    pub fn set_auto_select(&mut self, page: PageId, item: ItemId) -> Result<(), MenuError> {
        let index = self.page_index(page).ok_or(MenuError::UnknownPage)?;
        if self.item_index(item).is_none() || !self.pages[index].contains(item) {
            return Err(MenuError::UnknownItem);
        }
        self.pages[index].set_auto_select(item);
        Ok(())
    }
}
