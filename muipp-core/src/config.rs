//! Capacity configuration
//!
//! All engine storage is fixed-capacity. These limits size the heapless
//! registries and are checked on registration.

/// Maximum number of pages in one engine
pub const MAX_PAGES: usize = 32;

/// Maximum number of items in one engine
pub const MAX_ITEMS: usize = 64;

/// Maximum item bindings on a single page
pub const MAX_PAGE_ITEMS: usize = 16;

/// Maximum page/item name length in bytes (longer names are truncated)
pub const MAX_NAME_LEN: usize = 24;

/// Maximum size of a blob event payload
pub const MAX_BLOB_LEN: usize = 32;

/// Nesting limit for engine/item feedback within one dispatch
pub const MAX_NESTED_EVENTS: u8 = 5;
