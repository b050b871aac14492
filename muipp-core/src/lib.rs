//! Board-agnostic menu engine
//!
//! This crate contains the navigation logic for page/item menus driven by
//! a handful of buttons or a rotary encoder:
//!
//! - Event vocabulary split into common, engine-internal and item-value bands
//! - Item capability trait (selectable / constant) and shared item state
//! - Pages as ordered lists of item ids with per-page cursor and selection
//! - `MenuEngine`: registries, dispatch, feedback handling and render pass
//!
//! Rendering and input hardware stay outside; see `muipp-display`.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

#[macro_use]
mod fmt;

pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod id;
pub mod item;
pub mod page;

#[cfg(test)]
pub(crate) mod testing;

pub use engine::MenuEngine;
pub use error::MenuError;
pub use event::{Event, EventBand, EventKind, Label, Payload};
pub use id::{IdAllocator, ItemId, PageId};
pub use item::{ItemCore, ItemOptions, MenuItem};
pub use page::{Page, PageState};
