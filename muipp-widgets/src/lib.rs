//! Menu widgets
//!
//! This crate provides concrete implementations of the `MenuItem` trait
//! defined in muipp-core, drawn into character-cell displays:
//!
//! - Text (page title, static word-wrapped text, callback text)
//! - Buttons (action button, back button, checkbox)
//! - Lists (dynamic scroll list, values list)
//! - Number slider
//!
//! Every widget is placed at a (row, col) cell with a horizontal alignment.
//! Values live inside the widget; applications observe them through
//! callbacks or accessors.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod button;
pub mod layout;
pub mod list;
pub mod slider;
pub mod text;

pub use button::{ActionButton, BackButton, CheckBox};
pub use layout::{Align, LineText, Position};
pub use list::{ListOptions, ScrollList, ValuesList};
pub use slider::NumberSlider;
pub use text::{PageTitle, StaticText, TextCallback};
