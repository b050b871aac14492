//! Display and input boundary for the muipp menu engine
//!
//! This crate provides:
//! - `DisplayBackend` trait for the render target items draw into
//! - `InputSource` trait and `NavigationEvent` enum for button/encoder input
//! - `Screen`, a character-cell buffer implementing `DisplayBackend`
//!
//! # Architecture
//!
//! The menu engine never talks to display hardware. Items receive a
//! `&mut dyn DisplayBackend` during the render pass and draw text and
//! inverted regions in character cells. A hardware driver (OLED over I2C,
//! a UART terminal, ...) implements the trait; `Screen` implements it in
//! memory so a host can render a frame and inspect it.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod input;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use input::{InputSource, NavigationEvent};
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
