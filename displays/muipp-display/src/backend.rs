//! Display backend trait
//!
//! Defines the render target menu items draw into.

use core::fmt;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Row or column outside the display
    InvalidCoordinates,
    /// Display not ready to draw
    NotInitialized,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::InvalidCoordinates => f.write_str("coordinates outside the display"),
            DisplayError::NotInitialized => f.write_str("display not initialized"),
        }
    }
}

/// Character-cell display backend
///
/// Implementations handle the specifics of OLED, TFT, or terminal displays.
/// Coordinates are in character cells, origin at the top left.
pub trait DisplayBackend {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text at the specified row and column
    ///
    /// - `row`: Row number (0-based)
    /// - `col`: Column number in characters (0-based)
    /// - `text`: Text to display, clipped at the right edge
    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Invert a region on the specified row (for focus/selection highlighting)
    ///
    /// - `row`: Row number
    /// - `start_col`: Starting column
    /// - `end_col`: Ending column (exclusive)
    fn invert_region(&mut self, row: u8, start_col: u8, end_col: u8) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    ///
    /// For displays with internal buffers, this sends the buffer to the hardware.
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);

    /// Check if the display is ready
    ///
    /// The menu engine refuses to render into a display that is not ready.
    fn is_ready(&self) -> bool;
}
