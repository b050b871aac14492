//! Screen buffer types
//!
//! Provides a character-cell screen buffer for text-mode displays.

use heapless::String;

use crate::backend::{DisplayBackend, DisplayError};

/// Number of character rows (128x64 OLED with a 6x8 font)
pub const SCREEN_ROWS: usize = 8;

/// Number of character columns
pub const SCREEN_COLS: usize = 21;

/// Maximum bytes of one rendered line (every cell may hold a 4-byte char)
pub const LINE_BYTES: usize = SCREEN_COLS * 4;

/// In-memory character display
///
/// Implements `DisplayBackend` so menus can be rendered without hardware.
/// A hardware driver can copy the cells and highlights out after a render
/// pass, or tests can read them back with [`Screen::line`].
#[derive(Clone)]
pub struct Screen {
    /// Character cells, blank cells hold a space
    cells: [[char; SCREEN_COLS]; SCREEN_ROWS],
    /// Inverted region per row (start_col, end_col exclusive)
    highlights: [Option<(u8, u8)>; SCREEN_ROWS],
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub const fn new() -> Self {
        Self {
            cells: [[' '; SCREEN_COLS]; SCREEN_ROWS],
            highlights: [None; SCREEN_ROWS],
            dirty: true,
        }
    }

    /// Get the content of a row with trailing blanks removed
    pub fn line(&self, row: usize) -> Option<String<LINE_BYTES>> {
        let cells = self.cells.get(row)?;
        let used = cells.iter().rposition(|c| *c != ' ').map_or(0, |i| i + 1);
        let mut line = String::new();
        for c in &cells[..used] {
            // LINE_BYTES covers the worst case, push cannot fail
            let _ = line.push(*c);
        }
        Some(line)
    }

    /// Character at a cell
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Get highlight region for a row
    pub fn highlight(&self, row: usize) -> Option<(u8, u8)> {
        self.highlights.get(row).copied().flatten()
    }

    /// Get the first highlighted region as (row, start_col, end_col)
    pub fn selection(&self) -> Option<(u8, u8, u8)> {
        self.highlights
            .iter()
            .enumerate()
            .find_map(|(row, h)| h.map(|(start, end)| (row as u8, start, end)))
    }

    /// Find the first row containing `needle`
    pub fn find(&self, needle: &str) -> Option<usize> {
        (0..SCREEN_ROWS).find(|row| {
            self.line(*row)
                .map(|line| line.as_str().contains(needle))
                .unwrap_or(false)
        })
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl DisplayBackend for Screen {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for row in &mut self.cells {
            row.fill(' ');
        }
        self.highlights = [None; SCREEN_ROWS];
        self.dirty = true;
        Ok(())
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        let (row, col) = (row as usize, col as usize);
        if row >= SCREEN_ROWS || col >= SCREEN_COLS {
            return Err(DisplayError::InvalidCoordinates);
        }
        for (cell, c) in self.cells[row][col..].iter_mut().zip(text.chars()) {
            *cell = c;
        }
        self.dirty = true;
        Ok(())
    }

    fn invert_region(&mut self, row: u8, start_col: u8, end_col: u8) -> Result<(), DisplayError> {
        let end_col = end_col.min(SCREEN_COLS as u8);
        if row as usize >= SCREEN_ROWS || start_col >= end_col {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.highlights[row as usize] = Some((start_col, end_col));
        self.dirty = true;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.mark_clean();
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (SCREEN_COLS as u8, SCREEN_ROWS as u8)
    }

    fn is_ready(&self) -> bool {
        true
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for row in 0..SCREEN_ROWS {
            if row > 0 {
                defmt::write!(f, ", ");
            }
            if let Some(line) = self.line(row) {
                defmt::write!(f, "{}", line.as_str());
            }
        }
        defmt::write!(f, "]");
    }
}
