//! Placement helpers
//!
//! Widgets draw at a cell position. The column is interpreted according to
//! the alignment: first cell for `Left`, middle cell for `Center`, last cell
//! for `Right`.

use core::fmt::Write;

use heapless::String;
use muipp_display::screen::LINE_BYTES;
use muipp_display::{DisplayBackend, DisplayError};

/// One rendered line of text
pub type LineText = String<LINE_BYTES>;

/// Horizontal alignment relative to the anchor column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Anchor cell and alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    pub row: u8,
    pub col: u8,
    pub align: Align,
}

impl Position {
    /// Left-aligned position
    pub const fn new(row: u8, col: u8) -> Self {
        Self {
            row,
            col,
            align: Align::Left,
        }
    }

    /// Same anchor with another alignment
    pub const fn aligned(self, align: Align) -> Self {
        Self { align, ..self }
    }

    /// Same column and alignment on another row
    pub const fn on_row(self, row: u8) -> Self {
        Self { row, ..self }
    }

    /// First column of a `width`-cell text
    pub fn start_col(&self, width: usize) -> u8 {
        let width = width.min(u8::MAX as usize) as u8;
        match self.align {
            Align::Left => self.col,
            Align::Center => self.col.saturating_sub(width / 2),
            Align::Right => self.col.saturating_add(1).saturating_sub(width),
        }
    }
}

/// Number of cells `text` occupies
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Draw aligned text, returning the covered columns (start, end exclusive)
pub fn draw(
    display: &mut dyn DisplayBackend,
    pos: Position,
    text: &str,
) -> Result<(u8, u8), DisplayError> {
    let (cols, _) = display.dimensions();
    let start = pos.start_col(width(text));
    if text.is_empty() {
        let start = start.min(cols);
        return Ok((start, start));
    }
    display.draw_text(pos.row, start, text)?;
    let end = (start as usize + width(text)).min(cols as usize) as u8;
    Ok((start, end))
}

/// Invert a column span, ignoring empty spans
pub fn invert(display: &mut dyn DisplayBackend, row: u8, span: (u8, u8)) -> Result<(), DisplayError> {
    if span.1 > span.0 {
        display.invert_region(row, span.0, span.1)
    } else {
        Ok(())
    }
}

/// Format into a line, dropping whatever does not fit
pub fn format(args: core::fmt::Arguments<'_>) -> LineText {
    let mut line = LineText::new();
    let _ = line.write_fmt(args);
    line
}

/// Greedy word wrap
///
/// Breaks at spaces and newlines; words longer than `width` are split.
pub struct Wrap<'a> {
    rest: &'a str,
    width: usize,
}

impl<'a> Wrap<'a> {
    /// Wrap `text` into lines of at most `width` cells
    pub fn new(text: &'a str, width: usize) -> Self {
        Self {
            rest: text,
            width: width.max(1),
        }
    }
}

impl<'a> Iterator for Wrap<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.rest = self.rest.trim_start_matches(' ');
        if self.rest.is_empty() {
            return None;
        }

        // Byte offset just past `width` chars, or the whole remainder
        let cut = self
            .rest
            .char_indices()
            .nth(self.width)
            .map_or(self.rest.len(), |(i, _)| i);
        let window = &self.rest[..cut];

        if let Some(nl) = window.find('\n') {
            let line = &self.rest[..nl];
            self.rest = &self.rest[nl + 1..];
            return Some(line.trim_end());
        }

        let fits = cut == self.rest.len() || self.rest[cut..].starts_with(|c: char| c == ' ' || c == '\n');
        let end = if fits {
            cut
        } else {
            match window.rfind(' ') {
                Some(space) if space > 0 => space,
                _ => cut,
            }
        };
        let line = &self.rest[..end];
        self.rest = &self.rest[end..];
        if self.rest.starts_with('\n') {
            self.rest = &self.rest[1..];
        }
        Some(line.trim_end())
    }
}
