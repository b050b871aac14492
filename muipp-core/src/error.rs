//! Engine error taxonomy

use core::fmt;

/// Errors returned by registration and navigation calls
///
/// Registration errors never leave a partial change behind. `dispatch`
/// does not surface any of these; a failed directive becomes a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuError {
    /// Item id is already registered
    DuplicateId,
    /// Page id or name not found
    UnknownPage,
    /// Item id not registered, or not bound to the page in question
    UnknownItem,
    /// Page has no focusable items
    Empty,
    /// Id zero given where a real id is required
    InvalidId,
    /// A fixed-capacity registry is full
    CapacityExceeded,
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::DuplicateId => f.write_str("item id already registered"),
            MenuError::UnknownPage => f.write_str("unknown page"),
            MenuError::UnknownItem => f.write_str("unknown item"),
            MenuError::Empty => f.write_str("page has no focusable items"),
            MenuError::InvalidId => f.write_str("id zero is reserved"),
            MenuError::CapacityExceeded => f.write_str("registry capacity exceeded"),
        }
    }
}
