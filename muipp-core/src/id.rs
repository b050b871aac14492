//! Item and page identifiers

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Item identifier
///
/// Zero is reserved and never handed out by the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemId(pub u32);

/// Page identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageId(pub u32);

impl ItemId {
    /// Raw id value
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Interpret an event parameter as an item id
    pub fn from_param(param: i32) -> Option<Self> {
        u32::try_from(param).ok().filter(|v| *v != 0).map(ItemId)
    }
}

impl PageId {
    /// Raw id value
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Interpret an event parameter as a page id
    pub fn from_param(param: i32) -> Option<Self> {
        u32::try_from(param).ok().filter(|v| *v != 0).map(PageId)
    }
}

/// Sequential id generator
///
/// Probes upward from the last issued value and skips anything the caller
/// reports as taken, so fixed ids chosen by the application and generated
/// ids never collide.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: u32,
}

impl IdAllocator {
    /// Create an allocator that starts at 1
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Last value handed out (0 before the first call)
    pub fn last(&self) -> u32 {
        self.last
    }

    /// Return the next id for which `in_use` is false
    pub fn next(&mut self, in_use: impl Fn(u32) -> bool) -> u32 {
        loop {
            self.last = self.last.wrapping_add(1);
            if self.last != 0 && !in_use(self.last) {
                return self.last;
            }
        }
    }
}
