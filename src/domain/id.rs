//! Identifiers for catalog items and members
//!
//! Ids are plain integers handed out by an [`IdAllocator`]. Items and members
//! draw from separate allocators:
//! - Item ids start at 1 (`1, 2, 3, ...`)
//! - Member ids start after a fixed offset (`1001, 1002, ...`)
//!
//! Allocators never hand out the same id twice, and ids are never reused.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// First id handed out for catalog items
pub const FIRST_ITEM_ID: u32 = 1;

/// Member ids are numbered from this offset (the first member gets offset + 1)
pub const MEMBER_ID_OFFSET: u32 = 1000;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid item ID: expected a positive integer, got '{0}'")]
    InvalidItemId(String),

    #[error("Invalid member ID: expected a positive integer, got '{0}'")]
    InvalidMemberId(String),
}

/// Catalog item id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Accept the `#3` form used in listings as well as a bare number
        let digits = s.strip_prefix('#').unwrap_or(s);
        digits
            .parse::<u32>()
            .ok()
            .filter(|v| *v > 0)
            .map(Self)
            .ok_or_else(|| IdError::InvalidItemId(s.to_string()))
    }
}

/// Member id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(u32);

impl MemberId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for MemberId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MemberId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.parse::<u32>()
            .ok()
            .filter(|v| *v > 0)
            .map(Self)
            .ok_or_else(|| IdError::InvalidMemberId(s.to_string()))
    }
}

/// Monotonic id source
///
/// Owned by whoever owns the collection the ids key into, and passed to
/// constructors explicitly. There is no process-wide counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Creates an allocator whose first id is `first`
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Allocator for catalog items
    pub fn for_items() -> Self {
        Self::starting_at(FIRST_ITEM_ID)
    }

    /// Allocator for members
    pub fn for_members() -> Self {
        Self::starting_at(MEMBER_ID_OFFSET + 1)
    }

    /// Hands out the next id
    pub fn allocate<T: From<u32>>(&mut self) -> T {
        let id = self.next;
        self.next += 1;
        T::from(id)
    }

    /// Returns the id the next call to [`allocate`](Self::allocate) will produce
    pub fn peek(&self) -> u32 {
        self.next
    }

    /// Marks `value` as taken so later allocations start past it
    pub fn reserve(&mut self, value: u32) {
        if value >= self.next {
            self.next = value.saturating_add(1);
        }
    }
}
