//! Shelf - an in-memory library catalog and membership tracker
//!
//! Items (novels, magazines, textbooks, reference and audio books) live in a
//! catalog; registered members borrow and return them, holding at most
//! three at a time.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{BorrowOutcome, Item, ItemId, ItemStatus, LibraryManager, Member, MemberId, ReturnOutcome};
