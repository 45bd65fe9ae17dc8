//! Domain models for the library
//!
//! Contains the catalog, membership and lending rules without any I/O concerns.

mod id;
mod item;
mod member;
mod library;
mod report;

pub use id::{IdAllocator, IdError, ItemId, MemberId, FIRST_ITEM_ID, MEMBER_ID_OFFSET};
pub use item::{Item, ItemDetails, ItemError, ItemStatus, MediaType};
pub use member::{
    format_join_date, BorrowOutcome, Member, ReturnOutcome, BORROW_CAP, DEFAULT_DATE_FORMAT,
};
pub use library::{LibraryError, LibraryManager};
pub use report::{CatalogGroup, CatalogReport, ItemSummary, MediaTypeCount, MemberReport, StatsReport};
