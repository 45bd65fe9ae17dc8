//! Library members and their loans
//!
//! A member keeps the ids of the items on loan to them, in borrow order. The
//! items themselves stay in the catalog.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::{self, Write as _};

use super::id::{IdAllocator, ItemId, MemberId};
use super::item::Item;

/// Maximum number of items a member may hold at once
pub const BORROW_CAP: usize = 3;

/// Default format for join dates
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a join date, falling back to [`DEFAULT_DATE_FORMAT`] when
/// `date_format` holds a specifier chrono cannot render
pub fn format_join_date(joined_at: DateTime<Utc>, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", joined_at.format(date_format)).is_err() {
        out.clear();
        out.push_str(&joined_at.format(DEFAULT_DATE_FORMAT).to_string());
    }
    out
}

/// Result of a borrow attempt
///
/// None of these are errors: a refusal is an ordinary answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BorrowOutcome {
    /// Item is now on loan to the member
    Borrowed { member: String, title: String },

    /// Member already holds [`BORROW_CAP`] items
    LimitReached { member: String, held: usize },

    /// Item exists but its status does not allow lending
    Unavailable {
        member: String,
        title: String,
        reason: String,
    },

    /// Member or item lookup failed
    NotFound { target: String },
}

impl BorrowOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BorrowOutcome::Borrowed { .. })
    }
}

impl fmt::Display for BorrowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BorrowOutcome::Borrowed { member, title } => {
                write!(f, "{} borrowed '{}'", member, title)
            }
            BorrowOutcome::LimitReached { member, held } => write!(
                f,
                "{} already has {} items on loan (limit {}); cannot borrow more",
                member, held, BORROW_CAP
            ),
            BorrowOutcome::Unavailable {
                member,
                title,
                reason,
            } => write!(f, "{} could not borrow '{}': {}", member, title, reason),
            BorrowOutcome::NotFound { target } => write!(f, "{} not found", target),
        }
    }
}

/// Result of a return attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReturnOutcome {
    Returned { member: String, title: String },

    /// The member does not hold this item
    NotBorrowed { member: String, title: String },

    NotFound { target: String },
}

impl ReturnOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ReturnOutcome::Returned { .. })
    }
}

impl fmt::Display for ReturnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnOutcome::Returned { member, title } => {
                write!(f, "{} returned '{}'", member, title)
            }
            ReturnOutcome::NotBorrowed { member, title } => {
                write!(f, "{} did not borrow '{}'", member, title)
            }
            ReturnOutcome::NotFound { target } => write!(f, "{} not found", target),
        }
    }
}

/// A registered library member
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,

    /// Display name
    pub name: String,

    /// When the member registered
    pub joined_at: DateTime<Utc>,

    /// Items on loan, in borrow order
    borrowed: Vec<ItemId>,
}

impl Member {
    /// Creates a member joining now, taking the next id from `ids`
    pub fn new(ids: &mut IdAllocator, name: impl Into<String>) -> Self {
        Self::with_id(ids.allocate(), name, Utc::now())
    }

    /// Creates a member with an explicit id and join time
    pub fn with_id(id: MemberId, name: impl Into<String>, joined_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            joined_at,
            borrowed: Vec::new(),
        }
    }

    /// Attempts to take `item` on loan.
    ///
    /// On anything but [`BorrowOutcome::Borrowed`] neither the member nor the
    /// item is changed.
    pub fn borrow_item(&mut self, item: &mut Item) -> BorrowOutcome {
        if self.borrowed.len() >= BORROW_CAP {
            return BorrowOutcome::LimitReached {
                member: self.name.clone(),
                held: self.borrowed.len(),
            };
        }

        match item.mark_as_borrowed() {
            Ok(()) => {
                self.borrowed.push(item.id);
                BorrowOutcome::Borrowed {
                    member: self.name.clone(),
                    title: item.title.clone(),
                }
            }
            Err(e) => BorrowOutcome::Unavailable {
                member: self.name.clone(),
                title: item.title.clone(),
                reason: e.to_string(),
            },
        }
    }

    /// Hands `item` back if this member holds it
    pub fn return_item(&mut self, item: &mut Item) -> ReturnOutcome {
        let Some(pos) = self.borrowed.iter().position(|id| *id == item.id) else {
            return ReturnOutcome::NotBorrowed {
                member: self.name.clone(),
                title: item.title.clone(),
            };
        };

        item.mark_as_available();
        self.borrowed.remove(pos);
        ReturnOutcome::Returned {
            member: self.name.clone(),
            title: item.title.clone(),
        }
    }

    /// Snapshot of the items on loan, in borrow order
    pub fn borrowed_items(&self) -> Vec<ItemId> {
        self.borrowed.clone()
    }

    pub fn borrowed_count(&self) -> usize {
        self.borrowed.len()
    }

    /// Returns true if this member holds the item
    pub fn holds(&self, item_id: ItemId) -> bool {
        self.borrowed.contains(&item_id)
    }

    /// Identity line: id, name and join date in the given chrono format
    pub fn identity_line(&self, date_format: &str) -> String {
        format!(
            "[{}] {} (joined {})",
            self.id,
            self.name,
            format_join_date(self.joined_at, date_format)
        )
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identity_line(DEFAULT_DATE_FORMAT))
    }
}
