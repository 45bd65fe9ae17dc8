//! Catalog item domain model
//!
//! Every item shares identity, title, publication year and a lending status.
//! What differs per kind of item lives in [`ItemDetails`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::id::{IdAllocator, ItemId};

/// Kind of catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Novel,
    Magazine,
    Textbook,
    ReferenceBook,
    AudioBook,
}

impl MediaType {
    /// Returns a display label for the media type
    pub fn label(&self) -> &'static str {
        match self {
            MediaType::Novel => "Novel",
            MediaType::Magazine => "Magazine",
            MediaType::Textbook => "Textbook",
            MediaType::ReferenceBook => "Reference book",
            MediaType::AudioBook => "Audio book",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lending status of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    #[default]
    Available,
    Borrowed,
    Reserved,
    UnderRepair,
}

impl ItemStatus {
    /// Returns true if the item can be lent out
    pub fn is_available(&self) -> bool {
        matches!(self, ItemStatus::Available)
    }

    /// Returns true if the item is currently on loan
    pub fn is_borrowed(&self) -> bool {
        matches!(self, ItemStatus::Borrowed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Available => "available",
            ItemStatus::Borrowed => "borrowed",
            ItemStatus::Reserved => "reserved",
            ItemStatus::UnderRepair => "under repair",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ItemError {
    #[error("current status '{status}' does not allow borrowing")]
    InvalidState { status: ItemStatus },
}

/// Fields specific to each kind of item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemDetails {
    Novel {
        author: String,
        genre: String,
    },
    Magazine {
        publisher: String,
        issue_number: u32,
    },
    Textbook {
        author: String,
        subject: String,
        publisher: String,
    },
    ReferenceBook {
        author: String,
        edition: u32,
    },
    AudioBook {
        author: String,
        narrator: String,
        duration_minutes: u32,
    },
}

impl ItemDetails {
    pub fn novel(author: impl Into<String>, genre: impl Into<String>) -> Self {
        ItemDetails::Novel {
            author: author.into(),
            genre: genre.into(),
        }
    }

    pub fn magazine(publisher: impl Into<String>, issue_number: u32) -> Self {
        ItemDetails::Magazine {
            publisher: publisher.into(),
            issue_number,
        }
    }

    pub fn textbook(
        author: impl Into<String>,
        subject: impl Into<String>,
        publisher: impl Into<String>,
    ) -> Self {
        ItemDetails::Textbook {
            author: author.into(),
            subject: subject.into(),
            publisher: publisher.into(),
        }
    }

    pub fn reference_book(author: impl Into<String>, edition: u32) -> Self {
        ItemDetails::ReferenceBook {
            author: author.into(),
            edition,
        }
    }

    pub fn audio_book(
        author: impl Into<String>,
        narrator: impl Into<String>,
        duration_minutes: u32,
    ) -> Self {
        ItemDetails::AudioBook {
            author: author.into(),
            narrator: narrator.into(),
            duration_minutes,
        }
    }

    /// The media type tag implied by these details
    pub fn media_type(&self) -> MediaType {
        match self {
            ItemDetails::Novel { .. } => MediaType::Novel,
            ItemDetails::Magazine { .. } => MediaType::Magazine,
            ItemDetails::Textbook { .. } => MediaType::Textbook,
            ItemDetails::ReferenceBook { .. } => MediaType::ReferenceBook,
            ItemDetails::AudioBook { .. } => MediaType::AudioBook,
        }
    }
}

/// An entry in the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,

    /// Human-readable title
    pub title: String,

    /// Year of publication
    pub publication_year: i32,

    /// Current lending status, changed only through the methods below
    status: ItemStatus,

    /// Kind-specific fields, serialized inline with a `kind` tag
    #[serde(flatten)]
    pub details: ItemDetails,
}

impl Item {
    /// Creates an available item, taking the next id from `ids`
    pub fn new(
        ids: &mut IdAllocator,
        title: impl Into<String>,
        publication_year: i32,
        details: ItemDetails,
    ) -> Self {
        Self::with_id(ids.allocate(), title, publication_year, details)
    }

    /// Creates an available item with an explicit id
    pub fn with_id(
        id: ItemId,
        title: impl Into<String>,
        publication_year: i32,
        details: ItemDetails,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            publication_year,
            status: ItemStatus::Available,
            details,
        }
    }

    pub fn status(&self) -> ItemStatus {
        self.status
    }

    pub fn media_type(&self) -> MediaType {
        self.details.media_type()
    }

    /// Moves the item onto loan; only an available item can be borrowed
    pub fn mark_as_borrowed(&mut self) -> Result<(), ItemError> {
        if !self.status.is_available() {
            return Err(ItemError::InvalidState {
                status: self.status,
            });
        }
        self.status = ItemStatus::Borrowed;
        Ok(())
    }

    /// Puts the item back on the shelf.
    ///
    /// This resets from every state, including `Reserved` and `UnderRepair`.
    // TODO: keep UnderRepair items out of circulation once a repair-completion
    // operation exists to clear that state.
    pub fn mark_as_available(&mut self) {
        self.status = ItemStatus::Available;
    }

    /// Places the item in an arbitrary state.
    ///
    /// The lending flow never produces `Reserved` or `UnderRepair`; this is
    /// how outside code (desk staff, seed data) puts an item there.
    pub fn set_status(&mut self, status: ItemStatus) {
        self.status = status;
    }

    /// Full, kind-specific description including the current status
    pub fn details(&self) -> String {
        let head = format!(
            "[{}] {} ({}, {})",
            self.id,
            self.title,
            self.media_type(),
            self.publication_year
        );
        let body = match &self.details {
            ItemDetails::Novel { author, genre } => {
                format!("author: {}; genre: {}", author, genre)
            }
            ItemDetails::Magazine {
                publisher,
                issue_number,
            } => format!("publisher: {}; issue: no. {}", publisher, issue_number),
            ItemDetails::Textbook {
                author,
                subject,
                publisher,
            } => format!(
                "author: {}; subject: {}; publisher: {}",
                author, subject, publisher
            ),
            ItemDetails::ReferenceBook { author, edition } => {
                format!("author: {}; edition: {}", author, edition)
            }
            ItemDetails::AudioBook {
                author,
                narrator,
                duration_minutes,
            } => format!(
                "author: {}; narrated by: {}; length: {}h{:02}m",
                author,
                narrator,
                duration_minutes / 60,
                duration_minutes % 60
            ),
        };
        format!("{} - {}; status: {}", head, body, self.status)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({})", self.id, self.title, self.media_type())
    }
}
