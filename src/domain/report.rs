//! Read-only views over library state
//!
//! These are what the display operations produce. Rendering them (text or
//! JSON) is up to the caller.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::id::{ItemId, MemberId};
use super::item::{Item, ItemStatus, MediaType};

/// One-line view of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSummary {
    pub id: ItemId,
    pub title: String,
    pub media_type: MediaType,
    pub status: ItemStatus,
}

impl From<&Item> for ItemSummary {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            media_type: item.media_type(),
            status: item.status(),
        }
    }
}

/// Items of one media type, in catalog order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogGroup {
    pub media_type: MediaType,
    pub items: Vec<Item>,
}

/// Catalog grouped by media type, groups in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogReport {
    pub groups: Vec<CatalogGroup>,
}

impl CatalogReport {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of items across all groups
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}

/// A member and what they currently hold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberReport {
    pub id: MemberId,
    pub name: String,
    pub joined_at: DateTime<Utc>,
    pub borrowed: Vec<ItemSummary>,
}

/// Count of items for one media type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MediaTypeCount {
    pub media_type: MediaType,
    pub count: usize,
}

/// Library-wide totals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    pub total_items: usize,
    pub total_members: usize,
    pub borrowed_items: usize,
    /// Per-type counts, in order of first appearance in the catalog
    pub by_media_type: Vec<MediaTypeCount>,
}
