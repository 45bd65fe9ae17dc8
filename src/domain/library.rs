//! The library: catalog plus member roster
//!
//! [`LibraryManager`] owns every [`Item`] and [`Member`]. Members refer to
//! items by [`ItemId`], so status changes made through the catalog are seen by
//! whoever holds the item.

use super::id::{IdAllocator, ItemId, MemberId};
use super::item::{Item, ItemDetails, MediaType};
use super::member::{BorrowOutcome, Member, ReturnOutcome};
use super::report::{
    CatalogGroup, CatalogReport, ItemSummary, MediaTypeCount, MemberReport, StatsReport,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LibraryError {
    #[error("Item ID {0} is already in the catalog")]
    DuplicateItemId(ItemId),

    #[error("Member ID {0} is already registered")]
    DuplicateMemberId(MemberId),
}

#[derive(Debug, Clone)]
pub struct LibraryManager {
    catalog: Vec<Item>,
    roster: Vec<Member>,
    item_ids: IdAllocator,
    member_ids: IdAllocator,
}

impl Default for LibraryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryManager {
    /// Creates an empty library
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            roster: Vec::new(),
            item_ids: IdAllocator::for_items(),
            member_ids: IdAllocator::for_members(),
        }
    }

    /// Appends an item built outside the library.
    ///
    /// Rejects an id already in the catalog. Ids at or past the library's
    /// allocator are reserved so [`catalog_item`](Self::catalog_item) never
    /// hands them out again.
    pub fn add_item(&mut self, item: Item) -> Result<ItemId, LibraryError> {
        if self.find_item_by_id(item.id).is_some() {
            return Err(LibraryError::DuplicateItemId(item.id));
        }
        self.item_ids.reserve(item.id.value());
        Ok(self.push_item(item))
    }

    /// Creates an item with the library's next item id and adds it
    pub fn catalog_item(
        &mut self,
        title: impl Into<String>,
        publication_year: i32,
        details: ItemDetails,
    ) -> ItemId {
        let item = Item::new(&mut self.item_ids, title, publication_year, details);
        self.push_item(item)
    }

    /// Appends a member built outside the library; same id rules as [`add_item`](Self::add_item)
    pub fn register_member(&mut self, member: Member) -> Result<MemberId, LibraryError> {
        if self.find_member_by_id(member.id).is_some() {
            return Err(LibraryError::DuplicateMemberId(member.id));
        }
        self.member_ids.reserve(member.id.value());
        Ok(self.push_member(member))
    }

    /// Creates a member joining now with the library's next member id and registers them
    pub fn enroll(&mut self, name: impl Into<String>) -> MemberId {
        let member = Member::new(&mut self.member_ids, name);
        self.push_member(member)
    }

    fn push_item(&mut self, item: Item) -> ItemId {
        let id = item.id;
        log::info!("catalog: added {}", item);
        self.catalog.push(item);
        id
    }

    fn push_member(&mut self, member: Member) -> MemberId {
        let id = member.id;
        log::info!("roster: registered {}", member);
        self.roster.push(member);
        id
    }

    /// All items, in catalog order
    pub fn items(&self) -> &[Item] {
        &self.catalog
    }

    /// All members, in registration order
    pub fn members(&self) -> &[Member] {
        &self.roster
    }

    pub fn find_item_by_id(&self, id: ItemId) -> Option<&Item> {
        self.catalog.iter().find(|item| item.id == id)
    }

    pub fn find_item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.catalog.iter_mut().find(|item| item.id == id)
    }

    pub fn find_member_by_id(&self, id: MemberId) -> Option<&Member> {
        self.roster.iter().find(|member| member.id == id)
    }

    /// Case-insensitive exact match on the member's name
    pub fn find_member_by_name(&self, name: &str) -> Option<&Member> {
        let wanted = name.to_lowercase();
        self.roster
            .iter()
            .find(|member| member.name.to_lowercase() == wanted)
    }

    pub fn find_member_mut(&mut self, id: MemberId) -> Option<&mut Member> {
        self.roster.iter_mut().find(|member| member.id == id)
    }

    /// A roster member and a catalog item, borrowed mutably together.
    ///
    /// This is how callers drive [`Member::borrow_item`] and
    /// [`Member::return_item`] directly against the library's own records.
    pub fn member_and_item_mut(
        &mut self,
        member_id: MemberId,
        item_id: ItemId,
    ) -> Option<(&mut Member, &mut Item)> {
        self.split_mut(member_id, item_id).ok()
    }

    /// Lends an item to a member, both looked up by id
    pub fn lend(&mut self, member_id: MemberId, item_id: ItemId) -> BorrowOutcome {
        let (member, item) = match self.split_mut(member_id, item_id) {
            Ok(pair) => pair,
            Err(target) => return BorrowOutcome::NotFound { target },
        };

        let outcome = member.borrow_item(item);
        log::debug!("lend {} -> {}: {}", item_id, member_id, outcome);
        outcome
    }

    /// Takes an item back from a member, both looked up by id
    pub fn take_back(&mut self, member_id: MemberId, item_id: ItemId) -> ReturnOutcome {
        let (member, item) = match self.split_mut(member_id, item_id) {
            Ok(pair) => pair,
            Err(target) => return ReturnOutcome::NotFound { target },
        };

        let outcome = member.return_item(item);
        log::debug!("return {} <- {}: {}", item_id, member_id, outcome);
        outcome
    }

    /// Roster and catalog are separate fields, so both can be borrowed at once.
    /// On a miss, returns a description of what was not found.
    fn split_mut(
        &mut self,
        member_id: MemberId,
        item_id: ItemId,
    ) -> Result<(&mut Member, &mut Item), String> {
        let member = self
            .roster
            .iter_mut()
            .find(|m| m.id == member_id)
            .ok_or_else(|| format!("member {}", member_id))?;
        let item = self
            .catalog
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| format!("item {}", item_id))?;
        Ok((member, item))
    }

    /// Catalog items grouped by media type
    pub fn catalog_report(&self) -> CatalogReport {
        let groups = self
            .group_by_media_type()
            .into_iter()
            .map(|(media_type, items)| CatalogGroup {
                media_type,
                items: items.into_iter().cloned().collect(),
            })
            .collect();

        CatalogReport { groups }
    }

    /// Every member with the items they hold, in roster order
    pub fn member_report(&self) -> Vec<MemberReport> {
        self.roster
            .iter()
            .map(|member| MemberReport {
                id: member.id,
                name: member.name.clone(),
                joined_at: member.joined_at,
                borrowed: member
                    .borrowed_items()
                    .into_iter()
                    .filter_map(|id| self.find_item_by_id(id))
                    .map(ItemSummary::from)
                    .collect(),
            })
            .collect()
    }

    /// Item, member and loan totals
    pub fn stats(&self) -> StatsReport {
        StatsReport {
            total_items: self.catalog.len(),
            total_members: self.roster.len(),
            borrowed_items: self
                .catalog
                .iter()
                .filter(|item| item.status().is_borrowed())
                .count(),
            by_media_type: self
                .group_by_media_type()
                .into_iter()
                .map(|(media_type, items)| MediaTypeCount {
                    media_type,
                    count: items.len(),
                })
                .collect(),
        }
    }

    /// Groups in order of first appearance, items in catalog order
    fn group_by_media_type(&self) -> Vec<(MediaType, Vec<&Item>)> {
        let mut groups: Vec<(MediaType, Vec<&Item>)> = Vec::new();
        for item in &self.catalog {
            let media_type = item.media_type();
            match groups.iter_mut().find(|(t, _)| *t == media_type) {
                Some((_, items)) => items.push(item),
                None => groups.push((media_type, vec![item])),
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::ItemStatus;
    use proptest::prelude::*;

    fn make_library() -> LibraryManager {
        let mut library = LibraryManager::new();
        library.catalog_item("三体", 2008, ItemDetails::novel("刘慈欣", "科幻"));
        library.catalog_item("读者", 2024, ItemDetails::magazine("读者出版社", 12));
        library.catalog_item("活着", 1993, ItemDetails::novel("余华", "文学"));
        library.catalog_item(
            "高等数学",
            2014,
            ItemDetails::textbook("同济大学数学系", "数学", "高等教育出版社"),
        );
        library.enroll("张三");
        library.enroll("Alice");
        library
    }

    #[test]
    fn ids_are_assigned_in_order() {
        let library = make_library();
        let ids: Vec<u32> = library.items().iter().map(|i| i.id.value()).collect();
        let member_ids: Vec<u32> = library.members().iter().map(|m| m.id.value()).collect();

        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(member_ids, vec![1001, 1002]);
    }

    #[test]
    fn find_item_by_id() {
        let library = make_library();

        assert_eq!(library.find_item_by_id(ItemId::new(3)).map(|i| i.title.as_str()), Some("活着"));
        assert!(library.find_item_by_id(ItemId::new(99)).is_none());
    }

    #[test]
    fn find_member_by_name_ignores_case() {
        let library = make_library();

        assert_eq!(library.find_member_by_name("alice").map(|m| m.id), Some(MemberId::new(1002)));
        assert_eq!(library.find_member_by_name("ALICE").map(|m| m.id), Some(MemberId::new(1002)));
        assert!(library.find_member_by_name("Ali").is_none());
        assert!(library.find_member_by_name("王五").is_none());
    }

    #[test]
    fn catalog_groups_in_first_appearance_order() {
        let library = make_library();
        let report = library.catalog_report();

        let order: Vec<MediaType> = report.groups.iter().map(|g| g.media_type).collect();
        assert_eq!(order, vec![MediaType::Novel, MediaType::Magazine, MediaType::Textbook]);

        let novels: Vec<&str> = report.groups[0].items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(novels, vec!["三体", "活着"]);
        assert_eq!(report.item_count(), 4);
    }

    #[test]
    fn empty_catalog_report() {
        let library = LibraryManager::new();

        assert!(library.catalog_report().is_empty());
        assert_eq!(library.stats(), StatsReport::default());
    }

    #[test]
    fn lend_and_take_back_by_id() {
        let mut library = make_library();
        let member = MemberId::new(1001);

        assert!(library.lend(member, ItemId::new(1)).is_success());
        assert_eq!(library.stats().borrowed_items, 1);

        let report = library.member_report();
        assert_eq!(report[0].borrowed.len(), 1);
        assert_eq!(report[0].borrowed[0].status, ItemStatus::Borrowed);
        assert!(report[1].borrowed.is_empty());

        assert!(library.take_back(member, ItemId::new(1)).is_success());
        assert_eq!(library.stats().borrowed_items, 0);
    }

    #[test]
    fn lend_with_unknown_ids() {
        let mut library = make_library();

        assert_eq!(
            library.lend(MemberId::new(7), ItemId::new(1)),
            BorrowOutcome::NotFound {
                target: "member 7".to_string()
            }
        );
        assert_eq!(
            library.take_back(MemberId::new(1001), ItemId::new(42)),
            ReturnOutcome::NotFound {
                target: "item 42".to_string()
            }
        );
        assert_eq!(library.stats().borrowed_items, 0);
    }

    #[test]
    fn direct_member_borrow_updates_roster_and_catalog() {
        let mut library = make_library();
        let member_id = MemberId::new(1001);

        let (member, item) = library.member_and_item_mut(member_id, ItemId::new(2)).unwrap();
        assert!(member.borrow_item(item).is_success());

        assert_eq!(
            library.find_item_by_id(ItemId::new(2)).map(|i| i.status()),
            Some(ItemStatus::Borrowed)
        );
        assert_eq!(library.find_member_by_name("张三").map(|m| m.borrowed_count()), Some(1));
        assert_eq!(library.stats().borrowed_items, 1);

        let (member, item) = library.member_and_item_mut(member_id, ItemId::new(2)).unwrap();
        assert!(member.return_item(item).is_success());
        assert_eq!(library.find_member_by_name("张三").map(|m| m.borrowed_count()), Some(0));
    }

    #[test]
    fn member_and_item_mut_misses() {
        let mut library = make_library();

        assert!(library.member_and_item_mut(MemberId::new(9), ItemId::new(1)).is_none());
        assert!(library.member_and_item_mut(MemberId::new(1001), ItemId::new(99)).is_none());
    }

    #[test]
    fn add_item_rejects_duplicate_id() {
        let mut library = make_library();
        let outside = Item::new(&mut IdAllocator::for_items(), "B", 2001, ItemDetails::novel("a", "g"));

        assert_eq!(library.add_item(outside), Err(LibraryError::DuplicateItemId(ItemId::new(1))));
        assert_eq!(library.items().len(), 4);
    }

    #[test]
    fn add_item_reserves_ids_past_the_allocator() {
        let mut library = make_library();
        let outside = Item::with_id(ItemId::new(10), "Outside", 2001, ItemDetails::magazine("p", 1));

        assert_eq!(library.add_item(outside), Ok(ItemId::new(10)));
        let next = library.catalog_item("Next", 2002, ItemDetails::novel("a", "g"));

        assert_eq!(next, ItemId::new(11));
        let ids: Vec<u32> = library.items().iter().map(|i| i.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 10, 11]);
    }

    #[test]
    fn add_item_below_allocator_keeps_sequence() {
        let mut library = LibraryManager::new();
        let early = Item::with_id(ItemId::new(3), "Early", 1999, ItemDetails::novel("a", "g"));
        library.add_item(early).unwrap();

        let ids: Vec<ItemId> = (0..3)
            .map(|i| library.catalog_item(format!("N{}", i), 2000, ItemDetails::novel("a", "g")))
            .collect();

        assert_eq!(ids, vec![ItemId::new(4), ItemId::new(5), ItemId::new(6)]);
    }

    #[test]
    fn register_member_rejects_duplicate_and_reserves() {
        let mut library = make_library();
        let joined = chrono::Utc::now();

        let clash = Member::with_id(MemberId::new(1002), "Bob", joined);
        assert_eq!(
            library.register_member(clash),
            Err(LibraryError::DuplicateMemberId(MemberId::new(1002)))
        );

        let outside = Member::with_id(MemberId::new(2000), "Carol", joined);
        assert_eq!(library.register_member(outside), Ok(MemberId::new(2000)));
        assert_eq!(library.enroll("Dave"), MemberId::new(2001));
        assert_eq!(library.members().len(), 4);
    }

    #[test]
    fn stats_breakdown() {
        let library = make_library();
        let stats = library.stats();

        assert_eq!(stats.total_items, 4);
        assert_eq!(stats.total_members, 2);
        assert_eq!(
            stats.by_media_type,
            vec![
                MediaTypeCount { media_type: MediaType::Novel, count: 2 },
                MediaTypeCount { media_type: MediaType::Magazine, count: 1 },
                MediaTypeCount { media_type: MediaType::Textbook, count: 1 },
            ]
        );
    }

    fn details_strategy() -> impl Strategy<Value = ItemDetails> {
        prop_oneof![
            Just(ItemDetails::novel("a", "g")),
            Just(ItemDetails::magazine("p", 1)),
            Just(ItemDetails::textbook("a", "s", "p")),
            Just(ItemDetails::reference_book("a", 2)),
            Just(ItemDetails::audio_book("a", "n", 60)),
        ]
    }

    proptest! {
        #[test]
        fn grouped_counts_sum_to_catalog_size(kinds in proptest::collection::vec(details_strategy(), 0..40)) {
            let mut library = LibraryManager::new();
            for (i, details) in kinds.into_iter().enumerate() {
                library.catalog_item(format!("Item {}", i), 2000, details);
            }

            let stats = library.stats();
            let counted: usize = stats.by_media_type.iter().map(|c| c.count).sum();
            prop_assert_eq!(counted, stats.total_items);
            prop_assert_eq!(library.catalog_report().item_count(), stats.total_items);
        }

        #[test]
        fn borrow_cap_is_never_exceeded(attempts in proptest::collection::vec(1u32..=8, 0..30)) {
            let mut library = LibraryManager::new();
            for i in 0..8 {
                library.catalog_item(format!("Item {}", i), 2000, ItemDetails::novel("a", "g"));
            }
            let member = library.enroll("张三");

            for (step, id) in attempts.into_iter().enumerate() {
                // Return every third step so the list shrinks as well as grows
                if step % 3 == 2 {
                    library.take_back(member, ItemId::new(id));
                } else {
                    library.lend(member, ItemId::new(id));
                }

                let held = library.find_member_by_id(member).map(|m| m.borrowed_count()).unwrap_or(0);
                prop_assert!(held <= crate::domain::member::BORROW_CAP);
                prop_assert_eq!(held, library.stats().borrowed_items);
            }
        }
    }
}
