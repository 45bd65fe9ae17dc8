//! End-to-end lending scenario against the library API
//!
//! Members borrow and return through items looked up in the catalog, the
//! way an embedding application would drive the library.

use shelf_cli::domain::{
    BorrowOutcome, ItemId, ItemStatus, LibraryManager, MediaType, MemberId, ReturnOutcome,
};
use shelf_cli::storage::Seed;

fn member_id(library: &LibraryManager, name: &str) -> MemberId {
    library.find_member_by_name(name).map(|m| m.id).unwrap()
}

fn status_of(library: &LibraryManager, id: u32) -> ItemStatus {
    library.find_item_by_id(ItemId::new(id)).map(|i| i.status()).unwrap()
}

fn held_by(library: &LibraryManager, name: &str) -> Vec<u32> {
    library
        .find_member_by_name(name)
        .unwrap()
        .borrowed_items()
        .into_iter()
        .map(|id| id.value())
        .collect()
}

#[test]
fn seeded_catalog_layout() {
    let library = Seed::builtin().build();

    let ids: Vec<u32> = library.items().iter().map(|i| i.id.value()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert!(library.items().iter().all(|i| i.status() == ItemStatus::Available));

    let stats = library.stats();
    let counts: Vec<(MediaType, usize)> =
        stats.by_media_type.iter().map(|c| (c.media_type, c.count)).collect();
    assert_eq!(
        counts,
        vec![(MediaType::Novel, 2), (MediaType::Magazine, 1), (MediaType::Textbook, 2)]
    );
}

#[test]
fn full_lending_scenario() {
    let mut library = Seed::builtin().build();
    let zhang = member_id(&library, "张三");
    let li = member_id(&library, "李四");

    for id in [1, 3, 4] {
        assert!(library.lend(zhang, ItemId::new(id)).is_success());
        assert_eq!(status_of(&library, id), ItemStatus::Borrowed);
    }
    assert_eq!(held_by(&library, "张三"), vec![1, 3, 4]);

    // Fourth attempt hits the cap and leaves item 2 untouched
    let refused = library.lend(zhang, ItemId::new(2));
    assert_eq!(
        refused,
        BorrowOutcome::LimitReached {
            member: "张三".to_string(),
            held: 3
        }
    );
    assert_eq!(status_of(&library, 2), ItemStatus::Available);
    assert_eq!(held_by(&library, "张三").len(), 3);

    assert!(library.lend(li, ItemId::new(2)).is_success());

    let stats = library.stats();
    assert_eq!(stats.borrowed_items, 4);
    assert_eq!(stats.total_items, 5);
    assert_eq!(stats.total_members, 2);

    let returned = library.take_back(zhang, ItemId::new(1));
    assert_eq!(
        returned,
        ReturnOutcome::Returned {
            member: "张三".to_string(),
            title: "三体".to_string()
        }
    );
    assert_eq!(status_of(&library, 1), ItemStatus::Available);
    assert_eq!(held_by(&library, "张三"), vec![3, 4]);
    assert_eq!(library.stats().borrowed_items, 3);

    let members = library.member_report();
    assert_eq!(members[0].borrowed.len(), 2);
    assert_eq!(members[1].borrowed[0].title, "活着");
}

#[test]
fn returning_an_item_someone_else_holds() {
    let mut library = Seed::builtin().build();
    let zhang = member_id(&library, "张三");
    let li = member_id(&library, "李四");

    assert!(library.lend(zhang, ItemId::new(5)).is_success());

    let outcome = library.take_back(li, ItemId::new(5));
    assert!(matches!(outcome, ReturnOutcome::NotBorrowed { .. }));
    assert_eq!(outcome.to_string(), "李四 did not borrow '高等数学'");
    assert_eq!(status_of(&library, 5), ItemStatus::Borrowed);
    assert_eq!(held_by(&library, "张三"), vec![5]);
}

#[test]
fn member_operations_through_catalog_lookup() {
    let mut library = Seed::builtin().build();
    let zhang = member_id(&library, "张三");

    let (member, item) = library.member_and_item_mut(zhang, ItemId::new(3)).unwrap();
    assert!(member.borrow_item(item).is_success());

    // Both the roster and the catalog see the change made through the member
    assert_eq!(status_of(&library, 3), ItemStatus::Borrowed);
    assert_eq!(library.find_member_by_name("张三").unwrap().borrowed_count(), 1);
    assert_eq!(held_by(&library, "张三"), vec![3]);

    let (member, item) = library.member_and_item_mut(zhang, ItemId::new(3)).unwrap();
    assert!(member.return_item(item).is_success());
    assert_eq!(status_of(&library, 3), ItemStatus::Available);
    assert_eq!(library.find_member_by_name("张三").unwrap().borrowed_count(), 0);
}

#[test]
fn display_details_after_scenario() {
    let mut library = Seed::builtin().build();
    let zhang = member_id(&library, "张三");
    library.lend(zhang, ItemId::new(1));
    library.take_back(zhang, ItemId::new(1));

    let details = library.find_item_by_id(ItemId::new(1)).unwrap().details();
    assert_eq!(
        details,
        "[1] 三体 (Novel, 2008) - author: 刘慈欣; genre: 科幻; status: available"
    );
}
