//! Scripted lending demonstration
//!
//! Always runs against the built-in catalog so the borrow sequence below
//! lines up with known item ids.

use anyhow::{anyhow, Result};

use super::output::Output;
use super::report;
use crate::domain::{ItemId, LibraryManager, MemberId};
use crate::storage::Seed;

/// (member, item id) pairs borrowed in order; the fourth hits the borrow cap
const BORROWS: [(&str, u32); 5] = [("张三", 1), ("张三", 3), ("张三", 4), ("张三", 2), ("李四", 2)];

/// Item returned by the first member once the borrows are done
const RETURNED: (&str, u32) = ("张三", 1);

pub fn run(output: &Output, date_format: &str) -> Result<()> {
    let mut library = Seed::builtin().build();

    output.heading("Populating catalog");
    for item in library.items() {
        output.success(&format!("Added to catalog: {}", item));
    }
    for member in library.members() {
        output.success(&format!("Registered member: {}", member.identity_line(date_format)));
    }

    output.blank();
    report::catalog(output, &library.catalog_report());
    output.blank();
    report::stats(output, &library.stats());

    output.blank();
    output.heading("Borrowing");
    for (name, id) in BORROWS {
        let member = member_id(&library, name)?;
        let outcome = library.lend(member, ItemId::new(id));
        output.outcome(outcome.is_success(), &outcome);
    }

    output.blank();
    report::members(output, &library.member_report(), date_format);

    output.blank();
    output.heading("Returning");
    let (name, id) = RETURNED;
    let outcome = library.take_back(member_id(&library, name)?, ItemId::new(id));
    output.outcome(outcome.is_success(), &outcome);

    output.blank();
    report::members(output, &library.member_report(), date_format);
    output.blank();
    report::stats(output, &library.stats());

    output.blank();
    output.heading("Item details");
    match library.find_item_by_id(ItemId::new(id)) {
        Some(item) if output.is_json() => output.data(item),
        Some(item) => println!("{}", item.details()),
        None => output.notice(&format!("No item with ID {}", id)),
    }

    Ok(())
}

fn member_id(library: &LibraryManager, name: &str) -> Result<MemberId> {
    library
        .find_member_by_name(name)
        .map(|m| m.id)
        .ok_or_else(|| anyhow!("demo member '{}' is missing from the built-in seed", name))
}
