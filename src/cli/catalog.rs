//! Catalog commands (catalog, stats, show)

use super::app::Session;
use super::output::Output;
use super::report;
use crate::domain::ItemId;

pub fn show_catalog(output: &Output, session: &Session) {
    let catalog = session.library.catalog_report();
    output.verbose_ctx("catalog", &format!("{} media groups", catalog.groups.len()));
    report::catalog(output, &catalog);
}

pub fn show_stats(output: &Output, session: &Session) {
    report::stats(output, &session.library.stats());
}

/// Show one item's details
pub fn show_item(output: &Output, session: &Session, id: ItemId) {
    match session.library.find_item_by_id(id) {
        Some(item) if output.is_json() => output.data(item),
        Some(item) => println!("{}", item.details()),
        None => output.notice(&format!("No item with ID {}", id)),
    }
}
