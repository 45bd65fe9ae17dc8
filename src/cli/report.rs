//! Text/JSON rendering of library reports

use super::output::Output;
use crate::domain::{format_join_date, CatalogReport, MemberReport, StatsReport};

/// Catalog grouped by media type
pub fn catalog(output: &Output, report: &CatalogReport) {
    if output.is_json() {
        output.data(report);
        return;
    }

    output.heading("Catalog");
    if report.is_empty() {
        println!("The catalog is empty.");
        return;
    }

    for group in &report.groups {
        println!("{} ({}):", group.media_type, group.items.len());
        for item in &group.items {
            println!("  {}", item.details());
        }
    }
}

/// Members in roster order with the items they hold
pub fn members(output: &Output, report: &[MemberReport], date_format: &str) {
    if output.is_json() {
        output.data(&report);
        return;
    }

    output.heading("Members");
    if report.is_empty() {
        println!("No members registered.");
        return;
    }

    for member in report {
        println!(
            "[{}] {} (joined {})",
            member.id,
            member.name,
            format_join_date(member.joined_at, date_format)
        );
        if member.borrowed.is_empty() {
            println!("  No items borrowed.");
        } else {
            for item in &member.borrowed {
                println!("  - {} ({})", item.title, item.media_type);
            }
        }
    }
}

/// Library totals and per-type breakdown
pub fn stats(output: &Output, report: &StatsReport) {
    if output.is_json() {
        output.data(report);
        return;
    }

    output.heading("Statistics");
    println!("{:<10} {}", "Items:", report.total_items);
    println!("{:<10} {}", "Members:", report.total_members);
    println!("{:<10} {}", "Borrowed:", report.borrowed_items);
    if !report.by_media_type.is_empty() {
        println!("By type:");
        for entry in &report.by_media_type {
            println!("  {:<16} {}", format!("{}:", entry.media_type), entry.count);
        }
    }
}
