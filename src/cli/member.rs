//! Member commands (members, find-member, borrow)

use super::app::Session;
use super::output::Output;
use super::report;
use crate::domain::ItemId;

pub fn show_members(output: &Output, session: &Session) {
    report::members(output, &session.library.member_report(), &session.date_format);
}

/// Look up a member by name
pub fn find_member(output: &Output, session: &Session, name: &str) {
    match session.library.find_member_by_name(name) {
        Some(member) if output.is_json() => output.data(member),
        Some(member) => println!("{}", member.identity_line(&session.date_format)),
        None => output.notice(&format!("No member named '{}'", name)),
    }
}

/// Borrow each id in turn for the named member, then show where things stand
pub fn borrow(output: &Output, session: &mut Session, name: &str, ids: &[ItemId]) {
    let Some(member_id) = session.library.find_member_by_name(name).map(|m| m.id) else {
        output.notice(&format!("No member named '{}'", name));
        return;
    };

    for id in ids {
        let outcome = session.library.lend(member_id, *id);
        output.verbose_ctx("borrow", &format!("{} -> {:?}", id, outcome));
        output.outcome(outcome.is_success(), &outcome);
    }

    output.blank();
    show_members(output, session);
}
