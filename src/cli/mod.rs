//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `demo` | Scripted borrow/return walkthrough |
//! | `catalog` | Catalog grouped by media type |
//! | `stats` | Item, member and loan totals |
//! | `members` | Members and what they hold |
//! | `show <id>` | One item's details |
//! | `find-member <name>` | Member lookup |
//! | `borrow <member> <id>...` | Borrow items for a member |
//!
//! Every invocation starts from a freshly built library (see
//! [`crate::storage::Seed`]); nothing carries over between runs.
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr. This also raises the
//! log level of the library's own `log` records; `RUST_LOG` overrides it.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod report;
mod catalog;
mod member;
mod demo;

pub use app::{run, Cli, Commands, Session};
pub use output::{Output, OutputFormat};
