//! Text or JSON lines on stdout, `--verbose` diagnostics on stderr

use serde::Serialize;
use std::fmt::Display;

use crate::storage;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<storage::OutputFormat> for OutputFormat {
    fn from(format: storage::OutputFormat) -> Self {
        match format {
            storage::OutputFormat::Text => OutputFormat::Text,
            storage::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Where command results go.
///
/// In JSON mode every result is one compact document per line and the
/// text-only helpers ([`heading`](Self::heading), [`blank`](Self::blank))
/// print nothing.
pub struct Output {
    json: bool,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self {
            json: format == OutputFormat::Json,
            verbose,
        }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn success(&self, message: &str) {
        self.message(true, message);
    }

    /// Something the command could not do, without failing the command
    pub fn notice(&self, message: &str) {
        self.message(false, message);
    }

    /// A borrow or return result: the serialized value in JSON mode, its
    /// display line otherwise
    pub fn outcome<T: Serialize + Display>(&self, ok: bool, outcome: &T) {
        if self.json {
            self.data(outcome);
        } else {
            self.message(ok, &outcome.to_string());
        }
    }

    /// Writes `value` as a single JSON line
    pub fn data<T: Serialize + ?Sized>(&self, value: &T) {
        match serde_json::to_string(value) {
            Ok(line) => println!("{}", line),
            Err(e) => eprintln!("Error: could not encode output: {}", e),
        }
    }

    pub fn heading(&self, title: &str) {
        if !self.json {
            println!("=== {} ===", title);
        }
    }

    pub fn blank(&self) {
        if !self.json {
            println!();
        }
    }

    /// `[verbose:<context>] message` on stderr when `--verbose` is set
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }

    fn message(&self, ok: bool, message: &str) {
        if self.json {
            self.data(&serde_json::json!({ "success": ok, "message": message }));
        } else {
            println!("{}", message);
        }
    }
}
