//! Seed data for building a library
//!
//! Nothing is persisted between runs: every invocation builds a fresh
//! library from a seed. The built-in seed is the demonstration catalog; a TOML
//! seed file can replace it.
//!
//! ```toml
//! [[items]]
//! kind = "novel"
//! title = "三体"
//! year = 2008
//! author = "刘慈欣"
//! genre = "科幻"
//!
//! [[members]]
//! name = "张三"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{ItemDetails, ItemStatus, LibraryManager};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file: {0}")]
    Parse(String),
}

/// A catalog entry in a seed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedItem {
    pub title: String,
    pub year: i32,

    /// Starting status; only needed for items that are reserved or under repair
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,

    #[serde(flatten)]
    pub details: ItemDetails,
}

/// A member in a seed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedMember {
    pub name: String,
}

/// Catalog and roster contents, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub items: Vec<SeedItem>,
    pub members: Vec<SeedMember>,
}

impl Seed {
    /// The demonstration catalog: two novels, a magazine, two textbooks and
    /// two members
    pub fn builtin() -> Self {
        let item = |title: &str, year: i32, details: ItemDetails| SeedItem {
            title: title.to_string(),
            year,
            status: None,
            details,
        };

        Self {
            items: vec![
                item("三体", 2008, ItemDetails::novel("刘慈欣", "科幻")),
                item("活着", 1993, ItemDetails::novel("余华", "文学")),
                item("读者", 2024, ItemDetails::magazine("读者出版社", 12)),
                item(
                    "数据结构",
                    2020,
                    ItemDetails::textbook("严蔚敏", "计算机科学", "清华大学出版社"),
                ),
                item(
                    "高等数学",
                    2014,
                    ItemDetails::textbook("同济大学数学系", "数学", "高等教育出版社"),
                ),
            ],
            members: vec![
                SeedMember {
                    name: "张三".to_string(),
                },
                SeedMember {
                    name: "李四".to_string(),
                },
            ],
        }
    }

    /// Parses a seed from TOML text
    pub fn parse(content: &str) -> Result<Self, SeedError> {
        toml::from_str(content).map_err(|e| SeedError::Parse(e.to_string()))
    }

    /// Reads and parses a seed file
    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let content = fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Builds a fresh library holding the seed's items and members
    pub fn build(&self) -> LibraryManager {
        let mut library = LibraryManager::new();

        for entry in &self.items {
            let id = library.catalog_item(entry.title.clone(), entry.year, entry.details.clone());
            if let Some(status) = entry.status {
                if let Some(item) = library.find_item_mut(id) {
                    item.set_status(status);
                }
            }
        }

        for member in &self.members {
            library.enroll(member.name.clone());
        }

        library
    }
}
