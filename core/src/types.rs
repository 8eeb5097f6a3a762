//! Domain types mirrored between local state and the remote collection.
//!
//! # Design
//! Ids are assigned by the remote resource and treated as opaque keys: the
//! client never mints one, only echoes them back into per-item URLs. The
//! reference deployment uses integers, other backends use strings, so
//! `ItemId` decodes either without caring which.
//!
//! Remote objects routinely carry fields the client does not model (`body`,
//! `userId`, ...). `Item` keeps those in a flattened map so they round-trip
//! untouched if the item is ever reserialized.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Remote-assigned identifier of an item, opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(u64),
    Str(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(n) => write!(f, "{n}"),
            ItemId::Str(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        ItemId::Int(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Str(s.to_string())
    }
}

/// A single item in the collection, as returned by the remote resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    /// Remote fields the client does not interpret, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, title: &str) -> Self {
        Self {
            id: id.into(),
            title: title.to_string(),
            extra: Map::new(),
        }
    }
}

/// Request payload for creating a new item. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItem {
    pub title: String,
}

/// Request payload for retitling an existing item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItem {
    pub title: String,
}
