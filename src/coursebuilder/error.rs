use crate::model::{ItemId, ItemKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourseError {
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("Position {index} is out of range (course has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cannot move item from {from} to {to} (course has {len} items)")]
    InvalidMove { from: usize, to: usize, len: usize },

    #[error("Cannot set {field} on a {kind} item")]
    KindMismatch { kind: ItemKind, field: &'static str },

    #[error("An item with id {0} already exists")]
    DuplicateId(ItemId),

    #[error("No id left after {0}")]
    IdsExhausted(ItemId),

    #[error("Item {0} has no file attached")]
    NotAFile(ItemId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CourseError>;
