use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// Item identifier: milliseconds since the Unix epoch at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl ItemId {
    pub fn now() -> Self {
        ItemId(Utc::now().timestamp_millis())
    }

    /// The creation time encoded in the id, if it is a valid timestamp.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.0).single()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Module,
    Link,
    File,
}

impl ItemKind {
    /// Secondary line shown under the item name in a listing.
    pub fn subtitle(&self) -> &'static str {
        match self {
            ItemKind::Module => "Add item to this module",
            ItemKind::Link => "link",
            ItemKind::File => "PDF",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Module => write!(f, "module"),
            ItemKind::Link => write!(f, "link"),
            ItemKind::File => write!(f, "file"),
        }
    }
}

/// Opaque handle to a blob held by a [`crate::host::FileHost`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// File name as selected by the user
    pub name: String,
    /// Key of the stored copy inside the host's blob directory
    pub blob: String,
    pub size: u64,
}

/// Kind-specific payload. The variant is the item's kind, so a link always
/// carries a url, a file always carries a file reference, and a module
/// carries neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemContent {
    Module,
    Link { url: String },
    File { file: FileRef },
}

impl ItemContent {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemContent::Module => ItemKind::Module,
            ItemContent::Link { .. } => ItemKind::Link,
            ItemContent::File { .. } => ItemKind::File,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(flatten)]
    pub content: ItemContent,
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        self.content.kind()
    }

    pub fn url(&self) -> Option<&str> {
        match &self.content {
            ItemContent::Link { url } => Some(url),
            _ => None,
        }
    }

    pub fn file(&self) -> Option<&FileRef> {
        match &self.content {
            ItemContent::File { file } => Some(file),
            _ => None,
        }
    }

    /// Name to show in listings. Files may be committed without a name, in
    /// which case the selected file name stands in.
    pub fn display_name(&self) -> &str {
        match &self.content {
            ItemContent::File { file } if self.name.trim().is_empty() => &file.name,
            _ => &self.name,
        }
    }
}

/// An item that has not been added to a course yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub id: Option<ItemId>,
    pub name: String,
    pub content: ItemContent,
}

impl NewItem {
    pub fn module(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            content: ItemContent::Module,
        }
    }

    pub fn link(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            content: ItemContent::Link { url: url.into() },
        }
    }

    pub fn file(name: impl Into<String>, file: FileRef) -> Self {
        Self {
            id: None,
            name: name.into(),
            content: ItemContent::File { file },
        }
    }

    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Field replacements for an existing item. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub file: Option<FileRef>,
}

impl ItemPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_file(mut self, file: FileRef) -> Self {
        self.file = Some(file);
        self
    }
}
