//! # Item Editor
//!
//! Items are never created or changed field by field. A UI opens a form
//! (create or edit), fills in scratch fields as the user types, and commits.
//! [`ItemEditor`] tracks which form is open and what is in it:
//!
//! ```text
//!            open_create(kind)                 commit (valid)
//!   Idle ───────────────────────▶ Creating ─────────────────────▶ Idle
//!    │                                                              ▲
//!    │       open_edit(id)                     commit (valid)       │
//!    └──────────────────────────▶ Editing ──────────────────────────┘
//!
//!   close() returns to Idle from anywhere and clears the scratch fields.
//!   An invalid commit changes nothing: the form stays open as it was.
//! ```
//!
//! An edit form remembers the item's id, not its position. The position is
//! looked up again at commit, so an edit always lands on the item it was
//! opened for even if the course changed in between.
//!
//! Only one form exists at a time. Opening a form while another is open
//! replaces it.

use crate::error::Result;
use crate::items::ItemStore;
use crate::model::{FileRef, ItemContent, ItemId, ItemKind, ItemPatch, NewItem};
use crate::store::DataStore;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Idle,
    Creating(ItemKind),
    Editing {
        kind: ItemKind,
        id: ItemId,
    },
}

impl Session {
    pub fn kind(&self) -> Option<ItemKind> {
        match self {
            Session::Idle => None,
            Session::Creating(kind) | Session::Editing { kind, .. } => Some(*kind),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Session::Editing { .. })
    }

    /// Heading for the open form.
    pub fn title(&self) -> Option<&'static str> {
        let title = match self {
            Session::Idle => return None,
            Session::Creating(ItemKind::Module) => "Create new module",
            Session::Creating(ItemKind::Link) => "Add a Link",
            Session::Creating(ItemKind::File) => "Upload a file",
            Session::Editing { kind: ItemKind::Module, .. } => "Edit module",
            Session::Editing { kind: ItemKind::Link, .. } => "Edit link",
            Session::Editing { kind: ItemKind::File, .. } => "Edit file",
        };
        Some(title)
    }

    /// Label of the open form's confirm button.
    pub fn submit_label(&self) -> Option<&'static str> {
        let label = match self {
            Session::Idle => return None,
            Session::Editing { .. } => "Update",
            Session::Creating(ItemKind::Module) => "Create",
            Session::Creating(ItemKind::Link) => "Add",
            Session::Creating(ItemKind::File) => "Upload",
        };
        Some(label)
    }
}

/// Unsaved form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scratch {
    /// Module name, or the display name of a file
    pub name: String,
    pub link_url: String,
    pub link_name: String,
    pub selected_file: Option<FileRef>,
}

/// Why a commit was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NoActiveForm,
    MissingName,
    MissingUrl,
    MissingFile,
    /// The item being edited was removed while the form was open
    ItemGone,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Rejection::NoActiveForm => "no form is open",
            Rejection::MissingName => "a name is required",
            Rejection::MissingUrl => "a URL is required",
            Rejection::MissingFile => "a file must be selected",
            Rejection::ItemGone => "the item no longer exists",
        };
        write!(f, "{}", msg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Created(ItemId),
    Updated { index: usize, id: ItemId },
    Rejected(Rejection),
}

#[derive(Debug, Default)]
pub struct ItemEditor {
    session: Session,
    scratch: Scratch,
}

impl ItemEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn scratch(&self) -> &Scratch {
        &self.scratch
    }

    pub fn open_create(&mut self, kind: ItemKind) {
        self.scratch = Scratch::default();
        self.session = Session::Creating(kind);
        debug!(%kind, "opened create form");
    }

    /// Open the edit form for `id`, seeded with the item's current values.
    /// Returns false, leaving the editor untouched, if no such item exists.
    pub fn open_edit<S: DataStore>(&mut self, items: &ItemStore<S>, id: ItemId) -> bool {
        let Some(index) = items.position_of(id) else {
            return false;
        };
        let item = &items.items()[index];

        let mut scratch = Scratch::default();
        match &item.content {
            ItemContent::Module => scratch.name = item.name.clone(),
            ItemContent::Link { url } => {
                scratch.link_url = url.clone();
                scratch.link_name = item.name.clone();
            }
            ItemContent::File { file } => {
                scratch.name = item.name.clone();
                scratch.selected_file = Some(file.clone());
            }
        }

        self.scratch = scratch;
        self.session = Session::Editing {
            kind: item.kind(),
            id,
        };
        debug!(%id, index, "opened edit form");
        true
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.scratch.name = name.into();
    }

    pub fn set_link_url(&mut self, url: impl Into<String>) {
        self.scratch.link_url = url.into();
    }

    pub fn set_link_name(&mut self, name: impl Into<String>) {
        self.scratch.link_name = name.into();
    }

    pub fn select_file(&mut self, file: Option<FileRef>) {
        self.scratch.selected_file = file;
    }

    /// Validate the open form and write it to `items`.
    ///
    /// A rejected commit is not an error: the form and the collection are
    /// left exactly as they were. Store errors propagate, also leaving the
    /// form open.
    pub fn commit<S: DataStore>(&mut self, items: &mut ItemStore<S>) -> Result<CommitOutcome> {
        let Some(kind) = self.session.kind() else {
            return Ok(CommitOutcome::Rejected(Rejection::NoActiveForm));
        };
        if let Err(rejection) = self.validate(kind) {
            debug!(%kind, %rejection, "commit rejected");
            return Ok(CommitOutcome::Rejected(rejection));
        }

        let outcome = match self.session {
            Session::Editing { id, .. } => {
                let index = match items.position_of(id) {
                    Some(index) if items.items()[index].kind() == kind => index,
                    _ => {
                        debug!(%id, "commit rejected, item gone");
                        return Ok(CommitOutcome::Rejected(Rejection::ItemGone));
                    }
                };
                items.update_at(index, self.patch(kind))?;
                CommitOutcome::Updated { index, id }
            }
            _ => CommitOutcome::Created(items.append(self.new_item(kind))?),
        };
        self.close();
        Ok(outcome)
    }

    /// Discard the open form, if any.
    pub fn close(&mut self) {
        self.session = Session::Idle;
        self.scratch = Scratch::default();
    }

    fn validate(&self, kind: ItemKind) -> std::result::Result<(), Rejection> {
        let s = &self.scratch;
        match kind {
            ItemKind::Module if s.name.trim().is_empty() => Err(Rejection::MissingName),
            ItemKind::Link if s.link_url.trim().is_empty() => Err(Rejection::MissingUrl),
            ItemKind::Link if s.link_name.trim().is_empty() => Err(Rejection::MissingName),
            ItemKind::File if s.selected_file.is_none() => Err(Rejection::MissingFile),
            _ => Ok(()),
        }
    }

    fn patch(&self, kind: ItemKind) -> ItemPatch {
        let s = &self.scratch;
        match kind {
            ItemKind::Module => ItemPatch::name(s.name.clone()),
            ItemKind::Link => ItemPatch::name(s.link_name.clone()).with_url(s.link_url.clone()),
            ItemKind::File => ItemPatch {
                name: Some(s.name.clone()),
                url: None,
                file: s.selected_file.clone(),
            },
        }
    }

    fn new_item(&self, kind: ItemKind) -> NewItem {
        let s = &self.scratch;
        match (kind, &s.selected_file) {
            (ItemKind::Link, _) => NewItem::link(s.link_name.clone(), s.link_url.clone()),
            (ItemKind::File, Some(file)) => NewItem::file(s.name.clone(), file.clone()),
            _ => NewItem::module(s.name.clone()),
        }
    }
}
