//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all course operations, regardless of the UI being used.
//!
//! `CourseApi` owns everything a UI session needs: the [`ItemStore`], the
//! [`ItemEditor`] holding the open form, the [`ItemMenu`], and the
//! [`FileHost`] that keeps uploaded files. UIs never mutate the item
//! collection directly; every change funnels through a method here.
//!
//! ## Generic Over DataStore and FileHost
//!
//! - Production: `CourseApi<FileStore, LocalFileHost>`
//! - Testing: `CourseApi<InMemoryStore, LocalFileHost>` over a temp directory
//!
//! ## Positions
//!
//! Methods taking `position` use 1-based positions as shown in listings.
//! Methods taking an [`ItemId`] act on a specific item regardless of where
//! it currently sits.

use crate::commands;
use crate::editor::{CommitOutcome, ItemEditor};
use crate::error::{CourseError, Result};
use crate::host::FileHost;
use crate::items::ItemStore;
use crate::menu::ItemMenu;
use crate::model::{Item, ItemId, ItemKind, Scope};
use crate::store::DataStore;
use std::path::Path;

pub struct CourseApi<S: DataStore, H: FileHost> {
    items: ItemStore<S>,
    editor: ItemEditor,
    menu: ItemMenu,
    host: H,
    paths: commands::CoursePaths,
}

impl<S: DataStore, H: FileHost> CourseApi<S, H> {
    pub fn new(items: ItemStore<S>, host: H, paths: commands::CoursePaths) -> Self {
        Self {
            items,
            editor: ItemEditor::new(),
            menu: ItemMenu::new(),
            host,
            paths,
        }
    }

    pub fn items(&self) -> &[Item] {
        self.items.items()
    }

    pub fn editor(&self) -> &ItemEditor {
        &self.editor
    }

    pub fn menu(&self) -> &ItemMenu {
        &self.menu
    }

    pub fn list_items(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.items)
    }

    pub fn create_module(&mut self, name: String) -> Result<commands::CmdResult> {
        commands::create::module(&mut self.items, &mut self.editor, name)
    }

    pub fn add_link(&mut self, name: String, url: String) -> Result<commands::CmdResult> {
        commands::create::link(&mut self.items, &mut self.editor, name, url)
    }

    /// Upload the file at `source`. The host keeps its own copy.
    pub fn upload_file(&mut self, name: String, source: &Path) -> Result<commands::CmdResult> {
        let file = self.host.import(source)?;
        commands::create::file(&mut self.items, &mut self.editor, name, Some(file))
    }

    pub fn edit_item(
        &mut self,
        position: usize,
        name: Option<String>,
        url: Option<String>,
        file: Option<&Path>,
    ) -> Result<commands::CmdResult> {
        let file = file.map(|path| self.host.import(path)).transpose()?;
        let edit = commands::ItemEdit { name, url, file };
        commands::edit::run(
            &mut self.items,
            &mut self.editor,
            &mut self.menu,
            position,
            edit,
        )
    }

    pub fn delete_items(&mut self, positions: &[usize]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.items, &mut self.menu, positions)
    }

    pub fn move_item(&mut self, from: usize, to: usize) -> Result<commands::CmdResult> {
        commands::reorder::run(&mut self.items, from, to)
    }

    pub fn download_item(&self, position: usize, dest_dir: &Path) -> Result<commands::CmdResult> {
        commands::download::run(&self.items, &self.host, position, dest_dir)
    }

    // --- Open form ---
    //
    // A form opened by `begin_create`, `begin_edit`, or left open by a
    // rejected create, is filled in and finished through these.

    pub fn begin_create(&mut self, kind: ItemKind) {
        self.menu.close();
        self.editor.open_create(kind);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.editor.set_name(name);
    }

    pub fn set_link_url(&mut self, url: impl Into<String>) {
        self.editor.set_link_url(url);
    }

    pub fn set_link_name(&mut self, name: impl Into<String>) {
        self.editor.set_link_name(name);
    }

    /// Hand the file at `source` to the host and select it in the open form.
    pub fn select_file(&mut self, source: &Path) -> Result<()> {
        let file = self.host.import(source)?;
        self.editor.select_file(Some(file));
        Ok(())
    }

    pub fn commit_form(&mut self) -> Result<CommitOutcome> {
        self.editor.commit(&mut self.items)
    }

    pub fn close_form(&mut self) {
        self.editor.close();
    }

    // --- Per-item menu ---

    pub fn toggle_menu(&mut self, id: ItemId) {
        self.menu.toggle(id);
    }

    /// Menu "Edit": open the edit form for `id`.
    pub fn begin_edit(&mut self, id: ItemId) -> Result<()> {
        if !self.editor.open_edit(&self.items, id) {
            return Err(CourseError::ItemNotFound(id));
        }
        self.menu.close();
        Ok(())
    }

    /// Menu "Delete": remove `id`. Missing ids are ignored.
    pub fn delete_by_id(&mut self, id: ItemId) -> Result<Option<Item>> {
        let removed = self.items.remove_by_id(id)?;
        self.menu.close();
        Ok(removed)
    }

    pub fn config(
        &self,
        scope: Scope,
        action: commands::config::ConfigAction,
    ) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn init(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths, scope)
    }

    pub fn paths(&self) -> &commands::CoursePaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, CoursePaths, DisplayItem, MessageLevel};
