use crate::commands::{CmdMessage, CmdResult, ItemEdit};
use crate::editor::{CommitOutcome, ItemEditor};
use crate::error::{CourseError, Result};
use crate::items::ItemStore;
use crate::menu::ItemMenu;
use crate::model::ItemKind;
use crate::store::DataStore;

use super::helpers::to_index;

/// Edit the item at a 1-based `position`, going through the same form the
/// item was created with: the form is seeded from the item, the requested
/// fields are overwritten, and the form is committed.
pub fn run<S: DataStore>(
    items: &mut ItemStore<S>,
    editor: &mut ItemEditor,
    menu: &mut ItemMenu,
    position: usize,
    edit: ItemEdit,
) -> Result<CmdResult> {
    let id = items.items()[to_index(items, position)?].id;
    menu.close();

    let mut result = CmdResult::default();
    if edit.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to change for item {}",
            position
        )));
        return Ok(result);
    }

    if !editor.open_edit(items, id) {
        return Err(CourseError::ItemNotFound(id));
    }
    let kind = editor.session().kind().unwrap_or(ItemKind::Module);

    if edit.url.is_some() && kind != ItemKind::Link {
        editor.close();
        return Err(CourseError::KindMismatch { kind, field: "url" });
    }
    if edit.file.is_some() && kind != ItemKind::File {
        editor.close();
        return Err(CourseError::KindMismatch { kind, field: "file" });
    }

    if let Some(name) = edit.name {
        match kind {
            ItemKind::Link => editor.set_link_name(name),
            ItemKind::Module | ItemKind::File => editor.set_name(name),
        }
    }
    if let Some(url) = edit.url {
        editor.set_link_url(url);
    }
    if let Some(file) = edit.file {
        editor.select_file(Some(file));
    }

    match editor.commit(items)? {
        CommitOutcome::Updated { index, .. } => {
            let item = items.items()[index].clone();
            result.add_message(CmdMessage::success(format!(
                "Updated {} ({}): {}",
                kind,
                position,
                item.display_name()
            )));
            result.affected_items.push(item);
        }
        CommitOutcome::Rejected(reason) => {
            editor.close();
            result.add_message(CmdMessage::error(format!(
                "Cannot update {} {}: {}",
                kind, position, reason
            )));
        }
        CommitOutcome::Created(_) => {}
    }
    Ok(result)
}
