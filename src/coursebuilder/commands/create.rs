use crate::commands::{CmdMessage, CmdResult};
use crate::editor::{CommitOutcome, ItemEditor};
use crate::error::Result;
use crate::items::ItemStore;
use crate::model::{FileRef, ItemKind};
use crate::store::DataStore;

pub fn module<S: DataStore>(
    items: &mut ItemStore<S>,
    editor: &mut ItemEditor,
    name: String,
) -> Result<CmdResult> {
    editor.open_create(ItemKind::Module);
    editor.set_name(name);
    finish(items, editor, ItemKind::Module)
}

pub fn link<S: DataStore>(
    items: &mut ItemStore<S>,
    editor: &mut ItemEditor,
    name: String,
    url: String,
) -> Result<CmdResult> {
    editor.open_create(ItemKind::Link);
    editor.set_link_name(name);
    editor.set_link_url(url);
    finish(items, editor, ItemKind::Link)
}

pub fn file<S: DataStore>(
    items: &mut ItemStore<S>,
    editor: &mut ItemEditor,
    name: String,
    file: Option<FileRef>,
) -> Result<CmdResult> {
    editor.open_create(ItemKind::File);
    editor.set_name(name);
    editor.select_file(file);
    finish(items, editor, ItemKind::File)
}

fn finish<S: DataStore>(
    items: &mut ItemStore<S>,
    editor: &mut ItemEditor,
    kind: ItemKind,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match editor.commit(items)? {
        CommitOutcome::Created(id) => {
            // Just committed, so it is there
            if let Some(item) = items.find(id) {
                result.add_message(CmdMessage::success(format!(
                    "Added {} ({}): {}",
                    kind,
                    items.len(),
                    item.display_name()
                )));
                result.affected_items.push(item.clone());
            }
        }
        CommitOutcome::Rejected(reason) => {
            result.add_message(CmdMessage::error(format!(
                "Cannot add {}: {}",
                kind, reason
            )));
        }
        CommitOutcome::Updated { .. } => {}
    }
    Ok(result)
}
