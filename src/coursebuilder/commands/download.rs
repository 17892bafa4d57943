use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CourseError, Result};
use crate::host::FileHost;
use crate::items::ItemStore;
use crate::store::DataStore;
use std::path::Path;

use super::helpers::to_index;

/// Save the file attached to the item at 1-based `position` into `dest_dir`.
pub fn run<S: DataStore, H: FileHost>(
    items: &ItemStore<S>,
    host: &H,
    position: usize,
    dest_dir: &Path,
) -> Result<CmdResult> {
    let item = &items.items()[to_index(items, position)?];
    let file = item.file().ok_or(CourseError::NotAFile(item.id))?;

    let path = host.export(file, dest_dir)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Downloaded {} to {}",
        file.name,
        path.display()
    )));
    Ok(result.with_paths(vec![path]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::LocalFileHost;
    use crate::model::NewItem;
    use crate::store::memory::InMemoryStore;
    use crate::store::DEFAULT_KEY;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn downloads_attached_file() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("notes.pdf");
        fs::write(&source, b"notes").unwrap();
        let host = LocalFileHost::new(temp.path().join("blobs"));
        let file = host.import(&source).unwrap();

        let mut items = ItemStore::load(InMemoryStore::new(), DEFAULT_KEY).unwrap();
        items.append(NewItem::file("Notes", file)).unwrap();

        let out = temp.path().join("out");
        let result = run(&items, &host, 1, &out).unwrap();

        assert_eq!(result.paths, vec![out.join("notes.pdf")]);
        assert_eq!(fs::read(out.join("notes.pdf")).unwrap(), b"notes");
    }

    #[test]
    fn module_has_nothing_to_download() {
        let temp = TempDir::new().unwrap();
        let host = LocalFileHost::new(temp.path().join("blobs"));
        let mut items = ItemStore::load(InMemoryStore::new(), DEFAULT_KEY).unwrap();
        items.append(NewItem::module("Week 1")).unwrap();

        let result = run(&items, &host, 1, temp.path());
        assert!(matches!(result, Err(CourseError::NotAFile(_))));
    }
}
