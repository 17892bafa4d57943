use crate::commands::{CmdMessage, CmdResult, CoursePaths};
use crate::error::Result;
use crate::host::BLOB_DIR;
use crate::model::Scope;
use std::fs;

pub fn run(paths: &CoursePaths, scope: Scope) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    fs::create_dir_all(dir.join(BLOB_DIR))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized course store at {}",
        dir.display()
    )));
    Ok(result.with_paths(vec![dir]))
}
