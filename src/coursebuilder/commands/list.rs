use crate::commands::CmdResult;
use crate::error::Result;
use crate::items::ItemStore;
use crate::store::DataStore;

use super::helpers::display_items;

pub fn run<S: DataStore>(items: &ItemStore<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_items(display_items(items)))
}
