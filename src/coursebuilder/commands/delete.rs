use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::items::ItemStore;
use crate::menu::ItemMenu;
use crate::store::DataStore;

use super::helpers::resolve_positions;

pub fn run<S: DataStore>(
    items: &mut ItemStore<S>,
    menu: &mut ItemMenu,
    positions: &[usize],
) -> Result<CmdResult> {
    let resolved = resolve_positions(items, positions)?;
    let ids: Vec<_> = resolved.iter().map(|&(_, id)| id).collect();
    let removed = items.remove_all_by_id(&ids)?;

    let mut result = CmdResult::default();
    for item in removed {
        let position = resolved
            .iter()
            .find(|&&(_, id)| id == item.id)
            .map_or(0, |&(position, _)| position);
        result.add_message(CmdMessage::success(format!(
            "Deleted {} ({}): {}",
            item.kind(),
            position,
            item.display_name()
        )));
        result.affected_items.push(item);
    }
    menu.close();

    Ok(result)
}
