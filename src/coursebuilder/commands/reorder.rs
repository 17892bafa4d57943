use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::items::ItemStore;
use crate::store::DataStore;

use super::helpers::{display_items, to_index};

/// Move the item at 1-based position `from` so that it ends up at `to`.
pub fn run<S: DataStore>(items: &mut ItemStore<S>, from: usize, to: usize) -> Result<CmdResult> {
    let source = to_index(items, from)?;
    let destination = to_index(items, to)?;
    let mut result = CmdResult::default();

    if items.reorder(source, Some(destination))? {
        let moved = items.items()[destination].clone();
        result.add_message(CmdMessage::success(format!(
            "Moved {} from {} to {}: {}",
            moved.kind(),
            from,
            to,
            moved.display_name()
        )));
        result.affected_items.push(moved);
    } else {
        result.add_message(CmdMessage::info(format!(
            "Item {} is already at position {}",
            from, to
        )));
    }

    Ok(result.with_listed_items(display_items(items)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;
    use crate::store::DEFAULT_KEY;

    #[test]
    fn moves_item_and_lists_new_order() {
        let fixture = StoreFixture::new().with_modules(3);
        let mut items = ItemStore::load(fixture.store, DEFAULT_KEY).unwrap();

        let result = run(&mut items, 3, 1).unwrap();

        let order: Vec<_> = result
            .listed_items
            .iter()
            .map(|d| d.item.name.as_str())
            .collect();
        assert_eq!(order, vec!["Week 3", "Week 1", "Week 2"]);
        assert_eq!(result.affected_items[0].name, "Week 3");
    }

    #[test]
    fn same_position_is_informational() {
        let fixture = StoreFixture::new().with_modules(2);
        let mut items = ItemStore::load(fixture.store, DEFAULT_KEY).unwrap();
        let writes = items.data_store().write_count();

        let result = run(&mut items, 2, 2).unwrap();

        assert!(result.affected_items.is_empty());
        assert_eq!(items.data_store().write_count(), writes);
    }

    #[test]
    fn out_of_range_is_an_error() {
        let fixture = StoreFixture::new().with_modules(2);
        let mut items = ItemStore::load(fixture.store, DEFAULT_KEY).unwrap();
        assert!(run(&mut items, 1, 3).is_err());
        assert!(run(&mut items, 0, 1).is_err());
    }
}
