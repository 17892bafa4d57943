use crate::commands::DisplayItem;
use crate::error::{CourseError, Result};
use crate::items::ItemStore;
use crate::model::ItemId;
use crate::store::DataStore;

pub fn display_items<S: DataStore>(items: &ItemStore<S>) -> Vec<DisplayItem> {
    items
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| DisplayItem {
            position: i + 1,
            item: item.clone(),
        })
        .collect()
}

/// Convert a 1-based position into a 0-based index into `items`.
pub fn to_index<S: DataStore>(items: &ItemStore<S>, position: usize) -> Result<usize> {
    if position == 0 || position > items.len() {
        return Err(CourseError::Api(format!(
            "Position {} not found (course has {} items)",
            position,
            items.len()
        )));
    }
    Ok(position - 1)
}

/// Resolve 1-based positions to item ids, so that later removals do not shift
/// what the remaining positions point at.
pub fn resolve_positions<S: DataStore>(
    items: &ItemStore<S>,
    positions: &[usize],
) -> Result<Vec<(usize, ItemId)>> {
    positions
        .iter()
        .map(|&position| {
            let index = to_index(items, position)?;
            Ok((position, items.items()[index].id))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;
    use crate::store::DEFAULT_KEY;

    #[test]
    fn positions_are_one_based() {
        let fixture = StoreFixture::new().with_modules(3);
        let items = ItemStore::load(fixture.store, DEFAULT_KEY).unwrap();

        assert_eq!(to_index(&items, 1).unwrap(), 0);
        assert_eq!(to_index(&items, 3).unwrap(), 2);
        assert!(to_index(&items, 0).is_err());
        assert!(to_index(&items, 4).is_err());

        let listed = display_items(&items);
        assert_eq!(listed[2].position, 3);
        assert_eq!(listed[2].item.name, "Week 3");
    }

    #[test]
    fn resolves_all_or_nothing() {
        let fixture = StoreFixture::new().with_modules(2);
        let items = ItemStore::load(fixture.store, DEFAULT_KEY).unwrap();

        let resolved = resolve_positions(&items, &[2, 1]).unwrap();
        assert_eq!(resolved[0], (2, items.get(1).unwrap().id));
        assert!(resolve_positions(&items, &[1, 9]).is_err());
    }
}
